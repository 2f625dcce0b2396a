//! Pocket Calc CLI: handheld calculator in the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc press 2 + 3 × 4 =        # prints 20
//! pocket-calc press --trace 7 ÷ 0 =    # display after every key
//! pocket-calc repl                     # one line of keys at a time
//! pocket-calc --format json config     # effective configuration
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use pocket_calc::config::CalculatorConfig;
use pocket_calc_cli::{
    logging, press_tokens, run_repl, Cli, CliConfig, CliResult, ColorChoice, Commands, PressArgs,
    Renderer, Verbosity,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let config = build_config(&cli);
    logging::init_tracing(config.verbosity);
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Press(args) => run_press(&config, &args),
        Commands::Repl(_) => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout().lock();
            run_repl(&config, stdin.lock(), &mut stdout)
        }
        Commands::Config(_) => run_config(&config),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.clone().into();

    let mut calculator = CalculatorConfig::new();
    if let Some(digits) = cli.max_digits {
        calculator = calculator.with_max_entry_digits(usize::from(digits));
    }
    if let Some(text) = &cli.error_text {
        calculator = calculator.with_error_text(text.clone());
    }

    CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_format(cli.format.clone().into())
        .with_calculator(calculator)
}

fn run_press(config: &CliConfig, args: &PressArgs) -> CliResult<()> {
    let report = press_tokens(config, args.keys.as_slice(), args.trace)?;
    let renderer = Renderer::new(config.format, config.color.should_color());

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", renderer.report(&report)?)?;
    Ok(())
}

fn run_config(config: &CliConfig) -> CliResult<()> {
    let renderer = Renderer::new(config.format, false);
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", renderer.config(config)?)?;
    Ok(())
}
