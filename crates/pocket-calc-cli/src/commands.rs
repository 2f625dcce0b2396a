//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Handheld four-function calculator driven by key labels
#[derive(Parser, Debug)]
#[command(name = "pocket-calc", version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    pub format: FormatArg,

    /// Maximum digits accepted per entry
    #[arg(long, global = true, value_parser = clap::value_parser!(u16).range(1..=300))]
    pub max_digits: Option<u16>,

    /// Text shown after an arithmetic error
    #[arg(long, global = true)]
    pub error_text: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys in order and print the display
    Press(PressArgs),

    /// Read keys from stdin, printing the display after each line
    Repl(ReplArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for `press`
#[derive(Args, Debug)]
pub struct PressArgs {
    /// Key labels such as `12 + 3 × 4 =` (`AC`, `+/-`, `%` included)
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for `repl`
#[derive(Args, Debug, Default)]
pub struct ReplArgs {}

/// Arguments for `config`
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

/// Output format argument for CLI
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// JSON
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
