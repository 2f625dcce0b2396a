//! Key session runner
//!
//! Feeds tokens from the command line or stdin into a [`CalculatorApp`].

use std::io::{BufRead, Write};

use pocket_calc::keypad::{CalculatorApp, Key, KeyParseError};
use tracing::{debug, info, warn};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{Renderer, SessionReport, Step};

/// Words that end a REPL session
const QUIT_WORDS: [&str; 3] = ["q", "quit", "exit"];

/// Parses one input token into key presses
///
/// A token is either a single key label (`7`, `×`, `AC`, `+/-`) or a
/// number such as `12.5`, which expands to one press per character.
pub fn parse_token(token: &str) -> Result<Vec<Key>, KeyParseError> {
    if let Ok(key) = token.parse::<Key>() {
        return Ok(vec![key]);
    }
    let is_number = !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !is_number {
        return Err(KeyParseError(token.to_string()));
    }
    token
        .chars()
        .map(|c| c.to_string().parse::<Key>())
        .collect()
}

/// Runs a one-shot session over `tokens`
///
/// Fails on the first token that is not a key; nothing is pressed in
/// that case.
pub fn press_tokens<S: AsRef<str>>(
    config: &CliConfig,
    tokens: &[S],
    trace: bool,
) -> CliResult<SessionReport> {
    let mut keys = Vec::new();
    for token in tokens {
        keys.extend(parse_token(token.as_ref())?);
    }

    let mut app = CalculatorApp::with_config(config.calculator.clone());
    let mut steps = Vec::new();
    for key in keys {
        app.press(key);
        if trace {
            steps.push(Step::capture(key.label(), &app));
        }
    }

    info!(display = app.display(), "session finished");
    Ok(SessionReport::new(&app, steps))
}

/// Runs an interactive session, one display line per input line
///
/// Unknown tokens are logged and skipped.
pub fn run_repl<R: BufRead, W: Write>(config: &CliConfig, input: R, out: &mut W) -> CliResult<()> {
    let renderer = Renderer::new(config.format, config.color.should_color());
    let mut app = CalculatorApp::with_config(config.calculator.clone());

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&line) {
            debug!("quit requested");
            break;
        }

        for token in line.split_whitespace() {
            match parse_token(token) {
                Ok(keys) => {
                    app.press_all(keys);
                }
                Err(err) => warn!(%err, "skipping token"),
            }
        }

        let step = Step::capture(line, &app);
        writeln!(out, "{}", renderer.line(&step)?)?;
    }
    out.flush()?;
    Ok(())
}
