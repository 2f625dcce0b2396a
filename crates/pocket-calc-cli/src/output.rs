//! Output formatting for key sessions

use console::style;
use pocket_calc::keypad::CalculatorApp;
use serde::{Deserialize, Serialize};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Display after a single key press
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Key label, or the input line that was entered
    pub key: String,
    /// Display text after the key
    pub display: String,
    /// Whether the error indicator is shown
    pub error: bool,
}

impl Step {
    /// Snapshot of `app` after `key` was pressed
    #[must_use]
    pub fn capture(key: impl Into<String>, app: &CalculatorApp) -> Self {
        Self {
            key: key.into(),
            display: app.display().to_string(),
            error: app.error().is_some(),
        }
    }
}

/// Outcome of a key session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Final display text
    pub display: String,
    /// Whether the session ended on the error indicator
    pub error: bool,
    /// Per-key snapshots (empty unless tracing)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub steps: Vec<Step>,
}

impl SessionReport {
    /// Report for the current state of `app`
    #[must_use]
    pub fn new(app: &CalculatorApp, steps: Vec<Step>) -> Self {
        Self {
            display: app.display().to_string(),
            error: app.error().is_some(),
            steps,
        }
    }
}

/// Renders reports in the chosen format
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    use_color: bool,
}

impl Renderer {
    /// Create a renderer
    #[must_use]
    pub const fn new(format: OutputFormat, use_color: bool) -> Self {
        Self { format, use_color }
    }

    /// Renders display text, highlighting the error indicator
    #[must_use]
    pub fn display(&self, text: &str, error: bool) -> String {
        if error && self.use_color {
            style(text).red().bold().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    /// Renders a single step
    pub fn step(&self, step: &Step) -> CliResult<String> {
        match self.format {
            OutputFormat::Text => Ok(format!(
                "{} -> {}",
                step.key,
                self.display(&step.display, step.error)
            )),
            OutputFormat::Json => Ok(serde_json::to_string(step)?),
        }
    }

    /// Renders the display after one line of interactive input
    pub fn line(&self, step: &Step) -> CliResult<String> {
        match self.format {
            OutputFormat::Text => Ok(self.display(&step.display, step.error)),
            OutputFormat::Json => Ok(serde_json::to_string(step)?),
        }
    }

    /// Renders a full session report
    pub fn report(&self, report: &SessionReport) -> CliResult<String> {
        match self.format {
            OutputFormat::Text => {
                let mut lines = report
                    .steps
                    .iter()
                    .map(|step| self.step(step))
                    .collect::<CliResult<Vec<_>>>()?;
                lines.push(self.display(&report.display, report.error));
                Ok(lines.join("\n"))
            }
            OutputFormat::Json => Ok(serde_json::to_string(report)?),
        }
    }

    /// Renders the effective configuration
    pub fn config(&self, config: &CliConfig) -> CliResult<String> {
        match self.format {
            OutputFormat::Text => Ok([
                format!("verbosity: {:?}", config.verbosity),
                format!("color: {:?}", config.color),
                format!("format: {:?}", config.format),
                format!("max_entry_digits: {}", config.calculator.max_entry_digits),
                format!("error_text: {}", config.calculator.error_text),
            ]
            .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        }
    }
}
