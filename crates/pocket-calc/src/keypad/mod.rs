//! Headless handheld-calculator front end
//!
//! Turns button presses into engine calls and keeps the display text.

mod app;
pub mod display;
mod key;

pub use app::CalculatorApp;
pub use key::{Key, KeyParseError};
