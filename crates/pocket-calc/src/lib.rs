//! Pocket Calc - Four-Function Calculator Engine
//!
//! A handheld-style calculator with immediate, left-to-right evaluation:
//! no precedence, no parentheses, one pending operator at a time.
//!
//! - [`core`]: the arithmetic state machine ([`core::Engine`])
//! - [`keypad`]: a headless front end that owns the display text and
//!   turns button presses into engine calls
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut engine = Engine::new();
//! assert_eq!(engine.set_operation(2.0, Operation::Add), Ok(None));
//! assert_eq!(engine.set_operation(3.0, Operation::Multiply), Ok(Some(5.0)));
//! assert_eq!(engine.calculate_result(4.0), Ok(Some(20.0)));
//!
//! let mut app = CalculatorApp::new();
//! for label in ["7", "÷", "0", "="] {
//!     app.press_label(label).unwrap();
//! }
//! assert_eq!(app.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::CalculatorConfig;
    pub use crate::core::{CalcError, CalcResult, Engine, Operation};
    pub use crate::keypad::{CalculatorApp, Key, KeyParseError};
}
