//! Display text formatting and parsing

/// Values at or above this magnitude print in exponent form
const EXPONENT_THRESHOLD: f64 = 1e16;

/// Non-zero values below this magnitude print in exponent form
const SMALL_EXPONENT_THRESHOLD: f64 = 1e-6;

/// Formats a value for the display
///
/// Integral values print without a fractional part and `-0` prints as `0`.
/// Very large and very small magnitudes use exponent form.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(SMALL_EXPONENT_THRESHOLD..EXPONENT_THRESHOLD).contains(&magnitude) {
        format!("{value:e}")
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Reads the value shown on the display
///
/// Text that is not a finite number (the error indicator, an empty
/// display) reads as `0`.
#[must_use]
pub fn parse_display(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
