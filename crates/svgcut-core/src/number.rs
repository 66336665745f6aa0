//! Numeric normalization
//!
//! Every coordinate read from a drawing passes through [`parse_decimal`], which
//! rounds to [`PRECISION`] fractional digits. Upstream CAD exports are already
//! rounded, so exact equality of normalized values is the geometric equality
//! used everywhere else.

use crate::error::ParseError;

/// Number of fractional digits kept for every coordinate
pub const PRECISION: u32 = 4;

/// `10^PRECISION`, the scale between a coordinate and its integer key
pub const SCALE: f64 = 10_000.0;

/// Largest coordinate magnitude accepted from path data or attributes.
///
/// Scaled by [`SCALE`] this stays below 2^53, so every accepted value has an
/// exact, distinct integer key.
pub const MAX_MAGNITUDE: f64 = 1.0e11;

/// Round a value to [`PRECISION`] fractional digits.
///
/// Halves round away from zero and `-0.0` collapses to `0.0`, so values that
/// print the same also compare equal.
pub fn round_to_precision(value: f64) -> f64 {
    let rounded = (value * SCALE).round() / SCALE;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Parse a base-10 decimal token into a rounded value.
///
/// Accepts an optional sign, digits and at most one dot (`12`, `-3.5`, `.25`,
/// `4.`). Exponents, `inf`, `NaN`, magnitudes above [`MAX_MAGNITUDE`] and
/// anything else are rejected.
pub fn parse_decimal(token: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        token: token.to_string(),
    };

    if !is_plain_decimal(token) {
        return Err(invalid());
    }

    let value = token.parse::<f64>().map_err(|_| invalid())?;
    if value.abs() > MAX_MAGNITUDE {
        return Err(invalid());
    }
    Ok(round_to_precision(value))
}

fn is_plain_decimal(token: &str) -> bool {
    let digits = token.strip_prefix(&['+', '-'][..]).unwrap_or(token);
    let mut seen_digit = false;
    let mut seen_dot = false;

    for ch in digits.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }

    seen_digit
}

/// Render a value with a dot separator and no exponent.
///
/// The value is rounded first, so the output never carries more than
/// [`PRECISION`] fractional digits and never reads `-0`.
pub fn format_decimal(value: f64) -> String {
    format!("{}", round_to_precision(value))
}

/// Integer key of a rounded coordinate, exact for hashing and ordering
pub fn to_key(value: f64) -> i64 {
    (value * SCALE).round() as i64
}
