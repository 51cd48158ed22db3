//! Lenient numeric coercion
//!
//! Text values are read up to the first character that cannot continue a
//! number, so `"12abc"` reads as 12 and `"59N"` as 59. Text with no numeric
//! prefix reads as NaN instead of failing.

use crate::coordinate::constants::{FLOAT_PREFIX_REGEX, INT_PREFIX_REGEX};

/// Read the leading integer of `text`, or NaN if there is none
pub fn leading_int(text: &str) -> f64 {
    INT_PREFIX_REGEX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Read the leading floating-point number of `text`, or NaN if there is none
pub fn leading_float(text: &str) -> f64 {
    FLOAT_PREFIX_REGEX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
