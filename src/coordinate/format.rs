//! Rendering coordinates as text
//!
//! Three notations are produced: signed decimal degrees (`-123.4560`),
//! degrees/minutes/seconds (`123°27'21.6000"W`) and degrees/decimal-minutes
//! (`123°27.3600'W`).
//!
//! DMS and DM output is built from components joined by an optional
//! separator. The direction is always the last component, even when it is
//! absent, so a separator is also placed before an empty direction:
//! `12° 20' 44.1600" ` for an unvalidated coordinate.
//!
//! Only the seconds are rounded for display. A value just below a whole
//! minute can therefore show `60.0000` seconds; it is not carried into the
//! minutes.

use std::fmt;

use super::constants::{marks, DEFAULT_PRECISION};
use super::value::{Coordinate, Sexagesimal};
use crate::config::FormatOptions;

/// Empty coordinates render as a zero angle
const ZERO: Sexagesimal = Sexagesimal {
    degrees: 0.0,
    minutes: 0.0,
    seconds: 0.0,
    negative: false,
};

impl Coordinate {
    fn angle_or_zero(&self) -> Sexagesimal {
        self.angle.unwrap_or(ZERO)
    }

    fn direction_component(&self) -> String {
        self.direction.map(|d| d.to_string()).unwrap_or_default()
    }

    /// Values that round to zero at `precision` render unsigned
    pub(crate) fn format_decimal(&self, precision: usize) -> String {
        let text = format!("{:.*}", precision, self.decimal_degrees());
        match text.strip_prefix('-') {
            Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
            _ => text,
        }
    }

    /// Decimal degrees at 4 decimal places, negative for S and W
    pub fn to_dd(&self) -> String {
        self.format_decimal(DEFAULT_PRECISION)
    }

    /// Degrees, minutes and seconds, seconds at 4 decimal places
    ///
    /// With a separator, it goes between every pair of components,
    /// including before the (possibly empty) direction.
    ///
    /// ```rust
    /// use magellan::{Coordinate, CoordinateInput};
    ///
    /// let c = Coordinate::from_input(CoordinateInput::Decimal(123.456), Some("E"));
    /// assert_eq!(c.to_dms(None), "123°27'21.6000\"E");
    /// assert_eq!(c.to_dms(Some("q")), "123°q27'q21.6000\"qE");
    /// ```
    pub fn to_dms(&self, separator: Option<&str>) -> String {
        self.render_dms(DEFAULT_PRECISION, separator)
    }

    /// Degrees and decimal minutes, minutes at 4 decimal places
    pub fn to_dm(&self, separator: Option<&str>) -> String {
        self.render_dm(DEFAULT_PRECISION, separator)
    }

    /// Decimal degrees using the precision from `options`
    pub fn format_dd(&self, options: &FormatOptions) -> String {
        self.format_decimal(options.precision)
    }

    /// DMS text using the precision and separator from `options`
    pub fn format_dms(&self, options: &FormatOptions) -> String {
        self.render_dms(options.precision, options.separator.as_deref())
    }

    /// DM text using the precision and separator from `options`
    pub fn format_dm(&self, options: &FormatOptions) -> String {
        self.render_dm(options.precision, options.separator.as_deref())
    }

    fn render_dms(&self, precision: usize, separator: Option<&str>) -> String {
        let angle = self.angle_or_zero();
        let components = [
            format!("{}{}", angle.degrees.abs(), marks::DEGREE),
            format!("{}{}", angle.minutes, marks::MINUTE),
            format!("{:.*}{}", precision, angle.seconds, marks::SECOND),
            self.direction_component(),
        ];
        components.join(separator.unwrap_or(""))
    }

    fn render_dm(&self, precision: usize, separator: Option<&str>) -> String {
        let angle = self.angle_or_zero();
        let components = [
            format!("{}{}", angle.degrees.abs(), marks::DEGREE),
            format!("{:.*}{}", precision, angle.decimal_minutes(), marks::MINUTE),
            self.direction_component(),
        ];
        components.join(separator.unwrap_or(""))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dms(None))
    }
}
