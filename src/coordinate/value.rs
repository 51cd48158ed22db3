//! The coordinate value type and its comparison

use super::constants::{DEFAULT_PRECISION, SECONDS_PER_DEGREE, SEXAGESIMAL_BASE};
use super::direction::Direction;

/// Whole degrees, whole minutes and fractional seconds of one angle
///
/// `degrees` and `minutes` hold whole numbers, or NaN when the input had
/// nothing numeric in that position. The sign of the angle as it was parsed
/// is kept in `negative`, since `degrees` truncates to zero for magnitudes
/// below one degree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sexagesimal {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub negative: bool,
}

impl Sexagesimal {
    /// Build from explicit components; the sign comes from `degrees`
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> Self {
        Sexagesimal {
            degrees,
            minutes,
            seconds,
            negative: degrees.is_sign_negative() && !degrees.is_nan(),
        }
    }

    /// Build from whole `degrees` plus a non-negative fraction of a degree
    pub fn from_fraction(degrees: f64, fraction: f64) -> Self {
        let total_minutes = fraction * SEXAGESIMAL_BASE;
        let minutes = total_minutes.trunc();
        let seconds = (total_minutes - minutes) * SEXAGESIMAL_BASE;
        Sexagesimal::new(degrees, minutes, seconds)
    }

    /// Build from signed decimal degrees
    pub fn from_decimal(value: f64) -> Self {
        let degrees = value.trunc();
        Sexagesimal::from_fraction(degrees, (value - degrees).abs())
    }

    /// Unsigned angle in decimal degrees
    pub fn magnitude(&self) -> f64 {
        self.degrees.abs() + self.minutes / SEXAGESIMAL_BASE + self.seconds / SECONDS_PER_DEGREE
    }

    /// Minutes including the seconds as a fraction of a minute
    pub fn decimal_minutes(&self) -> f64 {
        self.minutes + self.seconds / SEXAGESIMAL_BASE
    }
}

/// A single latitude or longitude value
///
/// Built by the parser from decimal degrees, DMS/DM text or a
/// degrees/minutes/seconds triple. A coordinate built from input that could
/// not be parsed is *empty*: it has no components and no direction.
///
/// The direction is only ever filled in by validation, which returns a new
/// coordinate rather than changing this one:
///
/// ```rust
/// use magellan::{Coordinate, Direction};
///
/// let parsed = Coordinate::from_decimal(-0.1);
/// assert_eq!(parsed.direction(), None);
///
/// let latitude = parsed.as_latitude().unwrap();
/// assert_eq!(latitude.direction(), Some(Direction::South));
/// assert_eq!(latitude.to_dd(), "-0.1000");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Coordinate {
    pub(crate) angle: Option<Sexagesimal>,
    pub(crate) direction: Option<Direction>,
}

impl Coordinate {
    /// Create an empty coordinate
    pub fn new() -> Self {
        Coordinate::default()
    }

    pub(crate) fn from_parts(angle: Sexagesimal, direction: Option<Direction>) -> Self {
        Coordinate {
            angle: Some(angle),
            direction,
        }
    }

    /// Whole degrees, signed as parsed
    pub fn degrees(&self) -> Option<f64> {
        self.angle.map(|a| a.degrees)
    }

    /// Whole minutes
    pub fn minutes(&self) -> Option<f64> {
        self.angle.map(|a| a.minutes)
    }

    /// Fractional seconds
    pub fn seconds(&self) -> Option<f64> {
        self.angle.map(|a| a.seconds)
    }

    /// Direction letter, if one was supplied or resolved by validation
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// True when nothing was parsed
    pub fn is_empty(&self) -> bool {
        self.angle.is_none()
    }

    /// True when the input carried a minus sign or an S/W direction
    pub fn is_negative(&self) -> bool {
        let signed = self.angle.map_or(false, |a| a.negative);
        signed || self.direction.map_or(false, |d| d.is_negative())
    }

    /// Canonical signed value in decimal degrees
    ///
    /// An empty coordinate counts as zero. Zero is never negative.
    pub fn decimal_degrees(&self) -> f64 {
        let magnitude = match self.angle {
            Some(angle) => angle.magnitude(),
            None => return 0.0,
        };

        if magnitude == 0.0 {
            0.0
        } else if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Whether both coordinates have the same decimal value at 4 places,
    /// whatever notation either was parsed from
    pub fn equals(&self, other: &Coordinate) -> bool {
        self.format_decimal(DEFAULT_PRECISION) == other.format_decimal(DEFAULT_PRECISION)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

// Comparison goes through the rendered text, where NaN renders as "NaN",
// so every coordinate equals itself.
impl Eq for Coordinate {}
