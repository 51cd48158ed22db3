//! Latitude and longitude validation
//!
//! A coordinate is a legal value on an axis with bound B and directions
//! {P, Q} when:
//! 1. whole degrees are at most B in magnitude,
//! 2. at exactly B, minutes and seconds are both zero,
//! 3. minutes and seconds are each in [0, 60),
//! 4. the direction, if present, is P or Q.
//!
//! A coordinate that passes comes back with its direction resolved. When no
//! direction was given it is taken from the sign the value was parsed
//! with: positive values get P, zero and negative values get Q.
//!
//! A given direction is kept as is and is not checked against the parsed
//! sign, so `-12` tagged `E` is a valid longitude that still renders as
//! `-12.0000`.

use log::debug;

use super::axis::Axis;
use super::constants::SEXAGESIMAL_BASE;
use super::value::Coordinate;
use crate::errors::{CoordinateError, CoordinateResult};

impl Coordinate {
    /// Validate as a latitude, resolving the direction to N or S
    ///
    /// ```rust
    /// use magellan::{Coordinate, Direction};
    ///
    /// let c = Coordinate::from_decimal(0.1).as_latitude().unwrap();
    /// assert_eq!(c.direction(), Some(Direction::North));
    /// assert!(Coordinate::from_decimal(90.000001).as_latitude().is_err());
    /// ```
    pub fn as_latitude(&self) -> CoordinateResult<Coordinate> {
        self.validate(Axis::Latitude)
    }

    /// Validate as a longitude, resolving the direction to E or W
    pub fn as_longitude(&self) -> CoordinateResult<Coordinate> {
        self.validate(Axis::Longitude)
    }

    /// Validate against `axis`
    ///
    /// # Returns
    /// A copy of this coordinate with its direction set, or the first rule
    /// that failed. `self` is left unchanged either way.
    pub fn validate(&self, axis: Axis) -> CoordinateResult<Coordinate> {
        let result = self.check(axis);
        match &result {
            Ok(c) => debug!("{} valid as {} ({:?})", c.to_dms(None), axis, c.direction),
            Err(e) => debug!("{:?} rejected: {}", self, e),
        }
        result
    }

    fn check(&self, axis: Axis) -> CoordinateResult<Coordinate> {
        let angle = self.angle.ok_or(CoordinateError::Empty)?;
        let bound = axis.bound();
        let degrees = angle.degrees.abs();

        // Written so that NaN fails every comparison
        if !(degrees <= bound) {
            return Err(CoordinateError::OutOfRange {
                axis,
                degrees: angle.degrees,
            });
        }

        if degrees == bound && !(angle.minutes == 0.0 && angle.seconds == 0.0) {
            return Err(CoordinateError::NonZeroAtBoundary {
                axis,
                minutes: angle.minutes,
                seconds: angle.seconds,
            });
        }

        let in_base = |v: f64| v >= 0.0 && v < SEXAGESIMAL_BASE;
        if !(in_base(angle.minutes) && in_base(angle.seconds)) {
            return Err(CoordinateError::ComponentOutOfRange {
                minutes: angle.minutes,
                seconds: angle.seconds,
            });
        }

        let direction = match self.direction {
            Some(direction) if axis.allows(direction) => direction,
            Some(direction) => return Err(CoordinateError::WrongHemisphere { axis, direction }),
            None if !angle.negative && angle.magnitude() > 0.0 => axis.positive(),
            None => axis.negative(),
        };

        Ok(Coordinate::from_parts(angle, Some(direction)))
    }
}
