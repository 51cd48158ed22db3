//! Custom error types for coordinate handling

use std::fmt;

use crate::coordinate::{Axis, Direction};

/// Errors produced while validating coordinates or loading options
#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// Nothing was parsed, so there is no value to validate
    Empty,
    /// Whole degrees exceed the axis bound
    OutOfRange { axis: Axis, degrees: f64 },
    /// Degrees sit on the axis bound but minutes or seconds are not zero
    NonZeroAtBoundary { axis: Axis, minutes: f64, seconds: f64 },
    /// Minutes or seconds fall outside [0, 60)
    ComponentOutOfRange { minutes: f64, seconds: f64 },
    /// The direction letter belongs to the other axis
    WrongHemisphere { axis: Axis, direction: Direction },
    /// Rendering options could not be read
    InvalidConfig(String),
}

impl fmt::Display for CoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateError::Empty => write!(f, "Coordinate is empty"),
            CoordinateError::OutOfRange { axis, degrees } => {
                write!(f, "{} degrees out of range (max {}): {}", axis, axis.bound(), degrees)
            },
            CoordinateError::NonZeroAtBoundary { axis, minutes, seconds } => write!(
                f,
                "{} at {} degrees must have zero minutes and seconds, got {}' {}\"",
                axis, axis.bound(), minutes, seconds
            ),
            CoordinateError::ComponentOutOfRange { minutes, seconds } => {
                write!(f, "Minutes and seconds must be in [0, 60), got {}' {}\"", minutes, seconds)
            },
            CoordinateError::WrongHemisphere { axis, direction } => {
                write!(f, "Direction {} is not valid for {}", direction, axis)
            },
            CoordinateError::InvalidConfig(msg) => write!(f, "Invalid format options: {}", msg),
        }
    }
}

impl std::error::Error for CoordinateError {}

impl From<toml::de::Error> for CoordinateError {
    fn from(error: toml::de::Error) -> Self {
        CoordinateError::InvalidConfig(error.to_string())
    }
}

/// Result type for coordinate operations
pub type CoordinateResult<T> = Result<T, CoordinateError>;
