//! Coordinate parsing, formatting, validation and comparison
//!
//! This module provides the `Coordinate` type for a single latitude or
//! longitude value, written in decimal degrees, degrees/minutes/seconds or
//! degrees/decimal-minutes, with an optional compass direction.

pub(crate) mod constants;
mod axis;
mod direction;
mod format;
mod parser;
mod validation;
mod value;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::axis::Axis;
pub use self::constants::DEFAULT_PRECISION;
pub use self::direction::Direction;
pub use self::parser::{parse, Component, CoordinateInput};
pub use self::value::Coordinate;
