//! Axes a coordinate can be validated against

use std::fmt;

use super::constants::{LATITUDE_BOUND, LONGITUDE_BOUND};
use super::direction::Direction;

/// Latitude or longitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// North/south, bounded by +/- 90 degrees
    Latitude,
    /// East/west, bounded by +/- 180 degrees
    Longitude,
}

impl Axis {
    /// Largest whole-degree magnitude on this axis
    pub fn bound(&self) -> f64 {
        match self {
            Axis::Latitude => LATITUDE_BOUND,
            Axis::Longitude => LONGITUDE_BOUND,
        }
    }

    /// Direction of positive values
    pub fn positive(&self) -> Direction {
        match self {
            Axis::Latitude => Direction::North,
            Axis::Longitude => Direction::East,
        }
    }

    /// Direction of zero and negative values
    pub fn negative(&self) -> Direction {
        match self {
            Axis::Latitude => Direction::South,
            Axis::Longitude => Direction::West,
        }
    }

    /// Whether `direction` belongs to this axis
    pub fn allows(&self, direction: Direction) -> bool {
        direction == self.positive() || direction == self.negative()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "Latitude"),
            Axis::Longitude => write!(f, "Longitude"),
        }
    }
}
