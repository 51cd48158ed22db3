//! # Overview
//! Parse, validate, format and compare a single latitude or longitude
//! value written in any of the usual notations:
//!
//! * signed decimal degrees: `-123.4567`
//! * degrees/minutes/seconds: `123°27'24.12" W`, `N12 32 13.44`
//! * degrees/decimal-minutes: `12°30.5'S`
//!
//! # Usage
//! ```rust
//! use magellan::{Coordinate, Direction};
//!
//! let longitude = Coordinate::from_decimal(-123.4567).as_longitude().unwrap();
//! assert_eq!(longitude.direction(), Some(Direction::West));
//! assert_eq!(longitude.to_dms(None), "123°27'24.1200\"W");
//!
//! let same = Coordinate::parse("123°27'24.12\" W");
//! assert!(same.equals(&longitude));
//! ```

pub mod config;
pub mod coordinate;
pub mod errors;
mod utils;

pub use config::FormatOptions;
pub use coordinate::{Axis, Component, Coordinate, CoordinateInput, Direction};
pub use errors::{CoordinateError, CoordinateResult};

/// Library version, taken from the package manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
