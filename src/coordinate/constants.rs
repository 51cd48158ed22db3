//! Coordinate constants
//!
//! Numeric limits, notation marks and the text patterns the parser
//! matches against.

use lazy_static::lazy_static;
use regex::Regex;

/// Fractional digits used by `to_dd`, `to_dms`, `to_dm` and comparison
pub const DEFAULT_PRECISION: usize = 4;

/// Largest precision accepted from format options
pub const MAX_PRECISION: usize = 12;

/// Largest whole-degree magnitude of a latitude
pub const LATITUDE_BOUND: f64 = 90.0;

/// Largest whole-degree magnitude of a longitude
pub const LONGITUDE_BOUND: f64 = 180.0;

/// Minutes per degree and seconds per minute
pub const SEXAGESIMAL_BASE: f64 = 60.0;

/// Seconds per degree
pub const SECONDS_PER_DEGREE: f64 = 3600.0;

/// Notation marks
pub mod marks {
    pub const DEGREE: char = '°';
    pub const MINUTE: char = '\'';
    pub const SECOND: char = '"';
}

lazy_static! {
    /// Signed decimal degrees, e.g. `-123.45`
    pub static ref DD_FORMAT_REGEX: Regex =
        Regex::new(r"^(?P<deg>[+-]?\d{1,3})(?P<frac>\.\d+)?$").unwrap();

    /// Degrees with optional minutes and seconds or decimal minutes, and a
    /// leading or trailing direction letter, e.g. `12°34'56" N`,
    /// `N12°34'56.123"`, `12 34.5` or `12`
    pub static ref DMS_FORMAT_REGEX: Regex = Regex::new(concat!(
        r"(?i)^[NSEW]?\s*",
        r"(?P<deg>\d{1,3})°?\s*",
        r"(?:(?P<min>\d{1,2})",
        r#"(?:(?P<minfrac>\.\d+)'?|'?\s*(?:(?P<sec>\d{1,2}(?:\.\d+)?)"?)?))?"#,
        r"\s*[NSEW]?$",
    ))
    .unwrap();

    /// Leading integer prefix of a text value
    pub static ref INT_PREFIX_REGEX: Regex = Regex::new(r"^[+-]?\d+").unwrap();

    /// Leading floating-point prefix of a text value
    pub static ref FLOAT_PREFIX_REGEX: Regex =
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
}
