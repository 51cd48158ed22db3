//! Parsing coordinates from heterogeneous input
//!
//! Input is one of a degrees/minutes/seconds triple, a line of text in
//! decimal degrees or DMS/DM notation, a signed decimal number, or nothing.
//! Parsing never fails: input that cannot be read gives an empty
//! coordinate.

use log::debug;

use super::constants::{DD_FORMAT_REGEX, DMS_FORMAT_REGEX, SEXAGESIMAL_BASE};
use super::direction::Direction;
use super::value::{Coordinate, Sexagesimal};
use crate::utils::number_utils::{leading_float, leading_int};

/// One value of a degrees/minutes/seconds triple
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Component<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> Component<'a> {
    /// Coerce to a whole number, truncating toward zero
    fn as_whole(&self) -> f64 {
        match self {
            Component::Number(n) => n.trunc(),
            Component::Text(s) => leading_int(s),
        }
    }

    fn as_float(&self) -> f64 {
        match self {
            Component::Number(n) => *n,
            Component::Text(s) => leading_float(s),
        }
    }
}

impl From<f64> for Component<'_> {
    fn from(value: f64) -> Self {
        Component::Number(value)
    }
}

impl<'a> From<&'a str> for Component<'a> {
    fn from(value: &'a str) -> Self {
        Component::Text(value)
    }
}

/// The shapes of input a coordinate can be parsed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateInput<'a> {
    /// Degrees, minutes and seconds given separately
    Triple(Component<'a>, Component<'a>, Component<'a>),
    /// Decimal degrees or DMS/DM text, e.g. `-123.45` or `12°34'56" N`
    Text(&'a str),
    /// Signed decimal degrees
    Decimal(f64),
    /// No input at all
    Nothing,
}

impl From<f64> for CoordinateInput<'_> {
    fn from(value: f64) -> Self {
        CoordinateInput::Decimal(value)
    }
}

impl<'a> From<&'a str> for CoordinateInput<'a> {
    fn from(value: &'a str) -> Self {
        CoordinateInput::Text(value)
    }
}

/// Parse `input` into a coordinate
///
/// The direction is searched for in `direction` when given, otherwise in
/// the text of the input itself (the whole text, or the seconds of a
/// triple). The first N/S/E/W letter found, in either case, is used.
///
/// # Arguments
/// * `input` - The value to parse
/// * `direction` - Optional text holding a direction letter
///
/// # Returns
/// The parsed coordinate, empty if nothing could be read
pub fn parse(input: CoordinateInput<'_>, direction: Option<&str>) -> Coordinate {
    let angle = match input {
        CoordinateInput::Triple(degrees, minutes, seconds) => Some(parse_triple(degrees, minutes, seconds)),
        CoordinateInput::Text(text) => parse_text(text),
        CoordinateInput::Decimal(value) => {
            debug!("Parsing decimal degrees {}", value);
            Some(Sexagesimal::from_decimal(value))
        },
        CoordinateInput::Nothing => None,
    };

    let angle = match angle {
        Some(angle) => angle,
        None => return Coordinate::new(),
    };

    let direction_text = direction.or(match input {
        CoordinateInput::Text(text) => Some(text),
        CoordinateInput::Triple(_, _, Component::Text(seconds)) => Some(seconds),
        _ => None,
    });
    let direction = direction_text.and_then(Direction::find_in);

    Coordinate::from_parts(angle, direction)
}

fn parse_triple(degrees: Component<'_>, minutes: Component<'_>, seconds: Component<'_>) -> Sexagesimal {
    let angle = Sexagesimal::new(degrees.as_whole(), minutes.as_whole(), seconds.as_float());
    debug!("Parsed triple {:?} {:?} {:?} as {:?}", degrees, minutes, seconds, angle);
    angle
}

/// Match `text` as decimal degrees first, then as DMS/DM
fn parse_text(text: &str) -> Option<Sexagesimal> {
    let text = text.trim();

    if let Some(caps) = DD_FORMAT_REGEX.captures(text) {
        let degrees = leading_int(&caps["deg"]);
        let fraction = caps.name("frac").map_or(0.0, |m| leading_float(m.as_str()));
        debug!("Matched '{}' as decimal degrees", text);
        return Some(Sexagesimal::from_fraction(degrees, fraction));
    }

    if let Some(caps) = DMS_FORMAT_REGEX.captures(text) {
        let degrees = leading_int(&caps["deg"]);
        let minutes = caps.name("min").map_or(0.0, |m| leading_int(m.as_str()));

        let seconds = match (caps.name("minfrac"), caps.name("sec")) {
            (Some(fraction), _) => {
                debug!("Matched '{}' as degrees and decimal minutes", text);
                leading_float(fraction.as_str()) * SEXAGESIMAL_BASE
            },
            (None, Some(seconds)) => {
                debug!("Matched '{}' as degrees, minutes and seconds", text);
                leading_float(seconds.as_str())
            },
            (None, None) => {
                debug!("Matched '{}' as whole degrees/minutes", text);
                0.0
            },
        };

        return Some(Sexagesimal::new(degrees, minutes, seconds));
    }

    debug!("Could not parse '{}' as a coordinate", text);
    None
}

impl Coordinate {
    /// Parse any supported input, with an optional separate direction
    ///
    /// ```rust
    /// use magellan::{Coordinate, CoordinateInput, Direction};
    ///
    /// let c = Coordinate::from_input(CoordinateInput::Decimal(123.456), Some("E"));
    /// assert_eq!(c.direction(), Some(Direction::East));
    /// ```
    pub fn from_input(input: CoordinateInput<'_>, direction: Option<&str>) -> Self {
        parse(input, direction)
    }

    /// Parse decimal-degree or DMS/DM text such as `"-12.5"`,
    /// `"N12°34'56.1\""` or `"12 34.5 S"`
    pub fn parse(text: &str) -> Self {
        parse(CoordinateInput::Text(text), None)
    }

    /// Build from signed decimal degrees
    pub fn from_decimal(value: f64) -> Self {
        parse(CoordinateInput::Decimal(value), None)
    }

    /// Build from separate degrees, minutes and seconds
    ///
    /// Degrees and minutes are truncated to whole numbers.
    pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> Self {
        let input = CoordinateInput::Triple(degrees.into(), minutes.into(), seconds.into());
        parse(input, None)
    }
}
