//! Tests for coordinate parsing

use crate::coordinate::{parse, Component, Coordinate, CoordinateInput, Direction};

fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.expect("coordinate should not be empty");
    assert!((actual - expected).abs() < 1e-9, "expected {}, got {}", expected, actual);
}

#[test]
fn test_parse_dms_text_with_trailing_direction() {
    let c = Coordinate::parse("12 32 13.44 N");
    assert_eq!(c.degrees(), Some(12.0));
    assert_eq!(c.minutes(), Some(32.0));
    assert_eq!(c.seconds(), Some(13.44));
    assert_eq!(c.direction(), Some(Direction::North));
}

#[test]
fn test_parse_dms_text_with_marks_and_leading_direction() {
    let c = Coordinate::parse("S89°12'15.456\"");
    assert_eq!(c.degrees(), Some(89.0));
    assert_eq!(c.minutes(), Some(12.0));
    assert_eq!(c.seconds(), Some(15.456));
    assert_eq!(c.direction(), Some(Direction::South));
}

#[test]
fn test_parse_text_with_separate_direction() {
    let c = parse(CoordinateInput::Text("-12"), Some("E"));
    assert_eq!(c.degrees(), Some(-12.0));
    assert_eq!(c.minutes(), Some(0.0));
    assert_eq!(c.seconds(), Some(0.0));
    assert_eq!(c.direction(), Some(Direction::East));
}

#[test]
fn test_parse_signed_text_without_direction() {
    let c = Coordinate::parse("-12");
    assert_eq!(c.degrees(), Some(-12.0));
    assert_eq!(c.minutes(), Some(0.0));
    assert_eq!(c.seconds(), Some(0.0));
    assert_eq!(c.direction(), None);
}

#[test]
fn test_parse_nothing_is_empty() {
    let c = parse(CoordinateInput::Nothing, None);
    assert!(c.is_empty());
    assert_eq!(c.degrees(), None);
    assert_eq!(c.minutes(), None);
    assert_eq!(c.seconds(), None);
    assert_eq!(c.direction(), None);

    assert!(Coordinate::new().is_empty());
    assert!(Coordinate::default().is_empty());
}

#[test]
fn test_parse_decimal_expands_to_minutes_and_seconds() {
    let c = Coordinate::from_decimal(123.456);
    assert_eq!(c.degrees(), Some(123.0));
    assert_eq!(c.minutes(), Some(27.0));
    assert_close(c.seconds(), 21.6);
    assert_eq!(c.direction(), None);
}

#[test]
fn test_parse_decimal_text_expands_like_number() {
    let text = Coordinate::parse("-12.3456");
    let number = Coordinate::from_decimal(-12.3456);
    assert_eq!(text.degrees(), Some(-12.0));
    assert_eq!(text.minutes(), Some(20.0));
    assert_close(text.seconds(), 44.16);
    assert_eq!(text.to_dd(), number.to_dd());
}

#[test]
fn test_parse_keeps_sign_below_one_degree() {
    let number = Coordinate::from_decimal(-0.1);
    assert_eq!(number.degrees(), Some(0.0));
    assert_eq!(number.minutes(), Some(6.0));
    assert!(number.is_negative());

    let text = Coordinate::parse("-0.5");
    assert_eq!(text.minutes(), Some(30.0));
    assert!(text.is_negative());

    let triple = parse(
        CoordinateInput::Triple(Component::Text("-0"), Component::Text("30"), Component::Text("0")),
        None,
    );
    assert!(triple.is_negative());
    assert_eq!(triple.to_dd(), "-0.5000");

    assert!(!Coordinate::from_decimal(0.1).is_negative());
}

#[test]
fn test_parse_plus_sign() {
    let c = Coordinate::parse("+45.5");
    assert_eq!(c.degrees(), Some(45.0));
    assert_eq!(c.minutes(), Some(30.0));
    assert!(!c.is_negative());
}

#[test]
fn test_parse_decimal_minutes() {
    let c = Coordinate::parse("12 30.5 S");
    assert_eq!(c.degrees(), Some(12.0));
    assert_eq!(c.minutes(), Some(30.0));
    assert_eq!(c.seconds(), Some(30.0));
    assert_eq!(c.direction(), Some(Direction::South));

    let marked = Coordinate::parse("123°27.36'E");
    assert_eq!(marked.minutes(), Some(27.0));
    assert_close(marked.seconds(), 21.6);
    assert_eq!(marked.direction(), Some(Direction::East));
}

#[test]
fn test_parse_degrees_only() {
    let c = Coordinate::parse("45°");
    assert_eq!(c.degrees(), Some(45.0));
    assert_eq!(c.minutes(), Some(0.0));
    assert_eq!(c.seconds(), Some(0.0));

    let lettered = Coordinate::parse("N45");
    assert_eq!(lettered.degrees(), Some(45.0));
    assert_eq!(lettered.direction(), Some(Direction::North));
}

#[test]
fn test_parse_lowercase_direction_and_padding() {
    let c = Coordinate::parse("  12°30'15\"s  ");
    assert_eq!(c.degrees(), Some(12.0));
    assert_eq!(c.minutes(), Some(30.0));
    assert_eq!(c.seconds(), Some(15.0));
    assert_eq!(c.direction(), Some(Direction::South));

    let padded = Coordinate::parse(" 123°45'59\" N ");
    assert_eq!(padded.degrees(), Some(123.0));
    assert_eq!(padded.direction(), Some(Direction::North));
}

#[test]
fn test_parse_unreadable_text_is_empty() {
    for text in ["hello N", "", "12°34'56\" X", "12-30", "N S"] {
        let c = Coordinate::parse(text);
        assert!(c.is_empty(), "'{}' should not parse", text);
        assert_eq!(c.direction(), None, "'{}' should not keep a direction", text);
    }
}

#[test]
fn test_parse_triple_of_text() {
    let c = parse(
        CoordinateInput::Triple("-123".into(), "45".into(), "59".into()),
        None,
    );
    assert_eq!(c.degrees(), Some(-123.0));
    assert_eq!(c.minutes(), Some(45.0));
    assert_eq!(c.seconds(), Some(59.0));
    assert_eq!(c.direction(), None);
}

#[test]
fn test_parse_triple_reads_direction_from_seconds() {
    let c = parse(
        CoordinateInput::Triple("12".into(), "30".into(), "15.5S".into()),
        None,
    );
    assert_eq!(c.seconds(), Some(15.5));
    assert_eq!(c.direction(), Some(Direction::South));
}

#[test]
fn test_parse_triple_truncates_whole_components() {
    let c = Coordinate::from_dms(12.7, 30.9, 15.25);
    assert_eq!(c.degrees(), Some(12.0));
    assert_eq!(c.minutes(), Some(30.0));
    assert_eq!(c.seconds(), Some(15.25));

    let negative = Coordinate::from_dms(-12.7, 0.0, 0.0);
    assert_eq!(negative.degrees(), Some(-12.0));
}

#[test]
fn test_parse_triple_non_numeric_is_nan() {
    let c = parse(
        CoordinateInput::Triple("abc".into(), "30".into(), "x".into()),
        None,
    );
    assert!(!c.is_empty());
    assert!(c.degrees().map_or(false, f64::is_nan));
    assert_eq!(c.minutes(), Some(30.0));
    assert!(c.seconds().map_or(false, f64::is_nan));
}

#[test]
fn test_parse_explicit_direction_wins() {
    let c = parse(CoordinateInput::Text("12 N"), Some("south"));
    assert_eq!(c.direction(), Some(Direction::South));

    let none_found = parse(CoordinateInput::Decimal(12.0), Some("up"));
    assert_eq!(none_found.direction(), None);
}

#[test]
fn test_input_conversions() {
    assert_eq!(CoordinateInput::from(1.5), CoordinateInput::Decimal(1.5));
    assert_eq!(CoordinateInput::from("1.5"), CoordinateInput::Text("1.5"));
    assert_eq!(Coordinate::from_input(12.5.into(), None).to_dd(), "12.5000");
}

#[test]
fn test_direction_from_str() {
    assert_eq!("n".parse::<Direction>(), Ok(Direction::North));
    assert_eq!(" W ".parse::<Direction>(), Ok(Direction::West));
    assert!("X".parse::<Direction>().is_err());
    assert!("NE".parse::<Direction>().is_err());
    assert_eq!(Direction::find_in("12 e"), Some(Direction::East));
}
