//! End-to-end tests over the combined parse/validate entry points.

use super::fixtures::*;
use crate::{
    Calendar, CalendarError, ParseError, ValidationError, parse_and_validate, parse_multiple,
    parse_with, validate,
};

#[test_log::test]
fn parse_and_validate_accepts_valid_input() {
    let cal = parse_and_validate(VEVENT_WITH_ALARM).unwrap();
    assert_eq!(cal.events().len(), 1);
    assert_eq!(cal.events()[0].alarms().len(), 1);
}

#[test]
fn parse_and_validate_surfaces_parse_errors() {
    let result = parse_and_validate("BEGIN:VCALENDAR\r\nEND:VEVENT\r\n");
    assert!(matches!(
        result,
        Err(CalendarError::Parse(ParseError::MismatchedEnd { .. }))
    ));
}

#[test]
fn parse_and_validate_surfaces_validation_errors() {
    let input = "\
BEGIN:VCALENDAR\r\n\
VERSION:1.0\r\n\
PRODID:-//Test//Test//EN\r\n\
END:VCALENDAR\r\n";

    let result = parse_and_validate(input);
    assert_eq!(
        result,
        Err(CalendarError::Validation(
            ValidationError::UnsupportedVersion {
                found: "1.0".to_string(),
            }
        ))
    );
}

#[test]
fn parse_and_validate_requires_dtstamp() {
    let input = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:no-stamp@example.com\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    assert_eq!(
        parse_and_validate(input),
        Err(CalendarError::Validation(
            ValidationError::MissingProperty {
                component: "VEVENT",
                property: "DTSTAMP",
            }
        ))
    );
}

#[derive(Debug, PartialEq, Eq)]
enum PolicyError {
    Parse(ParseError),
    TooManyEvents(usize),
}

impl From<ParseError> for PolicyError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

fn at_most_one_event(calendar: &Calendar) -> Result<(), PolicyError> {
    let count = calendar.events().len();
    if count > 1 {
        return Err(PolicyError::TooManyEvents(count));
    }
    Ok(())
}

#[test]
fn parse_with_runs_custom_validator() {
    let cal = parse_with(VEVENT_MINIMAL, at_most_one_event).unwrap();
    assert_eq!(cal.events().len(), 1);
}

#[test]
fn parse_with_surfaces_custom_error() {
    let input = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//Test//Test//EN\r\n\
BEGIN:VEVENT\r\n\
UID:a@example.com\r\n\
DTSTAMP:20260123T120000Z\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:b@example.com\r\n\
DTSTAMP:20260123T120000Z\r\n\
END:VEVENT\r\n\
END:VCALENDAR\r\n";

    assert_eq!(
        parse_with(input, at_most_one_event),
        Err(PolicyError::TooManyEvents(2))
    );
}

#[test]
fn parse_with_converts_parse_errors() {
    assert_eq!(
        parse_with("", at_most_one_event),
        Err(PolicyError::Parse(ParseError::MissingCalendar))
    );
}

#[test_log::test]
fn parse_multiple_then_validate_each() {
    let input = format!("{VEVENT_MINIMAL}{VTODO_BASIC}");
    let calendars = parse_multiple(&input).unwrap();
    assert_eq!(calendars.len(), 2);
    for cal in &calendars {
        validate(cal).unwrap();
    }
}
