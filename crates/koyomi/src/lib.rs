//! Structural iCalendar (RFC 5545) parsing and validation.
//!
//! `koyomi` turns iCalendar text into a typed [`Calendar`] tree and checks
//! the tree against the format's structural compliance rules: required
//! properties, required sub-components, and correct BEGIN/END nesting.
//! Property values are kept as raw strings; date/time/duration semantics
//! and recurrence expansion are out of scope.
//!
//! ```
//! let input = "\
//! BEGIN:VCALENDAR\r\n\
//! VERSION:2.0\r\n\
//! PRODID:-//Example//Example//EN\r\n\
//! BEGIN:VEVENT\r\n\
//! UID:meeting@example.com\r\n\
//! DTSTAMP:20260123T120000Z\r\n\
//! SUMMARY:Team Meeting\r\n\
//! END:VEVENT\r\n\
//! END:VCALENDAR\r\n";
//!
//! let calendar = koyomi::parse_and_validate(input)?;
//! assert_eq!(calendar.events()[0].summary(), Some("Team Meeting"));
//! # Ok::<(), koyomi::CalendarError>(())
//! ```

mod build;
mod core;
mod error;
mod parse;
mod validate;

#[cfg(test)]
mod tests;

pub use self::build::{fold_line, serialize};
pub use self::core::{Calendar, Component, ComponentKind, Parameter, Property};
pub use self::error::{CalendarError, ParseError, ParseResult, PropertyErrorKind, ValidationError};
pub use self::parse::{parse, parse_bytes, parse_content_line, parse_multiple, split_lines};
pub use self::validate::validate;

/// Parses a calendar and validates it in one step.
///
/// ## Errors
///
/// Returns a parse error for structurally invalid input, or a validation
/// error for a well-formed tree that violates a compliance rule.
pub fn parse_and_validate(input: &str) -> Result<Calendar, CalendarError> {
    let calendar = parse(input)?;
    validate(&calendar)?;
    Ok(calendar)
}

/// Parses a calendar and hands it to a caller-supplied validator.
///
/// The validator's error is surfaced unchanged; parse failures are
/// converted into the caller's error type via `From`.
///
/// ## Errors
///
/// Returns a (converted) parse error or whatever the validator raises.
pub fn parse_with<F, E>(input: &str, validator: F) -> Result<Calendar, E>
where
    F: FnOnce(&Calendar) -> Result<(), E>,
    E: From<ParseError>,
{
    let calendar = parse(input)?;
    validator(&calendar)?;
    Ok(calendar)
}
