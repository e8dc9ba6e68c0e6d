//! Splitting concatenated iCalendar documents.
//!
//! Calendar feeds and export files sometimes concatenate several complete
//! VCALENDARs back to back. The splitter segments the logical line stream
//! into one group per top-level VCALENDAR and parses each group
//! independently.

use super::lexer::split_lines;
use super::parser::{CALENDAR_NAME, marker_name, parse_lines};
use crate::core::Calendar;
use crate::error::{ParseError, ParseResult};

/// Parses every top-level VCALENDAR from the input.
///
/// A depth counter tracks VCALENDAR BEGIN/END markers; each time the depth
/// returns to zero the accumulated group is parsed as one document. Lines
/// outside any VCALENDAR region are ignored.
///
/// ## Errors
///
/// Fails with an incomplete-calendar error if the input ends inside an
/// unterminated VCALENDAR, and propagates the first group's parse failure
/// without returning partial results.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_multiple(input: &str) -> ParseResult<Vec<Calendar>> {
    tracing::debug!("Splitting concatenated iCalendar input");

    let lines = split_lines(input);
    let mut calendars = Vec::new();
    let mut group: Vec<(usize, String)> = Vec::new();
    let mut depth: usize = 0;

    for (line_num, line) in lines {
        let begins_calendar =
            marker_name(&line, "BEGIN").is_some_and(|name| name == CALENDAR_NAME);
        let ends_calendar = marker_name(&line, "END").is_some_and(|name| name == CALENDAR_NAME);

        if depth == 0 {
            if begins_calendar {
                depth = 1;
                group.push((line_num, line));
            }
            // Anything else outside a calendar region is ignored.
        } else {
            if begins_calendar {
                depth += 1;
            } else if ends_calendar {
                depth -= 1;
            }
            group.push((line_num, line));

            if depth == 0 {
                calendars.push(parse_lines(&group)?);
                group.clear();
            }
        }
    }

    if depth > 0 {
        tracing::warn!(depth, "Input ended inside an unterminated VCALENDAR");
        return Err(ParseError::IncompleteCalendar);
    }

    tracing::debug!(count = calendars.len(), "Parsed calendar groups");
    Ok(calendars)
}
