//! iCalendar document parser (RFC 5545).
//!
//! Drives a frame stack over the logical line stream: BEGIN pushes a frame,
//! property lines accumulate on the innermost frame, END pops the frame,
//! assembles the component and folds it into the parent. The VCALENDAR
//! container closes only at the bottom of the stack and becomes the parse
//! result.

use super::lexer::{parse_content_line, split_lines};
use crate::core::{Calendar, Component, ComponentKind, Property};
use crate::error::{ParseError, ParseResult};

/// Name of the top-level container component.
pub(crate) const CALENDAR_NAME: &str = "VCALENDAR";

/// Parses an iCalendar document from a string.
///
/// The result is the last complete top-level VCALENDAR in the input; use
/// [`crate::parse_multiple`] to retrieve every calendar from concatenated
/// input.
///
/// ## Errors
///
/// Returns an error if the input is not structurally valid iCalendar:
/// malformed property lines, mismatched or unbalanced BEGIN/END markers,
/// unrecognized component names, or no complete VCALENDAR at all.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Calendar> {
    tracing::debug!("Parsing iCalendar document");

    let lines = split_lines(input);
    tracing::trace!(count = lines.len(), "Split logical lines");

    parse_lines(&lines)
}

/// Parses an iCalendar document from raw bytes.
///
/// ## Errors
///
/// Returns a decoding error if the bytes are not valid UTF-8, otherwise
/// behaves like [`parse`].
pub fn parse_bytes(input: &[u8]) -> ParseResult<Calendar> {
    let text = std::str::from_utf8(input)?;
    parse(text)
}

/// An in-progress component: one open BEGIN with its accumulated content.
struct Frame {
    name: String,
    begin_line: usize,
    properties: Vec<Property>,
    children: Vec<Component>,
}

impl Frame {
    fn open(name: String, begin_line: usize) -> Self {
        Self {
            name,
            begin_line,
            properties: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Runs the nesting state machine over pre-split logical lines.
pub(crate) fn parse_lines(lines: &[(usize, String)]) -> ParseResult<Calendar> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut calendar: Option<Calendar> = None;

    for &(line_num, ref line) in lines {
        if let Some(name) = marker_name(line, "BEGIN") {
            if name == CALENDAR_NAME
                && let Some(parent) = stack.last()
            {
                return Err(ParseError::NestedCalendar {
                    line: line_num,
                    parent: parent.name.clone(),
                });
            }
            stack.push(Frame::open(name, line_num));
        } else if let Some(name) = marker_name(line, "END") {
            let Some(frame) = stack.pop() else {
                return Err(ParseError::UnexpectedEnd {
                    line: line_num,
                    name,
                });
            };
            if frame.name != name {
                return Err(ParseError::MismatchedEnd {
                    line: line_num,
                    expected: frame.name,
                    found: name,
                });
            }

            if frame.name == CALENDAR_NAME {
                // Stack is empty here: nested VCALENDARs are rejected at BEGIN.
                calendar = Some(Calendar {
                    properties: frame.properties,
                    components: frame.children,
                });
            } else {
                let kind = ComponentKind::from_name(&frame.name).ok_or_else(|| {
                    ParseError::UnsupportedComponent {
                        line: frame.begin_line,
                        name: frame.name.clone(),
                    }
                })?;
                let component = Component::build(kind, frame.properties, frame.children);
                let Some(parent) = stack.last_mut() else {
                    return Err(ParseError::ComponentOutsideCalendar {
                        line: line_num,
                        name,
                    });
                };
                parent.children.push(component);
            }
        } else if let Some(frame) = stack.last_mut() {
            frame.properties.push(parse_content_line(line, line_num)?);
        } else {
            return Err(ParseError::StrayProperty {
                line: line_num,
                text: line.clone(),
            });
        }
    }

    if let Some(frame) = stack.last() {
        return Err(ParseError::MissingEnd {
            begin_line: frame.begin_line,
            name: frame.name.clone(),
        });
    }

    calendar.ok_or(ParseError::MissingCalendar)
}

/// Returns the uppercased component name if `line` is `marker ":" name`.
pub(crate) fn marker_name(line: &str, marker: &str) -> Option<String> {
    let (head, rest) = line.split_once(':')?;
    if head.eq_ignore_ascii_case(marker) {
        Some(rest.trim().to_ascii_uppercase())
    } else {
        None
    }
}
