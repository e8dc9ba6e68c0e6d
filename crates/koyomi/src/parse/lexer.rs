//! Content line lexer (RFC 5545 §3.1).
//!
//! Handles line unfolding and tokenization of content lines into
//! [`Property`] records. Everything above this layer works on logical
//! (already unfolded) lines.

use crate::core::{Parameter, Property};
use crate::error::{ParseError, ParseResult, PropertyErrorKind};

/// Splits input into logical lines, merging folded continuations.
///
/// Handles both CRLF and bare LF line endings. Per RFC 5545 §3.1 a line
/// starting with SPACE or HTAB continues the previous line; unfolding
/// removes the line break and the single whitespace character. Empty lines
/// are skipped. Line numbers are 1-based and refer to the line a logical
/// line started on.
#[must_use]
pub fn split_lines(input: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();

    for (i, raw_line) in input.lines().enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.is_empty() {
            continue;
        }

        if let Some(continuation) = line.strip_prefix([' ', '\t']) {
            if let Some((_, prev)) = lines.last_mut() {
                prev.push_str(continuation);
            } else {
                lines.push((i + 1, continuation.to_string()));
            }
        } else {
            lines.push((i + 1, line.to_string()));
        }
    }

    lines
}

/// Byte cursor over one logical line.
///
/// All structural delimiters (`:;,="^`) are ASCII, so the cursor advances
/// bytewise and only ever stops or slices at ASCII positions or at char
/// boundaries via [`Scanner::next_char`].
struct Scanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.pos).copied()
    }

    const fn at_end(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Consumes `byte` if it is next.
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes and returns the next char, multibyte included.
    fn next_char(&mut self) -> Option<char> {
        let c = self.line[self.pos..].chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes a run of iCalendar name characters (`ALPHA / DIGIT / "-"`).
    fn take_name(&mut self) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !b.is_ascii_alphanumeric() && b != b'-' {
                break;
            }
            self.pos += 1;
        }
        &self.line[start..self.pos]
    }

    /// Consumes up to (not including) the first of the given ASCII bytes.
    fn take_until(&mut self, stops: &[u8]) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if stops.contains(&b) {
                break;
            }
            self.pos += 1;
        }
        &self.line[start..self.pos]
    }

    /// Everything from the cursor to the end of the line.
    fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }
}

/// Parses a single logical line into a property.
///
/// Format: `name *(";" param) ":" value`
///
/// ## Errors
/// Returns an error carrying the offending line if it is malformed:
/// empty or invalid name, missing `:`, unclosed quote, bad parameter.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<Property> {
    let mut scanner = Scanner::new(line);

    let name = scanner.take_name();
    let mut params = Vec::new();

    if scanner.eat(b';') {
        if name.is_empty() {
            return Err(invalid(line, line_num, PropertyErrorKind::MissingName));
        }
        loop {
            params.push(parse_parameter(&mut scanner, line, line_num)?);
            if scanner.eat(b';') {
                continue;
            }
            if scanner.eat(b':') {
                break;
            }
            let reason = if scanner.at_end() {
                PropertyErrorKind::MissingColon
            } else {
                PropertyErrorKind::InvalidParameter
            };
            return Err(invalid(line, line_num, reason));
        }
    } else if scanner.eat(b':') {
        if name.is_empty() {
            return Err(invalid(line, line_num, PropertyErrorKind::MissingName));
        }
    } else if scanner.at_end() {
        return Err(invalid(line, line_num, PropertyErrorKind::MissingColon));
    } else {
        return Err(invalid(line, line_num, PropertyErrorKind::InvalidName));
    }

    Ok(Property::with_params(name, params, scanner.rest()))
}

fn invalid(line: &str, line_num: usize, reason: PropertyErrorKind) -> ParseError {
    ParseError::InvalidProperty {
        line: line_num,
        reason,
        text: line.to_string(),
    }
}

/// Parses one `NAME=VALUE[,VALUE...]` parameter, stopping before the `;`
/// or `:` terminator (the caller dispatches on it).
fn parse_parameter(
    scanner: &mut Scanner<'_>,
    line: &str,
    line_num: usize,
) -> ParseResult<Parameter> {
    let name = scanner.take_name();
    if name.is_empty() || !scanner.eat(b'=') {
        return Err(invalid(line, line_num, PropertyErrorKind::InvalidParameter));
    }

    let mut values = Vec::new();
    loop {
        values.push(parse_param_value(scanner, line, line_num)?);
        if !scanner.eat(b',') {
            break;
        }
    }

    Ok(Parameter::with_values(name, values))
}

/// Parses a parameter value, decoding RFC 6868 caret escapes in quoted form.
fn parse_param_value(
    scanner: &mut Scanner<'_>,
    line: &str,
    line_num: usize,
) -> ParseResult<String> {
    if !scanner.eat(b'"') {
        // Unquoted: runs to the next structural delimiter
        return Ok(scanner.take_until(&[b',', b';', b':']).to_string());
    }

    let mut value = String::new();
    loop {
        let Some(c) = scanner.next_char() else {
            return Err(invalid(line, line_num, PropertyErrorKind::UnclosedQuote));
        };
        match c {
            '"' => return Ok(value),
            '^' => {
                // RFC 6868: ^^ -> ^, ^n -> newline, ^' -> double quote
                if scanner.eat(b'^') {
                    value.push('^');
                } else if scanner.eat(b'n') {
                    value.push('\n');
                } else if scanner.eat(b'\'') {
                    value.push('"');
                } else {
                    value.push('^');
                }
            }
            _ => value.push(c),
        }
    }
}
