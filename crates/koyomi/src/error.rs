//! Error types for parsing and validation.

use thiserror::Error;

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// An error raised while turning iCalendar text into a component tree.
///
/// Line numbers are 1-based and refer to logical (unfolded) lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input bytes were not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    Decoding(#[from] std::str::Utf8Error),

    /// A content line could not be tokenized.
    #[error("line {line}: {reason}: {text:?}")]
    InvalidProperty {
        /// Logical line number.
        line: usize,
        /// What made the line unparseable.
        reason: PropertyErrorKind,
        /// The offending line, verbatim.
        text: String,
    },

    /// An END named a different component than the innermost open BEGIN.
    #[error("line {line}: expected END:{expected}, got END:{found}")]
    MismatchedEnd {
        line: usize,
        expected: String,
        found: String,
    },

    /// An END with no open component.
    #[error("line {line}: END:{name} without matching BEGIN")]
    UnexpectedEnd { line: usize, name: String },

    /// Input ended while a component was still open.
    #[error("missing END:{name} (opened at line {begin_line})")]
    MissingEnd { begin_line: usize, name: String },

    /// A BEGIN/END name outside the recognized component registry.
    #[error("line {line}: unsupported component type: {name}")]
    UnsupportedComponent { line: usize, name: String },

    /// A VCALENDAR opened inside another component.
    #[error("line {line}: VCALENDAR must not be nested inside {parent}")]
    NestedCalendar { line: usize, parent: String },

    /// A property line before any BEGIN was seen.
    #[error("line {line}: property outside any component: {text:?}")]
    StrayProperty { line: usize, text: String },

    /// A component closed at the top level, outside any VCALENDAR.
    #[error("line {line}: {name} component outside any VCALENDAR")]
    ComponentOutsideCalendar { line: usize, name: String },

    /// The input contained no complete VCALENDAR.
    #[error("no VCALENDAR found in input")]
    MissingCalendar,

    /// Multi-calendar input ended inside an unterminated VCALENDAR.
    #[error("incomplete VCALENDAR at end of input")]
    IncompleteCalendar,
}

/// Why a content line failed to tokenize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyErrorKind {
    /// Empty or missing property name.
    MissingName,
    /// Property name contains a character outside `ALPHA / DIGIT / "-"`.
    InvalidName,
    /// No `:` separating name/parameters from the value.
    MissingColon,
    /// A quoted parameter value was never closed.
    UnclosedQuote,
    /// A parameter was empty or malformed.
    InvalidParameter,
}

impl std::fmt::Display for PropertyErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingName => write!(f, "missing property name"),
            Self::InvalidName => write!(f, "invalid property name"),
            Self::MissingColon => write!(f, "missing ':' separator"),
            Self::UnclosedQuote => write!(f, "unclosed quoted parameter value"),
            Self::InvalidParameter => write!(f, "invalid parameter"),
        }
    }
}

/// An error raised while checking a parsed tree for structural compliance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required property is absent (or present with an empty value where
    /// a non-empty one is required).
    #[error("{component}: missing required property {property}")]
    MissingProperty {
        /// Component the property was expected on.
        component: &'static str,
        /// Property name.
        property: &'static str,
    },

    /// VERSION is present but not the literal "2.0".
    #[error("VCALENDAR: VERSION must be \"2.0\", got {found:?}")]
    UnsupportedVersion { found: String },

    /// PRODID is present but empty.
    #[error("VCALENDAR: PRODID must not be empty")]
    EmptyProdId,

    /// A VTIMEZONE with no STANDARD or DAYLIGHT sub-component.
    #[error("VTIMEZONE {tzid:?}: must contain at least one STANDARD or DAYLIGHT sub-component")]
    MissingTimezoneRule { tzid: String },
}

/// Union error for operations that parse and validate in one step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
