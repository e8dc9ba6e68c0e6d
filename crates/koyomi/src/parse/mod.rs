//! iCalendar parsing (RFC 5545).
//!
//! - Lexer: line unfolding and content line tokenization
//! - Parser: the nesting state machine producing a [`crate::Calendar`]
//! - Multi: splitting concatenated calendar documents

mod lexer;
mod multi;
mod parser;

pub use lexer::{parse_content_line, split_lines};
pub use multi::parse_multiple;
pub use parser::{parse, parse_bytes};
