//! iCalendar serialization (RFC 5545).
//!
//! Writes a parsed tree back out as CRLF-terminated content lines:
//! - Fold: content line folding at 75 octets
//! - Serializer: document serialization preserving stored property order

mod fold;
mod serializer;

pub use fold::fold_line;
pub use serializer::{serialize, serialize_component, serialize_property};
