//! Content line folding.

/// Maximum physical line length in octets (not characters) per RFC 5545 §3.1.
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line at the 75-octet limit.
///
/// Works by slicing the line into octet-budgeted chunks joined with
/// CRLF + space. The leading space of a continuation line counts toward
/// its 75 octets, so continuations carry up to 74 octets of content.
/// Split points are always UTF-8 character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let extra = line.len().div_ceil(MAX_LINE_OCTETS - 1) * 3;
    let mut folded = String::with_capacity(line.len() + extra);
    let mut rest = line;
    let mut budget = MAX_LINE_OCTETS;

    while rest.len() > budget {
        let mut split = budget;
        while !rest.is_char_boundary(split) {
            split -= 1;
        }
        folded.push_str(&rest[..split]);
        folded.push_str("\r\n ");
        rest = &rest[split..];
        budget = MAX_LINE_OCTETS - 1;
    }
    folded.push_str(rest);
    folded
}
