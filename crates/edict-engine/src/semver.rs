//! Numeric semantic-version comparison.
//!
//! Version strings are compared segment-by-segment as integers, never
//! lexicographically: "10.0.0" sorts above "9.0.0". A missing trailing
//! segment reads as 0, so "6" and "6.0.0" are equal. Anything that does not
//! parse cleanly yields `None`, which clause evaluation degrades to false —
//! a malformed version must never throw, and must never accidentally match.

use std::cmp::Ordering;

/// Parse a version string into its numeric segments.
///
/// Splits on `.` and requires every segment to parse as an unsigned integer.
/// Returns `None` for empty input or any non-numeric segment.
pub fn parse_version(s: &str) -> Option<Vec<u64>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.split('.').map(|seg| seg.parse::<u64>().ok()).collect()
}

/// Compare two parsed versions segment-by-segment, left to right.
///
/// Shorter versions are padded with implicit zeros, so `[6]` equals
/// `[6, 0, 0]`.
pub fn compare(a: &[u64], b: &[u64]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        match x.cmp(&y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// True when `version` is strictly below `bound`. `None` when either side
/// fails to parse.
pub fn lt(version: &str, bound: &str) -> Option<bool> {
    let a = parse_version(version)?;
    let b = parse_version(bound)?;
    Some(compare(&a, &b) == Ordering::Less)
}

/// True when `version` satisfies every comparator term in `range`.
///
/// A range is a whitespace-separated conjunction of terms such as
/// `">=5.0.0 <6.0.0"`. Supported term prefixes: `>=`, `<=`, `>`, `<`, `=`;
/// a bare version means exact equality. `None` when the version or any term
/// fails to parse, or when the range is empty.
pub fn satisfies(version: &str, range: &str) -> Option<bool> {
    let v = parse_version(version)?;

    let mut terms = 0;
    for term in range.split_whitespace() {
        terms += 1;
        let (op, bound_str) = split_term(term);
        let bound = parse_version(bound_str)?;
        let ord = compare(&v, &bound);

        let holds = match op {
            RangeOp::Ge => ord != Ordering::Less,
            RangeOp::Gt => ord == Ordering::Greater,
            RangeOp::Le => ord != Ordering::Greater,
            RangeOp::Lt => ord == Ordering::Less,
            RangeOp::Eq => ord == Ordering::Equal,
        };
        if !holds {
            return Some(false);
        }
    }

    if terms == 0 {
        return None;
    }
    Some(true)
}

/// Comparator prefix of one range term.
#[derive(Debug, Clone, Copy)]
enum RangeOp {
    Ge,
    Gt,
    Le,
    Lt,
    Eq,
}

/// Split a range term into its comparator prefix and the version remainder.
fn split_term(term: &str) -> (RangeOp, &str) {
    if let Some(rest) = term.strip_prefix(">=") {
        (RangeOp::Ge, rest)
    } else if let Some(rest) = term.strip_prefix("<=") {
        (RangeOp::Le, rest)
    } else if let Some(rest) = term.strip_prefix('>') {
        (RangeOp::Gt, rest)
    } else if let Some(rest) = term.strip_prefix('<') {
        (RangeOp::Lt, rest)
    } else if let Some(rest) = term.strip_prefix('=') {
        (RangeOp::Eq, rest)
    } else {
        (RangeOp::Eq, term)
    }
}
