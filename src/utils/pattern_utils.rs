//! Pattern searching utility for low-level byte pattern detection

use std::borrow::Cow;

/// Find the start of every non-overlapping occurrence of `pattern` in `buf`
pub fn find_pattern_positions(buf: &[u8], pattern: &[u8]) -> Vec<usize> {
    let mut positions = Vec::new();
    if pattern.is_empty() || buf.len() < pattern.len() {
        return positions;
    }

    let mut i = 0;
    while i + pattern.len() <= buf.len() {
        if &buf[i..i + pattern.len()] == pattern {
            positions.push(i);
            i += pattern.len();
        } else {
            i += 1;
        }
    }
    positions
}

/// Number of non-overlapping occurrences of `pattern` in `buf`
pub fn count_pattern(buf: &[u8], pattern: &[u8]) -> usize {
    find_pattern_positions(buf, pattern).len()
}

/// Replace every non-overlapping occurrence of `from` with `to`.
/// Borrows the input untouched when there is nothing to replace.
pub fn replace_pattern<'a>(buf: &'a [u8], from: &[u8], to: &[u8]) -> Cow<'a, [u8]> {
    let positions = find_pattern_positions(buf, from);
    if positions.is_empty() {
        return Cow::Borrowed(buf);
    }

    let mut out = Vec::with_capacity(buf.len() + positions.len() * to.len());
    let mut last = 0;
    for pos in positions {
        out.extend_from_slice(&buf[last..pos]);
        out.extend_from_slice(to);
        last = pos + from.len();
    }
    out.extend_from_slice(&buf[last..]);
    Cow::Owned(out)
}
