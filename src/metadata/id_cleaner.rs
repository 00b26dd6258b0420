//! Document ID cleaner
//!
//! Zeroes the trailer `/ID` pair so revisions of a document can no longer be
//! correlated by identifier.

use lazy_static::lazy_static;
use regex::bytes::{Captures, Regex};
use tracing::debug;

use crate::cleaner::binary_sanitizer::rewrite_with;
use crate::config::Category;
use crate::pipeline::PassOutput;
use crate::report::ChangeReport;

lazy_static! {
    static ref ID_ARRAY: Regex =
        Regex::new(r"(?-u)/ID\s*\[\s*<([0-9A-Fa-f]+)>\s*<([0-9A-Fa-f]+)>\s*\]")
            .expect("Invalid regex for /ID array");
}

fn is_zeroed(hex: &[u8]) -> bool {
    hex.iter().all(|&b| b == b'0')
}

fn zeroed_id(first_len: usize, second_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(first_len + second_len + 8);
    out.extend_from_slice(b"/ID[<");
    out.resize(out.len() + first_len, b'0');
    out.extend_from_slice(b"><");
    out.resize(out.len() + second_len, b'0');
    out.extend_from_slice(b">]");
    out
}

/// Replaces both strings of every `/ID [<..> <..>]` array with zeros of the
/// same length. Arrays that are already all zeros are kept byte for byte.
pub fn clean_document_ids(data: &[u8]) -> PassOutput<'_> {
    let pending = ID_ARRAY
        .captures_iter(data)
        .filter(|caps| !(is_zeroed(&caps[1]) && is_zeroed(&caps[2])))
        .count();

    if pending == 0 {
        return PassOutput::unchanged(data);
    }

    debug!("Zeroing {} document ID array(s)", pending);
    let data = rewrite_with(&ID_ARRAY, data, |caps: &Captures<'_>| {
        if is_zeroed(&caps[1]) && is_zeroed(&caps[2]) {
            caps[0].to_vec()
        } else {
            zeroed_id(caps[1].len(), caps[2].len())
        }
    });

    PassOutput {
        data,
        changes: ChangeReport::flagged(Category::DocId, true),
    }
}
