//! Compressed stream processing: inflate, rewrite `/Lang(he)`, deflate
//! Author: kartik4091

use std::borrow::Cow;
use std::io::Write;

use flate2::{write::ZlibEncoder, Compression, Decompress, FlushDecompress, Status};
use lazy_static::lazy_static;
use regex::bytes::{Captures, Regex};
use tracing::debug;

use crate::cleaner::binary_sanitizer::rewrite_with;
use crate::pipeline::PassOutput;
use crate::report::ChangeReport;
use crate::utils::pattern_utils::{count_pattern, replace_pattern};

pub const HEBREW_LANG_TAG: &[u8] = b"/Lang(he)";
pub const ENGLISH_LANG_TAG: &[u8] = b"/Lang(en)";

lazy_static! {
    /// `stream`, optional CR, LF, payload, optional CR, LF, `endstream`.
    /// The payload is the shortest run that reaches an `endstream` marker. A
    /// zero-length stream closes on the opener's own line break and has no
    /// payload group.
    static ref STREAM_REGEX: Regex = Regex::new(
        r"(?s-u)(stream\r?\n)(?:endstream|(.*?)(\r?\nendstream))"
    )
    .expect("Invalid stream regex");
}

/// Stream pass: fixes language tags hidden inside zlib-compressed streams.
///
/// Streams that do not inflate, or that contain no tag, keep their exact bytes.
pub fn process_streams(data: &[u8]) -> PassOutput<'_> {
    let mut fixed = 0usize;
    let mut rewritten_streams = 0usize;

    let rewritten = rewrite_with(&STREAM_REGEX, data, |caps: &Captures<'_>| {
        let payload = match caps.get(2) {
            Some(payload) => payload.as_bytes(),
            None => return caps[0].to_vec(),
        };
        match rewrite_stream_payload(payload) {
            Some((payload, count)) => {
                fixed += count;
                rewritten_streams += 1;
                let mut out = Vec::with_capacity(caps[1].len() + payload.len() + caps[3].len());
                out.extend_from_slice(&caps[1]);
                out.extend_from_slice(&payload);
                out.extend_from_slice(&caps[3]);
                out
            }
            None => caps[0].to_vec(),
        }
    });

    debug!(
        "Stream pass fixed {} language tag(s) in {} stream(s)",
        fixed, rewritten_streams
    );

    // Keep the input borrowed when every stream was left as it was
    let data = if rewritten_streams == 0 {
        Cow::Borrowed(data)
    } else {
        rewritten
    };

    PassOutput {
        data,
        changes: ChangeReport::lang_tags(fixed),
    }
}

/// Returns the recompressed payload and the number of tags fixed, or `None`
/// when the payload is not zlib data or holds no tag.
fn rewrite_stream_payload(payload: &[u8]) -> Option<(Vec<u8>, usize)> {
    let decoded = inflate(payload)?;
    let count = count_pattern(&decoded, HEBREW_LANG_TAG);
    if count == 0 {
        return None;
    }

    let patched = replace_pattern(&decoded, HEBREW_LANG_TAG, ENGLISH_LANG_TAG);
    let recompressed = deflate(&patched)?;
    Some((recompressed, count))
}

/// Best-effort zlib inflation; `None` for anything that is not a complete
/// zlib stream.
pub fn inflate(payload: &[u8]) -> Option<Vec<u8>> {
    let mut inflater = Decompress::new(true);
    let mut out = Vec::with_capacity(payload.len().saturating_mul(4).max(64));

    loop {
        if out.len() == out.capacity() {
            out.reserve(out.capacity().max(4096));
        }

        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();
        let input = payload.get(consumed..)?;

        let status = inflater
            .decompress_vec(input, &mut out, FlushDecompress::Finish)
            .ok()?;

        match status {
            Status::StreamEnd => return Some(out),
            Status::Ok | Status::BufError => {
                let stalled = inflater.total_in() as usize == consumed
                    && inflater.total_out() == produced;
                // No progress with room left in the buffer means truncated input
                if stalled && out.len() < out.capacity() {
                    return None;
                }
            }
        }
    }
}

/// zlib deflate at maximum compression
pub fn deflate(data: &[u8]) -> Option<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data).ok()?;
    encoder.finish().ok()
}
