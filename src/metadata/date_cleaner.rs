//! Date cleaner: timezone offsets and creation/modification timestamps
//! Author: kartik4091
//! Created: 2025-06-05

use lazy_static::lazy_static;
use regex::bytes::Regex;
use tracing::debug;

use crate::cleaner::binary_sanitizer::{apply_rules, RewriteRule};
use crate::config::Category;
use crate::metadata::info_cleaner::LITERAL_BODY;
use crate::pipeline::PassOutput;
use crate::report::ChangeReport;

/// Replacement for every creation and modification date
pub const EPOCH_DATE: &[u8] = b"D:19700101000000Z";

lazy_static! {
    /// 14-digit date followed by a `+HH'MM'` / `-HH'MM'` offset
    static ref TIMEZONE: RewriteRule =
        RewriteRule::template(r"(?-u)(D:[0-9]{14})[+-][0-9]{2}'[0-9]{2}'", b"${1}Z");

    static ref CREATION_DATE_VALUE: Regex = Regex::new(&format!(
        r"(?-u)/CreationDate\(({}*)\)",
        LITERAL_BODY
    ))
    .expect("Invalid regex for /CreationDate");

    static ref DATE_RULES: [RewriteRule; 2] = [
        RewriteRule::literal(
            &format!(r"(?-u)/CreationDate\({}*\)", LITERAL_BODY),
            b"/CreationDate(D:19700101000000Z)",
        ),
        RewriteRule::literal(
            &format!(r"(?-u)/ModDate\({}*\)", LITERAL_BODY),
            b"/ModDate(D:19700101000000Z)",
        ),
    ];
}

/// Strips the UTC offset from dates, keeping the 14 digits and marking them `Z`
pub fn clean_timezone(data: &[u8]) -> PassOutput<'_> {
    let count = TIMEZONE.count(data);
    if count == 0 {
        return PassOutput::unchanged(data);
    }

    debug!("Removing {} timezone offset(s)", count);
    PassOutput {
        data: TIMEZONE.apply(data),
        changes: ChangeReport::flagged(Category::Timezone, true),
    }
}

/// Resets /CreationDate and /ModDate literals to the epoch.
///
/// Only a /CreationDate that is non-empty and not already the epoch counts
/// as a change.
pub fn clean_timestamps(data: &[u8]) -> PassOutput<'_> {
    let found = CREATION_DATE_VALUE
        .captures_iter(data)
        .any(|caps| !caps[1].is_empty() && &caps[1] != EPOCH_DATE);

    debug!("Resetting timestamps (creation date present: {})", found);
    PassOutput {
        data: apply_rules(DATE_RULES.as_slice(), data),
        changes: ChangeReport::flagged(Category::Timestamps, found),
    }
}
