//! Info dictionary cleaner for PDF metadata
//! Author: kartik4091
//! Created: 2025-06-05

use lazy_static::lazy_static;
use tracing::debug;

use crate::cleaner::binary_sanitizer::{apply_rules, RewriteRule};
use crate::cleaner::stream_processor::{ENGLISH_LANG_TAG, HEBREW_LANG_TAG};
use crate::config::Category;
use crate::pipeline::PassOutput;
use crate::report::ChangeReport;
use crate::utils::pattern_utils::{count_pattern, replace_pattern};

/// Body of a literal string: any byte but `)` or `\`, or a backslash escape
pub(crate) const LITERAL_BODY: &str = r"(?:[^)\\]|\\(?s:.))";

/// Body of a hex string: hex digits and whitespace
pub(crate) const HEX_BODY: &str = r"[0-9A-Fa-f\s]";

/// Detection and rewrite rules for one Info dictionary key
pub struct InfoKeyCleaner {
    key: &'static str,
    present_literal: RewriteRule,
    present_hex: RewriteRule,
    rewrites: [RewriteRule; 2],
}

impl InfoKeyCleaner {
    pub fn new(key: &'static str) -> Self {
        let literal_any = format!(r"(?-u)/{}\({}*\)", key, LITERAL_BODY);
        let literal_non_empty = format!(r"(?-u)/{}\({}+\)", key, LITERAL_BODY);
        let hex_any = format!(r"(?-u)/{}<{}*>", key, HEX_BODY);
        let hex_non_empty = format!(r"(?-u)/{}<{}*[0-9A-Fa-f]{}*>", key, HEX_BODY, HEX_BODY);

        let empty_literal = format!("/{}()", key);
        let empty_hex = format!("/{}<>", key);

        Self {
            key,
            present_literal: RewriteRule::literal(&literal_non_empty, b""),
            present_hex: RewriteRule::literal(&hex_non_empty, b""),
            rewrites: [
                RewriteRule::literal(&literal_any, empty_literal.as_bytes()),
                RewriteRule::literal(&hex_any, empty_hex.as_bytes()),
            ],
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// True when at least one non-empty value is present
    pub fn is_present(&self, data: &[u8]) -> bool {
        self.present_literal.is_match(data) || self.present_hex.is_match(data)
    }

    /// Empties every literal and hex value of this key
    pub fn clean<'a>(&self, data: &'a [u8], category: Category) -> PassOutput<'a> {
        let found = self.is_present(data);
        if !found {
            debug!("/{}: nothing to remove", self.key);
            return PassOutput::unchanged(data);
        }

        debug!(
            "/{}: emptying {} literal and {} hex value(s)",
            self.key,
            self.present_literal.count(data),
            self.present_hex.count(data)
        );
        PassOutput {
            data: apply_rules(&self.rewrites, data),
            changes: ChangeReport::flagged(category, true),
        }
    }
}

lazy_static! {
    static ref AUTHOR: InfoKeyCleaner = InfoKeyCleaner::new("Author");
    static ref CREATOR: InfoKeyCleaner = InfoKeyCleaner::new("Creator");
    static ref PRODUCER: InfoKeyCleaner = InfoKeyCleaner::new("Producer");
    static ref TITLE: InfoKeyCleaner = InfoKeyCleaner::new("Title");
    static ref SUBJECT: InfoKeyCleaner = InfoKeyCleaner::new("Subject");
}

pub fn clean_author(data: &[u8]) -> PassOutput<'_> {
    AUTHOR.clean(data, Category::Author)
}

pub fn clean_creator(data: &[u8]) -> PassOutput<'_> {
    CREATOR.clean(data, Category::Creator)
}

pub fn clean_producer(data: &[u8]) -> PassOutput<'_> {
    PRODUCER.clean(data, Category::Producer)
}

pub fn clean_title(data: &[u8]) -> PassOutput<'_> {
    TITLE.clean(data, Category::Title)
}

pub fn clean_subject(data: &[u8]) -> PassOutput<'_> {
    SUBJECT.clean(data, Category::Subject)
}

/// Rewrites `/Lang(he)` that sits in plain bytes, outside compressed streams.
///
/// The count is added to the same `lang_tags` counter as the stream pass, so
/// a full run reports the combined total of compressed and uncompressed tags.
pub fn clean_lang_tags(data: &[u8]) -> PassOutput<'_> {
    let count = count_pattern(data, HEBREW_LANG_TAG);
    debug!("Fixing {} uncompressed language tag(s)", count);
    PassOutput {
        data: replace_pattern(data, HEBREW_LANG_TAG, ENGLISH_LANG_TAG),
        changes: ChangeReport::lang_tags(count),
    }
}
