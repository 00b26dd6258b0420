//! XMP metadata cleaner for PDF documents
//! Author: kartik4091
//! Created: 2025-06-05

use lazy_static::lazy_static;
use tracing::debug;

use crate::cleaner::binary_sanitizer::{apply_rules, RewriteRule};
use crate::config::Category;
use crate::pipeline::PassOutput;
use crate::report::ChangeReport;

pub const PLACEHOLDER_UUID: &str = "uuid:00000000-0000-0000-0000-000000000000";
pub const EPOCH_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

/// How an element's content is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmpContent {
    /// Simple scalar, emptied
    Empty,
    /// `rdf:Seq` with a single empty item
    EmptySeq,
    /// `rdf:Alt` with a single empty `x-default` item
    EmptyAlt,
    /// Fixed text
    Fixed(&'static str),
}

impl XmpContent {
    fn render(self) -> &'static str {
        match self {
            XmpContent::Empty => "",
            XmpContent::EmptySeq => "<rdf:Seq><rdf:li></rdf:li></rdf:Seq>",
            XmpContent::EmptyAlt => r#"<rdf:Alt><rdf:li xml:lang="x-default"></rdf:li></rdf:Alt>"#,
            XmpContent::Fixed(text) => text,
        }
    }

    /// Structured values span lines and hold child elements
    fn is_structured(self) -> bool {
        matches!(self, XmpContent::EmptySeq | XmpContent::EmptyAlt)
    }
}

/// Elements rewritten by the XMP pass, in the order they are applied
pub const XMP_FIELDS: [(&str, XmpContent); 9] = [
    ("xmp:CreatorTool", XmpContent::Empty),
    ("dc:creator", XmpContent::EmptySeq),
    ("dc:title", XmpContent::EmptyAlt),
    ("dc:description", XmpContent::EmptyAlt),
    ("pdf:Producer", XmpContent::Empty),
    ("xmpMM:DocumentID", XmpContent::Fixed(PLACEHOLDER_UUID)),
    ("xmpMM:InstanceID", XmpContent::Fixed(PLACEHOLDER_UUID)),
    ("xmp:CreateDate", XmpContent::Fixed(EPOCH_TIMESTAMP)),
    ("xmp:ModifyDate", XmpContent::Fixed(EPOCH_TIMESTAMP)),
];

fn element_rule(element: &str, content: XmpContent) -> RewriteRule {
    let open = format!("<{}>", element);
    let close = format!("</{}>", element);

    // Structured values: shortest match across lines. Scalars: text only.
    let body = if content.is_structured() {
        "(?s:.*?)"
    } else {
        "[^<]*"
    };
    let pattern = format!(
        "(?-u){}{}{}",
        regex::escape(&open),
        body,
        regex::escape(&close)
    );
    let replacement = format!("{}{}{}", open, content.render(), close);
    RewriteRule::literal(&pattern, replacement.as_bytes())
}

lazy_static! {
    static ref XMP_RULES: Vec<RewriteRule> = XMP_FIELDS
        .iter()
        .map(|&(element, content)| element_rule(element, content))
        .collect();
}

/// Replaces known XMP element contents with empty or placeholder values.
///
/// The change flag is always set when this pass runs, whether or not any
/// element was present.
pub fn clean_xmp(data: &[u8]) -> PassOutput<'_> {
    let matched: usize = XMP_RULES.iter().map(|rule| rule.count(data)).sum();
    debug!("Rewriting {} XMP element(s)", matched);

    PassOutput {
        data: apply_rules(&XMP_RULES, data),
        changes: ChangeReport::flagged(Category::Xmp, true),
    }
}
