//! Binary Sanitization Module
//! Byte-regex rewrite rules applied to raw PDF buffers.
//! Author: kartik4091
//! Created: 2025-06-03 09:11:32 UTC

use std::borrow::Cow;

use regex::bytes::{Captures, NoExpand, Regex};

/// A compiled byte pattern and what to put in place of each match
#[derive(Debug, Clone)]
pub struct RewriteRule {
    /// Regex matching the region to rewrite
    pub regex: Regex,
    /// Replacement bytes
    pub replacement: Vec<u8>,
    /// Whether `$name` / `${1}` references in `replacement` are expanded
    pub expand: bool,
}

impl RewriteRule {
    /// Rule whose replacement is inserted verbatim
    pub fn literal(pattern: &str, replacement: &[u8]) -> Self {
        Self {
            regex: Regex::new(pattern).expect("Invalid regex for literal rewrite rule"),
            replacement: replacement.to_vec(),
            expand: false,
        }
    }

    /// Rule whose replacement may reference capture groups
    pub fn template(pattern: &str, template: &[u8]) -> Self {
        Self {
            regex: Regex::new(pattern).expect("Invalid regex for template rewrite rule"),
            replacement: template.to_vec(),
            expand: true,
        }
    }

    pub fn is_match(&self, data: &[u8]) -> bool {
        self.regex.is_match(data)
    }

    pub fn count(&self, data: &[u8]) -> usize {
        self.regex.find_iter(data).count()
    }

    /// Rewrites every non-overlapping match, borrowing `data` if nothing matched
    pub fn apply<'a>(&self, data: &'a [u8]) -> Cow<'a, [u8]> {
        if self.expand {
            self.regex.replace_all(data, self.replacement.as_slice())
        } else {
            self.regex
                .replace_all(data, NoExpand(self.replacement.as_slice()))
        }
    }
}

/// Rewrites every match of `regex` with whatever `rewrite` returns for it
pub fn rewrite_with<'a, F>(regex: &Regex, data: &'a [u8], rewrite: F) -> Cow<'a, [u8]>
where
    F: FnMut(&Captures<'_>) -> Vec<u8>,
{
    regex.replace_all(data, rewrite)
}

/// Folds `data` through `rules` in order, copying only when a rule matches
pub fn apply_rules<'a>(rules: &[RewriteRule], data: &'a [u8]) -> Cow<'a, [u8]> {
    let mut current = Cow::Borrowed(data);
    for rule in rules {
        let rewritten = match rule.apply(&current) {
            Cow::Owned(rewritten) => Some(rewritten),
            Cow::Borrowed(_) => None,
        };
        if let Some(rewritten) = rewritten {
            current = Cow::Owned(rewritten);
        }
    }
    current
}
