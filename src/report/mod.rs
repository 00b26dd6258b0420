//! Change report produced by a sanitize run
//! Author: kartik4091
//! Created: 2025-06-05

use serde::{Deserialize, Serialize};

use crate::config::Category;

pub mod formatter;

pub use formatter::{ReportFormat, ReportFormatter};

/// Evidence that a category changed something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEntry {
    Flag(bool),
    Count(usize),
}

impl ChangeEntry {
    pub fn is_set(self) -> bool {
        match self {
            ChangeEntry::Flag(flag) => flag,
            ChangeEntry::Count(count) => count > 0,
        }
    }
}

/// Per-category record of what a run changed.
///
/// Every pass returns one of these as a delta; the pipeline folds the deltas
/// together with [`ChangeReport::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReport {
    pub author: bool,
    pub creator: bool,
    pub producer: bool,
    pub title: bool,
    pub subject: bool,
    pub timestamps: bool,
    pub timezone: bool,
    pub lang_tags: usize,
    pub doc_id: bool,
    pub xmp: bool,
}

impl ChangeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A delta with a single flag category set
    pub fn flagged(category: Category, flag: bool) -> Self {
        let mut report = Self::default();
        match category {
            Category::Author => report.author = flag,
            Category::Creator => report.creator = flag,
            Category::Producer => report.producer = flag,
            Category::Title => report.title = flag,
            Category::Subject => report.subject = flag,
            Category::Timestamps => report.timestamps = flag,
            Category::Timezone => report.timezone = flag,
            Category::LangTags => report.lang_tags = usize::from(flag),
            Category::DocId => report.doc_id = flag,
            Category::Xmp => report.xmp = flag,
        }
        report
    }

    /// A delta carrying only a language tag count
    pub fn lang_tags(count: usize) -> Self {
        Self {
            lang_tags: count,
            ..Self::default()
        }
    }

    /// Folds a delta into this report: flags are OR-ed, counts are added
    pub fn merge(&mut self, delta: ChangeReport) {
        self.author |= delta.author;
        self.creator |= delta.creator;
        self.producer |= delta.producer;
        self.title |= delta.title;
        self.subject |= delta.subject;
        self.timestamps |= delta.timestamps;
        self.timezone |= delta.timezone;
        self.lang_tags += delta.lang_tags;
        self.doc_id |= delta.doc_id;
        self.xmp |= delta.xmp;
    }

    pub fn entry(&self, category: Category) -> ChangeEntry {
        match category {
            Category::Author => ChangeEntry::Flag(self.author),
            Category::Creator => ChangeEntry::Flag(self.creator),
            Category::Producer => ChangeEntry::Flag(self.producer),
            Category::Title => ChangeEntry::Flag(self.title),
            Category::Subject => ChangeEntry::Flag(self.subject),
            Category::Timestamps => ChangeEntry::Flag(self.timestamps),
            Category::Timezone => ChangeEntry::Flag(self.timezone),
            Category::LangTags => ChangeEntry::Count(self.lang_tags),
            Category::DocId => ChangeEntry::Flag(self.doc_id),
            Category::Xmp => ChangeEntry::Flag(self.xmp),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (Category, ChangeEntry)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.entry(c)))
    }

    pub fn has_changes(&self) -> bool {
        self.entries().any(|(_, entry)| entry.is_set())
    }

    /// Human-readable line per category that changed, in category order
    pub fn summary_lines(&self) -> Vec<String> {
        self.entries()
            .filter(|(_, entry)| entry.is_set())
            .map(|(category, entry)| match (category, entry) {
                (Category::LangTags, ChangeEntry::Count(n)) => {
                    format!("Language tags: {} fixed", n)
                }
                (Category::Timestamps, _) => "Timestamps reset".to_string(),
                (Category::DocId, _) => "Document ID zeroed".to_string(),
                (Category::Xmp, _) => "XMP metadata cleared".to_string(),
                (other, _) => format!("{} removed", other.label()),
            })
            .collect()
    }
}
