//! Sanitization categories and the option set that enables them
//! Author: kartik4091
//! Created: 2025-06-03

use std::{collections::HashMap, fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One kind of forensic trace the sanitizer knows how to remove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Author,
    Creator,
    Producer,
    Title,
    Subject,
    Timestamps,
    Timezone,
    LangTags,
    DocId,
    Xmp,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Author,
        Category::Creator,
        Category::Producer,
        Category::Title,
        Category::Subject,
        Category::Timestamps,
        Category::Timezone,
        Category::LangTags,
        Category::DocId,
        Category::Xmp,
    ];

    /// Key used in option sets, e.g. `remove_author`
    pub fn option_key(self) -> &'static str {
        match self {
            Category::Author => "remove_author",
            Category::Creator => "remove_creator",
            Category::Producer => "remove_producer",
            Category::Title => "remove_title",
            Category::Subject => "remove_subject",
            Category::Timestamps => "remove_timestamps",
            Category::Timezone => "remove_timezone",
            Category::LangTags => "remove_lang_tags",
            Category::DocId => "remove_doc_id",
            Category::Xmp => "remove_xmp",
        }
    }

    /// Key used in change reports, e.g. `author`
    pub fn report_key(self) -> &'static str {
        match self {
            Category::Author => "author",
            Category::Creator => "creator",
            Category::Producer => "producer",
            Category::Title => "title",
            Category::Subject => "subject",
            Category::Timestamps => "timestamps",
            Category::Timezone => "timezone",
            Category::LangTags => "lang_tags",
            Category::DocId => "doc_id",
            Category::Xmp => "xmp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Author => "Author",
            Category::Creator => "Creator",
            Category::Producer => "Producer",
            Category::Title => "Title",
            Category::Subject => "Subject",
            Category::Timestamps => "Timestamps",
            Category::Timezone => "Timezone",
            Category::LangTags => "Language Tags",
            Category::DocId => "Document ID",
            Category::Xmp => "XMP Metadata",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Author => "Remove document author name",
            Category::Creator => "Remove creating application",
            Category::Producer => "Remove PDF producer software",
            Category::Title => "Remove document title",
            Category::Subject => "Remove document subject",
            Category::Timestamps => "Reset creation/modification dates",
            Category::Timezone => "Remove timezone info (+02:00)",
            Category::LangTags => "Remove Hebrew /Lang(he) tags",
            Category::DocId => "Zero the document identifier",
            Category::Xmp => "Clear embedded XMP data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report_key())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Accepts either the report key (`doc_id`) or the option key (`remove_doc_id`)
    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Category::ALL
            .into_iter()
            .find(|c| c.report_key() == key || c.option_key() == key)
            .ok_or_else(|| Error::InvalidConfiguration(format!("Unknown category: {}", s)))
    }
}

/// Which categories a run should sanitize.
///
/// `Default` enables everything. When deserialized from an explicit map, every
/// key that is absent is disabled and unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeOptions {
    #[serde(default)]
    pub remove_author: bool,
    #[serde(default)]
    pub remove_creator: bool,
    #[serde(default)]
    pub remove_producer: bool,
    #[serde(default)]
    pub remove_title: bool,
    #[serde(default)]
    pub remove_subject: bool,
    #[serde(default)]
    pub remove_timestamps: bool,
    #[serde(default)]
    pub remove_timezone: bool,
    #[serde(default)]
    pub remove_lang_tags: bool,
    #[serde(default)]
    pub remove_doc_id: bool,
    #[serde(default)]
    pub remove_xmp: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self::all()
    }
}

impl SanitizeOptions {
    pub fn all() -> Self {
        Category::ALL
            .into_iter()
            .fold(Self::none(), |opts, c| opts.with(c, true))
    }

    pub fn none() -> Self {
        Self {
            remove_author: false,
            remove_creator: false,
            remove_producer: false,
            remove_title: false,
            remove_subject: false,
            remove_timestamps: false,
            remove_timezone: false,
            remove_lang_tags: false,
            remove_doc_id: false,
            remove_xmp: false,
        }
    }

    /// Only the given categories enabled
    pub fn only(categories: &[Category]) -> Self {
        categories
            .iter()
            .fold(Self::none(), |opts, &c| opts.with(c, true))
    }

    /// Keeps a category enabled only if it is enabled here and listed in
    /// `categories`
    pub fn restrict_to(self, categories: &[Category]) -> Self {
        Category::ALL.into_iter().fold(self, |opts, c| {
            let keep = opts.is_enabled(c) && categories.contains(&c);
            opts.with(c, keep)
        })
    }

    /// Builds an option set from `remove_*` keys; unknown keys are ignored
    pub fn from_map(map: &HashMap<String, bool>) -> Self {
        Category::ALL.into_iter().fold(Self::none(), |opts, c| {
            opts.with(c, map.get(c.option_key()).copied().unwrap_or(false))
        })
    }

    /// Loads an option set from a JSON file, falling back to YAML
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .or_else(|_| serde_yaml::from_str(&content))
            .map_err(|e| Error::ConfigError(format!("Config parsing error: {}", e)))
    }

    pub fn with(mut self, category: Category, enabled: bool) -> Self {
        *self.flag_mut(category) = enabled;
        self
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Author => self.remove_author,
            Category::Creator => self.remove_creator,
            Category::Producer => self.remove_producer,
            Category::Title => self.remove_title,
            Category::Subject => self.remove_subject,
            Category::Timestamps => self.remove_timestamps,
            Category::Timezone => self.remove_timezone,
            Category::LangTags => self.remove_lang_tags,
            Category::DocId => self.remove_doc_id,
            Category::Xmp => self.remove_xmp,
        }
    }

    pub fn enabled(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&c| self.is_enabled(c))
            .collect()
    }

    pub fn any_enabled(&self) -> bool {
        Category::ALL.into_iter().any(|c| self.is_enabled(c))
    }

    fn flag_mut(&mut self, category: Category) -> &mut bool {
        match category {
            Category::Author => &mut self.remove_author,
            Category::Creator => &mut self.remove_creator,
            Category::Producer => &mut self.remove_producer,
            Category::Title => &mut self.remove_title,
            Category::Subject => &mut self.remove_subject,
            Category::Timestamps => &mut self.remove_timestamps,
            Category::Timezone => &mut self.remove_timezone,
            Category::LangTags => &mut self.remove_lang_tags,
            Category::DocId => &mut self.remove_doc_id,
            Category::Xmp => &mut self.remove_xmp,
        }
    }
}
