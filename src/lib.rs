//! Main Library File for PDF Metadata Sanitization
//! Strips forensic identifiers (Info keys, dates, timezone offsets, document
//! IDs, language tags and XMP fields) from a PDF treated as a byte sequence,
//! without rebuilding the document.

// Configuration and Core Pipeline
pub mod config;
pub mod error;
pub mod pipeline;
pub mod progress;

// Stream and byte-level cleaning
pub mod cleaner {
    pub mod binary_sanitizer;
    pub mod stream_processor;
}

// Metadata passes
pub mod metadata {
    pub mod date_cleaner;
    pub mod id_cleaner;
    pub mod info_cleaner;
    pub mod xmp_cleaner;
}

// Change reporting
pub mod report;

// Shared Utilities
pub mod utils;

// Re-exports for crate consumers
pub use config::{Category, SanitizeOptions};
pub use error::{Error, Result};
pub use pipeline::{default_output_path, sanitize_in_background, Sanitizer, SanitizeOutcome};
pub use progress::{Checkpoint, ProgressSink};
pub use report::{ChangeEntry, ChangeReport, ReportFormat, ReportFormatter};
