//! PDF Metadata Sanitization Pipeline
//! Author: kartik4091
//! Created: 2025-06-05
//!
//! Reads the whole document, folds it through the enabled passes in a fixed
//! order, then writes the result. Each pass returns the rewritten bytes and a
//! change delta; nothing is shared between passes or between runs.

use std::{
    borrow::Cow,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::{
    cleaner::stream_processor::process_streams,
    config::{Category, SanitizeOptions},
    error::{Error, Result},
    metadata::{
        date_cleaner::{clean_timestamps, clean_timezone},
        id_cleaner::clean_document_ids,
        info_cleaner::{
            clean_author, clean_creator, clean_lang_tags, clean_producer, clean_subject,
            clean_title,
        },
        xmp_cleaner::clean_xmp,
    },
    progress::{Checkpoint, Progress, ProgressSink},
    report::ChangeReport,
};

/// Result of one pass over the buffer
#[derive(Debug)]
pub struct PassOutput<'a> {
    /// Rewritten bytes, borrowed when the pass changed nothing
    pub data: Cow<'a, [u8]>,
    /// What this pass changed
    pub changes: ChangeReport,
}

impl<'a> PassOutput<'a> {
    pub fn unchanged(data: &'a [u8]) -> Self {
        Self {
            data: Cow::Borrowed(data),
            changes: ChangeReport::default(),
        }
    }
}

/// One step of the pipeline
#[derive(Clone, Copy)]
pub struct Pass {
    pub name: &'static str,
    pub category: Category,
    pub checkpoint: Checkpoint,
    pub apply: for<'a> fn(&'a [u8]) -> PassOutput<'a>,
}

/// Every pass in execution order. The stream pass comes first so it sees the
/// original compressed bytes.
pub static PASSES: [Pass; 11] = [
    Pass {
        name: "compressed streams",
        category: Category::LangTags,
        checkpoint: Checkpoint::Streams,
        apply: process_streams,
    },
    Pass {
        name: "timezone",
        category: Category::Timezone,
        checkpoint: Checkpoint::Timezone,
        apply: clean_timezone,
    },
    Pass {
        name: "author",
        category: Category::Author,
        checkpoint: Checkpoint::Author,
        apply: clean_author,
    },
    Pass {
        name: "creator",
        category: Category::Creator,
        checkpoint: Checkpoint::Creator,
        apply: clean_creator,
    },
    Pass {
        name: "producer",
        category: Category::Producer,
        checkpoint: Checkpoint::Producer,
        apply: clean_producer,
    },
    Pass {
        name: "title",
        category: Category::Title,
        checkpoint: Checkpoint::Title,
        apply: clean_title,
    },
    Pass {
        name: "subject",
        category: Category::Subject,
        checkpoint: Checkpoint::Subject,
        apply: clean_subject,
    },
    Pass {
        name: "language tags",
        category: Category::LangTags,
        checkpoint: Checkpoint::LangTags,
        apply: clean_lang_tags,
    },
    Pass {
        name: "document ID",
        category: Category::DocId,
        checkpoint: Checkpoint::DocId,
        apply: clean_document_ids,
    },
    Pass {
        name: "timestamps",
        category: Category::Timestamps,
        checkpoint: Checkpoint::Timestamps,
        apply: clean_timestamps,
    },
    Pass {
        name: "XMP",
        category: Category::Xmp,
        checkpoint: Checkpoint::Xmp,
        apply: clean_xmp,
    },
];

/// Successful run: where the output went and what changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOutcome {
    pub output_path: PathBuf,
    pub report: ChangeReport,
}

/// `<stem>_sanitized<ext>` next to the input
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut name: OsString = input.file_stem().map(OsString::from).unwrap_or_default();
    name.push("_sanitized");
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Metadata sanitizer for one option set
#[derive(Debug, Clone, Copy, Default)]
pub struct Sanitizer {
    options: SanitizeOptions,
}

impl Sanitizer {
    pub fn new(options: SanitizeOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SanitizeOptions {
        &self.options
    }

    /// Passes that will run under the current options
    pub fn enabled_passes(&self) -> impl Iterator<Item = &'static Pass> + '_ {
        PASSES
            .iter()
            .filter(move |pass| self.options.is_enabled(pass.category))
    }

    /// Runs every enabled pass over an in-memory document
    pub fn sanitize_bytes(
        &self,
        data: Vec<u8>,
        sink: Option<&mut dyn ProgressSink>,
    ) -> (Vec<u8>, ChangeReport) {
        let mut progress = Progress::new(sink);
        self.run_passes(data, &mut progress)
    }

    /// Reads `input`, sanitizes it and writes the result to `output`, or to
    /// [`default_output_path`] when none is given.
    #[instrument(skip_all, fields(input = %input.as_ref().display()))]
    pub fn sanitize_file(
        &self,
        input: impl AsRef<Path>,
        output: Option<&Path>,
        sink: Option<&mut dyn ProgressSink>,
    ) -> Result<SanitizeOutcome> {
        let input = input.as_ref();
        let output_path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));
        let mut progress = Progress::new(sink);

        let data = fs::read(input).map_err(|e| Error::read(input, e))?;
        info!("Loaded {} bytes", data.len());
        progress.emit(Checkpoint::Read);

        let (data, report) = self.run_passes(data, &mut progress);

        progress.emit(Checkpoint::Write);
        fs::write(&output_path, &data).map_err(|e| Error::write(&output_path, e))?;
        progress.emit(Checkpoint::Done);

        info!("Wrote {} bytes to {}", data.len(), output_path.display());
        Ok(SanitizeOutcome {
            output_path,
            report,
        })
    }

    fn run_passes(&self, mut data: Vec<u8>, progress: &mut Progress<'_>) -> (Vec<u8>, ChangeReport) {
        let mut report = ChangeReport::new();

        for pass in self.enabled_passes() {
            progress.emit(pass.checkpoint);

            let PassOutput { data: rewritten, changes } = (pass.apply)(&data);
            let rewritten = match rewritten {
                Cow::Owned(bytes) => Some(bytes),
                Cow::Borrowed(_) => None,
            };
            if let Some(bytes) = rewritten {
                debug!("Pass '{}' rewrote buffer ({} bytes)", pass.name, bytes.len());
                data = bytes;
            }
            report.merge(changes);
        }

        (data, report)
    }
}

/// Runs [`Sanitizer::sanitize_file`] on tokio's blocking pool so an
/// interactive caller stays responsive.
pub async fn sanitize_in_background<S>(
    options: SanitizeOptions,
    input: PathBuf,
    output: Option<PathBuf>,
    mut sink: S,
) -> Result<SanitizeOutcome>
where
    S: ProgressSink + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        Sanitizer::new(options).sanitize_file(&input, output.as_deref(), Some(&mut sink))
    })
    .await?
}
