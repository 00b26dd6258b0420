//! Progress reporting for a sanitize run

use std::fmt;

/// Fixed points at which a run reports progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Checkpoint {
    Read,
    Streams,
    Timezone,
    Author,
    Creator,
    Producer,
    Title,
    Subject,
    LangTags,
    DocId,
    Timestamps,
    Xmp,
    Write,
    Done,
}

impl Checkpoint {
    pub fn percent(self) -> u8 {
        match self {
            Checkpoint::Read => 5,
            Checkpoint::Streams => 10,
            Checkpoint::Timezone => 20,
            Checkpoint::Author => 25,
            Checkpoint::Creator => 30,
            Checkpoint::Producer => 35,
            Checkpoint::Title => 40,
            Checkpoint::Subject => 45,
            Checkpoint::LangTags => 50,
            Checkpoint::DocId => 55,
            Checkpoint::Timestamps => 60,
            Checkpoint::Xmp => 70,
            Checkpoint::Write => 90,
            Checkpoint::Done => 100,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Checkpoint::Read => "Reading PDF...",
            Checkpoint::Streams => "Processing compressed streams...",
            Checkpoint::Timezone => "Removing timezone info...",
            Checkpoint::Author => "Removing author...",
            Checkpoint::Creator => "Removing creator...",
            Checkpoint::Producer => "Removing producer...",
            Checkpoint::Title => "Removing title...",
            Checkpoint::Subject => "Removing subject...",
            Checkpoint::LangTags => "Removing language tags...",
            Checkpoint::DocId => "Removing document ID...",
            Checkpoint::Timestamps => "Removing timestamps...",
            Checkpoint::Xmp => "Removing XMP metadata...",
            Checkpoint::Write => "Writing file...",
            Checkpoint::Done => "Complete!",
        }
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:3}%] {}", self.percent(), self.label())
    }
}

/// Receives progress events. Purely observational.
pub trait ProgressSink {
    fn report(&mut self, percent: u8, message: &str);
}

impl<F> ProgressSink for F
where
    F: FnMut(u8, &str),
{
    fn report(&mut self, percent: u8, message: &str) {
        self(percent, message)
    }
}

/// Optional sink wrapper; a missing sink skips every checkpoint
pub(crate) struct Progress<'a> {
    sink: Option<&'a mut dyn ProgressSink>,
}

impl<'a> Progress<'a> {
    pub(crate) fn new(sink: Option<&'a mut dyn ProgressSink>) -> Self {
        Self { sink }
    }

    pub(crate) fn emit(&mut self, checkpoint: Checkpoint) {
        if let Some(sink) = self.sink.as_mut() {
            sink.report(checkpoint.percent(), checkpoint.label());
        }
    }
}
