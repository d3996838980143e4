//! Extraction operation reporting.

use std::time::Duration;

/// Report of an archive extraction operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Number of files written to the destination.
    pub files_extracted: usize,

    /// Number of directory markers skipped.
    pub directories_skipped: usize,

    /// Total bytes written to disk.
    pub bytes_written: u64,

    /// Duration of the extraction operation.
    pub duration: Duration,
}

impl ExtractionReport {
    /// Creates a new empty extraction report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of archive entries visited.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        self.files_extracted + self.directories_skipped
    }
}
