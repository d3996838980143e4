//! Error types for archive packing and extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `ArchiveError`.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Errors that can occur while packing or extracting an archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O operation failed while handling a specific archive entry.
    #[error("I/O error on entry {entry}: {source}")]
    EntryIo {
        /// Name of the entry as recorded in the archive.
        entry: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Archive is corrupted or not a ZIP container.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// Entry would be written outside the destination directory.
    #[error("path traversal detected: entry {entry} resolves to {path}")]
    PathTraversal {
        /// Name of the entry as recorded in the archive.
        entry: String,
        /// The resolved path that escaped the destination.
        path: PathBuf,
    },

    /// Source path for archive creation does not exist.
    #[error("source path not found: {path}")]
    SourceNotFound {
        /// The missing source path.
        path: PathBuf,
    },

    /// Compression level is outside the supported range.
    #[error("invalid compression level {level}, must be 0-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },
}

impl ArchiveError {
    /// Wraps an I/O error with the name of the entry being processed.
    pub(crate) fn entry_io(entry: &str, source: std::io::Error) -> Self {
        Self::EntryIo {
            entry: entry.to_string(),
            source,
        }
    }

    /// Returns `true` if this error was raised by the path guard.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use zipstow_core::ArchiveError;
    ///
    /// let err = ArchiveError::PathTraversal {
    ///     entry: "../evil.txt".to_string(),
    ///     path: PathBuf::from("/tmp/evil.txt"),
    /// };
    /// assert!(err.is_security_violation());
    ///
    /// let err = ArchiveError::InvalidArchive("truncated".to_string());
    /// assert!(!err.is_security_violation());
    /// ```
    #[must_use]
    pub const fn is_security_violation(&self) -> bool {
        matches!(self, Self::PathTraversal { .. })
    }

    /// Returns the archive entry name this error refers to, if any.
    #[must_use]
    pub fn entry_name(&self) -> Option<&str> {
        match self {
            Self::EntryIo { entry, .. } | Self::PathTraversal { entry, .. } => Some(entry),
            _ => None,
        }
    }
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Self::Io(e),
            other => Self::InvalidArchive(other.to_string()),
        }
    }
}
