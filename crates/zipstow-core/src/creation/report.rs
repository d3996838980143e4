//! Archive creation operation reporting.

use std::time::Duration;

/// Report of an archive creation operation.
///
/// # Examples
///
/// ```
/// use zipstow_core::creation::CreationReport;
///
/// let mut report = CreationReport::default();
/// report.bytes_written = 1000;
/// report.bytes_compressed = 500;
/// assert_eq!(report.compression_ratio(), 2.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationReport {
    /// Number of files added to the archive.
    pub files_added: usize,

    /// Total content bytes added (uncompressed).
    pub bytes_written: u64,

    /// Size of the finished archive in bytes.
    pub bytes_compressed: u64,

    /// Duration of the creation operation.
    pub duration: Duration,
}

impl CreationReport {
    /// Creates a new empty creation report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the compression ratio (uncompressed / archive size).
    ///
    /// Returns 0.0 if either size is 0.
    #[must_use]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_compressed == 0 || self.bytes_written == 0 {
            return 0.0;
        }
        self.bytes_written as f64 / self.bytes_compressed as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compression_ratio_zero_sizes() {
        let mut report = CreationReport::new();
        assert!(report.compression_ratio().abs() < f64::EPSILON);

        report.bytes_written = 100;
        assert!(report.compression_ratio().abs() < f64::EPSILON);
    }

    #[test]
    fn test_compression_ratio() {
        let report = CreationReport {
            bytes_written: 300,
            bytes_compressed: 100,
            ..CreationReport::new()
        };
        assert!((report.compression_ratio() - 3.0).abs() < f64::EPSILON);
    }
}
