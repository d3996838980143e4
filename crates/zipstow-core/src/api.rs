//! High-level public API for archive extraction and creation.
//!
//! These functions cover the common cases with default configuration. Use
//! [`Extractor`] or the [`creation`](crate::creation) module directly for
//! finer control.

use std::io::Read;
use std::path::Path;

use crate::ArchiveEntry;
use crate::ArchiveSource;
use crate::ExtractionConfig;
use crate::ExtractionLayout;
use crate::ExtractionReport;
use crate::Extractor;
use crate::Result;
use crate::creation::CreationConfig;
use crate::creation::CreationReport;
use crate::creation::PackedArchive;
use crate::creation::zip;

/// Extracts an archive from any source with an explicit configuration.
///
/// # Arguments
///
/// * `source` - Archive file path, in-memory bytes, or a stream
/// * `output_dir` - Directory where files will be extracted
/// * `config` - Extraction configuration
///
/// # Errors
///
/// Returns an error if:
/// - The archive cannot be opened or read
/// - The container is malformed
/// - An entry name would escape `output_dir`
/// - Writing an output file fails
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use zipstow_core::ExtractionConfig;
/// use zipstow_core::extract;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ExtractionConfig::flat();
/// let report = extract(Path::new("bundle.zip").into(), "/tmp/output", &config)?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
pub fn extract<P: AsRef<Path>>(
    source: ArchiveSource<'_>,
    output_dir: P,
    config: &ExtractionConfig,
) -> Result<ExtractionReport> {
    Extractor::new(config.clone()).extract_source(source, output_dir)
}

/// Extracts an archive file into `output_dir`.
///
/// # Errors
///
/// See [`extract`].
pub fn extract_file<P: AsRef<Path>, Q: AsRef<Path>>(
    archive_path: P,
    output_dir: Q,
    layout: ExtractionLayout,
) -> Result<ExtractionReport> {
    Extractor::new(ExtractionConfig::new(layout)).extract_file(archive_path, output_dir)
}

/// Extracts an in-memory archive into `output_dir`.
///
/// # Errors
///
/// See [`extract`].
pub fn extract_bytes<P: AsRef<Path>>(
    bytes: &[u8],
    output_dir: P,
    layout: ExtractionLayout,
) -> Result<ExtractionReport> {
    Extractor::new(ExtractionConfig::new(layout)).extract_bytes(bytes, output_dir)
}

/// Extracts an archive read from a stream into `output_dir`.
///
/// The stream is consumed and closed before extraction begins.
///
/// # Errors
///
/// See [`extract`].
pub fn extract_reader<R: Read, P: AsRef<Path>>(
    reader: R,
    output_dir: P,
    layout: ExtractionLayout,
) -> Result<ExtractionReport> {
    Extractor::new(ExtractionConfig::new(layout)).extract_reader(reader, output_dir)
}

/// Packs entries into an in-memory archive with default settings.
///
/// Names are stored verbatim and in input order.
///
/// # Errors
///
/// Returns an error if the ZIP writer rejects an entry.
///
/// # Examples
///
/// ```
/// use zipstow_core::ArchiveEntry;
/// use zipstow_core::pack_entries;
///
/// let packed = pack_entries(&[ArchiveEntry::new("hello.txt", "hi")])?;
/// assert_eq!(packed.report().files_added, 1);
/// # Ok::<(), zipstow_core::ArchiveError>(())
/// ```
pub fn pack_entries(entries: &[ArchiveEntry]) -> Result<PackedArchive> {
    zip::pack_entries(entries, &CreationConfig::default())
}

/// Packs entries into an archive file at `output` with default settings.
///
/// # Errors
///
/// Returns an error if the output cannot be created or writing fails.
pub fn pack_entries_to_file<P: AsRef<Path>>(
    entries: &[ArchiveEntry],
    output: P,
) -> Result<CreationReport> {
    zip::pack_entries_to_file(entries, output, &CreationConfig::default())
}

/// Packs a directory tree into an archive file with default settings.
///
/// Entry names are relative to `source`.
///
/// # Errors
///
/// Returns an error if `source` is missing or walking, reading, or writing
/// fails.
pub fn pack_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    output: Q,
) -> Result<CreationReport> {
    zip::pack_directory(source, output, &CreationConfig::default())
}

/// Packs a directory tree into an in-memory archive with default settings.
///
/// # Errors
///
/// Returns an error if `source` is missing or walking or reading fails.
pub fn pack_directory_to_bytes<P: AsRef<Path>>(source: P) -> Result<PackedArchive> {
    zip::pack_directory_to_bytes(source, &CreationConfig::default())
}
