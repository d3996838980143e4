//! ZIP archive creation.
//!
//! Entries are written in input order under their logical path, verbatim.
//! Names are not validated here: packing runs over trusted local input and
//! all path checks happen at extraction time.

use crate::ArchiveError;
use crate::Result;
use crate::config::DEFAULT_FILE_MODE;
use crate::creation::config::CreationConfig;
use crate::creation::report::CreationReport;
use crate::creation::walker::collect_entries;
use crate::types::ArchiveEntry;
use log::debug;
use log::trace;
use std::fs::File;
use std::io::Cursor;
use std::io::Read;
use std::io::Seek;
use std::io::SeekFrom;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use zip::CompressionMethod;
use zip::DateTime;
use zip::ZipWriter;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;

/// A finished archive held in memory, readable as a byte stream.
///
/// # Examples
///
/// ```
/// use std::io::Read;
/// use zipstow_core::ArchiveEntry;
/// use zipstow_core::creation::CreationConfig;
/// use zipstow_core::creation::zip::pack_entries;
///
/// let entries = [ArchiveEntry::new("/root.txt", "root")];
/// let mut packed = pack_entries(&entries, &CreationConfig::default())?;
///
/// let mut bytes = Vec::new();
/// packed.read_to_end(&mut bytes)?;
/// assert_eq!(&bytes[0..4], b"PK\x03\x04");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PackedArchive {
    data: Cursor<Vec<u8>>,
    report: CreationReport,
}

impl PackedArchive {
    /// Returns the archive size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.get_ref().len()
    }

    /// Returns `true` if the archive holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.get_ref().is_empty()
    }

    /// Returns the complete archive bytes, regardless of read position.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.data.get_ref()
    }

    /// Consumes the archive and returns its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data.into_inner()
    }

    /// Returns the report of the pack operation.
    #[must_use]
    pub fn report(&self) -> &CreationReport {
        &self.report
    }
}

impl Read for PackedArchive {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.data.read(buf)
    }
}

impl AsRef<[u8]> for PackedArchive {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Packs entries into an in-memory archive.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the ZIP writer
/// rejects an entry (for example a duplicate name).
pub fn pack_entries(entries: &[ArchiveEntry], config: &CreationConfig) -> Result<PackedArchive> {
    let (data, report) = pack_entries_to_writer(entries, Cursor::new(Vec::new()), config)?;
    Ok(PackedArchive {
        data: Cursor::new(data.into_inner()),
        report,
    })
}

/// Packs entries into an archive file at `output`, creating or truncating it.
///
/// On error the partially written file is left in place.
///
/// # Errors
///
/// Returns an error if the output cannot be created or writing fails.
pub fn pack_entries_to_file<P: AsRef<Path>>(
    entries: &[ArchiveEntry],
    output: P,
    config: &CreationConfig,
) -> Result<CreationReport> {
    let output = output.as_ref();
    let file = File::create(output).map_err(|e| {
        ArchiveError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to create {}: {e}", output.display()),
        ))
    })?;
    let (_file, report) = pack_entries_to_writer(entries, file, config)?;
    Ok(report)
}

/// Packs entries into any seekable writer and returns it once finished.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or writing fails.
pub fn pack_entries_to_writer<W: Write + Seek>(
    entries: &[ArchiveEntry],
    writer: W,
    config: &CreationConfig,
) -> Result<(W, CreationReport)> {
    config.validate()?;

    let start = Instant::now();
    let options = base_options(config);
    let mut zip = ZipWriter::new(writer);
    let mut report = CreationReport::new();

    debug!("packing {} entries", entries.len());

    for entry in entries {
        let name = entry.logical_path();
        let entry_options = options
            .unix_permissions(entry.mode().unwrap_or(DEFAULT_FILE_MODE))
            .large_file(entry.len() as u64 >= u64::from(u32::MAX));

        zip.start_file(name, entry_options)
            .map_err(|e| entry_error(name, e))?;
        zip.write_all(entry.content())
            .map_err(|e| ArchiveError::entry_io(name, e))?;

        trace!("added {name} ({} bytes)", entry.len());
        report.files_added += 1;
        report.bytes_written += entry.len() as u64;
    }

    let mut writer = zip.finish()?;
    report.bytes_compressed = writer.seek(SeekFrom::End(0))?;
    report.duration = start.elapsed();

    debug!(
        "packed {} files, {} bytes into {} bytes",
        report.files_added, report.bytes_written, report.bytes_compressed
    );

    Ok((writer, report))
}

/// Packs a directory tree into an archive file at `output`.
///
/// See [`collect_entries`] for naming and ordering.
///
/// # Errors
///
/// Returns an error if walking, reading, or writing fails.
pub fn pack_directory<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    output: Q,
    config: &CreationConfig,
) -> Result<CreationReport> {
    config.validate()?;
    let entries = collect_entries(source, config)?;
    pack_entries_to_file(&entries, output, config)
}

/// Packs a directory tree into an in-memory archive.
///
/// # Errors
///
/// Returns an error if walking, reading, or writing fails.
pub fn pack_directory_to_bytes<P: AsRef<Path>>(
    source: P,
    config: &CreationConfig,
) -> Result<PackedArchive> {
    config.validate()?;
    let entries = collect_entries(source, config)?;
    pack_entries(&entries, config)
}

/// File options shared by every entry of one pack operation.
///
/// The modification time is pinned to the ZIP epoch so repacking unchanged
/// input yields identical bytes.
fn base_options(config: &CreationConfig) -> SimpleFileOptions {
    let options = SimpleFileOptions::default().last_modified_time(DateTime::default());

    match config.compression_level {
        Some(0) => options.compression_method(CompressionMethod::Stored),
        level => options
            .compression_method(CompressionMethod::Deflated)
            .compression_level(level.map(i64::from)),
    }
}

fn entry_error(name: &str, err: ZipError) -> ArchiveError {
    match err {
        ZipError::Io(e) => ArchiveError::entry_io(name, e),
        other => ArchiveError::InvalidArchive(format!("cannot add entry {name}: {other}")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_entries() -> Vec<ArchiveEntry> {
        vec![
            ArchiveEntry::new("/a/b/c/d.txt", "abcd"),
            ArchiveEntry::new("/root.txt", "root"),
        ]
    }

    #[test]
    fn test_pack_entries_names_verbatim_in_order() {
        let packed = pack_entries(&sample_entries(), &CreationConfig::default()).unwrap();
        assert_eq!(packed.report().files_added, 2);
        assert_eq!(packed.report().bytes_written, 8);
        assert_eq!(packed.report().bytes_compressed, packed.len() as u64);

        let mut archive = zip::ZipArchive::new(Cursor::new(packed.into_bytes())).unwrap();
        assert_eq!(archive.len(), 2);

        let names: Vec<_> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, ["/a/b/c/d.txt", "/root.txt"]);

        for i in 0..archive.len() {
            assert!(!archive.by_index(i).unwrap().is_dir());
        }
    }

    #[test]
    fn test_pack_entries_content() {
        let packed = pack_entries(&sample_entries(), &CreationConfig::default()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(packed.as_bytes())).unwrap();

        let mut content = String::new();
        archive
            .by_name("/a/b/c/d.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "abcd");
    }

    #[test]
    fn test_packed_archive_is_readable_stream() {
        let mut packed = pack_entries(&sample_entries(), &CreationConfig::default()).unwrap();
        let expected = packed.as_bytes().to_vec();

        let mut streamed = Vec::new();
        packed.read_to_end(&mut streamed).unwrap();
        assert_eq!(streamed, expected);
        assert!(!packed.is_empty());
    }

    #[test]
    fn test_pack_is_byte_stable() {
        let first = pack_entries(&sample_entries(), &CreationConfig::default()).unwrap();
        let second = pack_entries(&sample_entries(), &CreationConfig::default()).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_pack_stored_and_deflated() {
        let entries = vec![ArchiveEntry::new("a.txt", "a".repeat(10_000))];

        let stored =
            pack_entries(&entries, &CreationConfig::default().with_compression_level(0)).unwrap();
        let deflated =
            pack_entries(&entries, &CreationConfig::default().with_compression_level(9)).unwrap();
        assert!(deflated.len() < stored.len());

        let mut archive = zip::ZipArchive::new(Cursor::new(stored.into_bytes())).unwrap();
        assert_eq!(
            archive.by_index(0).unwrap().compression(),
            CompressionMethod::Stored
        );
    }

    #[test]
    fn test_pack_invalid_level() {
        let config = CreationConfig {
            compression_level: Some(11),
            ..CreationConfig::default()
        };
        let err = pack_entries(&sample_entries(), &config).unwrap_err();
        assert!(matches!(err, ArchiveError::InvalidCompressionLevel { level: 11 }));
    }

    #[test]
    fn test_pack_empty_entry_list() {
        let packed = pack_entries(&[], &CreationConfig::default()).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(packed.into_bytes())).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[test]
    fn test_pack_entries_to_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("out.zip");

        let report =
            pack_entries_to_file(&sample_entries(), &output, &CreationConfig::default()).unwrap();

        assert_eq!(report.files_added, 2);
        let data = fs::read(&output).unwrap();
        assert_eq!(&data[0..4], b"PK\x03\x04");
        assert_eq!(report.bytes_compressed, data.len() as u64);
    }

    #[test]
    fn test_pack_directory() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("root");
        fs::create_dir_all(source.join("a/b/c")).unwrap();
        fs::write(source.join("a/b/c/d.txt"), "abcd").unwrap();
        fs::write(source.join("root.txt"), "root").unwrap();
        let output = temp.path().join("root.zip");

        let report = pack_directory(&source, &output, &CreationConfig::default()).unwrap();
        assert_eq!(report.files_added, 2);

        let mut archive = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
        assert!(archive.by_name("a/b/c/d.txt").is_ok());
        assert!(archive.by_name("root.txt").is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_pack_records_entry_mode() {
        let entries = vec![
            ArchiveEntry::new("run.sh", "#!/bin/sh").with_mode(0o755),
            ArchiveEntry::new("data.txt", "x"),
        ];
        let packed = pack_entries(&entries, &CreationConfig::default()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(packed.into_bytes())).unwrap();

        assert_eq!(archive.by_index(0).unwrap().unix_mode().unwrap() & 0o777, 0o755);
        assert_eq!(archive.by_index(1).unwrap().unix_mode().unwrap() & 0o777, 0o644);
    }

    #[test]
    fn test_pack_directory_missing_source() {
        let temp = TempDir::new().unwrap();
        let result = pack_directory_to_bytes(temp.path().join("nope"), &CreationConfig::default());
        assert!(matches!(result, Err(ArchiveError::SourceNotFound { .. })));
    }
}
