//! Core extraction engine.

use std::fs::File;
use std::fs::OpenOptions;
use std::io::Read;
use std::io::Seek;
use std::path::Path;
use std::time::Instant;

use log::debug;
use log::trace;
use log::warn;
use zip::ZipArchive;

use crate::ArchiveError;
use crate::ExtractionConfig;
use crate::ExtractionReport;
use crate::Result;
use crate::copy::CopyBuffer;
use crate::copy::copy_with_buffer;
use crate::types::DestDir;
use crate::types::ExtractionLayout;
use crate::types::SafePath;

use super::source::ArchiveSource;
use super::stream::read_to_buffer;

/// Extracts ZIP archives into a destination directory.
///
/// Entries are processed in archive order. The first error aborts the run;
/// files written before it stay on disk. Extract into a scratch directory and
/// rename it afterwards if all-or-nothing behavior is needed.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use zipstow_core::ExtractionConfig;
/// use zipstow_core::extraction::Extractor;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let extractor = Extractor::new(ExtractionConfig::flat());
/// let report = extractor.extract(File::open("bundle.zip")?, "/tmp/out")?;
/// println!("Extracted {} files", report.files_extracted);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractionConfig,
}

impl Extractor {
    /// Creates a new extractor with the given configuration.
    #[must_use]
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Returns the extractor configuration.
    #[must_use]
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extracts an archive from any seekable reader.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The destination cannot be resolved (`Io`)
    /// - The container is malformed (`InvalidArchive`)
    /// - An entry would escape the destination (`PathTraversal`)
    /// - Creating or writing an output file fails (`EntryIo`)
    pub fn extract<R: Read + Seek, P: AsRef<Path>>(
        &self,
        reader: R,
        output_dir: P,
    ) -> Result<ExtractionReport> {
        let start = Instant::now();
        let dest = DestDir::resolve(output_dir.as_ref(), self.config.create_destination)?;
        let mut archive = ZipArchive::new(reader)?;

        debug!(
            "extracting {} entries into {} ({} layout)",
            archive.len(),
            dest.as_path().display(),
            self.config.layout
        );

        let mut report = ExtractionReport::new();
        let mut buffer = CopyBuffer::new();

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let name = entry.name().to_string();

            if entry.is_dir() {
                trace!("skipping directory marker {name}");
                report.directories_skipped += 1;
                continue;
            }

            let target = SafePath::validate(&name, &dest, self.config.layout).inspect_err(|e| {
                warn!("rejecting entry: {e}");
            })?;
            let mode = self.config.file_mode(entry.unix_mode());

            trace!("writing {name} to {}", target.as_path().display());
            let written = self.write_entry(&mut entry, &name, &target, mode, &mut buffer)?;

            report.files_extracted += 1;
            report.bytes_written += written;
        }

        report.duration = start.elapsed();
        debug!(
            "extracted {} files ({} bytes) in {:?}",
            report.files_extracted, report.bytes_written, report.duration
        );

        Ok(report)
    }

    /// Extracts an archive from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the archive cannot be opened, otherwise see
    /// [`Extractor::extract`].
    pub fn extract_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        archive_path: P,
        output_dir: Q,
    ) -> Result<ExtractionReport> {
        let archive_path = archive_path.as_ref();
        let file = File::open(archive_path).map_err(|e| {
            ArchiveError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to open archive {}: {e}", archive_path.display()),
            ))
        })?;
        self.extract(file, output_dir)
    }

    /// Extracts an archive held in memory.
    ///
    /// # Errors
    ///
    /// See [`Extractor::extract`].
    pub fn extract_bytes<P: AsRef<Path>>(
        &self,
        bytes: &[u8],
        output_dir: P,
    ) -> Result<ExtractionReport> {
        self.extract(std::io::Cursor::new(bytes), output_dir)
    }

    /// Extracts an archive from a non-seekable stream.
    ///
    /// The stream is read to the end into memory, because the central
    /// directory sits at the end of a ZIP, and dropped before extraction
    /// starts. Memory use is bounded by the archive size.
    ///
    /// # Errors
    ///
    /// Returns `Io` if reading the stream fails, otherwise see
    /// [`Extractor::extract`].
    pub fn extract_reader<R: Read, P: AsRef<Path>>(
        &self,
        reader: R,
        output_dir: P,
    ) -> Result<ExtractionReport> {
        let buffered = read_to_buffer(reader)?;
        self.extract(buffered, output_dir)
    }

    /// Extracts from any [`ArchiveSource`].
    ///
    /// # Errors
    ///
    /// See the per-source methods.
    pub fn extract_source<P: AsRef<Path>>(
        &self,
        source: ArchiveSource<'_>,
        output_dir: P,
    ) -> Result<ExtractionReport> {
        match source {
            ArchiveSource::Path(path) => self.extract_file(path, output_dir),
            ArchiveSource::Bytes(bytes) => self.extract_bytes(&bytes, output_dir),
            ArchiveSource::Reader(reader) => self.extract_reader(reader, output_dir),
        }
    }

    /// Writes one entry to its validated path. The output file is closed
    /// when this returns, whether or not the copy succeeded.
    fn write_entry<R: Read>(
        &self,
        entry: &mut R,
        name: &str,
        target: &SafePath,
        mode: u32,
        buffer: &mut CopyBuffer,
    ) -> Result<u64> {
        let path = target.as_path();

        if self.config.layout == ExtractionLayout::Hierarchical
            && let Some(parent) = path.parent()
        {
            std::fs::create_dir_all(parent).map_err(|e| ArchiveError::entry_io(name, e))?;
        }

        let mut file = open_output(path, mode).map_err(|e| ArchiveError::entry_io(name, e))?;
        copy_with_buffer(entry, &mut file, buffer).map_err(|e| ArchiveError::entry_io(name, e))
    }
}

/// Creates or truncates an output file, applying `mode` on creation.
fn open_output(path: &Path, mode: u32) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    options.open(path)
}
