//! Where an archive to extract comes from.

use std::borrow::Cow;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

/// An archive to extract: a file on disk, bytes in memory, or a stream.
///
/// A `Reader` source is owned by the extractor, which reads it to the end and
/// drops it, closing the underlying handle.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use std::path::Path;
/// use zipstow_core::extraction::ArchiveSource;
///
/// let from_path = ArchiveSource::from(Path::new("bundle.zip"));
/// let from_bytes = ArchiveSource::from(vec![0u8; 4]);
/// let from_reader = ArchiveSource::from_reader(Cursor::new(Vec::new()));
/// # let _ = (from_path, from_bytes, from_reader);
/// ```
pub enum ArchiveSource<'a> {
    /// Archive file on disk.
    Path(PathBuf),

    /// Complete archive held in memory.
    Bytes(Cow<'a, [u8]>),

    /// Readable stream, buffered fully before parsing.
    Reader(Box<dyn Read + 'a>),
}

impl<'a> ArchiveSource<'a> {
    /// Wraps any reader as a source.
    pub fn from_reader<R: Read + 'a>(reader: R) -> Self {
        Self::Reader(Box::new(reader))
    }
}

impl fmt::Debug for ArchiveSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Self::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl From<&Path> for ArchiveSource<'_> {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ArchiveSource<'_> {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<&'a [u8]> for ArchiveSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::Bytes(Cow::Borrowed(bytes))
    }
}

impl From<Vec<u8>> for ArchiveSource<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(Cow::Owned(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_contents() {
        let source = ArchiveSource::from(vec![1u8, 2, 3]);
        assert_eq!(format!("{source:?}"), "Bytes(3)");

        let source = ArchiveSource::from_reader(std::io::empty());
        assert_eq!(format!("{source:?}"), "Reader(..)");
    }

    #[test]
    fn test_from_path() {
        let source = ArchiveSource::from(Path::new("a.zip"));
        assert!(matches!(source, ArchiveSource::Path(p) if p == Path::new("a.zip")));
    }
}
