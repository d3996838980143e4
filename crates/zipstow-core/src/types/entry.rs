//! In-memory archive entry.

/// One file to be packed: a logical path inside the archive and its bytes.
///
/// The logical path is written verbatim as the ZIP entry name. It may carry a
/// leading separator and nested directories (`/a/b/c/d.txt`). An optional
/// unix mode is recorded in the archive; without one the writer uses `0o644`.
///
/// # Examples
///
/// ```
/// use zipstow_core::ArchiveEntry;
///
/// let entry = ArchiveEntry::new("/docs/readme.txt", "hello");
/// assert_eq!(entry.logical_path(), "/docs/readme.txt");
/// assert_eq!(entry.content(), b"hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveEntry {
    logical_path: String,
    content: Vec<u8>,
    mode: Option<u32>,
}

impl ArchiveEntry {
    /// Creates an entry from a logical path and content.
    pub fn new(logical_path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            logical_path: logical_path.into(),
            content: content.into(),
            mode: None,
        }
    }

    /// Sets the unix permission bits recorded for this entry.
    #[must_use]
    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode & 0o777);
        self
    }

    /// Returns the logical path used as the entry name.
    #[inline]
    #[must_use]
    pub fn logical_path(&self) -> &str {
        &self.logical_path
    }

    /// Returns the entry content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the recorded unix mode, if any.
    #[inline]
    #[must_use]
    pub fn mode(&self) -> Option<u32> {
        self.mode
    }

    /// Returns the content length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the entry has no content.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<P: Into<String>, C: Into<Vec<u8>>> From<(P, C)> for ArchiveEntry {
    fn from((path, content): (P, C)) -> Self {
        Self::new(path, content)
    }
}
