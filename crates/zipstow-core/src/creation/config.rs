//! Configuration for archive creation operations.

use crate::ArchiveError;
use crate::Result;

/// Configuration for archive creation operations.
///
/// # Examples
///
/// ```
/// use zipstow_core::creation::CreationConfig;
///
/// let config = CreationConfig::default();
/// assert_eq!(config.compression_level, Some(6));
///
/// let stored = CreationConfig::default().with_compression_level(0);
/// assert!(stored.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationConfig {
    /// Compression level.
    ///
    /// `Some(0)` stores entries uncompressed, `1..=9` deflates (1 fastest,
    /// 9 smallest). `None` uses the deflate default.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,

    /// Record source file permissions when packing a directory.
    ///
    /// Entries without a recorded mode are stored as `0o644`.
    ///
    /// Default: `true`.
    pub preserve_permissions: bool,

    /// Prefix directory-pack entry names with the source directory's own
    /// name, so extraction recreates that top-level folder.
    ///
    /// Default: `false` (names are relative to the source directory).
    pub include_root_dir: bool,
}

impl Default for CreationConfig {
    fn default() -> Self {
        Self {
            compression_level: Some(6),
            preserve_permissions: true,
            include_root_dir: false,
        }
    }
}

impl CreationConfig {
    /// Creates a new `CreationConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level.
    ///
    /// # Panics
    ///
    /// Panics if the level is greater than 9. Use `validate()` for
    /// non-panicking validation of a directly assigned field.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!(level <= 9, "compression level must be 0-9");
        self.compression_level = Some(level);
        self
    }

    /// Sets whether to preserve permissions.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Sets whether directory packs keep the source directory name.
    #[must_use]
    pub fn with_include_root_dir(mut self, include: bool) -> Self {
        self.include_root_dir = include;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCompressionLevel` if the level is greater than 9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && level > 9
        {
            return Err(ArchiveError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}
