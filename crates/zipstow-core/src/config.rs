//! Configuration for archive extraction.

use crate::types::ExtractionLayout;

/// Default mode for extracted files whose entry records no unix mode.
pub const DEFAULT_FILE_MODE: u32 = 0o644;

/// Configuration for archive extraction.
///
/// # Examples
///
/// ```
/// use zipstow_core::ExtractionConfig;
/// use zipstow_core::types::ExtractionLayout;
///
/// // Hierarchical extraction with recorded permissions
/// let config = ExtractionConfig::default();
///
/// // Flat extraction, every file gets 0o600
/// let flat = ExtractionConfig::flat()
///     .with_preserve_permissions(false)
///     .with_default_file_mode(0o600);
/// assert_eq!(flat.layout, ExtractionLayout::Flat);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// How entry names map onto the destination directory.
    pub layout: ExtractionLayout,

    /// Mode for files whose entry carries no unix mode, or for every file
    /// when `preserve_permissions` is off.
    pub default_file_mode: u32,

    /// Apply the unix mode recorded in the archive (masked to `0o777`).
    pub preserve_permissions: bool,

    /// Create the destination directory if it does not exist.
    pub create_destination: bool,
}

impl Default for ExtractionConfig {
    /// Default values:
    /// - `layout`: `Hierarchical`
    /// - `default_file_mode`: `0o644`
    /// - `preserve_permissions`: `true`
    /// - `create_destination`: `true`
    fn default() -> Self {
        Self {
            layout: ExtractionLayout::Hierarchical,
            default_file_mode: DEFAULT_FILE_MODE,
            preserve_permissions: true,
            create_destination: true,
        }
    }
}

impl ExtractionConfig {
    /// Creates a configuration for the given layout with default settings.
    #[must_use]
    pub fn new(layout: ExtractionLayout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Creates a hierarchical configuration.
    #[must_use]
    pub fn hierarchical() -> Self {
        Self::new(ExtractionLayout::Hierarchical)
    }

    /// Creates a flat configuration.
    #[must_use]
    pub fn flat() -> Self {
        Self::new(ExtractionLayout::Flat)
    }

    /// Sets the extraction layout.
    #[must_use]
    pub fn with_layout(mut self, layout: ExtractionLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the fallback file mode.
    #[must_use]
    pub fn with_default_file_mode(mut self, mode: u32) -> Self {
        self.default_file_mode = mode & 0o777;
        self
    }

    /// Sets whether recorded unix modes are applied.
    #[must_use]
    pub fn with_preserve_permissions(mut self, preserve: bool) -> Self {
        self.preserve_permissions = preserve;
        self
    }

    /// Sets whether a missing destination directory is created.
    #[must_use]
    pub fn with_create_destination(mut self, create: bool) -> Self {
        self.create_destination = create;
        self
    }

    /// Picks the mode for a new file given the mode recorded in its entry.
    #[must_use]
    pub fn file_mode(&self, recorded: Option<u32>) -> u32 {
        match recorded {
            Some(mode) if self.preserve_permissions => mode & 0o777,
            _ => self.default_file_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractionConfig::default();
        assert_eq!(config.layout, ExtractionLayout::Hierarchical);
        assert_eq!(config.default_file_mode, 0o644);
        assert!(config.preserve_permissions);
        assert!(config.create_destination);
    }

    #[test]
    fn test_layout_constructors() {
        assert_eq!(ExtractionConfig::flat().layout, ExtractionLayout::Flat);
        assert_eq!(
            ExtractionConfig::hierarchical().layout,
            ExtractionLayout::Hierarchical
        );
        assert_eq!(
            ExtractionConfig::flat()
                .with_layout(ExtractionLayout::Hierarchical)
                .layout,
            ExtractionLayout::Hierarchical
        );
    }

    #[test]
    fn test_file_mode_masks_type_bits() {
        let config = ExtractionConfig::default();
        assert_eq!(config.file_mode(Some(0o100_755)), 0o755);
        assert_eq!(config.file_mode(Some(0o4755)), 0o755);
        assert_eq!(config.file_mode(None), 0o644);
    }

    #[test]
    fn test_file_mode_without_preserve() {
        let config = ExtractionConfig::default()
            .with_preserve_permissions(false)
            .with_default_file_mode(0o600);
        assert_eq!(config.file_mode(Some(0o755)), 0o600);
        assert_eq!(config.file_mode(None), 0o600);
    }
}
