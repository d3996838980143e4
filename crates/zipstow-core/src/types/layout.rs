//! Placement policy for extracted entries.

use std::fmt;

/// How archive entry names are mapped onto the destination directory.
///
/// # Examples
///
/// ```
/// use zipstow_core::types::ExtractionLayout;
///
/// assert_eq!(ExtractionLayout::default(), ExtractionLayout::Hierarchical);
/// assert!(ExtractionLayout::Flat.is_flat());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExtractionLayout {
    /// Keep the entry's directory structure under the destination.
    #[default]
    Hierarchical,

    /// Drop every directory component and write the basename directly
    /// under the destination. Colliding basenames overwrite each other in
    /// archive order.
    Flat,
}

impl ExtractionLayout {
    /// Returns `true` for the flat layout.
    #[must_use]
    pub const fn is_flat(self) -> bool {
        matches!(self, Self::Flat)
    }
}

impl fmt::Display for ExtractionLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hierarchical => f.write_str("hierarchical"),
            Self::Flat => f.write_str("flat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ExtractionLayout::Hierarchical.to_string(), "hierarchical");
        assert_eq!(ExtractionLayout::Flat.to_string(), "flat");
    }

    #[test]
    fn test_is_flat() {
        assert!(ExtractionLayout::Flat.is_flat());
        assert!(!ExtractionLayout::Hierarchical.is_flat());
    }
}
