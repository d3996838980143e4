//! Validated output path type for archive extraction.

use crate::ArchiveError;
use crate::Result;
use crate::security::path::basename;
use crate::security::path::is_contained;
use crate::security::path::join_lexically;
use crate::security::path::segments;
use std::path::Path;
use std::path::PathBuf;

use super::DestDir;
use super::ExtractionLayout;

/// An absolute output path proven to stay inside a destination directory.
///
/// # Security Properties
///
/// - Can ONLY be constructed through [`SafePath::validate`]
/// - NO `From<PathBuf>` implementation
/// - Lexically equal to the destination or a strict descendant of it
///
/// # Examples
///
/// ```no_run
/// use zipstow_core::types::DestDir;
/// use zipstow_core::types::ExtractionLayout;
/// use zipstow_core::types::SafePath;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp")?;
///
/// let safe = SafePath::validate("foo/bar.txt", &dest, ExtractionLayout::Hierarchical)?;
/// assert_eq!(safe.as_path(), dest.as_path().join("foo/bar.txt"));
///
/// assert!(SafePath::validate("../etc/passwd", &dest, ExtractionLayout::Hierarchical).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafePath(PathBuf);

impl SafePath {
    /// Computes the output path of an entry and checks that it stays inside
    /// `dest`.
    ///
    /// # Validation Steps
    ///
    /// 1. Join every segment of the name onto `dest`, resolving `.` and `..`
    ///    lexically. Leading separators never survive, so absolute names
    ///    land under `dest`.
    /// 2. For `Flat`, if that path stayed inside `dest`, replace it with
    ///    `dest` joined with the basename alone.
    /// 3. Require the result to equal `dest` or start with `dest` followed by
    ///    a separator.
    ///
    /// A flat entry is therefore rejected both when its full name climbs out
    /// of `dest` and when its basename is `..`.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::PathTraversal` naming the entry and the path it
    /// would have been written to.
    pub fn validate(name: &str, dest: &DestDir, layout: ExtractionLayout) -> Result<Self> {
        let root = dest.as_path();

        let full = join_lexically(root, segments(name));
        let candidate = match full {
            Some(ref path) if layout.is_flat() && is_contained(path, root) => {
                join_lexically(root, [basename(name)])
            }
            other => other,
        };

        match candidate {
            Some(path) if is_contained(&path, root) => Ok(Self(path)),
            Some(path) => Err(ArchiveError::PathTraversal {
                entry: name.to_string(),
                path,
            }),
            None => Err(ArchiveError::PathTraversal {
                entry: name.to_string(),
                path: root.join(name),
            }),
        }
    }

    /// Returns the path as a `&Path`.
    #[inline]
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Converts into the inner `PathBuf`.
    #[inline]
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for SafePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
