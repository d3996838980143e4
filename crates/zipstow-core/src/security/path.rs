//! Zip-slip guard: maps untrusted entry names to paths under a destination.
//!
//! Entry names are split on both `/` and `\`. ZIP mandates forward slashes,
//! but archives produced on Windows sometimes carry backslashes, and a
//! backslash is a separator on the host that will eventually open the file.

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::types::DestDir;
use crate::types::ExtractionLayout;
use crate::types::SafePath;

/// Validates an entry name for the given layout and returns the output path.
///
/// This delegates to [`SafePath::validate`].
///
/// # Errors
///
/// Returns `ArchiveError::PathTraversal` if the resolved path is not the
/// destination itself or a descendant of it.
///
/// # Examples
///
/// ```no_run
/// use zipstow_core::security::validate_entry_path;
/// use zipstow_core::types::DestDir;
/// use zipstow_core::types::ExtractionLayout;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::new("/tmp/out")?;
///
/// let safe = validate_entry_path("/a/b/c.txt", &dest, ExtractionLayout::Hierarchical)?;
/// assert!(safe.as_path().ends_with("a/b/c.txt"));
///
/// let flat = validate_entry_path("/a/b/c.txt", &dest, ExtractionLayout::Flat)?;
/// assert_eq!(flat.as_path(), dest.as_path().join("c.txt"));
///
/// assert!(validate_entry_path("../../etc/passwd", &dest, ExtractionLayout::Hierarchical).is_err());
/// # Ok(())
/// # }
/// ```
pub fn validate_entry_path(name: &str, dest: &DestDir, layout: ExtractionLayout) -> Result<SafePath> {
    SafePath::validate(name, dest, layout)
}

/// Splits an entry name into its non-empty segments.
///
/// Leading, trailing and repeated separators produce no segments.
pub(crate) fn segments(name: &str) -> impl Iterator<Item = &str> {
    name.split(['/', '\\']).filter(|segment| !segment.is_empty())
}

/// Returns the final segment of an entry name, or `.` when it has none.
pub(crate) fn basename(name: &str) -> &str {
    segments(name).last().unwrap_or(".")
}

/// Joins segments onto `base`, resolving `.` and `..` lexically.
///
/// `..` may climb above `base`; the caller decides whether the result is
/// acceptable. Returns `None` for a segment the host would not treat as a
/// single plain component, such as a Windows drive prefix.
pub(crate) fn join_lexically<'a>(
    base: &Path,
    segments: impl IntoIterator<Item = &'a str>,
) -> Option<PathBuf> {
    let mut resolved = base.to_path_buf();

    for segment in segments {
        match segment {
            "." => {}
            ".." => {
                resolved.pop();
            }
            _ => {
                let mut components = Path::new(segment).components();
                match (components.next(), components.next()) {
                    (Some(Component::Normal(part)), None) => resolved.push(part),
                    _ => return None,
                }
            }
        }
    }

    Some(resolved)
}

/// Returns `true` if `candidate` is `dest` or lies beneath it.
///
/// Comparison is component-wise, so `/out-evil` is not inside `/out`.
pub(crate) fn is_contained(candidate: &Path, dest: &Path) -> bool {
    candidate == dest || candidate.starts_with(dest)
}
