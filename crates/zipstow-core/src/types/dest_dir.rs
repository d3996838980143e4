//! Validated destination directory type.

use crate::ArchiveError;
use crate::Result;
use std::path::Path;
use std::path::PathBuf;

/// An absolute, existing destination directory for extraction.
///
/// The path is canonicalized once on construction. Every entry path is later
/// checked lexically against this value, so it must not contain `.` or `..`
/// components and must not route through symlinks.
///
/// # Examples
///
/// ```no_run
/// use zipstow_core::types::DestDir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dest = DestDir::resolve("/tmp/extraction", true)?;
/// println!("Extracting to: {}", dest.as_path().display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestDir(PathBuf);

impl DestDir {
    /// Resolves an existing directory to its canonical absolute path.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::Io` if the path does not exist, is not a
    /// directory, or cannot be canonicalized.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::resolve(path, false)
    }

    /// Resolves a destination directory, creating it first when `create` is
    /// set and it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveError::Io` if:
    /// - The path does not exist and `create` is `false`
    /// - Creating the directory fails
    /// - The path exists but is not a directory
    /// - The path cannot be canonicalized
    pub fn resolve(path: impl Into<PathBuf>, create: bool) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            if !create {
                return Err(ArchiveError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("destination directory does not exist: {}", path.display()),
                )));
            }
            std::fs::create_dir_all(&path).map_err(|e| {
                ArchiveError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to create destination {}: {e}", path.display()),
                ))
            })?;
        }

        if !path.is_dir() {
            return Err(ArchiveError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("path is not a directory: {}", path.display()),
            )));
        }

        let canonical = path.canonicalize().map_err(|e| {
            ArchiveError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to canonicalize path {}: {e}", path.display()),
            ))
        })?;

        Ok(Self(canonical))
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

impl AsRef<Path> for DestDir {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dest_dir_valid() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let dest = DestDir::new(temp.path()).expect("dest should be valid");
        assert!(dest.as_path().is_absolute());
    }

    #[test]
    fn test_dest_dir_nonexistent() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let missing = temp.path().join("missing");
        let result = DestDir::new(&missing);
        assert!(matches!(result, Err(ArchiveError::Io(_))));
        assert!(!missing.exists());
    }

    #[test]
    fn test_dest_dir_created_when_requested() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let nested = temp.path().join("a").join("b").join("unzipped");
        let dest = DestDir::resolve(&nested, true).expect("should create dest");
        assert!(nested.is_dir());
        assert_eq!(dest.as_path(), nested.canonicalize().unwrap());
    }

    #[test]
    fn test_dest_dir_not_a_directory() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let file_path = temp.path().join("file.txt");
        fs::write(&file_path, "test").expect("failed to write file");

        let result = DestDir::resolve(&file_path, true);
        assert!(matches!(result, Err(ArchiveError::Io(_))));
    }

    #[test]
    fn test_dest_dir_canonicalization() {
        let temp = TempDir::new().expect("failed to create temp dir");
        let subdir = temp.path().join("subdir");
        fs::create_dir(&subdir).expect("failed to create subdir");

        let path_with_dot = subdir.join(".").join("..");
        let dest = DestDir::new(path_with_dot).expect("should create dest dir");

        assert_eq!(dest.as_path(), temp.path().canonicalize().unwrap());
    }

    #[test]
    #[cfg(unix)]
    fn test_dest_dir_with_symlink() {
        use std::os::unix::fs::symlink;

        let temp = TempDir::new().expect("failed to create temp dir");
        let real_dir = temp.path().join("real");
        fs::create_dir(&real_dir).expect("failed to create real dir");
        let link = temp.path().join("link");
        symlink(&real_dir, &link).expect("failed to create symlink");

        let dest = DestDir::new(link).expect("should create from symlink");
        assert_eq!(dest.as_path(), real_dir.canonicalize().unwrap());
    }
}
