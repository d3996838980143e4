//! Directory walking for archive creation.
//!
//! Flattens a source directory into an ordered list of [`ArchiveEntry`]
//! values. Only regular files become entries; directories are implied by
//! the file names and symlinks are skipped.

use crate::ArchiveError;
use crate::Result;
use crate::creation::config::CreationConfig;
use crate::types::ArchiveEntry;
use log::trace;
use log::warn;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Walks `source` and reads every regular file into memory.
///
/// Traversal is sorted by file name at each level, so an unchanged tree
/// always yields the same entries in the same order. Entry names use `/`
/// and are relative to `source` itself, or to its parent when
/// `config.include_root_dir` is set.
///
/// # Examples
///
/// ```no_run
/// use zipstow_core::creation::CreationConfig;
/// use zipstow_core::creation::walker::collect_entries;
///
/// let entries = collect_entries("./project", &CreationConfig::default())?;
/// for entry in &entries {
///     println!("{} ({} bytes)", entry.logical_path(), entry.len());
/// }
/// # Ok::<(), zipstow_core::ArchiveError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `source` does not exist (`SourceNotFound`)
/// - `source` is not a directory
/// - Directory traversal or a file read fails
/// - A file name is not valid UTF-8
pub fn collect_entries<P: AsRef<Path>>(
    source: P,
    config: &CreationConfig,
) -> Result<Vec<ArchiveEntry>> {
    let source = source.as_ref();

    if !source.exists() {
        return Err(ArchiveError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }
    if !source.is_dir() {
        return Err(ArchiveError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("source is not a directory: {}", source.display()),
        )));
    }

    let root = source.canonicalize()?;
    let base = naming_base(&root, config);
    let mut entries = Vec::new();

    for entry in WalkDir::new(&root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            ArchiveError::Io(std::io::Error::other(format!("walkdir error: {e}")))
        })?;
        let file_type = entry.file_type();

        if file_type.is_dir() {
            continue;
        }
        if !file_type.is_file() {
            warn!("skipping non-regular file {}", entry.path().display());
            continue;
        }

        let logical_path = archive_name(entry.path(), &base)?;
        let content = std::fs::read(entry.path()).map_err(|e| {
            ArchiveError::Io(std::io::Error::new(
                e.kind(),
                format!("failed to read {}: {e}", entry.path().display()),
            ))
        })?;

        trace!("collected {logical_path} ({} bytes)", content.len());

        let mut archive_entry = ArchiveEntry::new(logical_path, content);
        if config.preserve_permissions
            && let Some(mode) = file_mode(&entry)?
        {
            archive_entry = archive_entry.with_mode(mode);
        }
        entries.push(archive_entry);
    }

    Ok(entries)
}

/// Directory that entry names are computed relative to.
fn naming_base(root: &Path, config: &CreationConfig) -> PathBuf {
    if config.include_root_dir
        && let Some(parent) = root.parent()
    {
        return parent.to_path_buf();
    }
    root.to_path_buf()
}

/// Builds a `/`-separated entry name for `path` relative to `base`.
fn archive_name(path: &Path, base: &Path) -> Result<String> {
    let relative = path.strip_prefix(base).map_err(|_| {
        ArchiveError::Io(std::io::Error::other(format!(
            "path {} is not under {}",
            path.display(),
            base.display()
        )))
    })?;

    let mut parts = Vec::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            let part = part.to_str().ok_or_else(|| {
                ArchiveError::Io(std::io::Error::other(format!(
                    "path is not valid UTF-8: {}",
                    path.display()
                )))
            })?;
            parts.push(part);
        }
    }

    Ok(parts.join("/"))
}

#[cfg(unix)]
fn file_mode(entry: &walkdir::DirEntry) -> Result<Option<u32>> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = entry.metadata().map_err(|e| {
        ArchiveError::Io(std::io::Error::other(format!(
            "cannot read metadata for {}: {e}",
            entry.path().display()
        )))
    })?;
    Ok(Some(metadata.permissions().mode()))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn file_mode(_entry: &walkdir::DirEntry) -> Result<Option<u32>> {
    Ok(None)
}
