//! Path traversal (zip-slip) integration tests.
//!
//! Each test builds a hostile archive with the raw ZIP writer and checks that
//! extraction fails without touching anything outside the destination.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use zipstow_core::ArchiveError;
use zipstow_core::ExtractionLayout;
use zipstow_core::test_utils::ZipTestBuilder;
use zipstow_core::test_utils::create_test_zip;

const LAYOUTS: [ExtractionLayout; 2] = [ExtractionLayout::Hierarchical, ExtractionLayout::Flat];

/// Counts entries directly inside `dir`.
fn entry_count(dir: &Path) -> usize {
    fs::read_dir(dir).map_or(0, Iterator::count)
}

#[test]
fn test_parent_traversal_rejected_in_both_layouts() {
    let data = create_test_zip(&[("../../evil.txt", "evil")]);

    for layout in LAYOUTS {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("x").join("y").join("dest");

        let err = zipstow_core::extract_bytes(&data, &dest, layout).unwrap_err();

        assert!(
            matches!(err, ArchiveError::PathTraversal { .. }),
            "{layout} extraction should fail with PathTraversal, got {err:?}"
        );
        assert!(err.is_security_violation());
        assert_eq!(err.entry_name(), Some("../../evil.txt"));
        assert!(!temp.path().join("x").join("evil.txt").exists());
        assert!(!temp.path().join("x").join("y").join("evil.txt").exists());
        assert_eq!(entry_count(&dest), 0);
    }
}

#[test]
fn test_known_traversal_names_rejected() {
    let names = [
        "../etc/passwd",
        "foo/../../etc/passwd",
        "foo/bar/../../../etc/passwd",
        "..\\..\\evil.txt",
        "a\\..\\..\\evil.txt",
    ];

    for layout in LAYOUTS {
        for name in names {
            let temp = TempDir::new().unwrap();
            let dest = temp.path().join("dest");
            let data = create_test_zip(&[(name, "evil")]);

            let result = zipstow_core::extract_bytes(&data, &dest, layout);

            assert!(
                matches!(result, Err(ArchiveError::PathTraversal { .. })),
                "{name} should be rejected in {layout} layout"
            );
            assert_eq!(entry_count(temp.path()), 1, "only dest may exist");
        }
    }
}

#[test]
fn test_sibling_directory_prefix_rejected() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("out");
    let data = create_test_zip(&[("../out-evil/payload.txt", "evil")]);

    let err =
        zipstow_core::extract_bytes(&data, &dest, ExtractionLayout::Hierarchical).unwrap_err();

    assert!(err.is_security_violation());
    assert!(!temp.path().join("out-evil").exists());
}

#[test]
fn test_absolute_names_stay_inside() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dest");
    let data = create_test_zip(&[("/tmp/zipstow-absolute.txt", "abs")]);

    zipstow_core::extract_bytes(&data, &dest, ExtractionLayout::Hierarchical).unwrap();

    assert_eq!(
        fs::read_to_string(dest.join("tmp").join("zipstow-absolute.txt")).unwrap(),
        "abs"
    );
}

#[test]
fn test_inner_parent_refs_allowed() {
    let temp = TempDir::new().unwrap();
    let data = create_test_zip(&[("a/b/../c.txt", "c")]);

    zipstow_core::extract_bytes(&data, temp.path(), ExtractionLayout::Hierarchical).unwrap();

    assert_eq!(fs::read_to_string(temp.path().join("a").join("c.txt")).unwrap(), "c");
    assert!(!temp.path().join("a").join("b").exists());
}

#[test]
fn test_flat_dotdot_basename_rejected() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dest");
    let data = create_test_zip(&[("dir/..", "evil")]);

    let err = zipstow_core::extract_bytes(&data, &dest, ExtractionLayout::Flat).unwrap_err();

    assert!(err.is_security_violation());
    assert_eq!(entry_count(temp.path()), 1);
}

#[test]
fn test_traversal_stops_extraction_midway() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("dest");
    let data = ZipTestBuilder::new()
        .add_file("before.txt", b"before")
        .add_file("../escape.txt", b"evil")
        .add_file("after.txt", b"after")
        .build();

    let err =
        zipstow_core::extract_bytes(&data, &dest, ExtractionLayout::Hierarchical).unwrap_err();

    assert!(err.is_security_violation());
    assert!(dest.join("before.txt").exists());
    assert!(!dest.join("after.txt").exists());
    assert!(!temp.path().join("escape.txt").exists());
}
