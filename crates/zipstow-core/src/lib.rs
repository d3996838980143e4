//! ZIP packing and extraction with path traversal protection.
//!
//! `zipstow-core` packs named in-memory entries or a directory tree into a
//! ZIP archive, and extracts ZIP archives into a destination directory in
//! one of two layouts:
//!
//! - [`ExtractionLayout::Hierarchical`] recreates the directory structure
//!   recorded in entry names.
//! - [`ExtractionLayout::Flat`] writes every file directly into the
//!   destination under its base name.
//!
//! Every entry name is checked before anything is written. An entry whose
//! resolved output path would leave the destination aborts extraction with
//! [`ArchiveError::PathTraversal`].
//!
//! # Examples
//!
//! ```no_run
//! use zipstow_core::ArchiveEntry;
//! use zipstow_core::ExtractionLayout;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entries = [
//!     ArchiveEntry::new("/a/b/c/d.txt", "abcd"),
//!     ArchiveEntry::new("/root.txt", "root"),
//! ];
//! let packed = zipstow_core::pack_entries(&entries)?;
//!
//! let report = zipstow_core::extract_bytes(
//!     packed.as_bytes(),
//!     "/tmp/unzipped",
//!     ExtractionLayout::Hierarchical,
//! )?;
//! println!("Extracted {} files", report.files_extracted);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod copy;
pub mod creation;
pub mod error;
pub mod extraction;
pub mod report;
pub mod security;
pub mod types;

#[doc(hidden)]
pub mod test_utils;

// Re-export main API types
pub use api::extract;
pub use api::extract_bytes;
pub use api::extract_file;
pub use api::extract_reader;
pub use api::pack_directory;
pub use api::pack_directory_to_bytes;
pub use api::pack_entries;
pub use api::pack_entries_to_file;
pub use config::ExtractionConfig;
pub use creation::CreationConfig;
pub use creation::CreationReport;
pub use creation::PackedArchive;
pub use error::ArchiveError;
pub use error::Result;
pub use extraction::ArchiveSource;
pub use extraction::Extractor;
pub use report::ExtractionReport;

// Re-export types module for easier access
pub use types::ArchiveEntry;
pub use types::DestDir;
pub use types::ExtractionLayout;
pub use types::SafePath;
