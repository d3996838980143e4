//! Archive creation module.
//!
//! Packs in-memory entries or a directory tree into a ZIP archive written to
//! a file, a seekable writer, or an in-memory [`PackedArchive`].

pub mod config;
pub mod report;
pub mod walker;
pub mod zip;

// Re-exports for public API
pub use config::CreationConfig;
pub use report::CreationReport;
pub use zip::PackedArchive;
