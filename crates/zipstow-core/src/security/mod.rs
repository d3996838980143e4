//! Extraction-time security checks.

pub mod path;

pub use path::validate_entry_path;
