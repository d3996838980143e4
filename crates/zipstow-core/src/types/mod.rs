//! Typed wrappers used by packing and extraction.
//!
//! Security-relevant types are validated on construction: a `DestDir` is an
//! absolute existing directory and a `SafePath` is an output path already
//! proven to stay inside one. Neither offers a `From<PathBuf>`.

pub mod dest_dir;
pub mod entry;
pub mod layout;
pub mod safe_path;

pub use dest_dir::DestDir;
pub use entry::ArchiveEntry;
pub use layout::ExtractionLayout;
pub use safe_path::SafePath;
