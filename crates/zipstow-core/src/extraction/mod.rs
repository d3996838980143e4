//! Archive extraction.
//!
//! [`Extractor`] walks the container in order, skips directory markers,
//! validates every name through the path guard, and streams each file into
//! place. Sources can be files, byte slices, or arbitrary readers.

pub mod engine;
pub mod source;
pub mod stream;

pub use engine::Extractor;
pub use source::ArchiveSource;
