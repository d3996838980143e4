//! Adapters from non-seekable streams to seekable buffers.

use std::io::Cursor;
use std::io::Read;

use crate::Result;

/// Reads a stream to the end into a seekable in-memory buffer.
///
/// Takes ownership of `reader` and drops it before returning, on success and
/// on error, so file or socket handles are closed here.
///
/// # Errors
///
/// Returns `ArchiveError::Io` if reading fails.
pub fn read_to_buffer<R: Read>(mut reader: R) -> Result<Cursor<Vec<u8>>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    drop(reader);
    Ok(Cursor::new(bytes))
}
