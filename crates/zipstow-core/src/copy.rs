//! Buffered stream copy for writing extracted entries.
//!
//! One `CopyBuffer` is allocated per extraction run and reused for every
//! entry.

use std::io::Read;
use std::io::Write;
use std::io::{self};

/// Buffer size for copy operations (64 KiB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Reusable heap buffer for streaming copies.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use zipstow_core::copy::{CopyBuffer, copy_with_buffer};
///
/// let mut buffer = CopyBuffer::new();
/// let mut output = Vec::new();
/// let copied = copy_with_buffer(&mut Cursor::new(b"abcd"), &mut output, &mut buffer)?;
/// assert_eq!(copied, 4);
/// assert_eq!(output, b"abcd");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    /// Returns the buffer size in bytes.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.buf.len()
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies everything from `reader` to `writer` through `buffer`.
///
/// `Interrupted` reads are retried; any other error is returned as-is so the
/// caller can attach the entry name.
///
/// # Errors
///
/// Returns the first read or write error.
#[inline]
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> io::Result<u64> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;
        total += bytes_read as u64;
    }

    Ok(total)
}
