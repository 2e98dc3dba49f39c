//! Whole-buffer file persistence
//!
//! Files hold the raw logical content of a buffer: no header, no
//! trailer. Writing emits exactly `length` bytes; reading replaces the
//! buffer's content with the whole file.

use crate::buffer::ByteBuffer;
use scenebuf_core::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::info;

impl ByteBuffer {
    /// Write the logical content to `path`, replacing the file.
    ///
    /// The cursor position does not matter: all `length` bytes from
    /// offset 0 are written.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.as_bytes()).map_err(|e| Error::file_io(path, e))?;
        info!(path = %path.display(), bytes = self.len(), "Wrote buffer to file");
        Ok(())
    }

    /// Replace the buffer's content with the bytes of `path`.
    ///
    /// Capacity becomes the file size (at least one byte), `length` the
    /// file size, and the cursor returns to 0. On failure the buffer is
    /// left untouched.
    pub fn read_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut data = fs::read(path).map_err(|e| Error::file_io(path, e))?;
        let length = data.len();
        if data.is_empty() {
            data.push(0);
        }

        self.data = data;
        self.length = length;
        self.cursor = 0;

        info!(path = %path.display(), bytes = length, "Read buffer from file");
        Ok(())
    }

    /// Create a buffer holding the bytes of `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut buffer = ByteBuffer::with_capacity(1);
        buffer.read_from_file(path)?;
        Ok(buffer)
    }
}
