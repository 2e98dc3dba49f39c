//! Growable byte buffer with a read/write cursor
//!
//! A [`ByteBuffer`] owns one contiguous block of memory. Three numbers
//! describe it:
//!
//! - **capacity**: bytes allocated. Only ever grows, by doubling.
//! - **length**: the logical extent, the highest offset ever written.
//! - **cursor**: where the next read or write happens.
//!
//! `cursor <= length <= capacity` holds after every operation. Reads never
//! look past `length`, even when capacity is larger.
//!
//! # Value Encoding
//!
//! Fixed-size values are any [`bytemuck::Pod`] type and are copied in
//! native layout. Strings are a u16 length prefix followed by the raw
//! UTF-8 bytes.

use crate::config::{BufferConfig, ConfigError};
use bytemuck::Pod;
use scenebuf_core::{Error, Result, DEFAULT_BUFFER_CAPACITY, MAX_STRING_LEN};
use std::mem::size_of;
use tracing::debug;

/// Exclusively owned, growable byte buffer.
///
/// The buffer is move-only: it does not implement `Clone`, so two buffers
/// can never alias one block of memory.
#[derive(Debug)]
pub struct ByteBuffer {
    /// Backing storage. `data.len()` is the capacity.
    pub(crate) data: Vec<u8>,
    pub(crate) length: usize,
    pub(crate) cursor: usize,
}

/// Saved cursor and length, for rolling back a multi-field write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferMark {
    cursor: usize,
    length: usize,
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteBuffer {
    /// Create a buffer with the default capacity (1KB).
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY)
    }

    /// Create a buffer with `capacity` bytes allocated.
    ///
    /// A zero capacity is raised to one byte so growth can double it.
    pub fn with_capacity(capacity: usize) -> Self {
        ByteBuffer {
            data: vec![0; capacity.max(1)],
            length: 0,
            cursor: 0,
        }
    }

    /// Create a buffer from a validated configuration.
    pub fn with_config(config: &BufferConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_capacity(config.initial_capacity))
    }

    /// Bytes allocated.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Logical length: bytes of meaningful content.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the buffer has no logical content.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Current cursor offset.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bytes left to read before hitting `length`.
    pub fn remaining(&self) -> usize {
        self.length - self.cursor
    }

    /// The logical content, `length` bytes from offset 0.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.length]
    }

    /// Move the cursor back to 0, keeping the content.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Logically empty the buffer, keeping its capacity.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.length = 0;
    }

    /// Zero every allocated byte and treat all of it as content.
    ///
    /// Unlike [`reset`](Self::reset), the buffer ends up full: `length`
    /// becomes the capacity, so it can serve as pre-sized scratch space.
    pub fn zero_fill(&mut self) {
        self.data.fill(0);
        self.cursor = 0;
        self.length = self.data.len();
    }

    /// Snapshot cursor and length.
    pub fn mark(&self) -> BufferMark {
        BufferMark {
            cursor: self.cursor,
            length: self.length,
        }
    }

    /// Roll cursor and length back to a snapshot.
    ///
    /// Bytes written after the mark stay in memory but are no longer part
    /// of the logical content.
    pub fn restore(&mut self, mark: BufferMark) {
        self.length = mark.length.min(self.data.len());
        self.cursor = mark.cursor.min(self.length);
    }

    /// Make sure `additional` bytes fit past the current length.
    ///
    /// Capacity doubles until it is at least `length + additional`.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let required = self
            .length
            .checked_add(additional)
            .ok_or(Error::Allocation {
                capacity: self.data.len(),
                requested: additional,
            })?;
        self.grow_to(required)
    }

    fn grow_to(&mut self, required: usize) -> Result<()> {
        let old_capacity = self.data.len();
        if required <= old_capacity {
            return Ok(());
        }

        let alloc_error = Error::Allocation {
            capacity: old_capacity,
            requested: required - old_capacity,
        };

        let mut new_capacity = old_capacity.max(1);
        while new_capacity < required {
            new_capacity = match new_capacity.checked_mul(2) {
                Some(c) => c,
                None => return Err(alloc_error),
            };
        }

        if self
            .data
            .try_reserve_exact(new_capacity - old_capacity)
            .is_err()
        {
            return Err(alloc_error);
        }
        self.data.resize(new_capacity, 0);

        debug!(old_capacity, new_capacity, "Grew byte buffer");
        Ok(())
    }

    /// Write raw bytes at the cursor, growing if needed.
    ///
    /// Growth makes room for `length + bytes.len()`, even when the cursor
    /// has been rewound inside the existing content.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let overflow = || Error::Allocation {
            capacity: self.data.len(),
            requested: bytes.len(),
        };
        let end = self.cursor.checked_add(bytes.len()).ok_or_else(overflow)?;
        let required = self.length.checked_add(bytes.len()).ok_or_else(overflow)?;
        self.grow_to(end.max(required))?;

        self.data[self.cursor..end].copy_from_slice(bytes);
        self.cursor = end;
        if self.cursor > self.length {
            self.length = self.cursor;
        }
        Ok(())
    }

    /// Write a fixed-size value at the cursor.
    pub fn write<T: Pod>(&mut self, value: T) -> Result<()> {
        self.write_bytes(bytemuck::bytes_of(&value))
    }

    /// Write a string as a u16 length prefix plus its bytes.
    ///
    /// Strings longer than 65535 bytes are rejected before anything is
    /// written.
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        let bytes = value.as_bytes();
        if bytes.len() > MAX_STRING_LEN {
            return Err(Error::format(format!(
                "string of {} bytes exceeds the {} byte length prefix limit",
                bytes.len(),
                MAX_STRING_LEN
            )));
        }
        self.write(bytes.len() as u16)?;
        self.write_bytes(bytes)
    }

    fn check_readable(&self, needed: usize) -> Result<()> {
        match self.cursor.checked_add(needed) {
            Some(end) if end <= self.length => Ok(()),
            _ => Err(Error::EndOfBuffer {
                offset: self.cursor,
                needed,
                length: self.length,
            }),
        }
    }

    /// Read `len` raw bytes at the cursor.
    ///
    /// Fails without moving the cursor if fewer than `len` bytes remain.
    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8]> {
        self.check_readable(len)?;
        let start = self.cursor;
        self.cursor += len;
        Ok(&self.data[start..self.cursor])
    }

    /// Read a fixed-size value at the cursor.
    ///
    /// Fails without moving the cursor if the value would extend past
    /// `length`.
    pub fn read<T: Pod>(&mut self) -> Result<T> {
        let bytes = self.read_bytes(size_of::<T>())?;
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Read a u16-prefixed string.
    ///
    /// On any failure the cursor is left where the read began.
    pub fn read_string(&mut self) -> Result<String> {
        let start = self.cursor;
        let len = self.read::<u16>()? as usize;

        if let Err(e) = self.check_readable(len) {
            self.cursor = start;
            return Err(e);
        }

        let body = self.data[self.cursor..self.cursor + len].to_vec();
        match String::from_utf8(body) {
            Ok(s) => {
                self.cursor += len;
                Ok(s)
            }
            Err(e) => {
                self.cursor = start;
                Err(Error::format(format!(
                    "string at offset {} is not valid UTF-8: {}",
                    start, e
                )))
            }
        }
    }
}
