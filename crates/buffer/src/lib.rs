//! Byte buffer layer for scenebuf
//!
//! An exclusively owned, growable block of memory with a cursor and a
//! logical length distinct from its capacity:
//!
//! - Typed reads and writes of fixed-size values and u16-prefixed strings
//! - Geometric capacity growth that never shrinks
//! - Cursor marks for callers that need to roll back a multi-field write
//! - Whole-buffer file persistence
//!
//! A buffer is not synchronized. One owner drives it at a time; share
//! results across threads by handing off [`ByteBuffer::as_bytes`] copies.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod config;
mod file;

pub use buffer::{BufferMark, ByteBuffer};
pub use config::{BufferConfig, ConfigError};
