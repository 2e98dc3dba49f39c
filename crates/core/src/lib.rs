//! Core types for scenebuf
//!
//! This crate defines what the buffer and scene layers share:
//! - Error: Error taxonomy with stacked context messages
//! - Result: Crate-wide result alias
//! - Limits: Hard bounds of the binary formats

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;

pub use error::{Error, Result, ResultExt};
pub use limits::{DEFAULT_BUFFER_CAPACITY, MAX_DISK_CHILDREN, MAX_STRING_LEN, MAX_TREE_DEPTH};
