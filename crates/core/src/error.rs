//! Error types for scenebuf
//!
//! Every fallible operation in the buffer and scene layers returns
//! [`Result`]. Errors raised deep inside a recursive tree walk keep the
//! context of every level that re-raised them: each level wraps the
//! error in [`Error::Context`], and [`Error::messages`] flattens the chain
//! back into an ordered message stack.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scenebuf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the buffer and scene layers
#[derive(Debug, Error)]
pub enum Error {
    /// Capacity growth could not obtain memory
    #[error("Could not allocate memory: capacity {capacity}, requested {requested} more bytes")]
    Allocation {
        /// Capacity before the failed growth
        capacity: usize,
        /// Additional bytes that were requested
        requested: usize,
    },

    /// A read would go past the logical length of the buffer
    #[error("End of buffer encountered while reading: need {needed} bytes at offset {offset}, length is {length}")]
    EndOfBuffer {
        /// Cursor position at the start of the read
        offset: usize,
        /// Bytes the read required
        needed: usize,
        /// Logical length of the buffer
        length: usize,
    },

    /// Opening, reading or writing a file failed
    #[error("File I/O error on {}: {source}", .path.display())]
    FileIo {
        /// File the operation targeted
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// Encoded data is malformed (bad tag, bad length, invalid UTF-8)
    #[error("Format error: {0}")]
    Format(String),

    /// An error re-raised with additional context
    #[error("{context}")]
    Context {
        /// Message added at this level
        context: String,
        /// The error being re-raised
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a format error.
    pub fn format(detail: impl Into<String>) -> Self {
        Error::Format(detail.into())
    }

    /// Create a file error for `path`.
    pub fn file_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Wrap this error with an additional context message.
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping every context layer.
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Error::Context { source, .. } = current {
            current = source;
        }
        current
    }

    /// The message stack, innermost cause first.
    ///
    /// This is the order messages were pushed as the error travelled up
    /// the call stack.
    pub fn messages(&self) -> Vec<String> {
        let mut stack = Vec::new();
        let mut current = self;
        while let Error::Context { context, source } = current {
            stack.push(context.clone());
            current = source;
        }
        stack.push(current.to_string());
        stack.reverse();
        stack
    }

    /// Number of context layers wrapped around the root error.
    pub fn depth(&self) -> usize {
        self.messages().len() - 1
    }

    /// Render the message stack, one line per entry.
    pub fn report(&self) -> String {
        let mut out = String::from("Errors:");
        for msg in self.messages() {
            out.push_str("\n---- ");
            out.push_str(&msg);
        }
        out
    }

    /// Whether the root cause is an allocation failure.
    pub fn is_allocation(&self) -> bool {
        matches!(self.root(), Error::Allocation { .. })
    }

    /// Whether the root cause is a read past the end of the buffer.
    pub fn is_end_of_buffer(&self) -> bool {
        matches!(self.root(), Error::EndOfBuffer { .. })
    }

    /// Whether the root cause is a file I/O failure.
    pub fn is_file_io(&self) -> bool {
        matches!(self.root(), Error::FileIo { .. })
    }

    /// Whether the root cause is malformed data.
    pub fn is_format(&self) -> bool {
        matches!(self.root(), Error::Format(_))
    }
}

/// Attach context to the error side of a [`Result`].
pub trait ResultExt<T> {
    /// Wrap an error with a lazily built context message.
    fn context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ResultExt<T> for Result<T> {
    fn context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.context(f()))
    }
}
