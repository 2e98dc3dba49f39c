//! Buffer configuration.

use scenebuf_core::DEFAULT_BUFFER_CAPACITY;

/// Byte buffer configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferConfig {
    /// Capacity allocated up front, in bytes (default: 1KB).
    ///
    /// Growth doubles from this value, so it must be non-zero.
    pub initial_capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig {
            initial_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl BufferConfig {
    /// Create a new buffer configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set initial capacity (builder pattern).
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// Create a configuration for testing (tiny capacity, so writes grow early).
    pub fn for_testing() -> Self {
        BufferConfig {
            initial_capacity: 16,
        }
    }
}

/// Buffer configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Initial capacity is zero, which doubling can never grow.
    #[error("Initial capacity must be at least 1 byte")]
    ZeroCapacity,
}
