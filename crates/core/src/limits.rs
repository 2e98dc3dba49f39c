//! Format limits shared by the buffer and scene codecs
//!
//! These are the hard bounds of the binary formats. Strings and disk child
//! counts are prefixed with a u16, so anything larger cannot be encoded.

/// Default initial capacity of a new buffer, in bytes.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024;

/// Longest string the u16 length prefix can describe.
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

/// Most children a node can have in the disk encoding.
pub const MAX_DISK_CHILDREN: usize = u16::MAX as usize;

/// Deepest tree the disk codec will write or rebuild.
///
/// Each level recurses once, so this bounds stack use when a corrupt
/// file nests child records without end. The encoder applies the same
/// bound so it never writes a file the decoder refuses.
pub const MAX_TREE_DEPTH: usize = 1024;
