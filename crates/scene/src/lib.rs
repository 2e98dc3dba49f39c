//! Scene layer for scenebuf
//!
//! This crate owns the scene tree and its two encodings:
//!
//! - Node tree: SceneNode with exclusively owned children, editing helpers
//! - Tags: ObjectType, LinkType, NodeId
//! - GPU layout: value-only records with parent transforms composed in,
//!   rebuilt every frame
//! - Disk layout: lossless local records with names and child counts,
//!   written at save and read at load
//! - Scene: the tree plus renderer settings, with file save/load
//!
//! Both encoders walk the tree in pre-order and stop at the first error,
//! wrapping it with the name of every node on the way back up.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod disk;
pub mod gpu;
pub mod node;
pub mod scene;
pub mod types;

pub use disk::{decode_disk, disk_record_size, encode_disk, DISK_FIXED_FIELDS_SIZE};
pub use gpu::{decode_gpu, encode_gpu, GpuNode, GPU_NODE_SIZE};
pub use node::SceneNode;
pub use scene::{GpuUpload, Scene, SceneSettings};
pub use types::{LinkType, NodeId, ObjectType};

/// Re-exported so callers can build nodes without naming glam themselves
pub use glam::Vec3;
