//! Scenebuf - Byte buffer and scene-tree codecs for an SDF raymarcher
//!
//! Scenebuf is the persistence and GPU-upload layer of an interactive
//! raymarching renderer. It flattens a tree of primitive objects into a
//! growable byte buffer in two encodings: a compact GPU layout rebuilt
//! every frame, and a lossless disk layout for saving and loading.
//!
//! # Quick Start
//!
//! ```ignore
//! use scenebuf::{ByteBuffer, Scene, SceneNode, ObjectType, Vec3};
//!
//! let mut scene = Scene::new();
//! let ball = SceneNode::new("ball", ObjectType::Sphere, Vec3::ZERO, Vec3::ONE, Vec3::ONE);
//! scene.root.add_child(ball);
//!
//! // Every frame: encode for the compute shader
//! let mut gpu_buffer = ByteBuffer::new();
//! let upload = scene.encode_gpu(&mut gpu_buffer)?;
//! // dispatch with gpu_buffer.as_bytes() and upload.node_count
//!
//! // At shutdown: persist
//! scene.save("test.scene")?;
//! ```
//!
//! # Architecture
//!
//! - `scenebuf-core`: error taxonomy and format limits
//! - `scenebuf-buffer`: the byte buffer and its file persistence
//! - `scenebuf-scene`: the node tree, both encoders, and the scene
//!
//! Rendering, windowing and the editor UI are collaborators that call in;
//! nothing here depends on them.

pub use scenebuf_buffer::{BufferConfig, BufferMark, ByteBuffer, ConfigError};
pub use scenebuf_core::{
    Error, Result, ResultExt, DEFAULT_BUFFER_CAPACITY, MAX_DISK_CHILDREN, MAX_STRING_LEN,
    MAX_TREE_DEPTH,
};
pub use scenebuf_scene::{
    decode_disk, decode_gpu, disk_record_size, encode_disk, encode_gpu, GpuNode, GpuUpload,
    LinkType, NodeId, ObjectType, Scene, SceneNode, SceneSettings, Vec3, DISK_FIXED_FIELDS_SIZE,
    GPU_NODE_SIZE,
};
