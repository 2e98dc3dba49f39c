//! GPU layout encoding
//!
//! Flattens a node tree into the storage buffer the raymarching shader
//! iterates. The tree is rebuilt into the buffer every frame.
//!
//! # Record Format
//!
//! One 48-byte record per node, in pre-order:
//!
//! ```text
//! [type_tag: u32][position: f32 x3][scale: f32 x3][color: f32 x3][link_tag: u32][child_count: u32]
//! ```
//!
//! Position and scale are global: each node's local position is added to
//! its parent's global position and its local scale multiplied into its
//! parent's global scale. The root's parent frame is the origin at unit
//! scale. Rotation is not modelled. Names are not sent.

use crate::node::SceneNode;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use scenebuf_buffer::ByteBuffer;
use scenebuf_core::{Error, Result, ResultExt};
use std::mem::size_of;
use tracing::trace;

/// Size of one GPU record in bytes
pub const GPU_NODE_SIZE: usize = 48;

/// One node as the shader sees it
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuNode {
    /// `ObjectType` tag
    pub object_type: u32,
    /// Global position
    pub position: Vec3,
    /// Global scale
    pub scale: Vec3,
    /// RGB colour
    pub color: Vec3,
    /// `LinkType` tag
    pub link_type: u32,
    /// Number of direct children
    pub child_count: u32,
}

const _: () = assert!(size_of::<GpuNode>() == GPU_NODE_SIZE);

/// Encode `root` and its subtree at the buffer's cursor.
///
/// Returns the number of records written, which the shader needs as its
/// iteration bound. On failure the buffer holds whatever was written
/// before the error; callers reset it before retrying.
pub fn encode_gpu(root: &SceneNode, buffer: &mut ByteBuffer) -> Result<usize> {
    let node_count = encode_node(root, buffer, Vec3::ZERO, Vec3::ONE)?;
    trace!(node_count, bytes = buffer.len(), "Encoded scene for GPU");
    Ok(node_count)
}

fn encode_node(
    node: &SceneNode,
    buffer: &mut ByteBuffer,
    parent_position: Vec3,
    parent_scale: Vec3,
) -> Result<usize> {
    let position = parent_position + node.position;
    let scale = parent_scale * node.scale;

    let child_count = u32::try_from(node.children.len()).map_err(|_| {
        Error::format(format!(
            "node '{}' has {} children, more than a u32 count holds",
            node.name,
            node.children.len()
        ))
    })?;

    let record = GpuNode {
        object_type: node.object_type.as_tag(),
        position,
        scale,
        color: node.color,
        link_type: node.link_type.as_tag(),
        child_count,
    };
    buffer
        .write(record)
        .context(|| format!("writing GPU record for node '{}'", node.name))?;

    let mut total = 1;
    for (index, child) in node.children.iter().enumerate() {
        total += encode_node(child, buffer, position, scale)
            .context(|| format!("encoding child {} of node '{}'", index, node.name))?;
    }
    Ok(total)
}

/// Read `count` GPU records from the buffer's cursor.
///
/// The shader never needs this; it exists to inspect an encoded frame.
pub fn decode_gpu(buffer: &mut ByteBuffer, count: usize) -> Result<Vec<GpuNode>> {
    (0..count)
        .map(|index| {
            buffer
                .read::<GpuNode>()
                .context(|| format!("reading GPU record {} of {}", index, count))
        })
        .collect()
}
