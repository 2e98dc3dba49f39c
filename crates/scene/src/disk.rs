//! Disk layout encoding and decoding
//!
//! The lossless format used to save and restore a scene. A file holds a
//! single node record for the root, with children nested inside it.
//! There is no header, magic number or version tag.
//!
//! # Record Format
//!
//! ```text
//! [name_len: u16][name: bytes]
//! [type_tag: u32]
//! [position: f32 x3][scale: f32 x3][color: f32 x3]
//! [link_tag: u32]
//! [child_count: u16]
//! [child record] x child_count
//! ```
//!
//! Values are local, exactly as stored on the node. Fields must stay in
//! this order; the decoder reads them back blindly.
//!
//! Diffuse, specular and the node id are not stored. Decoded nodes carry
//! the default shading.

use crate::node::SceneNode;
use crate::types::{LinkType, ObjectType};
use glam::Vec3;
use scenebuf_buffer::ByteBuffer;
use scenebuf_core::{Error, Result, ResultExt, MAX_DISK_CHILDREN, MAX_TREE_DEPTH};
use tracing::debug;

/// Bytes of the fixed fields between the name and the child count:
/// type(4) + position(12) + scale(12) + color(12) + link(4)
pub const DISK_FIXED_FIELDS_SIZE: usize = 44;

/// Encoded size of one childless record with a `name_len`-byte name.
pub const fn disk_record_size(name_len: usize) -> usize {
    2 + name_len + DISK_FIXED_FIELDS_SIZE + 2
}

/// Encode `root` and its subtree at the buffer's cursor.
///
/// Fails with a format error if a node has more than 65535 children, a
/// name longer than 65535 bytes, or the tree is deeper than the decoder
/// accepts. Earlier records stay in the buffer on failure.
pub fn encode_disk(root: &SceneNode, buffer: &mut ByteBuffer) -> Result<()> {
    encode_node(root, buffer, 1)?;
    debug!(node_count = root.subtree_len(), bytes = buffer.len(), "Encoded scene for disk");
    Ok(())
}

fn encode_node(node: &SceneNode, buffer: &mut ByteBuffer, depth: usize) -> Result<()> {
    if depth > MAX_TREE_DEPTH {
        return Err(Error::format(format!(
            "tree is deeper than {} levels",
            MAX_TREE_DEPTH
        )));
    }
    if node.children.len() > MAX_DISK_CHILDREN {
        return Err(Error::format(format!(
            "node '{}' has {} children, the limit is {}",
            node.name,
            node.children.len(),
            MAX_DISK_CHILDREN
        )));
    }

    write_fields(node, buffer).context(|| format!("writing fields of node '{}'", node.name))?;

    for (index, child) in node.children.iter().enumerate() {
        encode_node(child, buffer, depth + 1)
            .context(|| format!("encoding child {} of node '{}'", index, node.name))?;
    }
    Ok(())
}

fn write_fields(node: &SceneNode, buffer: &mut ByteBuffer) -> Result<()> {
    buffer.write_str(&node.name)?;
    buffer.write(node.object_type.as_tag())?;
    buffer.write(node.position)?;
    buffer.write(node.scale)?;
    buffer.write(node.color)?;
    buffer.write(node.link_type.as_tag())?;
    buffer.write(node.children.len() as u16)
}

/// Decode one node record and its subtree from the buffer's cursor.
///
/// Unknown type or link tags, truncated records and over-deep nesting
/// all fail the whole decode; nothing partial is returned.
pub fn decode_disk(buffer: &mut ByteBuffer) -> Result<SceneNode> {
    let root = decode_node(buffer, 1)?;
    debug!(node_count = root.subtree_len(), "Decoded scene from disk");
    Ok(root)
}

fn decode_node(buffer: &mut ByteBuffer, depth: usize) -> Result<SceneNode> {
    if depth > MAX_TREE_DEPTH {
        return Err(Error::format(format!(
            "record at offset {} nests deeper than {} levels",
            buffer.position(),
            MAX_TREE_DEPTH
        )));
    }

    let offset = buffer.position();
    let name = buffer
        .read_string()
        .context(|| format!("reading node name at offset {}", offset))?;

    let mut node = SceneNode::default();
    node.name = name;
    let child_count = read_fields(buffer, &mut node)
        .context(|| format!("reading fields of node '{}'", node.name))?;

    for index in 0..child_count {
        let child = decode_node(buffer, depth + 1)
            .context(|| format!("decoding child {} of node '{}'", index, node.name))?;
        node.children.push(child);
    }
    Ok(node)
}

fn read_fields(buffer: &mut ByteBuffer, node: &mut SceneNode) -> Result<u16> {
    node.object_type = ObjectType::try_from(buffer.read::<u32>()?)?;
    node.position = buffer.read::<Vec3>()?;
    node.scale = buffer.read::<Vec3>()?;
    node.color = buffer.read::<Vec3>()?;
    node.link_type = LinkType::try_from(buffer.read::<u32>()?)?;
    buffer.read::<u16>()
}
