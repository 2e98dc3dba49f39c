//! GPU encoding as the render loop drives it.

use crate::common::*;
use scenebuf::{decode_gpu, ByteBuffer, Scene, Vec3, GPU_NODE_SIZE};

#[test]
fn test_offset_chain_composes_transforms() {
    init_tracing();
    let scene = Scene {
        root: offset_chain(),
        ..Scene::new()
    };

    let mut buffer = ByteBuffer::with_capacity(32);
    let upload = scene.encode_gpu(&mut buffer).unwrap();
    assert_eq!(upload.node_count, 3);
    assert_eq!(upload.byte_len, 3 * GPU_NODE_SIZE);

    buffer.rewind();
    let records = decode_gpu(&mut buffer, upload.node_count).unwrap();

    // Root contributes the identity frame
    assert_eq!(records[0].position, Vec3::ZERO);
    assert_eq!(records[0].scale, Vec3::ONE);

    assert_eq!(records[1].position, Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(records[1].scale, Vec3::new(2.0, 2.0, 2.0));

    assert_eq!(records[2].position, Vec3::new(11.0, 0.0, 0.0));
    assert_eq!(records[2].scale, Vec3::new(2.0, 2.0, 2.0));
}

#[test]
fn test_frames_reuse_one_buffer() {
    init_tracing();
    let mut scene = editor_scene();
    let mut buffer = ByteBuffer::new();

    let first = scene.encode_gpu(&mut buffer).unwrap();
    assert_eq!(first.node_count, scene.root.subtree_len());
    let capacity = buffer.capacity();

    // The editor adds a node between frames
    scene.root.add_default_child();
    let second = scene.encode_gpu(&mut buffer).unwrap();
    assert_eq!(second.node_count, first.node_count + 1);
    assert_eq!(buffer.len(), second.byte_len);
    assert!(buffer.capacity() >= capacity);

    // Removing it brings the frame back to the original size
    let added = scene.root.children.last().unwrap().id();
    scene.root.remove_child(added).unwrap();
    let third = scene.encode_gpu(&mut buffer).unwrap();
    assert_eq!(third, first);
}

#[test]
fn test_gpu_frame_has_no_names() {
    let scene = editor_scene();
    let mut buffer = ByteBuffer::new();
    scene.encode_gpu(&mut buffer).unwrap();

    let bytes = buffer.as_bytes();
    for node in scene.root.iter() {
        let name = node.name.as_bytes();
        if name.len() >= 4 {
            assert!(
                !bytes.windows(name.len()).any(|w| w == name),
                "name {:?} leaked into GPU layout",
                node.name
            );
        }
    }
}
