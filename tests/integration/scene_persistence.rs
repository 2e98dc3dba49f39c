//! Save/load through real files, the way the host does at startup and exit.

use crate::common::*;
use scenebuf::{
    decode_disk, disk_record_size, encode_disk, ByteBuffer, LinkType, ObjectType, Scene,
    SceneNode, Vec3,
};

#[test]
fn test_save_then_load_restores_tree() {
    init_tracing();
    let (_dir, path) = scene_path("test.scene");

    let scene = editor_scene();
    scene.save(&path).unwrap();
    let loaded = Scene::load(&path).unwrap();

    assert_eq!(loaded.root, scene.root);
    let hole = &loaded.root.children[1].children[0];
    assert_eq!(hole.link_type, LinkType::Subtraction);
    assert_eq!(hole.name, "Root child child");
}

#[test]
fn test_disk_keeps_local_transforms() {
    let (_dir, path) = scene_path("chain.scene");

    let scene = Scene {
        root: offset_chain(),
        ..Scene::new()
    };
    scene.save(&path).unwrap();

    let loaded = Scene::load(&path).unwrap();
    let child = &loaded.root.children[0];
    assert_eq!(child.position, Vec3::new(10.0, 0.0, 0.0));
    assert_eq!(child.scale, Vec3::splat(2.0));
    assert_eq!(child.children[0].position, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn test_file_size_matches_record_sizes() {
    let (_dir, path) = scene_path("sized.scene");
    let scene = editor_scene();
    scene.save(&path).unwrap();

    let expected: usize = scene
        .root
        .iter()
        .map(|n| disk_record_size(n.name.len()))
        .sum();
    assert_eq!(std::fs::metadata(&path).unwrap().len() as usize, expected);
}

#[test]
fn test_empty_leaf_record() {
    let (_dir, path) = scene_path("leaf.scene");
    let leaf = SceneNode::new("", ObjectType::Empty, Vec3::ZERO, Vec3::ONE, Vec3::ZERO);

    let mut buffer = ByteBuffer::new();
    encode_disk(&leaf, &mut buffer).unwrap();
    buffer.write_to_file(&path).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 48);

    let mut loaded = ByteBuffer::from_file(&path).unwrap();
    let decoded = decode_disk(&mut loaded).unwrap();
    assert_eq!(decoded, leaf);
}

#[test]
fn test_corrupt_file_falls_back_to_fresh_scene() {
    init_tracing();
    let (_dir, path) = scene_path("corrupt.scene");

    let mut bytes = {
        let mut buffer = ByteBuffer::new();
        editor_scene().write_to_buffer(&mut buffer).unwrap();
        buffer.as_bytes().to_vec()
    };
    bytes.truncate(bytes.len() / 2);
    std::fs::write(&path, &bytes).unwrap();

    let err = Scene::load(&path).unwrap_err();
    assert!(err.is_end_of_buffer());
    assert!(err.report().contains("loading scene from"));

    assert_eq!(Scene::load_or_default(&path), Scene::new());
}

#[test]
fn test_overwrite_existing_scene_file() {
    let (_dir, path) = scene_path("overwrite.scene");

    editor_scene().save(&path).unwrap();
    Scene::new().save(&path).unwrap();

    let loaded = Scene::load(&path).unwrap();
    assert_eq!(loaded.root, SceneNode::root());
}

#[test]
fn test_deep_chain_that_renders_also_saves() {
    let (_dir, path) = scene_path("deep.scene");

    let mut root = SceneNode::root();
    for _ in 0..300 {
        root = SceneNode::root().with_child(root);
    }
    let scene = Scene {
        root,
        ..Scene::new()
    };
    assert_eq!(scene.root.depth(), 301);

    let mut frame = ByteBuffer::new();
    assert_eq!(scene.encode_gpu(&mut frame).unwrap().node_count, 301);

    scene.save(&path).unwrap();
    let loaded = Scene::load(&path).unwrap();
    assert_eq!(loaded.root.depth(), 301);
    assert_eq!(loaded.root, scene.root);
}
