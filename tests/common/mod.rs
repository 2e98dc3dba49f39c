//! Shared test utilities for the integration suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use scenebuf::{LinkType, ObjectType, Scene, SceneNode, Vec3};
use std::path::PathBuf;
use std::sync::Once;
use tempfile::TempDir;

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

// ============================================================================
// Fixtures
// ============================================================================

/// A temp dir plus a scene file path inside it.
///
/// Keep the `TempDir` alive for as long as the path is used.
pub fn scene_path(file_name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(file_name);
    (dir, path)
}

/// Root -> child at (10,0,0) scale 2 -> grandchild at (1,0,0) scale 1.
pub fn offset_chain() -> SceneNode {
    SceneNode::root().with_child(
        SceneNode::new(
            "child",
            ObjectType::Box,
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::splat(2.0),
            Vec3::ONE,
        )
        .with_child(SceneNode::new(
            "grandchild",
            ObjectType::Sphere,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::ONE,
            Vec3::new(1.0, 0.0, 0.0),
        )),
    )
}

/// A scene shaped the way the editor builds one.
pub fn editor_scene() -> Scene {
    let mut scene = Scene::new();

    scene.root.add_child(SceneNode::new(
        "floor",
        ObjectType::GridPlane,
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::ONE,
        Vec3::splat(0.8),
    ));

    let body = scene.root.add_default_child();
    let body_node = scene.root.find_mut(body).expect("body exists");
    body_node.object_type = ObjectType::RoundBox;
    body_node.position = Vec3::new(0.0, 2.0, 5.0);

    let hole = body_node.add_default_child();
    let hole_node = body_node.find_mut(hole).expect("hole exists");
    hole_node.object_type = ObjectType::Sphere;
    hole_node.scale = Vec3::splat(0.6);
    hole_node.link_type = LinkType::Subtraction;

    scene
}
