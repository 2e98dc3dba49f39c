//! Scene: the node tree plus renderer settings
//!
//! The scene is the unit the host works with. Every frame it is encoded
//! into the GPU buffer; at startup and shutdown it is loaded from and
//! saved to a scene file holding the root's disk record.

use crate::disk::{decode_disk, encode_disk};
use crate::gpu::encode_gpu;
use crate::node::SceneNode;
use glam::Vec3;
use scenebuf_buffer::ByteBuffer;
use scenebuf_core::{Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Renderer parameters edited alongside the tree
///
/// These are uniforms, not part of the scene file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Distance at which geometry fades fully into the sky
    pub fog_distance: f32,
    /// Sky colour at the zenith
    pub sky_top_color: Vec3,
    /// Sky colour at the horizon
    pub sky_bottom_color: Vec3,
    /// Shadow darkness in 0..1
    pub shadow_intensity: f32,
    /// Shade by march distance instead of lighting
    pub visualize_distances: bool,
    /// Direction the light shines in
    pub light_direction: Vec3,
    /// Light position
    pub light_position: Vec3,
    /// Light colour
    pub light_color: Vec3,
}

impl Default for SceneSettings {
    fn default() -> Self {
        SceneSettings {
            fov: 75.0,
            fog_distance: 100.0,
            sky_top_color: Vec3::new(120.0, 128.0, 170.0) / 255.0,
            sky_bottom_color: Vec3::new(242.0, 231.0, 255.0) / 255.0,
            shadow_intensity: 0.0,
            visualize_distances: false,
            light_direction: Vec3::new(-1.0, -1.0, 0.0).normalize(),
            light_position: Vec3::new(30.0, 30.0, 0.0),
            light_color: Vec3::new(255.0, 237.0, 227.0) / 255.0,
        }
    }
}

/// What a compute dispatch needs to consume an encoded frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpuUpload {
    /// Records in the buffer, the shader's iteration bound
    pub node_count: usize,
    /// Bytes to upload from the start of the buffer
    pub byte_len: usize,
}

/// A node tree and its renderer settings
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Root of the tree; always present
    pub root: SceneNode,
    /// Renderer parameters
    pub settings: SceneSettings,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// A scene holding only the root.
    pub fn new() -> Self {
        Scene {
            root: SceneNode::root(),
            settings: SceneSettings::default(),
        }
    }

    /// Reset `buffer` and encode the tree into it for the GPU.
    pub fn encode_gpu(&self, buffer: &mut ByteBuffer) -> Result<GpuUpload> {
        buffer.reset();
        let node_count = encode_gpu(&self.root, buffer)?;
        Ok(GpuUpload {
            node_count,
            byte_len: buffer.len(),
        })
    }

    /// Append the tree's disk record to `buffer`.
    pub fn write_to_buffer(&self, buffer: &mut ByteBuffer) -> Result<()> {
        encode_disk(&self.root, buffer)
    }

    /// Replace the tree with the disk record at the buffer's cursor.
    ///
    /// On failure the current tree is kept.
    pub fn read_from_buffer(&mut self, buffer: &mut ByteBuffer) -> Result<()> {
        self.root = decode_disk(buffer)?;
        Ok(())
    }

    /// Save the tree to a scene file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut buffer = ByteBuffer::new();
        self.write_to_buffer(&mut buffer)
            .and_then(|()| buffer.write_to_file(path))
            .context(|| format!("saving scene to {}", path.display()))
    }

    /// Load a scene file. Settings take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Scene> {
        let path = path.as_ref();
        let mut scene = Scene::new();
        ByteBuffer::from_file(path)
            .and_then(|mut buffer| scene.read_from_buffer(&mut buffer))
            .context(|| format!("loading scene from {}", path.display()))?;
        Ok(scene)
    }

    /// Load a scene file, or start a fresh scene if there is none or it
    /// cannot be read.
    pub fn load_or_default(path: impl AsRef<Path>) -> Scene {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "No scene file, starting empty scene");
            return Scene::new();
        }

        match Scene::load(path) {
            Ok(scene) => scene,
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e.report(),
                    "Could not load scene, starting empty scene"
                );
                Scene::new()
            }
        }
    }
}
