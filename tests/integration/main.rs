//! End-to-end tests for scenebuf.
//!
//! These exercise the host's frame and save/load cycle through the facade
//! crate: build a scene, encode it for the GPU, persist it to a real file,
//! reload it, and check both encodings agree.

#[path = "../common/mod.rs"]
mod common;

mod frame_encoding;
mod scene_persistence;
