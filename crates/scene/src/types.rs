//! Tag types and identifiers for scene nodes
//!
//! This module defines:
//! - ObjectType: Which signed-distance primitive a node evaluates
//! - LinkType: How a node composites with its siblings
//! - NodeId: Ephemeral per-node handle for editor selection

use scenebuf_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Shape a node evaluates
///
/// Encoded as a u32 tag in both the GPU and disk layouts. The tag values
/// are fixed by the shader and by saved files:
/// - Empty = 0 (grouping node, evaluates nothing)
/// - Sphere = 1 ... GridPlane = 8
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ObjectType {
    /// Grouping node with no shape of its own
    Empty = 0,
    /// Sphere
    Sphere = 1,
    /// Axis-aligned box
    Box = 2,
    /// Torus
    Torus = 3,
    /// Sphere repeated over infinite space
    InfiniteSpheres = 4,
    /// Box with rounded edges
    RoundBox = 5,
    /// Octahedron
    Octahedron = 6,
    /// Hexagonal prism
    HexPrism = 7,
    /// Infinite ground grid
    GridPlane = 8,
}

impl ObjectType {
    /// Every object type, in tag order
    pub const ALL: [ObjectType; 9] = [
        ObjectType::Empty,
        ObjectType::Sphere,
        ObjectType::Box,
        ObjectType::Torus,
        ObjectType::InfiniteSpheres,
        ObjectType::RoundBox,
        ObjectType::Octahedron,
        ObjectType::HexPrism,
        ObjectType::GridPlane,
    ];

    /// Convert to tag representation
    pub fn as_tag(&self) -> u32 {
        *self as u32
    }

    /// Try to create from tag
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    /// Name shown in the editor
    pub fn name(&self) -> &'static str {
        match self {
            ObjectType::Empty => "Empty",
            ObjectType::Sphere => "Sphere",
            ObjectType::Box => "Box",
            ObjectType::Torus => "Torus",
            ObjectType::InfiniteSpheres => "Infinite Spheres",
            ObjectType::RoundBox => "Round Box",
            ObjectType::Octahedron => "Octahedron",
            ObjectType::HexPrism => "Hex Prism",
            ObjectType::GridPlane => "Grid Plane",
        }
    }
}

impl TryFrom<u32> for ObjectType {
    type Error = Error;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        Self::from_tag(tag).ok_or_else(|| Error::format(format!("unknown object type tag {}", tag)))
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a node's shape combines with the shapes before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u32)]
pub enum LinkType {
    /// Hard union
    #[default]
    Default = 0,
    /// Smooth blended union
    SoftUnion = 1,
    /// Carve this shape out of the previous ones
    Subtraction = 2,
    /// Keep only the overlap
    Intersection = 3,
}

impl LinkType {
    /// Every link type, in tag order
    pub const ALL: [LinkType; 4] = [
        LinkType::Default,
        LinkType::SoftUnion,
        LinkType::Subtraction,
        LinkType::Intersection,
    ];

    /// Convert to tag representation
    pub fn as_tag(&self) -> u32 {
        *self as u32
    }

    /// Try to create from tag
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::ALL.get(tag as usize).copied()
    }

    /// Name shown in the editor
    pub fn name(&self) -> &'static str {
        match self {
            LinkType::Default => "Default",
            LinkType::SoftUnion => "Soft Union",
            LinkType::Subtraction => "Subtraction",
            LinkType::Intersection => "Intersection",
        }
    }
}

impl TryFrom<u32> for LinkType {
    type Error = Error;

    fn try_from(tag: u32) -> Result<Self, Self::Error> {
        Self::from_tag(tag).ok_or_else(|| Error::format(format!("unknown link type tag {}", tag)))
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle identifying a node while the process runs
///
/// A NodeId wraps a UUID v4 drawn when the node is constructed. It exists
/// only so the editor can select nodes; neither encoding stores it and
/// node equality ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Create a new random NodeId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
