//! Scene node tree
//!
//! A [`SceneNode`] exclusively owns its children. There are no parent
//! pointers and no sharing: removing a node drops its whole subtree.
//!
//! Positions and scales are local to the parent. The GPU encoder composes
//! them into global values; the disk codec stores them as-is.

use crate::types::{LinkType, NodeId, ObjectType};
use glam::Vec3;

/// One object in the scene hierarchy
#[derive(Debug)]
pub struct SceneNode {
    /// Display name (stored on disk, never sent to the GPU)
    pub name: String,
    /// Shape this node evaluates
    pub object_type: ObjectType,
    /// Position relative to the parent
    pub position: Vec3,
    /// Scale relative to the parent (component-wise)
    pub scale: Vec3,
    /// RGB colour in 0..1
    pub color: Vec3,
    /// Diffuse shading weight
    pub diffuse: f32,
    /// Specular exponent
    pub specular: f32,
    /// How this node composites with its siblings
    pub link_type: LinkType,
    /// Children in composition order
    pub children: Vec<SceneNode>,
    id: NodeId,
}

impl Default for SceneNode {
    fn default() -> Self {
        SceneNode {
            name: String::new(),
            object_type: ObjectType::Box,
            position: Vec3::ZERO,
            scale: Vec3::ZERO,
            color: Vec3::ZERO,
            diffuse: 1.0,
            specular: 48.0,
            link_type: LinkType::Default,
            children: Vec::new(),
            id: NodeId::new(),
        }
    }
}

/// Clones get fresh ids throughout the subtree so ids stay unique.
impl Clone for SceneNode {
    fn clone(&self) -> Self {
        SceneNode {
            name: self.name.clone(),
            object_type: self.object_type,
            position: self.position,
            scale: self.scale,
            color: self.color,
            diffuse: self.diffuse,
            specular: self.specular,
            link_type: self.link_type,
            children: self.children.clone(),
            id: NodeId::new(),
        }
    }
}

/// Equality compares every field except the id.
impl PartialEq for SceneNode {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.object_type == other.object_type
            && self.position == other.position
            && self.scale == other.scale
            && self.color == other.color
            && self.diffuse == other.diffuse
            && self.specular == other.specular
            && self.link_type == other.link_type
            && self.children == other.children
    }
}

impl SceneNode {
    /// Create a childless node.
    pub fn new(
        name: impl Into<String>,
        object_type: ObjectType,
        position: Vec3,
        scale: Vec3,
        color: Vec3,
    ) -> Self {
        SceneNode {
            name: name.into(),
            object_type,
            position,
            scale,
            color,
            ..Default::default()
        }
    }

    /// The root of a fresh scene: an empty node with identity transform.
    pub fn root() -> Self {
        Self::new("Root", ObjectType::Empty, Vec3::ZERO, Vec3::ONE, Vec3::ZERO)
    }

    /// Set the link type (builder pattern).
    pub fn with_link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = link_type;
        self
    }

    /// Append a child (builder pattern).
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// This node's selection handle.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Append a child and return its id.
    pub fn add_child(&mut self, child: SceneNode) -> NodeId {
        let id = child.id;
        self.children.push(child);
        id
    }

    /// Append the editor's stock child: a white unit box named after this node.
    pub fn add_default_child(&mut self) -> NodeId {
        let child = SceneNode::new(
            format!("{} child", self.name),
            ObjectType::Box,
            Vec3::ZERO,
            Vec3::ONE,
            Vec3::ONE,
        );
        self.add_child(child)
    }

    /// Remove the node with `id` from anywhere below this node.
    ///
    /// Returns the detached subtree. A node cannot remove itself.
    pub fn remove_child(&mut self, id: NodeId) -> Option<SceneNode> {
        if let Some(index) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(index));
        }
        self.children.iter_mut().find_map(|c| c.remove_child(id))
    }

    /// Find a node by id in this subtree.
    pub fn find(&self, id: NodeId) -> Option<&SceneNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }

    /// Find a node by id in this subtree, mutably.
    pub fn find_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Total nodes in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(SceneNode::subtree_len).sum::<usize>()
    }

    /// Levels in this subtree; a childless node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(SceneNode::depth).max().unwrap_or(0)
    }

    /// Pre-order iterator over this subtree.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

/// Pre-order traversal, parents before children, children in order.
pub struct Iter<'a> {
    stack: Vec<&'a SceneNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a SceneNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

impl<'a> IntoIterator for &'a SceneNode {
    type Item = &'a SceneNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
