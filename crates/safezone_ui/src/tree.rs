//! Layout tree owning every rectangle-transform.
//!
//! Nodes are resolved top-down against their parent's pixel rect. Any node
//! whose resolved rect moves or resizes is queued as a dimensions-changed
//! notification for the host to dispatch.

use std::collections::HashMap;
use std::fmt;

use safezone_shared::{Rect, Resolution, Vec2};

use crate::anchors::Anchors;
use crate::error::{SafeAreaError, SafeAreaResult};

/// Unique identifier for a layout node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Creates a new node ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Positioning descriptor of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectTransform {
    /// Normalized lower anchor.
    pub anchor_min: Vec2,
    /// Normalized upper anchor.
    pub anchor_max: Vec2,
    /// Pixel offset added to the lower anchor point.
    pub offset_min: Vec2,
    /// Pixel offset added to the upper anchor point.
    pub offset_max: Vec2,
}

impl Default for RectTransform {
    fn default() -> Self {
        Self::STRETCH
    }
}

impl RectTransform {
    /// Fills the parent exactly.
    pub const STRETCH: Self = Self {
        anchor_min: Vec2::ZERO,
        anchor_max: Vec2::ONE,
        offset_min: Vec2::ZERO,
        offset_max: Vec2::ZERO,
    };

    /// Returns the anchor pair.
    #[must_use]
    pub const fn anchors(&self) -> Anchors {
        Anchors::new(self.anchor_min, self.anchor_max)
    }

    /// Resolves this transform inside `parent`.
    #[must_use]
    pub fn resolve(&self, parent: Rect) -> Rect {
        let origin = parent.position();
        let size = parent.size();
        Rect::from_min_max(
            origin + size.scale(self.anchor_min) + self.offset_min,
            origin + size.scale(self.anchor_max) + self.offset_max,
        )
    }
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    transform: RectTransform,
    rect: Rect,
    active: bool,
}

/// Scene graph of rectangle-transforms under a screen-sized root.
#[derive(Debug)]
pub struct LayoutTree {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    next_id: u64,
    dimension_changes: Vec<NodeId>,
}

impl LayoutTree {
    /// Name given to the root node.
    pub const ROOT_NAME: &'static str = "Canvas";

    /// Creates a tree whose root covers a screen of the given size.
    #[must_use]
    pub fn new(screen: Resolution) -> Self {
        let root = NodeId::new(0);
        let mut nodes = HashMap::with_capacity(16);
        nodes.insert(
            root,
            Node {
                name: Self::ROOT_NAME.to_owned(),
                parent: None,
                children: Vec::new(),
                transform: RectTransform::STRETCH,
                rect: screen.full_rect(),
                active: true,
            },
        );

        Self {
            nodes,
            root,
            next_id: 1,
            dimension_changes: Vec::new(),
        }
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root cannot be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a stretched child under `parent`.
    ///
    /// # Errors
    ///
    /// Returns [`SafeAreaError::UnknownNode`] if `parent` does not exist.
    pub fn add_node(&mut self, parent: NodeId, name: impl Into<String>) -> SafeAreaResult<NodeId> {
        let parent_rect = self.node(parent)?.rect;
        let id = NodeId::new(self.next_id);
        self.next_id += 1;

        let transform = RectTransform::STRETCH;
        self.nodes.insert(
            id,
            Node {
                name: name.into(),
                parent: Some(parent),
                children: Vec::new(),
                transform,
                rect: transform.resolve(parent_rect),
                active: true,
            },
        );
        self.node_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Removes a node and all its children. The root is never removed.
    pub fn remove(&mut self, id: NodeId) {
        if id == self.root {
            return;
        }

        if let Some(node) = self.nodes.remove(&id) {
            for child in node.children {
                self.remove(child);
            }
            if let Some(parent) = node.parent.and_then(|p| self.nodes.get_mut(&p)) {
                parent.children.retain(|&c| c != id);
            }
        }
        self.dimension_changes.retain(|&c| c != id);
    }

    /// Returns true if the node exists.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the node's name.
    #[must_use]
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).map(|n| n.name.as_str())
    }

    /// Returns the node's own active flag.
    #[must_use]
    pub fn is_active(&self, id: NodeId) -> Option<bool> {
        self.nodes.get(&id).map(|n| n.active)
    }

    /// Sets the node's own active flag.
    ///
    /// # Errors
    ///
    /// Returns [`SafeAreaError::UnknownNode`] if `id` does not exist.
    pub fn set_active(&mut self, id: NodeId, active: bool) -> SafeAreaResult<()> {
        self.node_mut(id)?.active = active;
        Ok(())
    }

    /// Returns the node's transform.
    #[must_use]
    pub fn transform(&self, id: NodeId) -> Option<&RectTransform> {
        self.nodes.get(&id).map(|n| &n.transform)
    }

    /// Returns the node's resolved pixel rect.
    #[must_use]
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(&id).map(|n| n.rect)
    }

    /// Returns the node's children.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(&id).map_or(&[][..], |n| n.children.as_slice())
    }

    /// Overwrites a node's anchors and re-resolves its subtree.
    ///
    /// # Errors
    ///
    /// Returns [`SafeAreaError::UnknownNode`] if `id` does not exist.
    pub fn set_anchors(&mut self, id: NodeId, anchors: Anchors) -> SafeAreaResult<()> {
        let node = self.node_mut(id)?;
        node.transform.anchor_min = anchors.min;
        node.transform.anchor_max = anchors.max;
        self.relayout(id);
        Ok(())
    }

    /// Overwrites a node's pixel offsets and re-resolves its subtree.
    ///
    /// # Errors
    ///
    /// Returns [`SafeAreaError::UnknownNode`] if `id` does not exist.
    pub fn set_offsets(&mut self, id: NodeId, min: Vec2, max: Vec2) -> SafeAreaResult<()> {
        let node = self.node_mut(id)?;
        node.transform.offset_min = min;
        node.transform.offset_max = max;
        self.relayout(id);
        Ok(())
    }

    /// Resizes the root to a new screen size.
    pub fn set_root_size(&mut self, screen: Resolution) {
        let root = self.root;
        let rect = screen.full_rect();
        let Some(node) = self.nodes.get_mut(&root) else {
            return;
        };
        if node.rect == rect {
            return;
        }
        node.rect = rect;
        let children = node.children.clone();
        self.dimension_changes.push(root);
        for child in children {
            self.relayout(child);
        }
    }

    /// Drains pending dimensions-changed notifications, in resolution order.
    pub fn take_dimension_changes(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.dimension_changes)
    }

    /// Returns true if notifications are waiting to be dispatched.
    #[must_use]
    pub fn has_dimension_changes(&self) -> bool {
        !self.dimension_changes.is_empty()
    }

    fn node(&self, id: NodeId) -> SafeAreaResult<&Node> {
        self.nodes.get(&id).ok_or(SafeAreaError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> SafeAreaResult<&mut Node> {
        self.nodes.get_mut(&id).ok_or(SafeAreaError::UnknownNode(id))
    }

    fn relayout(&mut self, id: NodeId) {
        let parent_rect = self
            .nodes
            .get(&id)
            .and_then(|n| n.parent)
            .and_then(|p| self.nodes.get(&p))
            .map(|p| p.rect);

        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        // The root has no parent and keeps its screen rect.
        let Some(parent_rect) = parent_rect else {
            return;
        };

        let rect = node.transform.resolve(parent_rect);
        if rect == node.rect {
            return;
        }
        node.rect = rect;
        let children = node.children.clone();
        self.dimension_changes.push(id);

        for child in children {
            self.relayout(child);
        }
    }
}
