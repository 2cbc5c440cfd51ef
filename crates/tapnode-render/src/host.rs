//! Host render-tree integration.
//!
//! A widget never owns its presentation nodes. It only asks the host to make a
//! node a child of the widget's own subtree, or to remove it again. The
//! [`RenderHost`] trait is that request surface; the host decides what a node
//! is (a scene-graph handle, an entity id, an index into an arena).
//!
//! [`RecordingHost`] is an in-memory host that keeps an arena of named nodes and
//! logs every operation. It backs headless use and the test suites.

use std::fmt;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifies a node created by a [`RecordingHost`].
    pub struct NodeKey;
}

/// The attach/detach surface a widget uses to manage its children.
///
/// Nodes are compared with `PartialEq` to decide whether the node that should
/// be shown is already attached.
pub trait RenderHost {
    /// Handle to an externally owned visual node.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Make `node` a child of the widget's subtree.
    fn attach_child(&mut self, node: &Self::Node);

    /// Remove `node` from the widget's subtree. The node itself is untouched.
    fn detach_child(&mut self, node: &Self::Node);
}

impl<H: RenderHost + ?Sized> RenderHost for &mut H {
    type Node = H::Node;

    fn attach_child(&mut self, node: &Self::Node) {
        (**self).attach_child(node)
    }

    fn detach_child(&mut self, node: &Self::Node) {
        (**self).detach_child(node)
    }
}

/// A single operation performed on a [`RecordingHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOp {
    /// A node was attached.
    Attach(NodeKey),
    /// A node was detached.
    Detach(NodeKey),
}

/// In-memory render host that records every attach and detach.
#[derive(Debug, Default)]
pub struct RecordingHost {
    nodes: SlotMap<NodeKey, String>,
    children: Vec<NodeKey>,
    ops: Vec<HostOp>,
}

impl RecordingHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a named node. The node starts detached.
    pub fn create_node(&mut self, name: impl Into<String>) -> NodeKey {
        self.nodes.insert(name.into())
    }

    /// The name a node was created with.
    pub fn name(&self, key: NodeKey) -> Option<&str> {
        self.nodes.get(key).map(String::as_str)
    }

    /// Currently attached children, in attach order.
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Names of the currently attached children.
    pub fn child_names(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|key| self.name(*key))
            .collect()
    }

    /// Whether `key` is currently attached.
    pub fn is_attached(&self, key: NodeKey) -> bool {
        self.children.contains(&key)
    }

    /// Every operation performed so far, oldest first.
    pub fn ops(&self) -> &[HostOp] {
        &self.ops
    }

    /// Drain the operation log.
    pub fn take_ops(&mut self) -> Vec<HostOp> {
        std::mem::take(&mut self.ops)
    }
}

impl RenderHost for RecordingHost {
    type Node = NodeKey;

    fn attach_child(&mut self, node: &NodeKey) {
        tracing::trace!(target: "tapnode_render::host", ?node, "attach_child");
        self.ops.push(HostOp::Attach(*node));
        if !self.children.contains(node) {
            self.children.push(*node);
        }
    }

    fn detach_child(&mut self, node: &NodeKey) {
        tracing::trace!(target: "tapnode_render::host", ?node, "detach_child");
        self.ops.push(HostOp::Detach(*node));
        self.children.retain(|child| child != node);
    }
}
