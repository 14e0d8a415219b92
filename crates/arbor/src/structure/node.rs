//! Diagram tree nodes.

use std::{cell::OnceCell, fmt};

use arbor_core::geometry::{Bounds, Size};

use crate::layout::Placement;

/// Pre-order index of a node within its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One element of a logic diagram.
///
/// A node owns its children exclusively; the child list is fixed at
/// construction. Layout results are stored in write-once cells: once the
/// [`Engine`](crate::layout::Engine) has computed a subtree size, column width
/// or placement for a node, that value is final for the node's lifetime.
#[derive(Debug)]
pub struct Node {
    id: NodeId,
    title: String,
    children: Vec<Node>,
    pub(crate) subtree_size: OnceCell<Size>,
    pub(crate) column_width: OnceCell<f32>,
    pub(crate) placement: OnceCell<Placement>,
}

impl Node {
    /// Creates a node with the given children.
    ///
    /// Trees produced by [`TreeBuilder`](super::TreeBuilder) number their
    /// nodes in pre-order; hand-built trees should keep ids unique so that
    /// measurements keyed by id stay unambiguous.
    pub fn new(id: NodeId, title: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id,
            title: title.into(),
            children,
            subtree_size: OnceCell::new(),
            column_width: OnceCell::new(),
            placement: OnceCell::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Display label, `"<name>: <title or class>"`.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Direct children in source order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Iterates this node and all its descendants in pre-order.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including this node.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false; a subtree contains at least its own root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Looks up a node of this subtree by id.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.iter().find(|node| node.id == id)
    }

    /// Cached subtree size, if the size pass has reached this node.
    pub fn subtree_size(&self) -> Option<Size> {
        self.subtree_size.get().copied()
    }

    /// Cached column width, if it has been computed.
    pub fn column_width(&self) -> Option<f32> {
        self.column_width.get().copied()
    }

    /// Placement assigned by the position pass.
    pub fn placement(&self) -> Option<Placement> {
        self.placement.get().copied()
    }

    /// Whether the position pass has placed this node.
    pub fn is_positioned(&self) -> bool {
        self.placement.get().is_some()
    }

    /// On-screen rectangle of this node, given its intrinsic size.
    ///
    /// The forced column width, when present, replaces the intrinsic width.
    pub fn bounds(&self, intrinsic: Size) -> Option<Bounds> {
        self.placement().map(|placement| {
            let size = placement.display_size(intrinsic);
            placement.origin().to_bounds(size)
        })
    }
}

/// Pre-order iterator over a subtree.
pub struct PreOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
