//! Seams between the layout engine and whatever draws the nodes.

use std::collections::HashMap;

use arbor_core::geometry::Size;

use crate::structure::{Node, NodeId};

/// Source of intrinsic node sizes.
///
/// The returned size is the node's own footprint and must already include any
/// padding the renderer wants around it. `None` means the node has not been
/// measured yet; the engine reports that as an error instead of guessing.
pub trait Measure {
    fn intrinsic_size(&self, node: &Node) -> Option<Size>;
}

/// A rendering target that nodes are attached to before layout.
pub trait Surface: Measure {
    /// Called once per node, in pre-order, before any size is queried.
    fn attach(&mut self, node: &Node);

    /// Receives the bounding size of the laid-out diagram, origin included.
    fn resize(&mut self, size: Size);
}

/// Precomputed sizes keyed by node id.
impl Measure for HashMap<NodeId, Size> {
    fn intrinsic_size(&self, node: &Node) -> Option<Size> {
        self.get(&node.id()).copied()
    }
}

impl<M: Measure + ?Sized> Measure for &M {
    fn intrinsic_size(&self, node: &Node) -> Option<Size> {
        (**self).intrinsic_size(node)
    }
}
