//! The two-pass tree layout engine.

use log::{debug, trace};
use thiserror::Error;

use arbor_core::geometry::{Point, Size};

use super::{Measure, Placement};
use crate::structure::{Node, NodeId};

/// Default gap between a parent and its children, and between siblings.
pub const SPACING: f32 = 10.0;

/// Errors raised while laying out a tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("node {id} ({title}) has not been measured")]
    MeasurementUnavailable { id: NodeId, title: String },

    #[error("node {id} ({title}) has already been positioned")]
    AlreadyLaidOut { id: NodeId, title: String },
}

impl LayoutError {
    fn measurement_unavailable(node: &Node) -> Self {
        Self::MeasurementUnavailable {
            id: node.id(),
            title: node.title().to_string(),
        }
    }

    fn already_laid_out(node: &Node) -> Self {
        Self::AlreadyLaidOut {
            id: node.id(),
            title: node.title().to_string(),
        }
    }
}

/// Lays out node trees.
///
/// The engine itself is stateless apart from its spacing; every computed
/// value is cached on the node it belongs to. A tree is therefore laid out
/// once: cached sizes are returned as-is even if the [`Measure`] later
/// reports something different, and positioning a node twice fails with
/// [`LayoutError::AlreadyLaidOut`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
///
/// use arbor::layout::Engine;
/// use arbor::structure::{Node, NodeId};
/// use arbor_core::geometry::{Point, Size};
///
/// let root = Node::new(
///     NodeId::new(0),
///     "in: kk.Logic",
///     vec![
///         Node::new(NodeId::new(1), "A: a", vec![]),
///         Node::new(NodeId::new(2), "B: b", vec![]),
///     ],
/// );
/// let sizes = HashMap::from([
///     (NodeId::new(0), Size::new(60.0, 20.0)),
///     (NodeId::new(1), Size::new(50.0, 20.0)),
///     (NodeId::new(2), Size::new(30.0, 40.0)),
/// ]);
///
/// let engine = Engine::new();
/// engine.position(&root, Point::new(40.0, 40.0), 0.0, &sizes)?;
///
/// assert_eq!(engine.subtree_size(&root, &sizes)?, Size::new(110.0, 80.0));
/// let b = &root.children()[1];
/// assert_eq!(b.placement().unwrap().origin(), Point::new(110.0, 70.0));
/// assert_eq!(b.placement().unwrap().forced_width(), Some(50.0));
/// # Ok::<(), arbor::layout::LayoutError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    spacing: f32,
}

impl Default for Engine {
    fn default() -> Self {
        Self { spacing: SPACING }
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the gap between a parent and its children and between siblings.
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// The node's own size, as reported by `measure`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MeasurementUnavailable`] if the node has not
    /// been measured.
    pub fn intrinsic_size<M: Measure + ?Sized>(
        &self,
        node: &Node,
        measure: &M,
    ) -> Result<Size, LayoutError> {
        measure
            .intrinsic_size(node)
            .ok_or_else(|| LayoutError::measurement_unavailable(node))
    }

    /// Size of the node together with all its descendants.
    ///
    /// For a node with children the width is the node's intrinsic width plus
    /// the widest child subtree, and the height is the sum of the child
    /// subtree heights, each followed by one spacing. The node's own height
    /// does not contribute. A leaf's subtree size is its intrinsic size.
    ///
    /// The result is cached on the node and returned unchanged by later
    /// calls.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MeasurementUnavailable`] if any node of the
    /// subtree has not been measured.
    pub fn subtree_size<M: Measure + ?Sized>(
        &self,
        node: &Node,
        measure: &M,
    ) -> Result<Size, LayoutError> {
        if let Some(size) = node.subtree_size.get() {
            return Ok(*size);
        }

        let mut stacked_height = 0.0;
        let mut max_child_width: f32 = 0.0;
        for child in node.children() {
            let size = self.subtree_size(child, measure)?;
            stacked_height += size.height() + self.spacing;
            max_child_width = max_child_width.max(size.width());
        }

        let own = self.intrinsic_size(node, measure)?;

        let size = if max_child_width == 0.0 {
            own
        } else {
            Size::new(own.width() + max_child_width, stacked_height)
        };
        trace!(id:% = node.id(), width = size.width(), height = size.height(); "Subtree size");

        Ok(*node.subtree_size.get_or_init(|| size))
    }

    /// Widest intrinsic width among the node's direct children, or zero for a
    /// leaf. Cached on the node.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MeasurementUnavailable`] if a child has not
    /// been measured.
    pub fn column_width<M: Measure + ?Sized>(
        &self,
        node: &Node,
        measure: &M,
    ) -> Result<f32, LayoutError> {
        if let Some(width) = node.column_width.get() {
            return Ok(*width);
        }

        let mut width: f32 = 0.0;
        for child in node.children() {
            width = width.max(self.intrinsic_size(child, measure)?.width());
        }

        Ok(*node.column_width.get_or_init(|| width))
    }

    /// Places `node` with its top-left corner at `origin`, then places its
    /// children in a column to its right.
    ///
    /// A non-zero `width` forces the node's displayed width; the engine passes
    /// each node's [`column_width`](Self::column_width) down to its children.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::AlreadyLaidOut`] if any node of the subtree was
    /// positioned before, or [`LayoutError::MeasurementUnavailable`] if any
    /// node has not been measured.
    pub fn position<M: Measure + ?Sized>(
        &self,
        node: &Node,
        origin: Point,
        width: f32,
        measure: &M,
    ) -> Result<(), LayoutError> {
        if node.is_positioned() {
            return Err(LayoutError::already_laid_out(node));
        }

        // Every node below must be measured before anything is placed.
        self.subtree_size(node, measure)?;
        let column_width = self.column_width(node, measure)?;
        let own = self.intrinsic_size(node, measure)?;

        node.placement
            .set(Placement::new(origin, Some(width)))
            .map_err(|_| LayoutError::already_laid_out(node))?;

        let child_x = origin.x() + own.width() + self.spacing;
        let mut y = origin.y();
        for child in node.children() {
            self.position(child, Point::new(child_x, y), column_width, measure)?;
            y += self.subtree_size(child, measure)?.height() + self.spacing;
        }

        debug!(
            id:% = node.id(),
            x = origin.x(),
            y = origin.y(),
            children = node.children().len();
            "Positioned node"
        );
        Ok(())
    }
}
