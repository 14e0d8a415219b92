//! Tree layout.
//!
//! Layout runs in two passes over a built [`Node`](crate::structure::Node)
//! tree:
//!
//! 1. **Size pass**: [`Engine::subtree_size`] aggregates intrinsic sizes
//!    bottom-up. A node's subtree is as wide as the node plus its widest child
//!    subtree, and as tall as its children stacked with spacing.
//! 2. **Position pass**: [`Engine::position`] walks top-down, placing every
//!    child one spacing to the right of its parent and stacking siblings. All
//!    children of a node are forced to the width of the widest of them so the
//!    column lines up.
//!
//! ```text
//!  (x, y) ┌────────┐   ┌──────────────┐
//!         │ parent │   │ child A      │
//!         └────────┘   └──────────────┘
//!                        ↕ spacing
//!                      ┌──────────────┐
//!                      │ child B      │
//!                      └──────────────┘
//! ```
//!
//! Intrinsic sizes come from a [`Measure`] implementation. Results are cached
//! on the nodes and never recomputed.

mod engine;
mod measure;

pub use engine::{Engine, LayoutError, SPACING};
pub use measure::{Measure, Surface};

use arbor_core::geometry::{Point, Size};

/// Where the position pass put a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    origin: Point,
    forced_width: Option<f32>,
}

impl Placement {
    /// Creates a placement. A forced width of zero is treated as absent.
    pub fn new(origin: Point, forced_width: Option<f32>) -> Self {
        Self {
            origin,
            forced_width: forced_width.filter(|width| *width != 0.0),
        }
    }

    /// Top-left corner of the node.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Column width imposed on the node, if any.
    pub fn forced_width(&self) -> Option<f32> {
        self.forced_width
    }

    /// Size the node is displayed at: its intrinsic size, widened or narrowed
    /// to the forced column width when one applies.
    pub fn display_size(&self, intrinsic: Size) -> Size {
        match self.forced_width {
            Some(width) => intrinsic.with_width(width),
            None => intrinsic,
        }
    }
}
