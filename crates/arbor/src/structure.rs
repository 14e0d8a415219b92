//! Diagram tree structure.
//!
//! This module turns a diagram document into an owned tree of [`Node`]s.
//!
//! - [`Node`] - One element of the diagram with its layout memo cells
//! - [`Registry`] - Name lookup over the document's top-level objects
//! - [`TreeBuilder`] - Walks `on<Event>` wiring and builds the tree
//!
//! Nodes are numbered in pre-order as they are built, starting from zero at
//! the root. Renderers key their measurements by [`NodeId`].

mod builder;
mod node;
mod registry;

pub use builder::{SkipReason, SkippedWiring, TreeBuilder, build};
pub use node::{Node, NodeId, PreOrder};
pub use registry::{ReferenceError, Registry, Wiring};
