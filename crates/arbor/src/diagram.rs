//! The root component of a logic diagram.
//!
//! A [`Diagram`] owns a parsed document and, when the document has an
//! [`ENTRY_PIN`] object, the node tree built from it.

use log::{debug, info};
use thiserror::Error;

use arbor_core::{
    document::{Object, Value},
    geometry::{Point, Size},
};

use crate::{
    layout::{Engine, LayoutError, Surface},
    structure::{Node, Registry, SkippedWiring, TreeBuilder},
};

/// Document key the diagram tree is rooted at.
pub const ENTRY_PIN: &str = "in";

/// Where the root node is placed when no other origin is given.
pub const DEFAULT_ORIGIN: Point = Point::new(40.0, 40.0);

/// Errors in the shape of a diagram document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("entry pin `in` must be an object, found {kind}")]
    EntryPinNotObject { kind: &'static str },
}

/// A built diagram: the source document plus its node tree.
#[derive(Debug)]
pub struct Diagram {
    document: Object,
    root: Option<Node>,
    skipped: Vec<SkippedWiring>,
}

impl Diagram {
    /// Builds the diagram tree from a document.
    ///
    /// A document without an entry pin yields a diagram with no tree, which
    /// lays out to nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EntryPinNotObject`] if the entry pin is present
    /// but is not an object.
    pub fn from_document(document: Object) -> Result<Self, ConfigError> {
        let (root, skipped) = match document.get(ENTRY_PIN) {
            None => {
                info!("Document has no entry pin; nothing to lay out");
                (None, Vec::new())
            }
            Some(Value::Object(entry)) => {
                let mut builder = TreeBuilder::new(Registry::new(&document));
                let root = builder.build_entry(ENTRY_PIN, entry);
                (Some(root), builder.into_skipped())
            }
            Some(other) => {
                return Err(ConfigError::EntryPinNotObject { kind: other.kind() });
            }
        };

        if let Some(root) = &root {
            debug!(nodes = root.len(), skipped = skipped.len(); "Diagram tree built");
        }

        Ok(Self {
            document,
            root,
            skipped,
        })
    }

    /// The document the diagram was built from.
    pub fn document(&self) -> &Object {
        &self.document
    }

    /// Root of the tree built from the entry pin.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// `on<Event>` entries that did not produce a node.
    pub fn skipped(&self) -> &[SkippedWiring] {
        &self.skipped
    }

    /// Lays the diagram out with its root at [`DEFAULT_ORIGIN`].
    ///
    /// # Errors
    ///
    /// See [`layout_all_at`](Self::layout_all_at).
    pub fn layout_all<S: Surface + ?Sized>(
        &self,
        engine: &Engine,
        surface: &mut S,
    ) -> Result<Option<Size>, LayoutError> {
        self.layout_all_at(engine, DEFAULT_ORIGIN, surface)
    }

    /// Attaches every node to `surface`, positions the tree with its root at
    /// `origin` and reports the bounding size back to the surface.
    ///
    /// The bounding size spans from `(0, 0)` to the far corner of the tree:
    /// `origin + subtree_size(root)`. It is returned as well as reported.
    /// Without a tree nothing is attached and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::MeasurementUnavailable`] if the surface did not
    /// measure a node on attach, or [`LayoutError::AlreadyLaidOut`] if the
    /// diagram was laid out before.
    pub fn layout_all_at<S: Surface + ?Sized>(
        &self,
        engine: &Engine,
        origin: Point,
        surface: &mut S,
    ) -> Result<Option<Size>, LayoutError> {
        let Some(root) = &self.root else {
            return Ok(None);
        };

        for node in root.iter() {
            surface.attach(node);
        }

        engine.position(root, origin, 0.0, &*surface)?;
        let size = engine.subtree_size(root, &*surface)?;

        let bounding = Size::new(origin.x() + size.width(), origin.y() + size.height());
        info!(width = bounding.width(), height = bounding.height(); "Diagram laid out");
        surface.resize(bounding);

        Ok(Some(bounding))
    }
}
