//! SVG rendering of logic diagrams.
//!
//! [`SvgSurface`] measures node labels when nodes are attached, serves those
//! measurements to the layout engine and finally draws every positioned node
//! as a labelled box.

use std::collections::HashMap;

use log::{debug, info};
use svg::{
    Document,
    node::{
        Text as SvgText,
        element::{Group, Rectangle, Text as TextElement},
    },
};

use arbor_core::{
    color::Color,
    geometry::Size,
    text::{Text, TextDefinition},
};

use super::Error;
use crate::{
    config::StyleConfig,
    diagram::Diagram,
    layout::{Measure, Surface},
    structure::{Node, NodeId},
};

/// Extra width added to every measured label.
pub const WIDTH_PAD: f32 = 10.0;

/// Measuring surface and SVG renderer for one diagram.
#[derive(Debug)]
pub struct SvgSurface {
    text: TextDefinition,
    background: Option<Color>,
    fill: Color,
    stroke: Color,
    text_color: Color,
    sizes: HashMap<NodeId, Size>,
    canvas: Size,
}

impl SvgSurface {
    /// Creates a surface styled by `style`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`] if a configured color is invalid.
    pub fn new(style: &StyleConfig) -> Result<Self, Error> {
        let mut text = TextDefinition::new();
        if let Some(family) = style.font_family() {
            text.set_font_family(family);
        }
        if let Some(size) = style.font_size() {
            text.set_font_size(size);
        }

        Ok(Self {
            text,
            background: style.background_color().map_err(Error::Style)?,
            fill: style.node_fill_color().map_err(Error::Style)?,
            stroke: style.node_stroke_color().map_err(Error::Style)?,
            text_color: style.text_color().map_err(Error::Style)?,
            sizes: HashMap::new(),
            canvas: Size::default(),
        })
    }

    /// Size reported by the last layout, zero before layout.
    pub fn canvas(&self) -> Size {
        self.canvas
    }

    /// Renders every node of the laid-out diagram.
    ///
    /// A diagram without a tree renders as an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if a node was never attached to this surface
    /// or has not been positioned.
    pub fn render(&self, diagram: &Diagram) -> Result<String, Error> {
        let mut document = Document::new()
            .set("width", self.canvas.width())
            .set("height", self.canvas.height())
            .set(
                "viewBox",
                format!("0 0 {} {}", self.canvas.width(), self.canvas.height()),
            );

        if let Some(background) = &self.background {
            document = document.add(
                Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background)
                    .set("fill-opacity", background.alpha()),
            );
        }

        let mut rendered = 0;
        if let Some(root) = diagram.root() {
            for node in root.iter() {
                document = document.add(self.render_node(node)?);
                rendered += 1;
            }
        }

        info!(nodes = rendered; "SVG rendered");
        Ok(document.to_string())
    }

    fn render_node(&self, node: &Node) -> Result<Group, Error> {
        let intrinsic = self.intrinsic_size(node).ok_or_else(|| {
            Error::Render(format!(
                "node {} ({}) was never attached",
                node.id(),
                node.title()
            ))
        })?;
        let bounds = node.bounds(intrinsic).ok_or_else(|| {
            Error::Render(format!(
                "node {} ({}) has not been positioned",
                node.id(),
                node.title()
            ))
        })?;

        let rect = Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", 3.0)
            .set("fill", &self.fill)
            .set("fill-opacity", self.fill.alpha())
            .set("stroke", &self.stroke)
            .set("stroke-width", 1.0);

        let label = TextElement::new("")
            .set("x", bounds.min_x() + self.text.padding().left())
            .set("y", bounds.min_y() + bounds.height() / 2.0)
            .set("dominant-baseline", "central")
            .set("font-family", self.text.font_family())
            .set("font-size", self.text.font_size())
            .set("fill", &self.text_color)
            .add(SvgText::new(node.title()));

        Ok(Group::new()
            .set("class", "arbor-node")
            .set("data-node", node.id().index())
            .add(rect)
            .add(label))
    }
}

impl Measure for SvgSurface {
    fn intrinsic_size(&self, node: &Node) -> Option<Size> {
        self.sizes.get(&node.id()).copied()
    }
}

impl Surface for SvgSurface {
    fn attach(&mut self, node: &Node) {
        let label = Text::new(&self.text, node.title()).calculate_size();
        let size = label.with_width(label.width() + WIDTH_PAD);
        debug!(id:% = node.id(), width = size.width(), height = size.height(); "Measured node");
        self.sizes.insert(node.id(), size);
    }

    fn resize(&mut self, size: Size) {
        self.canvas = size;
    }
}
