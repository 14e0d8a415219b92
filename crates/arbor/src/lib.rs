//! Arbor - tree layout and rendering for declarative logic diagrams.
//!
//! A logic diagram is a document of named objects wired together through
//! `on<Event>` keys. Arbor builds the tree rooted at the document's `in`
//! entry, lays it out left to right with children stacked in aligned
//! columns, and renders it as SVG.

pub mod config;
pub mod diagram;
pub mod export;
pub mod layout;
pub mod source;
pub mod structure;

mod error;

pub use arbor_core::{color, document, geometry, text};

pub use diagram::Diagram;
pub use error::ArborError;
pub use source::SourceFormat;

use log::{debug, info, trace};

use config::AppConfig;
use export::svg::SvgSurface;
use layout::Engine;

/// Builder for parsing and rendering Arbor diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use arbor::{DiagramBuilder, SourceFormat, config::AppConfig};
///
/// let source = r#"
///     [in]
///     "$class" = "kk.Logic"
///     onDone = "done"
///
///     [done]
///     "$class" = "kk.Logic.Outlet"
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let diagram = builder.parse(source, SourceFormat::Toml)
///     .expect("Failed to parse");
/// let svg = builder.render_svg(&diagram)
///     .expect("Failed to render");
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The layout engine configured for this builder.
    pub fn engine(&self) -> Engine {
        Engine::new().with_spacing(self.config.layout().spacing())
    }

    /// Parse document text and build its diagram tree.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Parse`] if the text is not a valid document and
    /// [`ArborError::Config`] if its entry pin is not an object.
    pub fn parse(&self, source: &str, format: SourceFormat) -> Result<Diagram, ArborError> {
        info!(format:%; "Parsing diagram");

        let document = source::parse_document(source, format)
            .map_err(|err| ArborError::new_parse_error(err, source))?;
        let diagram = Diagram::from_document(document)?;

        debug!(skipped = diagram.skipped().len(); "Diagram built successfully");
        trace!(diagram:?; "Built diagram");

        Ok(diagram)
    }

    /// Lay out a diagram and render it to an SVG string.
    ///
    /// A diagram can be rendered once; its layout is fixed afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::Settings`] for out-of-range layout or font
    /// settings, [`ArborError::Export`] for invalid colors and
    /// [`ArborError::Layout`] if the diagram was already laid out.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, ArborError> {
        self.config.validate()?;
        let mut surface = SvgSurface::new(self.config.style())?;

        info!("Laying out diagram");
        let bounding =
            diagram.layout_all_at(&self.engine(), self.config.layout().origin(), &mut surface)?;
        debug!(bounding:?; "Layout calculated");

        let svg = surface.render(diagram)?;
        info!("SVG rendered successfully");
        Ok(svg)
    }
}
