//! Export of laid-out diagrams.
//!
//! # Pipeline Position
//!
//! ```text
//! Document text
//!     ↓ parse
//! Document (ordered Object)
//!     ↓ structure
//! Node tree
//!     ↓ attach + layout (surface measures, engine positions)
//! Positioned tree
//!     ↓ export (this module)
//! SVG
//! ```
//!
//! The SVG backend doubles as the measuring [`Surface`](crate::layout::Surface)
//! for the layout pass, since the size of a node depends on how its label is
//! rendered.

/// SVG export backend.
pub mod svg;

/// Errors that can occur during diagram export.
///
/// Converted into [`ArborError::Export`](crate::ArborError::Export) at the
/// crate boundary.
#[derive(Debug)]
pub enum Error {
    /// A style option could not be used.
    Style(String),
    /// A node could not be rendered.
    Render(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Style(msg) => write!(f, "Style error: {msg}"),
            Self::Render(msg) => write!(f, "Render error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
