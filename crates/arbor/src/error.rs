//! Error types for Arbor operations.
//!
//! [`ArborError`] wraps every failure a caller of the [`DiagramBuilder`]
//! can see, from reading the document to exporting SVG.
//!
//! [`DiagramBuilder`]: crate::DiagramBuilder

use std::io;

use thiserror::Error;

use crate::{
    config::SettingsError, diagram::ConfigError, layout::LayoutError, source::DocumentError,
};

/// The main error type for Arbor operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the document source next to the error so the
/// failing location can be shown to the user.
#[derive(Debug, Error)]
pub enum ArborError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: DocumentError, src: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl ArborError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: DocumentError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
