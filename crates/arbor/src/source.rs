//! Reading diagram documents from text.
//!
//! Documents are written in TOML or JSON. Both are read into the same ordered
//! [`Object`] model, keeping keys in the order they appear in the source.

use std::{fmt, ops::Range, path::Path};

use log::debug;

use arbor_core::document::Object;

/// Text format of a diagram document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    #[default]
    Toml,
    Json,
}

impl SourceFormat {
    /// Picks the format from a file extension: `.json` is JSON, anything else TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => write!(f, "TOML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// A document that could not be read.
#[derive(Debug)]
pub enum DocumentError {
    Toml(toml::de::Error),
    Json(serde_json::Error),
}

impl DocumentError {
    /// The failing format.
    pub fn format(&self) -> SourceFormat {
        match self {
            Self::Toml(_) => SourceFormat::Toml,
            Self::Json(_) => SourceFormat::Json,
        }
    }

    /// Short description of the problem, without location.
    pub fn message(&self) -> String {
        match self {
            Self::Toml(err) => err.message().to_string(),
            Self::Json(err) => {
                // serde_json appends " at line X column Y"; the span carries that
                let full = err.to_string();
                match full.rfind(" at line ") {
                    Some(index) => full[..index].to_string(),
                    None => full,
                }
            }
        }
    }

    /// Byte range of `src` the error points at, when known.
    pub fn span(&self, src: &str) -> Option<Range<usize>> {
        match self {
            Self::Toml(err) => err.span(),
            Self::Json(err) => {
                let offset = line_column_offset(src, err.line(), err.column())?;
                Some(offset..(offset + 1).min(src.len()))
            }
        }
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml(err) => write!(f, "invalid TOML document: {}", err.message()),
            Self::Json(err) => write!(f, "invalid JSON document: {err}"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Toml(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

/// Parses `source` into a document object.
///
/// # Errors
///
/// Returns [`DocumentError`] if the text is not valid in the given format or
/// its top level is not a table/object.
pub fn parse_document(source: &str, format: SourceFormat) -> Result<Object, DocumentError> {
    debug!(format:%; "Parsing document");
    match format {
        SourceFormat::Toml => toml::from_str(source).map_err(DocumentError::Toml),
        SourceFormat::Json => serde_json::from_str(source).map_err(DocumentError::Json),
    }
}

/// Converts a 1-based line and column into a byte offset.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    Some(offset.min(src.len()))
}
