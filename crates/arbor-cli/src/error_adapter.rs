//! Error adapter for converting ArborError to miette diagnostics.
//!
//! This module bridges the library's standard error types and miette's rich
//! diagnostic formatting used in the CLI. Document parse errors carry their
//! source text and are rendered with the failing location highlighted.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use arbor::{ArborError, SourceFormat, config::SettingsError, source::DocumentError};

/// Adapter for a document parse error together with its source text.
pub struct DiagnosticAdapter<'a> {
    err: &'a DocumentError,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(err: &'a DocumentError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} document", self.err.format())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err.format() {
            SourceFormat::Toml => "arbor::parse::toml",
            SourceFormat::Json => "arbor::parse::json",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span(self.src)?;
        let span = SourceSpan::new(span.start.into(), span.len());
        let label = LabeledSpan::new_primary_with_span(Some(self.err.message()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for [`ArborError`] variants without source information.
pub struct ErrorAdapter<'a>(pub &'a ArborError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ArborError::Io(_) => "arbor::io",
            ArborError::Parse { .. } => "arbor::parse",
            ArborError::Config(_) => "arbor::config",
            ArborError::Settings(_) => "arbor::settings",
            ArborError::Layout(_) => "arbor::layout",
            ArborError::Export(_) => "arbor::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ArborError::Config(_) => "the `in` entry must be a table of wiring keys",
            ArborError::Settings(SettingsError::Validation { .. }) => {
                "check the [layout] and [style] tables of the configuration file"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl Reportable<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Diagnostic(d) => d,
            Reportable::Error(e) => e,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner().source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

/// Convert an [`ArborError`] into the list of reportable errors to render.
pub fn to_reportables(err: &ArborError) -> Vec<Reportable<'_>> {
    match err {
        ArborError::Parse { err, src } => {
            vec![Reportable::Diagnostic(DiagnosticAdapter::new(err, src))]
        }
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use arbor::source::parse_document;

    use super::*;

    fn parse_error(source: &str, format: SourceFormat) -> ArborError {
        let err = parse_document(source, format).unwrap_err();
        ArborError::new_parse_error(err, source)
    }

    #[test]
    fn test_toml_parse_error_is_diagnostic() {
        let err = parse_error("[in]\n\"$class\" = \n", SourceFormat::Toml);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "invalid TOML document");
                assert_eq!(d.code().unwrap().to_string(), "arbor::parse::toml");
                assert!(d.source_code().is_some());
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_json_parse_error_has_primary_label() {
        let source = "{\n  \"in\": {\n    \"$class\": kk\n  }\n}";
        let err = parse_error(source, SourceFormat::Json);

        let reportables = to_reportables(&err);
        let labels: Vec<_> = reportables[0].labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert!(labels[0].offset() <= source.len());
        assert!(!labels[0].label().unwrap().contains(" at line "));
    }

    #[test]
    fn test_non_parse_error() {
        let err = ArborError::Io(std::io::Error::other("disk full"));

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "I/O error: disk full");
                assert_eq!(e.code().unwrap().to_string(), "arbor::io");
                assert!(e.labels().is_none());
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_config_error_has_help() {
        let err: ArborError = arbor::diagram::ConfigError::EntryPinNotObject { kind: "string" }.into();

        let reportables = to_reportables(&err);
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "arbor::config"
        );
        assert!(reportables[0].help().is_some());
    }

    #[test]
    fn test_settings_error_has_own_code() {
        let err: ArborError = SettingsError::Validation {
            option: "spacing",
            reason: "expected a non-negative number, found -1".to_string(),
        }
        .into();

        let reportables = to_reportables(&err);
        assert_eq!(
            reportables[0].code().unwrap().to_string(),
            "arbor::settings"
        );
        assert!(reportables[0].help().is_some());
        assert!(reportables[0].to_string().starts_with("Settings error: Invalid spacing"));
    }
}
