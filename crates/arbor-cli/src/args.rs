//! Command-line arguments of the `arbor` binary.

use clap::{Parser, ValueEnum};

use arbor::SourceFormat;

/// Render a logic document as an SVG tree diagram
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Logic document to render
    pub input: String,

    /// Where to write the SVG
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Configuration file (TOML); searched for when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Document format; guessed from the input extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Format to read the input with.
    pub fn source_format(&self) -> SourceFormat {
        match self.format {
            Some(format) => format.into(),
            None => SourceFormat::from_path(&self.input),
        }
    }
}

/// Document formats accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Toml,
    Json,
}

impl From<InputFormat> for SourceFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Toml => SourceFormat::Toml,
            InputFormat::Json => SourceFormat::Json,
        }
    }
}
