//! CLI logic for the Arbor diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, InputFormat};

use std::fs;

use log::{info, warn};

use arbor::{ArborError, DiagramBuilder};

/// Run the Arbor CLI application.
///
/// Reads the input document, lays it out and writes the resulting SVG to the
/// output file.
///
/// # Errors
///
/// Returns `ArborError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document parse errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ArborError> {
    let format = args.source_format();
    info!(
        input_path = args.input,
        output_path = args.output,
        format:%;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(&source, format)?;
    for skipped in diagram.skipped() {
        warn!(
            parent:% = skipped.parent,
            key = skipped.key.as_str(),
            reason:% = skipped.reason;
            "Wiring produced no node"
        );
    }
    let svg = builder.render_svg(&diagram)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
