//! CLI logic for the nxdl2rst tool.
//!
//! This module contains the core CLI logic: locate the definition, work out
//! its category, render the page and write it out.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{debug, info, warn};

use nxdoc::{Category, DocumentBuilder, NxdocError, Origin};

use error_adapter::{DiagnosticAdapter, render_report};

/// Run the nxdl2rst CLI application
///
/// Reads the input definition, renders it and writes the page to the output
/// file, or to stdout when no output is given. Nothing is written unless the
/// whole page rendered.
///
/// # Errors
///
/// Returns `NxdocError` for:
/// - A missing or unreadable input file, or an unwritable output
/// - Configuration loading errors
/// - An input outside a known category directory
/// - XML errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), NxdocError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing definition"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let input = Path::new(&args.input).canonicalize()?;
    let category = match &args.category {
        Some(dir) => dir.parse::<Category>()?,
        None => Category::from_path(&input)?,
    };
    debug!(
        path = input.display().to_string(),
        category = category.dir_name();
        "Input resolved"
    );

    let source = fs::read_to_string(&input)?;

    let builder = DocumentBuilder::new(app_config);
    let document = builder.parse(&source)?;
    let origin = Origin::new(args.input.as_str(), category);
    let page = builder.render_rst(&document, &origin)?;
    for warning in page.warnings() {
        warn!("{}", render_report(&DiagnosticAdapter::new(warning, &source)));
    }

    match &args.output {
        Some(output) => {
            fs::write(output, page.text())?;
            info!(output_file = output; "Page written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(page.text().as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
