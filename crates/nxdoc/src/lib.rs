//! NXDoc - reference pages for NeXus class definitions.
//!
//! Reads an NXDL class definition and renders it as a reStructuredText page
//! for the NeXus manual: index entries, title, description, the nested
//! structure of fields, groups, links and attributes, the symbol table, the
//! classes it cites and a link back to its source.

pub mod config;
pub mod render;

mod error;

pub use nxdoc_core::category::Category;
pub use render::assemble::Origin;

pub use error::NxdocError;

use log::{debug, info, trace};

use nxdoc_core::{element::Element, schema::Definition};
use nxdoc_parser::{
    ReaderConfig,
    error::{Diagnostic, ErrorCode},
};

use config::AppConfig;
use render::{RenderError, RstWriter, assemble};

/// A parsed NXDL document together with its source text.
///
/// The source is kept so diagnostics can point into it.
#[derive(Debug, Clone)]
pub struct Document {
    source: String,
    root: Element,
}

impl Document {
    /// The XML source the document was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The root element.
    pub fn root(&self) -> &Element {
        &self.root
    }
}

/// A rendered reference page.
#[derive(Debug, Clone)]
pub struct Page {
    text: String,
    warnings: Vec<Diagnostic>,
}

impl Page {
    /// The reStructuredText of the page.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Problems noticed while rendering that did not stop the page.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Consume the page, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Builder for parsing and rendering NXDL definitions.
///
/// # Examples
///
/// ```rust,no_run
/// use nxdoc::{Category, DocumentBuilder, Origin, config::AppConfig};
///
/// let source = std::fs::read_to_string("base_classes/NXsample.nxdl.xml")
///     .expect("Failed to read");
///
/// let builder = DocumentBuilder::new(AppConfig::default());
/// let document = builder.parse(&source).expect("Failed to parse");
///
/// let origin = Origin::new("base_classes/NXsample.nxdl.xml", Category::BaseClasses);
/// let page = builder
///     .render_rst(&document, &origin)
///     .expect("Failed to render");
/// print!("{}", page.text());
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    config: AppConfig,
}

impl DocumentBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse NXDL source into a document.
    ///
    /// # Errors
    ///
    /// Returns [`NxdocError::Parse`] if the source is not well formed XML.
    pub fn parse(&self, source: &str) -> Result<Document, NxdocError> {
        info!(bytes = source.len(); "Parsing NXDL source");

        let root = nxdoc_parser::parse(source, &ReaderConfig::default())
            .map_err(|err| NxdocError::new_parse_error(err, source))?;

        debug!(root = root.describe(); "Source parsed successfully");
        Ok(Document {
            source: source.to_string(),
            root,
        })
    }

    /// Render a parsed document as a reStructuredText page.
    ///
    /// The page is built in memory and only returned when complete, so a
    /// failure never yields partial output. Warnings travel with the page.
    ///
    /// # Errors
    ///
    /// Returns [`NxdocError::Render`] if the root is not an NXDL `definition`
    /// or the definition cannot be rendered.
    pub fn render_rst(&self, document: &Document, origin: &Origin) -> Result<Page, NxdocError> {
        let render_error = |err: RenderError| NxdocError::new_render_error(err, document.source());

        let namespace = self.config.schema().namespace();
        let definition = Definition::new(document.root(), namespace)
            .ok_or_else(|| render_error(not_a_definition(document.root(), namespace)))?;

        info!(
            source = origin.source(),
            category = origin.category().dir_name();
            "Rendering definition"
        );
        let mut out = RstWriter::new();
        let warnings =
            assemble::render_definition(&mut out, definition, origin, self.config.render())
                .map_err(render_error)?;

        let text = out.into_string();
        trace!(bytes = text.len(), warnings = warnings.len(); "Page rendered");
        info!("Page rendered successfully");
        Ok(Page { text, warnings })
    }
}

fn not_a_definition(root: &Element, namespace: &str) -> RenderError {
    let found = match root.namespace() {
        Some(ns) => format!("{} in namespace `{ns}`", root.describe()),
        None => format!("{} without a namespace", root.describe()),
    };
    RenderError::malformed_input(
        Diagnostic::error(format!("expected an NXDL `definition` root, found {found}"))
            .with_code(ErrorCode::E107)
            .with_label(root.span(), "root element")
            .with_help(format!(
                "the root must be `<definition xmlns=\"{namespace}\">`"
            )),
    )
}
