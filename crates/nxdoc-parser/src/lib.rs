//! # NXDoc Parser
//!
//! Reader for NXDL class definitions. This crate turns XML source text into
//! the owned [`Element`] tree defined in `nxdoc-core`, reporting malformed
//! XML as [`error::Diagnostic`]s with source spans.
//!
//! ## Usage
//!
//! ```
//! # use nxdoc_parser::{parse, ReaderConfig, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <definition xmlns="http://definition.nexusformat.org/nxdl/3.1" name="NXnote">
//!             <doc>Any additional freeform information.</doc>
//!         </definition>
//!     "#;
//!
//!     let root = parse(source, &ReaderConfig::default())?;
//!     assert_eq!(root.name(), "definition");
//!     Ok(())
//! }
//! ```

pub mod error;

mod config;
mod reader;

pub use config::ReaderConfig;
pub use nxdoc_core::Span;

use log::{debug, trace};

use nxdoc_core::element::Element;

use error::ParseError;

/// Read NXDL source text into an element tree.
///
/// Elements named in [`ReaderConfig`] as opaque (by default `doc`) are not
/// descended into; their inner markup is kept verbatim instead.
///
/// # Arguments
///
/// * `source` - The XML source text
/// * `config` - Reader configuration
///
/// # Errors
///
/// Returns a [`ParseError`] when the source is not well formed XML, has no
/// root element, or has more than one.
pub fn parse(source: &str, config: &ReaderConfig) -> Result<Element, ParseError> {
    debug!(bytes = source.len(); "Reading NXDL source");

    let root = reader::read_tree(source, config)?;

    trace!(
        root = root.describe(),
        elements = root.descendants().count() + 1;
        "Element tree built"
    );
    Ok(root)
}
