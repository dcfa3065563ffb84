//! Rendering of NXDL definitions as reStructuredText.
//!
//! # Pipeline Position
//!
//! ```text
//! NXDL source
//!     ↓ nxdoc_parser::parse
//! Element tree
//!     ↓ nxdoc_core::schema views
//! Definition
//!     ↓ render (this module)
//! reStructuredText page
//! ```
//!
//! # Components
//!
//! - [`format`] - Type, units and dimension fragments.
//! - [`doc`] - Documentation extraction and paragraph output.
//! - [`enumeration`] - Permitted value lists.
//! - [`tree`] - The recursive Structure section.
//! - [`assemble`] - The whole page, section by section.
//!
//! Every component appends to an explicit [`RstWriter`] in emission order.
//!
//! # Error Handling
//!
//! Rendering returns [`RenderError`], a [`Diagnostic`] tagged with a
//! [`RenderErrorKind`]. The first error aborts the page; nothing rendered
//! before it is meant to be kept.

pub mod assemble;
pub mod doc;
pub mod enumeration;
pub mod format;
pub mod tree;

mod writer;

pub use writer::{Indent, RstWriter};

use std::fmt;

use thiserror::Error;

use nxdoc_core::schema::SchemaElement;
use nxdoc_parser::error::{Diagnostic, ErrorCode};

/// A type alias for `Result<T, RenderError>`.
pub type Result<T> = std::result::Result<T, RenderError>;

/// The class of problem that stopped rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderErrorKind {
    /// The definition is not a valid instance of the expected shape.
    MalformedInput,
    /// Documentation that must be present is absent.
    MissingDocumentation,
    /// A group does not declare its schema class.
    StructuralSchema,
}

impl fmt::Display for RenderErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderErrorKind::MalformedInput => write!(f, "malformed input"),
            RenderErrorKind::MissingDocumentation => write!(f, "missing documentation"),
            RenderErrorKind::StructuralSchema => write!(f, "structural schema error"),
        }
    }
}

/// An error found while rendering a well formed XML document.
#[derive(Debug, Clone, Error)]
#[error("{diagnostic}")]
pub struct RenderError {
    kind: RenderErrorKind,
    diagnostic: Diagnostic,
}

impl RenderError {
    /// Create a new error of the given kind.
    pub fn new(kind: RenderErrorKind, diagnostic: Diagnostic) -> Self {
        Self { kind, diagnostic }
    }

    /// Create a [`RenderErrorKind::MalformedInput`] error.
    pub fn malformed_input(diagnostic: Diagnostic) -> Self {
        Self::new(RenderErrorKind::MalformedInput, diagnostic)
    }

    /// Create a [`RenderErrorKind::MissingDocumentation`] error.
    pub fn missing_documentation(diagnostic: Diagnostic) -> Self {
        Self::new(RenderErrorKind::MissingDocumentation, diagnostic)
    }

    /// Create a [`RenderErrorKind::StructuralSchema`] error.
    pub fn structural_schema(diagnostic: Diagnostic) -> Self {
        Self::new(RenderErrorKind::StructuralSchema, diagnostic)
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> RenderErrorKind {
        self.kind
    }

    /// Returns the diagnostic describing the error.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

/// Insist on an attribute the output cannot do without.
///
/// `value` is the result of the typed accessor for attribute `name` of `node`.
///
/// # Errors
///
/// Returns [`RenderErrorKind::MalformedInput`] (`E103`) if it is absent.
pub(crate) fn required<'a>(
    value: Option<&'a str>,
    node: impl SchemaElement<'a>,
    name: &str,
) -> Result<&'a str> {
    value.ok_or_else(|| {
        let element = node.element();
        RenderError::malformed_input(
            Diagnostic::error(format!(
                "{} has no `{name}` attribute",
                element.describe()
            ))
            .with_code(ErrorCode::E103)
            .with_label(element.span(), format!("`{name}` is required here")),
        )
    })
}
