//! Error types for NXDoc operations.
//!
//! This module provides the main error type [`NxdocError`] which wraps
//! the error conditions that can occur while turning an NXDL file into a
//! reference page.

use std::io;

use thiserror::Error;

use nxdoc_core::category::UnknownCategory;
use nxdoc_parser::error::ParseError;

use crate::render::RenderError;

/// The main error type for NXDoc operations.
///
/// # Diagnostic Variants
///
/// The `Parse` and `Render` variants carry diagnostics with source spans
/// together with the source text they point into, so callers can show the
/// offending markup.
#[derive(Debug, Error)]
pub enum NxdocError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("{err}")]
    Render { err: RenderError, src: String },

    #[error("Category error: {0}")]
    Category(#[from] UnknownCategory),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NxdocError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Create a new `Render` error with the associated source code.
    pub fn new_render_error(err: RenderError, src: impl Into<String>) -> Self {
        Self::Render {
            err,
            src: src.into(),
        }
    }
}
