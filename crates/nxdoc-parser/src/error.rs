//! Error and diagnostic system for NXDL processing.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. The reader wraps its diagnostics in
//! [`ParseError`]; the renderer reuses [`Diagnostic`] for problems it finds in
//! a well formed but invalid definition.
//!
//! # Example
//!
//! ```
//! # use nxdoc_parser::error::{Diagnostic, ErrorCode};
//! # use nxdoc_parser::Span;
//!
//! let second = Span::new(100..120);
//! let first = Span::new(50..70);
//!
//! let diag = Diagnostic::error("too many `doc` elements in <field name=\"x\">")
//!     .with_code(ErrorCode::E100)
//!     .with_label(second, "second documentation block")
//!     .with_secondary_label(first, "first documentation block")
//!     .with_help("merge the paragraphs into a single `doc` element");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
