//! Error codes for the NXDoc diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - XML reading errors
//! - `E1xx` - Malformed definition errors
//! - `E2xx` - Missing documentation errors
//! - `E3xx` - Structural schema errors
//! - `Wxxx` - Problems that do not stop rendering

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // XML Errors (E0xx)
    // =========================================================================
    /// Invalid XML syntax.
    ///
    /// The source is not well formed XML.
    E001,

    /// Mismatched closing tag.
    ///
    /// A closing tag does not match the element that is currently open.
    E002,

    /// Unclosed element.
    ///
    /// The input ended while one or more elements were still open.
    E003,

    /// Missing root element.
    ///
    /// The source contains no element at all.
    E004,

    /// Multiple root elements.
    ///
    /// A second top-level element follows the root element.
    E005,

    /// Invalid attribute.
    ///
    /// An attribute is malformed, duplicated, or its value cannot be decoded.
    E006,

    // =========================================================================
    // Malformed Definition Errors (E1xx)
    // =========================================================================
    /// Too many documentation blocks.
    ///
    /// A node carries more than one `doc` element.
    E100,

    /// Too many symbol tables.
    ///
    /// The definition carries more than one `symbols` element.
    E101,

    /// Multi-paragraph caption.
    ///
    /// Documentation that must fit on one line (enumeration items and
    /// symbols) contains more than one paragraph.
    E102,

    /// Missing required attribute.
    ///
    /// An element lacks an attribute without which it cannot be rendered,
    /// such as the `name` of a field or the `version` of the definition.
    E103,

    /// Too many dimension declarations.
    ///
    /// A field carries more than one `dimensions` element.
    E104,

    /// Too many enumerations.
    ///
    /// A field carries more than one `enumeration` element.
    E105,

    /// Incomplete dimension.
    ///
    /// A `dim` has neither a `value` nor a `ref`.
    E106,

    /// Not an NXDL definition.
    ///
    /// The root element is not a `definition` in the NXDL namespace.
    E107,

    // =========================================================================
    // Documentation Errors (E2xx)
    // =========================================================================
    /// Missing required documentation.
    ///
    /// The definition itself has no `doc` element.
    E200,

    // =========================================================================
    // Structural Schema Errors (E3xx)
    // =========================================================================
    /// Untyped group.
    ///
    /// A `group` has no `type` attribute.
    E300,

    // =========================================================================
    // Warnings (Wxxx)
    // =========================================================================
    /// Category mismatch.
    ///
    /// The `category` attribute of a definition disagrees with the directory
    /// it is filed under. The directory wins.
    W100,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // XML errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            ErrorCode::E006 => "E006",
            // Malformed definition errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E106 => "E106",
            ErrorCode::E107 => "E107",
            // Documentation errors
            ErrorCode::E200 => "E200",
            // Structural schema errors
            ErrorCode::E300 => "E300",
            // Warnings
            ErrorCode::W100 => "W100",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
