//! Configuration types for NXDL rendering.
//!
//! This module provides configuration structures that control how a
//! definition is read and how the reference page is written. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining render and schema settings.
//! - [`RenderConfig`] - Indentation, provenance and source link settings.
//! - [`SchemaConfig`] - The NXDL namespace elements must belong to.
//!
//! # Example
//!
//! ```
//! # use nxdoc::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.render().indent_width(), 2);
//! ```

use serde::Deserialize;

/// Namespace used by NXDL files in the definitions source tree.
pub const DEFAULT_NAMESPACE: &str = "http://definition.nexusformat.org/nxdl/@NXDL_RELEASE@";

/// Base URL of the definitions repository, used in the Source section.
pub const DEFAULT_HTML_ROOT: &str = "https://github.com/nexusformat/definitions/blob/master";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Schema configuration section.
    #[serde(default)]
    schema: SchemaConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, schema: SchemaConfig) -> Self {
        Self { render, schema }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the schema configuration.
    pub fn schema(&self) -> &SchemaConfig {
        &self.schema
    }
}

/// Output settings for the reStructuredText writer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level.
    indent_width: usize,

    /// Script name reported in the provenance comment.
    generator: String,

    /// Base URL the Source section links into.
    html_root: String,
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`].
    ///
    /// # Arguments
    ///
    /// * `indent_width` - Spaces per nesting level.
    /// * `generator` - Name written into the provenance comment.
    /// * `html_root` - Base URL of the definitions repository.
    pub fn new(indent_width: usize, generator: impl Into<String>, html_root: impl Into<String>) -> Self {
        Self {
            indent_width,
            generator: generator.into(),
            html_root: html_root.into(),
        }
    }

    /// Returns the number of spaces per nesting level.
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }

    /// Returns the generator name for the provenance comment.
    pub fn generator(&self) -> &str {
        &self.generator
    }

    /// Returns the repository base URL.
    pub fn html_root(&self) -> &str {
        &self.html_root
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(2, "nxdl2rst", DEFAULT_HTML_ROOT)
    }
}

/// Settings describing the input dialect.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Namespace URI NXDL elements are bound to.
    namespace: String,
}

impl SchemaConfig {
    /// Creates a new [`SchemaConfig`] for the given namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Returns the NXDL namespace URI.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
