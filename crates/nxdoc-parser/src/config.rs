//! Reader configuration.

/// Configuration for [`parse`](crate::parse).
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Local names of elements whose content is kept as raw markup.
    opaque_elements: Vec<String>,
}

impl ReaderConfig {
    /// Create a configuration treating the given elements as opaque.
    pub fn new<I, S>(opaque_elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            opaque_elements: opaque_elements.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if elements with this local name are kept verbatim.
    pub fn is_opaque(&self, name: &str) -> bool {
        self.opaque_elements.iter().any(|opaque| opaque == name)
    }
}

impl Default for ReaderConfig {
    /// Documentation blocks are free-form text that may itself look like
    /// markup, so `doc` is opaque by default.
    fn default() -> Self {
        Self::new(["doc"])
    }
}
