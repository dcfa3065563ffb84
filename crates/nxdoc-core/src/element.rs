//! The owned XML element tree produced by the NXDL reader.
//!
//! An [`Element`] keeps only what the renderer needs: the local name, the
//! resolved namespace, attributes in document order, child elements and, for
//! opaque elements such as `<doc>`, the verbatim inner markup. Text nodes
//! outside opaque elements carry no meaning in NXDL and are not retained.

use indexmap::IndexMap;

use crate::span::Span;

/// A single XML element with its attributes and children.
///
/// Elements are built once by the reader and then only read. Renderers
/// borrow them through the typed views in [`crate::schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    namespace: Option<String>,
    attributes: IndexMap<String, String>,
    children: Vec<Element>,
    raw_content: Option<String>,
    span: Span,
}

impl Element {
    /// Create an element with no attributes or children.
    ///
    /// # Arguments
    ///
    /// * `name` - Local name of the element (without any prefix)
    /// * `namespace` - Resolved namespace URI, if the element is bound to one
    /// * `span` - Location of the element's start tag in the source
    pub fn new(name: impl Into<String>, namespace: Option<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            namespace,
            attributes: IndexMap::new(),
            children: Vec::new(),
            raw_content: None,
            span,
        }
    }

    /// Add an attribute, replacing an earlier one with the same name.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Add a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    /// Set the verbatim inner markup of an opaque element.
    pub fn with_raw_content(mut self, content: impl Into<String>) -> Self {
        self.raw_content = Some(content.into());
        self
    }

    /// Set an attribute in place.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append a child element in place.
    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Extend the element's span to end at `end` (the end of its closing tag).
    pub fn close(&mut self, end: usize) {
        self.span = self.span.with_end(end);
    }

    /// Returns the local name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the resolved namespace URI, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns `true` if the element has the given local name in the given namespace.
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.name == name && self.namespace.as_deref() == Some(namespace)
    }

    /// Returns the value of an attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns all attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the direct child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the verbatim inner markup of an opaque element.
    ///
    /// `None` for ordinary elements, whose content is available through
    /// [`children`](Self::children) instead.
    pub fn raw_content(&self) -> Option<&str> {
        self.raw_content.as_deref()
    }

    /// Returns the location of this element in the source.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns a short human readable description such as ``<field name="x">``.
    pub fn describe(&self) -> String {
        match self.attribute("name") {
            Some(name) => format!("<{} name=\"{name}\">", self.name),
            None => format!("<{}>", self.name),
        }
    }

    /// Iterate over all descendants in depth-first pre-order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Depth-first pre-order iterator returned by [`Element::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str) -> Element {
        Element::new(name, Some("urn:test".to_string()), Span::default())
    }

    #[test]
    fn test_attributes_keep_document_order() {
        let el = element("field")
            .with_attribute("name", "x")
            .with_attribute("type", "NX_FLOAT")
            .with_attribute("units", "NX_LENGTH");

        let names: Vec<_> = el.attributes().map(|(name, _)| name).collect();
        assert_eq!(names, ["name", "type", "units"]);
        assert_eq!(el.attribute("type"), Some("NX_FLOAT"));
        assert_eq!(el.attribute("missing"), None);
    }

    #[test]
    fn test_is_checks_namespace() {
        let el = element("group");
        let bare = Element::new("group", None, Span::default());

        assert!(el.is("urn:test", "group"));
        assert!(!el.is("urn:other", "group"));
        assert!(!bare.is("urn:test", "group"));
    }

    #[test]
    fn test_descendants_pre_order() {
        let tree = element("definition")
            .with_child(
                element("group")
                    .with_attribute("name", "a")
                    .with_child(element("field").with_attribute("name", "b")),
            )
            .with_child(element("link").with_attribute("name", "c"));

        let visited: Vec<_> = tree
            .descendants()
            .map(|el| el.attribute("name").unwrap_or_default().to_string())
            .collect();
        assert_eq!(visited, ["a", "b", "c"]);
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            element("field").with_attribute("name", "x").describe(),
            "<field name=\"x\">"
        );
        assert_eq!(element("doc").describe(), "<doc>");
    }

    #[test]
    fn test_close_extends_span() {
        let mut el = Element::new("doc", None, Span::new(4..9));
        el.close(30);

        assert_eq!(el.span(), Span::new(4..30));
    }
}
