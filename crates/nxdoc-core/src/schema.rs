//! Typed, borrowed views over an NXDL definition.
//!
//! The element tree is owned by whoever parsed it. The views in this module
//! never copy it: each one is a `Copy` pair of an element reference and the
//! NXDL namespace, so they can be passed by value down a recursive walk.
//! Children from other namespaces are invisible through these views.
//!
//! # Overview
//!
//! - [`Definition`] - The `definition` root element.
//! - [`SchemaElement`], [`TypedElement`] - Accessors shared by the views.
//! - [`Node`] - A tagged child of a definition or group: [`Field`], [`Group`],
//!   [`Link`] or [`Attribute`].
//! - [`Dimensions`], [`Dim`] - Dimensionality of a field.
//! - [`Enumeration`], [`EnumerationItem`] - Permitted values of a field.
//! - [`Symbols`], [`Symbol`] - The optional symbol table.

use crate::{element::Element, span::Span};

/// Behavior shared by every view over an NXDL element.
pub trait SchemaElement<'a>: Copy {
    /// The underlying element.
    fn element(&self) -> &'a Element;

    /// The NXDL namespace the view filters children by.
    fn namespace(&self) -> &'a str;

    /// Returns the value of an attribute of the underlying element.
    fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element().attribute(name)
    }

    /// Returns the source location of the underlying element.
    fn span(&self) -> Span {
        self.element().span()
    }

    /// Direct children with the given local name in the NXDL namespace.
    fn children_named(self, name: &'static str) -> impl Iterator<Item = &'a Element> + 'a {
        let namespace = self.namespace();
        self.element()
            .children()
            .iter()
            .filter(move |child| child.is(namespace, name))
    }

    /// All `doc` children. A well formed node has at most one.
    fn doc_elements(self) -> impl Iterator<Item = &'a Element> + 'a {
        self.children_named("doc")
    }

    /// Direct structural children in document order.
    fn nodes(self) -> impl Iterator<Item = Node<'a>> + 'a {
        let namespace = self.namespace();
        self.element()
            .children()
            .iter()
            .filter_map(move |child| Node::classify(child, namespace))
    }
}

/// A view whose element declares a data type and units: a field or an
/// attribute.
pub trait TypedElement<'a>: SchemaElement<'a> {
    /// The declared type, if any.
    fn type_name(&self) -> Option<&'a str> {
        self.attribute("type")
    }

    /// The declared units, if any.
    fn units(&self) -> Option<&'a str> {
        self.attribute("units")
    }
}

macro_rules! schema_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            element: &'a Element,
            namespace: &'a str,
        }

        impl<'a> $name<'a> {
            fn wrap(element: &'a Element, namespace: &'a str) -> Self {
                Self { element, namespace }
            }
        }

        impl<'a> SchemaElement<'a> for $name<'a> {
            fn element(&self) -> &'a Element {
                self.element
            }

            fn namespace(&self) -> &'a str {
                self.namespace
            }
        }
    };
}

schema_view! {
    /// The `definition` root element of an NXDL file.
    Definition
}

schema_view! {
    /// A `field` element: a leaf data item.
    Field
}

schema_view! {
    /// A `group` element: a container typed by a schema class.
    Group
}

schema_view! {
    /// A `link` element: an alias for another location in the tree.
    Link
}

schema_view! {
    /// An `attribute` element attached to a group, field or link.
    Attribute
}

schema_view! {
    /// A `dimensions` element of a field.
    Dimensions
}

schema_view! {
    /// A single `dim` entry of a [`Dimensions`] element.
    Dim
}

schema_view! {
    /// An `enumeration` element of a field.
    Enumeration
}

schema_view! {
    /// An `item` of an [`Enumeration`].
    EnumerationItem
}

schema_view! {
    /// The `symbols` table of a definition.
    Symbols
}

schema_view! {
    /// A `symbol` entry of the [`Symbols`] table.
    Symbol
}

/// A structural child of a definition or group.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Field(Field<'a>),
    Group(Group<'a>),
    Link(Link<'a>),
    Attribute(Attribute<'a>),
}

impl<'a> Node<'a> {
    /// Classify an element by its local name.
    ///
    /// Returns `None` for elements outside the NXDL namespace and for
    /// non-structural elements such as `doc` or `symbols`.
    pub fn classify(element: &'a Element, namespace: &'a str) -> Option<Self> {
        if element.namespace() != Some(namespace) {
            return None;
        }
        match element.name() {
            "field" => Some(Node::Field(Field::wrap(element, namespace))),
            "group" => Some(Node::Group(Group::wrap(element, namespace))),
            "link" => Some(Node::Link(Link::wrap(element, namespace))),
            "attribute" => Some(Node::Attribute(Attribute::wrap(element, namespace))),
            _ => None,
        }
    }

    /// Returns the field, if this node is one.
    pub fn as_field(self) -> Option<Field<'a>> {
        match self {
            Node::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Returns the group, if this node is one.
    pub fn as_group(self) -> Option<Group<'a>> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Returns the link, if this node is one.
    pub fn as_link(self) -> Option<Link<'a>> {
        match self {
            Node::Link(link) => Some(link),
            _ => None,
        }
    }

    /// Returns the attribute, if this node is one.
    pub fn as_attribute(self) -> Option<Attribute<'a>> {
        match self {
            Node::Attribute(attribute) => Some(attribute),
            _ => None,
        }
    }

    /// The underlying element.
    pub fn element(&self) -> &'a Element {
        match self {
            Node::Field(node) => node.element(),
            Node::Group(node) => node.element(),
            Node::Link(node) => node.element(),
            Node::Attribute(node) => node.element(),
        }
    }
}

impl<'a> Definition<'a> {
    /// View `root` as a definition.
    ///
    /// Returns `None` unless `root` is a `definition` element in `namespace`.
    pub fn new(root: &'a Element, namespace: &'a str) -> Option<Self> {
        root.is(namespace, "definition")
            .then(|| Self::wrap(root, namespace))
    }

    /// The class name, e.g. `NXsample`.
    pub fn name(&self) -> Option<&'a str> {
        self.attribute("name")
    }

    /// The `category` attribute (`base`, `application` or `contributed`).
    pub fn category(&self) -> Option<&'a str> {
        self.attribute("category")
    }

    /// The definition this one extends, if any.
    pub fn extends(&self) -> Option<&'a str> {
        self.attribute("extends")
    }

    /// The version string.
    pub fn version(&self) -> Option<&'a str> {
        self.attribute("version")
    }

    /// All `symbols` tables. A well formed definition has at most one.
    pub fn symbol_tables(self) -> impl Iterator<Item = Symbols<'a>> + 'a {
        let namespace = self.namespace;
        self.children_named("symbols")
            .map(move |element| Symbols::wrap(element, namespace))
    }

    /// Every `group` element anywhere below the root, in document order.
    pub fn all_groups(self) -> impl Iterator<Item = Group<'a>> + 'a {
        let namespace = self.namespace;
        self.element
            .descendants()
            .filter(move |element| element.is(namespace, "group"))
            .map(move |element| Group::wrap(element, namespace))
    }
}

impl<'a> Field<'a> {
    /// The field name.
    pub fn name(&self) -> Option<&'a str> {
        self.attribute("name")
    }

    /// All `dimensions` elements. A well formed field has at most one.
    pub fn dimensions(self) -> impl Iterator<Item = Dimensions<'a>> + 'a {
        let namespace = self.namespace;
        self.children_named("dimensions")
            .map(move |element| Dimensions::wrap(element, namespace))
    }

    /// All `enumeration` elements. A well formed field has at most one.
    pub fn enumerations(self) -> impl Iterator<Item = Enumeration<'a>> + 'a {
        let namespace = self.namespace;
        self.children_named("enumeration")
            .map(move |element| Enumeration::wrap(element, namespace))
    }

    /// Attributes attached to the field.
    pub fn attributes(self) -> impl Iterator<Item = Attribute<'a>> + 'a {
        self.nodes().filter_map(Node::as_attribute)
    }
}

impl<'a> Group<'a> {
    /// The explicit group name, if any.
    pub fn name(&self) -> Option<&'a str> {
        self.attribute("name")
    }

    /// The schema class of the group, e.g. `NXsample`.
    pub fn type_name(&self) -> Option<&'a str> {
        self.attribute("type")
    }

    /// Attributes attached to the group.
    pub fn attributes(self) -> impl Iterator<Item = Attribute<'a>> + 'a {
        self.nodes().filter_map(Node::as_attribute)
    }
}

impl<'a> Link<'a> {
    /// The link name.
    pub fn name(&self) -> Option<&'a str> {
        self.attribute("name")
    }

    /// The path the link points at.
    pub fn target(&self) -> Option<&'a str> {
        self.attribute("target")
    }
}

impl<'a> Attribute<'a> {
    /// The attribute name, without the leading `@`.
    pub fn name(&self) -> Option<&'a str> {
        self.attribute("name")
    }
}

impl<'a> TypedElement<'a> for Field<'a> {}

impl<'a> TypedElement<'a> for Attribute<'a> {}

impl<'a> Dimensions<'a> {
    /// The `dim` entries in declaration order.
    pub fn dims(self) -> impl Iterator<Item = Dim<'a>> + 'a {
        let namespace = self.namespace;
        self.children_named("dim")
            .map(move |element| Dim::wrap(element, namespace))
    }
}

impl<'a> Dim<'a> {
    /// A literal size, if given and non-empty.
    pub fn value(&self) -> Option<&'a str> {
        self.attribute("value").filter(|value| !value.is_empty())
    }

    /// The symbol this dimension refers to, if given.
    pub fn reference(&self) -> Option<&'a str> {
        self.attribute("ref")
    }
}

impl<'a> Enumeration<'a> {
    /// The items in declaration order, duplicates included.
    pub fn items(self) -> impl Iterator<Item = EnumerationItem<'a>> + 'a {
        let namespace = self.namespace;
        self.children_named("item")
            .map(move |element| EnumerationItem::wrap(element, namespace))
    }
}

impl<'a> EnumerationItem<'a> {
    /// The permitted value.
    pub fn value(&self) -> Option<&'a str> {
        self.attribute("value")
    }
}

impl<'a> Symbols<'a> {
    /// The symbols in declaration order.
    pub fn symbols(self) -> impl Iterator<Item = Symbol<'a>> + 'a {
        let namespace = self.namespace;
        self.children_named("symbol")
            .map(move |element| Symbol::wrap(element, namespace))
    }
}

impl<'a> Symbol<'a> {
    /// The symbol name.
    pub fn name(&self) -> Option<&'a str> {
        self.attribute("name")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NS: &str = "urn:nxdl";

    fn nx(name: &str) -> Element {
        Element::new(name, Some(NS.to_string()), Span::default())
    }

    fn sample() -> Element {
        nx("definition")
            .with_attribute("name", "NXtest")
            .with_attribute("version", "1.0")
            .with_child(nx("doc").with_raw_content("Test class."))
            .with_child(
                nx("group")
                    .with_attribute("type", "NXsample")
                    .with_child(nx("group").with_attribute("type", "NXdetector")),
            )
            .with_child(
                nx("field")
                    .with_attribute("name", "x")
                    .with_child(nx("attribute").with_attribute("name", "units"))
                    .with_child(
                        nx("dimensions")
                            .with_child(nx("dim").with_attribute("value", "3"))
                            .with_child(nx("dim").with_attribute("ref", "n")),
                    ),
            )
            .with_child(Element::new("group", None, Span::default()))
            .with_child(nx("link").with_attribute("name", "alias"))
    }

    #[test]
    fn test_definition_requires_root_in_namespace() {
        let root = sample();
        assert!(Definition::new(&root, NS).is_some());
        assert!(Definition::new(&root, "urn:other").is_none());
        assert!(Definition::new(&nx("field"), NS).is_none());
    }

    #[test]
    fn test_nodes_skip_foreign_and_non_structural_elements() {
        let root = sample();
        let definition = Definition::new(&root, NS).unwrap();

        let kinds: Vec<_> = definition
            .nodes()
            .map(|node| node.element().name().to_string())
            .collect();
        assert_eq!(kinds, ["group", "field", "link"]);
    }

    #[test]
    fn test_all_groups_is_recursive_and_namespaced() {
        let root = sample();
        let definition = Definition::new(&root, NS).unwrap();

        let types: Vec<_> = definition
            .all_groups()
            .filter_map(|group| group.type_name())
            .collect();
        assert_eq!(types, ["NXsample", "NXdetector"]);
    }

    #[test]
    fn test_field_accessors() {
        let root = sample();
        let definition = Definition::new(&root, NS).unwrap();
        let field = definition.nodes().find_map(Node::as_field).unwrap();

        assert_eq!(field.name(), Some("x"));
        assert_eq!(field.type_name(), None);
        assert_eq!(field.attributes().count(), 1);

        let dims: Vec<_> = field
            .dimensions()
            .flat_map(|dimensions| dimensions.dims().collect::<Vec<_>>())
            .map(|dim| (dim.value(), dim.reference()))
            .collect();
        assert_eq!(dims, [(Some("3"), None), (None, Some("n"))]);
    }

    #[test]
    fn test_doc_elements() {
        let root = sample();
        let definition = Definition::new(&root, NS).unwrap();

        let docs: Vec<_> = definition.doc_elements().collect();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].raw_content(), Some("Test class."));
    }
}
