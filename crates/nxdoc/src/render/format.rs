//! Text fragments for single schema attributes.
//!
//! These functions are pure: they read one node and return the fragment that
//! goes into a header line. Names following the `NX_` vocabulary convention
//! become cross-references into the data type glossary.

use nxdoc_core::{
    naming::{self, DEFAULT_TYPE},
    schema::{Field, SchemaElement, TypedElement},
};
use nxdoc_parser::error::{Diagnostic, ErrorCode};

use crate::render::{RenderError, Result};

/// A cross-reference to a glossary entry: ``:ref:`NX_FLOAT <NX_FLOAT>` ``.
pub fn vocabulary_ref(name: &str) -> String {
    format!(":ref:`{name} <{name}>`")
}

/// A cross-reference to a class page: ``:ref:`NXsample` ``.
pub fn class_ref(name: &str) -> String {
    format!(":ref:`{name}`")
}

/// The declared type of a field or attribute.
///
/// Without a `type` the node holds untyped character data. `NX_` types are
/// wrapped in a cross-reference; anything else is returned verbatim.
pub fn format_type<'a>(node: impl TypedElement<'a>) -> String {
    match node.type_name() {
        None => format!("untyped ({})", vocabulary_ref(DEFAULT_TYPE)),
        Some(typ) if naming::is_vocabulary_name(typ) => vocabulary_ref(typ),
        Some(typ) => typ.to_string(),
    }
}

/// The ` {units=...}` suffix of a header line, or an empty string.
///
/// `NX_` unit categories become cross-references. The escaped space keeps
/// reStructuredText from gluing the role to the `=`.
pub fn format_units<'a>(node: impl TypedElement<'a>) -> String {
    match node.units() {
        None | Some("") => String::new(),
        Some(units) if naming::is_vocabulary_name(units) => {
            format!(" {{units=\\ {}}}", vocabulary_ref(units))
        }
        Some(units) => format!(" {{units={units}}}"),
    }
}

/// The bracketed dimension list of a field, e.g. `[3, ref(nP)]`.
///
/// Empty when the field declares no `dimensions`. The `rank` attribute is
/// informational and not shown.
///
/// # Errors
///
/// Returns [`MalformedInput`](crate::render::RenderErrorKind::MalformedInput)
/// if the field has more than one `dimensions` element (`E104`) or a `dim`
/// has neither `value` nor `ref` (`E106`).
pub fn format_dimensions(field: Field<'_>) -> Result<String> {
    let mut declarations = field.dimensions();
    let Some(dimensions) = declarations.next() else {
        return Ok(String::new());
    };
    if let Some(extra) = declarations.next() {
        return Err(RenderError::malformed_input(
            Diagnostic::error(format!(
                "too many `dimensions` elements in {}",
                field.element().describe()
            ))
            .with_code(ErrorCode::E104)
            .with_label(extra.span(), "second declaration")
            .with_secondary_label(dimensions.span(), "first declaration"),
        ));
    }

    let dims = dimensions
        .dims()
        .map(|dim| match (dim.value(), dim.reference()) {
            (Some(value), _) => Ok(value.to_string()),
            (None, Some(symbol)) => Ok(format!("ref({symbol})")),
            (None, None) => Err(RenderError::malformed_input(
                Diagnostic::error(format!(
                    "dimension of {} has neither `value` nor `ref`",
                    field.element().describe()
                ))
                .with_code(ErrorCode::E106)
                .with_label(dim.span(), "incomplete dimension")
                .with_help("give the size as `value` or name a symbol with `ref`"),
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format!("[{}]", dims.join(", ")))
}

#[cfg(test)]
mod tests {
    use nxdoc_core::{
        element::Element,
        schema::{Definition, Node},
    };
    use nxdoc_parser::{ReaderConfig, parse};

    use super::*;
    use crate::render::RenderErrorKind;

    const NS: &str = "urn:nxdl";

    fn tree(body: &str) -> Element {
        let source = format!(r#"<definition xmlns="{NS}">{body}</definition>"#);
        parse(&source, &ReaderConfig::default()).expect("valid XML")
    }

    fn first_field(root: &Element) -> Field<'_> {
        Definition::new(root, NS)
            .expect("definition root")
            .nodes()
            .find_map(Node::as_field)
            .expect("a field")
    }

    #[test]
    fn test_type_defaults_to_untyped_char() {
        let root = tree(r#"<field name="x"/>"#);

        assert_eq!(
            format_type(first_field(&root)),
            "untyped (:ref:`NX_CHAR <NX_CHAR>`)"
        );
    }

    #[test]
    fn test_vocabulary_type_is_cross_referenced() {
        let root = tree(r#"<field name="x" type="NX_FLOAT"/>"#);

        assert_eq!(
            format_type(first_field(&root)),
            ":ref:`NX_FLOAT <NX_FLOAT>`"
        );
    }

    #[test]
    fn test_other_type_is_verbatim() {
        let root = tree(r#"<field name="x" type="ISO8601"/>"#);

        assert_eq!(format_type(first_field(&root)), "ISO8601");
    }

    #[test]
    fn test_units() {
        let root = tree(
            r#"<field name="a"/><field name="b" units="NX_LENGTH"/><field name="c" units="mm"/>"#,
        );
        let definition = Definition::new(&root, NS).unwrap();
        let units: Vec<_> = definition
            .nodes()
            .filter_map(Node::as_field)
            .map(format_units)
            .collect();

        assert_eq!(
            units,
            [
                "",
                " {units=\\ :ref:`NX_LENGTH <NX_LENGTH>`}",
                " {units=mm}"
            ]
        );
    }

    #[test]
    fn test_attribute_type_and_units() {
        let root = tree(
            r#"<field name="x"><attribute name="offset" type="NX_FLOAT" units="NX_LENGTH"/></field>"#,
        );
        let attribute = first_field(&root).attributes().next().expect("an attribute");

        assert_eq!(format_type(attribute), ":ref:`NX_FLOAT <NX_FLOAT>`");
        assert_eq!(
            format_units(attribute),
            " {units=\\ :ref:`NX_LENGTH <NX_LENGTH>`}"
        );
    }

    #[test]
    fn test_dimensions() {
        let root = tree(
            r#"<field name="x"><dimensions rank="2"><dim index="1" value="3"/><dim index="2" ref="nP"/></dimensions></field>"#,
        );

        assert_eq!(format_dimensions(first_field(&root)).unwrap(), "[3, ref(nP)]");
    }

    #[test]
    fn test_empty_value_falls_back_to_ref() {
        let root = tree(
            r#"<field name="x"><dimensions><dim index="1" value="" ref="n"/></dimensions></field>"#,
        );

        assert_eq!(format_dimensions(first_field(&root)).unwrap(), "[ref(n)]");
    }

    #[test]
    fn test_no_dimensions() {
        let root = tree(r#"<field name="x"/>"#);

        assert_eq!(format_dimensions(first_field(&root)).unwrap(), "");
    }

    #[test]
    fn test_duplicate_dimensions_is_malformed() {
        let root = tree(r#"<field name="x"><dimensions/><dimensions/></field>"#);

        let err = format_dimensions(first_field(&root)).unwrap_err();
        assert_eq!(err.kind(), RenderErrorKind::MalformedInput);
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E104));
    }

    #[test]
    fn test_incomplete_dim_is_malformed() {
        let root = tree(r#"<field name="x"><dimensions><dim index="1"/></dimensions></field>"#);

        let err = format_dimensions(first_field(&root)).unwrap_err();
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E106));
    }

    #[test]
    fn test_refs() {
        assert_eq!(class_ref("NXsample"), ":ref:`NXsample`");
        assert_eq!(vocabulary_ref("NX_INT"), ":ref:`NX_INT <NX_INT>`");
    }
}
