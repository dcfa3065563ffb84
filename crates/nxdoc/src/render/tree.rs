//! The Structure section: a recursive walk of fields, groups and links.
//!
//! Each level is written in three passes over its direct children: every
//! field, then every group (with its whole subtree), then every link. Source
//! interleaving does not matter, so a reader always finds the leaves of a
//! level before its containers.

use log::trace;

use nxdoc_core::{
    naming,
    schema::{Attribute, Field, Group, Link, Node, SchemaElement},
};
use nxdoc_parser::error::{Diagnostic, ErrorCode};

use crate::render::{
    Indent, RenderError, Result, RstWriter,
    doc::render_doc_or_blank,
    enumeration::render_enumeration,
    format::{class_ref, format_dimensions, format_type, format_units},
    required,
};

/// Write the structure below `node` at `indent`.
///
/// `path` names the position of `node` in the class hierarchy, such as
/// `NXentry/NXsample`, and is only used for logging.
///
/// # Errors
///
/// Returns [`StructuralSchema`](crate::render::RenderErrorKind::StructuralSchema)
/// (`E300`) for a group without a `type`, or any error from the formatters,
/// the documentation extractor or the enumeration renderer.
pub fn render_tree<'a>(
    out: &mut RstWriter,
    node: impl SchemaElement<'a>,
    path: &str,
    indent: Indent,
) -> Result<()> {
    for field in node.nodes().filter_map(Node::as_field) {
        render_field(out, field, path, indent)?;
    }
    for group in node.nodes().filter_map(Node::as_group) {
        render_group(out, group, path, indent)?;
    }
    for link in node.nodes().filter_map(Node::as_link) {
        render_link(out, link, path, indent)?;
    }
    Ok(())
}

fn render_field(out: &mut RstWriter, field: Field<'_>, path: &str, indent: Indent) -> Result<()> {
    let name = required(field.name(), field, "name")?;
    trace!(path, name, level = indent.level(); "Visiting field");

    out.line(format!(
        "{indent}**{name}{}**: {}{}",
        format_dimensions(field)?,
        format_type(field),
        format_units(field)
    ));
    out.blank();

    let body = indent.deeper();
    render_doc_or_blank(out, body, field)?;
    render_enumeration(out, body, field)?;
    for attribute in field.attributes() {
        render_attribute(out, attribute, body)?;
    }
    Ok(())
}

fn render_group(out: &mut RstWriter, group: Group<'_>, path: &str, indent: Indent) -> Result<()> {
    let typ = group.type_name().ok_or_else(|| untyped_group(group))?;
    let name = display_name(group, typ);
    trace!(path, name, typ, level = indent.level(); "Visiting group");

    let shown_type = if naming::is_class_name(typ) {
        class_ref(typ)
    } else {
        typ.to_string()
    };
    out.line(format!("{indent}**{name}**: {shown_type}"));
    out.blank();

    let body = indent.deeper();
    render_doc_or_blank(out, body, group)?;
    for attribute in group.attributes() {
        render_attribute(out, attribute, body)?;
    }

    render_tree(out, group, &format!("{path}/{typ}"), body)
}

fn render_link(out: &mut RstWriter, link: Link<'_>, path: &str, indent: Indent) -> Result<()> {
    let name = required(link.name(), link, "name")?;
    let target = required(link.target(), link, "target")?;
    trace!(path, name, target; "Visiting link");

    out.line(format!("{indent}**{name}** --> {target}"));
    out.blank();
    render_doc_or_blank(out, indent.deeper(), link)
}

/// An attribute header is followed directly by its documentation.
fn render_attribute(out: &mut RstWriter, attribute: Attribute<'_>, indent: Indent) -> Result<()> {
    let name = required(attribute.name(), attribute, "name")?;

    out.line(format!(
        "{indent}**@{name}**: {}{}",
        format_type(attribute),
        format_units(attribute)
    ));
    render_doc_or_blank(out, indent.deeper(), attribute)
}

/// The explicit name of a group, or its type in parentheses.
///
/// An empty `name` attribute counts as absent.
fn display_name<'a>(group: Group<'a>, typ: &'a str) -> String {
    match group.name() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("({})", naming::class_stem(typ)),
    }
}

fn untyped_group(group: Group<'_>) -> RenderError {
    let element = group.element();
    let message = match group.name() {
        Some(name) if !name.is_empty() => format!("group `{name}` has no `type`"),
        _ => "group has no `type`".to_string(),
    };
    RenderError::structural_schema(
        Diagnostic::error(message)
            .with_code(ErrorCode::E300)
            .with_label(element.span(), "untyped group")
            .with_help("every group must name its class, e.g. `type=\"NXdata\"`"),
    )
}

#[cfg(test)]
mod tests {
    use nxdoc_core::{element::Element, schema::Definition};
    use nxdoc_parser::{ReaderConfig, parse};

    use super::*;
    use crate::render::RenderErrorKind;

    const NS: &str = "urn:nxdl";

    fn tree(body: &str) -> Element {
        let source = format!(r#"<definition xmlns="{NS}" name="NXtest">{body}</definition>"#);
        parse(&source, &ReaderConfig::default()).expect("valid XML")
    }

    fn render(body: &str) -> Result<String> {
        let root = tree(body);
        let definition = Definition::new(&root, NS).expect("definition root");
        let mut out = RstWriter::new();
        render_tree(&mut out, definition, "NXtest", Indent::new(2).deeper())?;
        Ok(out.into_string())
    }

    #[test]
    fn test_field_with_everything() {
        let output = render(
            r#"<field name="data" type="NX_NUMBER" units="NX_ANY">
                <doc>The data.</doc>
                <dimensions rank="1"><dim index="1" value="3"/></dimensions>
                <enumeration><item value="1"/><item value="2"/></enumeration>
                <attribute name="signal" type="NX_POSINT"><doc>Plot me.</doc></attribute>
            </field>"#,
        )
        .unwrap();

        assert_eq!(
            output,
            "  **data[3]**: :ref:`NX_NUMBER <NX_NUMBER>` {units=\\ :ref:`NX_ANY <NX_ANY>`}\n\
             \n\
             \x20   The data.\n\
             \n\
             \x20   Any of these values: 1 | 2\n\
             \n\
             \x20   **@signal**: :ref:`NX_POSINT <NX_POSINT>`\n\
             \x20     Plot me.\n\
             \n"
        );
    }

    #[test]
    fn test_undocumented_nodes_keep_a_blank_line() {
        let output = render(r#"<field name="x"><attribute name="a"/></field>"#).unwrap();

        assert_eq!(
            output,
            "  **x**: untyped (:ref:`NX_CHAR <NX_CHAR>`)\n\
             \n\
             \n\
             \x20   **@a**: untyped (:ref:`NX_CHAR <NX_CHAR>`)\n\
             \n"
        );
    }

    #[test]
    fn test_fields_then_groups_then_links() {
        let output = render(
            r#"<link name="l" target="/a/b"/>
               <group type="NXsample"><field name="inner"/></group>
               <field name="f"/>"#,
        )
        .unwrap();

        let field = output.find("**f**").unwrap();
        let group = output.find("**(sample)**").unwrap();
        let inner = output.find("    **inner**").unwrap();
        let link = output.find("**l** --> /a/b").unwrap();
        assert!(field < group && group < inner && inner < link);
    }

    #[test]
    fn test_anonymous_group_uses_type_stem() {
        let output = render(r#"<group type="NXdetector"/>"#).unwrap();

        assert_eq!(output, "  **(detector)**: :ref:`NXdetector`\n\n\n");
    }

    #[test]
    fn test_named_group_and_empty_name() {
        let output = render(r#"<group name="sam" type="NXsample"/><group name="" type="NXuser"/>"#)
            .unwrap();

        assert!(output.contains("  **sam**: :ref:`NXsample`\n"));
        assert!(output.contains("  **(user)**: :ref:`NXuser`\n"));
    }

    #[test]
    fn test_non_class_group_type_is_verbatim() {
        let output = render(r#"<group type="custom"/>"#).unwrap();

        assert_eq!(output, "  **(custom)**: custom\n\n\n");
    }

    #[test]
    fn test_nested_groups_indent_one_level_each() {
        let output = render(
            r#"<group type="NXentry"><doc>Entry.</doc><group type="NXdata"><field name="y"/></group></group>"#,
        )
        .unwrap();

        assert_eq!(
            output,
            "  **(entry)**: :ref:`NXentry`\n\
             \n\
             \x20   Entry.\n\
             \n\
             \x20   **(data)**: :ref:`NXdata`\n\
             \n\
             \n\
             \x20     **y**: untyped (:ref:`NX_CHAR <NX_CHAR>`)\n\
             \n\
             \n"
        );
    }

    #[test]
    fn test_link_with_doc() {
        let output = render(r#"<link name="data" target="/entry/instrument/data"><doc>Alias.</doc></link>"#)
            .unwrap();

        assert_eq!(output, "  **data** --> /entry/instrument/data\n\n    Alias.\n\n");
    }

    #[test]
    fn test_untyped_group_is_structural_error() {
        let err = render(r#"<group name="loose"/>"#).unwrap_err();

        assert_eq!(err.kind(), RenderErrorKind::StructuralSchema);
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E300));
        assert!(err.diagnostic().message().contains("loose"));
    }

    #[test]
    fn test_field_without_name_is_malformed() {
        let err = render(r#"<field type="NX_INT"/>"#).unwrap_err();

        assert_eq!(err.kind(), RenderErrorKind::MalformedInput);
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E103));
    }

    #[test]
    fn test_foreign_elements_are_ignored() {
        let output = render(r#"<x:field xmlns:x="urn:other" name="hidden"/><field name="shown"/>"#)
            .unwrap();

        assert!(!output.contains("hidden"));
        assert!(output.contains("**shown**"));
    }
}
