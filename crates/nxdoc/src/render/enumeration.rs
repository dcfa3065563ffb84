//! Permitted values of a field.

use indexmap::IndexMap;
use log::trace;

use nxdoc_core::schema::{Enumeration, Field, SchemaElement};
use nxdoc_parser::error::{Diagnostic, ErrorCode};

use crate::render::{Indent, RenderError, Result, RstWriter, doc, required};

/// Write the enumeration of `field`, if it has one.
///
/// A single item is introduced as `Obligatory value:`, several as
/// `Any of these values:`. When at least one item carries a caption the
/// values are listed one per paragraph, otherwise they follow the label on
/// the same line separated by ` | `. A blank line closes the block.
///
/// # Errors
///
/// Returns [`MalformedInput`](crate::render::RenderErrorKind::MalformedInput)
/// if the field has more than one `enumeration` (`E105`), an item has no
/// `value` (`E103`), or an item caption is not a single paragraph.
pub fn render_enumeration(out: &mut RstWriter, indent: Indent, field: Field<'_>) -> Result<()> {
    let Some(enumeration) = single_enumeration(field)? else {
        return Ok(());
    };

    // Repeated values keep their first position and the last caption.
    let mut items: IndexMap<&str, String> = IndexMap::new();
    for item in enumeration.items() {
        let value = required(item.value(), item, "value")?;
        items.insert(value, doc::extract_doc_line(item)?);
    }
    if items.is_empty() {
        return Ok(());
    }

    trace!(items = items.len(); "Writing enumeration");
    let label = if items.len() == 1 {
        "Obligatory value:"
    } else {
        "Any of these values:"
    };
    out.text(format!("{indent}{label}"));

    if items.values().any(|caption| !caption.is_empty()) {
        out.blank();
        let item_indent = indent.deeper();
        for (value, caption) in &items {
            if caption.is_empty() {
                out.line(format!("{item_indent}{value}"));
            } else {
                out.line(format!("{item_indent}{value}: {caption}"));
            }
            out.blank();
        }
    } else {
        let values: Vec<&str> = items.keys().copied().collect();
        out.line(format!(" {}", values.join(" | ")));
    }
    out.blank();

    Ok(())
}

fn single_enumeration(field: Field<'_>) -> Result<Option<Enumeration<'_>>> {
    let mut enumerations = field.enumerations();
    let first = enumerations.next();
    if let (Some(first), Some(extra)) = (first, enumerations.next()) {
        return Err(RenderError::malformed_input(
            Diagnostic::error(format!(
                "too many `enumeration` elements in {}",
                field.element().describe()
            ))
            .with_code(ErrorCode::E105)
            .with_label(extra.span(), "second enumeration")
            .with_secondary_label(first.span(), "first enumeration")
            .with_help("list every permitted value in one `enumeration`"),
        ));
    }
    Ok(first)
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

    fn tree(field_body: &str) -> Element {
        let source = format!(
            r#"<definition xmlns="{NS}"><field name="mode">{field_body}</field></definition>"#
        );
        parse(&source, &ReaderConfig::default()).expect("valid XML")
    }

    fn render(root: &Element) -> Result<String> {
        let field = Definition::new(root, NS)
            .expect("definition root")
            .nodes()
            .find_map(Node::as_field)
            .expect("a field");
        let mut out = RstWriter::new();
        render_enumeration(&mut out, Indent::new(2).deeper().deeper(), field)?;
        Ok(out.into_string())
    }

    #[test]
    fn test_documented_items_are_listed() {
        let root = tree(
            r#"<enumeration><item value="A"><doc>doc A</doc></item><item value="B"/></enumeration>"#,
        );

        assert_eq!(
            render(&root).unwrap(),
            "    Any of these values:\n      A: doc A\n\n      B\n\n\n"
        );
    }

    #[test]
    fn test_undocumented_items_are_inline() {
        let root = tree(r#"<enumeration><item value="A"/><item value="B"/></enumeration>"#);

        assert_eq!(render(&root).unwrap(), "    Any of these values: A | B\n\n");
    }

    #[test]
    fn test_single_item_is_obligatory() {
        let root = tree(r#"<enumeration><item value="X"/></enumeration>"#);

        assert_eq!(render(&root).unwrap(), "    Obligatory value: X\n\n");
    }

    #[test]
    fn test_no_enumeration_or_no_items_writes_nothing() {
        assert_eq!(render(&tree("")).unwrap(), "");
        assert_eq!(render(&tree("<enumeration/>")).unwrap(), "");
    }

    #[test]
    fn test_duplicate_value_keeps_position_and_last_caption() {
        let root = tree(
            r#"<enumeration><item value="A"/><item value="B"/><item value="A"><doc>later</doc></item></enumeration>"#,
        );

        assert_eq!(
            render(&root).unwrap(),
            "    Any of these values:\n      A: later\n\n      B\n\n\n"
        );
    }

    #[test]
    fn test_duplicate_values_collapse_to_obligatory() {
        let root = tree(r#"<enumeration><item value="X"/><item value="X"/></enumeration>"#);

        assert_eq!(render(&root).unwrap(), "    Obligatory value: X\n\n");
    }

    #[test]
    fn test_two_enumerations_is_malformed() {
        let root = tree("<enumeration/><enumeration/>");

        let err = render(&root).unwrap_err();
        assert_eq!(err.kind(), RenderErrorKind::MalformedInput);
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E105));
    }

    #[test]
    fn test_item_without_value_is_malformed() {
        let root = tree("<enumeration><item/></enumeration>");

        let err = render(&root).unwrap_err();
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E103));
    }

    #[test]
    fn test_multi_paragraph_caption_is_malformed() {
        let root = tree(r#"<enumeration><item value="A"><doc>one

two</doc></item></enumeration>"#);

        let err = render(&root).unwrap_err();
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E102));
    }
}
