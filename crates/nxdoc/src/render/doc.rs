//! Documentation extraction.
//!
//! Documentation in NXDL is free text written with source-file indentation
//! and hard line breaks. A blank line separates paragraphs; everything else
//! is reflowed so each paragraph becomes one line of output.

use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use nxdoc_core::schema::SchemaElement;
use nxdoc_parser::error::{Diagnostic, ErrorCode};

use crate::render::{Indent, RenderError, Result, RstWriter};

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Split raw documentation text into normalized paragraphs.
///
/// Paragraphs are separated by a line break, optional whitespace and another
/// line break. Inside a paragraph every whitespace run becomes one space and
/// the ends are trimmed. Paragraphs left empty are dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(|block| WHITESPACE_RUN.replace_all(block, " ").trim().to_string())
        .filter(|block| !block.is_empty())
        .collect()
}

/// The paragraphs of a node's documentation, in order.
///
/// The `doc` element's inner markup is taken verbatim, so documentation that
/// itself contains tags is preserved as written.
///
/// # Errors
///
/// Returns [`MalformedInput`](crate::render::RenderErrorKind::MalformedInput)
/// (`E100`) if the node has more than one `doc` element.
pub fn extract_doc_blocks<'a>(node: impl SchemaElement<'a>) -> Result<Vec<String>> {
    let mut docs = node.doc_elements();
    let Some(doc) = docs.next() else {
        return Ok(Vec::new());
    };
    if let Some(extra) = docs.next() {
        return Err(RenderError::malformed_input(
            Diagnostic::error(format!(
                "too many `doc` elements in {}",
                node.element().describe()
            ))
            .with_code(ErrorCode::E100)
            .with_label(extra.span(), "second documentation block")
            .with_secondary_label(doc.span(), "first documentation block")
            .with_help("merge the paragraphs into a single `doc` element"),
        ));
    }

    Ok(split_paragraphs(doc.raw_content().unwrap_or_default()))
}

/// A node's documentation as a single line, or an empty string.
///
/// # Errors
///
/// Returns [`MalformedInput`](crate::render::RenderErrorKind::MalformedInput)
/// if the documentation is invalid per [`extract_doc_blocks`] or has more
/// than one paragraph (`E102`).
pub fn extract_doc_line<'a>(node: impl SchemaElement<'a>) -> Result<String> {
    let mut blocks = extract_doc_blocks(node)?;
    if blocks.len() > 1 {
        let element = node.element();
        let span = node
            .doc_elements()
            .next()
            .map_or(element.span(), |doc| doc.span());
        return Err(RenderError::malformed_input(
            Diagnostic::error(format!(
                "documentation of {} must be a single paragraph",
                element.describe()
            ))
            .with_code(ErrorCode::E102)
            .with_label(span, format!("{} paragraphs found", blocks.len())),
        ));
    }
    Ok(blocks.pop().unwrap_or_default())
}

/// Write a node's documentation paragraphs, each followed by a blank line.
///
/// Returns `true` if anything was written. When the node has no
/// documentation nothing is written, and the caller decides how to keep the
/// surrounding blocks apart.
///
/// # Errors
///
/// Returns [`MissingDocumentation`](crate::render::RenderErrorKind::MissingDocumentation)
/// (`E200`) if `required` is set and there is no documentation, or any error
/// from [`extract_doc_blocks`].
pub fn render_doc<'a>(
    out: &mut RstWriter,
    indent: Indent,
    node: impl SchemaElement<'a>,
    required: bool,
) -> Result<bool> {
    let blocks = extract_doc_blocks(node)?;
    if blocks.is_empty() {
        if required {
            let element = node.element();
            return Err(RenderError::missing_documentation(
                Diagnostic::error(format!("no documentation for {}", element.describe()))
                    .with_code(ErrorCode::E200)
                    .with_label(element.span(), "documentation required here")
                    .with_help("add a `doc` element describing this class"),
            ));
        }
        return Ok(false);
    }

    trace!(node = node.element().describe(), paragraphs = blocks.len(); "Writing documentation");
    for block in &blocks {
        out.line(format!("{indent}{block}"));
        out.blank();
    }
    Ok(true)
}

/// Write a node's documentation, or a single blank line in its place.
///
/// Used wherever the next block must stay separate from the header above.
pub(crate) fn render_doc_or_blank<'a>(
    out: &mut RstWriter,
    indent: Indent,
    node: impl SchemaElement<'a>,
) -> Result<()> {
    if !render_doc(out, indent, node, false)? {
        out.blank();
    }
    Ok(())
}
