//! Event-driven construction of the element tree.
//!
//! The reader walks [`quick_xml`] events with namespace resolution and keeps a
//! stack of open elements. Text is not trimmed, so byte positions between
//! consecutive events stay contiguous and every element gets an exact span.

use std::borrow::Cow;

use quick_xml::{
    NsReader,
    errors::{Error as XmlError, IllFormedError},
    escape::partial_escape,
    events::{BytesStart, Event},
    name::ResolveResult,
};

use nxdoc_core::{Span, element::Element};

use crate::{
    config::ReaderConfig,
    error::{Diagnostic, ErrorCode, ParseError},
};

/// Build the element tree for `source`.
pub(crate) fn read_tree(source: &str, config: &ReaderConfig) -> Result<Element, ParseError> {
    let mut reader = NsReader::from_str(source);
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event_start = reader.buffer_position() as usize;
        let (namespace, event) = match reader.read_resolved_event() {
            Ok((resolved, event)) => (resolved_namespace(&resolved), event),
            Err(err) => {
                let span = Span::new(reader.error_position() as usize..reader.buffer_position() as usize);
                return Err(xml_error(err, span).into());
            }
        };
        let event_end = reader.buffer_position() as usize;
        let span = Span::new(event_start..event_end);

        match event {
            Event::Start(start) => {
                let mut element = open_element(&start, namespace, span)?;
                if config.is_opaque(element.name()) {
                    let content = reader.read_text(start.name()).map_err(|err| {
                        let at = Span::new(event_start..reader.buffer_position() as usize);
                        ParseError::from(xml_error(err, at))
                    })?;
                    element = element.with_raw_content(unwrap_cdata(&content));
                    element.close(reader.buffer_position() as usize);
                    attach(element, &mut open, &mut root)?;
                } else {
                    open.push(element);
                }
            }
            Event::Empty(start) => {
                let mut element = open_element(&start, namespace, span)?;
                if config.is_opaque(element.name()) {
                    element = element.with_raw_content("");
                }
                attach(element, &mut open, &mut root)?;
            }
            Event::End(_) => {
                // quick-xml checks end names, so a pop always matches here
                let Some(mut element) = open.pop() else {
                    return Err(Diagnostic::error("unexpected closing tag")
                        .with_code(ErrorCode::E002)
                        .with_label(span, "nothing is open here")
                        .into());
                };
                element.close(event_end);
                attach(element, &mut open, &mut root)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(Diagnostic::error(format!(
            "element {} is never closed",
            unclosed.describe()
        ))
        .with_code(ErrorCode::E003)
        .with_label(unclosed.span(), "opened here")
        .into());
    }

    root.ok_or_else(|| {
        Diagnostic::error("document has no root element")
            .with_code(ErrorCode::E004)
            .with_label(Span::new(source.len()..source.len()), "end of input")
            .into()
    })
}

/// Place a completed element under its parent, or make it the root.
fn attach(
    element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
) -> Result<(), ParseError> {
    if let Some(parent) = open.last_mut() {
        parent.push_child(element);
        return Ok(());
    }

    if let Some(existing) = root {
        return Err(Diagnostic::error("document has more than one root element")
            .with_code(ErrorCode::E005)
            .with_label(element.span(), "second root element")
            .with_secondary_label(existing.span(), "first root element")
            .into());
    }

    *root = Some(element);
    Ok(())
}

/// Create an element from a start tag, decoding its attributes.
///
/// Namespace declarations are consumed by the resolver and not kept as
/// attributes. Attribute names are stored by local name.
fn open_element(
    start: &BytesStart<'_>,
    namespace: Option<String>,
    span: Span,
) -> Result<Element, ParseError> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    let mut element = Element::new(name, namespace, span);

    for attribute in start.attributes() {
        let attribute = attribute.map_err(|err| {
            Diagnostic::error(format!("invalid attribute: {err}"))
                .with_code(ErrorCode::E006)
                .with_label(span, "in this tag")
        })?;
        if attribute.key.as_namespace_binding().is_some() {
            continue;
        }

        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(|err| {
            Diagnostic::error(format!("cannot decode value of attribute `{key}`: {err}"))
                .with_code(ErrorCode::E006)
                .with_label(span, "in this tag")
        })?;
        element.set_attribute(key, value);
    }

    Ok(element)
}

fn resolved_namespace(resolved: &ResolveResult<'_>) -> Option<String> {
    match resolved {
        ResolveResult::Bound(namespace) => {
            Some(String::from_utf8_lossy(namespace.as_ref()).into_owned())
        }
        _ => None,
    }
}

/// Replace every CDATA section in captured markup by its escaped text.
///
/// Comments are copied as they are, including any `<![CDATA[` they mention.
fn unwrap_cdata(content: &str) -> Cow<'_, str> {
    const CDATA_OPEN: &str = "<![CDATA[";
    const CDATA_CLOSE: &str = "]]>";
    const COMMENT_OPEN: &str = "<!--";
    const COMMENT_CLOSE: &str = "-->";

    if !content.contains(CDATA_OPEN) {
        return Cow::Borrowed(content);
    }

    let mut unwrapped = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(at) = rest.find("<!") {
        unwrapped.push_str(&rest[..at]);
        rest = &rest[at..];
        if let Some(body) = rest.strip_prefix(CDATA_OPEN) {
            let end = body.find(CDATA_CLOSE).unwrap_or(body.len());
            unwrapped.push_str(&partial_escape(&body[..end]));
            rest = body.get(end + CDATA_CLOSE.len()..).unwrap_or("");
        } else if rest.starts_with(COMMENT_OPEN) {
            let end = rest[COMMENT_OPEN.len()..]
                .find(COMMENT_CLOSE)
                .map_or(rest.len(), |end| COMMENT_OPEN.len() + end + COMMENT_CLOSE.len());
            unwrapped.push_str(&rest[..end]);
            rest = &rest[end..];
        } else {
            unwrapped.push_str("<!");
            rest = &rest[2..];
        }
    }
    unwrapped.push_str(rest);
    Cow::Owned(unwrapped)
}

/// Map a quick-xml error to a diagnostic.
fn xml_error(err: XmlError, span: Span) -> Diagnostic {
    match err {
        XmlError::IllFormed(IllFormedError::MismatchedEndTag { expected, found }) => {
            Diagnostic::error(format!(
                "closing tag `</{found}>` does not match `<{expected}>`"
            ))
            .with_code(ErrorCode::E002)
            .with_label(span, format!("expected `</{expected}>`"))
        }
        XmlError::IllFormed(IllFormedError::UnmatchedEndTag(name)) => {
            Diagnostic::error(format!("closing tag `</{name}>` has no opening tag"))
                .with_code(ErrorCode::E002)
                .with_label(span, "unexpected closing tag")
        }
        XmlError::IllFormed(IllFormedError::MissingEndTag(name)) => {
            Diagnostic::error(format!("element `<{name}>` is never closed"))
                .with_code(ErrorCode::E003)
                .with_label(span, "opened here")
        }
        other => Diagnostic::error(format!("invalid XML: {other}"))
            .with_code(ErrorCode::E001)
            .with_label(span, "here"),
    }
}
