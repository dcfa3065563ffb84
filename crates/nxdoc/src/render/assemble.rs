//! The reference page for one class definition, section by section.

use std::collections::BTreeSet;

use log::debug;

use nxdoc_core::{
    category::Category,
    naming,
    schema::{Definition, SchemaElement, Symbols},
};
use nxdoc_parser::error::{Diagnostic, ErrorCode};

use crate::{
    config::RenderConfig,
    render::{
        Indent, RenderError, Result, RstWriter,
        doc::{extract_doc_line, render_doc, render_doc_or_blank},
        format::class_ref,
        required,
        tree::render_tree,
    },
};

/// Where a definition came from.
///
/// `source` is echoed verbatim in the provenance comment. `category` selects
/// the index label and the directory of the Source link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    source: String,
    category: Category,
}

impl Origin {
    /// Create an origin for a definition read from `source`.
    pub fn new(source: impl Into<String>, category: Category) -> Self {
        Self {
            source: source.into(),
            category,
        }
    }

    /// The source path as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The category of the definition.
    pub fn category(&self) -> Category {
        self.category
    }
}

/// Write the complete page for `definition`.
///
/// Returns the warnings raised along the way. They do not change the page.
///
/// # Errors
///
/// Returns [`MalformedInput`](crate::render::RenderErrorKind::MalformedInput)
/// if `name` or `version` is missing or the definition has more than one
/// symbol table (`E101`),
/// [`MissingDocumentation`](crate::render::RenderErrorKind::MissingDocumentation)
/// if the class has no description, and any error from the Structure walk.
/// Nothing written before the error is meaningful.
pub fn render_definition(
    out: &mut RstWriter,
    definition: Definition<'_>,
    origin: &Origin,
    config: &RenderConfig,
) -> Result<Vec<Diagnostic>> {
    let name = required(definition.name(), definition, "name")?;
    let version = required(definition.version(), definition, "version")?;
    let category = origin.category();
    let warnings: Vec<Diagnostic> = check_category_attribute(definition, category)
        .into_iter()
        .collect();

    let indent = Indent::new(config.indent_width()).deeper();

    out.line(format!(
        ".. auto-generated by script {} from the NXDL source {}",
        config.generator(),
        origin.source()
    ));
    out.blank();
    out.line(format!(
        ".. index:: ! class definition -- {}; {name}",
        category.label()
    ));
    out.line(format!(".. index:: ! {name}"));
    out.blank();
    out.line(format!(".. _{name}:"));
    out.blank();

    let rule = "=".repeat(name.chars().count());
    out.line(&rule);
    out.line(name);
    out.line(&rule);

    out.blank();
    out.line("**Category**:");
    out.line(format!("{indent}{}.", category.label()));

    debug!(name; "Writing description");
    out.blank();
    out.line("**Description**:");
    render_doc(out, indent, definition, true)?;

    out.blank();
    out.line("**Extends**:");
    match definition.extends() {
        Some(parent) => out.line(format!("{indent}{}.", class_ref(parent))),
        None => out.line(format!("{indent}none.")),
    }
    out.blank();

    debug!(name; "Writing structure");
    out.line("**Structure**:");
    out.blank();
    render_tree(out, definition, name, indent)?;

    debug!(name; "Writing symbols");
    out.line("**Symbols**:");
    out.blank();
    render_symbols(out, definition, indent)?;

    out.line("**Groups cited**:");
    out.line(format!("{indent}{}.", groups_cited(definition)));
    out.blank();

    out.line("**History**:");
    out.line(format!(
        "{indent}Introduced in NeXus version {}.",
        version.trim()
    ));
    out.blank();

    out.line("**Source**:");
    out.line(format!(
        "{indent}Automatically generated from {}/{}/{name}.nxdl.xml.",
        config.html_root(),
        category.dir_name()
    ));

    Ok(warnings)
}

/// The `category` attribute is informational; the containing directory wins.
fn check_category_attribute(
    definition: Definition<'_>,
    category: Category,
) -> Option<Diagnostic> {
    let declared = definition.category()?.trim();
    if declared == category.keyword() {
        return None;
    }

    debug!(
        declared,
        expected = category.keyword();
        "Definition category attribute disagrees with its directory"
    );
    Some(
        Diagnostic::warning(format!(
            "category `{declared}` disagrees with the {} directory",
            category.dir_name()
        ))
        .with_code(ErrorCode::W100)
        .with_label(definition.span(), "definition filed here")
        .with_help(format!(
            "the page is rendered as {}; declare `category=\"{}\"`",
            category.label(),
            category.keyword()
        )),
    )
}

fn render_symbols(out: &mut RstWriter, definition: Definition<'_>, indent: Indent) -> Result<()> {
    let Some(table) = single_symbol_table(definition)? else {
        out.line(format!("{indent}No symbol table."));
        out.blank();
        return Ok(());
    };

    render_doc_or_blank(out, indent, table)?;
    for symbol in table.symbols() {
        let name = required(symbol.name(), symbol, "name")?;
        let caption = extract_doc_line(symbol)?;
        if caption.is_empty() {
            out.line(format!("{indent}{name}"));
        } else {
            out.line(format!("{indent}{name}: {caption}"));
        }
        out.blank();
    }
    Ok(())
}

fn single_symbol_table(definition: Definition<'_>) -> Result<Option<Symbols<'_>>> {
    let mut tables = definition.symbol_tables();
    let first = tables.next();
    if let (Some(first), Some(extra)) = (first, tables.next()) {
        return Err(RenderError::malformed_input(
            Diagnostic::error("definition has more than one symbol table")
                .with_code(ErrorCode::E101)
                .with_label(extra.span(), "second `symbols` element")
                .with_secondary_label(first.span(), "first `symbols` element"),
        ));
    }
    Ok(first)
}

/// Every schema class used by a group anywhere in the definition, sorted by
/// class name and deduplicated, as a comma-separated list of references.
pub fn groups_cited(definition: Definition<'_>) -> String {
    let cited: BTreeSet<&str> = definition
        .all_groups()
        .filter_map(|group| group.type_name())
        .filter(|typ| naming::is_class_name(typ))
        .collect();

    if cited.is_empty() {
        return "none".to_string();
    }
    cited
        .into_iter()
        .map(class_ref)
        .collect::<Vec<_>>()
        .join(", ")
}
