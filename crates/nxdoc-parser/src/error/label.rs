//! Labeled source spans for diagnostic messages.

use nxdoc_core::Span;

/// A message attached to a span of the NXDL source.
///
/// Primary labels mark where the problem is; secondary labels point at
/// related markup, for instance the first of two `doc` elements:
///
/// ```text
/// error[E100]: too many `doc` elements in <field name="x">
///    |
/// 12 |     <doc>first</doc>
///    |     ---------------- first documentation block
/// 13 |     <doc>second</doc>
///    |     ^^^^^^^^^^^^^^^^^ second documentation block
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(10..20), "second documentation block");

        assert_eq!(label.span(), Span::new(10..20));
        assert_eq!(label.message(), "second documentation block");
        assert!(label.is_primary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(5..15), "first documentation block");

        assert_eq!(label.span().start(), 5);
        assert!(!label.is_primary());
    }
}
