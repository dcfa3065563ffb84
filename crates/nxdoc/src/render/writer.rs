//! The append-only output sink shared by all render components.

use std::fmt;

/// Accumulates reStructuredText in emission order.
///
/// Writes are never reordered: the text format has no out-of-band structure,
/// so the order of calls is the structure of the document.
#[derive(Debug, Default)]
pub struct RstWriter {
    buf: String,
}

impl RstWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text without a line break.
    pub fn text(&mut self, text: impl AsRef<str>) {
        self.buf.push_str(text.as_ref());
    }

    /// Append text followed by a line break.
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.text(text);
        self.buf.push('\n');
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Returns everything written so far.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the writer, returning the document.
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Leading whitespace for one nesting level of the Structure section.
///
/// `Indent` is `Copy` and every descent produces a new value with
/// [`deeper`](Self::deeper), so a callee can never change its caller's
/// indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent {
    level: usize,
    width: usize,
}

impl Indent {
    /// Zero indentation with `width` spaces per level.
    pub fn new(width: usize) -> Self {
        Self { level: 0, width }
    }

    /// One level deeper.
    pub fn deeper(self) -> Self {
        Self {
            level: self.level + 1,
            ..self
        }
    }

    /// The nesting level.
    pub fn level(&self) -> usize {
        self.level
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:1$}", "", self.level * self.width)
    }
}
