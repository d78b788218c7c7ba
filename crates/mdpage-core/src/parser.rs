//! Document assembler.
//!
//! Drives the line classifier over the input, owns the table accumulator,
//! and tokenizes paragraph and list text. Conversion is total: every line
//! lands in some element or is skipped as blank, and nothing is rejected.

use std::borrow::Cow;

use log::trace;

use crate::ast::{Document, DocumentElement, ListKind};
use crate::classify::{classify, list_level, LineClass};
use crate::inline::parse_inlines;
use crate::lexer::Lexer;
use crate::table::TableAccumulator;

/// Convert Markdown text into an ordered element sequence.
///
/// ```rust
/// use mdpage_core::{convert, DocumentElement};
///
/// let elements = convert("# Plan\n\n- first\n- second");
/// assert_eq!(elements.len(), 3);
/// assert!(matches!(elements[0], DocumentElement::Heading { level: 1, .. }));
/// ```
#[inline]
pub fn convert(input: &str) -> Vec<DocumentElement<'_>> {
    Parser::new().parse(input).elements
}

/// Markdown-subset parser producing a flat [`Document`].
///
/// The parser holds no state between calls; each `parse` owns its own table
/// buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    _private: (),
}

impl Parser {
    /// Create a new parser.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the input into a document.
    pub fn parse<'a>(&self, input: &'a str) -> Document<'a> {
        let mut elements = Vec::with_capacity(16);
        let mut table = TableAccumulator::new();

        for line in Lexer::new(input) {
            let class = classify(line.text);
            trace!("line {}: {:?}", line.number, class);

            // A non-table line ends any pending table run before its own element.
            if let Some(finished) = table.observe(line.text, &class, line.number) {
                elements.push(finished);
            }

            if let Some(element) = self.parse_line(line.text, class) {
                elements.push(element);
            }
        }

        if let Some(finished) = table.flush() {
            elements.push(finished);
        }

        Document { elements }
    }

    /// Build the element for a single non-table line.
    #[inline]
    fn parse_line<'a>(&self, text: &'a str, class: LineClass<'a>) -> Option<DocumentElement<'a>> {
        match class {
            LineClass::Blank => None,
            LineClass::Heading { level, text } => Some(DocumentElement::Heading {
                level,
                text: Cow::Borrowed(text),
            }),
            LineClass::Bullet { indent, text } => Some(DocumentElement::ListItem {
                kind: ListKind::Bullet,
                level: list_level(indent),
                runs: parse_inlines(text),
            }),
            LineClass::Numbered { text, .. } => Some(DocumentElement::ListItem {
                kind: ListKind::Numbered,
                level: 0,
                runs: parse_inlines(text),
            }),
            LineClass::Text => Some(DocumentElement::Paragraph {
                runs: parse_inlines(text),
            }),
            LineClass::TableRow | LineClass::TableSeparator => None,
        }
    }
}
