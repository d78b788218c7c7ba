//! Compact document outline: headings plus one marker per table.
//!
//! Shares the line classifier with the converter but skips inline
//! tokenization and cell splitting entirely.

use std::fmt;

use serde::Serialize;

use crate::classify::{classify, LineClass};
use crate::lexer::Lexer;

/// One outline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OutlineEntry<'a> {
    Heading { level: u8, text: &'a str },
    Table,
}

impl fmt::Display for OutlineEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineEntry::Heading { level, text } => write!(f, "H{}: {}", level, text),
            OutlineEntry::Table => f.write_str("TABLE"),
        }
    }
}

/// Outline entries in source order.
///
/// A table run contributes a single [`OutlineEntry::Table`] at its first
/// data row. Separator rows keep the run open without reporting it, so a
/// run made only of separators reports nothing.
pub fn outline_entries(input: &str) -> Vec<OutlineEntry<'_>> {
    let mut entries = Vec::new();
    let mut table_reported = false;

    for line in Lexer::new(input) {
        match classify(line.text) {
            LineClass::Heading { level, text } => {
                table_reported = false;
                entries.push(OutlineEntry::Heading { level, text });
            }
            LineClass::TableRow => {
                if !table_reported {
                    table_reported = true;
                    entries.push(OutlineEntry::Table);
                }
            }
            LineClass::TableSeparator => {}
            _ => table_reported = false,
        }
    }

    entries
}

/// Outline labels: `H{level}: {text}` for headings, `TABLE` for tables.
///
/// ```rust
/// use mdpage_core::outline;
///
/// let labels = outline("# Plan\n| a | b |\n| c | d |");
/// assert_eq!(labels, vec!["H1: Plan", "TABLE"]);
/// ```
pub fn outline(input: &str) -> Vec<String> {
    outline_entries(input)
        .iter()
        .map(ToString::to_string)
        .collect()
}
