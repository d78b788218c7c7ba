//! Accumulator for contiguous pipe-table lines.
//!
//! Table rows arrive one line at a time. The accumulator buffers the cell
//! arrays of data rows, ignores separator rows, and turns the buffer into a
//! single [`DocumentElement::Table`] as soon as a non-table line (or the end
//! of input) interrupts the run.

use std::borrow::Cow;

use log::debug;

use crate::ast::{column_count, CowStr, DocumentElement};
use crate::classify::LineClass;

/// Buffer for the table run currently being read.
#[derive(Debug, Default)]
pub struct TableAccumulator<'a> {
    rows: Vec<Vec<CowStr<'a>>>,
    in_table: bool,
    /// Line number of the first line in the current run.
    started_at: Option<usize>,
}

impl<'a> TableAccumulator<'a> {
    /// Create an empty accumulator.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the most recent line was table syntax.
    #[inline]
    pub fn is_in_table(&self) -> bool {
        self.in_table
    }

    /// Check if no data rows are buffered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of buffered data rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Feed one classified line.
    ///
    /// Table rows are buffered and separators only keep the run open; both
    /// return `None`. Any other class ends the run and returns the finished
    /// table, if it buffered at least one data row.
    pub fn observe(
        &mut self,
        text: &'a str,
        class: &LineClass<'_>,
        line_number: usize,
    ) -> Option<DocumentElement<'a>> {
        match class {
            LineClass::TableRow => {
                self.enter(line_number);
                self.rows
                    .push(split_cells(text).into_iter().map(Cow::Borrowed).collect());
                None
            }
            LineClass::TableSeparator => {
                self.enter(line_number);
                None
            }
            _ => self.flush(),
        }
    }

    /// End the current run, returning its table if any rows were buffered.
    pub fn flush(&mut self) -> Option<DocumentElement<'a>> {
        self.in_table = false;
        let started_at = self.started_at.take();

        if self.rows.is_empty() {
            return None;
        }

        let rows = std::mem::take(&mut self.rows);
        debug!(
            "flushing table from line {}: {} rows, {} columns",
            started_at.unwrap_or_default(),
            rows.len(),
            column_count(&rows)
        );
        Some(DocumentElement::Table { rows })
    }

    #[inline]
    fn enter(&mut self, line_number: usize) {
        if !self.in_table {
            self.in_table = true;
            self.started_at = Some(line_number);
        }
    }
}

/// Split a table row into trimmed cells.
///
/// The empty fields produced by the boundary pipes are dropped: the field
/// before the leading `|`, and the field after a trailing `|`. A row with no
/// trailing pipe keeps its last cell.
pub fn split_cells(line: &str) -> Vec<&str> {
    let trimmed = line.trim_end();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);

    inner.split('|').map(str::trim).collect()
}
