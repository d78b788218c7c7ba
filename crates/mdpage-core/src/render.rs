//! Renderers turning a [`PageLayout`] into bytes.
//!
//! Binary word-processor packaging lives outside this crate; any backend
//! plugs in through [`Renderer`]. Two renderers ship with the crate: JSON
//! (the layout model itself, for external packagers) and plain text.

use std::io::Write;

use crate::error::RenderError;
use crate::layout::{LayoutBlock, LayoutCell, ListMarker, PageLayout};

/// Output backend for a laid-out page.
pub trait Renderer {
    /// Short backend name used in reports.
    fn name(&self) -> &'static str;

    /// File extension (without dot) for rendered output.
    fn extension(&self) -> &'static str;

    /// Render the page into bytes.
    fn render(&self, layout: &PageLayout<'_>) -> Result<Vec<u8>, RenderError>;
}

/// Serializes the layout model as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Renderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, layout: &PageLayout<'_>) -> Result<Vec<u8>, RenderError> {
        let bytes = if self.pretty {
            serde_json::to_vec_pretty(layout)?
        } else {
            serde_json::to_vec(layout)?
        };
        Ok(bytes)
    }
}

/// Renders the page as plain UTF-8 text with boxed tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, layout: &PageLayout<'_>) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::with_capacity(1024);
        let mut number = 0usize;
        let mut prev_list_item = false;

        for (i, block) in layout.blocks.iter().enumerate() {
            // Numbering runs across nested bullets and restarts after any other block.
            let list_item = is_list_item(block);
            if !list_item {
                number = 0;
            }

            // Consecutive list items stay tight; other blocks get a blank line.
            if i > 0 && !(list_item && prev_list_item) {
                writeln!(out)?;
            }
            prev_list_item = list_item;

            match block {
                LayoutBlock::Heading { level, text, .. } => {
                    writeln!(out, "{}", text)?;
                    let underline = match level {
                        1 => Some('='),
                        2 => Some('-'),
                        _ => None,
                    };
                    if let Some(c) = underline {
                        let width = text.chars().count().max(1);
                        writeln!(out, "{}", c.to_string().repeat(width))?;
                    }
                }
                LayoutBlock::Paragraph { runs, list, .. } => {
                    let content: String = runs.iter().map(|r| r.text).collect();
                    match list {
                        None => writeln!(out, "{}", content)?,
                        Some(ListMarker::Bullet { level }) => {
                            writeln!(out, "{}• {}", indent(*level), content)?
                        }
                        Some(ListMarker::Numbering { level, .. }) => {
                            number += 1;
                            writeln!(out, "{}{}. {}", indent(*level), number, content)?
                        }
                    }
                }
                LayoutBlock::Table { rows, columns, .. } => {
                    write_table(&mut out, rows, *columns)?;
                }
            }
        }

        Ok(out)
    }
}

fn is_list_item(block: &LayoutBlock<'_>) -> bool {
    matches!(block, LayoutBlock::Paragraph { list: Some(_), .. })
}

fn indent(level: u8) -> String {
    "  ".repeat(level as usize)
}

fn write_table(
    out: &mut Vec<u8>,
    rows: &[Vec<LayoutCell<'_>>],
    columns: usize,
) -> std::io::Result<()> {
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.text.chars().count());
        }
    }

    let border = |fill: char| -> String {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&fill.to_string().repeat(width + 2));
            line.push('+');
        }
        line
    };

    writeln!(out, "{}", border('-'))?;
    for (i, row) in rows.iter().enumerate() {
        write!(out, "|")?;
        for (cell, width) in row.iter().zip(&widths) {
            let pad = width - cell.text.chars().count();
            write!(out, " {}{} |", cell.text, " ".repeat(pad))?;
        }
        writeln!(out)?;
        writeln!(out, "{}", border(if i == 0 { '=' } else { '-' }))?;
    }
    Ok(())
}
