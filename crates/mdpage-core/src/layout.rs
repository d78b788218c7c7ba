//! Page layout adapter.
//!
//! Maps the renderer-independent element stream onto a styled page model:
//! fonts and spacing per element, list numbering metadata, and a table grid
//! with column widths. Renderers for concrete formats consume a
//! [`PageLayout`] and never look at Markdown again.

use serde::Serialize;

use crate::ast::{column_count, DocumentElement, ListKind, RunStyle, StyledRun};
use crate::config::{Font, Margins, PageSetup};

/// Numbering definition shared by all numbered list items.
pub const DEFAULT_NUMBERING: &str = "default-numbering";

/// Paragraph spacing in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
}

impl Spacing {
    pub const fn new(before: u32, after: u32) -> Self {
        Self { before, after }
    }

    /// Spacing around a heading of the given level.
    pub const fn heading(level: u8) -> Self {
        match level {
            1 => Self::new(240, 120),
            2 => Self::new(200, 100),
            _ => Self::new(160, 80),
        }
    }

    pub const LIST_ITEM: Spacing = Spacing::new(40, 40);
    pub const PARAGRAPH: Spacing = Spacing::new(60, 60);
}

/// A font reference borrowed from the page setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontRef<'a> {
    pub family: &'a str,
    pub size: u32,
}

impl<'a> From<&'a Font> for FontRef<'a> {
    fn from(font: &'a Font) -> Self {
        Self {
            family: &font.family,
            size: font.size,
        }
    }
}

/// A run of text with resolved character formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutRun<'a> {
    pub text: &'a str,
    pub bold: bool,
    pub italic: bool,
    pub font: FontRef<'a>,
}

/// List metadata attached to a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ListMarker {
    Bullet { level: u8 },
    Numbering { reference: &'static str, level: u8 },
}

/// Cell border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Single,
}

/// Border applied to all four sides of every cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Border {
    pub style: BorderStyle,
    pub size: u32,
}

impl Default for Border {
    fn default() -> Self {
        Self {
            style: BorderStyle::Single,
            size: 1,
        }
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutCell<'a> {
    pub text: &'a str,
    pub bold: bool,
    pub font: FontRef<'a>,
}

/// Block-level layout node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LayoutBlock<'a> {
    Heading {
        level: u8,
        text: &'a str,
        spacing: Spacing,
    },
    Paragraph {
        runs: Vec<LayoutRun<'a>>,
        spacing: Spacing,
        #[serde(skip_serializing_if = "Option::is_none")]
        list: Option<ListMarker>,
    },
    Table {
        width: u32,
        columns: usize,
        column_width: u32,
        border: Border,
        /// Rectangular grid; the first row is the header.
        rows: Vec<Vec<LayoutCell<'a>>>,
    },
}

/// A fully styled page ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout<'a> {
    pub margins: Margins,
    pub content_width: u32,
    pub blocks: Vec<LayoutBlock<'a>>,
}

/// Lay out an element sequence on a page.
pub fn layout<'a>(elements: &'a [DocumentElement<'a>], page: &'a PageSetup) -> PageLayout<'a> {
    PageLayout {
        margins: page.margins,
        content_width: page.content_width,
        blocks: elements.iter().map(|e| layout_element(e, page)).collect(),
    }
}

fn layout_element<'a>(element: &'a DocumentElement<'a>, page: &'a PageSetup) -> LayoutBlock<'a> {
    match element {
        DocumentElement::Heading { level, text } => LayoutBlock::Heading {
            level: *level,
            text,
            spacing: Spacing::heading(*level),
        },
        DocumentElement::Paragraph { runs } => LayoutBlock::Paragraph {
            runs: layout_runs(runs, page),
            spacing: Spacing::PARAGRAPH,
            list: None,
        },
        DocumentElement::ListItem { kind, level, runs } => LayoutBlock::Paragraph {
            runs: layout_runs(runs, page),
            spacing: Spacing::LIST_ITEM,
            list: Some(match kind {
                ListKind::Bullet => ListMarker::Bullet { level: *level },
                ListKind::Numbered => ListMarker::Numbering {
                    reference: DEFAULT_NUMBERING,
                    level: *level,
                },
            }),
        },
        DocumentElement::Table { rows } => layout_table(rows, page),
    }
}

fn layout_runs<'a>(runs: &'a [StyledRun<'a>], page: &'a PageSetup) -> Vec<LayoutRun<'a>> {
    runs.iter()
        .map(|run| LayoutRun {
            text: &run.text,
            bold: run.style == RunStyle::Bold,
            italic: run.style == RunStyle::Italic,
            font: match run.style {
                RunStyle::Code => FontRef::from(&page.code_font),
                _ => FontRef::from(&page.body_font),
            },
        })
        .collect()
}

fn layout_table<'a, S: AsRef<str>>(rows: &'a [Vec<S>], page: &'a PageSetup) -> LayoutBlock<'a> {
    let columns = column_count(rows).max(1);
    let column_width = page.content_width / columns as u32;
    let font = FontRef::from(&page.table_font);

    let grid = rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let header = row_index == 0;
            let mut cells: Vec<LayoutCell<'a>> = row
                .iter()
                .map(|cell| LayoutCell {
                    text: cell.as_ref(),
                    bold: header,
                    font,
                })
                .collect();
            // Short rows are padded so every row spans the full grid.
            cells.resize(
                columns,
                LayoutCell {
                    text: "",
                    bold: header,
                    font,
                },
            );
            cells
        })
        .collect();

    LayoutBlock::Table {
        width: page.content_width,
        columns,
        column_width,
        border: Border::default(),
        rows: grid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::convert;

    #[test]
    fn test_heading_spacing() {
        let elements = convert("# A\n## B\n### C");
        let page = PageSetup::default();
        let page_layout = layout(&elements, &page);
        let spacings: Vec<Spacing> = page_layout
            .blocks
            .iter()
            .map(|b| match b {
                LayoutBlock::Heading { spacing, .. } => *spacing,
                other => panic!("expected heading, got {other:?}"),
            })
            .collect();
        assert_eq!(
            spacings,
            vec![
                Spacing::new(240, 120),
                Spacing::new(200, 100),
                Spacing::new(160, 80)
            ]
        );
    }

    #[test]
    fn test_run_fonts() {
        let elements = convert("plain **bold** `code`");
        let page = PageSetup::default();
        let page_layout = layout(&elements, &page);
        let LayoutBlock::Paragraph { runs, list, .. } = &page_layout.blocks[0] else {
            panic!("expected paragraph");
        };
        assert!(list.is_none());
        assert!(runs[1].bold);
        assert_eq!(runs[1].font.family, "Times New Roman");
        assert_eq!(runs[3].font.family, "Courier New");
        assert_eq!(runs[3].font.size, 22);
    }

    #[test]
    fn test_list_markers() {
        let elements = convert("- top\n    - nested\n1. first");
        let page = PageSetup::default();
        let page_layout = layout(&elements, &page);
        let markers: Vec<Option<ListMarker>> = page_layout
            .blocks
            .iter()
            .map(|b| match b {
                LayoutBlock::Paragraph { list, .. } => *list,
                _ => None,
            })
            .collect();
        assert_eq!(
            markers,
            vec![
                Some(ListMarker::Bullet { level: 0 }),
                Some(ListMarker::Bullet { level: 2 }),
                Some(ListMarker::Numbering {
                    reference: DEFAULT_NUMBERING,
                    level: 0
                }),
            ]
        );
    }

    #[test]
    fn test_table_grid() {
        let elements = convert("| A | B | C |\n|---|---|---|\n| 1 |\n| 2 | 3 | 4 |");
        let page = PageSetup::default();
        let page_layout = layout(&elements, &page);
        let LayoutBlock::Table {
            columns,
            column_width,
            width,
            rows,
            ..
        } = &page_layout.blocks[0]
        else {
            panic!("expected table");
        };
        assert_eq!(*columns, 3);
        assert_eq!(*column_width, 3000);
        assert_eq!(*width, 9000);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert!(rows[0].iter().all(|c| c.bold));
        assert!(rows[1].iter().all(|c| !c.bold));
        assert_eq!(rows[1][2].text, "");
    }

    #[test]
    fn test_column_width_rounds_down() {
        let elements = convert("| a | b | c | d | e | f | g |");
        let page = PageSetup::default();
        let page_layout = layout(&elements, &page);
        let LayoutBlock::Table { column_width, .. } = &page_layout.blocks[0] else {
            panic!("expected table");
        };
        assert_eq!(*column_width, 9000 / 7);
    }
}
