//! Document element types produced by the converter.
//!
//! The element stream is deliberately flat and renderer-independent:
//!
//! - **Zero-copy**: Text borrows from the input through `Cow<'a, str>`
//! - **Ordered**: Elements appear in the same order as the source lines
//! - **Immutable**: Elements are produced once and handed to a renderer

use std::borrow::Cow;

use serde::Serialize;

/// Borrowed or owned string type for zero-copy conversion.
pub type CowStr<'a> = Cow<'a, str>;

/// Inline style applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStyle {
    /// Unstyled text.
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
}

impl RunStyle {
    /// The delimiter wrapped around a run of this style in Markdown source.
    #[inline]
    pub const fn delimiter(self) -> &'static str {
        match self {
            RunStyle::Plain => "",
            RunStyle::Bold => "**",
            RunStyle::Italic => "*",
            RunStyle::Code => "`",
        }
    }
}

/// A contiguous span of text carrying a single inline style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRun<'a> {
    /// Text with style delimiters stripped.
    pub text: CowStr<'a>,
    /// Style tag.
    pub style: RunStyle,
}

impl<'a> StyledRun<'a> {
    /// Create a run borrowing from the source line.
    #[inline]
    pub fn new(text: &'a str, style: RunStyle) -> Self {
        Self {
            text: Cow::Borrowed(text),
            style,
        }
    }

    /// Create an unstyled run.
    #[inline]
    pub fn plain(text: &'a str) -> Self {
        Self::new(text, RunStyle::Plain)
    }

    /// Re-insert the style delimiters around the run text.
    pub fn to_markdown(&self) -> String {
        let delim = self.style.delimiter();
        let mut out = String::with_capacity(self.text.len() + delim.len() * 2);
        out.push_str(delim);
        out.push_str(&self.text);
        out.push_str(delim);
        out
    }
}

/// Reconstruct the Markdown source of a run sequence.
pub fn runs_to_markdown(runs: &[StyledRun<'_>]) -> String {
    runs.iter().map(StyledRun::to_markdown).collect()
}

/// List marker family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// `-` or `*` marker.
    Bullet,
    /// `N.` marker.
    Numbered,
}

/// One structurally classified output unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DocumentElement<'a> {
    /// Section heading, levels 1-3. The text is not tokenized.
    Heading { level: u8, text: CowStr<'a> },
    /// Text paragraph. `runs` is never empty.
    Paragraph { runs: Vec<StyledRun<'a>> },
    /// A single list entry. `runs` is never empty.
    ListItem {
        kind: ListKind,
        /// Nesting level in `0..=3`.
        level: u8,
        runs: Vec<StyledRun<'a>>,
    },
    /// A pipe table. Rows keep source order and are not padded.
    Table { rows: Vec<Vec<CowStr<'a>>> },
}

impl<'a> DocumentElement<'a> {
    /// Short lowercase name of the element kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DocumentElement::Heading { .. } => "heading",
            DocumentElement::Paragraph { .. } => "paragraph",
            DocumentElement::ListItem { .. } => "list_item",
            DocumentElement::Table { .. } => "table",
        }
    }

    /// Inline runs for paragraphs and list items.
    pub fn runs(&self) -> Option<&[StyledRun<'a>]> {
        match self {
            DocumentElement::Paragraph { runs } | DocumentElement::ListItem { runs, .. } => {
                Some(runs)
            }
            _ => None,
        }
    }

    /// Check if this is a table element.
    #[inline]
    pub fn is_table(&self) -> bool {
        matches!(self, DocumentElement::Table { .. })
    }
}

/// Number of columns in a table: the widest row's cell count.
pub fn column_count<S>(rows: &[Vec<S>]) -> usize {
    rows.iter().map(Vec::len).max().unwrap_or(0)
}

/// A converted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document<'a> {
    /// Elements in source order.
    pub elements: Vec<DocumentElement<'a>>,
}

impl<'a> Document<'a> {
    /// Check if the document has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Number of table elements.
    pub fn table_count(&self) -> usize {
        self.elements.iter().filter(|e| e.is_table()).count()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentElement<'a>> {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for Document<'a> {
    type Item = DocumentElement<'a>;
    type IntoIter = std::vec::IntoIter<DocumentElement<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
