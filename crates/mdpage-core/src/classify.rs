//! Stateless line classification.
//!
//! Every line maps to exactly one [`LineClass`]. Prefixes are tested in a
//! fixed order so that longer markers win over their own prefixes:
//!
//! 1. `### `, `## `, `# ` headings
//! 2. `|`-prefixed table rows, with separator rows split out
//! 3. bullet items (`-`/`*` + whitespace, optionally indented)
//! 4. numbered items (digits + `.` + whitespace, optionally indented)
//! 5. blank lines
//! 6. anything else is text

/// Deepest list nesting level a bullet item can reach.
pub const MAX_LIST_LEVEL: u8 = 3;

/// Syntactic class of a single line, with the literal extracted from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Heading with marker stripped. Level is 1, 2 or 3.
    Heading { level: u8, text: &'a str },
    /// `|`-prefixed line carrying data cells.
    TableRow,
    /// `|`-prefixed line made only of `-`, `:`, `|` and whitespace.
    TableSeparator,
    /// Bullet item with marker stripped.
    Bullet { indent: usize, text: &'a str },
    /// Numbered item with marker stripped.
    Numbered { indent: usize, text: &'a str },
    /// Empty after trimming.
    Blank,
    /// Anything else.
    Text,
}

impl LineClass<'_> {
    /// Check if the line belongs to a table run.
    #[inline]
    pub fn is_table_syntax(&self) -> bool {
        matches!(self, LineClass::TableRow | LineClass::TableSeparator)
    }
}

const HEADING_MARKERS: [(&str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

/// Classify one line.
pub fn classify(line: &str) -> LineClass<'_> {
    for (marker, level) in HEADING_MARKERS {
        if let Some(text) = line.strip_prefix(marker) {
            return LineClass::Heading { level, text };
        }
    }

    if line.starts_with('|') {
        return if is_separator_row(line) {
            LineClass::TableSeparator
        } else {
            LineClass::TableRow
        };
    }

    let indent = leading_whitespace(line);
    let rest = &line[indent..];

    if let Some(text) = strip_bullet_marker(rest) {
        return LineClass::Bullet { indent, text };
    }

    if let Some(text) = strip_number_marker(rest) {
        return LineClass::Numbered { indent, text };
    }

    if line.trim().is_empty() {
        return LineClass::Blank;
    }

    LineClass::Text
}

/// Nesting level for an indentation width: one level per two columns,
/// clamped to [`MAX_LIST_LEVEL`].
#[inline]
pub fn list_level(indent: usize) -> u8 {
    (indent / 2).min(MAX_LIST_LEVEL as usize) as u8
}

/// Check if a `|`-prefixed line declares alignment only.
pub fn is_separator_row(line: &str) -> bool {
    line.bytes()
        .filter(|&b| b != b'|')
        .all(|b| b == b'-' || b == b':' || b.is_ascii_whitespace())
}

/// Count leading space/tab bytes.
#[inline]
fn leading_whitespace(line: &str) -> usize {
    line.bytes()
        .take_while(|&b| b == b' ' || b == b'\t')
        .count()
}

#[inline]
fn is_marker_gap(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// `- text` / `* text` → `text`.
fn strip_bullet_marker(rest: &str) -> Option<&str> {
    let bytes = rest.as_bytes();
    match bytes {
        [b'-' | b'*', gap, ..] if is_marker_gap(*gap) => Some(&rest[2..]),
        _ => None,
    }
}

/// `12. text` → `text`.
fn strip_number_marker(rest: &str) -> Option<&str> {
    let bytes = rest.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    match &bytes[digits..] {
        [b'.', gap, ..] if is_marker_gap(*gap) => Some(&rest[digits + 2..]),
        _ => None,
    }
}
