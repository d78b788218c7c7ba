//! Line splitter feeding the classifier.
//!
//! Lines borrow directly from the input and newlines are located with
//! `memchr`. A trailing `\r` is dropped so CRLF input classifies the same
//! as LF input.

use memchr::memchr;

/// A single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (without trailing newline).
    pub text: &'a str,
    /// 1-based line number.
    pub number: usize,
}

/// Iterator over the lines of an input string.
///
/// An empty input yields no lines. A trailing newline does not produce an
/// extra empty line, so `"a\n"` and `"a"` both yield one line.
pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    offset: usize,
    number: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            number: 0,
        }
    }

    /// Check if all input has been consumed.
    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.bytes.len()
    }

    /// Read the next line from input.
    fn read_line(&mut self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }

        let start = self.offset;
        let end = match memchr(b'\n', &self.bytes[start..]) {
            Some(pos) => start + pos,
            None => self.bytes.len(),
        };

        let text_end = if end > start && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < self.bytes.len() { end + 1 } else { end };
        self.number += 1;

        // `\n` and `\r` are ASCII, so both bounds sit on char boundaries.
        Some(Line {
            text: &self.input[start..text_end],
            number: self.number,
        })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    #[inline]
    fn next(&mut self) -> Option<Line<'a>> {
        self.read_line()
    }
}
