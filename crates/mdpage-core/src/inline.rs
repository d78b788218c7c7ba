//! Inline tokenizer: splits one line into styled runs.
//!
//! Greedy, left-to-right scan over byte positions. At each `*` or `` ` ``
//! the tokenizer tries, in order, a bold span `**…**`, an italic span
//! `*…*` and a code span `` `…` ``. The first closer after at least one
//! content character wins. Delimiters that open nothing stay in the
//! surrounding plain run.
//!
//! Once a closer search fails it cannot succeed from any later position
//! either, so each span kind remembers the failure and the whole scan stays
//! linear even on input full of unbalanced delimiters.

use memchr::{memchr, memchr2, memmem};

use crate::ast::{RunStyle, StyledRun};

/// Tokenize a line into styled runs.
///
/// Never returns an empty vector: empty input yields one empty plain run.
#[inline]
pub fn parse_inlines(text: &str) -> Vec<StyledRun<'_>> {
    if text.is_empty() {
        return vec![StyledRun::plain(text)];
    }

    InlineParser::new(text).parse()
}

struct InlineParser<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    text_start: usize,
    runs: Vec<StyledRun<'a>>,
    /// No `**` closer exists past the last failed search.
    bold_exhausted: bool,
    /// No `*` closer exists past the last failed search.
    italic_exhausted: bool,
    /// No `` ` `` closer exists past the last failed search.
    code_exhausted: bool,
}

impl<'a> InlineParser<'a> {
    #[inline]
    fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            text_start: 0,
            runs: Vec::with_capacity(4),
            bold_exhausted: false,
            italic_exhausted: false,
            code_exhausted: false,
        }
    }

    fn parse(mut self) -> Vec<StyledRun<'a>> {
        while self.pos < self.bytes.len() {
            let Some(offset) = memchr2(b'*', b'`', &self.bytes[self.pos..]) else {
                break;
            };
            self.pos += offset;

            let matched = match self.bytes[self.pos] {
                b'*' => self.try_parse_bold() || self.try_parse_italic(),
                _ => self.try_parse_code(),
            };

            if !matched {
                self.pos += 1;
            }
        }

        if self.text_start < self.bytes.len() {
            self.runs
                .push(StyledRun::plain(&self.text[self.text_start..]));
        }

        self.runs
    }

    #[inline(always)]
    fn flush_text(&mut self) {
        if self.text_start < self.pos {
            self.runs
                .push(StyledRun::plain(&self.text[self.text_start..self.pos]));
        }
    }

    /// Emit a span covering `open..close + delim_len` and advance past it.
    #[inline]
    fn emit_span(&mut self, delim_len: usize, close: usize, style: RunStyle) {
        self.flush_text();
        let content = &self.text[self.pos + delim_len..close];
        self.runs.push(StyledRun::new(content, style));
        self.pos = close + delim_len;
        self.text_start = self.pos;
    }

    fn try_parse_bold(&mut self) -> bool {
        if self.bold_exhausted || self.bytes.get(self.pos + 1) != Some(&b'*') {
            return false;
        }

        let search_from = self.pos + 3;
        let close = self
            .bytes
            .get(search_from..)
            .and_then(|rest| memmem::find(rest, b"**"))
            .map(|offset| search_from + offset);

        match close {
            Some(close) => {
                self.emit_span(2, close, RunStyle::Bold);
                true
            }
            None => {
                self.bold_exhausted = true;
                false
            }
        }
    }

    fn try_parse_italic(&mut self) -> bool {
        self.try_parse_simple(b'*', RunStyle::Italic)
    }

    fn try_parse_code(&mut self) -> bool {
        self.try_parse_simple(b'`', RunStyle::Code)
    }

    /// Single-character delimiter span with at least one content character.
    fn try_parse_simple(&mut self, delim: u8, style: RunStyle) -> bool {
        let exhausted = match style {
            RunStyle::Code => self.code_exhausted,
            _ => self.italic_exhausted,
        };
        if exhausted {
            return false;
        }

        let search_from = self.pos + 2;
        let close = self
            .bytes
            .get(search_from..)
            .and_then(|rest| memchr(delim, rest))
            .map(|offset| search_from + offset);

        match close {
            Some(close) => {
                self.emit_span(1, close, style);
                true
            }
            None => {
                match style {
                    RunStyle::Code => self.code_exhausted = true,
                    _ => self.italic_exhausted = true,
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::runs_to_markdown;

    fn styles(text: &str) -> Vec<(RunStyle, String)> {
        parse_inlines(text)
            .into_iter()
            .map(|r| (r.style, r.text.into_owned()))
            .collect()
    }

    fn run(style: RunStyle, text: &str) -> (RunStyle, String) {
        (style, text.to_string())
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(styles("Hello world"), vec![run(RunStyle::Plain, "Hello world")]);
    }

    #[test]
    fn test_empty_is_single_plain_run() {
        assert_eq!(styles(""), vec![run(RunStyle::Plain, "")]);
    }

    #[test]
    fn test_bold_between_text() {
        assert_eq!(
            styles("text **bold** text"),
            vec![
                run(RunStyle::Plain, "text "),
                run(RunStyle::Bold, "bold"),
                run(RunStyle::Plain, " text"),
            ]
        );
    }

    #[test]
    fn test_italic_and_code() {
        assert_eq!(
            styles("text *italic* and `code`"),
            vec![
                run(RunStyle::Plain, "text "),
                run(RunStyle::Italic, "italic"),
                run(RunStyle::Plain, " and "),
                run(RunStyle::Code, "code"),
            ]
        );
    }

    #[test]
    fn test_mixed_formatting() {
        let runs = styles("**bold** and *italic* and `code`");
        assert_eq!(runs.len(), 5);
        assert_eq!(runs[0], run(RunStyle::Bold, "bold"));
        assert_eq!(runs[2], run(RunStyle::Italic, "italic"));
        assert_eq!(runs[4], run(RunStyle::Code, "code"));
    }

    #[test]
    fn test_bold_wins_over_italic() {
        assert_eq!(styles("**x**"), vec![run(RunStyle::Bold, "x")]);
    }

    #[test]
    fn test_bold_takes_first_closer() {
        assert_eq!(
            styles("**a**b**"),
            vec![run(RunStyle::Bold, "a"), run(RunStyle::Plain, "b**")]
        );
    }

    #[test]
    fn test_unterminated_bold_is_literal() {
        assert_eq!(styles("a **b"), vec![run(RunStyle::Plain, "a **b")]);
    }

    #[test]
    fn test_unterminated_code_is_literal() {
        assert_eq!(styles("run `cargo"), vec![run(RunStyle::Plain, "run `cargo")]);
    }

    #[test]
    fn test_lone_star() {
        assert_eq!(styles("*"), vec![run(RunStyle::Plain, "*")]);
        assert_eq!(styles("2 * 3 = 6"), vec![run(RunStyle::Plain, "2 * 3 = 6")]);
    }

    #[test]
    fn test_empty_spans_are_not_spans() {
        assert_eq!(styles("``"), vec![run(RunStyle::Plain, "``")]);
        assert_eq!(styles("****"), vec![
            run(RunStyle::Italic, "*"),
            run(RunStyle::Plain, "*"),
        ]);
    }

    #[test]
    fn test_italic_may_start_with_star() {
        assert_eq!(styles("**a*"), vec![run(RunStyle::Italic, "*a")]);
    }

    #[test]
    fn test_code_keeps_stars() {
        assert_eq!(
            styles("`a*b*c`"),
            vec![run(RunStyle::Code, "a*b*c")]
        );
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(
            styles("Тема: **Дроби** и `x²`"),
            vec![
                run(RunStyle::Plain, "Тема: "),
                run(RunStyle::Bold, "Дроби"),
                run(RunStyle::Plain, " и "),
                run(RunStyle::Code, "x²"),
            ]
        );
    }

    #[test]
    fn test_round_trip_samples() {
        for line in [
            "text **bold** text",
            "***a***",
            "a * b ** c ` d",
            "`x` *y* **z**",
            "*a**b*",
            "```",
            "**",
        ] {
            assert_eq!(runs_to_markdown(&parse_inlines(line)), line, "line: {line:?}");
        }
    }

    #[test]
    fn test_unbalanced_input_is_linear() {
        let line = "*`".repeat(50_000);
        let runs = parse_inlines(&line);
        assert_eq!(runs_to_markdown(&runs), line);
    }
}
