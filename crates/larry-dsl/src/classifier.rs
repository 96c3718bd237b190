use crate::error::Span;

/// One physical line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Byte offset of the first character of the line within the source.
    pub offset: usize,
    /// Line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    /// Returns true for lines containing only whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The trimmed line text and its absolute byte offset.
    pub fn content(&self) -> (&'a str, usize) {
        let leading = self.text.len() - self.text.trim_start().len();
        (self.text.trim(), self.offset + leading)
    }

    /// Span covering the trimmed line text.
    pub fn content_span(&self) -> Span {
        let (text, start) = self.content();
        Span::new(start, start + text.len())
    }
}

/// What a non-blank line declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Indented: a field of the current entity, or `timestamps`.
    Field,
    /// Flush left: an entity name followed by its relations.
    Header,
}

/// Classifies a line by its first character alone.
pub fn classify(text: &str) -> LineKind {
    match text.chars().next() {
        Some(c) if c.is_whitespace() => LineKind::Field,
        _ => LineKind::Header,
    }
}

/// Splits `source` into physical lines, stripping a trailing `\r` from each.
pub fn lines(source: &str) -> impl Iterator<Item = SourceLine<'_>> {
    let mut offset = 0;
    source.split('\n').enumerate().map(move |(i, raw)| {
        let line = SourceLine {
            number: i + 1,
            offset,
            text: raw.strip_suffix('\r').unwrap_or(raw),
        };
        offset += raw.len() + 1;
        line
    })
}

/// The number of the last physical line, used as the end-of-input line.
pub fn last_line_number(source: &str) -> usize {
    source.split('\n').count()
}
