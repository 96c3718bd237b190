use logos::Logos;

/// Tokens of a field line's column definition, e.g. `price:decimal,8,2:unsigned`.
///
/// Text runs are not trimmed, so params keep their surrounding whitespace.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum FieldToken {
    #[token(":")]
    Colon,

    #[token(",")]
    Comma,

    /// Any run of characters other than `:` and `,`.
    #[regex(r"[^:,]+")]
    Text,
}

impl FieldToken {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for FieldToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Tokens of an entity header line: whitespace-separated words such as
/// `User` or `Post:hm`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
pub enum HeaderToken {
    #[regex(r"[^ \t\r\f]+")]
    Word,
}

impl HeaderToken {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Word => "word",
        }
    }
}

impl std::fmt::Display for HeaderToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
