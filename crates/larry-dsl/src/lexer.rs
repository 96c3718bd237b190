use logos::Logos;

use crate::error::{DslError, Span};
use crate::token::{FieldToken, HeaderToken};

/// A token paired with its source span.
#[derive(Debug, Clone)]
pub struct SpannedToken<T> {
    pub token: T,
    pub span: Span,
    pub text: String,
}

/// Tokenizes a field line's column-definition segment.
///
/// `base` is the byte offset of `text` within the full source, so spans
/// point into the source rather than the segment.
///
/// # Errors
///
/// Returns `DslError::InvalidToken` for the first byte range the lexer
/// cannot match.
pub fn tokenize_definition(
    text: &str,
    base: usize,
    line: usize,
) -> Result<Vec<SpannedToken<FieldToken>>, DslError> {
    tokenize(text, base, line)
}

/// Tokenizes an entity header line into whitespace-separated words.
///
/// # Errors
///
/// Returns `DslError::InvalidToken` for the first byte range the lexer
/// cannot match.
pub fn tokenize_header(
    text: &str,
    base: usize,
    line: usize,
) -> Result<Vec<SpannedToken<HeaderToken>>, DslError> {
    tokenize(text, base, line)
}

fn tokenize<'s, T>(text: &'s str, base: usize, line: usize) -> Result<Vec<SpannedToken<T>>, DslError>
where
    T: Logos<'s, Source = str, Error = ()>,
    T::Extras: Default,
{
    let mut tokens = Vec::new();

    for (result, range) in T::lexer(text).spanned() {
        let span = Span::new(base + range.start, base + range.end);
        match result {
            Ok(token) => tokens.push(SpannedToken {
                token,
                span,
                text: text[range].to_string(),
            }),
            Err(()) => return Err(DslError::InvalidToken { line, span }),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_spans_are_offset() {
        let tokens = tokenize_definition("name:string", 10, 2).unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "name");
        assert_eq!(tokens[0].span, Span::new(10, 14));
        assert_eq!(tokens[1].token, FieldToken::Colon);
        assert_eq!(tokens[2].span, Span::new(15, 21));
    }

    #[test]
    fn header_spans_are_offset() {
        let tokens = tokenize_header("User Post:hm", 100, 5).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "Post:hm");
        assert_eq!(tokens[1].span, Span::new(105, 112));
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize_definition("", 0, 1).unwrap().is_empty());
        assert!(tokenize_header("", 0, 1).unwrap().is_empty());
    }

    #[test]
    fn unicode_text_is_a_single_run() {
        let tokens = tokenize_definition("título:string", 0, 1).unwrap();
        assert_eq!(tokens[0].text, "título");
        assert_eq!(tokens[0].span, Span::new(0, "título".len()));
    }
}
