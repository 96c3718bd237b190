use std::str::FromStr;

use larry_core::types::{Field, FieldName, FieldProperty};

use crate::classifier::SourceLine;
use crate::error::{DslError, Span};
use crate::lexer::{tokenize_definition, SpannedToken};
use crate::token::FieldToken;

/// Separates the column definition from its validation rules.
pub const RULES_DELIMITER: &str = "->";

/// Separates individual validation rules.
pub const RULE_SEPARATOR: char = '|';

/// The line that switches on an entity's timestamp columns.
pub const TIMESTAMPS: &str = "timestamps";

/// The result of parsing one field line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldLine {
    /// The `timestamps` marker.
    Timestamps,
    /// A column definition.
    Column { field: Field, span: Span },
}

/// A colon-delimited run of tokens.
struct Segment {
    tokens: Vec<SpannedToken<FieldToken>>,
    span: Span,
}

impl Segment {
    fn empty_at(offset: usize) -> Self {
        Self {
            tokens: Vec::new(),
            span: Span::empty(offset),
        }
    }

    fn push(&mut self, token: SpannedToken<FieldToken>) {
        if self.tokens.is_empty() {
            self.span.start = token.span.start;
        }
        self.span.end = token.span.end;
        self.tokens.push(token);
    }

    fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// The comma-separated pieces of this segment, untrimmed.
    fn pieces(&self) -> Vec<(String, Span)> {
        let mut pieces = vec![(String::new(), Span::empty(self.span.start))];
        for token in &self.tokens {
            match token.token {
                FieldToken::Comma => {
                    pieces.push((String::new(), Span::empty(token.span.end)));
                }
                _ => {
                    if let Some((text, span)) = pieces.last_mut() {
                        text.push_str(&token.text);
                        span.end = token.span.end;
                    }
                }
            }
        }
        pieces
    }
}

/// Parses the body of an indented line into a field or the timestamps marker.
///
/// Grammar: `name ':' type (',' param)* (':' property)* ('->' rule ('|' rule)*)?`
///
/// # Errors
///
/// Returns `DslError::MissingType` when there is no `:type` segment or the
/// type is empty, `DslError::UnknownProperty` for a property outside the
/// vocabulary, and `DslError::Model` when the name is not an identifier.
pub fn parse_field_line(line: &SourceLine<'_>) -> Result<FieldLine, DslError> {
    let (text, start) = line.content();
    if text == TIMESTAMPS {
        return Ok(FieldLine::Timestamps);
    }

    let (definition, rules) = match text.find(RULES_DELIMITER) {
        Some(idx) => (
            text[..idx].trim_end(),
            Some(&text[idx + RULES_DELIMITER.len()..]),
        ),
        None => (text, None),
    };

    let tokens = tokenize_definition(definition, start, line.number)?;
    let segments = split_segments(tokens, start);
    let span = Span::new(start, start + definition.len());

    let name_segment = &segments[0];
    let raw_name = name_segment.text().trim().to_string();

    let Some(type_segment) = segments.get(1) else {
        return Err(DslError::MissingType {
            field: raw_name,
            line: line.number,
            span,
        });
    };

    let name = FieldName::new(raw_name.clone()).map_err(|source| DslError::Model {
        source,
        line: line.number,
        span: name_segment.span.clone(),
    })?;

    let mut pieces = type_segment.pieces().into_iter();
    let field_type = pieces
        .next()
        .map(|(text, _)| text.trim().to_string())
        .unwrap_or_default();
    if field_type.is_empty() {
        return Err(DslError::MissingType {
            field: raw_name,
            line: line.number,
            span: type_segment.span.clone(),
        });
    }
    let params: Vec<String> = pieces.map(|(text, _)| text).collect();

    let mut field = Field::new(name, field_type)
        .map_err(|source| DslError::Model {
            source,
            line: line.number,
            span: span.clone(),
        })?
        .with_params(params);

    for segment in &segments[2..] {
        let property = segment.text();
        let property = property.trim();
        let parsed = FieldProperty::from_str(property).map_err(|_| DslError::UnknownProperty {
            property: property.to_string(),
            line: line.number,
            span: segment.span.clone(),
        })?;
        field.set_property(parsed);
    }

    if let Some(rules) = rules {
        field = field.with_validation_rules(split_rules(rules));
    }

    tracing::trace!(line = line.number, field = %field, "parsed field");

    Ok(FieldLine::Column { field, span })
}

/// Splits a validation segment into trimmed, non-empty rules.
pub fn split_rules(rules: &str) -> Vec<String> {
    rules
        .split(RULE_SEPARATOR)
        .map(str::trim)
        .filter(|rule| !rule.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_segments(tokens: Vec<SpannedToken<FieldToken>>, start: usize) -> Vec<Segment> {
    let mut segments = vec![Segment::empty_at(start)];
    for token in tokens {
        match token.token {
            FieldToken::Colon => segments.push(Segment::empty_at(token.span.end)),
            _ => {
                if let Some(segment) = segments.last_mut() {
                    segment.push(token);
                }
            }
        }
    }
    segments
}
