use larry_core::types::{EntityName, RelationKind};

use crate::classifier::SourceLine;
use crate::error::{DslError, Span};
use crate::lexer::tokenize_header;

/// One `Target:code` declaration on a header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationDecl {
    pub target: EntityName,
    pub kind: RelationKind,
    pub span: Span,
}

/// A parsed entity header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityHeader {
    pub name: EntityName,
    pub name_span: Span,
    /// Relations in the order written, duplicates included.
    pub relations: Vec<RelationDecl>,
}

/// Parses a flush-left line: `Name Target:code Target:code ...`.
///
/// # Errors
///
/// Returns `DslError::UnknownRelation` for a relation word whose code is
/// missing or outside `ho`, `hm`, `bt`, `hmb`, and `DslError::Model` when a
/// name is not an identifier.
pub fn parse_header(line: &SourceLine<'_>) -> Result<EntityHeader, DslError> {
    let (text, start) = line.content();
    let mut words = tokenize_header(text, start, line.number)?.into_iter();

    let Some(first) = words.next() else {
        return Err(DslError::Model {
            source: larry_core::ModelError::InvalidEntityName(String::new()),
            line: line.number,
            span: Span::empty(start),
        });
    };

    let name = EntityName::new(first.text).map_err(|source| DslError::Model {
        source,
        line: line.number,
        span: first.span.clone(),
    })?;

    let relations = words
        .map(|word| parse_relation(&word.text, word.span, line.number))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EntityHeader {
        name,
        name_span: first.span,
        relations,
    })
}

fn parse_relation(word: &str, span: Span, line: usize) -> Result<RelationDecl, DslError> {
    let (target, code) = word.split_once(':').unwrap_or((word, ""));

    let Some(kind) = RelationKind::from_code(code) else {
        return Err(DslError::UnknownRelation {
            target: target.to_string(),
            code: code.to_string(),
            line,
            span,
        });
    };

    let target = EntityName::new(target).map_err(|source| DslError::Model {
        source,
        line,
        span: span.clone(),
    })?;

    Ok(RelationDecl { target, kind, span })
}
