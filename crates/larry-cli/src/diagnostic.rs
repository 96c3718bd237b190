use larry_dsl::DslError;
use miette::{Diagnostic, NamedSource, SourceSpan};

/// A diagnostic wrapping a `DslError` for rich miette rendering.
///
/// The module-level `#[allow(unused_assignments)]` in main.rs is required
/// because miette's derive macro generates assignment patterns that rustc
/// flags as unused.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct LarryDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,
    label: String,

    #[help]
    suggestion: Option<String>,
}

/// Convert a `DslError` into a miette `LarryDiagnostic`.
///
/// The message keeps the `[Line No. N]` prefix so the rendered report reads
/// the same as plain output.
pub fn dsl_error_to_diagnostic(error: &DslError, source: &str, filename: &str) -> LarryDiagnostic {
    let (label, suggestion) = describe(error);
    let span = error.span();

    LarryDiagnostic {
        src: NamedSource::new(filename, source.to_string()),
        span: (span.start, span.len()).into(),
        message: error.to_string(),
        label,
        suggestion,
    }
}

/// Render a parse error for a file using miette.
pub fn render_diagnostic(error: &DslError, source: &str, filename: &str) -> miette::Report {
    miette::Report::new(dsl_error_to_diagnostic(error, source, filename))
}

fn describe(error: &DslError) -> (String, Option<String>) {
    match error {
        DslError::InvalidToken { .. } => (
            "unrecognized text".to_string(),
            Some("Check for typos or unsupported characters.".to_string()),
        ),
        DslError::OrphanField { .. } => (
            "indented line outside an entity".to_string(),
            Some(
                "Declare an entity on a line with no leading whitespace before its fields."
                    .to_string(),
            ),
        ),
        DslError::MissingType { field, .. } => (
            "expected name:type".to_string(),
            Some(format!("Add a type, e.g. '{field}:string'.")),
        ),
        DslError::UnknownProperty { .. } => (
            "unknown property".to_string(),
            Some(
                "Properties are nullable, fulltext, index, primary, unique and unsigned."
                    .to_string(),
            ),
        ),
        DslError::UnknownRelation { target, code, .. } => {
            let suggestion = if code.is_empty() {
                format!("Add a relation code, e.g. '{target}:hm'.")
            } else {
                "Use ho (has one), hm (has many), bt (belongs to) or hmb (many to many)."
                    .to_string()
            };
            ("unknown relation code".to_string(), Some(suggestion))
        }
        DslError::UnresolvedEntityReference { entity, .. } => (
            "input ended here".to_string(),
            Some(format!("Declare '{entity}' on its own line.")),
        ),
        DslError::DuplicateField { .. } => (
            "already defined above".to_string(),
            Some("Remove the duplicate or rename one of the fields.".to_string()),
        ),
        DslError::DuplicateEntity { .. } => (
            "already declared above".to_string(),
            Some("Merge the two declarations or rename one of the entities.".to_string()),
        ),
        DslError::Model { .. } => (
            "invalid name".to_string(),
            Some("Names may only contain letters, digits and underscores.".to_string()),
        ),
        _ => ("error".to_string(), None),
    }
}
