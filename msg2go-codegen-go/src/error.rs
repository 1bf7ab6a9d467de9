use miette::Diagnostic;
use thiserror::Error;

/// Fatal compilation errors.
///
/// Any of these aborts the whole compilation; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompileError {
    #[error("unknown element kind '{kind}' at elements[{index}]")]
    #[diagnostic(
        code(msg2go::unknown_element_kind),
        help("registered kinds: {known}")
    )]
    UnknownElementKind {
        index: usize,
        kind: String,
        known: String,
    },

    #[error("malformed '{kind}' element at elements[{index}]: field '{field}' {reason}")]
    #[diagnostic(code(msg2go::malformed_element))]
    MalformedElement {
        index: usize,
        kind: String,
        field: String,
        reason: String,
    },

    #[error("unprocessable element at elements[{index}]: {reason}")]
    #[diagnostic(
        code(msg2go::unprocessable_graph),
        help("every element needs a non-empty 'kind' tag")
    )]
    UnprocessableGraph { index: usize, reason: String },
}

impl CompileError {
    /// Index of the offending element.
    pub fn index(&self) -> usize {
        match self {
            CompileError::UnknownElementKind { index, .. }
            | CompileError::MalformedElement { index, .. }
            | CompileError::UnprocessableGraph { index, .. } => *index,
        }
    }

    pub(crate) fn missing(index: usize, kind: &str, field: &str) -> Self {
        CompileError::MalformedElement {
            index,
            kind: kind.to_string(),
            field: field.to_string(),
            reason: "is required".to_string(),
        }
    }

    pub(crate) fn invalid(index: usize, kind: &str, field: &str, reason: impl Into<String>) -> Self {
        CompileError::MalformedElement {
            index,
            kind: kind.to_string(),
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
