use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for document loading (boxed to keep it small on the stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(msg2go::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON document")]
    #[diagnostic(code(msg2go::json_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse TOML document")]
    #[diagnostic(code(msg2go::toml_error))]
    Toml {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unsupported document format for '{path}'")]
    #[diagnostic(
        code(msg2go::unsupported_format),
        help("documents must use a .json or .toml extension")
    )]
    UnsupportedFormat { path: PathBuf },
}

impl Error {
    pub(crate) fn json(src: &str, filename: &str, source: serde_json::Error) -> Box<Self> {
        let span = byte_offset(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Json {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    pub(crate) fn toml(src: &str, filename: &str, source: toml::de::Error) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Toml {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Convert serde_json's 1-based line/column into a byte offset into `src`.
fn byte_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}
