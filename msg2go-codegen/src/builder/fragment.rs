//! Structured code fragments.
//!
//! Fragments carry lines and nesting, never absolute indentation, so a
//! fragment produced in isolation can be placed at any depth and the
//! indentation is computed once when the tree is rendered.

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments one level.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments at the current level.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    /// Turn free-form multi-line text into line fragments.
    ///
    /// The indentation shared by all non-blank lines is stripped, so text
    /// written at any depth is re-based to the depth it is emitted at.
    /// Leading and trailing blank lines are dropped.
    pub fn text(text: &str) -> Vec<CodeFragment> {
        let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        let Some(first) = lines.iter().position(|l| !l.is_empty()) else {
            return Vec::new();
        };
        let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(first);
        let lines = &lines[first..=last];

        let common = lines
            .iter()
            .filter(|l| !l.is_empty())
            .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
            .min()
            .unwrap_or(0);

        lines
            .iter()
            .map(|l| {
                if l.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(l[common..].to_string())
                }
            })
            .collect()
    }

    /// The last non-blank line of this fragment, descending into nested fragments.
    pub fn last_line(&self) -> Option<&str> {
        match self {
            CodeFragment::Line(s) => Some(s),
            CodeFragment::Blank => None,
            CodeFragment::Block { body, close, .. } => match close {
                Some(c) => Some(c),
                None => last_line_of(body),
            },
            CodeFragment::Indent(fragments) | CodeFragment::Sequence(fragments) => {
                last_line_of(fragments)
            }
        }
    }
}

/// The last non-blank line of a fragment list.
fn last_line_of(fragments: &[CodeFragment]) -> Option<&str> {
    fragments.iter().rev().find_map(CodeFragment::last_line)
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}

impl Renderable for [CodeFragment] {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.to_vec()
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
