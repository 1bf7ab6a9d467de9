use msg2go_codegen::{CodeFragment, ImportSet};
use msg2go_core::go_string_literal;
use msg2go_graph::Element;

use super::{Component, FromSpec, StateDecl, optional_value};
use crate::CompileError;

/// A single text field backed by a `widget.Editor`; `value` is the hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub hint: String,
    pub var: String,
}

impl FromSpec for Input {
    const KIND: &'static str = "input";

    fn from_spec(index: usize, element: &Element) -> Result<Self, CompileError> {
        Ok(Self {
            hint: optional_value(index, Self::KIND, element)?.unwrap_or_default(),
            var: format!("input{index}"),
        })
    }
}

impl Component for Input {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn state_decl(&self) -> Option<StateDecl> {
        Some(StateDecl::new(&self.var, "widget.Editor"))
    }

    fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        imports.add("gioui.org/widget", "Editor");
        imports.add("gioui.org/widget/material", "Editor");
        imports
    }

    fn render_base(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "return material.Editor(th, &{}, {}).Layout(gtx)",
            self.var,
            go_string_literal(&self.hint)
        ))]
    }
}
