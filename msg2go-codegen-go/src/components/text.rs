use msg2go_codegen::{CodeFragment, ImportSet};
use msg2go_core::go_string_literal;
use msg2go_graph::Element;

use super::{Component, FromSpec, optional_u64, required_value};
use crate::CompileError;

/// Default label size in scale-independent pixels.
const DEFAULT_SIZE: u64 = 16;

/// A static text label: `material.Label(th, unit.Sp(size), value)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub value: String,
    pub size: u64,
}

impl FromSpec for Text {
    const KIND: &'static str = "text";

    fn from_spec(index: usize, element: &Element) -> Result<Self, CompileError> {
        let value = required_value(index, Self::KIND, element)?;
        let size = match optional_u64(index, Self::KIND, element, "size")? {
            Some(0) => {
                return Err(CompileError::invalid(
                    index,
                    Self::KIND,
                    "size",
                    "must be greater than zero",
                ));
            }
            Some(size) => size,
            None => DEFAULT_SIZE,
        };

        Ok(Self { value, size })
    }
}

impl Component for Text {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        imports.add("gioui.org/widget/material", "Label");
        imports.add("gioui.org/unit", "Sp");
        imports
    }

    fn render_base(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "return material.Label(th, unit.Sp({}), {}).Layout(gtx)",
            self.size,
            go_string_literal(&self.value)
        ))]
    }
}
