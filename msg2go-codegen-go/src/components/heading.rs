use msg2go_codegen::{CodeFragment, ImportSet};
use msg2go_core::go_string_literal;
use msg2go_graph::Element;

use super::{Component, FromSpec, optional_u64, required_value};
use crate::CompileError;

const DEFAULT_LEVEL: u8 = 4;

/// A heading rendered with one of the material `H1`..`H6` styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub value: String,
    pub level: u8,
}

impl Heading {
    fn style(&self) -> String {
        format!("H{}", self.level)
    }
}

impl FromSpec for Heading {
    const KIND: &'static str = "heading";

    fn from_spec(index: usize, element: &Element) -> Result<Self, CompileError> {
        let value = required_value(index, Self::KIND, element)?;
        let level = match optional_u64(index, Self::KIND, element, "level")? {
            None => DEFAULT_LEVEL,
            Some(level @ 1..=6) => level as u8,
            Some(_) => {
                return Err(CompileError::invalid(
                    index,
                    Self::KIND,
                    "level",
                    "must be between 1 and 6",
                ));
            }
        };

        Ok(Self { value, level })
    }
}

impl Component for Heading {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        imports.add("gioui.org/widget/material", &self.style());
        imports
    }

    fn render_base(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "return material.{}(th, {}).Layout(gtx)",
            self.style(),
            go_string_literal(&self.value)
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        let heading = Heading::from_spec(0, &Element::new("heading").with_value("Title")).unwrap();
        assert_eq!(
            heading.render_base(),
            vec![CodeFragment::line(
                r#"return material.H4(th, "Title").Layout(gtx)"#
            )]
        );
        assert!(heading.imports().has_symbol("gioui.org/widget/material", "H4"));
    }

    #[test]
    fn test_explicit_level() {
        let element = Element::new("heading").with_value("Top").with_field("level", 1);
        let heading = Heading::from_spec(0, &element).unwrap();
        assert_eq!(heading.level, 1);
    }

    #[test]
    fn test_level_out_of_range() {
        let element = Element::new("heading").with_value("Top").with_field("level", 7);
        let err = Heading::from_spec(5, &element).unwrap_err();
        assert!(matches!(
            err,
            CompileError::MalformedElement { index: 5, ref field, .. } if field == "level"
        ));
    }
}
