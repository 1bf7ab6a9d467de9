use msg2go_codegen::{CodeFragment, ImportSet};
use msg2go_core::go_string_literal;
use msg2go_graph::Element;

use super::{Component, FromSpec, StateDecl, action_id, required_value};
use crate::CompileError;

/// A clickable button backed by a `widget.Clickable`.
///
/// The clickable is named after the element's position (`button3`), so two
/// buttons never share state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub text: String,
    pub var: String,
    pub action_id: Option<String>,
}

impl FromSpec for Button {
    const KIND: &'static str = "button";

    fn from_spec(index: usize, element: &Element) -> Result<Self, CompileError> {
        Ok(Self {
            text: required_value(index, Self::KIND, element)?,
            var: format!("button{index}"),
            action_id: action_id(element),
        })
    }
}

impl Component for Button {
    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }

    fn interaction(&self) -> Option<String> {
        Some(format!("{}.Clicked(gtx)", self.var))
    }

    fn state_decl(&self) -> Option<StateDecl> {
        Some(StateDecl::new(&self.var, "widget.Clickable"))
    }

    fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        imports.add("gioui.org/widget", "Clickable");
        imports.add("gioui.org/widget/material", "Button");
        imports
    }

    fn render_base(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "return material.Button(th, &{}, {}).Layout(gtx)",
            self.var,
            go_string_literal(&self.text)
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandlerMap;

    fn button(index: usize, action: Option<&str>) -> Button {
        let mut element = Element::new("button").with_value("Click Me");
        if let Some(id) = action {
            element = element.with_action(id);
        }
        Button::from_spec(index, &element).unwrap()
    }

    #[test]
    fn test_state_named_by_index() {
        assert_eq!(
            button(2, None).state_decl(),
            Some(StateDecl::new("button2", "widget.Clickable"))
        );
    }

    #[test]
    fn test_render_without_action() {
        assert_eq!(
            button(0, None).render(None),
            vec![CodeFragment::line(
                r#"return material.Button(th, &button0, "Click Me").Layout(gtx)"#
            )]
        );
    }

    #[test]
    fn test_render_with_bound_handler() {
        let handlers: HandlerMap = [("A1", r#"actionMessage = "Hi""#)].into_iter().collect();
        let fragments = button(0, Some("A1")).render(Some(&handlers));

        assert_eq!(
            fragments,
            vec![
                CodeFragment::block(
                    "if button0.Clicked(gtx) {",
                    vec![CodeFragment::line(r#"actionMessage = "Hi""#)],
                    Some("}".to_string()),
                ),
                CodeFragment::line(r#"return material.Button(th, &button0, "Click Me").Layout(gtx)"#),
            ]
        );
    }

    #[test]
    fn test_unresolved_action_degrades() {
        let handlers = HandlerMap::new();
        let b = button(0, Some("X"));
        assert_eq!(b.render(Some(&handlers)), b.render_base());
    }

    #[test]
    fn test_missing_text_is_malformed() {
        let err = Button::from_spec(0, &Element::new("button")).unwrap_err();
        assert_eq!(err, CompileError::missing(0, "button", "value"));
    }
}
