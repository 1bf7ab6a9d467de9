//! Element translators.
//!
//! Each element kind has a translator implementing [`Component`]. Translators
//! are built from an [`Element`] through [`FromSpec`] and looked up by kind in
//! the [`ComponentRegistry`]. Adding a kind means writing a translator and
//! registering it; the composer and the roller do not change.

mod button;
mod heading;
mod input;
mod registry;
mod text;

use std::fmt;

pub use button::Button;
pub use heading::Heading;
pub use input::Input;
use msg2go_codegen::{CodeFragment, ImportSet};
use msg2go_graph::Element;
pub use registry::{ComponentFactory, ComponentRegistry};
pub use text::Text;

use crate::{CompileError, HandlerMap};

/// A variable the generated program declares before its event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDecl {
    pub name: String,
    pub ty: String,
}

impl StateDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// The Go declaration, e.g. `var button0 widget.Clickable`.
    pub fn to_go(&self) -> String {
        format!("var {} {}", self.name, self.ty)
    }
}

/// Code-generation strategy for one element.
///
/// `state_decl` and `imports` depend only on the translator's own fields.
/// `render` yields the statements of the element's layout slot; they must
/// end with a `return` of the slot's `layout.Dimensions`.
pub trait Component: fmt::Debug {
    /// Kind tag this translator handles.
    fn kind(&self) -> &'static str;

    /// Action id the element is bound to, if any.
    fn action_id(&self) -> Option<&str> {
        None
    }

    /// Go boolean expression that is true when the user interacted with the
    /// element during the current frame. `None` for display-only kinds.
    fn interaction(&self) -> Option<String> {
        None
    }

    /// State the element needs to persist across frames.
    fn state_decl(&self) -> Option<StateDecl> {
        None
    }

    /// Packages and symbols the rendered code uses.
    fn imports(&self) -> ImportSet;

    /// The element's rendering statements without any interaction handling.
    fn render_base(&self) -> Vec<CodeFragment>;

    /// Render the slot, running the bound handler first when the element was
    /// interacted with.
    ///
    /// Elements whose action id is absent or missing from `handlers` render
    /// only their base fragment.
    fn render(&self, handlers: Option<&HandlerMap>) -> Vec<CodeFragment> {
        let base = self.render_base();
        let Some(handler) = self.bound_handler(handlers) else {
            return base;
        };
        let Some(signal) = self.interaction() else {
            return base;
        };

        let mut fragments = vec![CodeFragment::block(
            format!("if {signal} {{"),
            CodeFragment::text(handler),
            Some("}".to_string()),
        )];
        fragments.extend(base);
        fragments
    }

    /// The handler fragment bound to this element, if it resolves.
    fn bound_handler<'h>(&self, handlers: Option<&'h HandlerMap>) -> Option<&'h str> {
        handlers?.get(self.action_id()?)
    }
}

/// Construction of a translator from an element descriptor.
pub trait FromSpec: Component + Sized + 'static {
    /// Kind tag this translator is registered under.
    const KIND: &'static str;

    /// Build the translator for the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::MalformedElement`] when a required field is
    /// absent or a field has the wrong type.
    fn from_spec(index: usize, element: &Element) -> Result<Self, CompileError>;
}

/// The element's `value`, which must be a string.
fn required_value(index: usize, kind: &str, element: &Element) -> Result<String, CompileError> {
    optional_value(index, kind, element)?.ok_or_else(|| CompileError::missing(index, kind, "value"))
}

/// The element's `value` if present; any non-string value is rejected.
fn optional_value(
    index: usize,
    kind: &str,
    element: &Element,
) -> Result<Option<String>, CompileError> {
    match element.value() {
        None => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| CompileError::invalid(index, kind, "value", "must be a string")),
    }
}

/// An optional unsigned integer field.
fn optional_u64(
    index: usize,
    kind: &str,
    element: &Element,
    field: &str,
) -> Result<Option<u64>, CompileError> {
    match element.field(field) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| CompileError::invalid(index, kind, field, "must be a positive integer")),
    }
}

/// The action id to keep on an element translator.
fn action_id(element: &Element) -> Option<String> {
    element.action_id().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Probe {
        action: Option<String>,
        signal: Option<String>,
    }

    impl Component for Probe {
        fn kind(&self) -> &'static str {
            "probe"
        }

        fn action_id(&self) -> Option<&str> {
            self.action.as_deref()
        }

        fn interaction(&self) -> Option<String> {
            self.signal.clone()
        }

        fn imports(&self) -> ImportSet {
            ImportSet::new()
        }

        fn render_base(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line("return probe.Layout(gtx)")]
        }
    }

    fn handlers() -> HandlerMap {
        [("A1", "actionMessage = \"Hi\"")].into_iter().collect()
    }

    #[test]
    fn test_render_wraps_bound_handler() {
        let probe = Probe {
            action: Some("A1".into()),
            signal: Some("probe.Clicked(gtx)".into()),
        };

        let fragments = probe.render(Some(&handlers()));
        assert_eq!(
            fragments,
            vec![
                CodeFragment::block(
                    "if probe.Clicked(gtx) {",
                    vec![CodeFragment::line("actionMessage = \"Hi\"")],
                    Some("}".to_string()),
                ),
                CodeFragment::line("return probe.Layout(gtx)"),
            ]
        );
    }

    #[test]
    fn test_render_unresolved_action_is_base_only() {
        let probe = Probe {
            action: Some("missing".into()),
            signal: Some("probe.Clicked(gtx)".into()),
        };
        assert_eq!(probe.render(Some(&handlers())), probe.render_base());
    }

    #[test]
    fn test_render_without_handlers_is_base_only() {
        let probe = Probe {
            action: Some("A1".into()),
            signal: Some("probe.Clicked(gtx)".into()),
        };
        assert_eq!(probe.render(None), probe.render_base());
    }

    #[test]
    fn test_render_without_signal_is_base_only() {
        let probe = Probe {
            action: Some("A1".into()),
            signal: None,
        };
        assert_eq!(probe.render(Some(&handlers())), probe.render_base());
    }

    #[test]
    fn test_state_decl_to_go() {
        assert_eq!(
            StateDecl::new("button0", "widget.Clickable").to_go(),
            "var button0 widget.Clickable"
        );
    }

    #[test]
    fn test_optional_u64_rejects_wrong_type() {
        let element = Element::new("text").with_field("size", "big");
        let err = optional_u64(2, "text", &element, "size").unwrap_err();
        assert!(matches!(
            err,
            CompileError::MalformedElement { index: 2, ref field, .. } if field == "size"
        ));
    }
}
