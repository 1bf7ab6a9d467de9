//! Assembly of one compilation unit from a UI graph and a handler map.

use msg2go_codegen::{CodeBuilder, CodeFragment, Diagnostic, ImportSet};
use msg2go_graph::UiGraph;

use crate::{
    CompileError, HandlerMap,
    components::{ComponentRegistry, StateDecl},
    responses::ACTION_MESSAGE,
    skeleton::{Skeleton, baseline_imports, ensure_return},
    window::Window,
};

const PHASE: &str = "compose";

/// The generated program together with what went into it.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationUnit {
    source: String,
    imports: ImportSet,
    state: Vec<StateDecl>,
    diagnostics: Vec<Diagnostic>,
}

impl CompilationUnit {
    /// The complete `main.go` text.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }

    pub fn imports(&self) -> &ImportSet {
        &self.imports
    }

    /// State declarations in emission order.
    pub fn state(&self) -> &[StateDecl] {
        &self.state
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Turns a [`UiGraph`] and a [`HandlerMap`] into Go source.
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    registry: &'a ComponentRegistry,
}

impl Default for Composer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer<'static> {
    /// A composer using the built-in element kinds.
    pub fn new() -> Self {
        Self {
            registry: ComponentRegistry::builtin(),
        }
    }
}

impl<'a> Composer<'a> {
    pub fn with_registry(registry: &'a ComponentRegistry) -> Self {
        Self { registry }
    }

    /// Compile the graph.
    ///
    /// # Errors
    ///
    /// Fails on the first element that has no kind tag, an unregistered kind,
    /// or a malformed field. Nothing is produced in that case.
    pub fn compose(
        &self,
        ui: &UiGraph,
        handlers: &HandlerMap,
    ) -> Result<CompilationUnit, CompileError> {
        let mut diagnostics = Vec::new();

        let window = Window::derive(ui.window.as_ref());
        if let Some(icon) = window.icon() {
            diagnostics.push(
                Diagnostic::warning(
                    PHASE,
                    format!(
                        "window icon '{}' cannot be set through Gio window options and was ignored",
                        icon.display()
                    ),
                )
                .at("window.icon"),
            );
        }

        let mut imports = baseline_imports();
        imports.merge(&window.imports());

        let mut state = Vec::new();
        let mut slots = Vec::with_capacity(ui.elements.len() + 1);

        for (index, element) in ui.elements.iter().enumerate() {
            let component = self.registry.instantiate(index, element)?;

            if let Some(action_id) = element.action_id() {
                let location = format!("elements[{index}]");
                if component.interaction().is_none() {
                    diagnostics.push(
                        Diagnostic::warning(
                            PHASE,
                            format!(
                                "'{}' elements are not interactive; action '{action_id}' is ignored",
                                component.kind()
                            ),
                        )
                        .at(location),
                    );
                } else if !handlers.contains(action_id) {
                    diagnostics.push(
                        Diagnostic::warning(
                            PHASE,
                            format!(
                                "no script defines action '{action_id}'; the element renders without interaction"
                            ),
                        )
                        .at(location),
                    );
                }
            }

            imports.merge(&component.imports());
            state.extend(component.state_decl());
            slots.push(ensure_return(component.render(Some(handlers))));
        }

        if !handlers.is_empty() {
            state.push(StateDecl::new(ACTION_MESSAGE, "string"));
            imports.add("gioui.org/widget/material", "Body1");
            slots.push(feedback_slot());
        }

        let mut builder = CodeBuilder::go();
        builder.emit(&Skeleton {
            imports: &imports,
            window: &window,
            state: &state,
            slots: &slots,
        });

        Ok(CompilationUnit {
            source: builder.build(),
            imports,
            state,
            diagnostics,
        })
    }
}

/// Shows the last action's message below the elements.
fn feedback_slot() -> Vec<CodeFragment> {
    vec![
        CodeFragment::block(
            format!("if {ACTION_MESSAGE} == \"\" {{"),
            vec![CodeFragment::line("return layout.Dimensions{}")],
            Some("}".to_string()),
        ),
        CodeFragment::line(format!(
            "return material.Body1(th, {ACTION_MESSAGE}).Layout(gtx)"
        )),
    ]
}

#[cfg(test)]
mod tests {
    use msg2go_graph::{Element, WindowSpec};

    use super::*;

    fn compose(ui: &UiGraph, handlers: &HandlerMap) -> CompilationUnit {
        Composer::new().compose(ui, handlers).unwrap()
    }

    #[test]
    fn test_no_handlers_no_feedback() {
        let ui = UiGraph::new().element(Element::new("text").with_value("Hello"));
        let unit = compose(&ui, &HandlerMap::new());

        assert!(unit.state().is_empty());
        assert!(!unit.source().contains(ACTION_MESSAGE));
        assert!(!unit.imports().has_package("gioui.org/widget"));
    }

    #[test]
    fn test_feedback_slot_is_last() {
        let ui = UiGraph::new().element(Element::new("button").with_value("Go").with_action("A1"));
        let handlers: HandlerMap = [("A1", r#"actionMessage = "Hi""#)].into_iter().collect();
        let unit = compose(&ui, &handlers);

        let button = unit.source().find("material.Button(").unwrap();
        let feedback = unit.source().find("material.Body1(").unwrap();
        assert!(button < feedback);
        assert_eq!(
            unit.state().last(),
            Some(&StateDecl::new("actionMessage", "string"))
        );
    }

    #[test]
    fn test_unresolved_action_warns() {
        let ui = UiGraph::new().element(Element::new("button").with_value("Go").with_action("X"));
        let unit = compose(&ui, &HandlerMap::new());

        assert!(!unit.source().contains("Clicked"));
        assert_eq!(unit.diagnostics().len(), 1);
        assert_eq!(unit.diagnostics()[0].location.as_deref(), Some("elements[0]"));
    }

    #[test]
    fn test_action_on_display_kind_warns() {
        let ui = UiGraph::new().element(Element::new("text").with_value("x").with_action("A1"));
        let handlers: HandlerMap = [("A1", "actionMessage = \"\"")].into_iter().collect();
        let unit = compose(&ui, &handlers);

        assert!(unit.diagnostics()[0].message.contains("not interactive"));
    }

    #[test]
    fn test_icon_warns() {
        let ui = UiGraph::new().with_window(WindowSpec {
            icon: Some("app.png".into()),
            ..WindowSpec::default()
        });
        let unit = compose(&ui, &HandlerMap::new());
        assert_eq!(unit.diagnostics()[0].location.as_deref(), Some("window.icon"));
    }

    #[test]
    fn test_error_aborts() {
        let ui = UiGraph::new()
            .element(Element::new("text").with_value("ok"))
            .element(Element::new("button"));
        let err = Composer::new().compose(&ui, &HandlerMap::new()).unwrap_err();
        assert_eq!(err.index(), 1);
    }

    #[test]
    fn test_state_in_element_order() {
        let ui = UiGraph::new()
            .element(Element::new("input"))
            .element(Element::new("button").with_value("b"));
        let names: Vec<_> = compose(&ui, &HandlerMap::new())
            .state()
            .iter()
            .map(|decl| decl.name.clone())
            .collect();
        assert_eq!(names, ["input0", "button1"]);
    }
}
