//! Action resolution.
//!
//! The roller walks the relation graph in document order and turns every
//! script it can interpret into a handler fragment. Scripts it cannot
//! interpret are reported as diagnostics and skipped.

use msg2go_codegen::Diagnostic;
use msg2go_graph::RelationGraph;

use crate::{
    HandlerMap,
    responses::{ResponseRegistry, ResponseSpec, show_text},
};

const PHASE: &str = "roll";

/// Output of [`Roller::roll`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    pub handlers: HandlerMap,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves a relation graph into a [`HandlerMap`].
#[derive(Debug, Clone, Copy)]
pub struct Roller<'a> {
    registry: &'a ResponseRegistry,
}

impl Default for Roller<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Roller<'static> {
    /// A roller using the built-in response kinds.
    pub fn new() -> Self {
        Self {
            registry: ResponseRegistry::builtin(),
        }
    }
}

impl<'a> Roller<'a> {
    pub fn with_registry(registry: &'a ResponseRegistry) -> Self {
        Self { registry }
    }

    pub fn roll(&self, graph: &RelationGraph) -> Resolution {
        let mut resolution = Resolution::default();

        for (index, script) in graph.scripts.iter().enumerate() {
            let location = format!("scripts[{index}]");

            let Some(action_id) = script.action_id() else {
                resolution.diagnostics.push(
                    Diagnostic::warning(PHASE, "script has no action_id and was skipped")
                        .at(location),
                );
                continue;
            };

            let Some(spec) = script.response.as_ref().and_then(ResponseSpec::normalize) else {
                resolution.diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!("response for action '{action_id}' is not a string or a map"),
                    )
                    .at(location),
                );
                continue;
            };

            let Some(fragment) = self.dispatch(&spec, action_id, &location, &mut resolution.diagnostics)
            else {
                continue;
            };

            if resolution.handlers.insert(action_id, fragment).is_some() {
                resolution.diagnostics.push(
                    Diagnostic::info(
                        PHASE,
                        format!("action '{action_id}' is redefined; the later script wins"),
                    )
                    .at(location),
                );
            }
        }

        resolution
    }

    fn dispatch(
        &self,
        spec: &ResponseSpec,
        action_id: &str,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<String> {
        if let Some(handler) = self.registry.get(spec.kind()) {
            let fragment = handler(spec);
            if fragment.is_none() {
                diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!(
                            "'{}' response for action '{action_id}' is missing its payload",
                            spec.kind()
                        ),
                    )
                    .at(location),
                );
            }
            return fragment;
        }

        if spec.free_text().is_some() {
            diagnostics.push(
                Diagnostic::warning(
                    PHASE,
                    format!(
                        "unknown response kind '{}' for action '{action_id}'; showing its text",
                        spec.kind()
                    ),
                )
                .at(location),
            );
            return show_text(spec);
        }

        diagnostics.push(
            Diagnostic::warning(
                PHASE,
                format!(
                    "unknown response kind '{}' for action '{action_id}' has no text to show",
                    spec.kind()
                ),
            )
            .at(location),
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use msg2go_codegen::Severity;
    use msg2go_graph::Script;
    use serde_json::json;

    use super::*;

    fn roll(graph: &RelationGraph) -> Resolution {
        Roller::new().roll(graph)
    }

    #[test]
    fn test_string_response() {
        let graph = RelationGraph::new().script(Script::new("A1", "Hi"));
        let resolution = roll(&graph);
        assert_eq!(resolution.handlers.get("A1"), Some(r#"actionMessage = "Hi""#));
        assert!(resolution.diagnostics.is_empty());
    }

    #[test]
    fn test_last_script_wins() {
        let graph = RelationGraph::new()
            .script(Script::new("A2", json!({"kind": "show_text", "msg": "first"})))
            .script(Script::new("A2", json!({"kind": "show_text", "msg": "second"})));
        let resolution = roll(&graph);

        assert_eq!(resolution.handlers.len(), 1);
        assert_eq!(
            resolution.handlers.get("A2"),
            Some(r#"actionMessage = "second""#)
        );
        assert_eq!(resolution.diagnostics.len(), 1);
        assert_eq!(resolution.diagnostics[0].severity, Severity::Info);
        assert_eq!(resolution.diagnostics[0].location.as_deref(), Some("scripts[1]"));
    }

    #[test]
    fn test_missing_action_id_is_skipped() {
        let graph = RelationGraph {
            scripts: vec![
                Script {
                    action_id: None,
                    response: Some(json!("lost")),
                },
                Script {
                    action_id: Some(json!("")),
                    response: Some(json!("lost too")),
                },
            ],
        };
        let resolution = roll(&graph);
        assert!(resolution.handlers.is_empty());
        assert_eq!(resolution.diagnostics.len(), 2);
        assert!(resolution.diagnostics.iter().all(|d| d.severity.is_warning()));
    }

    #[test]
    fn test_mixed_validity_scripts() {
        let graph = RelationGraph::from_json(
            r#"{"scripts": [
                {"action_id": 7, "response": "x"},
                {"action_id": "A1", "response": "Hi"}
            ]}"#,
        )
        .unwrap();
        let resolution = roll(&graph);

        assert_eq!(resolution.handlers.len(), 1);
        assert_eq!(resolution.handlers.get("A1"), Some(r#"actionMessage = "Hi""#));
        assert_eq!(resolution.diagnostics.len(), 1);
        assert!(resolution.diagnostics[0].severity.is_warning());
        assert_eq!(resolution.diagnostics[0].location.as_deref(), Some("scripts[0]"));
    }

    #[test]
    fn test_uninterpretable_response_keeps_earlier_handler() {
        let graph = RelationGraph::new()
            .script(Script::new("A1", "kept"))
            .script(Script::new("A1", json!(42)));
        let resolution = roll(&graph);
        assert_eq!(resolution.handlers.get("A1"), Some(r#"actionMessage = "kept""#));
        assert_eq!(resolution.diagnostics.len(), 1);
        assert!(resolution.diagnostics[0].severity.is_warning());
    }

    #[test]
    fn test_missing_response() {
        let graph = RelationGraph {
            scripts: vec![Script {
                action_id: Some("A1".into()),
                response: None,
            }],
        };
        let resolution = roll(&graph);
        assert!(resolution.handlers.is_empty());
        assert_eq!(resolution.diagnostics.len(), 1);
    }

    #[test]
    fn test_unknown_kind_falls_back_to_text() {
        let graph = RelationGraph::new()
            .script(Script::new("A1", json!({"kind": "toast", "message": "Saved"})));
        let resolution = roll(&graph);
        assert_eq!(resolution.handlers.get("A1"), Some(r#"actionMessage = "Saved""#));
        assert!(resolution.diagnostics[0].severity.is_warning());
    }

    #[test]
    fn test_unknown_kind_without_text() {
        let graph = RelationGraph::new()
            .script(Script::new("A1", json!({"kind": "vibrate", "ms": 200})));
        let resolution = roll(&graph);
        assert!(!resolution.handlers.contains("A1"));
        assert_eq!(resolution.diagnostics.len(), 1);
    }

    #[test]
    fn test_navigate_without_target() {
        let graph = RelationGraph::new().script(Script::new("A1", json!({"kind": "navigate"})));
        let resolution = roll(&graph);
        assert!(resolution.handlers.is_empty());
        assert!(resolution.diagnostics[0].message.contains("missing its payload"));
    }

    #[test]
    fn test_handlers_keep_first_definition_order() {
        let graph = RelationGraph::new()
            .script(Script::new("B", "b"))
            .script(Script::new("A", "a"))
            .script(Script::new("B", "b2"));
        let ids: Vec<_> = roll(&graph).handlers.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, ["B", "A"]);
    }

    #[test]
    fn test_custom_registry() {
        fn beep(_: &ResponseSpec) -> Option<String> {
            Some("beep()".to_string())
        }
        let registry = ResponseRegistry::empty().register("beep", beep);
        let graph = RelationGraph::new().script(Script::new("A1", json!({"kind": "beep"})));
        let resolution = Roller::with_registry(&registry).roll(&graph);
        assert_eq!(resolution.handlers.get("A1"), Some("beep()"));
    }
}
