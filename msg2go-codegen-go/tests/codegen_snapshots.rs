//! Snapshot tests for Go code generation.
//!
//! These tests verify that the generated Go code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use msg2go_codegen_go::{Generator, HandlerMap, resolve_actions};
use msg2go_graph::{RelationGraph, UiGraph};

/// Generate files from JSON documents, keyed by path.
fn generate_files(ui_json: &str, relation_json: &str) -> Vec<(String, String)> {
    let ui = UiGraph::from_json(ui_json).expect("Failed to parse UI graph");
    let relation = RelationGraph::from_json(relation_json).expect("Failed to parse relation graph");
    let handlers: HandlerMap = resolve_actions(&relation);

    Generator::new(&ui, &handlers)
        .preview()
        .expect("Failed to compile")
        .files
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_single_text_main() {
    let files = generate_files(
        r#"{
            "window": {"title": "Hello"},
            "elements": [{"kind": "text", "value": "Hello World"}]
        }"#,
        r#"{"scripts": []}"#,
    );

    let main_go = get_file(&files, "main.go").expect("main.go not found");
    insta::assert_snapshot!("single_text_main", main_go);
}

#[test]
fn test_button_with_handler_main() {
    let files = generate_files(
        r#"{
            "elements": [{"type": "button", "value": "Click Me", "action_id": "A1"}]
        }"#,
        r#"{"scripts": [{"action_id": "A1", "response": {"kind": "show_text", "msg": "Hi"}}]}"#,
    );

    let main_go = get_file(&files, "main.go").expect("main.go not found");
    insta::assert_snapshot!("button_with_handler_main", main_go);
}

#[test]
fn test_full_window_main() {
    let files = generate_files(
        r#"{
            "page": "settings",
            "window": {
                "title": "Settings",
                "width": 1024,
                "height": 768,
                "min_size": [640, 480],
                "max_size": {"width": 1920, "height": 1080},
                "fullscreen": false
            },
            "elements": [
                {"kind": "heading", "value": "Preferences", "level": 2},
                {"kind": "input", "value": "Your name"},
                {"kind": "text", "value": "Saved \"automatically\"", "size": 12}
            ]
        }"#,
        r#"{}"#,
    );

    let main_go = get_file(&files, "main.go").expect("main.go not found");
    insta::assert_snapshot!("full_window_main", main_go);
}

#[test]
fn test_default_go_mod() {
    let files = generate_files(r#"{"elements": []}"#, r#"{}"#);

    let go_mod = get_file(&files, "go.mod").expect("go.mod not found");
    insta::assert_snapshot!("default_go_mod", go_mod);
}
