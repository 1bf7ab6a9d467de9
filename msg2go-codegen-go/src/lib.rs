//! Go (Gio) backend for msg2go.
//!
//! Compiles a [`UiGraph`] and a [`RelationGraph`] into a single `main.go`:
//!
//! 1. the [`Roller`] resolves the relation graph into a [`HandlerMap`]
//! 2. the [`Composer`] instantiates a translator for every element through
//!    the [`ComponentRegistry`], binds handlers and assembles the program
//! 3. the [`Generator`] writes `main.go` and, if missing, `go.mod`
//!
//! ```
//! use msg2go_codegen_go::{compile, resolve_actions};
//! use msg2go_graph::{Element, RelationGraph, Script, UiGraph};
//!
//! let ui = UiGraph::new().element(Element::new("button").with_value("Greet").with_action("A1"));
//! let relation = RelationGraph::new().script(Script::new("A1", "Hi"));
//!
//! let source = compile(&ui, &resolve_actions(&relation)).unwrap();
//! assert!(source.contains("if button0.Clicked(gtx) {"));
//! ```

pub mod components;
mod composer;
mod error;
pub mod files;
mod generator;
mod handlers;
pub mod responses;
mod roller;
mod skeleton;
mod window;

pub use components::{Component, ComponentRegistry, FromSpec, StateDecl};
pub use composer::{CompilationUnit, Composer};
pub use error::CompileError;
pub use generator::{GenerateResult, Generator, Preview, PreviewFile};
pub use handlers::HandlerMap;
use msg2go_graph::{RelationGraph, UiGraph};
pub use responses::{ResponseRegistry, ResponseSpec};
pub use roller::{Resolution, Roller};
pub use window::{Window, WindowOption};

/// Compile a UI graph on its own; every element renders without interaction.
pub fn compile_ui(ui: &UiGraph) -> Result<String, CompileError> {
    compile(ui, &HandlerMap::new())
}

/// Resolve a relation graph with the built-in response kinds, dropping
/// diagnostics.
pub fn resolve_actions(relation: &RelationGraph) -> HandlerMap {
    Roller::new().roll(relation).handlers
}

/// Compile a UI graph against an already resolved handler map.
pub fn compile(ui: &UiGraph, handlers: &HandlerMap) -> Result<String, CompileError> {
    Composer::new()
        .compose(ui, handlers)
        .map(CompilationUnit::into_source)
}
