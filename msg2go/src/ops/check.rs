//! Check operation - compile the graphs without writing anything.

use std::path::PathBuf;

use msg2go_codegen_go::{CompileError, Composer, Roller};
use msg2go_graph::{RelationGraph, UiGraph};

use crate::reports::CheckReport;

/// Compile the graphs and summarize what the program would contain.
pub fn check(
    ui: &UiGraph,
    ui_path: PathBuf,
    relation: &RelationGraph,
    relation_path: Option<PathBuf>,
) -> Result<CheckReport, CompileError> {
    let resolution = Roller::new().roll(relation);
    let unit = Composer::new().compose(ui, &resolution.handlers)?;

    let mut diagnostics = resolution.diagnostics;
    diagnostics.extend_from_slice(unit.diagnostics());

    Ok(CheckReport {
        ui_path,
        relation_path,
        diagnostics,
        elements: ui
            .elements
            .iter()
            .map(|e| e.kind().unwrap_or_default().to_string())
            .collect(),
        actions: resolution
            .handlers
            .iter()
            .map(|(id, _)| id.to_string())
            .collect(),
        imports: unit
            .imports()
            .sorted()
            .map(|(package, _)| package.to_string())
            .collect(),
    })
}
