//! Bake operation - Go code generation from the graphs.

use std::path::Path;

use eyre::Result;
use msg2go_codegen_go::{Generator, Roller};
use msg2go_graph::{GoSettings, RelationGraph, UiGraph};

use crate::reports::{BakeReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Settings for the generated go.mod.
    pub go: GoSettings,
}

/// Execute the bake operation.
///
/// Resolves the actions, compiles the UI graph and writes or previews the
/// files. Compile errors stay downcastable to
/// [`CompileError`](msg2go_codegen_go::CompileError).
pub fn bake(ui: &UiGraph, relation: &RelationGraph, opts: BakeOptions) -> Result<BakeReport> {
    let resolution = Roller::new().roll(relation);
    let mut diagnostics = resolution.diagnostics;

    let generator = Generator::new(ui, &resolution.handlers).with_go_settings(opts.go);
    let result = if opts.dry_run {
        let preview = generator.preview()?;
        diagnostics.extend(preview.diagnostics);

        GenerationResult::Preview(PreviewResult {
            files: preview.files,
        })
    } else {
        let generated = generator.generate(opts.output_dir)?;
        diagnostics.extend(generated.diagnostics);

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: generated.written,
            skipped: generated.skipped,
        })
    };

    Ok(BakeReport {
        page: ui.page.clone(),
        element_count: ui.elements.len(),
        handler_count: resolution.handlers.len(),
        diagnostics,
        result,
    })
}
