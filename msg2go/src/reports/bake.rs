//! Bake command report data structures.

use std::path::PathBuf;

use msg2go_codegen::Diagnostic;
use msg2go_codegen_go::PreviewFile;

use super::{
    output::{Output, Report},
    render_diagnostics,
};

/// Report data from code generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Page name of the UI graph.
    pub page: String,

    /// Number of elements laid out.
    pub element_count: usize,

    /// Number of resolved action handlers.
    pub handler_count: usize,

    /// Diagnostics from action resolution and composition.
    pub diagnostics: Vec<Diagnostic>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files written.
    pub written: Vec<String>,
    /// Files that already existed and were kept.
    pub skipped: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Page", &self.page);
        out.key_value("Elements", &self.element_count.to_string());
        out.key_value("Actions", &self.handler_count.to_string());
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for file in &written.written {
            out.added_item(file);
        }
        for file in &written.skipped {
            out.kept_item(&format!("{} (exists, kept)", file));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
