//! Check command report data structures.

use std::path::PathBuf;

use msg2go_codegen::Diagnostic;

use super::{
    output::{Output, Report},
    render_diagnostics,
};

/// Report data from a compile without output.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the UI graph.
    pub ui_path: PathBuf,
    /// Path to the relation graph, if it exists.
    pub relation_path: Option<PathBuf>,
    /// Diagnostics from action resolution and composition.
    pub diagnostics: Vec<Diagnostic>,
    /// Element kinds in rendering order.
    pub elements: Vec<String>,
    /// Resolved action ids.
    pub actions: Vec<String>,
    /// Go packages the program imports.
    pub imports: Vec<String>,
}

impl CheckReport {
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_diagnostics(out, &self.diagnostics);
        if self.warning_count() > 0 {
            out.newline();
        }

        out.preformatted(&format!("✓ {} compiles", self.ui_path.display()));
        match &self.relation_path {
            Some(path) => out.key_value("  relation", &path.display().to_string()),
            None => out.key_value("  relation", "none"),
        }
        out.newline();

        out.section(&format!("  {} element{}", self.elements.len(), plural(self.elements.len())));
        for (index, kind) in self.elements.iter().enumerate() {
            out.list_item(&format!("[{}] {}", index, kind));
        }

        if !self.actions.is_empty() {
            out.newline();
            out.section(&format!("  {} action{}", self.actions.len(), plural(self.actions.len())));
            for action in &self.actions {
                out.list_item(action);
            }
        }

        out.newline();
        out.section("  imports");
        for package in &self.imports {
            out.list_item(package);
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
