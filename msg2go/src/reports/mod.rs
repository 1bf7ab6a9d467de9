//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod output;

pub use bake::{BakeReport, GenerationResult, PreviewResult, WrittenResult};
pub use check::CheckReport;
use msg2go_codegen::{Diagnostic, Severity};
use output::Output;
pub use output::{Report, TerminalOutput};

/// Render diagnostics grouped by severity, errors first.
pub fn render_diagnostics(out: &mut dyn Output, diagnostics: &[Diagnostic]) {
    for severity in [Severity::Error, Severity::Warning, Severity::Info] {
        for diag in diagnostics.iter().filter(|d| d.severity == severity) {
            let text = match &diag.location {
                Some(loc) => format!("{} (at {})", diag.message, loc),
                None => diag.message.clone(),
            };
            match severity {
                Severity::Error => out.error(&text),
                Severity::Warning => out.warning(&text),
                Severity::Info => out.info(&text),
            }
        }
    }
}
