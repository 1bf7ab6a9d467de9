use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{ExitOnCompileError, sources::SourceArgs};
use crate::{
    ops::{self, BakeOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct BakeCommand {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output directory (overrides msg2go.toml; defaults to ./build)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let sources = self.sources.load();
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| sources.project.paths.output.clone());

        let report = ops::bake(
            sources.ui.value(),
            &sources.relation_graph(),
            BakeOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                go: sources.project.go.clone(),
            },
        )
        .exit_on_compile_error()?;

        report.render(&mut TerminalOutput);
        Ok(())
    }
}
