use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use msg2go_codegen::Severity;
use msg2go_codegen_go::Roller;
use msg2go_graph::{Document, ProjectConfig, RelationGraph};

use super::UnwrapOrExit;
use crate::reports::{TerminalOutput, render_diagnostics};

#[derive(Args)]
pub struct ActionsCommand {
    /// Path to msg2go.toml (defaults to ./msg2go.toml; optional)
    #[arg(short, long, default_value = "msg2go.toml")]
    pub config: PathBuf,

    /// Relation graph document (overrides msg2go.toml)
    #[arg(long)]
    pub relation: Option<PathBuf>,
}

impl ActionsCommand {
    /// Print the handler map as JSON; warnings go to stderr
    pub fn run(&self) -> Result<()> {
        let path = match &self.relation {
            Some(path) => path.clone(),
            None => ProjectConfig::load(&self.config).unwrap_or_exit().paths.relation,
        };
        let relation = Document::<RelationGraph>::open(&path).unwrap_or_exit();

        let resolution = Roller::new().roll(relation.value());

        let warnings: Vec<_> = resolution
            .diagnostics
            .iter()
            .filter(|d| d.severity != Severity::Info)
            .cloned()
            .collect();
        render_diagnostics(&mut TerminalOutput, &warnings);

        let json = serde_json::to_string_pretty(&resolution.handlers)
            .wrap_err("Failed to serialize handlers")?;
        println!("{}", json);
        Ok(())
    }
}
