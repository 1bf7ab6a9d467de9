use clap::Args;
use eyre::Result;

use super::{UnwrapOrExit, sources::SourceArgs};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub sources: SourceArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let sources = self.sources.load();

        let report = ops::check(
            sources.ui.value(),
            sources.ui.path().to_path_buf(),
            &sources.relation_graph(),
            sources.relation.as_ref().map(|doc| doc.path().to_path_buf()),
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput);
        Ok(())
    }
}
