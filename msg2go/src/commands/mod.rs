mod actions;
mod bake;
mod check;
mod completions;
mod sources;

use actions::ActionsCommand;
use bake::BakeCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use msg2go_codegen_go::CompileError;

/// Print a miette report and exit with status 1.
fn exit_with(diagnostic: impl miette::Diagnostic + Send + Sync + 'static) -> ! {
    eprintln!("{:?}", miette::Report::new(diagnostic));
    std::process::exit(1);
}

/// Extension trait for exiting on document and compile errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for msg2go_graph::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(*e),
        }
    }
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, CompileError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(e),
        }
    }
}

/// Render compile errors carried inside an eyre report with miette, and
/// pass every other error through.
pub(crate) trait ExitOnCompileError<T> {
    fn exit_on_compile_error(self) -> Result<T>;
}

impl<T> ExitOnCompileError<T> for Result<T> {
    fn exit_on_compile_error(self) -> Result<T> {
        self.map_err(|report| match report.downcast::<CompileError>() {
            Ok(err) => exit_with(err),
            Err(report) => report,
        })
    }
}

#[derive(Parser)]
#[command(name = "msg2go")]
#[command(version)]
#[command(about = "Compile UI and relation graphs into a Gio desktop program")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Actions(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate main.go (and go.mod if missing) from the UI and relation graphs
    Bake(BakeCommand),

    /// Compile the graphs without writing anything
    Check(CheckCommand),

    /// Print the resolved action handlers as JSON
    Actions(ActionsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
