use std::path::PathBuf;

use clap::Args;
use msg2go_graph::{Document, ProjectConfig, RelationGraph, UiGraph};

use super::UnwrapOrExit;

/// Where the graphs come from: `msg2go.toml` plus per-run overrides.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to msg2go.toml (defaults to ./msg2go.toml; optional)
    #[arg(short, long, default_value = "msg2go.toml")]
    pub config: PathBuf,

    /// UI graph document, .json or .toml (overrides msg2go.toml)
    #[arg(long)]
    pub ui: Option<PathBuf>,

    /// Relation graph document, .json or .toml (overrides msg2go.toml)
    #[arg(long)]
    pub relation: Option<PathBuf>,
}

/// The loaded project and its documents.
pub struct Sources {
    pub project: ProjectConfig,
    pub ui: Document<UiGraph>,
    /// `None` when the relation document does not exist yet.
    pub relation: Option<Document<RelationGraph>>,
}

impl Sources {
    pub fn relation_graph(&self) -> RelationGraph {
        self.relation
            .as_ref()
            .map(|doc| doc.value().clone())
            .unwrap_or_default()
    }
}

impl SourceArgs {
    /// The project config with command-line overrides applied.
    pub fn project(&self) -> ProjectConfig {
        let mut project = ProjectConfig::load(&self.config).unwrap_or_exit();
        if let Some(ui) = &self.ui {
            project.paths.ui = ui.clone();
        }
        if let Some(relation) = &self.relation {
            project.paths.relation = relation.clone();
        }
        project
    }

    /// Load the config and both documents, exiting with a report on failure.
    pub fn load(&self) -> Sources {
        let project = self.project();
        let ui = Document::<UiGraph>::open(&project.paths.ui).unwrap_or_exit();
        let relation = Document::<RelationGraph>::open_optional(&project.paths.relation).unwrap_or_exit();

        Sources {
            project,
            ui,
            relation,
        }
    }
}
