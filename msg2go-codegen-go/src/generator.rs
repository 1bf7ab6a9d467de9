use std::path::Path;

use eyre::Result;
use msg2go_codegen::Diagnostic;
use msg2go_core::{GeneratedFile, WriteResult};
use msg2go_graph::{GoSettings, UiGraph};

use crate::{
    CompileError, Composer, HandlerMap,
    files::{GoMod, MainGo},
};

/// A file as it would be written, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

/// What [`Generator::preview`] would write.
#[derive(Debug, Default)]
pub struct Preview {
    pub files: Vec<PreviewFile>,
    /// Non-fatal diagnostics of the compilation.
    pub diagnostics: Vec<Diagnostic>,
}

/// What [`Generator::generate`] did.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written, relative to the output directory.
    pub written: Vec<String>,
    /// Files left alone because they already exist.
    pub skipped: Vec<String>,
    /// Non-fatal diagnostics of the compilation.
    pub diagnostics: Vec<Diagnostic>,
}

/// Produces `main.go` and `go.mod` for one UI graph.
pub struct Generator<'a> {
    ui: &'a UiGraph,
    handlers: &'a HandlerMap,
    composer: Composer<'a>,
    go: GoSettings,
}

impl<'a> Generator<'a> {
    pub fn new(ui: &'a UiGraph, handlers: &'a HandlerMap) -> Self {
        Self {
            ui,
            handlers,
            composer: Composer::new(),
            go: GoSettings::default(),
        }
    }

    pub fn with_composer(mut self, composer: Composer<'a>) -> Self {
        self.composer = composer;
        self
    }

    pub fn with_go_settings(mut self, go: GoSettings) -> Self {
        self.go = go;
        self
    }

    /// Render every file without touching the disk.
    pub fn preview(&self) -> Result<Preview, CompileError> {
        let unit = self.composer.compose(self.ui, self.handlers)?;
        let diagnostics = unit.diagnostics().to_vec();

        Ok(Preview {
            files: vec![
                PreviewFile {
                    path: "main.go".to_string(),
                    content: unit.into_source(),
                },
                PreviewFile {
                    path: "go.mod".to_string(),
                    content: GoMod::new(&self.go).render(),
                },
            ],
            diagnostics,
        })
    }

    /// Compile and write the files into `output_dir`.
    ///
    /// The graph is compiled before anything is written, so a compile error
    /// leaves the directory untouched.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let unit = self.composer.compose(self.ui, self.handlers)?;
        let mut result = GenerateResult {
            diagnostics: unit.diagnostics().to_vec(),
            ..GenerateResult::default()
        };

        let files: [(&str, Box<dyn GeneratedFile>); 2] = [
            ("main.go", Box::new(MainGo::new(unit.into_source()))),
            ("go.mod", Box::new(GoMod::new(&self.go))),
        ];
        for (name, file) in files {
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(name.to_string()),
                WriteResult::Skipped => result.skipped.push(name.to_string()),
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use msg2go_graph::Element;
    use tempfile::TempDir;

    use super::*;

    fn ui() -> UiGraph {
        UiGraph::new().element(Element::new("text").with_value("Hello World"))
    }

    #[test]
    fn test_preview_paths() {
        let ui = ui();
        let handlers = HandlerMap::new();
        let preview = Generator::new(&ui, &handlers).preview().unwrap();
        let paths: Vec<_> = preview.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["main.go", "go.mod"]);
    }

    #[test]
    fn test_generate_then_regenerate() {
        let dir = TempDir::new().unwrap();
        let ui = ui();
        let handlers = HandlerMap::new();
        let generator = Generator::new(&ui, &handlers);

        let first = generator.generate(dir.path()).unwrap();
        assert_eq!(first.written, ["main.go", "go.mod"]);

        let second = generator.generate(dir.path()).unwrap();
        assert_eq!(second.written, ["main.go"]);
        assert_eq!(second.skipped, ["go.mod"]);
    }

    #[test]
    fn test_compile_error_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let ui = UiGraph::new().element(Element::new("unknown_widget"));
        let handlers = HandlerMap::new();

        assert!(Generator::new(&ui, &handlers).generate(dir.path()).is_err());
        assert!(!dir.path().join("main.go").exists());
        assert!(!dir.path().join("go.mod").exists());
    }

    #[test]
    fn test_go_settings() {
        let ui = ui();
        let handlers = HandlerMap::new();
        let settings = GoSettings {
            module: "example.com/hello".into(),
            ..GoSettings::default()
        };
        let preview = Generator::new(&ui, &handlers)
            .with_go_settings(settings)
            .preview()
            .unwrap();
        assert!(preview.files[1].content.starts_with("module example.com/hello\n"));
    }
}
