use std::path::{Path, PathBuf};

use msg2go_core::{FileRules, GeneratedFile, Overwrite};

/// The generated program; replaced on every run.
pub struct MainGo {
    pub source: String,
}

impl MainGo {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl GeneratedFile for MainGo {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("main.go")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::Always,
        }
    }

    fn render(&self) -> String {
        self.source.clone()
    }
}
