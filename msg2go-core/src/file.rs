use std::path::{Path, PathBuf};

use eyre::Result;

/// A file produced by the generator (e.g. `main.go`, `go.mod`).
pub trait GeneratedFile {
    /// Path of the file relative to the output directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, honouring its overwrite rule
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);

        match self.rules().overwrite {
            Overwrite::Always => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfMissing if path.exists() => Ok(WriteResult::Skipped),
            Overwrite::IfMissing => {
                write_file(&path, &self.render())?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was left untouched because it already exists
    Skipped,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated source)
    #[default]
    Always,
    /// Only create the file if it does not exist (dependency manifests)
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Note {
        name: &'static str,
        body: &'static str,
        overwrite: Overwrite,
    }

    impl GeneratedFile for Note {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("nested").join(self.name)
        }

        fn rules(&self) -> FileRules {
            FileRules {
                overwrite: self.overwrite,
            }
        }

        fn render(&self) -> String {
            self.body.to_string()
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "main.go",
            body: "package main\n",
            overwrite: Overwrite::Always,
        };

        assert_eq!(note.write(temp.path()).unwrap(), WriteResult::Written);
        let written = fs::read_to_string(temp.path().join("nested/main.go")).unwrap();
        assert_eq!(written, "package main\n");
    }

    #[test]
    fn test_always_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/main.go"), "stale").unwrap();

        let note = Note {
            name: "main.go",
            body: "fresh",
            overwrite: Overwrite::Always,
        };

        assert_eq!(note.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("nested/main.go")).unwrap(),
            "fresh"
        );
    }

    #[test]
    fn test_if_missing_keeps_existing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("nested/go.mod"), "module custom\n").unwrap();

        let note = Note {
            name: "go.mod",
            body: "module gio.test\n",
            overwrite: Overwrite::IfMissing,
        };

        assert_eq!(note.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(
            fs::read_to_string(temp.path().join("nested/go.mod")).unwrap(),
            "module custom\n"
        );
    }

    #[test]
    fn test_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let note = Note {
            name: "go.mod",
            body: "module gio.test\n",
            overwrite: Overwrite::IfMissing,
        };

        assert_eq!(note.write(temp.path()).unwrap(), WriteResult::Written);
        assert!(temp.path().join("nested/go.mod").exists());
    }
}
