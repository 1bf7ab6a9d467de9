//! `msg2go.toml` project configuration.
//!
//! Every key is optional; a missing file is equivalent to an empty one.
//!
//! ```toml
//! [go]
//! module = "example.com/hello"
//! go_version = "1.24.9"
//! gio_version = "v0.9.0"
//!
//! [paths]
//! ui = "autosave/ui/main.json"
//! relation = "autosave/relation/main.json"
//! output = "build"
//! ```

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{Error, Format, Result, document::parse};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub go: GoSettings,
    #[serde(default)]
    pub paths: PathSettings,
}

/// Settings for the generated `go.mod`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GoSettings {
    /// Module path of the generated program.
    pub module: String,
    /// `go` directive of the generated module.
    pub go_version: String,
    /// Required version of `gioui.org`.
    pub gio_version: String,
}

impl Default for GoSettings {
    fn default() -> Self {
        Self {
            module: "gio.test".to_string(),
            go_version: "1.24.9".to_string(),
            gio_version: "v0.9.0".to_string(),
        }
    }
}

/// Where documents are read from and output is written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathSettings {
    pub ui: PathBuf,
    pub relation: PathBuf,
    pub output: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            ui: PathBuf::from("ui/main.json"),
            relation: PathBuf::from("relation/main.json"),
            output: PathBuf::from("build"),
        }
    }
}

impl ProjectConfig {
    /// Load a config file, falling back to defaults when it does not exist.
    ///
    /// Relative paths inside the file are resolved against its directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let config: Self = parse(&content, &path.display().to_string(), Format::Toml)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    fn relative_to(mut self, base: &Path) -> Self {
        for p in [
            &mut self.paths.ui,
            &mut self.paths.relation,
            &mut self.paths.output,
        ] {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
        self
    }
}

impl FromStr for ProjectConfig {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse(s, "msg2go.toml", Format::Toml)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ProjectConfig::from_str("").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.go.module, "gio.test");
        assert_eq!(config.paths.output, PathBuf::from("build"));
    }

    #[test]
    fn test_partial_go_section() {
        let config = ProjectConfig::from_str(
            r#"
            [go]
            module = "example.com/hello"
            "#,
        )
        .unwrap();

        assert_eq!(config.go.module, "example.com/hello");
        assert_eq!(config.go.gio_version, "v0.9.0");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ProjectConfig::from_str("[go]\nmodul = \"typo\"\n").unwrap_err();
        assert!(matches!(*err, Error::Toml { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig::load(temp.path().join("msg2go.toml")).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("msg2go.toml");
        std::fs::write(&path, "[paths]\nui = \"screens/home.toml\"\n").unwrap();

        let config = ProjectConfig::load(&path).unwrap();
        assert_eq!(config.paths.ui, temp.path().join("screens/home.toml"));
        assert_eq!(config.paths.output, temp.path().join("build"));
    }
}
