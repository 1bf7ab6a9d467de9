use std::path::{Path, PathBuf};

use msg2go_core::{FileRules, GeneratedFile, Overwrite};
use msg2go_graph::GoSettings;

/// Gio release whose transitive requirements are pinned below.
const PINNED_GIO: &str = "v0.9.0";

/// Indirect requirements of `gioui.org` at [`PINNED_GIO`].
const PINNED_INDIRECT: &[(&str, &str)] = &[
    ("gioui.org/shader", "v1.0.8"),
    ("github.com/go-text/typesetting", "v0.3.0"),
    ("golang.org/x/exp/shiny", "v0.0.0-20250408133849-7e4ce0ab07d0"),
    ("golang.org/x/image", "v0.26.0"),
    ("golang.org/x/sys", "v0.33.0"),
    ("golang.org/x/text", "v0.24.0"),
];

/// The Go module manifest (user-editable, only created if missing).
pub struct GoMod {
    pub module: String,
    pub go_version: String,
    pub gio_version: String,
}

impl GoMod {
    pub fn new(settings: &GoSettings) -> Self {
        Self {
            module: settings.module.clone(),
            go_version: settings.go_version.clone(),
            gio_version: settings.gio_version.clone(),
        }
    }
}

impl GeneratedFile for GoMod {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("go.mod")
    }

    fn rules(&self) -> FileRules {
        FileRules {
            overwrite: Overwrite::IfMissing,
        }
    }

    fn render(&self) -> String {
        let mut out = format!(
            "module {}\n\ngo {}\n\nrequire gioui.org {}\n",
            self.module, self.go_version, self.gio_version
        );

        if self.gio_version == PINNED_GIO {
            out.push_str("\nrequire (\n");
            for (path, version) in PINNED_INDIRECT {
                out.push_str(&format!("\t{path} {version} // indirect\n"));
            }
            out.push_str(")\n");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_default_settings_pin_indirect() {
        let content = GoMod::new(&GoSettings::default()).render();
        assert!(content.starts_with("module gio.test\n\ngo 1.24.9\n\nrequire gioui.org v0.9.0\n"));
        assert!(content.contains("\tgioui.org/shader v1.0.8 // indirect\n"));
        assert!(content.ends_with("\tgolang.org/x/text v0.24.0 // indirect\n)\n"));
    }

    #[test]
    fn test_other_gio_version() {
        let settings = GoSettings {
            module: "example.com/app".into(),
            go_version: "1.23".into(),
            gio_version: "v0.8.0".into(),
        };
        assert_eq!(
            GoMod::new(&settings).render(),
            "module example.com/app\n\ngo 1.23\n\nrequire gioui.org v0.8.0\n"
        );
    }

    #[test]
    fn test_existing_go_mod_is_kept() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("go.mod"), "module mine\n").unwrap();

        let result = GoMod::new(&GoSettings::default()).write(dir.path()).unwrap();
        assert_eq!(result, msg2go_core::WriteResult::Skipped);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("go.mod")).unwrap(),
            "module mine\n"
        );
    }
}
