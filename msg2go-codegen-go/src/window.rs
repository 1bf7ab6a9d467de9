//! Window derivation.
//!
//! The window is always materialized, even when the UI graph has no window
//! section: missing fields fall back to defaults so the generated program
//! stays launchable.

use std::path::PathBuf;

use msg2go_codegen::ImportSet;
use msg2go_core::go_string_literal;
use msg2go_graph::WindowSpec;

/// Title used when the window section has none.
pub const DEFAULT_TITLE: &str = "Untitled";
/// Window width in dp used when none is given.
pub const DEFAULT_WIDTH: u32 = 800;
/// Window height in dp used when none is given.
pub const DEFAULT_HEIGHT: u32 = 600;

/// One `app.Option` passed to `w.Option(...)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowOption {
    Title(String),
    Size(u32, u32),
    MinSize(u32, u32),
    MaxSize(u32, u32),
    Fullscreen,
}

impl WindowOption {
    /// The Go expression for this option.
    pub fn to_go(&self) -> String {
        match self {
            WindowOption::Title(title) => format!("app.Title({})", go_string_literal(title)),
            WindowOption::Size(w, h) => format!("app.Size({})", dims(*w, *h)),
            WindowOption::MinSize(w, h) => format!("app.MinSize({})", dims(*w, *h)),
            WindowOption::MaxSize(w, h) => format!("app.MaxSize({})", dims(*w, *h)),
            WindowOption::Fullscreen => "app.Fullscreen.Option()".to_string(),
        }
    }

    fn symbol(&self) -> &'static str {
        match self {
            WindowOption::Title(_) => "Title",
            WindowOption::Size(..) => "Size",
            WindowOption::MinSize(..) => "MinSize",
            WindowOption::MaxSize(..) => "MaxSize",
            WindowOption::Fullscreen => "Fullscreen",
        }
    }

    fn uses_dp(&self) -> bool {
        matches!(
            self,
            WindowOption::Size(..) | WindowOption::MinSize(..) | WindowOption::MaxSize(..)
        )
    }
}

fn dims(w: u32, h: u32) -> String {
    format!("unit.Dp({w}), unit.Dp({h})")
}

/// The window option list derived from an optional [`WindowSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    options: Vec<WindowOption>,
    icon: Option<PathBuf>,
}

impl Window {
    /// Derive the option list, filling every missing field with its default.
    pub fn derive(spec: Option<&WindowSpec>) -> Self {
        let default = WindowSpec::default();
        let spec = spec.unwrap_or(&default);

        let title = spec
            .title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let mut options = vec![
            WindowOption::Title(title),
            WindowOption::Size(
                spec.width.filter(|w| *w > 0).unwrap_or(DEFAULT_WIDTH),
                spec.height.filter(|h| *h > 0).unwrap_or(DEFAULT_HEIGHT),
            ),
        ];
        if let Some(min) = spec.min_size {
            let (w, h) = min.dims();
            options.push(WindowOption::MinSize(w, h));
        }
        if let Some(max) = spec.max_size {
            let (w, h) = max.dims();
            options.push(WindowOption::MaxSize(w, h));
        }
        if spec.fullscreen == Some(true) {
            options.push(WindowOption::Fullscreen);
        }

        Self {
            options,
            icon: spec.icon.clone(),
        }
    }

    pub fn options(&self) -> &[WindowOption] {
        &self.options
    }

    /// The icon requested by the document; Gio window options cannot set it.
    pub fn icon(&self) -> Option<&PathBuf> {
        self.icon.as_ref()
    }

    pub fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        imports.add("gioui.org/app", "Window");
        for option in &self.options {
            imports.add("gioui.org/app", option.symbol());
            if option.uses_dp() {
                imports.add("gioui.org/unit", "Dp");
            }
        }
        imports
    }
}
