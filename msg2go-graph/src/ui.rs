//! UI graph: the window and the ordered elements it displays.

use std::{collections::BTreeMap, path::PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Page name used when a document does not specify one.
pub const DEFAULT_PAGE: &str = "main";

fn default_page() -> String {
    DEFAULT_PAGE.to_string()
}

/// Ordered description of what is displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiGraph {
    #[serde(default = "default_page")]
    pub page: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowSpec>,
    /// Elements in rendering order.
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Default for UiGraph {
    fn default() -> Self {
        Self {
            page: default_page(),
            window: None,
            elements: Vec::new(),
        }
    }
}

impl UiGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: WindowSpec) -> Self {
        self.window = Some(window);
        self
    }

    pub fn element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Parse a UI graph from JSON text.
    pub fn from_json(content: &str) -> crate::Result<Self> {
        crate::document::parse(content, "ui.json", crate::Format::Json)
    }

    /// Parse a UI graph from TOML text.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        crate::document::parse(content, "ui.toml", crate::Format::Toml)
    }
}

/// Window configuration. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<SizeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<SizeSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,
}

/// A size constraint in device-independent pixels.
///
/// Accepts `400` (square), `[400, 300]` or `{ width = 400, height = 300 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Uniform(u32),
    Pair([u32; 2]),
    Dims { width: u32, height: u32 },
}

impl SizeSpec {
    /// Width and height of this constraint.
    pub fn dims(&self) -> (u32, u32) {
        match *self {
            SizeSpec::Uniform(side) => (side, side),
            SizeSpec::Pair([width, height]) => (width, height),
            SizeSpec::Dims { width, height } => (width, height),
        }
    }
}

/// One visual or interactive element.
///
/// `kind` selects the translator, with the legacy `type` key used only when
/// `kind` is absent. Anything besides `kind`, `value` and `action_id` is kept
/// in [`Element::fields`] for kind-specific options.
///
/// `value` and `action_id` are kept as raw data: a mistyped value is
/// reported by the translator, and a mistyped action id reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub legacy_kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<Value>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Element {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(Value::String(value.into()));
        self
    }

    pub fn with_action(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(Value::String(action_id.into()));
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The kind tag, if present and non-blank.
    pub fn kind(&self) -> Option<&str> {
        let non_blank = |k: &&str| !k.trim().is_empty();
        self.kind
            .as_deref()
            .filter(non_blank)
            .or_else(|| self.legacy_kind.as_deref().filter(non_blank))
    }

    /// The raw `value`, if present and not null.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref().filter(|v| !v.is_null())
    }

    /// The action id, if it is a non-empty string.
    pub fn action_id(&self) -> Option<&str> {
        self.action_id
            .as_ref()
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// A kind-specific field.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }
}
