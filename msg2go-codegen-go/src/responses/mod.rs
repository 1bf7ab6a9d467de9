//! Response kinds.
//!
//! A script's response is normalized into a [`ResponseSpec`] and dispatched by
//! its kind tag to a [`ResponseFn`] that yields the Go handler fragment.
//! Response kinds are registered independently of element kinds.

mod message;

use std::sync::LazyLock;

use indexmap::IndexMap;
pub use message::{ACTION_MESSAGE, navigate, pop_msg, show_text};
use serde_json::{Map, Value};

/// Kind assumed for structured responses without a tag.
pub const DEFAULT_KIND: &str = "show_text";

/// Fields searched, in order, for a response's free text.
pub const FREE_TEXT_FIELDS: [&str; 4] = ["msg", "message", "text", "value"];

/// Produces a handler fragment, or `None` when the response carries nothing
/// usable.
pub type ResponseFn = fn(&ResponseSpec) -> Option<String>;

static BUILTIN: LazyLock<ResponseRegistry> = LazyLock::new(ResponseRegistry::with_builtins);

/// A response normalized to a kind tag plus its payload fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSpec {
    kind: String,
    fields: Map<String, Value>,
}

impl ResponseSpec {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Normalize a raw response.
    ///
    /// A bare string becomes `show_text` with the string as `msg`. A map takes
    /// its tag from `kind` (or `type`) and defaults to `show_text`. Anything
    /// else cannot be interpreted.
    pub fn normalize(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(msg) => Some(Self::new(DEFAULT_KIND).with_field("msg", msg.as_str())),
            Value::Object(map) => {
                let mut fields = map.clone();
                let kind = ["kind", "type"]
                    .iter()
                    .find_map(|key| match fields.get(*key) {
                        Some(Value::String(tag)) if !tag.trim().is_empty() => Some(tag.clone()),
                        _ => None,
                    })
                    .unwrap_or_else(|| DEFAULT_KIND.to_string());
                fields.remove("kind");
                fields.remove("type");
                Some(Self { kind, fields })
            }
            _ => None,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// A payload field, if it holds a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// The first string among [`FREE_TEXT_FIELDS`].
    pub fn free_text(&self) -> Option<&str> {
        FREE_TEXT_FIELDS.iter().find_map(|field| self.text(field))
    }
}

/// Immutable table of response kinds.
#[derive(Debug, Clone, Default)]
pub struct ResponseRegistry {
    kinds: IndexMap<String, ResponseFn>,
}

impl ResponseRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding `show_text`, `pop_msg` and `navigate`.
    pub fn with_builtins() -> Self {
        Self::empty()
            .register("show_text", show_text)
            .register("pop_msg", pop_msg)
            .register("navigate", navigate)
    }

    /// The process-wide registry of built-in kinds.
    pub fn builtin() -> &'static ResponseRegistry {
        &BUILTIN
    }

    /// Register a response kind, replacing any previous one with the same tag.
    pub fn register(mut self, kind: impl Into<String>, handler: ResponseFn) -> Self {
        self.kinds.insert(kind.into(), handler);
        self
    }

    pub fn get(&self, kind: &str) -> Option<ResponseFn> {
        self.kinds.get(kind).copied()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }
}
