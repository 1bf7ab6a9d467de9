//! Relation graph: what happens when an interactive element is triggered.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered list of behaviour scripts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationGraph {
    #[serde(default)]
    pub scripts: Vec<Script>,
}

impl RelationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(mut self, script: Script) -> Self {
        self.scripts.push(script);
        self
    }

    /// Parse a relation graph from JSON text.
    pub fn from_json(content: &str) -> crate::Result<Self> {
        crate::document::parse(content, "relation.json", crate::Format::Json)
    }

    /// Parse a relation graph from TOML text.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        crate::document::parse(content, "relation.toml", crate::Format::Toml)
    }
}

/// Binds an action id to a response.
///
/// The response is kept as raw data: either a bare string or a tagged map
/// such as `{"kind": "show_text", "msg": "Hi"}`. Interpreting it is left to
/// the action resolver. A non-string `action_id` reads as absent, so the
/// resolver skips that script instead of the whole document failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

impl Script {
    pub fn new(action_id: impl Into<String>, response: impl Into<Value>) -> Self {
        Self {
            action_id: Some(Value::String(action_id.into())),
            response: Some(response.into()),
        }
    }

    /// The action id, if it is a non-empty string.
    pub fn action_id(&self) -> Option<&str> {
        self.action_id
            .as_ref()
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }
}
