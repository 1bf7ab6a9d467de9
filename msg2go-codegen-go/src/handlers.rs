//! The action id to handler fragment map.

use indexmap::IndexMap;
use serde::Serialize;

/// Go statements to run when the element bound to an action id is triggered.
///
/// Built fresh for every compilation by the [`Roller`](crate::Roller).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HandlerMap {
    handlers: IndexMap<String, String>,
}

impl HandlerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a fragment to an action id, returning the fragment it replaces.
    pub fn insert(&mut self, action_id: impl Into<String>, fragment: impl Into<String>) -> Option<String> {
        self.handlers.insert(action_id.into(), fragment.into())
    }

    pub fn get(&self, action_id: &str) -> Option<&str> {
        self.handlers.get(action_id).map(String::as_str)
    }

    pub fn contains(&self, action_id: &str) -> bool {
        self.handlers.contains_key(action_id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterate in first-definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.handlers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HandlerMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HandlerMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
