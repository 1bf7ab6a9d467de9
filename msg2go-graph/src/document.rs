//! Loading documents from disk.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Serialization format of a document, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}

impl Format {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Format::Json)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(Format::Toml)
        } else {
            None
        }
    }
}

pub(crate) fn parse<T: DeserializeOwned>(content: &str, filename: &str, format: Format) -> Result<T> {
    match format {
        Format::Json => {
            serde_json::from_str(content).map_err(|e| Error::json(content, filename, e))
        }
        Format::Toml => toml::from_str(content).map_err(|e| Error::toml(content, filename, e)),
    }
}

/// A document read from disk, keeping its raw content next to the parsed value.
///
/// # Example
///
/// ```ignore
/// let ui = Document::<UiGraph>::open("ui/main.json")?;
/// println!("{} elements", ui.value().elements.len());
/// ```
#[derive(Debug)]
pub struct Document<T> {
    path: PathBuf,
    content: String,
    value: T,
}

impl<T: DeserializeOwned> Document<T> {
    /// Open and parse a document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let format = Format::from_path(&path)
            .ok_or_else(|| Box::new(Error::UnsupportedFormat { path: path.clone() }))?;
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let value = parse(&content, &path.display().to_string(), format)?;

        Ok(Self {
            path,
            content,
            value,
        })
    }

    /// Open a document that may legitimately not exist yet.
    ///
    /// Returns `Ok(None)` when the file is missing; any other failure is an error.
    pub fn open_optional(path: impl AsRef<Path>) -> Result<Option<Self>> {
        if path.as_ref().exists() {
            Self::open(path).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl<T> Document<T> {
    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the document, keeping only the parsed value.
    pub fn into_value(self) -> T {
        self.value
    }
}
