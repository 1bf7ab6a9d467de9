//! Input documents consumed by the msg2go compiler.
//!
//! - [`UiGraph`] - the window and the ordered list of elements to display
//! - [`RelationGraph`] - scripts describing what an interactive element does
//! - [`ProjectConfig`] - optional `msg2go.toml` with paths and Go module settings
//! - [`Document`] - loading either graph from a JSON or TOML file

mod document;
mod error;
mod project;
mod relation;
mod ui;

pub use document::{Document, Format};
pub use error::{Error, Result};
pub use project::{GoSettings, PathSettings, ProjectConfig};
pub use relation::{RelationGraph, Script};
pub use ui::{DEFAULT_PAGE, Element, SizeSpec, UiGraph, WindowSpec};
