//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Indentation-aware output buffer
//! - [`CodeFragment`] - Structured representation of code pieces
//! - [`Renderable`] - Trait for types that can be converted to code fragments
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod fragment;
mod indent;

pub use code_builder::CodeBuilder;
pub use fragment::{CodeFragment, Renderable};
pub use indent::Indent;
