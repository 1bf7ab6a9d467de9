//! Shared code generation utilities for msg2go.
//!
//! This crate provides the language-agnostic pieces used by the Go backend
//! (`msg2go-codegen-go`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, Indent)
//! - [`imports`] - Per-compilation import aggregation (ImportSet)
//! - [`diagnostic`] - Non-fatal messages collected while compiling

pub mod builder;
pub mod diagnostic;
pub mod imports;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use diagnostic::{Diagnostic, Severity};
pub use imports::ImportSet;
