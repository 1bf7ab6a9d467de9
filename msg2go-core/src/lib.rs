//! Core utilities and types for the msg2go generator.
//!
//! This crate provides the pieces shared by every other msg2go crate:
//! generated-file write rules and Go string literal escaping.

mod escape;
mod file;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use escape::{escape_go_string, go_string_literal};

/// Header placed at the top of every generated Go source file.
///
/// Matches the `^// Code generated .* DO NOT EDIT\.$` convention recognised
/// by Go tooling.
pub const GENERATED_HEADER: &str = "// Code generated by msg2go. DO NOT EDIT.";
