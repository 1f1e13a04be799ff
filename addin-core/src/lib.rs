//! Core utilities and types for the addingen binding generator.
//!
//! This crate provides the metadata primitives shared by every other crate
//! and the idempotent file writer used by all generators.

mod file;
mod output;
mod types;
mod utils;

// File operations
pub use file::{Banner, FileRules, GeneratedFile, WriteResult};
pub use output::{OutputFile, WriteSummary};
// Fundamental types
pub use types::{DataType, FunctionTag, Implementation, TensorRank};
// String utilities
pub use utils::{is_identifier, to_snake_case};
