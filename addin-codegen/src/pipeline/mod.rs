//! Compilation pipeline for code generation.
//!
//! This module provides a [`Pipeline`] orchestrator that turns loaded
//! metadata into the registry consumed by generators:
//!
//! - Explicit phase boundaries (validate → lower)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use addingen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(project, metadata)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = CGenerator::new(ctx.ir()?, stubs)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use phases::{Lint, LintInfo, LowerPhase, ValidatePhase, lower_metadata};
pub use runner::Pipeline;
