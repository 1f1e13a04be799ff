//! Built-in pipeline phases.

mod lower;
pub mod validate;

pub use lower::{LowerPhase, lower_metadata};
pub use validate::{Lint, LintInfo, ValidatePhase};
