//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::{CheckReport, MetadataStats};
pub use generate::{GenerateReport, GenerationResult, PlatformReport, PreviewFile};
pub use list::{CategoryInfo, FunctionInfo, ListReport};
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Report, TerminalOutput};
