//! Shared code generation utilities for the addingen binding generator.
//!
//! This crate provides the platform-agnostic pieces used by the generator
//! crates (e.g. `addingen-codegen-c`).
//!
//! # Module Organization
//!
//! - [`pipeline`] - Validation and post-processing of metadata into the registry
//! - [`Addin`] - The trait every platform generator implements
//! - [`TemplateSet`] - Named `${placeholder}` templates with project overrides
//! - [`RuleSet`] - Parameter conversion rule groups
//! - [`TagTable`] - Per-kind lookup tables
//! - [`testing`] - Test utilities (feature-gated)

mod addin;
mod dispatch;
mod rules;
mod template;

pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use addin::{Addin, COPYRIGHT, PreviewFile};
pub use dispatch::TagTable;
pub use rules::{RuleError, RuleGroup, RuleSet};
pub use template::{Template, TemplateError, TemplateSet, Vars};

/// Join the non-empty fragments with `separator`.
///
/// Templates have no conditionals, so optional sections are rendered to an
/// empty string and dropped here.
pub fn join_nonempty<'a>(fragments: impl IntoIterator<Item = &'a str>, separator: &str) -> String {
    fragments
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_nonempty() {
        assert_eq!(join_nonempty(["a", "", "b"], ", "), "a, b");
        assert_eq!(join_nonempty(["", ""], "\n"), "");
    }
}
