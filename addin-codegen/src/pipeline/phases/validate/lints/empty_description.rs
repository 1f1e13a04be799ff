//! Lint for missing descriptions.

use addingen_core::FunctionTag;
use addingen_manifest::Metadata;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about categories and functions missing descriptions.
///
/// Constructors are exempt since they receive a generated description.
pub struct EmptyDescriptionLint;

impl Lint for EmptyDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-description"
    }

    fn description(&self) -> &'static str {
        "Warn about categories and functions without a description"
    }

    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        for category in &metadata.categories {
            if category.description.is_empty() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("category '{}' has no description", category.name),
                    )
                    .at(category.name.clone()),
                );
            }
        }

        for (category, function) in metadata.functions() {
            if function.tag != FunctionTag::Constructor && function.description.is_none() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("function '{}' has no description", function.name),
                    )
                    .at(format!("{}.{}", category.name, function.name)),
                );
            }
        }
    }
}
