//! Lint for duplicate function detection.

use std::collections::HashMap;

use addingen_manifest::Metadata;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors on function names used more than once in the registry.
pub struct DuplicateFunctionLint;

impl Lint for DuplicateFunctionLint {
    fn name(&self) -> &'static str {
        "duplicate-function"
    }

    fn description(&self) -> &'static str {
        "Detect function names declared more than once"
    }

    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for (category, function) in metadata.functions() {
            if let Some(first) = seen.get(function.name.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "duplicate function '{}' (first declared in category '{}')",
                            function.name, first
                        ),
                    )
                    .at(format!("{}.{}", category.name, function.name)),
                );
            } else {
                seen.insert(&function.name, &category.name);
            }
        }
    }
}
