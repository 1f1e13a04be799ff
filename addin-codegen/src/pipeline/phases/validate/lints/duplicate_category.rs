//! Lint for duplicate category detection.

use std::collections::HashSet;

use addingen_manifest::Metadata;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when two category files declare the same name.
pub struct DuplicateCategoryLint;

impl Lint for DuplicateCategoryLint {
    fn name(&self) -> &'static str {
        "duplicate-category"
    }

    fn description(&self) -> &'static str {
        "Detect category names declared more than once"
    }

    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        for category in &metadata.categories {
            if !seen.insert(category.name.as_str()) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!("duplicate category '{}'", category.name),
                    )
                    .at(category.name.clone()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::validate::lints::metadata;

    #[test]
    fn test_duplicate_category() {
        let metadata = metadata(&[
            r#"<Category name="quotes"/>"#,
            r#"<Category name="options"/>"#,
            r#"<Category name="quotes"/>"#,
        ]);

        let mut diagnostics = Vec::new();
        DuplicateCategoryLint.check(&metadata, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("quotes"));
    }
}
