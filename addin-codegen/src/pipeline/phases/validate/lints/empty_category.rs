//! Lint for categories without functions.

use addingen_manifest::Metadata;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about categories declaring no functions.
pub struct EmptyCategoryLint;

impl Lint for EmptyCategoryLint {
    fn name(&self) -> &'static str {
        "empty-category"
    }

    fn description(&self) -> &'static str {
        "Warn about categories without functions"
    }

    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        for category in metadata.categories.iter().filter(|c| c.functions.is_empty()) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("category '{}' has no functions", category.name),
                )
                .at(category.name.clone()),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::validate::lints::metadata;

    #[test]
    fn test_empty_category() {
        let metadata = metadata(&[r#"<Category name="misc"/>"#]);

        let mut diagnostics = Vec::new();
        EmptyCategoryLint.check(&metadata, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
    }
}
