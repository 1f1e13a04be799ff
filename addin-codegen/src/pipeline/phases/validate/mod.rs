//! Validate phase - runs lints on the metadata.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DuplicateCategoryLint, DuplicateFunctionLint, EmptyCategoryLint, EmptyDescriptionLint,
    LoopParameterLint,
};
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the metadata using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateCategoryLint),
                Box::new(DuplicateFunctionLint),
                Box::new(LoopParameterLint),
                Box::new(EmptyDescriptionLint),
                Box::new(EmptyCategoryLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check metadata integrity and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            debug!(lint = lint.name(), "running lint");
            lint.check(&ctx.metadata, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("Validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use addingen_ir::ProjectMeta;
    use addingen_manifest::{Metadata, parse_category};

    use super::*;
    use crate::pipeline::Diagnostic;

    fn context(xml: &str) -> CompilationContext {
        let metadata = Metadata {
            categories: vec![parse_category(xml, "test.xml").unwrap()],
            enumerations: Vec::new(),
        };
        let project = ProjectMeta {
            name: "Test".into(),
            namespace_objects: "Test".into(),
            lib_root: "test".into(),
        };
        CompilationContext::new(project, metadata)
    }

    const EMPTY: &str = r#"<Category name="misc"><description>misc</description></Category>"#;

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("test", "forced error"));
            }
        }

        let mut ctx = context(EMPTY);
        let phase = ValidatePhase::empty().with_lint(AlwaysErrorLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = context(EMPTY);

        let phase = ValidatePhase::empty().with_lint(EmptyCategoryLint);
        let result = phase.run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_default_lints() {
        let names: Vec<_> = ValidatePhase::new()
            .lint_info()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "duplicate-category",
                "duplicate-function",
                "loop-parameter",
                "empty-description",
                "empty-category",
            ]
        );
    }
}
