//! Compilation context passed through pipeline phases.

use addingen_ir::{AddinIR, ProjectMeta};
use addingen_manifest::{Config, Metadata};
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
///
/// This struct carries the state of compilation through each phase,
/// accumulating results and diagnostics along the way. It is constructed
/// once per run by the caller.
#[derive(Debug)]
pub struct CompilationContext {
    /// Project-level names taken from addin.toml.
    pub project: ProjectMeta,
    /// The metadata being compiled.
    pub metadata: Metadata,
    /// The post-processed registry (populated by LowerPhase).
    pub ir: Option<AddinIR>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context.
    pub fn new(project: ProjectMeta, metadata: Metadata) -> Self {
        Self {
            project,
            metadata,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    /// Create a context using the project names of a configuration.
    pub fn from_config(config: &Config, metadata: Metadata) -> Self {
        let project = ProjectMeta {
            name: config.project.name.clone(),
            namespace_objects: config.namespace_objects().to_string(),
            lib_root: config.lib_root(),
        };
        Self::new(project, metadata)
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Borrow the IR.
    ///
    /// # Errors
    ///
    /// Returns an error if LowerPhase has not run.
    pub fn ir(&self) -> Result<&AddinIR> {
        self.ir
            .as_ref()
            .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))
    }

    /// Take the IR out of the context, consuming it.
    ///
    /// # Errors
    ///
    /// Returns an error if LowerPhase has not run.
    pub fn take_ir(&mut self) -> Result<AddinIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> CompilationContext {
        let config: Config = "[project]\nname = \"QuantLibAddin\"\nlib_root = \"qlo\"\n"
            .parse()
            .unwrap();
        CompilationContext::from_config(&config, Metadata::default())
    }

    #[test]
    fn test_context_creation() {
        let ctx = make_context();

        assert!(ctx.ir.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert_eq!(ctx.project.namespace_objects, "QuantLibAddin");
        assert_eq!(ctx.project.lib_root, "qlo");
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = make_context();

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_take_ir_before_lower() {
        let mut ctx = make_context();
        assert!(ctx.take_ir().is_err());
    }
}
