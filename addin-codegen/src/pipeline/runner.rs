//! Pipeline orchestrator.

use addingen_ir::ProjectMeta;
use addingen_manifest::Metadata;
use eyre::Result;
use tracing::debug;

use super::{
    CompilationContext, Phase,
    phases::{LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower) followed by any user phases
/// over a single [`CompilationContext`].
///
/// # Example
///
/// ```ignore
/// let ctx = Pipeline::new().run(project, metadata)?;
/// let ir = ctx.ir()?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the validate phase, e.g. to run a custom set of lints.
    pub fn validate_with(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on a project's metadata.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - lints the metadata, collects diagnostics
    /// 2. LowerPhase - post-processes metadata into the registry IR
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. Lint errors abort the
    /// run after validation.
    pub fn run(&self, project: ProjectMeta, metadata: Metadata) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(project, metadata);
        self.run_context(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    ///
    /// Diagnostics remain in `ctx` when a phase fails.
    pub fn run_context(&self, ctx: &mut CompilationContext) -> Result<()> {
        let builtin: [&dyn Phase; 2] = [&self.validate, &LowerPhase];
        for phase in builtin
            .into_iter()
            .chain(self.phases.iter().map(|p| p.as_ref()))
        {
            debug!(phase = phase.name(), "running phase");
            phase.run(ctx)?;
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
