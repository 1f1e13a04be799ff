//! Check operation - metadata validation.

use addingen_codegen::pipeline::{CompilationContext, Pipeline, Severity};
use addingen_manifest::{AddinToml, Metadata};
use eyre::Result;

use crate::reports::{CheckReport, MetadataStats};

/// Execute the check operation.
///
/// Runs the pipeline to validate the metadata and returns diagnostics.
/// Lint errors are reported, not returned; other failures are.
pub fn check(project: &AddinToml, metadata: Metadata) -> Result<CheckReport> {
    let stats = MetadataStats {
        categories: metadata.categories.len(),
        functions: metadata.functions().count(),
        enumerations: metadata.enumerations.len(),
    };

    let mut ctx = CompilationContext::from_config(project.config(), metadata);
    let outcome = Pipeline::new().run_context(&mut ctx);
    if let Err(err) = outcome
        && !ctx.has_errors()
    {
        return Err(err);
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        config_path: project.path().to_path_buf(),
        errors,
        warnings,
        infos,
        stats,
    })
}
