//! Generate operation - code generation from metadata.

use std::path::Path;

use addingen_codegen::{
    Addin,
    pipeline::{CompilationContext, Pipeline},
};
use addingen_core::Banner;
use addingen_ir::AddinIR;
use addingen_manifest::{AddinToml, Metadata, Platform};
use eyre::{Context, Result, bail};
use tracing::{error, info};

use crate::{
    platform,
    reports::{GenerateReport, GenerationResult, PlatformReport, PreviewFile},
};

/// Name written into the banner of every generated file.
pub const GENERATOR_NAME: &str = "addingen";

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Base directory for platform roots; the project directory when `None`.
    pub output_dir: Option<&'a Path>,
    /// Platforms to generate; every enabled platform when empty.
    pub platforms: &'a [Platform],
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the metadata, then every selected platform in order.
/// The first failing platform aborts the run.
pub fn generate(
    project: &AddinToml,
    metadata: Metadata,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let config = project.config();
    let mut ctx = CompilationContext::from_config(config, metadata);
    if let Err(err) = Pipeline::new().run_context(&mut ctx) {
        for diag in ctx.errors() {
            error!("{diag}");
        }
        return Err(err.wrap_err("Pipeline failed"));
    }

    let warnings = ctx.warnings().map(ToString::to_string).collect();
    let ir = ctx.take_ir()?;

    let platforms = if opts.platforms.is_empty() {
        config.enabled_platforms()
    } else {
        opts.platforms.to_vec()
    };
    if platforms.is_empty() {
        bail!("no platforms enabled in {}", project.path().display());
    }

    let stubs = project.stubs_dir();
    let mut reports = Vec::with_capacity(platforms.len());
    for platform in platforms {
        let generator = platform::generator(platform, &ir, config, stubs.as_deref())?;
        let banner = banner(generator.as_ref(), &ir, config.project.copyright)?;
        let root = match opts.output_dir {
            Some(dir) => dir.join(config.platform_root(platform)),
            None => project.platform_root(platform),
        };

        let result = if opts.dry_run {
            let files = generator
                .preview(&banner)?
                .into_iter()
                .map(|f| PreviewFile {
                    path: root.join(&f.path).display().to_string(),
                    content: f.content,
                })
                .collect();
            GenerationResult::Preview(files)
        } else {
            let summary = generator
                .generate(&root, &banner)
                .wrap_err_with(|| format!("Failed to generate platform '{platform}'"))?;
            info!(%platform, changed = summary.changed(), "platform done");
            GenerationResult::Written(summary)
        };

        reports.push(PlatformReport {
            platform,
            root,
            result,
        });
    }

    Ok(GenerateReport {
        warnings,
        platforms: reports,
    })
}

/// Banner for a generator's files, with the rendered copyright block when enabled.
fn banner(generator: &dyn Addin, ir: &AddinIR, copyright: bool) -> Result<Banner> {
    let banner = Banner::new(GENERATOR_NAME);
    if !copyright {
        return Ok(banner);
    }
    Ok(banner.with_copyright(generator.copyright(&ir.meta)?))
}
