//! Generate command report data structures.

use std::path::{Path, PathBuf};

use addingen_core::WriteSummary;
use addingen_manifest::Platform;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,

    /// One entry per generated platform, in generation order.
    pub platforms: Vec<PlatformReport>,
}

/// Outcome for a single platform.
#[derive(Debug)]
pub struct PlatformReport {
    pub platform: Platform,
    /// Output root of the platform.
    pub root: PathBuf,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WriteSummary),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path, under the platform root.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        let mut previewed = 0;
        for platform in &self.platforms {
            match &platform.result {
                GenerationResult::Written(summary) => render_written(out, platform, summary),
                GenerationResult::Preview(files) => {
                    previewed += files.len();
                    for file in files {
                        out.divider(&file.path);
                        out.preformatted(&file.content);
                    }
                }
            }
        }

        if self.platforms.iter().any(PlatformReport::is_preview) {
            out.divider("Summary");
            out.preformatted(&format!("{} files would be generated", previewed));
        }
    }
}

impl PlatformReport {
    fn is_preview(&self) -> bool {
        matches!(self.result, GenerationResult::Preview(_))
    }
}

fn render_written(out: &mut dyn Output, platform: &PlatformReport, summary: &WriteSummary) {
    out.section(&format!("{} ({})", platform.platform, platform.root.display()));
    for path in &summary.created {
        out.added_item(&relative(path, &platform.root));
    }
    for path in &summary.updated {
        out.changed_item(&relative(path, &platform.root));
    }
    out.preformatted(&format!(
        "  {} files: {} created, {} updated, {} unchanged",
        summary.total(),
        summary.created.len(),
        summary.updated.len(),
        summary.unchanged.len()
    ));
    out.newline();
}

fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
