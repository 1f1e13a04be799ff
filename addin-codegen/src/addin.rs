//! The generator trait implemented by every platform.

use std::path::{Path, PathBuf};

use addingen_core::{Banner, GeneratedFile, WriteSummary};
use addingen_ir::ProjectMeta;
use addingen_manifest::Platform;
use eyre::Result;
use tracing::{debug, info};

use crate::{TemplateSet, Vars};

/// Default copyright block, available to every generator as the `copyright` template.
pub const COPYRIGHT: &str = include_str!("../stubs/copyright");

/// Trait for platform generators.
///
/// Implementors describe their output as a list of [`GeneratedFile`]s; the
/// provided methods render them in memory or write them idempotently.
pub trait Addin {
    /// Platform this generator emits.
    fn platform(&self) -> Platform;

    /// Templates used by this generator.
    fn templates(&self) -> &TemplateSet;

    /// Every file this generator produces, with paths relative to the platform root.
    ///
    /// Categories without qualifying functions contribute no files.
    fn files(&self) -> Result<Vec<Box<dyn GeneratedFile + '_>>>;

    /// Render the `copyright` template for a project.
    fn copyright(&self, project: &ProjectMeta) -> Result<String> {
        let vars = Vars::new()
            .with("project", &project.name)
            .with("namespace", &project.namespace_objects);
        Ok(self.templates().render("copyright", &vars)?)
    }

    /// Preview generated files without writing to disk.
    fn preview(&self, banner: &Banner) -> Result<Vec<PreviewFile>> {
        self.files()?
            .iter()
            .map(|file| {
                Ok(PreviewFile {
                    path: file.path(Path::new("")),
                    content: file.contents(banner)?,
                })
            })
            .collect()
    }

    /// Generate all files into the specified output directory.
    fn generate(&self, output_dir: &Path, banner: &Banner) -> Result<WriteSummary> {
        let platform = self.platform();
        debug!(%platform, dir = %output_dir.display(), "generating");

        let mut summary = WriteSummary::new();
        for file in self.files()? {
            let result = file.write(output_dir, banner)?;
            summary.record(file.path(output_dir), result);
        }

        info!(
            %platform,
            created = summary.created.len(),
            updated = summary.updated.len(),
            unchanged = summary.unchanged.len(),
            "platform done"
        );
        Ok(summary)
    }
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFile {
    /// Path relative to the platform root
    pub path: PathBuf,
    /// File content, banner included
    pub content: String,
}
