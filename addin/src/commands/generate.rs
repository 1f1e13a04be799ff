use std::path::PathBuf;

use addingen_manifest::Platform;
use clap::Args;
use eyre::Result;

use super::open_project;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to addin.toml (defaults to ./addin.toml)
    #[arg(short, long, default_value = "addin.toml")]
    pub config: PathBuf,

    /// Base directory for platform roots (defaults to the directory of addin.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Platform to generate; repeat to select several (defaults to all enabled)
    #[arg(short, long)]
    pub platform: Vec<Platform>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let (project, metadata) = open_project(&self.config);

        let report = ops::generate(
            &project,
            metadata,
            GenerateOptions {
                output_dir: self.output.as_deref(),
                platforms: &self.platform,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
