use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_project;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to addin.toml (defaults to ./addin.toml)
    #[arg(short, long, default_value = "addin.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (project, metadata) = open_project(&self.config);

        let report = ops::check(&project, metadata)?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
