use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::open_project;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to addin.toml (defaults to ./addin.toml)
    #[arg(short, long, default_value = "addin.toml")]
    pub config: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let (_, metadata) = open_project(&self.config);

        ops::list(&metadata).render(&mut TerminalOutput::new());

        Ok(())
    }
}
