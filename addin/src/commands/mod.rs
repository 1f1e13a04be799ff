mod check;
mod completions;
mod generate;
mod list;

use std::path::Path;

use addingen_manifest::{AddinToml, Metadata};
use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for addingen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Open addin.toml and load its metadata, exiting with a diagnostic on failure.
pub(crate) fn open_project(config: &Path) -> (AddinToml, Metadata) {
    let project = AddinToml::open(config).unwrap_or_exit();
    let metadata = project.load_metadata().unwrap_or_exit();
    (project, metadata)
}

#[derive(Parser)]
#[command(name = "addingen")]
#[command(version)]
#[command(about = "Generate addin bindings from XML metadata")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate source files for the enabled platforms
    Generate(GenerateCommand),

    /// Validate addin.toml and metadata without generating code
    Check(CheckCommand),

    /// List categories and functions defined in the metadata
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["addingen", "check", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_generate_platform_flags() {
        let cli = Cli::try_parse_from([
            "addingen", "generate", "-p", "c", "-p", "doxygen", "--dry-run",
        ])
        .unwrap();
        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(
            cmd.platform,
            vec![
                addingen_manifest::Platform::C,
                addingen_manifest::Platform::Doxygen
            ]
        );
        assert!(cmd.dry_run);
    }

    #[test]
    fn test_unknown_platform_rejected() {
        assert!(Cli::try_parse_from(["addingen", "generate", "-p", "calc"]).is_err());
    }
}
