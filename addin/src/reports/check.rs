//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from metadata validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// What was loaded.
    pub stats: MetadataStats,
}

/// Counts of loaded metadata.
#[derive(Debug, Default, PartialEq)]
pub struct MetadataStats {
    pub categories: usize,
    pub functions: usize,
    pub enumerations: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn count(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
            out.preformatted(&format!(
                "  {}, {}, {}",
                count(self.stats.categories, "category", "categories"),
                count(self.stats.functions, "function", "functions"),
                count(self.stats.enumerations, "enumeration", "enumerations")
            ));
        }
    }
}
