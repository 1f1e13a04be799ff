use std::{
    fmt,
    path::{Path, PathBuf},
};

use eyre::Result;

use crate::OutputFile;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file body (without banner)
    fn render(&self) -> Result<String>;

    /// Render the complete file content, banner included
    fn contents(&self, banner: &Banner) -> Result<String> {
        let body = self.render()?;
        Ok(format!("{}{}", banner.render(&self.rules()), body))
    }

    /// Write the file to disk, replacing it only if the content changed
    fn write(&self, base: &Path, banner: &Banner) -> Result<WriteResult> {
        let contents = self.contents(banner)?;
        let mut out = OutputFile::open(self.path(base))?;
        out.write(&contents)?;
        out.close()
    }
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// Target did not exist and was created
    Created,
    /// Target existed with different content and was replaced
    Updated,
    /// Target already had identical content and was left untouched
    Unchanged,
}

impl WriteResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteResult::Created => "created",
            WriteResult::Updated => "updated",
            WriteResult::Unchanged => "unchanged",
        }
    }

    /// Returns true if the file on disk was modified.
    pub fn is_change(&self) -> bool {
        !matches!(self, WriteResult::Unchanged)
    }
}

impl fmt::Display for WriteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRules {
    /// Prefix the file with the "generated automatically" notice.
    pub banner: bool,
    /// Prefix the file with the project copyright block, if one is configured.
    pub copyright: bool,
}

impl FileRules {
    /// Raw output: no banner and no copyright.
    pub fn raw() -> Self {
        Self {
            banner: false,
            copyright: false,
        }
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            banner: true,
            copyright: true,
        }
    }
}

/// Header written at the top of every generated file.
#[derive(Debug, Clone)]
pub struct Banner {
    generator: String,
    copyright: Option<String>,
}

impl Banner {
    pub fn new(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            copyright: None,
        }
    }

    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    pub fn copyright(&self) -> Option<&str> {
        self.copyright.as_deref()
    }

    /// Render the header for a file written with the given rules.
    pub fn render(&self, rules: &FileRules) -> String {
        let mut out = String::new();
        if rules.copyright
            && let Some(copyright) = &self.copyright
        {
            out.push_str(copyright);
            if !copyright.ends_with('\n') {
                out.push('\n');
            }
        }
        if rules.banner {
            out.push_str(&format!(
                "// this file generated automatically by {}\n\
                 // editing this file manually is not recommended\n\n",
                self.generator
            ));
        }
        out
    }
}
