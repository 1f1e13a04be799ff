use std::path::{Path, PathBuf};

use super::{Config, Platform};
use crate::{Error, Metadata, Result};

/// Represents an addin.toml file with both raw content and parsed configuration.
pub struct AddinToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl AddinToml {
    /// Open and parse an addin.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory containing addin.toml; configured paths are relative to it.
    pub fn base_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Resolve a configured path against the project directory.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.base_dir().join(relative)
    }

    /// Absolute output root for a platform.
    pub fn platform_root(&self, platform: Platform) -> PathBuf {
        self.resolve(&self.config.platform_root(platform))
    }

    /// Directory with template and rule overrides, if configured.
    pub fn stubs_dir(&self) -> Option<PathBuf> {
        self.config
            .metadata
            .stubs_dir
            .as_deref()
            .map(|dir| self.resolve(dir))
    }

    /// Load and validate every category and enumeration file.
    pub fn load_metadata(&self) -> Result<Metadata> {
        Metadata::load(&self.config, self.base_dir())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_resolves_paths() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("addin.toml");
        fs::write(
            &path,
            "[project]\nname = \"A\"\nlib_root = \"lib\"\n[metadata]\nstubs_dir = \"stubs\"\n",
        )
        .unwrap();

        let toml = AddinToml::open(&path).unwrap();
        assert_eq!(toml.base_dir(), temp.path());
        assert_eq!(
            toml.platform_root(Platform::ValueObjects),
            temp.path().join("lib/ValueObjects")
        );
        assert_eq!(toml.stubs_dir(), Some(temp.path().join("stubs")));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = AddinToml::open(temp.path().join("addin.toml"))
            .err()
            .unwrap();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_keeps_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("addin.toml");
        fs::write(&path, "[project]\nname = \"A\"\n").unwrap();
        let toml = AddinToml::open(&path).unwrap();
        assert!(toml.content().contains("name = \"A\""));
        assert_eq!(toml.path(), path);
    }
}
