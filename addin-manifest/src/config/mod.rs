//! Project configuration types and parsing for addin.toml files.

mod file;
mod platform;

use std::str::FromStr;

use addingen_core::to_snake_case;
pub use file::AddinToml;
pub use platform::Platform;
use serde::Deserialize;

use crate::{Error, Result, error::SourceContext, validate::validate_identifier};

/// Root configuration for addin.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project metadata
    pub project: ProjectConfig,

    /// Where metadata and overrides live
    #[serde(default)]
    pub metadata: MetadataConfig,

    /// Per-platform output settings
    #[serde(default)]
    pub platforms: PlatformsConfig,
}

/// The `[project]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name, used in generated identifiers
    pub name: String,

    /// Namespace of the generated object classes (defaults to the project name)
    pub namespace_objects: Option<String>,

    /// Library source root used for serialization and value object outputs
    pub lib_root: Option<String>,

    /// Prefix generated files with the `copyright` template
    #[serde(default)]
    pub copyright: bool,
}

/// The `[metadata]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
    /// Directory holding one XML file per category
    pub categories_dir: String,

    /// Directory holding enumeration XML files
    pub enumerations_dir: String,

    /// Directory with template and rule overrides
    pub stubs_dir: Option<String>,

    /// Explicit category order; when absent, files are read in name order
    pub categories: Option<Vec<String>>,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            categories_dir: "metadata/Categories".to_string(),
            enumerations_dir: "metadata/Enumerations".to_string(),
            stubs_dir: None,
            categories: None,
        }
    }
}

/// The `[platforms]` table. Every entry is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformsConfig {
    pub c: PlatformConfig,
    pub excel: ExcelConfig,
    pub doxygen: PlatformConfig,
    pub serialization: PlatformConfig,
    pub valueobjects: PlatformConfig,
}

/// Settings for a single platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlatformConfig {
    /// Output root, relative to the directory containing addin.toml
    pub root: Option<String>,

    /// Whether `generate` runs this platform when none is selected explicitly
    pub enabled: bool,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            root: None,
            enabled: true,
        }
    }
}

/// The `[platforms.excel]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExcelConfig {
    /// Output root, relative to the directory containing addin.toml
    pub root: Option<String>,

    /// Whether `generate` runs this platform when none is selected explicitly
    pub enabled: bool,

    /// Namespace of the addin's serialization code (defaults to `<name>XL`)
    pub namespace: Option<String>,

    /// Namespace whose `register_in`/`register_out` run before the addin's own
    pub serialization_base: Option<String>,
}

impl Default for ExcelConfig {
    fn default() -> Self {
        Self {
            root: None,
            enabled: true,
            namespace: None,
            serialization_base: None,
        }
    }
}

impl PlatformsConfig {
    /// Configured output root of a platform, if any.
    pub fn root(&self, platform: Platform) -> Option<&str> {
        match platform {
            Platform::C => self.c.root.as_deref(),
            Platform::Excel => self.excel.root.as_deref(),
            Platform::Doxygen => self.doxygen.root.as_deref(),
            Platform::Serialization => self.serialization.root.as_deref(),
            Platform::ValueObjects => self.valueobjects.root.as_deref(),
        }
    }

    /// Whether a platform runs by default.
    pub fn enabled(&self, platform: Platform) -> bool {
        match platform {
            Platform::C => self.c.enabled,
            Platform::Excel => self.excel.enabled,
            Platform::Doxygen => self.doxygen.enabled,
            Platform::Serialization => self.serialization.enabled,
            Platform::ValueObjects => self.valueobjects.enabled,
        }
    }
}

impl Config {
    /// Namespace of the generated object classes.
    pub fn namespace_objects(&self) -> &str {
        self.project
            .namespace_objects
            .as_deref()
            .unwrap_or(&self.project.name)
    }

    /// Library source root.
    pub fn lib_root(&self) -> String {
        self.project
            .lib_root
            .clone()
            .unwrap_or_else(|| to_snake_case(&self.project.name))
    }

    /// Output root for a platform, relative to the project directory.
    pub fn platform_root(&self, platform: Platform) -> String {
        self.platforms
            .root(platform)
            .map(String::from)
            .unwrap_or_else(|| platform.default_root(&self.lib_root()))
    }

    /// Namespace of the Excel addin's own code.
    pub fn excel_namespace(&self) -> String {
        self.platforms
            .excel
            .namespace
            .clone()
            .unwrap_or_else(|| format!("{}XL", self.project.name))
    }

    /// Platforms enabled in this configuration, in generation order.
    pub fn enabled_platforms(&self) -> Vec<Platform> {
        Platform::ALL
            .into_iter()
            .filter(|p| self.platforms.enabled(*p))
            .collect()
    }

    /// Parse an addin.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let config: Config =
            toml::from_str(content).map_err(|e| source_ctx.config_error(e))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        let ctx = TomlContext::new(src, filename);
        ctx.validate_name(&self.project.name, "project")?;
        if let Some(ns) = &self.project.namespace_objects {
            ctx.validate_name(ns, "namespace")?;
        }
        if let Some(ns) = &self.platforms.excel.namespace {
            ctx.validate_name(ns, "namespace")?;
        }
        if let Some(categories) = &self.metadata.categories {
            for (i, name) in categories.iter().enumerate() {
                ctx.validate_name(name, "category")?;
                if categories[..i].contains(name) {
                    return Err(ctx.source_context().validation_error(
                        format!("category '{}' is listed more than once", name),
                        ctx.find_quoted(name),
                    ));
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "addin.toml")
    }
}

/// Span lookups in TOML use quoted string values rather than XML attributes.
struct TomlContext {
    source: SourceContext,
}

impl TomlContext {
    fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
        }
    }

    fn source_context(&self) -> &SourceContext {
        &self.source
    }

    fn find_quoted(&self, value: &str) -> Option<miette::SourceSpan> {
        let pattern = format!("\"{}\"", value);
        self.source_context()
            .src()
            .find(&pattern)
            .map(|pos| miette::SourceSpan::from((pos + 1, value.len())))
    }

    fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source_context().invalid_identifier_error(
                name,
                kind,
                reason,
                self.find_quoted(name),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
[project]
name = "QuantLibAddin"
lib_root = "qlo"
copyright = true

[metadata]
categories_dir = "meta/cats"
stubs_dir = "stubs"
categories = ["options", "quotes"]

[platforms.c]
root = "out/c"

[platforms.excel]
namespace = "QuantLibXL"
serialization_base = "ObjectHandler"

[platforms.valueobjects]
enabled = false
"#;

    #[test]
    fn test_parse_full() {
        let config: Config = FULL.parse().unwrap();
        assert_eq!(config.project.name, "QuantLibAddin");
        assert!(config.project.copyright);
        assert_eq!(config.namespace_objects(), "QuantLibAddin");
        assert_eq!(config.metadata.categories_dir, "meta/cats");
        assert_eq!(config.metadata.enumerations_dir, "metadata/Enumerations");
        assert_eq!(config.platform_root(Platform::C), "out/c");
        assert_eq!(config.platform_root(Platform::Doxygen), "Docs/pages");
        assert_eq!(
            config.platform_root(Platform::Serialization),
            "qlo/Serialization"
        );
        assert_eq!(config.platform_root(Platform::Excel), "Addins/Excel");
        assert_eq!(config.excel_namespace(), "QuantLibXL");
        assert_eq!(
            config.platforms.excel.serialization_base.as_deref(),
            Some("ObjectHandler")
        );
        assert_eq!(
            config.enabled_platforms(),
            vec![
                Platform::C,
                Platform::Excel,
                Platform::Doxygen,
                Platform::Serialization
            ]
        );
    }

    #[test]
    fn test_minimal_defaults() {
        let config: Config = "[project]\nname = \"MyAddin\"\n".parse().unwrap();
        assert!(!config.project.copyright);
        assert_eq!(config.lib_root(), "my_addin");
        assert_eq!(config.enabled_platforms().len(), 5);
        assert_eq!(config.excel_namespace(), "MyAddinXL");
        assert!(config.platforms.excel.serialization_base.is_none());
        assert!(config.metadata.categories.is_none());
    }

    #[test]
    fn test_missing_project_is_error() {
        let err = "[metadata]\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_unknown_platform_is_error() {
        let err = "[project]\nname = \"A\"\n[platforms.calc]\nroot = \"x\"\n"
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_unknown_excel_key_is_error() {
        let err = "[project]\nname = \"A\"\n[platforms.excel]\nmacro = true\n"
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_invalid_project_name() {
        let err = "[project]\nname = \"my addin\"\n"
            .parse::<Config>()
            .unwrap_err();
        match *err {
            Error::InvalidIdentifier { name, span, .. } => {
                assert_eq!(name, "my addin");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_category_in_order() {
        let err = "[project]\nname = \"A\"\n[metadata]\ncategories = [\"a\", \"a\"]\n"
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
