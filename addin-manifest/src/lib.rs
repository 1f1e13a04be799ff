//! Project configuration and metadata loading for addingen.
//!
//! `addin.toml` describes the project; category and enumeration XML files
//! describe the functions to bind. Both are validated on load and reported
//! through miette diagnostics.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod metadata;
mod validate;

pub use config::{
    AddinToml, Config, ExcelConfig, MetadataConfig, Platform, PlatformConfig, PlatformsConfig,
    ProjectConfig,
};
pub use error::{Error, Result, SourceContext};
pub use metadata::{
    CategoryDef, EnumValue, EnumerationDef, FunctionDef, Metadata, ParameterDef, ReturnValueDef,
    SupportedPlatform, parse_category, parse_enumerations,
};
pub use validate::{IMPLICIT_PARAMETER_NAMES, ParseContext};
