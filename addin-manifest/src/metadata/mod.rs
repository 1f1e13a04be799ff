//! Category and enumeration metadata loaded from XML.

mod category;
mod enumeration;
mod raw;

use std::path::{Path, PathBuf};

pub use category::{
    CategoryDef, FunctionDef, ParameterDef, ReturnValueDef, SupportedPlatform, parse_category,
};
pub use enumeration::{EnumValue, EnumerationDef, parse_enumerations};
use tracing::debug;

use crate::{Config, Error, Result};

/// Every category and enumeration of a project, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    pub categories: Vec<CategoryDef>,
    pub enumerations: Vec<EnumerationDef>,
}

impl Metadata {
    /// Load metadata for a configuration whose paths are relative to `base`.
    ///
    /// Categories follow the configured order, or file name order when none
    /// is configured. A missing enumerations directory yields no enumerations.
    pub fn load(config: &Config, base: &Path) -> Result<Self> {
        let categories_dir = base.join(&config.metadata.categories_dir);
        let category_files = match &config.metadata.categories {
            Some(names) => names
                .iter()
                .map(|name| categories_dir.join(format!("{name}.xml")))
                .collect(),
            None => xml_files(&categories_dir)?,
        };

        let mut categories = Vec::with_capacity(category_files.len());
        for path in category_files {
            let content = read(&path)?;
            let category = parse_category(&content, &path.display().to_string())?;
            debug!(
                category = %category.name,
                functions = category.functions.len(),
                "loaded category"
            );
            categories.push(category);
        }

        let enumerations_dir = base.join(&config.metadata.enumerations_dir);
        let mut enumerations = Vec::new();
        if enumerations_dir.is_dir() {
            for path in xml_files(&enumerations_dir)? {
                let content = read(&path)?;
                enumerations.extend(parse_enumerations(&content, &path.display().to_string())?);
            }
        } else {
            debug!(dir = %enumerations_dir.display(), "no enumerations directory");
        }

        Ok(Self {
            categories,
            enumerations,
        })
    }

    /// Iterate over every function with its category.
    pub fn functions(&self) -> impl Iterator<Item = (&CategoryDef, &FunctionDef)> {
        self.categories
            .iter()
            .flat_map(|c| c.functions.iter().map(move |f| (c, f)))
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// List `*.xml` files in a directory, sorted by file name.
fn xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "xml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
