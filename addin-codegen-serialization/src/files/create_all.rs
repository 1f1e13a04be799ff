use std::path::{Path, PathBuf};

use addingen_core::GeneratedFile;
use eyre::Result;

use crate::Renderer;

/// `create_all.hpp`, including every category's creator header.
pub struct CreateAll<'a> {
    renderer: &'a Renderer<'a>,
    categories: Vec<&'a str>,
}

impl<'a> CreateAll<'a> {
    pub fn new(renderer: &'a Renderer<'a>, categories: Vec<&'a str>) -> Self {
        Self {
            renderer,
            categories,
        }
    }
}

impl GeneratedFile for CreateAll<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("create_all.hpp")
    }

    fn render(&self) -> Result<String> {
        let lib_root = &self.renderer.project().lib_root;
        let includes: String = self
            .categories
            .iter()
            .map(|name| format!("#include <{lib_root}/Serialization/create_{name}.hpp>\n"))
            .collect();
        let vars = self.renderer.project_vars().with("includes", includes);
        Ok(self.renderer.templates().render("serialization.all", &vars)?)
    }
}
