use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use eyre::Result;

use crate::Renderer;

/// The aggregate `addin.h`, including every category header.
pub struct AddinHeader<'a> {
    renderer: &'a Renderer<'a>,
    categories: Vec<&'a str>,
}

impl<'a> AddinHeader<'a> {
    pub fn new(renderer: &'a Renderer<'a>, categories: Vec<&'a str>) -> Self {
        Self {
            renderer,
            categories,
        }
    }
}

impl GeneratedFile for AddinHeader<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("addin.h")
    }

    fn render(&self) -> Result<String> {
        let includes: String = self
            .categories
            .iter()
            .map(|name| format!("#include \"{name}.h\"\n"))
            .collect();
        let vars = Vars::new().with("includes", includes);
        Ok(self.renderer.templates().render("c.addin", &vars)?)
    }
}
