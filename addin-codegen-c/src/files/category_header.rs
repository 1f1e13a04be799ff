use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use addingen_ir::{Category, Function};
use eyre::Result;

use crate::Renderer;

/// `<category>.h`: prototypes of the category's C functions.
pub struct CategoryHeader<'a> {
    renderer: &'a Renderer<'a>,
    category: &'a Category,
    functions: Vec<&'a Function>,
}

impl<'a> CategoryHeader<'a> {
    pub fn new(
        renderer: &'a Renderer<'a>,
        category: &'a Category,
        functions: Vec<&'a Function>,
    ) -> Self {
        Self {
            renderer,
            category,
            functions,
        }
    }
}

impl GeneratedFile for CategoryHeader<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.h", self.category.name))
    }

    fn render(&self) -> Result<String> {
        let prototypes = self
            .functions
            .iter()
            .map(|f| self.renderer.prototype(f))
            .collect::<Result<Vec<_>>>()?;
        let vars = Vars::new()
            .with("guard", format!("addin_c_{}_h", self.category.name))
            .with("prototypes", prototypes.join("\n"));
        Ok(self.renderer.templates().render("c.header", &vars)?)
    }
}
