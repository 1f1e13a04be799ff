use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use addingen_ir::{Category, Function};
use eyre::Result;

use crate::Renderer;

/// `Functions/<category>.cpp`: the category's worksheet functions.
pub struct CategoryFunctions<'a> {
    renderer: &'a Renderer<'a>,
    category: &'a Category,
    functions: Vec<&'a Function>,
}

impl<'a> CategoryFunctions<'a> {
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

impl GeneratedFile for CategoryFunctions<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("Functions")
            .join(format!("{}.cpp", self.category.name))
    }

    fn render(&self) -> Result<String> {
        let bodies = self
            .functions
            .iter()
            .map(|f| self.renderer.body(f))
            .collect::<Result<Vec<_>>>()?;
        let vars = Vars::new()
            .with("lib_root", &self.renderer.project().lib_root)
            .with("category", &self.category.name)
            .with("bodies", bodies.join("\n"));
        Ok(self.renderer.templates().render("excel.source", &vars)?)
    }
}
