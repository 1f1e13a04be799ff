use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use addingen_ir::Category;
use eyre::Result;

use crate::Renderer;

/// `<category>.docs`: overview and per-function documentation.
pub struct CategoryDocs<'a> {
    renderer: &'a Renderer,
    category: &'a Category,
}

impl<'a> CategoryDocs<'a> {
    pub fn new(renderer: &'a Renderer, category: &'a Category) -> Self {
        Self { renderer, category }
    }
}

impl GeneratedFile for CategoryDocs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("{}.docs", self.category.name))
    }

    fn render(&self) -> Result<String> {
        let functions = self
            .category
            .functions
            .iter()
            .map(|f| self.renderer.function(f))
            .collect::<Result<Vec<_>>>()?;

        let vars = Vars::new()
            .with("category", &self.category.name)
            .with("display_name", &self.category.display_name)
            .with("description", &self.category.description)
            .with(
                "function_list",
                self.renderer.function_list(&self.category.functions)?,
            )
            .with("functions", functions.join("\n"));
        Ok(self.renderer.templates().render("doxygen.category", &vars)?)
    }
}
