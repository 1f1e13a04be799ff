use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use addingen_ir::{Category, Function};
use eyre::Result;

use crate::Renderer;

/// `create_<category>.hpp`: declarations of the category's creators.
pub struct CreateHeader<'a> {
    renderer: &'a Renderer<'a>,
    category: &'a Category,
    functions: Vec<&'a Function>,
}

impl<'a> CreateHeader<'a> {
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

impl GeneratedFile for CreateHeader<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("create_{}.hpp", self.category.name))
    }

    fn render(&self) -> Result<String> {
        let templates = self.renderer.templates();
        let declarations = self
            .functions
            .iter()
            .map(|f| {
                let vars = Vars::new().with("name", &f.name);
                templates.render("serialization.declaration", &vars)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let vars = self
            .renderer
            .project_vars()
            .with("category", &self.category.name)
            .with("declarations", declarations.join("\n"));
        Ok(templates.render("serialization.header", &vars)?)
    }
}
