use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use addingen_ir::{Category, Function};
use eyre::Result;

use crate::Renderer;

/// `Register/register_<category>.cpp`: one `xlfRegister` call per function.
///
/// Functions implemented by hand are registered here too.
pub struct CategoryRegistration<'a> {
    renderer: &'a Renderer<'a>,
    category: &'a Category,
    functions: Vec<&'a Function>,
}

impl<'a> CategoryRegistration<'a> {
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

impl GeneratedFile for CategoryRegistration<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("Register")
            .join(format!("register_{}.cpp", self.category.name))
    }

    fn render(&self) -> Result<String> {
        let registrations = self
            .functions
            .iter()
            .map(|f| self.renderer.register_call(f, self.category))
            .collect::<Result<Vec<_>>>()?;
        let vars = Vars::new()
            .with("category", &self.category.name)
            .with("registrations", registrations.join("\n"));
        Ok(self
            .renderer
            .templates()
            .render("excel.register_category", &vars)?)
    }
}
