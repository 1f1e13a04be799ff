use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use eyre::Result;

use crate::Renderer;

/// `Register/register_all.cpp`: `registerFunctions` calling every category.
pub struct RegisterFunctions<'a> {
    renderer: &'a Renderer<'a>,
    categories: Vec<&'a str>,
}

impl<'a> RegisterFunctions<'a> {
    pub fn new(renderer: &'a Renderer<'a>, categories: Vec<&'a str>) -> Self {
        Self {
            renderer,
            categories,
        }
    }
}

impl GeneratedFile for RegisterFunctions<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("Register").join("register_all.cpp")
    }

    fn render(&self) -> Result<String> {
        let declarations: String = self
            .categories
            .iter()
            .map(|name| format!("extern void register_{name}(const XLOPER&);\n"))
            .collect();
        let calls: String = self
            .categories
            .iter()
            .map(|name| format!("    register_{name}(xDll);\n"))
            .collect();
        let vars = Vars::new()
            .with("declarations", declarations)
            .with("calls", calls);
        Ok(self
            .renderer
            .templates()
            .render("excel.register_all", &vars)?)
    }
}
