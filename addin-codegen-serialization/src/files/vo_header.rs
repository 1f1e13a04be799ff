use std::path::{Path, PathBuf};

use addingen_core::GeneratedFile;
use addingen_ir::{Category, Function};
use eyre::Result;

use crate::Renderer;

const DECLARATION_GROUPS: &[(&str, &str)] = &[
    ("parameters", "constructor_parameters"),
    ("members", "members"),
    ("serialize", "serialize"),
];

/// `vo_<category>.hpp`: value object class declarations.
pub struct ValueObjectHeader<'a> {
    renderer: &'a Renderer<'a>,
    category: &'a Category,
    functions: Vec<&'a Function>,
}

impl<'a> ValueObjectHeader<'a> {
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

impl GeneratedFile for ValueObjectHeader<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("vo_{}.hpp", self.category.name))
    }

    fn render(&self) -> Result<String> {
        let classes = self
            .functions
            .iter()
            .map(|f| {
                self.renderer
                    .constructor("vo.declaration", f, DECLARATION_GROUPS)
            })
            .collect::<Result<Vec<_>>>()?;
        let vars = self
            .renderer
            .project_vars()
            .with("category", &self.category.name)
            .with("classes", classes.join("\n"));
        Ok(self.renderer.templates().render("vo.header", &vars)?)
    }
}
