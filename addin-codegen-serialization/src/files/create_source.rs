use std::path::{Path, PathBuf};

use addingen_core::GeneratedFile;
use addingen_ir::{Category, Function};
use eyre::Result;

use crate::Renderer;

const CREATOR_GROUPS: &[(&str, &str)] = &[
    ("conversions", "conversions"),
    ("library_call", "library_call"),
];

/// `create_<category>.cpp`: creators rebuilding objects from value objects.
pub struct CreateSource<'a> {
    renderer: &'a Renderer<'a>,
    category: &'a Category,
    functions: Vec<&'a Function>,
}

impl<'a> CreateSource<'a> {
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

impl GeneratedFile for CreateSource<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("create_{}.cpp", self.category.name))
    }

    fn render(&self) -> Result<String> {
        let creators = self
            .functions
            .iter()
            .map(|f| {
                self.renderer
                    .constructor("serialization.creator", f, CREATOR_GROUPS)
            })
            .collect::<Result<Vec<_>>>()?;
        let includes: String = self
            .category
            .serialization_includes
            .iter()
            .map(|include| format!("#include <{include}>\n"))
            .collect();
        let vars = self
            .renderer
            .project_vars()
            .with("category", &self.category.name)
            .with("includes", includes)
            .with("creators", creators.join("\n"));
        Ok(self
            .renderer
            .templates()
            .render("serialization.source", &vars)?)
    }
}
