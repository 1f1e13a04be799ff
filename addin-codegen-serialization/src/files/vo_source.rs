use std::path::{Path, PathBuf};

use addingen_core::GeneratedFile;
use addingen_ir::{Category, Function};
use eyre::Result;

use crate::Renderer;

const DEFINITION_GROUPS: &[(&str, &str)] = &[
    ("property_names", "property_names"),
    ("get_property", "get_property"),
    ("set_property", "set_property"),
    ("definition_parameters", "definition_parameters"),
    ("initializers", "initializers"),
];

/// `vo_<category>.cpp`: value object property access and constructors.
pub struct ValueObjectSource<'a> {
    renderer: &'a Renderer<'a>,
    category: &'a Category,
    functions: Vec<&'a Function>,
}

impl<'a> ValueObjectSource<'a> {
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

impl GeneratedFile for ValueObjectSource<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(format!("vo_{}.cpp", self.category.name))
    }

    fn render(&self) -> Result<String> {
        let definitions = self
            .functions
            .iter()
            .map(|f| {
                self.renderer
                    .constructor("vo.definition", f, DEFINITION_GROUPS)
            })
            .collect::<Result<Vec<_>>>()?;
        let vars = self
            .renderer
            .project_vars()
            .with("category", &self.category.name)
            .with("definitions", definitions.join("\n"));
        Ok(self.renderer.templates().render("vo.source", &vars)?)
    }
}
