use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use addingen_ir::{Category, Function};
use eyre::Result;

use crate::Renderer;

/// `serializationfactory.cpp`: registers one creator per constructor,
/// grouped under a comment naming each category.
pub struct Factory<'a> {
    renderer: &'a Renderer<'a>,
    categories: Vec<(&'a Category, Vec<&'a Function>)>,
}

impl<'a> Factory<'a> {
    pub fn new(
        renderer: &'a Renderer<'a>,
        categories: Vec<(&'a Category, Vec<&'a Function>)>,
    ) -> Self {
        Self {
            renderer,
            categories,
        }
    }
}

impl GeneratedFile for Factory<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("serializationfactory.cpp")
    }

    fn render(&self) -> Result<String> {
        let templates = self.renderer.templates();
        let mut registrations = String::new();
        for (category, functions) in &self.categories {
            let vars = Vars::new().with("display_name", &category.display_name);
            registrations.push_str(&templates.render("serialization.register_category", &vars)?);
            for function in functions {
                let vars = Vars::new().with("name", &function.name);
                registrations.push_str(&templates.render("serialization.register", &vars)?);
            }
        }
        let vars = self
            .renderer
            .project_vars()
            .with("registrations", registrations);
        Ok(templates.render("serialization.factory", &vars)?)
    }
}
