use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use addingen_ir::{Category, Function};
use eyre::Result;

use crate::registration::Registrar;

const DIR: &str = "Serialization";

/// `serialization_<category>.hpp`: declares `register_<category>` for both
/// archive directions.
pub struct RegisterHeader<'a> {
    registrar: Registrar<'a>,
    category: &'a Category,
}

impl<'a> RegisterHeader<'a> {
    pub fn new(registrar: Registrar<'a>, category: &'a Category) -> Self {
        Self {
            registrar,
            category,
        }
    }
}

impl GeneratedFile for RegisterHeader<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(DIR)
            .join(format!("serialization_{}.hpp", self.category.name))
    }

    fn render(&self) -> Result<String> {
        let vars = self.registrar.vars().with("category", &self.category.name);
        Ok(self.registrar.templates.render("registration.header", &vars)?)
    }
}

/// `serialization_<category>.cpp`: registers the value object class of each
/// constructor with the archive.
pub struct RegisterSource<'a> {
    registrar: Registrar<'a>,
    category: &'a Category,
    functions: Vec<&'a Function>,
}

impl<'a> RegisterSource<'a> {
    pub fn new(
        registrar: Registrar<'a>,
        category: &'a Category,
        functions: Vec<&'a Function>,
    ) -> Self {
        Self {
            registrar,
            category,
            functions,
        }
    }
}

impl GeneratedFile for RegisterSource<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(DIR)
            .join(format!("serialization_{}.cpp", self.category.name))
    }

    fn render(&self) -> Result<String> {
        let templates = self.registrar.templates;
        let registrations = self
            .functions
            .iter()
            .map(|f| {
                let vars = self.registrar.vars().with("name", &f.name);
                templates.render("registration.register_type", &vars)
            })
            .collect::<Result<String, _>>()?;
        let vars = self
            .registrar
            .vars()
            .with("category", &self.category.name)
            .with("registrations", registrations);
        Ok(templates.render("registration.source", &vars)?)
    }
}

/// `serialization_all.hpp`, including every category's registration header.
pub struct RegisterAll<'a> {
    registrar: Registrar<'a>,
    categories: Vec<&'a Category>,
}

impl<'a> RegisterAll<'a> {
    pub fn new(registrar: Registrar<'a>, categories: Vec<&'a Category>) -> Self {
        Self {
            registrar,
            categories,
        }
    }
}

impl GeneratedFile for RegisterAll<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(DIR).join("serialization_all.hpp")
    }

    fn render(&self) -> Result<String> {
        let templates = self.registrar.templates;
        let includes = self
            .categories
            .iter()
            .map(|c| {
                let vars = self.registrar.vars().with("category", &c.name);
                templates.render("registration.include", &vars)
            })
            .collect::<Result<String, _>>()?;
        let vars = self.registrar.vars().with("includes", includes);
        Ok(templates.render("registration.all", &vars)?)
    }
}

/// `serializationfactory.cpp`: the addin's `register_in` and `register_out`,
/// calling every category's registration after the base namespace's.
pub struct RegisterFactory<'a> {
    registrar: Registrar<'a>,
    categories: Vec<&'a Category>,
}

impl<'a> RegisterFactory<'a> {
    pub fn new(registrar: Registrar<'a>, categories: Vec<&'a Category>) -> Self {
        Self {
            registrar,
            categories,
        }
    }

    fn base_call(&self, template: &str) -> Result<String> {
        match &self.registrar.settings.base {
            Some(base) => {
                let vars = Vars::new().with("base", base);
                Ok(self.registrar.templates.render(template, &vars)?)
            }
            None => Ok(String::new()),
        }
    }
}

impl GeneratedFile for RegisterFactory<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(DIR).join("serializationfactory.cpp")
    }

    fn render(&self) -> Result<String> {
        let templates = self.registrar.templates;
        let registrations = self
            .categories
            .iter()
            .map(|c| {
                let vars = Vars::new()
                    .with("display_name", &c.display_name)
                    .with("category", &c.name);
                templates.render("registration.register_category", &vars)
            })
            .collect::<Result<String, _>>()?;
        let vars = self
            .registrar
            .vars()
            .with("registrations", registrations)
            .with("base_out", self.base_call("registration.base_out")?)
            .with("base_in", self.base_call("registration.base_in")?);
        Ok(templates.render("registration.factory", &vars)?)
    }
}
