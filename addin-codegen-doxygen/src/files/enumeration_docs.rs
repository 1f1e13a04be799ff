use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use addingen_ir::Enumeration;
use eyre::Result;

use crate::Renderer;

/// `enums.docs`: one table per enumerated type.
pub struct EnumerationDocs<'a> {
    renderer: &'a Renderer,
    enumerations: &'a [Enumeration],
}

impl<'a> EnumerationDocs<'a> {
    pub fn new(renderer: &'a Renderer, enumerations: &'a [Enumeration]) -> Self {
        Self {
            renderer,
            enumerations,
        }
    }
}

impl GeneratedFile for EnumerationDocs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("enums.docs")
    }

    fn render(&self) -> Result<String> {
        let tables = self
            .enumerations
            .iter()
            .map(|e| self.renderer.enumeration(e))
            .collect::<Result<Vec<_>>>()?;
        let vars = Vars::new().with("enumerations", tables.join("\n"));
        Ok(self.renderer.templates().render("doxygen.enums", &vars)?)
    }
}
