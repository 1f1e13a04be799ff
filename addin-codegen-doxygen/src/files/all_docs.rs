use std::path::{Path, PathBuf};

use addingen_codegen::Vars;
use addingen_core::GeneratedFile;
use addingen_ir::Function;
use eyre::Result;

use crate::Renderer;

/// `all.docs`: alphabetical index of every function.
pub struct AllDocs<'a> {
    renderer: &'a Renderer,
    functions: Vec<&'a Function>,
}

impl<'a> AllDocs<'a> {
    pub fn new(renderer: &'a Renderer, functions: Vec<&'a Function>) -> Self {
        Self {
            renderer,
            functions,
        }
    }
}

impl GeneratedFile for AllDocs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("all.docs")
    }

    fn render(&self) -> Result<String> {
        let vars = Vars::new().with(
            "function_list",
            self.renderer
                .function_list(self.functions.iter().copied())?,
        );
        Ok(self.renderer.templates().render("doxygen.all", &vars)?)
    }
}
