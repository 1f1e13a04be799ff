use std::path::Path;

use addingen_codegen::{Addin, RuleSet, TemplateSet};
use addingen_core::GeneratedFile;
use addingen_ir::{AddinIR, Function};
use addingen_manifest::Platform;
use eyre::Result;

use crate::{
    RULES, Renderer, TEMPLATES,
    files::{AllDocs, CategoryDocs, EnumerationDocs},
};

/// Documentation generator producing doxygen pages.
///
/// Every function is documented, including documentation-only and
/// hand-written ones.
pub struct Generator<'a> {
    ir: &'a AddinIR,
    renderer: Renderer,
}

impl<'a> Generator<'a> {
    /// Create a generator, applying template and rule overrides from `stubs`.
    pub fn new(ir: &'a AddinIR, stubs: Option<&Path>) -> Result<Self> {
        let templates = TemplateSet::load(TEMPLATES.iter().copied(), stubs)?;
        let rules = RuleSet::load(RULES, Platform::Doxygen.as_str(), stubs)?;
        Ok(Self {
            ir,
            renderer: Renderer::new(templates, rules),
        })
    }

    /// Every function, ordered alphabetically (case-insensitive).
    pub fn sorted_functions(&self) -> Vec<&'a Function> {
        let ir = self.ir;
        let mut functions: Vec<&'a Function> = ir.categories.functions().map(|(_, f)| f).collect();
        functions.sort_by_key(|f| f.name.to_lowercase());
        functions
    }
}

impl Addin for Generator<'_> {
    fn platform(&self) -> Platform {
        Platform::Doxygen
    }

    fn templates(&self) -> &TemplateSet {
        self.renderer.templates()
    }

    fn files(&self) -> Result<Vec<Box<dyn GeneratedFile + '_>>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = Vec::new();

        for category in self.ir.categories.iter().filter(|c| !c.functions.is_empty()) {
            files.push(Box::new(CategoryDocs::new(&self.renderer, category)));
        }

        let functions = self.sorted_functions();
        if !functions.is_empty() {
            files.push(Box::new(AllDocs::new(&self.renderer, functions)));
        }

        if !self.ir.enumerations.is_empty() {
            files.push(Box::new(EnumerationDocs::new(
                &self.renderer,
                &self.ir.enumerations,
            )));
        }

        Ok(files)
    }
}
