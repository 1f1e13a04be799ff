use std::path::Path;

use addingen_codegen::{Addin, RuleSet, TemplateSet};
use addingen_core::{GeneratedFile, Implementation};
use addingen_ir::{AddinIR, Category, Function};
use addingen_manifest::Platform;
use eyre::Result;
use tracing::debug;

use crate::{
    PLATFORM_NAME, RULES, Renderer, TEMPLATES,
    files::{AddinHeader, CategoryHeader, CategorySource},
};

/// C code generator producing prototypes and function bodies per category.
pub struct Generator<'a> {
    ir: &'a AddinIR,
    renderer: Renderer<'a>,
}

impl<'a> Generator<'a> {
    /// Create a generator, applying template and rule overrides from `stubs`.
    pub fn new(ir: &'a AddinIR, stubs: Option<&Path>) -> Result<Self> {
        let templates = TemplateSet::load(TEMPLATES.iter().copied(), stubs)?;
        let rules = RuleSet::load(RULES, Platform::C.as_str(), stubs)?;
        Ok(Self {
            ir,
            renderer: Renderer::new(&ir.meta, templates, rules),
        })
    }

    /// Functions declared in the category header.
    pub fn header_functions(category: &Category) -> Vec<&Function> {
        category
            .functions_where(|f| {
                f.generates_code() && f.supports(PLATFORM_NAME, Implementation::Manual)
            })
            .collect()
    }

    /// Functions whose body is generated.
    pub fn body_functions(category: &Category) -> Vec<&Function> {
        category
            .functions_where(|f| {
                f.generates_code() && f.supports(PLATFORM_NAME, Implementation::Auto)
            })
            .collect()
    }
}

impl Addin for Generator<'_> {
    fn platform(&self) -> Platform {
        Platform::C
    }

    fn templates(&self) -> &TemplateSet {
        self.renderer.templates()
    }

    fn files(&self) -> Result<Vec<Box<dyn GeneratedFile + '_>>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = Vec::new();
        let mut headers = Vec::new();

        for category in &self.ir.categories {
            let declared = Self::header_functions(category);
            if declared.is_empty() {
                debug!(category = %category.name, "no C functions");
                continue;
            }
            headers.push(category.name.as_str());
            files.push(Box::new(CategoryHeader::new(
                &self.renderer,
                category,
                declared,
            )));

            let defined = Self::body_functions(category);
            if !defined.is_empty() {
                files.push(Box::new(CategorySource::new(
                    &self.renderer,
                    category,
                    defined,
                )));
            }
        }

        files.push(Box::new(AddinHeader::new(&self.renderer, headers)));
        Ok(files)
    }
}
