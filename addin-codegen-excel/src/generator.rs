use std::path::Path;

use addingen_codegen::{Addin, RuleSet, TemplateSet};
use addingen_codegen_serialization::{REGISTRATION_TEMPLATES, Registrar, Registration};
use addingen_core::{GeneratedFile, Implementation};
use addingen_ir::{AddinIR, Category, Function};
use addingen_manifest::Platform;
use eyre::Result;
use tracing::debug;

use crate::{
    PLATFORM_NAME, RULES, Renderer, TEMPLATES,
    files::{CategoryFunctions, CategoryRegistration, RegisterFunctions},
};

/// Excel code generator producing worksheet functions and their registration.
pub struct Generator<'a> {
    ir: &'a AddinIR,
    renderer: Renderer<'a>,
    registration: Registration,
}

impl<'a> Generator<'a> {
    /// Create a generator, applying template and rule overrides from `stubs`.
    pub fn new(ir: &'a AddinIR, stubs: Option<&Path>) -> Result<Self> {
        let templates = TemplateSet::load(
            TEMPLATES.iter().chain(REGISTRATION_TEMPLATES).copied(),
            stubs,
        )?;
        let rules = RuleSet::load(RULES, Platform::Excel.as_str(), stubs)?;
        let registration = Registration {
            include_dir: Platform::Excel.default_root(&ir.meta.lib_root),
            namespace: format!("{}XL", ir.meta.name),
            base: None,
        };
        Ok(Self {
            ir,
            renderer: Renderer::new(&ir.meta, templates, rules),
            registration,
        })
    }

    /// Replace the value object registration settings.
    pub fn with_registration(mut self, registration: Registration) -> Self {
        self.registration = registration;
        self
    }

    /// Functions registered with Excel.
    pub fn register_functions(category: &Category) -> Vec<&Function> {
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
        Platform::Excel
    }

    fn templates(&self) -> &TemplateSet {
        self.renderer.templates()
    }

    fn files(&self) -> Result<Vec<Box<dyn GeneratedFile + '_>>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = Vec::new();
        let mut registered = Vec::new();

        for category in &self.ir.categories {
            let functions = Self::register_functions(category);
            if functions.is_empty() {
                debug!(category = %category.name, "no Excel functions");
                continue;
            }

            let defined = Self::body_functions(category);
            if !defined.is_empty() {
                files.push(Box::new(CategoryFunctions::new(
                    &self.renderer,
                    category,
                    defined,
                )));
            }
            files.push(Box::new(CategoryRegistration::new(
                &self.renderer,
                category,
                functions,
            )));
            registered.push(category.name.as_str());
        }

        files.push(Box::new(RegisterFunctions::new(&self.renderer, registered)));

        let registrar = Registrar::new(
            &self.registration,
            &self.ir.meta,
            self.renderer.templates(),
        );
        files.extend(registrar.files(self.ir));
        Ok(files)
    }
}
