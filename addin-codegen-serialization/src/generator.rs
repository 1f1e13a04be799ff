use std::path::Path;

use addingen_codegen::{Addin, RuleSet, TemplateSet};
use addingen_core::{FunctionTag, GeneratedFile};
use addingen_ir::{AddinIR, Category, Function};
use addingen_manifest::Platform;
use eyre::Result;
use tracing::debug;

use crate::{
    Renderer, SERIALIZATION_RULES, SERIALIZATION_TEMPLATES, VALUE_OBJECT_RULES,
    VALUE_OBJECT_TEMPLATES,
    files::{CreateAll, CreateHeader, CreateSource, Factory, ValueObjectHeader, ValueObjectSource},
};

/// Constructors of `category` that get a creator and a value object.
///
/// These are all constructors that generate code, whatever platforms they
/// list: every constructed object can be serialized.
pub fn constructors(category: &Category) -> Vec<&Function> {
    category
        .functions_where(|f| f.tag() == FunctionTag::Constructor && f.generates_code())
        .collect()
}

/// Generator for the serialization factory and its per-category creators.
pub struct SerializationGenerator<'a> {
    ir: &'a AddinIR,
    renderer: Renderer<'a>,
}

impl<'a> SerializationGenerator<'a> {
    /// Create a generator, applying template and rule overrides from `stubs`.
    pub fn new(ir: &'a AddinIR, stubs: Option<&Path>) -> Result<Self> {
        let templates = TemplateSet::load(SERIALIZATION_TEMPLATES.iter().copied(), stubs)?;
        let rules = RuleSet::load(SERIALIZATION_RULES, Platform::Serialization.as_str(), stubs)?;
        Ok(Self {
            ir,
            renderer: Renderer::new(&ir.meta, templates, rules),
        })
    }
}

impl Addin for SerializationGenerator<'_> {
    fn platform(&self) -> Platform {
        Platform::Serialization
    }

    fn templates(&self) -> &TemplateSet {
        self.renderer.templates()
    }

    fn files(&self) -> Result<Vec<Box<dyn GeneratedFile + '_>>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = Vec::new();
        let mut names = Vec::new();
        let mut registered = Vec::new();

        for category in &self.ir.categories {
            let functions = constructors(category);
            if functions.is_empty() {
                debug!(category = %category.name, "no constructors to serialize");
                continue;
            }
            files.push(Box::new(CreateHeader::new(
                &self.renderer,
                category,
                functions.clone(),
            )));
            files.push(Box::new(CreateSource::new(
                &self.renderer,
                category,
                functions.clone(),
            )));
            names.push(category.name.as_str());
            registered.push((category, functions));
        }

        files.push(Box::new(CreateAll::new(&self.renderer, names)));
        files.push(Box::new(Factory::new(&self.renderer, registered)));
        Ok(files)
    }
}

/// Generator for the value object classes.
pub struct ValueObjectsGenerator<'a> {
    ir: &'a AddinIR,
    renderer: Renderer<'a>,
}

impl<'a> ValueObjectsGenerator<'a> {
    /// Create a generator, applying template and rule overrides from `stubs`.
    pub fn new(ir: &'a AddinIR, stubs: Option<&Path>) -> Result<Self> {
        let templates = TemplateSet::load(VALUE_OBJECT_TEMPLATES.iter().copied(), stubs)?;
        let rules = RuleSet::load(VALUE_OBJECT_RULES, Platform::ValueObjects.as_str(), stubs)?;
        Ok(Self {
            ir,
            renderer: Renderer::new(&ir.meta, templates, rules),
        })
    }
}

impl Addin for ValueObjectsGenerator<'_> {
    fn platform(&self) -> Platform {
        Platform::ValueObjects
    }

    fn templates(&self) -> &TemplateSet {
        self.renderer.templates()
    }

    fn files(&self) -> Result<Vec<Box<dyn GeneratedFile + '_>>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = Vec::new();

        for category in &self.ir.categories {
            let functions = constructors(category);
            if functions.is_empty() {
                debug!(category = %category.name, "no value objects");
                continue;
            }
            files.push(Box::new(ValueObjectHeader::new(
                &self.renderer,
                category,
                functions.clone(),
            )));
            files.push(Box::new(ValueObjectSource::new(
                &self.renderer,
                category,
                functions,
            )));
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use addingen_codegen::testing::sample_ir;

    use super::*;

    #[test]
    fn test_constructors_only() {
        let ir = sample_ir().unwrap();
        let options = ir.categories.get("options").unwrap();
        let names: Vec<&str> = constructors(options)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["qlVanillaOption", "qlBarrierOption"]);

        let utilities = ir.categories.get("utilities").unwrap();
        assert!(constructors(utilities).is_empty());
    }
}
