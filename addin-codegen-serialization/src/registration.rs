//! Value object type registration for an addin binary.
//!
//! boost::serialization registers classes with the archive in the binary
//! that reads and writes them, so each addin carries its own copy of these
//! files under `Serialization/` in its output root.

use addingen_codegen::{TemplateSet, Vars};
use addingen_core::GeneratedFile;
use addingen_ir::{AddinIR, ProjectMeta};
use tracing::debug;

use crate::{
    constructors,
    files::{RegisterAll, RegisterFactory, RegisterHeader, RegisterSource},
};

/// Built-in templates of the registration files, by name.
///
/// Generators embedding the registration add these to their own set.
pub const REGISTRATION_TEMPLATES: &[(&str, &str)] = &[
    ("registration.header", include_str!("../stubs/registration.header")),
    ("registration.source", include_str!("../stubs/registration.source")),
    (
        "registration.register_type",
        include_str!("../stubs/registration.register_type"),
    ),
    ("registration.all", include_str!("../stubs/registration.all")),
    ("registration.include", include_str!("../stubs/registration.include")),
    ("registration.factory", include_str!("../stubs/registration.factory")),
    (
        "registration.register_category",
        include_str!("../stubs/registration.register_category"),
    ),
    ("registration.base_out", include_str!("../stubs/registration.base_out")),
    ("registration.base_in", include_str!("../stubs/registration.base_in")),
];

/// Settings of the addin registering the value object types.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    /// Include directory of the addin sources, e.g. `Addins/Excel`.
    pub include_dir: String,
    /// Namespace of the addin's own code.
    pub namespace: String,
    /// Namespace whose `register_in`/`register_out` run before the addin's.
    pub base: Option<String>,
}

/// Everything a registration file renders from.
#[derive(Clone, Copy)]
pub struct Registrar<'a> {
    pub settings: &'a Registration,
    pub project: &'a ProjectMeta,
    pub templates: &'a TemplateSet,
}

impl<'a> Registrar<'a> {
    pub fn new(
        settings: &'a Registration,
        project: &'a ProjectMeta,
        templates: &'a TemplateSet,
    ) -> Self {
        Self {
            settings,
            project,
            templates,
        }
    }

    /// Variables every registration template may use.
    pub fn vars(&self) -> Vars {
        Vars::new()
            .with("guard", format!("addin_{}", self.project.name.to_lowercase()))
            .with("lib_root", &self.project.lib_root)
            .with("namespace", &self.project.namespace_objects)
            .with("addin_namespace", &self.settings.namespace)
            .with("include_dir", &self.settings.include_dir)
    }

    /// Registration files for every category with constructors, followed by
    /// `serialization_all.hpp` and `serializationfactory.cpp`.
    ///
    /// Paths are relative to the addin's output root.
    pub fn files(self, ir: &'a AddinIR) -> Vec<Box<dyn GeneratedFile + 'a>> {
        let mut files: Vec<Box<dyn GeneratedFile + 'a>> = Vec::new();
        let mut registered = Vec::new();

        for category in &ir.categories {
            let functions = constructors(category);
            if functions.is_empty() {
                debug!(category = %category.name, "no value object types to register");
                continue;
            }
            files.push(Box::new(RegisterHeader::new(self, category)));
            files.push(Box::new(RegisterSource::new(self, category, functions)));
            registered.push(category);
        }

        files.push(Box::new(RegisterAll::new(self, registered.clone())));
        files.push(Box::new(RegisterFactory::new(self, registered)));
        files
    }
}
