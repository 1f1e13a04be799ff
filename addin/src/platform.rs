//! Unified platform dispatch.
//!
//! Centralizes generator creation for every platform.

use std::path::Path;

use addingen_codegen::Addin;
use addingen_codegen_c::Generator as CGenerator;
use addingen_codegen_doxygen::Generator as DoxygenGenerator;
use addingen_codegen_excel::Generator as ExcelGenerator;
use addingen_codegen_serialization::{
    Registration, SerializationGenerator, ValueObjectsGenerator,
};
use addingen_ir::AddinIR;
use addingen_manifest::{Config, Platform};
use eyre::{Context, Result};

/// Create the generator for `platform`, applying overrides from `stubs`.
pub fn generator<'a>(
    platform: Platform,
    ir: &'a AddinIR,
    config: &Config,
    stubs: Option<&Path>,
) -> Result<Box<dyn Addin + 'a>> {
    let generator: Result<Box<dyn Addin + 'a>> = match platform {
        Platform::C => CGenerator::new(ir, stubs).map(|g| Box::new(g) as _),
        Platform::Excel => ExcelGenerator::new(ir, stubs).map(|g| {
            Box::new(g.with_registration(excel_registration(config))) as _
        }),
        Platform::Doxygen => DoxygenGenerator::new(ir, stubs).map(|g| Box::new(g) as _),
        Platform::Serialization => {
            SerializationGenerator::new(ir, stubs).map(|g| Box::new(g) as _)
        }
        Platform::ValueObjects => ValueObjectsGenerator::new(ir, stubs).map(|g| Box::new(g) as _),
    };
    generator.wrap_err_with(|| format!("failed to load templates for platform '{platform}'"))
}

/// Value object registration settings of the Excel addin.
fn excel_registration(config: &Config) -> Registration {
    Registration {
        include_dir: config.platform_root(Platform::Excel),
        namespace: config.excel_namespace(),
        base: config.platforms.excel.serialization_base.clone(),
    }
}
