//! Lower phase - post-processes metadata into the registry IR.
//!
//! This is where implicit parameters are added:
//!
//! | kind | prepended | appended |
//! |---|---|---|
//! | Constructor | `objectID` | `trigger`, then `permanent` |
//! | Member | `objectID` | `trigger` |
//! | EnumerationMember | `enumerationID` | `trigger` |
//! | Procedure | | `trigger` |
//!
//! `trigger` is left out when the function sets `dependencyTrigger="false"`.

use addingen_core::{DataType, FunctionTag, TensorRank};
use addingen_ir::{
    AddinIR, Category, CategoryList, EnumValue, Enumeration, Function, FunctionKind, Parameter,
    PlatformSupport, ProjectMeta, ReturnValue,
};
use addingen_manifest::{CategoryDef, EnumerationDef, FunctionDef, Metadata, ParameterDef};
use eyre::{Result, eyre};
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that transforms metadata into the registry IR.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Post-process metadata into the function registry"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = lower_metadata(&ctx.project, &ctx.metadata)?;
        debug!(
            categories = ir.categories.len(),
            enumerations = ir.enumerations.len(),
            "lowered metadata"
        );
        ctx.ir = Some(ir);
        Ok(())
    }
}

/// Lower metadata into the registry IR.
pub fn lower_metadata(project: &ProjectMeta, metadata: &Metadata) -> Result<AddinIR> {
    let categories = metadata
        .categories
        .iter()
        .map(|c| lower_category(project, c))
        .collect::<Result<Vec<_>>>()?;

    Ok(AddinIR {
        meta: project.clone(),
        categories: CategoryList::new(categories),
        enumerations: metadata.enumerations.iter().map(lower_enumeration).collect(),
    })
}

fn lower_category(project: &ProjectMeta, category: &CategoryDef) -> Result<Category> {
    Ok(Category {
        name: category.name.clone(),
        display_name: category.display_name.clone(),
        description: category.description.clone(),
        serialization_includes: category.serialization_includes.clone(),
        functions: category
            .functions
            .iter()
            .map(|f| lower_function(project, f))
            .collect::<Result<Vec<_>>>()?,
    })
}

fn lower_function(project: &ProjectMeta, def: &FunctionDef) -> Result<Function> {
    let kind = lower_kind(def)?;
    let mut parameters: Vec<Parameter> = def.parameters.iter().map(lower_parameter).collect();

    match &kind {
        FunctionKind::Constructor { .. } => {
            parameters.insert(0, object_id_created());
        }
        FunctionKind::Member { class, .. } => {
            parameters.insert(0, object_id_existing(class));
        }
        FunctionKind::EnumerationMember { class, .. } => {
            parameters.insert(0, enumeration_id(class));
        }
        FunctionKind::Procedure { .. } => {}
    }
    if def.dependency_trigger {
        parameters.push(trigger());
    }
    if kind.tag() == FunctionTag::Constructor {
        parameters.push(permanent());
    }

    // Constructors always get the generated description; the declared one
    // survives as the long description.
    let (description, long_description) = match &kind {
        FunctionKind::Constructor { library_function } => {
            let description = format!(
                "Construct an object of class {} and return its id",
                library_function
            );
            let long_description = def
                .long_description
                .clone()
                .or_else(|| def.description.clone())
                .unwrap_or_else(|| description.clone());
            (description, Some(long_description))
        }
        _ => (
            def.description.clone().unwrap_or_default(),
            def.long_description.clone(),
        ),
    };

    let return_value = match (&kind, &def.return_value) {
        (FunctionKind::Constructor { .. }, _) => ReturnValue {
            data_type: DataType::String,
            rank: TensorRank::Scalar,
            description: "the ID of the new object".to_string(),
        },
        (_, Some(rv)) => ReturnValue {
            data_type: rv.data_type,
            rank: rv.rank,
            description: rv.description.clone(),
        },
        (_, None) => {
            return Err(eyre!("function '{}' has no return value", def.name));
        }
    };

    Ok(Function {
        name: def.name.clone(),
        alias: def
            .alias
            .clone()
            .unwrap_or_else(|| format!("{}::{}", project.namespace_objects, def.name)),
        kind,
        description,
        long_description,
        documentation_only: def.documentation_only,
        dependency_trigger: def.dependency_trigger,
        platforms: def
            .platforms
            .iter()
            .map(|p| PlatformSupport {
                name: p.name.clone(),
                implementation: p.implementation,
                xl_macro: p.xl_macro,
                calc_in_wizard: p.calc_in_wizard,
            })
            .collect(),
        parameters,
        return_value,
    })
}

fn lower_kind(def: &FunctionDef) -> Result<FunctionKind> {
    let library_function = || {
        def.library_function
            .clone()
            .ok_or_else(|| eyre!("function '{}' has no library function", def.name))
    };
    let class = || {
        def.class
            .clone()
            .ok_or_else(|| eyre!("function '{}' has no class", def.name))
    };

    Ok(match def.tag {
        FunctionTag::Constructor => FunctionKind::Constructor {
            library_function: library_function()?,
        },
        FunctionTag::Member => FunctionKind::Member {
            library_function: library_function()?,
            class: class()?,
            super_type: def.super_type.clone(),
            loop_parameter: def.loop_parameter.clone(),
        },
        FunctionTag::EnumerationMember => FunctionKind::EnumerationMember {
            library_function: library_function()?,
            class: class()?,
            super_type: def.super_type.clone(),
            loop_parameter: def.loop_parameter.clone(),
        },
        FunctionTag::Procedure => FunctionKind::Procedure {
            loop_parameter: def.loop_parameter.clone(),
        },
    })
}

fn lower_parameter(def: &ParameterDef) -> Parameter {
    Parameter {
        name: def.name.clone(),
        data_type: def.data_type,
        rank: def.rank,
        default: def.default.clone(),
        description: def.description.clone(),
        implicit: false,
    }
}

fn lower_enumeration(def: &EnumerationDef) -> Enumeration {
    Enumeration {
        name: def.name.clone(),
        class: def.class.clone(),
        description: def.description.clone(),
        values: def
            .values
            .iter()
            .map(|v| EnumValue {
                string: v.string.clone(),
                value: v.value.clone(),
            })
            .collect(),
    }
}

fn object_id_created() -> Parameter {
    Parameter::implicit("objectID", DataType::String, "id of object to be created")
}

fn object_id_existing(class: &str) -> Parameter {
    Parameter::implicit(
        "objectID",
        DataType::String,
        format!("id of existing {} object", class),
    )
}

fn enumeration_id(class: &str) -> Parameter {
    Parameter::implicit(
        "enumerationID",
        DataType::String,
        format!("id of enumeration of class {}", class),
    )
}

fn trigger() -> Parameter {
    Parameter::implicit("trigger", DataType::Any, "dependency tracking trigger")
}

fn permanent() -> Parameter {
    Parameter::implicit("permanent", DataType::Bool, "object permanent/nonpermanent")
        .with_default("false")
}
