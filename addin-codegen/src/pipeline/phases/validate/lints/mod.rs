//! Built-in lints for metadata validation.

mod duplicate_category;
mod duplicate_function;
mod empty_category;
mod empty_description;
mod loop_parameter;

pub use duplicate_category::DuplicateCategoryLint;
pub use duplicate_function::DuplicateFunctionLint;
pub use empty_category::EmptyCategoryLint;
pub use empty_description::EmptyDescriptionLint;
pub use loop_parameter::LoopParameterLint;

#[cfg(test)]
pub(crate) fn metadata(categories: &[&str]) -> addingen_manifest::Metadata {
    addingen_manifest::Metadata {
        categories: categories
            .iter()
            .map(|xml| addingen_manifest::parse_category(xml, "test.xml").unwrap())
            .collect(),
        enumerations: Vec::new(),
    }
}
