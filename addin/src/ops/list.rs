//! List operation - summarize loaded metadata.

use addingen_core::Implementation;
use addingen_manifest::{FunctionDef, Metadata};

use crate::reports::{CategoryInfo, FunctionInfo, ListReport};

/// Execute the list operation.
pub fn list(metadata: &Metadata) -> ListReport {
    let categories = metadata
        .categories
        .iter()
        .map(|category| CategoryInfo {
            name: category.name.clone(),
            display_name: category.display_name.clone(),
            functions: category.functions.iter().map(function_info).collect(),
        })
        .collect();

    ListReport {
        categories,
        enumerations: metadata
            .enumerations
            .iter()
            .map(|e| e.name.clone())
            .collect(),
    }
}

fn function_info(function: &FunctionDef) -> FunctionInfo {
    let platforms = if function.documentation_only {
        "documentation only".to_string()
    } else if function.platforms.is_empty() {
        "none".to_string()
    } else {
        function
            .platforms
            .iter()
            .map(|p| match p.implementation {
                Implementation::Auto => p.name.clone(),
                other => format!("{} ({})", p.name, other),
            })
            .collect::<Vec<_>>()
            .join(", ")
    };

    FunctionInfo {
        name: function.name.clone(),
        kind: function.tag.to_string(),
        platforms,
    }
}

#[cfg(test)]
mod tests {
    use addingen_codegen::testing::sample_project;

    use super::*;

    #[test]
    fn test_list_sample() {
        let metadata = sample_project().unwrap().load_metadata().unwrap();
        let report = list(&metadata);

        let names: Vec<&str> = report.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["options", "quotes", "utilities"]);
        assert_eq!(report.enumerations, vec!["OptionType", "DayCounter"]);

        let barrier = &report.categories[0].functions[1];
        assert_eq!(barrier.name, "qlBarrierOption");
        assert_eq!(barrier.kind, "Constructor");
        assert_eq!(barrier.platforms, "Excel, C (manual)");

        let list_objects = report.categories[2]
            .functions
            .iter()
            .find(|f| f.name == "qlListObjects")
            .unwrap();
        assert_eq!(list_objects.platforms, "documentation only");
    }
}
