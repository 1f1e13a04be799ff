//! List command report data structures.

use super::output::{Output, Report};

/// Report data listing the metadata of a project.
#[derive(Debug)]
pub struct ListReport {
    pub categories: Vec<CategoryInfo>,
    /// Enumerated type names.
    pub enumerations: Vec<String>,
}

#[derive(Debug)]
pub struct CategoryInfo {
    pub name: String,
    pub display_name: String,
    pub functions: Vec<FunctionInfo>,
}

#[derive(Debug)]
pub struct FunctionInfo {
    pub name: String,
    /// Function kind, e.g. `Constructor`.
    pub kind: String,
    /// Supported platforms, e.g. `Excel, C (manual)`.
    pub platforms: String,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.categories.is_empty() {
            out.preformatted("No categories defined");
        }

        for category in &self.categories {
            out.section(&format!("{} ({})", category.display_name, category.name));
            if category.functions.is_empty() {
                out.preformatted("  (no functions)");
            }
            for function in &category.functions {
                out.list_item(&format!(
                    "{} [{}] {}",
                    function.name, function.kind, function.platforms
                ));
            }
            out.newline();
        }

        if !self.enumerations.is_empty() {
            out.section("Enumerations");
            for name in &self.enumerations {
                out.list_item(name);
            }
        }
    }
}
