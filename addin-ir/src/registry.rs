//! The category registry.

use crate::Function;

/// Root of the IR: project metadata, categories and enumerations.
#[derive(Debug, Clone, PartialEq)]
pub struct AddinIR {
    pub meta: ProjectMeta,
    pub categories: CategoryList,
    pub enumerations: Vec<Enumeration>,
}

/// Project-level names used in generated code.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectMeta {
    pub name: String,
    pub namespace_objects: String,
    pub lib_root: String,
}

/// Ordered list of categories, constructed once per run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryList {
    categories: Vec<Category>,
}

impl CategoryList {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a category by name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Every function in category-then-function order.
    pub fn functions(&self) -> impl Iterator<Item = (&Category, &Function)> {
        self.categories
            .iter()
            .flat_map(|c| c.functions.iter().map(move |f| (c, f)))
    }

    /// Look up a function by name across all categories.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions().map(|(_, f)| f).find(|f| f.name == name)
    }
}

impl<'a> IntoIterator for &'a CategoryList {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A category of related functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// Headers included by the generated serialization code.
    pub serialization_includes: Vec<String>,
    pub functions: Vec<Function>,
}

impl Category {
    /// Functions matching a predicate, in file order.
    pub fn functions_where<'a>(
        &'a self,
        predicate: impl Fn(&Function) -> bool + 'a,
    ) -> impl Iterator<Item = &'a Function> + 'a {
        self.functions.iter().filter(move |f| predicate(f))
    }
}

/// An enumerated type.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumeration {
    pub name: String,
    pub class: String,
    pub description: String,
    pub values: Vec<EnumValue>,
}

/// A `(string, value)` pair of an enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub string: String,
    pub value: String,
}
