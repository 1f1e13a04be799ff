use addingen_codegen::{RuleSet, TemplateSet, Vars, join_nonempty};
use addingen_core::Implementation;
use addingen_ir::{Enumeration, Function, Parameter};
use eyre::Result;

/// Renders the fragments of documentation pages.
pub struct Renderer {
    templates: TemplateSet,
    rules: RuleSet,
}

impl Renderer {
    pub fn new(templates: TemplateSet, rules: RuleSet) -> Self {
        Self { templates, rules }
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Render the function list of a page, one `\ref` per line.
    pub fn function_list<'f>(
        &self,
        functions: impl IntoIterator<Item = &'f Function>,
    ) -> Result<String> {
        let items = functions
            .into_iter()
            .map(|f| {
                let vars = Vars::new().with("name", &f.name);
                self.templates.render("doxygen.list_item", &vars)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items.join("\n"))
    }

    /// Render the full documentation of a function.
    pub fn function(&self, function: &Function) -> Result<String> {
        let parameters = documented_parameters(&function.parameters);
        let description = function
            .long_description
            .as_deref()
            .unwrap_or(&function.description);

        let vars = Vars::new()
            .with("name", &function.name)
            .with(
                "return_type",
                self.rules
                    .group("return_type")?
                    .apply_return("", &function.return_value)?,
            )
            .with("signature", self.rules.apply("signature", &parameters)?)
            .with("description", description)
            .with("platforms", platforms(function))
            .with(
                "parameter_docs",
                self.rules.apply("parameter_docs", &parameters)?,
            )
            .with("return_description", &function.return_value.description);
        Ok(self.templates.render("doxygen.function", &vars)?)
    }

    /// Render one enumerated type as a table.
    pub fn enumeration(&self, enumeration: &Enumeration) -> Result<String> {
        let rows = enumeration
            .values
            .iter()
            .map(|v| {
                let vars = Vars::new().with("string", &v.string).with("value", &v.value);
                self.templates.render("doxygen.enum_row", &vars)
            })
            .collect::<Result<String, _>>()?;

        let vars = Vars::new()
            .with("name", &enumeration.name)
            .with("description", &enumeration.description)
            .with("class", &enumeration.class)
            .with("rows", rows);
        Ok(self.templates.render("doxygen.enumeration", &vars)?)
    }
}

/// Parameters with their default value appended to the description.
fn documented_parameters(parameters: &[Parameter]) -> Vec<Parameter> {
    parameters
        .iter()
        .map(|p| {
            let mut p = p.clone();
            if let Some(default) = &p.default {
                let note = format!("Default value = {default}.");
                p.description = join_nonempty([p.description.as_str(), note.as_str()], " ");
            }
            p
        })
        .collect()
}

fn platforms(function: &Function) -> String {
    if function.platforms.is_empty() {
        return "none".to_string();
    }
    function
        .platforms
        .iter()
        .map(|p| match p.implementation {
            Implementation::Auto => p.name.clone(),
            other => format!("{} ({})", p.name, other),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
