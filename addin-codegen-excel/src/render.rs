use addingen_codegen::{RuleSet, TagTable, TemplateSet, Vars};
use addingen_ir::{Category, Function, ProjectMeta};
use eyre::Result;
use tracing::warn;

use crate::PLATFORM_NAME;

const BODY: TagTable<&str> = TagTable {
    constructor: "excel.body.constructor",
    member: "excel.body.member",
    enumeration_member: "excel.body.enumeration_member",
    procedure: "excel.body.procedure",
};

// constructors never loop
const LOOP_BODY: TagTable<&str> = TagTable {
    constructor: "excel.body.constructor",
    member: "excel.body.member_loop",
    enumeration_member: "excel.body.enumeration_member_loop",
    procedure: "excel.body.procedure_loop",
};

/// Longest string `xlfRegister` accepts.
const MAX_COUNTED_LEN: usize = 255;

/// Excel counted string literal: the length as a hex escape, then the text.
///
/// Text longer than Excel accepts is cut at a character boundary.
pub fn counted_string(text: &str) -> String {
    let mut end = text.len().min(MAX_COUNTED_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    if end < text.len() {
        warn!(text, "string truncated to {MAX_COUNTED_LEN} bytes for Excel");
    }
    let text = &text[..end];
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"\\x{:02X}\"\"{}\"", text.len(), escaped)
}

/// Renders worksheet function bodies and their registration.
pub struct Renderer<'a> {
    project: &'a ProjectMeta,
    templates: TemplateSet,
    rules: RuleSet,
}

impl<'a> Renderer<'a> {
    pub fn new(project: &'a ProjectMeta, templates: TemplateSet, rules: RuleSet) -> Self {
        Self {
            project,
            templates,
            rules,
        }
    }

    pub fn project(&self) -> &ProjectMeta {
        self.project
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Render the `xlfRegister` call of a function.
    ///
    /// The last description gets two trailing spaces; Excel drops the final
    /// characters of the last argument in the function wizard.
    pub fn register_call(&self, function: &Function, category: &Category) -> Result<String> {
        let xl_macro = function.platform(PLATFORM_NAME).is_some_and(|p| p.xl_macro);
        let mut type_codes = self
            .rules
            .group("type_codes")?
            .apply_return("", &function.return_value)?;
        type_codes.push_str(&self.rules.apply("type_codes", &function.parameters)?);
        if xl_macro {
            type_codes.push('#');
        }

        let mut descriptions: Vec<String> = std::iter::once(function.description.clone())
            .chain(function.parameters.iter().map(|p| p.description.clone()))
            .collect();
        if let Some(last) = descriptions.last_mut() {
            last.push_str("  ");
        }
        let mut descriptions = descriptions.into_iter();
        let description = descriptions.next().unwrap_or_default();
        let parameter_descriptions = descriptions
            .map(|d| {
                let vars = Vars::new().with("description", counted_string(&d));
                self.templates.render("excel.register_parameter", &vars)
            })
            .collect::<Result<String, _>>()?;

        let vars = Vars::new()
            .with("count", 10 + function.parameters.len())
            .with("code_name", counted_string(&function.name))
            .with("display_name", counted_string(&function.name))
            .with("parameter_codes", counted_string(&type_codes))
            .with(
                "parameter_list",
                counted_string(&self.rules.apply("parameter_list", &function.parameters)?),
            )
            .with(
                "category",
                counted_string(&format!(
                    "{} - {}",
                    self.project.name, category.display_name
                )),
            )
            .with("description", counted_string(&description))
            .with("parameter_descriptions", parameter_descriptions);
        Ok(self.templates.render("excel.register", &vars)?)
    }

    /// Render the worksheet function definition.
    pub fn body(&self, function: &Function) -> Result<String> {
        let tag = function.tag();
        let loop_parameter = function.kind.loop_parameter();
        let template = match loop_parameter {
            Some(_) => LOOP_BODY.get(tag),
            None => BODY.get(tag),
        };

        let loop_call = match loop_parameter {
            Some(name) => self.rules.group("library_call")?.apply_replacing(
                &function.parameters,
                name,
                &format!("{name}Cpp[i]"),
            )?,
            None => String::new(),
        };
        let class = function.kind.class().unwrap_or_default();
        let object_class = class.rsplit("::").next().unwrap_or(class);

        let calc_in_wizard = function
            .platform(PLATFORM_NAME)
            .is_some_and(|p| p.calc_in_wizard);
        let wizard_check = if calc_in_wizard {
            String::new()
        } else {
            self.templates.render("excel.wizard_check", &Vars::new())?
        };
        let trigger_check = if function.dependency_trigger {
            self.templates.render("excel.trigger_check", &Vars::new())?
        } else {
            String::new()
        };

        let vars = Vars::new()
            .with("name", &function.name)
            .with("alias", &function.alias)
            .with("namespace", &self.project.namespace_objects)
            .with(
                "library_function",
                function.kind.library_function().unwrap_or_default(),
            )
            .with("class", class)
            .with("object_class", object_class)
            .with(
                "return_type",
                self.rules
                    .group("return_type")?
                    .apply_return("", &function.return_value)?,
            )
            .with(
                "parameters",
                self.rules.apply("prototype", &function.parameters)?,
            )
            .with("wizard_check", wizard_check)
            .with("trigger_check", trigger_check)
            .with(
                "conversions",
                self.rules.apply("conversions", &function.parameters)?,
            )
            .with(
                "library_call",
                self.rules.apply("library_call", &function.parameters)?,
            )
            .with(
                "value_type",
                self.rules
                    .group("value_type")?
                    .apply_return("returnValue", &function.return_value)?,
            )
            .with(
                "return_conversion",
                self.rules
                    .group("return_conversion")?
                    .apply_return("", &function.return_value)?,
            )
            .with("loop", loop_parameter.unwrap_or_default())
            .with("loop_call", loop_call);
        Ok(self.templates.render(template, &vars)?)
    }
}
