use addingen_codegen::{RuleSet, TagTable, TemplateSet, Vars, join_nonempty};
use addingen_ir::{Function, ProjectMeta};
use eyre::Result;

const BODY: TagTable<&str> = TagTable {
    constructor: "c.body.constructor",
    member: "c.body.member",
    enumeration_member: "c.body.enumeration_member",
    procedure: "c.body.procedure",
};

// constructors never loop
const LOOP_BODY: TagTable<&str> = TagTable {
    constructor: "c.body.constructor",
    member: "c.body.member_loop",
    enumeration_member: "c.body.enumeration_member_loop",
    procedure: "c.body.procedure_loop",
};

/// Renders the per-function fragments shared by header and source files.
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

    /// C parameter list: every parameter, then the `result` out-parameter.
    pub fn parameters(&self, function: &Function) -> Result<String> {
        let arguments = self.rules.apply("prototype", &function.parameters)?;
        let result = self
            .rules
            .group("result")?
            .apply_return("result", &function.return_value)?;
        Ok(join_nonempty([arguments.as_str(), result.as_str()], ",\n"))
    }

    /// Render the declaration of a function.
    pub fn prototype(&self, function: &Function) -> Result<String> {
        let vars = Vars::new()
            .with("name", &function.name)
            .with("parameters", self.parameters(function)?);
        Ok(self.templates.render("c.prototype", &vars)?)
    }

    /// Render the definition of a function.
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
            .with("parameters", self.parameters(function)?)
            .with(
                "conversions",
                self.rules.apply("conversions", &function.parameters)?,
            )
            .with(
                "library_call",
                self.rules.apply("library_call", &function.parameters)?,
            )
            .with(
                "return_type",
                self.rules
                    .group("return_type")?
                    .apply_return("returnValue", &function.return_value)?,
            )
            .with(
                "return_conversion",
                self.rules
                    .group("return_conversion")?
                    .apply_return("result", &function.return_value)?,
            )
            .with("loop", loop_parameter.unwrap_or_default())
            .with("loop_call", loop_call);
        Ok(self.templates.render(template, &vars)?)
    }
}
