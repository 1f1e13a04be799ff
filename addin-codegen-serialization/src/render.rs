use addingen_codegen::{RuleSet, TemplateSet, Vars};
use addingen_ir::{Function, ProjectMeta};
use eyre::Result;

/// Templates and rules of one platform, plus the project they render for.
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

    /// Variables every file template may use.
    pub fn project_vars(&self) -> Vars {
        Vars::new()
            .with("lib_root", &self.project.lib_root)
            .with("namespace", &self.project.namespace_objects)
    }

    /// Render `template` for a constructor, with each rule group in `groups`
    /// applied to its parameters and bound under the paired variable name.
    pub fn constructor(
        &self,
        template: &str,
        function: &Function,
        groups: &[(&str, &str)],
    ) -> Result<String> {
        let mut vars = self
            .project_vars()
            .with("name", &function.name)
            .with(
                "library_function",
                function.kind.library_function().unwrap_or_default(),
            );
        for (var, group) in groups {
            vars.set(var, self.rules.apply(group, &function.parameters)?);
        }
        Ok(self.templates.render(template, &vars)?)
    }
}
