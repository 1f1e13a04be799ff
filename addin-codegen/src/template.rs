//! Named text templates with `${name}` placeholders.
//!
//! Templates are parsed once when loaded. Rendering is literal substitution:
//! there is no control flow, so repeated or conditional sections are rendered
//! separately and passed in as pre-rendered fragments.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading or rendering templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{template}' has an unterminated placeholder at byte {offset}")]
    Unterminated { template: String, offset: usize },

    #[error("template '{template}' has an invalid placeholder '{placeholder}'")]
    InvalidPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("template '{template}' references unknown placeholder '{placeholder}'")]
    UnknownPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("template '{name}' is not defined")]
    UnknownTemplate { name: String },

    #[error("failed to read template '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Text(String),
    Placeholder(String),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source` into a template called `name`.
    pub fn parse(name: impl Into<String>, source: &str) -> Result<Self, TemplateError> {
        let name = name.into();
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find("${") {
            if start > 0 {
                segments.push(Segment::Text(rest[..start].to_string()));
            }
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else {
                return Err(TemplateError::Unterminated {
                    template: name,
                    offset: offset + start,
                });
            };
            let placeholder = &after[..end];
            if !addingen_core::is_identifier(placeholder) {
                return Err(TemplateError::InvalidPlaceholder {
                    template: name,
                    placeholder: placeholder.to_string(),
                });
            }
            segments.push(Segment::Placeholder(placeholder.to_string()));

            let consumed = start + 2 + end + 1;
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { name, segments })
    }

    /// Get the template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Placeholder names in order of appearance, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder(p) => Some(p.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Substitute every placeholder from `vars`.
    ///
    /// Variables the template does not use are ignored.
    pub fn render(&self, vars: &Vars) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value = vars
                        .get(name)
                        .ok_or_else(|| TemplateError::UnknownPlaceholder {
                            template: self.name.clone(),
                            placeholder: name.clone(),
                        })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

/// Ordered placeholder values for one rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vars(IndexMap<String, String>);

impl Vars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style.
    pub fn with(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.set(name, value);
        self
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

/// A named collection of templates.
///
/// Generators start from built-in templates compiled into their crate; a
/// project may replace any of them with a file of the same name in its stub
/// directory.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    templates: IndexMap<String, Template>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(name, source)` pairs.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, TemplateError> {
        let mut set = Self::new();
        for (name, source) in sources {
            set.insert(name, source)?;
        }
        Ok(set)
    }

    /// Build a set from built-in sources, then apply overrides from `stubs`.
    pub fn load<'a>(
        builtin: impl IntoIterator<Item = (&'a str, &'a str)>,
        stubs: Option<&Path>,
    ) -> Result<Self, TemplateError> {
        let mut set = Self::from_sources(builtin)?;
        if let Some(dir) = stubs {
            set.apply_overrides(dir)?;
        }
        Ok(set)
    }

    /// Parse and add a template, replacing one with the same name.
    pub fn insert(&mut self, name: &str, source: &str) -> Result<(), TemplateError> {
        let template = Template::parse(name, source)?;
        self.templates.insert(name.to_string(), template);
        Ok(())
    }

    /// Replace templates with same-named files found in `dir`.
    ///
    /// Returns the names of the templates that were overridden.
    pub fn apply_overrides(&mut self, dir: &Path) -> Result<Vec<String>, TemplateError> {
        let mut overridden = Vec::new();
        let names: Vec<String> = self.templates.keys().cloned().collect();
        for name in names {
            let path = dir.join(&name);
            if !path.is_file() {
                continue;
            }
            let source = std::fs::read_to_string(&path)
                .map_err(|source| TemplateError::Io { path: path.clone(), source })?;
            self.insert(&name, &source)?;
            debug!(template = %name, file = %path.display(), "template overridden");
            overridden.push(name);
        }
        Ok(overridden)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Look up a template by name.
    pub fn get(&self, name: &str) -> Result<&Template, TemplateError> {
        self.templates
            .get(name)
            .ok_or_else(|| TemplateError::UnknownTemplate {
                name: name.to_string(),
            })
    }

    /// Render the named template.
    pub fn render(&self, name: &str, vars: &Vars) -> Result<String, TemplateError> {
        self.get(name)?.render(vars)
    }

    /// Template names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}
