//! Parameter conversion rules.
//!
//! A rule set maps each parameter of a function to a code fragment. Rules
//! are grouped by purpose (prototype, call, conversion, ...) and loaded from
//! TOML:
//!
//! ```toml
//! [codes]
//! scalar = "${type} ${name}"
//!
//! [groups.prototype]
//! delimiter = ",\n"
//! indent = 8
//! rules = [
//!     { rank = "scalar", code = "scalar" },
//! ]
//! ```

use std::path::{Path, PathBuf};

use addingen_core::{DataType, TensorRank};
use addingen_ir::{Parameter, ReturnValue};
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{Template, TemplateError, Vars};

/// Errors raised while loading or applying rules.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule group '{group}' references unknown code '{code}'")]
    UnknownCode { group: String, code: String },

    #[error("rule group '{group}' is not defined")]
    UnknownGroup { group: String },

    #[error("failed to parse rules '{origin}'")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to read rules '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRuleSet {
    #[serde(default)]
    codes: IndexMap<String, String>,
    #[serde(default)]
    groups: IndexMap<String, RawGroup>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGroup {
    #[serde(default = "default_delimiter")]
    delimiter: String,
    #[serde(default)]
    indent: usize,
    #[serde(default)]
    prefix: String,
    #[serde(default)]
    suffix: String,
    #[serde(default)]
    skip_implicit: bool,
    #[serde(default)]
    rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRule {
    rank: Option<TensorRank>,
    #[serde(rename = "type")]
    data_type: Option<DataType>,
    code: Option<String>,
}

fn default_delimiter() -> String {
    ", ".to_string()
}

/// One rule: a (rank, type) filter and the snippet it emits.
#[derive(Debug, Clone)]
struct Rule {
    rank: Option<TensorRank>,
    data_type: Option<DataType>,
    code: Option<Template>,
}

impl Rule {
    fn matches(&self, data_type: DataType, rank: TensorRank) -> bool {
        self.rank.is_none_or(|r| r == rank) && self.data_type.is_none_or(|t| t == data_type)
    }
}

/// A named, ordered list of rules producing one fragment per parameter.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    name: String,
    delimiter: String,
    indent: usize,
    prefix: String,
    suffix: String,
    skip_implicit: bool,
    rules: Vec<Rule>,
}

impl RuleGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render one fragment per parameter and join them.
    ///
    /// Fragments keep parameter declaration order. Prefix and suffix are only
    /// added when at least one fragment was produced.
    pub fn apply(&self, parameters: &[Parameter]) -> Result<String, RuleError> {
        self.apply_inner(parameters, None)
    }

    /// Like [`apply`](Self::apply), but emit `replacement` for the parameter named `name`.
    ///
    /// Loop bodies use this to pass the current element instead of the whole vector.
    pub fn apply_replacing(
        &self,
        parameters: &[Parameter],
        name: &str,
        replacement: &str,
    ) -> Result<String, RuleError> {
        self.apply_inner(parameters, Some((name, replacement)))
    }

    fn apply_inner(
        &self,
        parameters: &[Parameter],
        replace: Option<(&str, &str)>,
    ) -> Result<String, RuleError> {
        let mut fragments = Vec::new();
        for param in parameters {
            if self.skip_implicit && param.implicit {
                continue;
            }
            if let Some((name, replacement)) = replace
                && param.name == name
            {
                fragments.push(format!("{}{}", " ".repeat(self.indent), replacement));
                continue;
            }
            let vars = Vars::new()
                .with("name", &param.name)
                .with("type", param.data_type)
                .with("rank", param.rank)
                .with("description", &param.description)
                .with("default", param.default.as_deref().unwrap_or(""));
            if let Some(fragment) = self.fragment(param.data_type, param.rank, &vars)? {
                fragments.push(fragment);
            }
        }
        Ok(self.join(fragments))
    }

    /// Render the fragment for a return value, named `name`.
    pub fn apply_return(&self, name: &str, value: &ReturnValue) -> Result<String, RuleError> {
        let vars = Vars::new()
            .with("name", name)
            .with("type", value.data_type)
            .with("rank", value.rank)
            .with("description", &value.description)
            .with("default", "");
        let fragments = self
            .fragment(value.data_type, value.rank, &vars)?
            .into_iter()
            .collect();
        Ok(self.join(fragments))
    }

    fn fragment(
        &self,
        data_type: DataType,
        rank: TensorRank,
        vars: &Vars,
    ) -> Result<Option<String>, RuleError> {
        let Some(rule) = self.rules.iter().find(|r| r.matches(data_type, rank)) else {
            return Ok(None);
        };
        let Some(code) = &rule.code else {
            return Ok(None);
        };
        let text = code.render(vars)?;
        Ok(Some(format!("{}{}", " ".repeat(self.indent), text)))
    }

    fn join(&self, fragments: Vec<String>) -> String {
        if fragments.is_empty() {
            return String::new();
        }
        format!(
            "{}{}{}",
            self.prefix,
            fragments.join(&self.delimiter),
            self.suffix
        )
    }
}

/// All rule groups of one platform.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    groups: IndexMap<String, RuleGroup>,
}

impl RuleSet {
    /// Parse a rule set, naming `origin` in errors.
    pub fn parse(content: &str, origin: &str) -> Result<Self, RuleError> {
        let raw: RawRuleSet = toml::from_str(content).map_err(|source| RuleError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        let mut codes = IndexMap::new();
        for (id, source) in &raw.codes {
            codes.insert(id.clone(), Template::parse(format!("codes.{id}"), source)?);
        }

        let mut groups = IndexMap::new();
        for (name, group) in raw.groups {
            let rules = group
                .rules
                .into_iter()
                .map(|rule| {
                    let code = match rule.code {
                        Some(id) => Some(codes.get(&id).cloned().ok_or_else(|| {
                            RuleError::UnknownCode {
                                group: name.clone(),
                                code: id.clone(),
                            }
                        })?),
                        None => None,
                    };
                    Ok(Rule {
                        rank: rule.rank,
                        data_type: rule.data_type,
                        code,
                    })
                })
                .collect::<Result<Vec<_>, RuleError>>()?;

            groups.insert(
                name.clone(),
                RuleGroup {
                    name,
                    delimiter: group.delimiter,
                    indent: group.indent,
                    prefix: group.prefix,
                    suffix: group.suffix,
                    skip_implicit: group.skip_implicit,
                    rules,
                },
            );
        }

        Ok(Self { groups })
    }

    /// Load the built-in rules of `platform`, or `<stubs>/<platform>.rules.toml` if present.
    pub fn load(builtin: &str, platform: &str, stubs: Option<&Path>) -> Result<Self, RuleError> {
        if let Some(dir) = stubs {
            let path = dir.join(format!("{platform}.rules.toml"));
            if path.is_file() {
                let content = std::fs::read_to_string(&path).map_err(|source| RuleError::Io {
                    path: path.clone(),
                    source,
                })?;
                debug!(platform, file = %path.display(), "rules overridden");
                return Self::parse(&content, &path.display().to_string());
            }
        }
        Self::parse(builtin, &format!("{platform}.rules.toml"))
    }

    /// Look up a group by name.
    pub fn group(&self, name: &str) -> Result<&RuleGroup, RuleError> {
        self.groups
            .get(name)
            .ok_or_else(|| RuleError::UnknownGroup {
                group: name.to_string(),
            })
    }

    /// Apply the named group to a parameter list.
    pub fn apply(&self, group: &str, parameters: &[Parameter]) -> Result<String, RuleError> {
        self.group(group)?.apply(parameters)
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
