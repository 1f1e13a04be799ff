//! Functions and their parameters.

use addingen_core::{DataType, FunctionTag, Implementation, TensorRank};

/// A post-processed function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Function name, unique across the registry.
    pub name: String,
    /// Kind-specific data.
    pub kind: FunctionKind,
    /// One-line description.
    pub description: String,
    /// Optional extended description for documentation.
    pub long_description: Option<String>,
    /// Qualified name used by platforms that register functions by alias.
    pub alias: String,
    /// Only documentation is generated for this function.
    pub documentation_only: bool,
    /// A dependency trigger parameter was added.
    pub dependency_trigger: bool,
    /// Platforms this function is declared for.
    pub platforms: Vec<PlatformSupport>,
    /// Parameters in declaration order, implicit ones included.
    pub parameters: Vec<Parameter>,
    /// Return value.
    pub return_value: ReturnValue,
}

/// Kind-specific function data.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionKind {
    /// Constructs a library object and returns its id.
    Constructor { library_function: String },
    /// Calls a member function of an object held in the repository.
    Member {
        library_function: String,
        class: String,
        super_type: Option<String>,
        loop_parameter: Option<String>,
    },
    /// Calls a member function of an enumerated object.
    EnumerationMember {
        library_function: String,
        class: String,
        super_type: Option<String>,
        loop_parameter: Option<String>,
    },
    /// Free function.
    Procedure { loop_parameter: Option<String> },
}

impl FunctionKind {
    /// The tag generators dispatch on.
    pub fn tag(&self) -> FunctionTag {
        match self {
            FunctionKind::Constructor { .. } => FunctionTag::Constructor,
            FunctionKind::Member { .. } => FunctionTag::Member,
            FunctionKind::EnumerationMember { .. } => FunctionTag::EnumerationMember,
            FunctionKind::Procedure { .. } => FunctionTag::Procedure,
        }
    }

    /// Library function invoked by the binding, if any.
    pub fn library_function(&self) -> Option<&str> {
        match self {
            FunctionKind::Constructor { library_function }
            | FunctionKind::Member {
                library_function, ..
            }
            | FunctionKind::EnumerationMember {
                library_function, ..
            } => Some(library_function),
            FunctionKind::Procedure { .. } => None,
        }
    }

    /// Class of the object a member function operates on.
    pub fn class(&self) -> Option<&str> {
        match self {
            FunctionKind::Member { class, .. } | FunctionKind::EnumerationMember { class, .. } => {
                Some(class)
            }
            _ => None,
        }
    }

    /// Parameter iterated over when the function loops.
    pub fn loop_parameter(&self) -> Option<&str> {
        match self {
            FunctionKind::Member { loop_parameter, .. }
            | FunctionKind::EnumerationMember { loop_parameter, .. }
            | FunctionKind::Procedure { loop_parameter } => loop_parameter.as_deref(),
            FunctionKind::Constructor { .. } => None,
        }
    }
}

impl Function {
    /// The tag generators dispatch on.
    pub fn tag(&self) -> FunctionTag {
        self.kind.tag()
    }

    /// Support declared for a platform, matched case-insensitively.
    pub fn platform(&self, platform: &str) -> Option<&PlatformSupport> {
        self.platforms
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(platform))
    }

    /// Implementation level declared for a platform, matched case-insensitively.
    pub fn implementation(&self, platform: &str) -> Option<Implementation> {
        self.platform(platform).map(|p| p.implementation)
    }

    /// Returns true if the function is declared for `platform` at `level` or above.
    pub fn supports(&self, platform: &str, level: Implementation) -> bool {
        self.implementation(platform)
            .is_some_and(|implementation| implementation >= level)
    }

    /// Returns true if code (not just documentation) should be emitted.
    pub fn generates_code(&self) -> bool {
        !self.documentation_only
    }

    /// Parameters declared in metadata, without the implicit ones.
    pub fn declared_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| !p.implicit)
    }

    /// Look up a parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub data_type: DataType,
    pub rank: TensorRank,
    /// Default value as written in metadata.
    pub default: Option<String>,
    pub description: String,
    /// Added by post-processing rather than declared in metadata.
    pub implicit: bool,
}

impl Parameter {
    /// Create an implicit scalar parameter.
    pub fn implicit(name: &str, data_type: DataType, description: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            rank: TensorRank::Scalar,
            default: None,
            description: description.into(),
            implicit: true,
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A function return value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnValue {
    pub data_type: DataType,
    pub rank: TensorRank,
    pub description: String,
}

/// Support declared for one platform.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformSupport {
    pub name: String,
    pub implementation: Implementation,
    /// Excel: register the function as macro equivalent (`#` type code).
    pub xl_macro: bool,
    /// Excel: evaluate the function while the function wizard is open.
    pub calc_in_wizard: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn procedure(platforms: Vec<PlatformSupport>) -> Function {
        Function {
            name: "qlNow".into(),
            kind: FunctionKind::Procedure {
                loop_parameter: None,
            },
            description: "current time".into(),
            long_description: None,
            alias: "QuantLibAddin::qlNow".into(),
            documentation_only: false,
            dependency_trigger: false,
            platforms,
            parameters: vec![
                Parameter::implicit("trigger", DataType::Any, "dependency tracking trigger"),
                Parameter {
                    name: "Offset".into(),
                    data_type: DataType::Long,
                    rank: TensorRank::Scalar,
                    default: None,
                    description: String::new(),
                    implicit: false,
                },
            ],
            return_value: ReturnValue {
                data_type: DataType::Double,
                rank: TensorRank::Scalar,
                description: String::new(),
            },
        }
    }

    fn support(name: &str, implementation: Implementation) -> PlatformSupport {
        PlatformSupport {
            name: name.into(),
            implementation,
            xl_macro: true,
            calc_in_wizard: false,
        }
    }

    #[test]
    fn test_supports_level() {
        let f = procedure(vec![
            support("C", Implementation::Manual),
            support("Excel", Implementation::Auto),
        ]);

        assert!(f.supports("C", Implementation::Manual));
        assert!(f.supports("c", Implementation::DocumentationOnly));
        assert!(!f.supports("C", Implementation::Auto));
        assert!(f.supports("Excel", Implementation::Auto));
        assert!(!f.supports("Calc", Implementation::DocumentationOnly));
    }

    #[test]
    fn test_platform_lookup() {
        let f = procedure(vec![support("Excel", Implementation::Auto)]);
        assert!(f.platform("EXCEL").is_some_and(|p| p.xl_macro));
        assert!(f.platform("C").is_none());
    }

    #[test]
    fn test_declared_parameters_skip_implicit() {
        let f = procedure(vec![]);
        let names: Vec<_> = f.declared_parameters().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Offset"]);
        assert!(f.parameter("trigger").is_some_and(|p| p.implicit));
    }

    #[test]
    fn test_kind_accessors() {
        let member = FunctionKind::Member {
            library_function: "NPV".into(),
            class: "QuantLib::Instrument".into(),
            super_type: None,
            loop_parameter: Some("Dates".into()),
        };
        assert_eq!(member.tag(), FunctionTag::Member);
        assert_eq!(member.library_function(), Some("NPV"));
        assert_eq!(member.class(), Some("QuantLib::Instrument"));
        assert_eq!(member.loop_parameter(), Some("Dates"));

        let ctor = FunctionKind::Constructor {
            library_function: "VanillaOption".into(),
        };
        assert_eq!(ctor.class(), None);
        assert_eq!(ctor.loop_parameter(), None);
    }
}
