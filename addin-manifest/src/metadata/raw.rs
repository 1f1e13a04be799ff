//! Serde mirror of the metadata XML.
//!
//! Enumerated values stay as text here and are converted, with source spans,
//! when the typed definitions are built.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct RawCategory {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "serializationIncludes", default)]
    pub serialization_includes: Option<RawIncludes>,
    #[serde(rename = "Functions", default)]
    pub functions: Option<RawFunctions>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawIncludes {
    #[serde(default)]
    pub include: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawFunctions {
    #[serde(rename = "$value", default)]
    pub items: Vec<RawFunction>,
}

/// One child of `<Functions>`; the element name selects the kind.
#[derive(Debug, Deserialize)]
pub(crate) enum RawFunction {
    Constructor(RawFunctionBody),
    Member(RawFunctionBody),
    EnumerationMember(RawFunctionBody),
    Procedure(RawFunctionBody),
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFunctionBody {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@type", default)]
    pub class: Option<String>,
    #[serde(rename = "@superType", default)]
    pub super_type: Option<String>,
    #[serde(rename = "@loopParameter", default)]
    pub loop_parameter: Option<String>,
    #[serde(rename = "@dependencyTrigger", default)]
    pub dependency_trigger: Option<bool>,
    #[serde(rename = "@documentationOnly", default)]
    pub documentation_only: Option<bool>,
    #[serde(rename = "documentationOnly", default)]
    pub documentation_only_element: Option<bool>,
    #[serde(rename = "libraryFunction", default)]
    pub library_function: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "longDescription", default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(rename = "SupportedPlatforms", default)]
    pub supported_platforms: Option<RawSupportedPlatforms>,
    #[serde(rename = "Parameters", default)]
    pub parameters: Option<RawParameters>,
    #[serde(rename = "ReturnValue", default)]
    pub return_value: Option<RawReturnValue>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSupportedPlatforms {
    #[serde(rename = "SupportedPlatform", default)]
    pub items: Vec<RawSupportedPlatform>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSupportedPlatform {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@implementation", default)]
    pub implementation: Option<String>,
    #[serde(rename = "@xlMacro", default)]
    pub xl_macro: Option<bool>,
    #[serde(rename = "@calcInWizard", default)]
    pub calc_in_wizard: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawParameters {
    #[serde(rename = "Parameter", default)]
    pub items: Vec<RawParameter>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawParameter {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@default", default)]
    pub default: Option<String>,
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(rename = "tensorRank", default)]
    pub tensor_rank: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawReturnValue {
    #[serde(rename = "type")]
    pub data_type: String,
    #[serde(rename = "tensorRank", default)]
    pub tensor_rank: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEnumerations {
    #[serde(rename = "EnumeratedType", default)]
    pub types: Vec<RawEnumeratedType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEnumeratedType {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@class")]
    pub class: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "Value", default)]
    pub values: Vec<RawEnumValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEnumValue {
    #[serde(rename = "@string")]
    pub string: String,
    #[serde(rename = "@value")]
    pub value: String,
}

impl RawFunction {
    pub fn into_parts(self) -> (addingen_core::FunctionTag, RawFunctionBody) {
        use addingen_core::FunctionTag;
        match self {
            RawFunction::Constructor(body) => (FunctionTag::Constructor, body),
            RawFunction::Member(body) => (FunctionTag::Member, body),
            RawFunction::EnumerationMember(body) => (FunctionTag::EnumerationMember, body),
            RawFunction::Procedure(body) => (FunctionTag::Procedure, body),
        }
    }
}

/// Trim optional text, treating blank values as absent.
pub(crate) fn text(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
