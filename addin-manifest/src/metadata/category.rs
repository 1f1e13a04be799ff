//! Category definitions and their load-time validation.

use addingen_core::{DataType, FunctionTag, Implementation, TensorRank};

use super::raw::{RawCategory, RawFunctionBody, RawParameter, RawReturnValue, text};
use crate::{Result, error::SourceContext, validate::ParseContext};

/// A category: one XML file grouping related functions.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDef {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub serialization_includes: Vec<String>,
    /// Functions in file order
    pub functions: Vec<FunctionDef>,
}

/// A function as declared in metadata, before post-processing.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    pub name: String,
    pub tag: FunctionTag,
    /// Library function or class invoked by the binding
    pub library_function: Option<String>,
    /// Class of the object a member operates on (`type` attribute)
    pub class: Option<String>,
    pub super_type: Option<String>,
    pub loop_parameter: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub alias: Option<String>,
    pub documentation_only: bool,
    pub dependency_trigger: bool,
    pub platforms: Vec<SupportedPlatform>,
    pub parameters: Vec<ParameterDef>,
    pub return_value: Option<ReturnValueDef>,
}

/// A declared parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDef {
    pub name: String,
    pub data_type: DataType,
    pub rank: TensorRank,
    pub default: Option<String>,
    pub description: String,
}

/// A declared return value.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnValueDef {
    pub data_type: DataType,
    pub rank: TensorRank,
    pub description: String,
}

/// A `<SupportedPlatform>` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportedPlatform {
    /// Free-text platform name such as `C`, `Excel` or `Calc`
    pub name: String,
    pub implementation: Implementation,
    pub xl_macro: bool,
    pub calc_in_wizard: bool,
}

/// Parse a category file from a string with a filename for error reporting.
pub fn parse_category(content: &str, filename: &str) -> Result<CategoryDef> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawCategory =
        quick_xml::de::from_str(content).map_err(|e| source_ctx.metadata_error(e))?;
    let ctx = ParseContext::new(content, filename);
    CategoryDef::from_raw(raw, &ctx)
}

impl CategoryDef {
    fn from_raw(raw: RawCategory, ctx: &ParseContext) -> Result<Self> {
        let name = raw.name.trim().to_string();
        ctx.validate_name(&name, "category")?;

        let functions = raw
            .functions
            .unwrap_or_default()
            .items
            .into_iter()
            .map(|item| {
                let (tag, body) = item.into_parts();
                FunctionDef::from_raw(tag, body, ctx)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            display_name: text(raw.display_name).unwrap_or_else(|| name.clone()),
            description: text(raw.description).unwrap_or_default(),
            serialization_includes: raw
                .serialization_includes
                .unwrap_or_default()
                .include
                .into_iter()
                .filter_map(|s| text(Some(s)))
                .collect(),
            name,
            functions,
        })
    }
}

impl FunctionDef {
    fn from_raw(tag: FunctionTag, raw: RawFunctionBody, ctx: &ParseContext) -> Result<Self> {
        let name = raw.name.trim().to_string();
        ctx.validate_name(&name, "function")?;
        let ctx = ctx.within(&name);

        let library_function = text(raw.library_function);
        let class = text(raw.class);
        if tag != FunctionTag::Procedure && library_function.is_none() {
            return Err(ctx.source_context().validation_error(
                format!("{} '{}' has no libraryFunction", tag, name),
                ctx.find_span(&name),
            ));
        }
        if tag.is_member() && class.is_none() {
            return Err(ctx.source_context().validation_error(
                format!("{} '{}' has no type attribute", tag, name),
                ctx.find_span(&name),
            ));
        }

        let platforms = raw
            .supported_platforms
            .unwrap_or_default()
            .items
            .into_iter()
            .map(|p| {
                let implementation = match p.implementation.as_deref() {
                    Some(value) => ctx.parse_value("implementation", value, &name)?,
                    None => Implementation::default(),
                };
                Ok(SupportedPlatform {
                    name: p.name.trim().to_string(),
                    implementation,
                    xl_macro: p.xl_macro.unwrap_or(true),
                    calc_in_wizard: p.calc_in_wizard.unwrap_or(false),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut parameters: Vec<ParameterDef> = Vec::new();
        for raw_param in raw.parameters.unwrap_or_default().items {
            let param = ParameterDef::from_raw(raw_param, &name, &ctx)?;
            if parameters.iter().any(|p| p.name == param.name) {
                return Err(ctx.source_context().validation_error(
                    format!(
                        "parameter '{}' is declared twice in function '{}'",
                        param.name, name
                    ),
                    ctx.find_span(&param.name),
                ));
            }
            parameters.push(param);
        }

        let return_value = raw
            .return_value
            .map(|rv| ReturnValueDef::from_raw(rv, &name, &ctx))
            .transpose()?;
        if return_value.is_none() && tag != FunctionTag::Constructor {
            return Err(ctx.source_context().validation_error(
                format!("{} '{}' has no ReturnValue", tag, name),
                ctx.find_span(&name),
            ));
        }

        Ok(Self {
            tag,
            library_function,
            class,
            super_type: text(raw.super_type),
            loop_parameter: text(raw.loop_parameter),
            description: text(raw.description),
            long_description: text(raw.long_description),
            alias: text(raw.alias),
            documentation_only: raw
                .documentation_only_element
                .or(raw.documentation_only)
                .unwrap_or(false),
            dependency_trigger: raw.dependency_trigger.unwrap_or(true),
            platforms,
            parameters,
            return_value,
            name,
        })
    }

    /// Implementation level declared for a platform name, if the platform is listed.
    pub fn implementation(&self, platform: &str) -> Option<Implementation> {
        self.platforms
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(platform))
            .map(|p| p.implementation)
    }
}

impl ParameterDef {
    fn from_raw(raw: RawParameter, function: &str, ctx: &ParseContext) -> Result<Self> {
        let name = raw.name.trim().to_string();
        ctx.validate_parameter_name(&name, function)?;

        let (data_type, rank) =
            parse_type_and_rank(&raw.data_type, raw.tensor_rank.as_deref(), &name, ctx)?;
        if data_type == DataType::Property && rank != TensorRank::Vector {
            return Err(ctx.source_context().property_rank_error(
                function,
                format!("parameter '{}'", name),
                rank.as_str(),
                ctx.find_span(&name),
            ));
        }

        Ok(Self {
            data_type,
            rank,
            default: raw.default.map(|d| d.trim().to_string()),
            description: text(raw.description).unwrap_or_default(),
            name,
        })
    }
}

impl ReturnValueDef {
    fn from_raw(raw: RawReturnValue, function: &str, ctx: &ParseContext) -> Result<Self> {
        let (data_type, rank) =
            parse_type_and_rank(&raw.data_type, raw.tensor_rank.as_deref(), function, ctx)?;
        if data_type == DataType::Property && rank != TensorRank::Vector {
            return Err(ctx.source_context().property_rank_error(
                function,
                "return value",
                rank.as_str(),
                ctx.find_span(function),
            ));
        }
        Ok(Self {
            data_type,
            rank,
            description: text(raw.description).unwrap_or_default(),
        })
    }
}

fn parse_type_and_rank(
    data_type: &str,
    rank: Option<&str>,
    owner: &str,
    ctx: &ParseContext,
) -> Result<(DataType, TensorRank)> {
    let data_type = ctx.parse_value("type", data_type, owner)?;
    let rank = match rank {
        Some(rank) => ctx.parse_value("tensorRank", rank, owner)?,
        None => TensorRank::Scalar,
    };
    Ok((data_type, rank))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const OPTIONS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Category name="options">
  <displayName>Options</displayName>
  <description>functions to construct and use Option objects</description>
  <serializationIncludes>
    <include>qlo/options.hpp</include>
    <include>ql/instruments/vanillaoption.hpp</include>
  </serializationIncludes>
  <Functions>
    <Constructor name="qlVanillaOption" dependencyTrigger="false">
      <libraryFunction>VanillaOption</libraryFunction>
      <SupportedPlatforms>
        <SupportedPlatform name="Excel"/>
        <SupportedPlatform name="C" implementation="manual"/>
      </SupportedPlatforms>
      <Parameters>
        <Parameter name="Strike" default="100.0">
          <type>double</type>
          <tensorRank>scalar</tensorRank>
          <description>strike price</description>
        </Parameter>
        <Parameter name="Dates">
          <type>long</type>
          <tensorRank>vector</tensorRank>
          <description>exercise dates</description>
        </Parameter>
      </Parameters>
    </Constructor>
    <Member name="qlInstrumentNPV" type="QuantLib::Instrument">
      <description>net present value</description>
      <libraryFunction>NPV</libraryFunction>
      <SupportedPlatforms>
        <SupportedPlatform name="C"/>
      </SupportedPlatforms>
      <Parameters/>
      <ReturnValue>
        <type>double</type>
        <tensorRank>scalar</tensorRank>
        <description>NPV</description>
      </ReturnValue>
    </Member>
    <Procedure name="qlVersion" documentationOnly="true">
      <description>library version</description>
      <ReturnValue>
        <type>string</type>
        <tensorRank>scalar</tensorRank>
      </ReturnValue>
    </Procedure>
  </Functions>
</Category>
"#;

    fn member_with_param(param: &str) -> String {
        format!(
            r#"<Category name="misc"><Functions>
<Procedure name="qlProc">
  <Parameters>{param}</Parameters>
  <ReturnValue><type>long</type></ReturnValue>
</Procedure>
</Functions></Category>"#
        )
    }

    #[test]
    fn test_parse_category() {
        let category = parse_category(OPTIONS, "options.xml").unwrap();
        assert_eq!(category.name, "options");
        assert_eq!(category.display_name, "Options");
        assert_eq!(category.serialization_includes.len(), 2);
        assert_eq!(category.functions.len(), 3);

        let ctor = &category.functions[0];
        assert_eq!(ctor.tag, FunctionTag::Constructor);
        assert_eq!(ctor.library_function.as_deref(), Some("VanillaOption"));
        assert_eq!(ctor.parameters[0].default.as_deref(), Some("100.0"));
        assert_eq!(ctor.parameters[1].rank, TensorRank::Vector);
        assert!(!ctor.dependency_trigger);
        assert!(ctor.return_value.is_none());
        assert_eq!(ctor.implementation("C"), Some(Implementation::Manual));
        assert_eq!(ctor.implementation("excel"), Some(Implementation::Auto));
        assert_eq!(ctor.implementation("Calc"), None);

        let member = &category.functions[1];
        assert_eq!(member.tag, FunctionTag::Member);
        assert_eq!(member.class.as_deref(), Some("QuantLib::Instrument"));
        assert!(member.parameters.is_empty());
        assert!(member.dependency_trigger);

        let proc = &category.functions[2];
        assert!(proc.documentation_only);
        assert_eq!(
            proc.return_value.as_ref().map(|r| r.data_type),
            Some(DataType::String)
        );
    }

    #[test]
    fn test_supported_platform_flags_default() {
        let category = parse_category(OPTIONS, "options.xml").unwrap();
        let excel = &category.functions[0].platforms[0];
        assert!(excel.xl_macro);
        assert!(!excel.calc_in_wizard);
    }

    #[test]
    fn test_documentation_only_element() {
        let xml = r#"<Category name="misc"><Functions>
<Procedure name="qlListObjects">
  <documentationOnly>true</documentationOnly>
  <ReturnValue><type>string</type></ReturnValue>
</Procedure>
<Procedure name="qlVersion">
  <documentationOnly>false</documentationOnly>
  <ReturnValue><type>string</type></ReturnValue>
</Procedure>
</Functions></Category>"#;

        let category = parse_category(xml, "misc.xml").unwrap();
        assert!(category.functions[0].documentation_only);
        assert!(!category.functions[1].documentation_only);
    }

    #[test]
    fn test_reserved_parameter_name() {
        let xml = member_with_param(r#"<Parameter name="permanent"><type>bool</type></Parameter>"#);
        let err = parse_category(&xml, "misc.xml").unwrap_err();
        match *err {
            Error::InvalidParameterName { name, function, span, .. } => {
                assert_eq!(name, "permanent");
                assert_eq!(function, "qlProc");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_keyword_parameter_name() {
        let xml = member_with_param(r#"<Parameter name="class"><type>long</type></Parameter>"#);
        let err = parse_category(&xml, "misc.xml").unwrap_err();
        assert!(matches!(*err, Error::InvalidParameterName { .. }));
    }

    #[test]
    fn test_property_requires_vector() {
        let xml = member_with_param(
            r#"<Parameter name="Props"><type>property</type><tensorRank>scalar</tensorRank></Parameter>"#,
        );
        let err = parse_category(&xml, "misc.xml").unwrap_err();
        match *err {
            Error::PropertyRank { function, rank, .. } => {
                assert_eq!(function, "qlProc");
                assert_eq!(rank, "scalar");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let ok = member_with_param(
            r#"<Parameter name="Props"><type>property</type><tensorRank>vector</tensorRank></Parameter>"#,
        );
        assert!(parse_category(&ok, "misc.xml").is_ok());
    }

    #[test]
    fn test_unknown_type() {
        let xml = member_with_param(r#"<Parameter name="X"><type>float</type></Parameter>"#);
        let err = parse_category(&xml, "misc.xml").unwrap_err();
        match *err {
            Error::UnknownValue { field, value, .. } => {
                assert_eq!(field, "type");
                assert_eq!(value, "float");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_parameter() {
        let xml = member_with_param(
            r#"<Parameter name="X"><type>long</type></Parameter><Parameter name="X"><type>long</type></Parameter>"#,
        );
        let err = parse_category(&xml, "misc.xml").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_member_requires_type() {
        let xml = r#"<Category name="misc"><Functions>
<Member name="qlNPV"><libraryFunction>NPV</libraryFunction>
<ReturnValue><type>double</type></ReturnValue></Member>
</Functions></Category>"#;
        let err = parse_category(xml, "misc.xml").unwrap_err();
        assert!(err.to_string().contains("no type attribute"));
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse_category("<Category name=\"x\"><Functions>", "x.xml").unwrap_err();
        assert!(matches!(*err, Error::MetadataParse { .. }));
    }
}
