//! Enumerated type definitions.

use super::raw::{RawEnumerations, text};
use crate::{Result, error::SourceContext, validate::ParseContext};

/// An enumerated type mapping strings to library values.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerationDef {
    pub name: String,
    /// Library class the values belong to
    pub class: String,
    pub description: String,
    pub values: Vec<EnumValue>,
}

/// One `(string, value)` pair of an enumeration.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub string: String,
    pub value: String,
}

/// Parse an enumeration file from a string with a filename for error reporting.
pub fn parse_enumerations(content: &str, filename: &str) -> Result<Vec<EnumerationDef>> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawEnumerations =
        quick_xml::de::from_str(content).map_err(|e| source_ctx.metadata_error(e))?;
    let ctx = ParseContext::new(content, filename);

    let mut enumerations: Vec<EnumerationDef> = Vec::with_capacity(raw.types.len());
    for ty in raw.types {
        let name = ty.name.trim().to_string();
        ctx.validate_name(&name, "enumeration")?;
        if enumerations.iter().any(|e| e.name == name) {
            return Err(source_ctx.validation_error(
                format!("enumeration '{}' is defined twice", name),
                ctx.within(&name).find_span(&name),
            ));
        }
        enumerations.push(EnumerationDef {
            class: ty.class.trim().to_string(),
            description: text(ty.description).unwrap_or_default(),
            values: ty
                .values
                .into_iter()
                .map(|v| EnumValue {
                    string: v.string,
                    value: v.value,
                })
                .collect(),
            name,
        });
    }
    Ok(enumerations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse_enumerations() {
        let xml = r#"<Enumerations>
  <EnumeratedType name="OptionType" class="QuantLib::Option::Type">
    <description>option type</description>
    <Value string="Call" value="QuantLib::Option::Call"/>
    <Value string="Put" value="QuantLib::Option::Put"/>
  </EnumeratedType>
  <EnumeratedType name="Frequency" class="QuantLib::Frequency">
    <Value string="Annual" value="QuantLib::Annual"/>
  </EnumeratedType>
</Enumerations>"#;
        let enums = parse_enumerations(xml, "types.xml").unwrap();
        assert_eq!(enums.len(), 2);
        assert_eq!(enums[0].class, "QuantLib::Option::Type");
        assert_eq!(enums[0].values[1].string, "Put");
        assert_eq!(enums[1].description, "");
    }

    #[test]
    fn test_duplicate_enumeration() {
        let xml = r#"<Enumerations>
  <EnumeratedType name="A" class="X"/>
  <EnumeratedType name="A" class="Y"/>
</Enumerations>"#;
        let err = parse_enumerations(xml, "types.xml").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
