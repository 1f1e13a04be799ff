//! Lint for loop parameters.

use addingen_core::TensorRank;
use addingen_manifest::Metadata;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when a loop parameter is not a declared vector parameter.
pub struct LoopParameterLint;

impl Lint for LoopParameterLint {
    fn name(&self) -> &'static str {
        "loop-parameter"
    }

    fn description(&self) -> &'static str {
        "Check that loop parameters name a declared vector parameter"
    }

    fn check(&self, metadata: &Metadata, diagnostics: &mut Vec<Diagnostic>) {
        for (category, function) in metadata.functions() {
            let Some(loop_parameter) = &function.loop_parameter else {
                continue;
            };
            let location = format!("{}.{}", category.name, function.name);

            match function.parameters.iter().find(|p| &p.name == loop_parameter) {
                None => diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "loop parameter '{}' of function '{}' is not a declared parameter",
                            loop_parameter, function.name
                        ),
                    )
                    .at(location),
                ),
                Some(param) if param.rank != TensorRank::Vector => diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "loop parameter '{}' of function '{}' has rank {}, expected vector",
                            loop_parameter, function.name, param.rank
                        ),
                    )
                    .at(location),
                ),
                Some(_) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::validate::lints::metadata;

    fn category(loop_parameter: &str, rank: &str) -> String {
        format!(
            r#"<Category name="misc"><Functions>
<Procedure name="qlLoop" loopParameter="{loop_parameter}">
  <Parameters>
    <Parameter name="Dates"><type>long</type><tensorRank>{rank}</tensorRank></Parameter>
  </Parameters>
  <ReturnValue><type>long</type><tensorRank>vector</tensorRank></ReturnValue>
</Procedure>
</Functions></Category>"#
        )
    }

    fn check(xml: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        LoopParameterLint.check(&metadata(&[xml]), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_valid_loop_parameter() {
        assert!(check(&category("Dates", "vector")).is_empty());
    }

    #[test]
    fn test_undeclared_loop_parameter() {
        let diagnostics = check(&category("Tenors", "vector"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("not a declared parameter"));
    }

    #[test]
    fn test_scalar_loop_parameter() {
        let diagnostics = check(&category("Dates", "scalar"));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("expected vector"));
    }
}
