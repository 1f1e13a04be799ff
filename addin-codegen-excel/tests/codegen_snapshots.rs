//! Snapshot tests for Excel code generation.
//!
//! These tests verify that the generated worksheet functions and their
//! registration match expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::Path;

use addingen_codegen::testing::sample_ir;
use addingen_codegen_excel::{Addin, Generator};
use addingen_codegen_serialization::Registration;
use addingen_core::Banner;

/// Generate the sample project and return files sorted by path for deterministic snapshots.
fn generate_files() -> Vec<(String, String)> {
    let ir = sample_ir().expect("Failed to load sample project");
    let generator = Generator::new(&ir, None).expect("Failed to create generator");
    let files = generator
        .preview(&Banner::new("addingen"))
        .expect("Failed to render files");

    let mut result: Vec<(String, String)> = files
        .into_iter()
        .map(|f| (f.path.display().to_string(), f.content))
        .collect();
    result.sort_by(|a, b| a.0.cmp(&b.0));
    result
}

/// Get a specific file from the generated output.
fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

/// The definition of one worksheet function within a source file.
fn function_body<'a>(source: &'a str, name: &str) -> &'a str {
    let start = source
        .find(&format!("{name}(\n"))
        .unwrap_or_else(|| panic!("{name} not defined"));
    let rest = &source[start..];
    let end = rest.find("\n}\n").map_or(rest.len(), |i| i + 3);
    &rest[..end]
}

#[test]
fn test_file_list() {
    let files = generate_files();
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "Functions/options.cpp",
            "Functions/quotes.cpp",
            "Functions/utilities.cpp",
            "Register/register_all.cpp",
            "Register/register_options.cpp",
            "Register/register_quotes.cpp",
            "Register/register_utilities.cpp",
            "Serialization/serialization_all.hpp",
            "Serialization/serialization_options.cpp",
            "Serialization/serialization_options.hpp",
            "Serialization/serialization_quotes.cpp",
            "Serialization/serialization_quotes.hpp",
            "Serialization/serializationfactory.cpp",
        ]
    );
}

#[test]
fn test_quotes_functions() {
    let files = generate_files();
    let source = get_file(&files, "Functions/quotes.cpp").expect("Functions/quotes.cpp not found");
    insta::assert_snapshot!("quotes_functions", source);
}

#[test]
fn test_quotes_registration() {
    let files = generate_files();
    let registration = get_file(&files, "Register/register_quotes.cpp")
        .expect("Register/register_quotes.cpp not found");
    insta::assert_snapshot!("quotes_registration", registration);
}

#[test]
fn test_serialization_factory() {
    let files = generate_files();
    let factory = get_file(&files, "Serialization/serializationfactory.cpp")
        .expect("Serialization/serializationfactory.cpp not found");
    insta::assert_snapshot!("serialization_factory", factory);
}

#[test]
fn test_macro_type_code() {
    let files = generate_files();
    let registration = get_file(&files, "Register/register_options.cpp").unwrap();

    // xlMacro="false"
    assert!(registration.contains("TempStrNoSize(\"\\x06\"\"CCEEPL\"),"));
    // xlMacro defaults to true
    assert!(registration.contains("TempStrNoSize(\"\\x07\"\"CCECPL#\"),"));
}

#[test]
fn test_wizard_check_skipped_when_calculated_in_wizard() {
    let files = generate_files();
    let source = get_file(&files, "Functions/quotes.cpp").unwrap();

    assert!(!function_body(source, "qlQuoteValue").contains("IsCalledByFuncWiz"));
    assert!(function_body(source, "qlSimpleQuote").contains("IsCalledByFuncWiz"));
}

#[test]
fn test_trigger_validation() {
    let files = generate_files();
    let source = get_file(&files, "Functions/options.cpp").unwrap();

    let barrier = function_body(source, "qlBarrierOption");
    assert!(barrier.contains("        OPER *trigger,\n"));
    assert!(barrier.contains("ObjectHandler::validateRange(trigger, \"trigger\");"));

    let vanilla = function_body(source, "qlVanillaOption");
    assert!(!vanilla.contains("trigger"));
    assert!(vanilla.contains(
        "        std::string OptionTypeCpp(OptionType);\n        std::vector<long> ExerciseDatesCpp = ObjectHandler::operToVector<long>(*ExerciseDates, \"ExerciseDates\");\n\n"
    ));
    assert!(vanilla.contains(
        "new QuantLibAddin::VanillaOption(*Strike, OptionTypeCpp, ExerciseDatesCpp));"
    ));
}

#[test]
fn test_manual_function_registered_not_defined() {
    let files = generate_files();
    let source = get_file(&files, "Functions/options.cpp").unwrap();
    let registration = get_file(&files, "Register/register_options.cpp").unwrap();

    assert!(registration.contains("\"\\x0F\"\"qlInstrumentNPV\""));
    assert!(!source.contains("qlInstrumentNPV"));
}

#[test]
fn test_loop_member_body() {
    let files = generate_files();
    let source = get_file(&files, "Functions/options.cpp").unwrap();
    let body = function_body(source, "qlOptionStrikeValue");

    assert!(source.contains("DLLEXPORT OPER *qlOptionStrikeValue(\n"));
    assert!(body.contains("        std::vector<double> returnValue;\n"));
    assert!(body.contains("for (std::size_t i = 0; i < StrikesCpp.size(); ++i)"));
    assert!(body.contains("returnValue.push_back(objectPointer->valueAt(StrikesCpp[i]));"));
    assert!(body.contains("ObjectHandler::vectorToOper(returnValue, xRet);"));
}

#[test]
fn test_register_all() {
    let files = generate_files();
    let all = get_file(&files, "Register/register_all.cpp").unwrap();

    assert!(all.contains("extern void register_options(const XLOPER&);\n"));
    assert!(all.contains(
        "    register_options(xDll);\n    register_quotes(xDll);\n    register_utilities(xDll);\n}\n"
    ));
}

#[test]
fn test_documentation_only_and_other_platforms_skipped() {
    let files = generate_files();
    let registration = get_file(&files, "Register/register_utilities.cpp").unwrap();

    assert!(registration.contains("qlVersion"));
    assert!(!registration.contains("qlListObjects"));
    assert!(!registration.contains("qlAddDays"));
}

#[test]
fn test_value_object_registration() {
    let ir = sample_ir().unwrap();
    let generator = Generator::new(&ir, None)
        .unwrap()
        .with_registration(Registration {
            include_dir: "Addins/Excel".into(),
            namespace: "QuantLibXL".into(),
            base: Some("ObjectHandler".into()),
        });
    let files = generator.preview(&Banner::new("addingen")).unwrap();
    let factory = files
        .iter()
        .find(|f| f.path == Path::new("Serialization/serializationfactory.cpp"))
        .unwrap();
    let options = files
        .iter()
        .find(|f| f.path == Path::new("Serialization/serialization_options.cpp"))
        .unwrap();

    assert!(factory.content.contains("        ObjectHandler::register_out(oa);\n"));
    assert!(options.content.contains(
        "#include <Addins/Excel/Serialization/serialization_options.hpp>\n"
    ));
    assert!(
        options
            .content
            .contains("ar.register_type<QuantLibAddin::ValueObjects::qlBarrierOption>();")
    );
}

#[test]
fn test_template_override() {
    let stubs = tempfile::TempDir::new().unwrap();
    std::fs::write(
        stubs.path().join("excel.wizard_check"),
        "\n        if (functionCall->IsCalledByFuncWiz()) return 0;\n",
    )
    .unwrap();

    let ir = sample_ir().unwrap();
    let generator = Generator::new(&ir, Some(stubs.path())).unwrap();
    let files = generator.preview(&Banner::new("addingen")).unwrap();
    let source = files
        .iter()
        .find(|f| f.path == Path::new("Functions/quotes.cpp"))
        .unwrap();

    assert!(
        source
            .content
            .contains("        if (functionCall->IsCalledByFuncWiz()) return 0;\n")
    );
}
