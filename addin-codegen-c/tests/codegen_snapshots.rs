//! Snapshot tests for C code generation.
//!
//! These tests verify that the generated C code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::path::Path;

use addingen_codegen::testing::sample_ir;
use addingen_codegen_c::{Addin, Generator};
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

#[test]
fn test_file_list() {
    let files = generate_files();
    let paths: Vec<&str> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "addin.h",
            "options.cpp",
            "options.h",
            "quotes.cpp",
            "quotes.h",
            "utilities.cpp",
            "utilities.h",
        ]
    );
}

#[test]
fn test_addin_header() {
    let files = generate_files();
    let addin_h = get_file(&files, "addin.h").expect("addin.h not found");
    insta::assert_snapshot!("addin_header", addin_h);
}

#[test]
fn test_utilities_header() {
    let files = generate_files();
    let header = get_file(&files, "utilities.h").expect("utilities.h not found");
    insta::assert_snapshot!("utilities_header", header);
}

#[test]
fn test_utilities_source() {
    let files = generate_files();
    let source = get_file(&files, "utilities.cpp").expect("utilities.cpp not found");
    insta::assert_snapshot!("utilities_source", source);
}

#[test]
fn test_constructor_prototype() {
    let files = generate_files();
    let header = get_file(&files, "options.h").expect("options.h not found");

    // objectID first, permanent last
    assert!(header.contains(
        "long qlVanillaOption(\n    char *objectID,\n    double Strike,\n    char *OptionType,\n    long *ExerciseDates, long ExerciseDatesSize,\n    bool permanent,\n    char *result);\n"
    ));
    // trigger sits before permanent
    assert!(header.contains("    double Rebate,\n    Varies trigger,\n    bool permanent,\n"));
}

#[test]
fn test_manual_function_declared_not_defined() {
    let files = generate_files();
    let header = get_file(&files, "options.h").unwrap();
    let source = get_file(&files, "options.cpp").unwrap();

    assert!(header.contains("long qlBarrierOption("));
    assert!(!source.contains("qlBarrierOption"));
    assert!(source.contains("long qlVanillaOption("));
}

#[test]
fn test_constructor_body() {
    let files = generate_files();
    let source = get_file(&files, "options.cpp").unwrap();

    assert!(source.contains("#include <qlo/options.hpp>"));
    assert!(source.contains(
        "        std::string objectIDCpp(objectID);\n        std::string OptionTypeCpp(OptionType);\n        std::vector<long> ExerciseDatesCpp(ExerciseDates, ExerciseDates + ExerciseDatesSize);\n\n"
    ));
    assert!(source.contains(
        "new QuantLibAddin::VanillaOption(Strike, OptionTypeCpp, ExerciseDatesCpp));"
    ));
    assert!(source.contains("        strcpy(result, returnValue.c_str());\n        return SUCCESS;"));
}

#[test]
fn test_member_body() {
    let files = generate_files();
    let source = get_file(&files, "options.cpp").unwrap();

    assert!(source.contains(
        "        OH_GET_REFERENCE(objectPointer, objectIDCpp,\n            QuantLibAddin::Instrument, QuantLib::Instrument)\n        double returnValue = objectPointer->NPV();\n        *result = returnValue;\n"
    ));
}

#[test]
fn test_loop_member_body() {
    let files = generate_files();
    let source = get_file(&files, "options.cpp").unwrap();

    assert!(source.contains("        std::vector<double> returnValue;\n"));
    assert!(source.contains("for (std::size_t i = 0; i < StrikesCpp.size(); ++i)"));
    assert!(source.contains("returnValue.push_back(objectPointer->valueAt(StrikesCpp[i]));"));
    assert!(source.contains("*resultSize = returnValue.size();"));
}

#[test]
fn test_enumeration_member_body() {
    let files = generate_files();
    let source = get_file(&files, "quotes.cpp").unwrap();

    assert!(source.contains("std::string enumerationIDCpp(enumerationID);"));
    assert!(source.contains("ObjectHandler::Create<QuantLib::DayCounter>()(enumerationIDCpp);"));
    assert!(source.contains("enumeration.yearFraction(StartDate, EndDate);"));
}

#[test]
fn test_documentation_only_and_other_platforms_skipped() {
    let files = generate_files();
    let header = get_file(&files, "utilities.h").unwrap();
    let quotes = get_file(&files, "quotes.h").unwrap();

    assert!(!header.contains("qlListObjects"));
    assert!(!header.contains("qlAddDays"));
    assert!(!quotes.contains("qlSimpleQuote"));
}

#[test]
fn test_template_override() {
    let stubs = tempfile::TempDir::new().unwrap();
    std::fs::write(
        stubs.path().join("c.prototype"),
        "int ${name}(${parameters});\n",
    )
    .unwrap();

    let ir = sample_ir().unwrap();
    let generator = Generator::new(&ir, Some(stubs.path())).unwrap();
    let files = generator.preview(&Banner::new("addingen")).unwrap();
    let header = files
        .iter()
        .find(|f| f.path == Path::new("utilities.h"))
        .unwrap();

    assert!(
        header
            .content
            .contains("int qlVersion(    Varies trigger,\n    char *result);\n")
    );
}

#[test]
fn test_unknown_placeholder_in_override_fails() {
    let stubs = tempfile::TempDir::new().unwrap();
    std::fs::write(stubs.path().join("c.prototype"), "long ${nmae}();\n").unwrap();

    let ir = sample_ir().unwrap();
    let generator = Generator::new(&ir, Some(stubs.path())).unwrap();
    let err = generator.preview(&Banner::new("addingen")).unwrap_err();
    assert!(format!("{err:#}").contains("nmae"));
}

#[test]
fn test_unknown_rule_code_in_override_fails() {
    let stubs = tempfile::TempDir::new().unwrap();
    std::fs::write(
        stubs.path().join("c.rules.toml"),
        "[groups.prototype]\nrules = [{ code = \"missing_code\" }]\n",
    )
    .unwrap();

    let ir = sample_ir().unwrap();
    let err = match Generator::new(&ir, Some(stubs.path())) {
        Ok(_) => panic!("expected an error"),
        Err(err) => err,
    };
    assert!(format!("{err:#}").contains("missing_code"));
}
