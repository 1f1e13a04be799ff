//! Snapshot tests for documentation generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use addingen_codegen::testing::sample_ir;
use addingen_codegen_doxygen::{Addin, Generator};
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
            "all.docs",
            "enums.docs",
            "options.docs",
            "quotes.docs",
            "utilities.docs",
        ]
    );
}

#[test]
fn test_all_functions_alphabetical() {
    let files = generate_files();
    let all = get_file(&files, "all.docs").expect("all.docs not found");
    insta::assert_snapshot!("all_docs", all);
}

#[test]
fn test_enumerations() {
    let files = generate_files();
    let enums = get_file(&files, "enums.docs").expect("enums.docs not found");
    insta::assert_snapshot!("enums_docs", enums);
}

#[test]
fn test_category_page() {
    let files = generate_files();
    let page = get_file(&files, "utilities.docs").expect("utilities.docs not found");
    insta::assert_snapshot!("utilities_docs", page);
}

#[test]
fn test_constructor_documentation() {
    let files = generate_files();
    let page = get_file(&files, "options.docs").unwrap();

    assert!(page.contains(
        "string qlVanillaOption(string objectID, double Strike, string OptionType, vector<long> ExerciseDates, bool permanent)"
    ));
    assert!(page.contains("Construct an object of class VanillaOption and return its id"));
    assert!(page.contains("\\param objectID id of object to be created\n"));
    assert!(page.contains("\\param Strike strike price Default value = 100.0.\n"));
    assert!(page.contains("\\param permanent object permanent/nonpermanent Default value = false.\n"));
    assert!(page.contains("\\return the ID of the new object\n"));
}

#[test]
fn test_manual_implementation_noted() {
    let files = generate_files();
    let page = get_file(&files, "options.docs").unwrap();

    assert!(page.contains("\\anchor qlBarrierOption"));
    assert!(page.contains("Excel, C (manual)"));
}

#[test]
fn test_member_documentation() {
    let files = generate_files();
    let page = get_file(&files, "quotes.docs").unwrap();

    assert!(page.contains("double qlQuoteValue(string objectID, any trigger)"));
    assert!(page.contains("\\param objectID id of existing QuantLib::Quote object\n"));
    assert!(page.contains(
        "double qlDayCounterYearFraction(string enumerationID, long StartDate, long EndDate, any trigger)"
    ));
    assert!(page.contains("\\param trigger dependency tracking trigger\n"));
}
