//! Tests for writing documentation pages to disk.

use addingen_codegen::testing::{read_tree, sample_ir};
use addingen_codegen_doxygen::{Addin, Generator};
use addingen_core::Banner;
use tempfile::TempDir;

#[test]
fn test_second_run_changes_nothing() {
    let ir = sample_ir().unwrap();
    let generator = Generator::new(&ir, None).unwrap();
    let out = TempDir::new().unwrap();
    let banner = Banner::new("addingen");

    let first = generator.generate(out.path(), &banner).unwrap();
    assert_eq!(first.created.len(), 5);
    let before = read_tree(out.path()).unwrap();

    let second = generator.generate(out.path(), &banner).unwrap();
    assert_eq!(second.changed(), 0);
    assert_eq!(second.unchanged.len(), 5);
    assert_eq!(read_tree(out.path()).unwrap(), before);
}

#[test]
fn test_copyright_change_updates_every_page() {
    let ir = sample_ir().unwrap();
    let generator = Generator::new(&ir, None).unwrap();
    let out = TempDir::new().unwrap();

    generator
        .generate(out.path(), &Banner::new("addingen"))
        .unwrap();
    let banner = Banner::new("addingen").with_copyright("/* QuantLibAddin */");
    let summary = generator.generate(out.path(), &banner).unwrap();

    assert_eq!(summary.updated.len(), 5);
    assert!(summary.created.is_empty());
    let page = std::fs::read_to_string(out.path().join("all.docs")).unwrap();
    assert!(page.starts_with("/* QuantLibAddin */\n"));
}
