//! Tests for writing Excel output to disk.

use std::fs;

use addingen_codegen::testing::{read_tree, sample_ir};
use addingen_codegen_excel::{Addin, Generator};
use addingen_core::Banner;
use tempfile::TempDir;

#[test]
fn test_second_run_changes_nothing() {
    let ir = sample_ir().unwrap();
    let generator = Generator::new(&ir, None).unwrap();
    let out = TempDir::new().unwrap();
    let banner = Banner::new("addingen");

    let first = generator.generate(out.path(), &banner).unwrap();
    assert_eq!(first.created.len(), 13);
    let before = read_tree(out.path()).unwrap();

    let second = generator.generate(out.path(), &banner).unwrap();
    assert_eq!(second.changed(), 0);
    assert_eq!(second.unchanged.len(), 13);
    assert_eq!(read_tree(out.path()).unwrap(), before);
}

#[test]
fn test_stale_registration_is_updated() {
    let ir = sample_ir().unwrap();
    let generator = Generator::new(&ir, None).unwrap();
    let out = TempDir::new().unwrap();
    let banner = Banner::new("addingen");

    generator.generate(out.path(), &banner).unwrap();
    let factory = out.path().join("Serialization").join("serializationfactory.cpp");
    fs::write(&factory, "stale").unwrap();

    let summary = generator.generate(out.path(), &banner).unwrap();
    assert_eq!(summary.updated, vec![factory]);
    assert_eq!(summary.unchanged.len(), 12);
}
