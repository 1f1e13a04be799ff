//! Test utilities for platform generators.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests. It exposes a small sample project under `testdata/`
//! with one category per function kind mix.

use std::path::{Path, PathBuf};

use addingen_ir::AddinIR;
use addingen_manifest::AddinToml;
use eyre::{Result, eyre};

use crate::pipeline::{CompilationContext, Pipeline};

/// Directory holding the sample project.
pub fn sample_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Open the sample project's addin.toml.
pub fn sample_project() -> Result<AddinToml> {
    AddinToml::open(sample_dir().join("addin.toml")).map_err(|e| eyre!("{e}"))
}

/// Run the pipeline over the sample project and return the registry.
pub fn sample_ir() -> Result<AddinIR> {
    let project = sample_project()?;
    let metadata = project.load_metadata().map_err(|e| eyre!("{e}"))?;
    let mut ctx = CompilationContext::from_config(project.config(), metadata);
    Pipeline::new().run_context(&mut ctx)?;
    ctx.take_ir()
}

/// Copy the sample project into a temporary directory.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn sample_project_in_temp() -> Result<tempfile::TempDir> {
    let temp = tempfile::TempDir::new()?;
    copy_dir(&sample_dir(), temp.path())?;
    Ok(temp)
}

fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    std::fs::create_dir_all(to)?;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            std::fs::copy(entry.path(), target)?;
        }
    }
    Ok(())
}

/// Read every file under `dir`, as `(relative path, content)` sorted by path.
pub fn read_tree(dir: &Path) -> Result<Vec<(String, String)>> {
    let mut files = Vec::new();
    collect(dir, dir, &mut files)?;
    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

fn collect(root: &Path, dir: &Path, files: &mut Vec<(String, String)>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect(root, &path, files)?;
        } else {
            let relative = path.strip_prefix(root)?.to_string_lossy().replace('\\', "/");
            files.push((relative, std::fs::read_to_string(&path)?));
        }
    }
    Ok(())
}

/// Assert that two strings are equal, with a line diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}
