//! Idempotent output files.
//!
//! Generated files are staged in a temporary sibling and only moved over the
//! target when their bytes differ, so unchanged outputs keep their timestamps
//! and do not trigger rebuilds.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use tracing::{debug, info};

use crate::WriteResult;

const TEMP_SUFFIX: &str = ".temp";

/// A pending write to a generated file.
///
/// Dropping an `OutputFile` without calling [`OutputFile::close`] discards the
/// staged content and leaves the target untouched.
pub struct OutputFile {
    target: PathBuf,
    temp: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl OutputFile {
    /// Create the temporary sibling of `target`, creating parent directories as needed.
    pub fn open(target: impl Into<PathBuf>) -> Result<Self> {
        let target = target.into();
        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
        }

        let temp = temp_path(&target);
        let file = File::create(&temp)
            .wrap_err_with(|| format!("failed to create '{}'", temp.display()))?;
        debug!(file = %target.display(), "opened output file");

        Ok(Self {
            target,
            temp,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Get the target path.
    pub fn path(&self) -> &Path {
        &self.target
    }

    /// Append text to the staged content.
    pub fn write(&mut self, text: &str) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer
                .write_all(text.as_bytes())
                .wrap_err_with(|| format!("failed to write '{}'", self.temp.display()))?;
        }
        Ok(())
    }

    /// Commit the staged content.
    ///
    /// The target is replaced only if its bytes differ from the staged content.
    pub fn close(mut self) -> Result<WriteResult> {
        if let Some(writer) = self.writer.take() {
            writer
                .into_inner()
                .map_err(|e| e.into_error())
                .wrap_err_with(|| format!("failed to flush '{}'", self.temp.display()))?;
        }

        let staged = fs::read(&self.temp)
            .wrap_err_with(|| format!("failed to read '{}'", self.temp.display()))?;
        let result = match fs::read(&self.target) {
            Ok(existing) if existing == staged => WriteResult::Unchanged,
            Ok(_) => WriteResult::Updated,
            Err(e) if e.kind() == io::ErrorKind::NotFound => WriteResult::Created,
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("failed to read '{}'", self.target.display()));
            }
        };

        if result.is_change() {
            fs::rename(&self.temp, &self.target).wrap_err_with(|| {
                format!(
                    "failed to move '{}' to '{}'",
                    self.temp.display(),
                    self.target.display()
                )
            })?;
        }

        info!(file = %self.target.display(), status = %result, "closed output file");
        Ok(result)
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        // Drop the handle before removing so the unlink succeeds on every platform.
        self.writer.take();
        let _ = fs::remove_file(&self.temp);
    }
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = OsString::from(target.as_os_str());
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

/// Tally of write results for one generation run.
#[derive(Debug, Default, Clone)]
pub struct WriteSummary {
    pub created: Vec<PathBuf>,
    pub updated: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

impl WriteSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of writing `path`.
    pub fn record(&mut self, path: impl Into<PathBuf>, result: WriteResult) {
        let path = path.into();
        match result {
            WriteResult::Created => self.created.push(path),
            WriteResult::Updated => self.updated.push(path),
            WriteResult::Unchanged => self.unchanged.push(path),
        }
    }

    /// Fold another summary into this one.
    pub fn merge(&mut self, other: WriteSummary) {
        self.created.extend(other.created);
        self.updated.extend(other.updated);
        self.unchanged.extend(other.unchanged);
    }

    /// Number of files that were created or updated.
    pub fn changed(&self) -> usize {
        self.created.len() + self.updated.len()
    }

    /// Number of files visited.
    pub fn total(&self) -> usize {
        self.changed() + self.unchanged.len()
    }
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use tempfile::TempDir;

    use super::*;

    fn write_once(path: &Path, text: &str) -> WriteResult {
        let mut out = OutputFile::open(path).unwrap();
        out.write(text).unwrap();
        out.close().unwrap()
    }

    #[test]
    fn test_close_creates_missing_target() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("out.cpp");

        assert_eq!(write_once(&path, "hello"), WriteResult::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_close_identical_is_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.cpp");

        write_once(&path, "same");
        let before = fs::metadata(&path).unwrap().modified().unwrap();
        thread::sleep(Duration::from_millis(20));

        assert_eq!(write_once(&path, "same"), WriteResult::Unchanged);
        let after = fs::metadata(&path).unwrap().modified().unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_close_different_is_updated() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.cpp");

        write_once(&path, "first");
        assert_eq!(write_once(&path, "second"), WriteResult::Updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_multiple_writes_are_appended() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.h");

        let mut out = OutputFile::open(&path).unwrap();
        out.write("one ").unwrap();
        out.write("two").unwrap();
        out.close().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one two");
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.h");

        write_once(&path, "x");
        write_once(&path, "x");
        write_once(&path, "y");

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![OsString::from("out.h")]);
    }

    #[test]
    fn test_drop_without_close_discards() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.h");
        write_once(&path, "original");

        {
            let mut out = OutputFile::open(&path).unwrap();
            out.write("abandoned").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = WriteSummary::new();
        summary.record("a", WriteResult::Created);
        summary.record("b", WriteResult::Unchanged);

        let mut other = WriteSummary::new();
        other.record("c", WriteResult::Updated);
        summary.merge(other);

        assert_eq!(summary.changed(), 2);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.updated, vec![PathBuf::from("c")]);
    }
}
