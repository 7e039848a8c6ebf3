use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::{AppError, ChangelogEntry};
use crate::ports::ChangelogStore;

/// Changelog document stored as a text file.
#[derive(Debug, Clone)]
pub struct ChangelogFile {
    path: PathBuf,
}

impl ChangelogFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_content(&self) -> Result<String, AppError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(err.into()),
        }
    }
}

impl ChangelogStore for ChangelogFile {
    fn read_lines(&self) -> Result<Vec<String>, AppError> {
        Ok(self.read_content()?.lines().map(str::to_string).collect())
    }

    fn append(&self, entry: &ChangelogEntry) -> Result<(), AppError> {
        let existing = self.read_content()?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        // Keep the previous last line intact when the file lacks a trailing newline.
        if !existing.is_empty() && !existing.ends_with('\n') {
            file.write_all(b"\n")?;
        }
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}
