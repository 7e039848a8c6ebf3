use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::workflow_assets::{WorkflowFile, load_workflow_files};
use crate::domain::AppError;

#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// Repository root to write under; `None` returns the files without writing.
    pub output_dir: Option<PathBuf>,
    pub runs_on: String,
}

#[derive(Debug, Clone)]
pub struct WorkflowOutcome {
    pub files: Vec<WorkflowFile>,
    /// Paths written to disk, empty when rendering only.
    pub written: Vec<PathBuf>,
}

pub fn execute(options: &WorkflowOptions) -> Result<WorkflowOutcome, AppError> {
    let files = load_workflow_files(&options.runs_on)?;

    let mut written = Vec::new();
    if let Some(root) = &options.output_dir {
        for file in &files {
            written.push(write_file(root, file)?);
        }
    }

    Ok(WorkflowOutcome { files, written })
}

fn write_file(root: &Path, file: &WorkflowFile) -> Result<PathBuf, AppError> {
    let target = root.join(&file.path);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, &file.content)?;
    Ok(target)
}
