use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppError, PullRequestEvent};

/// Load a pull-request event from a GitHub event payload file.
pub fn load_event(path: &Path) -> Result<PullRequestEvent, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            AppError::Validation(format!("Event file not found: {}", path.display()))
        } else {
            AppError::Io(err)
        }
    })?;
    PullRequestEvent::from_github_payload(&content)
}
