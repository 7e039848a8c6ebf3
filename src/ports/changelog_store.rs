use crate::domain::{AppError, ChangelogEntry};

/// Append-only access to the changelog document.
pub trait ChangelogStore {
    /// All lines currently in the document; empty when it does not exist yet.
    fn read_lines(&self) -> Result<Vec<String>, AppError>;

    /// Append one entry as a new line after the existing content.
    fn append(&self, entry: &ChangelogEntry) -> Result<(), AppError>;

    /// Last non-blank line of the document, if any.
    fn last_line(&self) -> Result<Option<String>, AppError> {
        Ok(self.read_lines()?.into_iter().rev().find(|line| !line.trim().is_empty()))
    }
}
