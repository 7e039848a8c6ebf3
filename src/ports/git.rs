use crate::domain::AppError;
use std::path::Path;

/// Commit author recorded on automation commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
}

pub trait Git {
    /// Get the current HEAD SHA.
    fn get_head_sha(&self) -> Result<String, AppError>;

    /// Get the current branch name.
    fn get_current_branch(&self) -> Result<String, AppError>;

    /// Check whether a worktree path differs from HEAD (modified or untracked).
    fn has_uncommitted_changes(&self, path: &Path) -> Result<bool, AppError>;

    /// Stage and commit files with a message and explicit author. Returns the new HEAD SHA.
    fn commit_files(
        &self,
        message: &str,
        files: &[&Path],
        author: &CommitIdentity,
    ) -> Result<String, AppError>;

    /// Push HEAD to `branch` on `remote`.
    fn push_head(&self, remote: &str, branch: &str, token: Option<&str>) -> Result<(), AppError>;

    /// Fetch `branch` from `remote` and move HEAD to it, keeping unrelated local changes.
    fn reset_to_remote(
        &self,
        remote: &str,
        branch: &str,
        token: Option<&str>,
    ) -> Result<(), AppError>;

    /// Commits on HEAD missing from the remote-tracking branch; `None` when it is unknown.
    fn commits_ahead_of(&self, remote: &str, branch: &str) -> Result<Option<usize>, AppError>;
}
