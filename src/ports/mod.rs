mod changelog_store;
mod git;

pub use changelog_store::ChangelogStore;
pub use git::{CommitIdentity, Git};
