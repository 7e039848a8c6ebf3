pub mod changelog_file;
pub mod config_file;
pub mod event_file;
pub mod git_command;
pub mod workflow_assets;

pub use changelog_file::ChangelogFile;
pub use git_command::GitCommandAdapter;
