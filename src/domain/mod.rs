pub mod configuration;
pub mod entry;
pub mod error;
pub mod extraction;
pub mod pull_request;

pub use configuration::{CONFIG_FILE, UpdaterConfig, parse_config_content};
pub use entry::{ChangelogEntry, EntryRenderer};
pub use error::AppError;
pub use extraction::{ExtractionRule, RuleKind};
pub use pull_request::PullRequestEvent;
