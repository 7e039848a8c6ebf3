//! Public API wiring concrete adapters to commands.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use crate::adapters::config_file::load_config;
use crate::adapters::event_file::load_event;
use crate::adapters::{ChangelogFile, GitCommandAdapter};
use crate::app::commands::{extract, update, workflow};
use crate::domain::{AppError, PullRequestEvent, RuleKind};
use crate::ports::Git;

pub use crate::app::commands::update::{UpdateOptions, UpdateOutcome};
pub use crate::app::commands::workflow::{WorkflowOptions, WorkflowOutcome};

/// Where the pull-request event comes from.
#[derive(Debug, Clone)]
pub enum EventSource {
    /// A GitHub event payload file.
    EventFile(PathBuf),
    /// Description text given directly. The branch defaults to the current branch.
    Description { text: String, branch: Option<String>, number: Option<u64> },
}

#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub repo: PathBuf,
    pub config: Option<PathBuf>,
    pub source: EventSource,
    pub push: bool,
    pub rule: Option<RuleKind>,
}

/// Extract entry text from a description using the configuration found in `repo`.
pub fn extract_entry(
    description: &str,
    repo: &Path,
    config: Option<&Path>,
    rule: Option<RuleKind>,
) -> Result<Option<String>, AppError> {
    let config = load_config(repo, config)?;
    Ok(extract::execute(description, &config, rule))
}

/// Run the changelog pipeline for one pull-request event.
pub fn update(request: UpdateRequest) -> Result<UpdateOutcome, AppError> {
    let config = load_config(&request.repo, request.config.as_deref())?;
    let git = GitCommandAdapter::new(request.repo.clone());

    let event = match request.source {
        EventSource::EventFile(path) => load_event(&path)?,
        EventSource::Description { text, branch, number } => {
            let branch = match branch {
                Some(branch) if !branch.trim().is_empty() => branch.trim().to_string(),
                Some(_) => return Err(AppError::Validation("--branch must not be empty".into())),
                None => git.get_current_branch()?,
            };
            PullRequestEvent::from_description(text, branch, number)
        }
    };

    let token = std::env::var(&config.push.token_env).ok().filter(|t| !t.trim().is_empty());
    debug!(token_env = %config.push.token_env, has_token = token.is_some(), "resolved push credentials");

    let changelog = ChangelogFile::new(request.repo.join(&config.changelog.path));
    let options = UpdateOptions { push: request.push, token, rule: request.rule };
    update::execute_with_adapters(
        &git,
        &changelog,
        &config,
        &event,
        &options,
        Utc::now().date_naive(),
    )
}

/// Render (and optionally write) the GitHub Actions workflow.
pub fn generate_workflow(options: &WorkflowOptions) -> Result<WorkflowOutcome, AppError> {
    workflow::execute(options)
}
