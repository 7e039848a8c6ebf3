//! Changelog update pipeline: extract, append, commit if changed, push if committed.

use chrono::NaiveDate;
use minijinja::{Environment, UndefinedBehavior, context};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::domain::configuration::PushConfig;
use crate::domain::{
    AppError, ChangelogEntry, EntryRenderer, ExtractionRule, PullRequestEvent, RuleKind,
    UpdaterConfig,
};
use crate::ports::{ChangelogStore, CommitIdentity, Git};

#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Push the commit to the target branch.
    pub push: bool,
    /// Credential for the push step only.
    pub token: Option<String>,
    /// Override the configured extraction rule.
    pub rule: Option<RuleKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    pub schema_version: u32,
    pub appended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,
    pub committed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_sha: Option<String>,
    pub pushed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped_reason: Option<String>,
}

impl UpdateOutcome {
    fn skipped(reason: impl Into<String>) -> Self {
        Self {
            schema_version: 1,
            appended: false,
            entry: None,
            committed: false,
            commit_sha: None,
            pushed: false,
            branch: None,
            skipped_reason: Some(reason.into()),
        }
    }
}

pub fn execute_with_adapters(
    git: &impl Git,
    changelog: &impl ChangelogStore,
    config: &UpdaterConfig,
    event: &PullRequestEvent,
    options: &UpdateOptions,
    today: NaiveDate,
) -> Result<UpdateOutcome, AppError> {
    if !event.is_merged_close() {
        info!(action = ?event.action, merged = event.merged, "event is not a merged pull request");
        return Ok(UpdateOutcome::skipped("Pull request was not merged"));
    }

    let rule = config.extraction.build_rule(options.rule);
    let Some(text) = rule.extract(event.description()) else {
        info!("no changelog entry in pull request description");
        return Ok(UpdateOutcome::skipped("No changelog entry in pull request description"));
    };
    debug!(%text, "extracted changelog text");

    let renderer = EntryRenderer::new(&config.entry.template)?;
    let Some(entry) = renderer.render(&text, event, today)? else {
        info!("entry template rendered an empty line");
        return Ok(UpdateOutcome::skipped("Entry template rendered an empty line"));
    };

    let path = config.changelog.path.as_path();
    let branch = event.target_branch.as_str();
    let mut outcome = UpdateOutcome {
        schema_version: 1,
        appended: append_unless_last(changelog, &entry, path)?,
        entry: Some(entry.to_string()),
        committed: false,
        commit_sha: None,
        pushed: false,
        branch: Some(branch.to_string()),
        skipped_reason: None,
    };

    if !git.has_uncommitted_changes(path)? {
        info!("changelog unchanged; nothing to commit");
        outcome.skipped_reason = Some(unchanged_reason(git, &config.push, branch)?);
        return Ok(outcome);
    }

    let message = render_commit_message(&config.commit.message, event)?;
    let author = CommitIdentity {
        name: config.commit.author_name.clone(),
        email: config.commit.author_email.clone(),
    };
    let sha = git.commit_files(&message, &[path], &author)?;
    info!(%sha, "committed changelog update");
    outcome.committed = true;
    outcome.commit_sha = Some(sha);

    if !options.push {
        return Ok(outcome);
    }

    let remote = config.push.remote.as_str();
    let token = options.token.as_deref();
    let mut attempt = 0;
    loop {
        match git.push_head(remote, branch, token) {
            Ok(()) => break,
            Err(err) if attempt < config.push.rebase_retries => {
                attempt += 1;
                warn!(
                    error = %err,
                    attempt,
                    max = config.push.rebase_retries,
                    "push rejected; rebuilding entry on {}/{}",
                    remote,
                    branch
                );
                // A concurrent run appended at the same spot; rebuild on the fetched tip.
                git.reset_to_remote(remote, branch, token)?;
                outcome.appended = append_unless_last(changelog, &entry, path)?;
                if !git.has_uncommitted_changes(path)? {
                    info!("entry is already on the remote branch");
                    outcome.committed = false;
                    outcome.commit_sha = None;
                    outcome.skipped_reason = Some("Entry already on remote branch".to_string());
                    return Ok(outcome);
                }
                let sha = git.commit_files(&message, &[path], &author)?;
                debug!(%sha, "recommitted changelog update on remote tip");
                outcome.commit_sha = Some(sha);
            }
            Err(err) => return Err(err),
        }
    }
    info!(%branch, "pushed changelog update");
    outcome.pushed = true;

    Ok(outcome)
}

/// Append `entry` unless it already is the last line. Returns whether it was appended.
fn append_unless_last(
    changelog: &impl ChangelogStore,
    entry: &ChangelogEntry,
    path: &Path,
) -> Result<bool, AppError> {
    if changelog.last_line()?.is_some_and(|line| line.trim() == entry.as_str()) {
        debug!(path = %path.display(), "entry is already the last changelog line");
        return Ok(false);
    }
    changelog.append(entry)?;
    debug!(path = %path.display(), %entry, "appended changelog entry");
    Ok(true)
}

/// Skip reason for a run that left the changelog as it was. Mentions unpushed
/// commits so a stranded commit from an earlier failed push is visible.
fn unchanged_reason(git: &impl Git, push: &PushConfig, branch: &str) -> Result<String, AppError> {
    match git.commits_ahead_of(&push.remote, branch)? {
        Some(ahead) if ahead > 0 => {
            warn!(ahead, "changelog unchanged but HEAD has unpushed commits");
            Ok(format!(
                "Changelog unchanged; HEAD is {} commit(s) ahead of {}/{}",
                ahead, push.remote, branch
            ))
        }
        _ => Ok("Changelog unchanged".to_string()),
    }
}

fn render_commit_message(template: &str, event: &PullRequestEvent) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    let message = env
        .render_str(
            template,
            context! {
                number => event.number,
                title => event.title.as_deref(),
                branch => event.target_branch.as_str(),
            },
        )
        .map_err(|err| AppError::template_error("commit.message", err))?;

    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::template_error("commit.message", "rendered an empty message"));
    }
    Ok(message.to_string())
}
