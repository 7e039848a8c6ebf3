//! Pull request event as delivered by the hosting platform.

use serde::Deserialize;

use crate::domain::AppError;

const CLOSED_ACTION: &str = "closed";

/// The slice of a pull-request event a changelog run cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestEvent {
    /// Event action; `None` for description-only runs, which count as closed.
    pub action: Option<String>,
    pub merged: bool,
    pub description: Option<String>,
    pub target_branch: String,
    pub number: Option<u64>,
    pub title: Option<String>,
}

impl PullRequestEvent {
    /// Build an event for a run that supplies the description directly.
    pub fn from_description(
        description: impl Into<String>,
        target_branch: impl Into<String>,
        number: Option<u64>,
    ) -> Self {
        Self {
            action: None,
            merged: true,
            description: Some(description.into()),
            target_branch: target_branch.into(),
            number,
            title: None,
        }
    }

    /// Parse a GitHub `pull_request` webhook payload.
    pub fn from_github_payload(content: &str) -> Result<Self, AppError> {
        let payload: GitHubPayload = serde_json::from_str(content)?;
        let pr = payload.pull_request;

        let target_branch = pr.base.branch.trim().to_string();
        if target_branch.is_empty() {
            return Err(AppError::Validation(
                "pull request event has an empty base.ref".to_string(),
            ));
        }

        Ok(Self {
            action: payload.action,
            merged: pr.merged.unwrap_or(false),
            description: pr.body,
            target_branch,
            number: pr.number.or(payload.number),
            title: pr.title,
        })
    }

    /// Whether this event is the closing of a merged pull request.
    pub fn is_merged_close(&self) -> bool {
        let closed = self.action.as_deref().is_none_or(|action| action == CLOSED_ACTION);
        closed && self.merged
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
struct GitHubPayload {
    action: Option<String>,
    number: Option<u64>,
    pull_request: GitHubPullRequest,
}

#[derive(Debug, Deserialize)]
struct GitHubPullRequest {
    number: Option<u64>,
    title: Option<String>,
    body: Option<String>,
    merged: Option<bool>,
    base: GitHubRef,
}

#[derive(Debug, Deserialize)]
struct GitHubRef {
    #[serde(rename = "ref")]
    branch: String,
}
