//! Updater configuration domain models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::AppError;
use crate::domain::extraction::{BuiltinRule, DEFAULT_FIELDS, RuleKind, SkipMarker};

/// Configuration loaded from `.mergelog.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdaterConfig {
    #[serde(default)]
    pub changelog: ChangelogConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub entry: EntryConfig,
    #[serde(default)]
    pub commit: CommitConfig,
    #[serde(default)]
    pub push: PushConfig,
}

impl UpdaterConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.changelog.validate()?;
        self.extraction.validate()?;
        self.entry.validate()?;
        self.commit.validate()?;
        self.push.validate()?;
        Ok(())
    }
}

/// Where the changelog document lives, relative to the repository root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangelogConfig {
    #[serde(default = "default_changelog_path")]
    pub path: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self { path: default_changelog_path() }
    }
}

impl ChangelogConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_os_str().is_empty() {
            return Err(AppError::config_error("changelog.path must not be empty"));
        }
        if self.path.is_absolute() {
            return Err(AppError::config_error(
                "changelog.path must be relative to the repository root",
            ));
        }
        if self.path.components().any(|c| matches!(c, std::path::Component::ParentDir)) {
            return Err(AppError::config_error("changelog.path must not contain '..'"));
        }
        Ok(())
    }
}

fn default_changelog_path() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

/// Which extraction rule to apply and how.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionConfig {
    #[serde(default)]
    pub rule: RuleKind,
    /// Field names for the `fields` rule.
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
    /// Descriptions containing this text produce no entry. Empty disables it.
    #[serde(default = "default_skip_marker")]
    pub skip_marker: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { rule: RuleKind::default(), fields: default_fields(), skip_marker: default_skip_marker() }
    }
}

impl ExtractionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.rule == RuleKind::Fields && self.fields.is_empty() {
            return Err(AppError::config_error(
                "extraction.fields must list at least one field for the 'fields' rule",
            ));
        }
        if let Some(field) = self.fields.iter().find(|f| f.trim().is_empty() || f.contains(':')) {
            return Err(AppError::config_error(format!(
                "extraction.fields entry '{}' must be non-empty and contain no ':'",
                field
            )));
        }
        Ok(())
    }

    /// Build the configured rule, optionally overriding its kind.
    pub fn build_rule(&self, kind: Option<RuleKind>) -> SkipMarker<BuiltinRule> {
        let rule = BuiltinRule::new(kind.unwrap_or(self.rule), &self.fields);
        SkipMarker::new(Some(self.skip_marker.clone()), rule)
    }
}

fn default_fields() -> Vec<String> {
    DEFAULT_FIELDS.iter().map(|field| field.to_string()).collect()
}

fn default_skip_marker() -> String {
    "[skip changelog]".to_string()
}

/// How extracted text becomes a changelog line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryConfig {
    #[serde(default = "default_entry_template")]
    pub template: String,
}

impl Default for EntryConfig {
    fn default() -> Self {
        Self { template: default_entry_template() }
    }
}

impl EntryConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.template.trim().is_empty() {
            return Err(AppError::config_error("entry.template must not be empty"));
        }
        Ok(())
    }
}

fn default_entry_template() -> String {
    "- {{ text }}{% if number %} (#{{ number }}){% endif %}".to_string()
}

/// Automation identity and message for the changelog commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommitConfig {
    #[serde(default = "default_author_name")]
    pub author_name: String,
    #[serde(default = "default_author_email")]
    pub author_email: String,
    #[serde(default = "default_commit_message")]
    pub message: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            author_name: default_author_name(),
            author_email: default_author_email(),
            message: default_commit_message(),
        }
    }
}

impl CommitConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.author_name.trim().is_empty() {
            return Err(AppError::config_error("commit.author_name must not be empty"));
        }
        if !self.author_email.contains('@') {
            return Err(AppError::config_error("commit.author_email must be an email address"));
        }
        if self.message.trim().is_empty() {
            return Err(AppError::config_error("commit.message must not be empty"));
        }
        Ok(())
    }
}

fn default_author_name() -> String {
    "github-actions".to_string()
}

fn default_author_email() -> String {
    "github-actions@github.com".to_string()
}

fn default_commit_message() -> String {
    "Update changelog{% if number %} for #{{ number }}{% endif %}".to_string()
}

/// Push target remote and credential source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PushConfig {
    #[serde(default = "default_remote")]
    pub remote: String,
    /// Environment variable holding the push token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// Extra push attempts after `git pull --rebase`; 0 pushes once.
    #[serde(default)]
    pub rebase_retries: u32,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self { remote: default_remote(), token_env: default_token_env(), rebase_retries: 0 }
    }
}

impl PushConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.remote.trim().is_empty() {
            return Err(AppError::config_error("push.remote must not be empty"));
        }
        if self.rebase_retries > 10 {
            return Err(AppError::config_error("push.rebase_retries must be at most 10"));
        }
        Ok(())
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_token_env() -> String {
    "GITHUB_TOKEN".to_string()
}
