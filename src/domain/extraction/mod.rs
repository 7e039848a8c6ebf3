//! Extraction rules: free-form pull-request text to an optional entry text.
//!
//! A rule never fails. Text it cannot make sense of yields `None`, which the
//! updater treats as "nothing to add".

mod fields;
mod summary;

pub use fields::{DEFAULT_FIELDS, FieldTemplateRule};
pub use summary::SummaryRule;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Maps a pull-request description to changelog entry text.
pub trait ExtractionRule {
    fn extract(&self, description: &str) -> Option<String>;
}

impl<F> ExtractionRule for F
where
    F: Fn(&str) -> Option<String>,
{
    fn extract(&self, description: &str) -> Option<String> {
        self(description)
    }
}

/// Built-in rule selector used by configuration and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    #[default]
    Summary,
    Fields,
}

impl RuleKind {
    pub fn label(&self) -> &'static str {
        match self {
            RuleKind::Summary => "summary",
            RuleKind::Fields => "fields",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RuleKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(RuleKind::Summary),
            "fields" => Ok(RuleKind::Fields),
            other => Err(AppError::Validation(format!(
                "Unknown extraction rule '{}': expected 'summary' or 'fields'",
                other
            ))),
        }
    }
}

/// A configured built-in rule.
#[derive(Debug, Clone)]
pub enum BuiltinRule {
    Summary(SummaryRule),
    Fields(FieldTemplateRule),
}

impl BuiltinRule {
    pub fn new(kind: RuleKind, fields: &[String]) -> Self {
        match kind {
            RuleKind::Summary => BuiltinRule::Summary(SummaryRule),
            RuleKind::Fields => BuiltinRule::Fields(FieldTemplateRule::new(fields.to_vec())),
        }
    }
}

impl ExtractionRule for BuiltinRule {
    fn extract(&self, description: &str) -> Option<String> {
        match self {
            BuiltinRule::Summary(rule) => rule.extract(description),
            BuiltinRule::Fields(rule) => rule.extract(description),
        }
    }
}

/// Wraps a rule with an opt-out marker: descriptions containing it yield nothing.
pub struct SkipMarker<R> {
    marker: Option<String>,
    inner: R,
}

impl<R: ExtractionRule> SkipMarker<R> {
    pub fn new(marker: Option<String>, inner: R) -> Self {
        let marker = marker.filter(|m| !m.trim().is_empty());
        Self { marker, inner }
    }
}

impl<R: ExtractionRule> ExtractionRule for SkipMarker<R> {
    fn extract(&self, description: &str) -> Option<String> {
        if let Some(marker) = &self.marker
            && description.contains(marker.as_str())
        {
            return None;
        }
        self.inner.extract(description)
    }
}
