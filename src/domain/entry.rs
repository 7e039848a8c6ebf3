//! Changelog entry: one non-empty line ready to append.

use chrono::NaiveDate;
use minijinja::{Environment, UndefinedBehavior, context};
use std::fmt;

use crate::domain::{AppError, PullRequestEvent};

/// A single changelog line. Never empty, never contains a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry(String);

impl ChangelogEntry {
    /// Collapse `text` to one trimmed line; `None` if nothing is left.
    pub fn new(text: &str) -> Option<Self> {
        let line = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() { None } else { Some(Self(line)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChangelogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Renders extracted text through the configured entry template.
pub struct EntryRenderer<'a> {
    env: Environment<'a>,
}

const ENTRY_TEMPLATE: &str = "entry";

impl<'a> EntryRenderer<'a> {
    pub fn new(template: &'a str) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(ENTRY_TEMPLATE, template)
            .map_err(|err| AppError::template_error("entry.template", err))?;
        Ok(Self { env })
    }

    pub fn render(
        &self,
        text: &str,
        event: &PullRequestEvent,
        date: NaiveDate,
    ) -> Result<Option<ChangelogEntry>, AppError> {
        let rendered = self
            .env
            .get_template(ENTRY_TEMPLATE)
            .and_then(|template| {
                template.render(context! {
                    text => text,
                    number => event.number,
                    title => event.title.as_deref(),
                    branch => event.target_branch.as_str(),
                    date => date.format("%Y-%m-%d").to_string(),
                })
            })
            .map_err(|err| AppError::template_error("entry.template", err))?;
        Ok(ChangelogEntry::new(&rendered))
    }
}
