//! mergelog: append changelog entries extracted from merged pull request descriptions.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    EventSource, UpdateOptions, UpdateOutcome, UpdateRequest, WorkflowOptions, WorkflowOutcome,
    extract_entry, generate_workflow, update,
};
pub use domain::{AppError, ChangelogEntry, ExtractionRule, PullRequestEvent, RuleKind};
