//! Description text in, entry text out. Never fails on malformed input.

use crate::domain::{ExtractionRule, RuleKind, UpdaterConfig};

pub fn execute(description: &str, config: &UpdaterConfig, rule: Option<RuleKind>) -> Option<String> {
    config.extraction.build_rule(rule).extract(description)
}
