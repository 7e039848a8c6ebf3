mod updater_config;

pub use updater_config::{
    ChangelogConfig, CommitConfig, EntryConfig, ExtractionConfig, PushConfig, UpdaterConfig,
};

use crate::domain::AppError;

/// Default config file name, looked up at the repository root.
pub const CONFIG_FILE: &str = ".mergelog.toml";

/// Parse and validate updater configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<UpdaterConfig, AppError> {
    let config: UpdaterConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
