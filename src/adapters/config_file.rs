use std::fs;
use std::path::Path;

use crate::domain::{AppError, CONFIG_FILE, UpdaterConfig, parse_config_content};

/// Load updater configuration.
///
/// An explicit path must exist. Without one, `.mergelog.toml` at the
/// repository root is used when present, otherwise defaults apply.
pub fn load_config(repo_root: &Path, explicit: Option<&Path>) -> Result<UpdaterConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let default_path = repo_root.join(CONFIG_FILE);
            if !default_path.is_file() {
                return Ok(UpdaterConfig::default());
            }
            default_path
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}
