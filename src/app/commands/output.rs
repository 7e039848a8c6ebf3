//! Canonical command output helper.
//!
//! Writes compact single-line JSON to stdout on success, and optionally
//! appends `json=<...>` to `GITHUB_OUTPUT` when set.

use serde::Serialize;
use std::io::Write;

use crate::domain::AppError;

/// Write command output in canonical format.
///
/// - Writes compact single-line JSON to stdout.
/// - Appends `json=<same JSON>` to the `GITHUB_OUTPUT` file if the env var is set.
pub fn write_workflow_output<T: Serialize>(output: &T) -> Result<(), AppError> {
    let json = render_json(output)?;
    println!("{}", json);

    if let Ok(path) = std::env::var("GITHUB_OUTPUT") {
        let mut file =
            std::fs::OpenOptions::new().create(true).append(true).open(&path).map_err(|e| {
                AppError::InternalError(format!("Failed to open GITHUB_OUTPUT: {}", e))
            })?;

        writeln!(file, "json={}", json).map_err(|e| {
            AppError::InternalError(format!("Failed to write GITHUB_OUTPUT: {}", e))
        })?;
    }

    Ok(())
}

fn render_json<T: Serialize>(output: &T) -> Result<String, AppError> {
    let json = serde_json::to_string(output).map_err(|e| {
        AppError::InternalError(format!("Failed to serialize command output: {}", e))
    })?;
    // GITHUB_OUTPUT values are line-delimited.
    debug_assert!(!json.contains('\n'), "command output JSON must be single-line");
    Ok(json)
}
