use crate::errors::{AppError, AppResult};
use crate::models::Timecard;
use std::path::Path;

/// Write the timecard as pretty JSON.
pub(super) fn write_json(path: &Path, timecard: &Timecard) -> AppResult<()> {
    let json = serde_json::to_string_pretty(timecard)
        .map_err(|e| AppError::Export(format!("JSON serialization failed: {}", e)))?;
    std::fs::write(path, json)?;
    Ok(())
}
