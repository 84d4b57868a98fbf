mod csv;
mod fs_utils;
mod json;

use crate::core::calendar::Calendar;
use crate::errors::AppResult;
use crate::models::Timecard;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write one week to `file`. An existing file is replaced only with
/// `force` or after confirmation.
pub fn export_week(
    cal: &Calendar,
    timecard: &Timecard,
    format: ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(path, cal, timecard)?,
        ExportFormat::Json => json::write_json(path, timecard)?,
    }

    success(format!(
        "{} export of week {} completed: {}",
        format.as_str().to_uppercase(),
        timecard.week_start,
        path.display()
    ));
    Ok(())
}
