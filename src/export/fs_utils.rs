use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Fails unless `path` is free, `force` is set, or the user confirms the
/// overwrite on stdin.
pub(super) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        info("Existing file will be replaced.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "'{}' exists, use --force to replace it",
            path.display()
        )))
    }
}
