// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Checks whether the report file may be created or replaced.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists otherwise → ask on stdin, anything but y/yes cancels.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "cancelled, '{}' not overwritten",
            path.display()
        )))
    }
}
