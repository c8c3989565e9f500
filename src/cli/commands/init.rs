use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `init` command: write the default configuration to `path`.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        Config::write_default(path, *force)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
