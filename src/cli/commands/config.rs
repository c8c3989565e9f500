use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // loading already validated the file; report what was checked
        if *check {
            if path.exists() {
                success(format!("Configuration is valid: {}", path.display()));
            } else {
                info(format!(
                    "No configuration file at {}, defaults are in use",
                    path.display()
                ));
            }
        }

        if *print_config || !*check {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
