pub mod config;
pub mod init;
pub mod report;
pub mod summary;

use crate::config::Config;
use crate::core::{Batch, load_batch};
use crate::models::WeekRule;
use crate::ui::messages::{file_failed, info};
use std::path::PathBuf;

/// Loads all input files, reporting every failed one without stopping.
pub(crate) fn load_inputs(files: &[PathBuf], cfg: &Config, rule: WeekRule) -> Batch {
    info(format!(
        "Reading {} file(s), week rule: {}",
        files.len(),
        rule.as_str()
    ));

    let batch = load_batch(files, cfg, rule);
    for (path, message) in batch.failures() {
        file_failed(path, message);
    }

    batch
}
