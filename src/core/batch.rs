//! Loading a batch of input files with per-file error isolation.

use crate::config::Config;
use crate::core::extract::extract_entries;
use crate::errors::AppResult;
use crate::input::read_rows;
use crate::models::{TourEntry, WeekRule};
use std::path::{Path, PathBuf};

/// Result of processing one input file.
#[derive(Debug)]
pub enum FileOutcome {
    Loaded {
        path: PathBuf,
        entries: Vec<TourEntry>,
        /// Data rows that produced no entry.
        skipped_rows: usize,
    },
    Failed {
        path: PathBuf,
        message: String,
    },
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Loaded { path, .. } | FileOutcome::Failed { path, .. } => path,
        }
    }

    pub fn entries(&self) -> &[TourEntry] {
        match self {
            FileOutcome::Loaded { entries, .. } => entries,
            FileOutcome::Failed { .. } => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FileOutcome::Failed { .. })
    }
}

/// Outcomes of all files of one command, in argument order.
#[derive(Debug, Default)]
pub struct Batch {
    pub outcomes: Vec<FileOutcome>,
}

impl Batch {
    /// All extracted entries, file by file, row by row.
    pub fn entries(&self) -> impl Iterator<Item = &TourEntry> {
        self.outcomes.iter().flat_map(FileOutcome::entries)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Failed { path, message } => Some((path.as_path(), message.as_str())),
            FileOutcome::Loaded { .. } => None,
        })
    }

    pub fn into_entries(self) -> Vec<TourEntry> {
        self.outcomes
            .into_iter()
            .flat_map(|o| match o {
                FileOutcome::Loaded { entries, .. } => entries,
                FileOutcome::Failed { .. } => Vec::new(),
            })
            .collect()
    }
}

/// Reads one file and extracts its entries. Errors become `Failed`.
pub fn load_file(path: &Path, cfg: &Config, rule: WeekRule) -> FileOutcome {
    match try_load(path, cfg, rule) {
        Ok((entries, skipped_rows)) => {
            tracing::info!(
                path = %path.display(),
                entries = entries.len(),
                skipped_rows,
                "file loaded"
            );
            FileOutcome::Loaded {
                path: path.to_path_buf(),
                entries,
                skipped_rows,
            }
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "file failed");
            FileOutcome::Failed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    }
}

fn try_load(path: &Path, cfg: &Config, rule: WeekRule) -> AppResult<(Vec<TourEntry>, usize)> {
    let rows = read_rows(path, cfg)?;

    let mut entries = Vec::new();
    let mut skipped = 0;
    for row in &rows {
        let found = extract_entries(row, &cfg.layout, rule);
        if found.is_empty() {
            skipped += 1;
        }
        entries.extend(found);
    }

    Ok((entries, skipped))
}

/// Processes `paths` one after the other; a failing file never stops the batch.
pub fn load_batch<P: AsRef<Path>>(paths: &[P], cfg: &Config, rule: WeekRule) -> Batch {
    Batch {
        outcomes: paths
            .iter()
            .map(|p| load_file(p.as_ref(), cfg, rule))
            .collect(),
    }
}
