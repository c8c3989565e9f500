//! Unified application error type.
//! All modules (input, core, export, config, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input files
    // ---------------------------
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported input file: {0}")]
    UnsupportedInput(String),

    #[error("Worksheet not found: {0}")]
    NoWorksheet(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid column layout: {0}")]
    InvalidLayout(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
