use crate::errors::{AppError, AppResult};
use crate::models::{ColumnLayout, WeekRule};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Leading rows of every sheet that hold titles and metadata, never data.
    #[serde(default = "default_header_rows")]
    pub header_rows: usize,
    #[serde(default = "default_week_rule")]
    pub week_rule: WeekRule,
    /// Worksheet to read; the first one when unset.
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default = "default_csv_delimiter")]
    pub csv_delimiter: char,
    /// Column width = longest cell × factor.
    #[serde(default = "default_width_factor")]
    pub width_factor: f64,
    #[serde(default)]
    pub layout: ColumnLayout,
}

fn default_header_rows() -> usize {
    5
}
fn default_week_rule() -> WeekRule {
    WeekRule::SundayStart
}
fn default_csv_delimiter() -> char {
    ';'
}
fn default_width_factor() -> f64 {
    1.5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header_rows: default_header_rows(),
            week_rule: default_week_rule(),
            sheet: None,
            csv_delimiter: default_csv_delimiter(),
            width_factor: default_width_factor(),
            layout: ColumnLayout::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tourreport")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("tourreport.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    /// The result is always validated.
    pub fn load(path: &Path) -> AppResult<Self> {
        let cfg = if path.exists() {
            let content = fs::read_to_string(path)?;
            Self::from_yaml(&content)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Config::default()
        };

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // an empty file is a valid, all-default configuration
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.layout.validate()?;

        if !self.width_factor.is_finite() || self.width_factor <= 0.0 {
            return Err(AppError::Config(format!(
                "width_factor must be a positive number, got {}",
                self.width_factor
            )));
        }

        if !self.csv_delimiter.is_ascii() {
            return Err(AppError::Config(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            )));
        }

        Ok(())
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn write_default(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = Config::default().to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
