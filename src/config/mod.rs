use crate::core::merge::TieBreak;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date::parse_date;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_term_start")]
    pub term_start: String,
    #[serde(default = "default_term_end")]
    pub term_end: String,
    /// Year used for registrar dates; falls back to the term start year.
    #[serde(default)]
    pub reference_year: Option<i32>,
    #[serde(default)]
    pub tie_break: TieBreak,
    #[serde(default)]
    pub skip_invalid: bool,
    #[serde(default = "default_has_headers")]
    pub has_headers: bool,
}

fn default_term_start() -> String {
    "2023-08-31".to_string()
}
fn default_term_end() -> String {
    "2023-12-31".to_string()
}
fn default_has_headers() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            term_start: default_term_start(),
            term_end: default_term_end(),
            reference_year: None,
            tie_break: TieBreak::default(),
            skip_invalid: false,
            has_headers: default_has_headers(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rclasscal")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rclasscal.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write a default configuration file at `path`.
    ///
    /// In test mode nothing is written.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;

        success(format!("Config file: {}", path.display()));
        Ok(())
    }

    /// Term bounds, with optional command-line overrides.
    pub fn term_bounds(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> AppResult<(NaiveDate, NaiveDate)> {
        let start = parse_date(start.unwrap_or(&self.term_start))?;
        let end = parse_date(end.unwrap_or(&self.term_end))?;

        if start > end {
            return Err(AppError::InvalidDate(format!(
                "term start {start} is after term end {end}"
            )));
        }

        Ok((start, end))
    }

    /// Explicit override, then config, then the year of the term start
    /// (`start` when given on the command line, else `term_start`).
    pub fn reference_year(&self, year: Option<i32>, start: Option<&str>) -> AppResult<i32> {
        match year.or(self.reference_year) {
            Some(y) => Ok(y),
            None => Ok(parse_date(start.unwrap_or(&self.term_start))?.year()),
        }
    }
}
