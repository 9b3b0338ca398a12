//! studyplan configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default planner service address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Main studyplan configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Planner service connection
    pub api: ApiConfig,

    /// Values the form fills into every plan request
    pub plan: PlanDefaults,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level", alias = "log_level")]
    pub log_level: Option<String>,
}

/// Planner service connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,

    /// Request timeout; unset means requests wait indefinitely
    pub timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: None,
        }
    }
}

/// Fixed values the client sends with every plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanDefaults {
    pub user_id: String,

    /// Weight given to every subject
    pub subject_weight: u32,

    pub session_length_minutes: u32,

    /// Initial contents of the subjects field
    pub default_subjects: String,

    /// Initial contents of the hours-per-day field
    pub default_hours: String,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            user_id: "user1".to_string(),
            subject_weight: 3,
            session_length_minutes: 50,
            default_subjects: "CSA,DE,OOP".to_string(),
            default_hours: "3".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// An explicit path must load. Otherwise the first readable file among
    /// [`Config::search_paths`] wins, and unreadable ones are skipped.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        Ok(Self::load_first(&Self::search_paths()))
    }

    /// Project-local `.studyplan.yml`, then `<config dir>/studyplan/studyplan.yml`
    pub fn search_paths() -> Vec<PathBuf> {
        [
            Some(PathBuf::from(".studyplan.yml")),
            dirs::config_dir().map(|p| p.join("studyplan").join("studyplan.yml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn load_first(paths: &[PathBuf]) -> Self {
        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Failed to load config from {}: {}", path.display(), e),
            }
        }

        tracing::debug!("No config file found, using defaults");
        Self::default()
    }

    /// Read only the log level, before logging is initialised
    ///
    /// Follows the same fallback chain as [`Config::load`]; errors are left for
    /// the full load to report once logging is up.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load(config_path).ok().and_then(|c| c.log_level)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
