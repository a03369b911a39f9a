//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized};
use serde::{Deserialize, Serialize};
use tl_core::HOURS_IN_A_DAY;

/// Name of the config file looked up in the config and working directories.
const CONFIG_FILE_NAME: &str = "config.json";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Work categories offered when recording a task, in menu order.
    pub categories: Vec<String>,

    /// Issue-tracker project key prefixed to ticket numbers.
    #[serde(rename = "JIRA_PROJECT_KEY")]
    pub project_key: String,

    /// Directory holding the monthly ledger files.
    pub data_dir: PathBuf,

    /// Working hours in one day, used for max hours and scheduled PTO.
    pub hours_per_day: f64,

    /// Duration of the loading spinner between prompts. `0` disables it.
    pub spinner_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            categories: Vec::new(),
            project_key: "JIRA".to_string(),
            data_dir,
            hours_per_day: HOURS_IN_A_DAY,
            spinner_ms: 500,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    ///
    /// Later sources override earlier ones: defaults, the platform config
    /// directory, `config.json` in the working directory, `config_path`, and
    /// finally `TL_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Json::file(config_dir.join(CONFIG_FILE_NAME)));
        }

        figment = figment.merge(Json::file(CONFIG_FILE_NAME));

        if let Some(path) = config_path {
            if !path.is_file() {
                return Err(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(Env::prefixed("TL_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for timeledger.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("timeledger"))
}

/// Returns the platform-specific data directory for timeledger.
///
/// On Linux: `~/.local/share/timeledger`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("timeledger"))
}
