//! Configuration management

use crate::domain::{CoachPersona, Mood};
use crate::error::{HabitError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DATA_DIR: &str = ".habitual";
pub const ENDPOINT_ENV: &str = "HABITUAL_ENDPOINT";

const DEFAULT_TIMEOUT_MS: u64 = 10_000;
const DEFAULT_TIME: &str = "08:00";

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_time() -> String {
    DEFAULT_TIME.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub persona: CoachPersona,
    /// Remote breakdown endpoint; when unset only the local generator is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub default_mood: Mood,
    /// Preferred time for new habits; empty disables the schedule line
    #[serde(default = "default_time")]
    pub default_time: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            persona: CoachPersona::default(),
            endpoint: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            default_mood: Mood::default(),
            default_time: default_time(),
            created: Utc::now(),
        }
    }

    /// Load config from .habitual/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DATA_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HabitError::NotHabitDirectory(path.to_path_buf())
            } else {
                HabitError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| HabitError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .habitual/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let data_dir = path.join(DATA_DIR);
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir(&data_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| HabitError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Remote endpoint, with HABITUAL_ENDPOINT taking precedence.
    /// An empty value disables the remote collaborator.
    pub fn resolved_endpoint(&self) -> Option<String> {
        std::env::var(ENDPOINT_ENV)
            .ok()
            .or_else(|| self.endpoint.clone())
            .filter(|e| !e.trim().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Preferred time, None when disabled
    pub fn preferred_time(&self) -> Option<&str> {
        Some(self.default_time.as_str()).filter(|t| !t.is_empty())
    }
}
