//! Config management use case

use crate::domain::{CoachPersona, Mood};
use crate::error::{HabitError, Result};
use crate::infrastructure::{Config, FileSystemRepository, HabitRepository};
use std::str::FromStr;

const VALID_KEYS: &str = "persona, endpoint, timeout_ms, default_mood, default_time";

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "persona" => Ok(config.persona.to_string()),
            "endpoint" => Ok(config.endpoint.unwrap_or_default()),
            "timeout_ms" => Ok(config.timeout_ms.to_string()),
            "default_mood" => Ok(config.default_mood.to_string()),
            "default_time" => Ok(config.default_time),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(HabitError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}, created",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "persona" => {
                config.persona = CoachPersona::from_str(value).map_err(HabitError::Config)?;
            }
            "endpoint" => {
                config.endpoint = Some(value.trim().to_string()).filter(|e| !e.is_empty());
            }
            "timeout_ms" => {
                config.timeout_ms = value.parse().map_err(|_| {
                    HabitError::Config(format!("Invalid timeout_ms: '{}'", value))
                })?;
            }
            "default_mood" => {
                config.default_mood = Mood::from_str(value).map_err(HabitError::Config)?;
            }
            "default_time" => {
                config.default_time = value.trim().to_string();
            }
            "created" => {
                return Err(HabitError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(HabitError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
