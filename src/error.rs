//! Error types for habitual

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for habitual application
#[derive(Debug, Error)]
pub enum HabitError {
    #[error("Not a habitual directory: {0}")]
    NotHabitDirectory(PathBuf),

    #[error("Habit name cannot be empty")]
    EmptyHabitName,

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("A breakdown for '{0}' is already in progress")]
    Busy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote breakdown failed: {0}")]
    Remote(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

impl HabitError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HabitError::NotHabitDirectory(_) => 2,
            HabitError::EmptyHabitName => 3,
            HabitError::InvalidTime(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HabitError::NotHabitDirectory(path) => {
                format!(
                    "Not a habitual directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'habitual init' in this directory to start tracking habits\n\
                    • Navigate to an existing habitual directory\n\
                    • Set HABITUAL_ROOT environment variable to your habits path",
                    path.display()
                )
            }
            HabitError::EmptyHabitName => "Habit name cannot be empty\n\n\
                Example:\n\
                habitual build \"Read before bed\" --mood tired --time 21:30"
                .to_string(),
            HabitError::InvalidTime(value) => {
                format!(
                    "Invalid time: '{}'\n\n\
                    Expected format: HH:MM (e.g., 07:00)\n\
                    Example: habitual schedule --wake 06:30 --bed 22:30",
                    value
                )
            }
            HabitError::Config(msg) => {
                if msg.contains("Invalid persona") {
                    format!(
                        "{}\n\n\
                        Valid personas: supportive, strict, cheerful, calm, sarcastic\n\
                        Example: habitual config persona calm",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using HabitError
pub type Result<T> = std::result::Result<T, HabitError>;
