//! Mood tags that steer step adaptation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the user feels when building a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Energetic,
    #[default]
    Neutral,
    Tired,
}

impl Mood {
    /// Parse a free mood tag, returning None for anything outside the set.
    /// Unknown tags are not errors; callers treat them as "no adaptation".
    pub fn from_tag(tag: &str) -> Option<Mood> {
        Mood::from_str(tag).ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Energetic => "energetic",
            Mood::Neutral => "neutral",
            Mood::Tired => "tired",
        }
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "energetic" => Ok(Mood::Energetic),
            "neutral" => Ok(Mood::Neutral),
            "tired" => Ok(Mood::Tired),
            _ => Err(format!(
                "Invalid mood: '{}'. Valid moods are: energetic, neutral, tired",
                s
            )),
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
