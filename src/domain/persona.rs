//! Coach personas and their daily messages

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CoachPersona {
    #[default]
    Supportive,
    Strict,
    Cheerful,
    Calm,
    Sarcastic,
}

impl CoachPersona {
    pub fn message(&self) -> &'static str {
        match self {
            CoachPersona::Supportive => {
                "You're doing amazing! Remember, every small step counts. I believe in you!"
            }
            CoachPersona::Strict => {
                "No excuses. Get it done. Your future self will thank you for the discipline you show today."
            }
            CoachPersona::Cheerful => {
                "Hey superstar! Let's make today absolutely wonderful! You've got this!"
            }
            CoachPersona::Calm => {
                "Take a deep breath. Focus on one thing at a time. You're exactly where you need to be."
            }
            CoachPersona::Sarcastic => {
                "Oh look, another day to be productive. How thrilling. (But seriously, you got this!)"
            }
        }
    }

    /// Message for a persona by name; unknown names get the supportive coach
    pub fn message_for(name: &str) -> &'static str {
        CoachPersona::from_str(name)
            .unwrap_or_default()
            .message()
    }
}

impl FromStr for CoachPersona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "supportive" => Ok(CoachPersona::Supportive),
            "strict" => Ok(CoachPersona::Strict),
            "cheerful" => Ok(CoachPersona::Cheerful),
            "calm" => Ok(CoachPersona::Calm),
            "sarcastic" => Ok(CoachPersona::Sarcastic),
            _ => Err(format!("Invalid persona: '{}'", s)),
        }
    }
}

impl fmt::Display for CoachPersona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = format!("{:?}", self).to_lowercase();
        write!(f, "{}", name)
    }
}
