//! Daily mood check-in

use crate::domain::Mood;

const LOW_ENERGY_WORDS: &[&str] = &[
    "stressed",
    "tired",
    "exhausted",
    "overwhelmed",
    "anxious",
    "sad",
];
const HIGH_ENERGY_WORDS: &[&str] = &[
    "great",
    "awesome",
    "energized",
    "motivated",
    "excited",
    "happy",
];

/// Energy level read from a free-text check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyMode {
    Low,
    Neutral,
    High,
}

impl EnergyMode {
    /// Analyze how the user says they feel. Low-energy words take precedence.
    pub fn analyze(text: &str) -> EnergyMode {
        let lower = text.to_lowercase();

        if LOW_ENERGY_WORDS.iter().any(|w| lower.contains(w)) {
            EnergyMode::Low
        } else if HIGH_ENERGY_WORDS.iter().any(|w| lower.contains(w)) {
            EnergyMode::High
        } else {
            EnergyMode::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnergyMode::Low => "Low Energy Mode",
            EnergyMode::Neutral => "Neutral",
            EnergyMode::High => "High Performance Mode",
        }
    }

    /// Encouragement shown for a non-neutral reading
    pub fn message(&self) -> Option<&'static str> {
        match self {
            EnergyMode::Low => Some(
                "I've adjusted your tasks to be lighter and more manageable. Focus on small wins today!",
            ),
            EnergyMode::High => Some(
                "You're on fire today! I've prepared some challenging goals to match your energy!",
            ),
            EnergyMode::Neutral => None,
        }
    }

    /// Mood tag to use when building habits after this check-in
    pub fn mood(&self) -> Mood {
        match self {
            EnergyMode::Low => Mood::Tired,
            EnergyMode::Neutral => Mood::Neutral,
            EnergyMode::High => Mood::Energetic,
        }
    }
}
