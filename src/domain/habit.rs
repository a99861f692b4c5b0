//! Habit records as persisted in the habit store

use serde::{Deserialize, Serialize};

/// Lifecycle badge shown next to a habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitStatus {
    Active,
    Building,
}

impl HabitStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HabitStatus::Active => "Active",
            HabitStatus::Building => "Building",
        }
    }
}

/// A habit and its breakdown into steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub name: String,
    pub subtasks: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<HabitStatus>,
}

impl Habit {
    /// A freshly built habit: zero streak, still building
    pub fn building(name: String, subtasks: Vec<String>) -> Self {
        Habit {
            name,
            subtasks,
            streak: Some(0),
            status: Some(HabitStatus::Building),
        }
    }

    fn active(name: &str, subtasks: &[&str], streak: u32) -> Self {
        Habit {
            name: name.to_string(),
            subtasks: subtasks.iter().map(|s| s.to_string()).collect(),
            streak: Some(streak),
            status: Some(HabitStatus::Active),
        }
    }

    /// Badge label; a missing status reads as building
    pub fn status_label(&self) -> &'static str {
        match self.status {
            Some(HabitStatus::Active) => HabitStatus::Active.label(),
            _ => HabitStatus::Building.label(),
        }
    }
}

/// Habits shown before anything has been stored
pub fn default_habits() -> Vec<Habit> {
    vec![
        Habit::active(
            "Morning Meditation",
            &["Find a quiet spot", "Set a 10-min timer", "Breathe and focus"],
            12,
        ),
        Habit::active(
            "Exercise",
            &[
                "Choose a workout plan",
                "Schedule 30 minutes",
                "Prepare workout clothes",
            ],
            7,
        ),
    ]
}
