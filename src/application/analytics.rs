//! Habit analytics use case

use crate::domain::Habit;
use crate::infrastructure::{HabitStore, KeyValueStore};

const RECENT_LIMIT: usize = 6;

/// Name and step count of a recently added habit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentHabit {
    pub name: String,
    pub steps: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HabitSummary {
    pub total_habits: usize,
    pub total_subtasks: usize,
    /// Rounded to one decimal place
    pub average_subtasks: f64,
    pub recent: Vec<RecentHabit>,
}

/// Summarize a habit list. Newest habits come first in the list.
pub fn summarize(habits: &[Habit]) -> HabitSummary {
    let total_habits = habits.len();
    let total_subtasks: usize = habits.iter().map(|h| h.subtasks.len()).sum();
    let average_subtasks = if total_habits == 0 {
        0.0
    } else {
        (total_subtasks as f64 / total_habits as f64 * 10.0).round() / 10.0
    };

    let recent = habits
        .iter()
        .take(RECENT_LIMIT)
        .map(|h| RecentHabit {
            name: h.name.clone(),
            steps: h.subtasks.len(),
        })
        .collect();

    HabitSummary {
        total_habits,
        total_subtasks,
        average_subtasks,
        recent,
    }
}

/// Summarize the stored habits. The seeded defaults are not counted until
/// something has been saved.
pub fn analytics<S: KeyValueStore>(store: &HabitStore<S>) -> HabitSummary {
    summarize(&store.load_stored())
}
