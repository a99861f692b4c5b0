//! Deterministic local breakdown generator

use crate::domain::adapter::adapt;
use crate::domain::catalog::steps_for;
use crate::domain::Category;

/// Generate the ordered steps for a habit.
///
/// Pure and total: the generic category guarantees a non-empty result.
pub fn generate(habit_name: &str, mood: Option<&str>, time: Option<&str>) -> Vec<String> {
    let category = Category::classify(habit_name);
    adapt(&steps_for(category), mood, time)
}
