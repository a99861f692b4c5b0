//! Build habit use case

use crate::application::resolve_breakdown::{BreakdownResolver, ResolvedBreakdown};
use crate::domain::Habit;
use crate::error::{HabitError, Result};
use crate::infrastructure::{HabitStore, KeyValueStore};
use log::info;

/// Service for breaking a habit down and adding it to the list
pub struct BuildHabitService<S> {
    store: HabitStore<S>,
    resolver: BreakdownResolver,
}

impl<S: KeyValueStore> BuildHabitService<S> {
    pub fn new(store: HabitStore<S>, resolver: BreakdownResolver) -> Self {
        BuildHabitService { store, resolver }
    }

    fn validated_name(name: &str) -> Result<&str> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitError::EmptyHabitName);
        }
        Ok(name)
    }

    /// Resolve the breakdown without saving anything
    pub fn preview(
        &self,
        name: &str,
        mood: Option<&str>,
        time: Option<&str>,
    ) -> Result<ResolvedBreakdown> {
        let name = Self::validated_name(name)?;
        self.resolver.resolve(name, mood, time)
    }

    /// Resolve the breakdown and prepend the new habit to the stored list
    pub fn execute(&self, name: &str, mood: Option<&str>, time: Option<&str>) -> Result<Habit> {
        let name = Self::validated_name(name)?;
        let resolved = self.resolver.resolve(name, mood, time)?;

        let habit = Habit::building(name.to_string(), resolved.steps);
        self.store.add(habit.clone())?;
        info!("built habit '{}' ({:?} breakdown)", name, resolved.origin);

        Ok(habit)
    }

    pub fn store(&self) -> &HabitStore<S> {
        &self.store
    }
}
