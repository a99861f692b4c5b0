//! Persistent habit list on top of a key-value store

use crate::domain::{default_habits, Habit};
use crate::error::Result;
use crate::infrastructure::KeyValueStore;
use log::{debug, warn};

/// Key the whole habit list is stored under
pub const HABITS_KEY: &str = "ai-habit-builder:habits";

/// Loads the habit list at startup and rewrites it wholesale on every change
pub struct HabitStore<S> {
    store: S,
}

impl<S: KeyValueStore> HabitStore<S> {
    pub fn new(store: S) -> Self {
        HabitStore { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load stored habits. Missing, unreadable, or malformed data yields the
    /// default habits rather than an error.
    pub fn load(&self) -> Vec<Habit> {
        self.read_stored().unwrap_or_else(default_habits)
    }

    /// Only what is actually stored: empty when nothing usable is there
    pub fn load_stored(&self) -> Vec<Habit> {
        self.read_stored().unwrap_or_default()
    }

    fn read_stored(&self) -> Option<Vec<Habit>> {
        let raw = match self.store.get(HABITS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored habits");
                return None;
            }
            Err(e) => {
                warn!("failed to read stored habits: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Vec<Habit>>(&raw) {
            Ok(habits) => Some(habits),
            Err(e) => {
                warn!("stored habits are malformed: {}", e);
                None
            }
        }
    }

    /// Replace the stored list
    pub fn save(&self, habits: &[Habit]) -> Result<()> {
        let json = serde_json::to_string(habits)?;
        self.store.set(HABITS_KEY, &json)?;
        debug!("saved {} habits", habits.len());
        Ok(())
    }

    /// Prepend a habit and persist the full list; returns the new list
    pub fn add(&self, habit: Habit) -> Result<Vec<Habit>> {
        let mut habits = self.load();
        habits.insert(0, habit);
        self.save(&habits)?;
        Ok(habits)
    }
}
