//! Break a one-off task into micro-steps with progress tracking

use crate::error::{HabitError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicroStep {
    pub text: String,
    pub duration: &'static str,
    pub completed: bool,
}

impl MicroStep {
    fn new(text: impl Into<String>, duration: &'static str) -> Self {
        MicroStep {
            text: text.into(),
            duration,
            completed: false,
        }
    }
}

/// An ordered list of micro-steps for a single task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicroPlan {
    pub task: String,
    pub steps: Vec<MicroStep>,
}

impl MicroPlan {
    /// Split a task into the standard six micro-steps
    pub fn for_task(task: &str) -> Result<Self> {
        let task = task.trim();
        if task.is_empty() {
            return Err(HabitError::EmptyHabitName);
        }

        let steps = vec![
            MicroStep::new(format!("Set up workspace for: {}", task), "2 mins"),
            MicroStep::new("Identify the most important element", "3 mins"),
            MicroStep::new("Start with the easiest part first", "5 mins"),
            MicroStep::new("Take a quick break and assess progress", "2 mins"),
            MicroStep::new("Complete the remaining tasks one by one", "10 mins"),
            MicroStep::new("Final review and cleanup", "3 mins"),
        ];

        Ok(MicroPlan {
            task: task.to_string(),
            steps,
        })
    }

    /// Flip completion of the step at `index` (0-based). Out of range is ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(step) = self.steps.get_mut(index) {
            step.completed = !step.completed;
        }
    }

    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.completed).count()
    }

    /// Completion percentage, rounded
    pub fn progress(&self) -> u32 {
        if self.steps.is_empty() {
            return 0;
        }
        let ratio = self.completed_count() as f64 / self.steps.len() as f64;
        (ratio * 100.0).round() as u32
    }
}
