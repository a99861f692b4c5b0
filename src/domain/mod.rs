//! Domain layer - Business logic and domain models

pub mod adapter;
pub mod breakdown;
pub mod catalog;
pub mod category;
pub mod checkin;
pub mod habit;
pub mod micro_steps;
pub mod mood;
pub mod persona;
pub mod schedule;

pub use breakdown::generate;
pub use category::Category;
pub use checkin::EnergyMode;
pub use habit::{default_habits, Habit, HabitStatus};
pub use micro_steps::{MicroPlan, MicroStep};
pub use mood::Mood;
pub use persona::CoachPersona;
pub use schedule::TimeBlock;
