//! habitual - Habit builder for the terminal
//!
//! Breaks habits into short timed steps adapted to mood and time of day,
//! keeps a persistent habit list, and can relay breakdown requests to a
//! generative text provider through a small proxy server.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::HabitError;
