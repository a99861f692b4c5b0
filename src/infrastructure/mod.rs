//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod habit_store;
pub mod proxy;
pub mod remote;
pub mod repository;

pub use config::Config;
pub use habit_store::{HabitStore, HABITS_KEY};
pub use remote::{BreakdownRequest, BreakdownSource, RemoteBreakdownClient};
pub use repository::{FileSystemRepository, HabitRepository, KeyValueStore, MemoryStore};
