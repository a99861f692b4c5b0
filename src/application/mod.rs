//! Application layer - Use cases and orchestration

pub mod analytics;
pub mod build_habit;
pub mod init;
pub mod manage_config;
pub mod resolve_breakdown;

pub use analytics::{analytics, summarize, HabitSummary};
pub use build_habit::BuildHabitService;
pub use resolve_breakdown::{BreakdownOrigin, BreakdownResolver, ResolvedBreakdown};
