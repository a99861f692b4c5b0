//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{BreakdownArgs, Cli, Commands};
pub use output::{
    format_checkin, format_habit_list, format_micro_plan, format_steps, format_summary,
    format_time_blocks, origin_label,
};
