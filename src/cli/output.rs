//! Output formatting utilities

use crate::application::{BreakdownOrigin, HabitSummary};
use crate::domain::{EnergyMode, Habit, MicroPlan, TimeBlock};

/// Format a breakdown as a numbered list
pub fn format_steps(steps: &[String]) -> String {
    let mut output = String::new();
    for (i, step) in steps.iter().enumerate() {
        output.push_str(&format!("{:>2}. {}\n", i + 1, step));
    }
    output
}

pub fn origin_label(origin: BreakdownOrigin) -> &'static str {
    match origin {
        BreakdownOrigin::Remote => "AI",
        BreakdownOrigin::Local => "built-in",
    }
}

/// Format the habit list, optionally with sub-tasks
pub fn format_habit_list(habits: &[Habit], details: bool) -> String {
    if habits.is_empty() {
        return "No habits tracked yet".to_string();
    }

    let mut output = String::new();
    for habit in habits {
        output.push_str(&format!(
            "{}  [{}]  {} day streak\n",
            habit.name,
            habit.status_label(),
            habit.streak.unwrap_or(0)
        ));
        if details {
            for step in &habit.subtasks {
                output.push_str(&format!("    - {}\n", step));
            }
        }
    }
    output
}

pub fn format_summary(summary: &HabitSummary) -> String {
    let mut output = format!(
        "Total Habits:       {}\n\
         Total Sub-tasks:    {}\n\
         Average Sub-tasks:  {}\n",
        summary.total_habits, summary.total_subtasks, summary.average_subtasks
    );

    output.push_str("\nRecent Habits\n");
    if summary.recent.is_empty() {
        output.push_str("No habits tracked yet\n");
    }
    for recent in &summary.recent {
        output.push_str(&format!("  {}  ({} steps)\n", recent.name, recent.steps));
    }
    output
}

pub fn format_checkin(mode: EnergyMode) -> String {
    let mut output = format!("{}\n", mode.label());
    if let Some(message) = mode.message() {
        output.push_str(message);
        output.push('\n');
        output.push_str(&format!(
            "Tip: pass --mood {} when building habits today\n",
            mode.mood()
        ));
    }
    output
}

pub fn format_time_blocks(blocks: &[TimeBlock]) -> String {
    let mut output = String::new();
    for block in blocks {
        output.push_str(&format!("{:<6} {}\n", block.time, block.title));
    }
    output
}

pub fn format_micro_plan(plan: &MicroPlan) -> String {
    let mut output = format!(
        "Progress: {}/{} steps ({}%)\n",
        plan.completed_count(),
        plan.steps.len(),
        plan.progress()
    );
    for (i, step) in plan.steps.iter().enumerate() {
        let mark = if step.completed { "x" } else { " " };
        output.push_str(&format!(
            "[{}] {}. {} ({})\n",
            mark,
            i + 1,
            step.text,
            step.duration
        ));
    }
    output
}
