//! Mood and time-of-day adaptation of step lists

use crate::domain::Mood;
use regex::Regex;
use std::sync::OnceLock;

pub const TIRED_STARTER: &str = "2 minutes: Do a tiny starter to build momentum";
pub const ENERGY_NOTE: &str = "Take advantage of energy: consider extending the main step today";

/// Any duration token, including ranges like "20-30 minutes".
fn duration_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?i)\d+(?:\s?-\s?\d+)?\s?-?\s?(?:minutes|minute|mins|min)").unwrap()
    })
}

/// Short durations that an energetic mood stretches. Plain substring match.
fn short_duration_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)5 minutes|5-10 minutes").unwrap())
}

/// Line inserted after the first step when a time is chosen
pub fn schedule_line(time: &str) -> String {
    format!("Schedule at {}", time)
}

/// Adapt steps for mood, then for time of day.
///
/// The mood stage runs to completion (including its prepended line) before
/// the schedule line is inserted at index 1. Unknown moods and empty times
/// leave the respective stage a no-op.
pub fn adapt(steps: &[String], mood: Option<&str>, time: Option<&str>) -> Vec<String> {
    let mut adapted = match mood.and_then(Mood::from_tag) {
        Some(Mood::Tired) => {
            let mut out = Vec::with_capacity(steps.len() + 2);
            out.push(TIRED_STARTER.to_string());
            out.extend(
                steps
                    .iter()
                    .map(|s| duration_regex().replace_all(s, "5 minutes").into_owned()),
            );
            out
        }
        Some(Mood::Energetic) => {
            let mut out = Vec::with_capacity(steps.len() + 2);
            out.push(ENERGY_NOTE.to_string());
            out.extend(
                steps
                    .iter()
                    .map(|s| short_duration_regex().replace_all(s, "10 minutes").into_owned()),
            );
            out
        }
        Some(Mood::Neutral) | None => steps.to_vec(),
    };

    if let Some(time) = time.filter(|t| !t.is_empty()) {
        let at = adapted.len().min(1);
        adapted.insert(at, schedule_line(time));
    }

    adapted
}
