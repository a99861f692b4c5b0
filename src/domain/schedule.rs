//! Smart schedule preview built around wake and bed times

use crate::error::{HabitError, Result};

pub const DEFAULT_WAKE_TIME: &str = "07:00";
pub const DEFAULT_BED_TIME: &str = "23:00";

/// One entry of the daily timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBlock {
    pub title: &'static str,
    pub time: String,
}

/// Hour offsets from wake-up for the fixed blocks between morning and evening
const OFFSET_BLOCKS: &[(&str, u32)] = &[
    ("Deep Work Session", 1),
    ("Quick Break", 3),
    ("Afternoon Tasks", 4),
    ("Exercise Time", 7),
];

fn wake_hour(wake_time: &str) -> Result<u32> {
    let hour = wake_time.split(':').next().unwrap_or_default().trim();
    hour.parse::<u32>()
        .map_err(|_| HabitError::InvalidTime(wake_time.to_string()))
}

/// Build the timeline. Offset hours are neither wrapped nor zero-padded.
pub fn time_blocks(wake_time: &str, bed_time: &str) -> Result<Vec<TimeBlock>> {
    let wake = wake_hour(wake_time)?;

    let mut blocks = Vec::with_capacity(OFFSET_BLOCKS.len() + 2);
    blocks.push(TimeBlock {
        title: "Morning Routine",
        time: wake_time.to_string(),
    });
    blocks.extend(OFFSET_BLOCKS.iter().map(|&(title, offset)| TimeBlock {
        title,
        time: format!("{}:00", wake + offset),
    }));
    blocks.push(TimeBlock {
        title: "Evening Wind Down",
        time: bed_time.to_string(),
    });

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let blocks = time_blocks(DEFAULT_WAKE_TIME, DEFAULT_BED_TIME).unwrap();
        let times: Vec<&str> = blocks.iter().map(|b| b.time.as_str()).collect();
        assert_eq!(times, vec!["07:00", "8:00", "10:00", "11:00", "14:00", "23:00"]);
        assert_eq!(blocks[0].title, "Morning Routine");
        assert_eq!(blocks[5].title, "Evening Wind Down");
    }

    #[test]
    fn test_late_wake_is_not_wrapped() {
        let blocks = time_blocks("20:15", "02:00").unwrap();
        assert_eq!(blocks[4].time, "27:00");
    }

    #[test]
    fn test_invalid_wake_time() {
        let err = time_blocks("early", "23:00").unwrap_err();
        assert!(matches!(err, HabitError::InvalidTime(_)));
    }
}
