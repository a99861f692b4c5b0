//! Habit categories and keyword classification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a habit falls into, used to pick its step template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cleaning,
    Eating,
    Exercise,
    Meditation,
    Reading,
    Journaling,
    Generic,
}

/// Keyword groups in priority order. The first group with any keyword
/// contained in the lower-cased habit name wins.
const CATEGORY_RULES: &[(&[&str], Category)] = &[
    (&["clean", "room", "tidy", "organize"], Category::Cleaning),
    (&["eat", "food", "healthy"], Category::Eating),
    (&["exercise", "workout", "run", "gym"], Category::Exercise),
    (&["meditat", "mindful"], Category::Meditation),
    (&["read", "book", "reading"], Category::Reading),
    (&["journal", "write"], Category::Journaling),
];

impl Category {
    /// Classify a free-text habit name
    pub fn classify(habit_name: &str) -> Category {
        let lower = habit_name.to_lowercase();

        CATEGORY_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(_, category)| *category)
            .unwrap_or(Category::Generic)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Cleaning => "cleaning",
            Category::Eating => "eating",
            Category::Exercise => "exercise",
            Category::Meditation => "meditation",
            Category::Reading => "reading",
            Category::Journaling => "journaling",
            Category::Generic => "generic",
        };
        write!(f, "{}", name)
    }
}
