//! Built-in step templates for each habit category

use crate::domain::Category;

const CLEANING_STEPS: &[&str] = &[
    "5 minutes: Pick up clothes and put them away",
    "10 minutes: Arrange desk and shelves",
    "5 minutes: Throw out trash and recyclables",
    "5 minutes: Quick sweep / wipe surfaces",
    "5 minutes: Final check and put things back in place",
];

const EATING_STEPS: &[&str] = &[
    "10 minutes: Plan a weekly grocery list",
    "30 minutes: Buy groceries (or order ahead)",
    "30 minutes: Cook a simple meal",
    "15 minutes: Eat mindfully",
    "5 minutes: Log servings of fruits & veggies",
];

const EXERCISE_STEPS: &[&str] = &[
    "5 minutes: Warm up (light movement)",
    "20-30 minutes: Main workout (strength/cardio)",
    "5-10 minutes: Cool down and stretch",
    "5 minutes: Log workout and hydrate",
];

const MEDITATION_STEPS: &[&str] = &[
    "1 minute: Get comfortable and settle in",
    "5-10 minutes: Guided or silent meditation",
    "2 minutes: Gentle breathing to finish",
    "2 minutes: Note how you feel",
];

const READING_STEPS: &[&str] = &[
    "5 minutes: Pick reading material and goal (pages/minutes)",
    "25 minutes: Focused reading session",
    "5 minutes: Summarize or note key takeaways",
];

const JOURNALING_STEPS: &[&str] = &[
    "2 minutes: Choose a short prompt",
    "10 minutes: Write freely",
    "3 minutes: Read and reflect",
];

const GENERIC_STEPS: &[&str] = &[
    "5 minutes: Define a specific, measurable goal",
    "5 minutes: Pick a daily time or trigger",
    "10 minutes: Prepare any needed resources",
    "5 minutes: Do the first small action",
    "5 minutes: Review and plan the next step",
];

/// Get the literal step template for a category
pub fn template_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Cleaning => CLEANING_STEPS,
        Category::Eating => EATING_STEPS,
        Category::Exercise => EXERCISE_STEPS,
        Category::Meditation => MEDITATION_STEPS,
        Category::Reading => READING_STEPS,
        Category::Journaling => JOURNALING_STEPS,
        Category::Generic => GENERIC_STEPS,
    }
}

/// Owned copy of a category's template, ready for adaptation
pub fn steps_for(category: Category) -> Vec<String> {
    template_for(category)
        .iter()
        .map(|step| step.to_string())
        .collect()
}
