use super::{lookup, mean_rounded, scale_to_percent};
use crate::types::answers::AnswerSet;

const INTEREST_ITEMS: [&str; 3] = ["interest_1", "interest_2", "interest_3"];
const PERSONALITY_ITEMS: [&str; 3] = ["personality_1", "personality_2", "personality_3"];
const MOTIVATION_ITEMS: [&str; 2] = ["motivation_1", "motivation_2"];

// Hand-assigned points per working-style option. The values are fixed data,
// not derived from option order; unlisted answers fall to each table's floor.
const WORK_ENV_POINTS: &[(&str, f64)] = &[
    ("Mix of creative and technical environments", 100.0),
    ("Creative studio with collaborative brainstorming", 80.0),
    ("Technical workspace with prototyping equipment", 75.0),
];
const WORK_ENV_FLOOR: f64 = 60.0;

const PROBLEM_APPROACH_POINTS: &[(&str, f64)] = &[
    ("Brainstorm creative solutions first, then refine", 100.0),
    ("Break it down systematically step by step", 90.0),
    ("Collaborate with others to find the best approach", 85.0),
];
const PROBLEM_APPROACH_FLOOR: f64 = 70.0;

/// Mean of the answered psychometric contributions, 0-100. Unanswered items
/// are skipped and the mean renormalizes over what remains.
pub fn psychometric_score(answers: &AnswerSet) -> u8 {
    let mut total = 0.0;
    let mut answered = 0u32;

    let ordinal_items = INTEREST_ITEMS
        .iter()
        .chain(PERSONALITY_ITEMS.iter())
        .chain(MOTIVATION_ITEMS.iter());
    for id in ordinal_items {
        if let Some(raw) = answers.number(id) {
            total += scale_to_percent(raw);
            answered += 1;
        }
    }

    if let Some(option) = answers.choice("working_style_1") {
        total += lookup(WORK_ENV_POINTS, WORK_ENV_FLOOR, option);
        answered += 1;
    }
    if let Some(option) = answers.choice("working_style_2") {
        total += lookup(PROBLEM_APPROACH_POINTS, PROBLEM_APPROACH_FLOOR, option);
        answered += 1;
    }

    mean_rounded(total, answered)
}
