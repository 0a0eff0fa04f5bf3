use super::{lookup, mean_rounded};
use crate::types::answers::AnswerSet;

struct ChoiceItem {
    id: &'static str,
    ranked: &'static [(&'static str, f64)],
    floor: f64,
}

// Correct/partial-credit mappings are fixed data carried verbatim: the best
// answer earns 100, enumerated alternatives their listed points, anything
// else the per-item floor.
const CHOICE_ITEMS: [ChoiceItem; 6] = [
    ChoiceItem {
        id: "logical_1",
        ranked: &[
            ("Material cushioning and shock absorption", 100.0),
            ("Structural integrity and box strength", 85.0),
        ],
        floor: 50.0,
    },
    ChoiceItem {
        id: "logical_2",
        ranked: &[
            ("Optimize package dimensions to reduce material use", 100.0),
            ("Switch to cheaper materials", 70.0),
        ],
        floor: 40.0,
    },
    ChoiceItem {
        id: "numerical_1",
        ranked: &[("603 cm³", 100.0)],
        floor: 30.0,
    },
    ChoiceItem {
        id: "domain_1",
        ranked: &[("Recyclable cardboard", 100.0)],
        floor: 40.0,
    },
    ChoiceItem {
        id: "domain_2",
        ranked: &[("The cutting and folding template for the package", 100.0)],
        floor: 30.0,
    },
    ChoiceItem {
        id: "domain_3",
        ranked: &[
            ("Flexographic printing", 100.0),
            ("Offset lithography", 80.0),
        ],
        floor: 50.0,
    },
];

const TOOL_ITEMS: [&str; 2] = ["tools_1", "tools_2"];
const PROTOTYPE_ITEM: &str = "tools_3";
const PROTOTYPE_FLOOR: f64 = 30.0;

/// Mean of the answered technical contributions, 0-100. Only answered items
/// count toward the divisor; a recorded 0 on a tool slider still counts.
pub fn technical_score(answers: &AnswerSet) -> u8 {
    let mut total = 0.0;
    let mut answered = 0u32;

    for item in &CHOICE_ITEMS {
        if let Some(option) = answers.choice(item.id) {
            total += lookup(item.ranked, item.floor, option);
            answered += 1;
        }
    }

    for id in TOOL_ITEMS {
        if let Some(raw) = answers.number(id) {
            total += raw.clamp(0.0, 100.0);
            answered += 1;
        }
    }

    if let Some(option) = answers.choice(PROTOTYPE_ITEM) {
        total += if option == "yes" { 100.0 } else { PROTOTYPE_FLOOR };
        answered += 1;
    }

    mean_rounded(total, answered)
}
