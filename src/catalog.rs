use crate::types::answers::{AnswerSet, AnswerValue};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseKind {
    OrdinalScale,
    SingleChoice,
    ContinuousRange,
    Boolean,
}

impl ResponseKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResponseKind::OrdinalScale => "ordinal-scale",
            ResponseKind::SingleChoice => "single-choice",
            ResponseKind::ContinuousRange => "continuous-range",
            ResponseKind::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// One questionnaire item. The catalog is fixed data: ids and option strings
/// are referenced directly by the scoring formulas and form the external
/// contract with any hosting UI.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub kind: ResponseKind,
    pub prompt: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'static [&'static str]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeSpec>,
}

pub const ORDINAL_MIN: f64 = 1.0;
pub const ORDINAL_MAX: f64 = 7.0;

const TOOL_RANGE: RangeSpec = RangeSpec {
    min: 0.0,
    max: 100.0,
    step: 5.0,
};

pub const CATALOG: &[Question] = &[
    // Psychometric section
    Question {
        id: "interest_1",
        kind: ResponseKind::OrdinalScale,
        prompt: "I am genuinely excited about the idea of creating packaging that influences consumer behavior",
        options: None,
        range: None,
    },
    Question {
        id: "interest_2",
        kind: ResponseKind::OrdinalScale,
        prompt: "I often notice and analyze packaging design when shopping or browsing products",
        options: None,
        range: None,
    },
    Question {
        id: "interest_3",
        kind: ResponseKind::OrdinalScale,
        prompt: "I enjoy combining artistic creativity with practical problem-solving",
        options: None,
        range: None,
    },
    Question {
        id: "personality_1",
        kind: ResponseKind::OrdinalScale,
        prompt: "I pay close attention to small details and notice when things are 'off'",
        options: None,
        range: None,
    },
    Question {
        id: "personality_2",
        kind: ResponseKind::OrdinalScale,
        prompt: "I enjoy working on projects that require both creative and analytical thinking",
        options: None,
        range: None,
    },
    Question {
        id: "personality_3",
        kind: ResponseKind::OrdinalScale,
        prompt: "I am comfortable with iterative design processes and receiving feedback",
        options: None,
        range: None,
    },
    Question {
        id: "motivation_1",
        kind: ResponseKind::OrdinalScale,
        prompt: "I am motivated by seeing my designs become real products that people use",
        options: None,
        range: None,
    },
    Question {
        id: "motivation_2",
        kind: ResponseKind::OrdinalScale,
        prompt: "I enjoy learning about consumer psychology and market trends",
        options: None,
        range: None,
    },
    Question {
        id: "working_style_1",
        kind: ResponseKind::SingleChoice,
        prompt: "Which work environment appeals to you most?",
        options: Some(&[
            "Creative studio with collaborative brainstorming",
            "Technical workspace with prototyping equipment",
            "Mix of creative and technical environments",
            "Client-facing role with presentations",
        ]),
        range: None,
    },
    Question {
        id: "working_style_2",
        kind: ResponseKind::SingleChoice,
        prompt: "How do you prefer to approach complex problems?",
        options: Some(&[
            "Break it down systematically step by step",
            "Brainstorm creative solutions first, then refine",
            "Research similar solutions and adapt them",
            "Collaborate with others to find the best approach",
        ]),
        range: None,
    },
    // Technical section
    Question {
        id: "logical_1",
        kind: ResponseKind::SingleChoice,
        prompt: "If a package needs to protect a fragile item during shipping, what would be your PRIMARY consideration?",
        options: Some(&[
            "Material cushioning and shock absorption",
            "Structural integrity and box strength",
            "Cost-effectiveness of materials",
            "Visual appeal and branding",
        ]),
        range: None,
    },
    Question {
        id: "logical_2",
        kind: ResponseKind::SingleChoice,
        prompt: "A client wants to reduce packaging costs by 20%. Which approach would you recommend first?",
        options: Some(&[
            "Switch to cheaper materials",
            "Optimize package dimensions to reduce material use",
            "Simplify the graphic design",
            "Remove protective features",
        ]),
        range: None,
    },
    Question {
        id: "numerical_1",
        kind: ResponseKind::SingleChoice,
        prompt: "If a cylindrical container has a diameter of 8cm and height of 12cm, what is its approximate volume?",
        options: Some(&["96 cm³", "603 cm³", "192 cm³", "302 cm³"]),
        range: None,
    },
    Question {
        id: "domain_1",
        kind: ResponseKind::SingleChoice,
        prompt: "Which material is most commonly used for sustainable food packaging?",
        options: Some(&[
            "PVC plastic",
            "Aluminum foil",
            "Recyclable cardboard",
            "Polystyrene foam",
        ]),
        range: None,
    },
    Question {
        id: "domain_2",
        kind: ResponseKind::SingleChoice,
        prompt: "What does 'dieline' refer to in packaging design?",
        options: Some(&[
            "The cutting and folding template for the package",
            "The color guidelines for printing",
            "The shipping deadline for the project",
            "The product placement line on shelves",
        ]),
        range: None,
    },
    Question {
        id: "domain_3",
        kind: ResponseKind::SingleChoice,
        prompt: "Which printing method is most cost-effective for high-volume packaging production?",
        options: Some(&[
            "Digital printing",
            "Screen printing",
            "Offset lithography",
            "Flexographic printing",
        ]),
        range: None,
    },
    Question {
        id: "tools_1",
        kind: ResponseKind::ContinuousRange,
        prompt: "Rate your familiarity with Adobe Illustrator (0 = Never used, 100 = Expert level)",
        options: None,
        range: Some(TOOL_RANGE),
    },
    Question {
        id: "tools_2",
        kind: ResponseKind::ContinuousRange,
        prompt: "Rate your familiarity with CAD software like SolidWorks or Fusion 360 (0 = Never used, 100 = Expert level)",
        options: None,
        range: Some(TOOL_RANGE),
    },
    Question {
        id: "tools_3",
        kind: ResponseKind::Boolean,
        prompt: "Have you ever created a physical prototype or mock-up of a design?",
        options: None,
        range: None,
    },
];

pub fn find_question(id: &str) -> Option<&'static Question> {
    CATALOG.iter().find(|question| question.id == id)
}

/// Advisory validation issue. Blocking means the answer's shape can never be
/// scored; everything else still degrades gracefully inside the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub question: String,
    pub detail: String,
    pub blocking: bool,
}

/// Check an answer set against the catalog. The scoring engine never calls
/// this; malformed answers fall back to per-formula defaults. Hosting code
/// can surface the result as warnings.
pub fn violations(answers: &AnswerSet) -> Vec<Violation> {
    let mut found = Vec::new();
    for (id, value) in answers.iter() {
        let Some(question) = find_question(id) else {
            found.push(Violation {
                question: id.clone(),
                detail: "unknown question id".to_string(),
                blocking: false,
            });
            continue;
        };

        let issue = match (question.kind, value) {
            (ResponseKind::OrdinalScale, AnswerValue::Number(raw)) => {
                if (ORDINAL_MIN..=ORDINAL_MAX).contains(raw) && raw.fract() == 0.0 {
                    None
                } else {
                    Some((format!("value {raw} outside the 1-7 scale"), false))
                }
            }
            (ResponseKind::ContinuousRange, AnswerValue::Number(raw)) => match question.range {
                Some(range) if !(range.min..=range.max).contains(raw) => Some((
                    format!("value {raw} outside [{}, {}]", range.min, range.max),
                    false,
                )),
                _ => None,
            },
            (ResponseKind::SingleChoice, AnswerValue::Choice(option)) => {
                let listed = question
                    .options
                    .map(|options| options.contains(&option.as_str()))
                    .unwrap_or(false);
                if listed {
                    None
                } else {
                    Some((format!("'{option}' is not a listed option"), false))
                }
            }
            (ResponseKind::Boolean, AnswerValue::Choice(option)) => {
                if option == "yes" || option == "no" {
                    None
                } else {
                    Some((format!("'{option}' is not yes/no"), false))
                }
            }
            _ => Some((
                format!(
                    "answer shape does not match a {} question",
                    question.kind.label()
                ),
                true,
            )),
        };

        if let Some((detail, blocking)) = issue {
            found.push(Violation {
                question: id.clone(),
                detail,
                blocking,
            });
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        for (index, question) in CATALOG.iter().enumerate() {
            assert!(
                !CATALOG[index + 1..].iter().any(|other| other.id == question.id),
                "duplicate id {}",
                question.id
            );
        }
        assert_eq!(CATALOG.len(), 19);
    }

    #[test]
    fn single_choice_questions_carry_options() {
        for question in CATALOG {
            match question.kind {
                ResponseKind::SingleChoice => assert!(question.options.is_some()),
                ResponseKind::ContinuousRange => assert!(question.range.is_some()),
                _ => {}
            }
        }
    }

    #[test]
    fn clean_answers_produce_no_violations() {
        let mut answers = AnswerSet::new();
        answers.record("interest_1", 7);
        answers.record("tools_1", 0);
        answers.record("tools_3", "no");
        answers.record("logical_1", "Visual appeal and branding");
        assert!(violations(&answers).is_empty());
    }

    #[test]
    fn out_of_range_and_unknown_answers_warn() {
        let mut answers = AnswerSet::new();
        answers.record("interest_1", 9);
        answers.record("tools_1", 120);
        answers.record("working_style_1", "Remote-only deep work");
        answers.record("tools_3", "maybe");
        answers.record("mystery_1", 4);

        let found = violations(&answers);
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|violation| !violation.blocking));
        assert!(found
            .iter()
            .any(|violation| violation.question == "mystery_1"
                && violation.detail.contains("unknown")));
    }

    #[test]
    fn shape_mismatch_is_blocking() {
        let mut answers = AnswerSet::new();
        answers.record("tools_1", "expert");
        answers.record("interest_1", "strongly agree");

        let found = violations(&answers);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|violation| violation.blocking));
    }
}
