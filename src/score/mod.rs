pub mod factors;
pub mod psychometric;
pub mod technical;

use crate::types::answers::AnswerSet;
use crate::types::report::{Recommendation, ScoreReport};

const CATEGORY_WEIGHT: f64 = 0.30;
const FACTOR_WEIGHT: f64 = 0.40;

/// Score a (possibly partial) answer set. Pure and infallible: missing or
/// malformed answers degrade to the per-formula fallbacks, never to an error.
pub fn assess(answers: &AnswerSet) -> ScoreReport {
    let psychometric = psychometric::psychometric_score(answers);
    let technical = technical::technical_score(answers);
    let factors = factors::factor_profile(psychometric, technical, answers);

    // The factor profile is itself partly derived from the category scores,
    // so the categories are deliberately double-counted in the blend.
    let overall = clamp_score(
        f64::from(psychometric) * CATEGORY_WEIGHT
            + f64::from(technical) * CATEGORY_WEIGHT
            + factors.mean() * FACTOR_WEIGHT,
    );

    ScoreReport {
        psychometric,
        technical,
        factors,
        overall,
        recommendation: Recommendation::for_score(overall),
    }
}

/// Convert a 1-7 ordinal answer to the 0-100 scale.
pub(crate) fn scale_to_percent(raw: f64) -> f64 {
    (raw / crate::catalog::ORDINAL_MAX) * 100.0
}

/// Ranked option lookup: enumerated options earn their listed points, any
/// other answer falls to the table's floor.
pub(crate) fn lookup(table: &[(&str, f64)], floor: f64, option: &str) -> f64 {
    table
        .iter()
        .find(|(listed, _)| *listed == option)
        .map(|(_, points)| *points)
        .unwrap_or(floor)
}

/// Rounded mean of `total` over `answered` contributions; 0 when nothing was
/// answered, so an untouched category never divides by zero.
pub(crate) fn mean_rounded(total: f64, answered: u32) -> u8 {
    if answered == 0 {
        return 0;
    }
    clamp_score(total / f64::from(answered))
}

pub(crate) fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{FactorProfile, Recommendation};

    fn top_answers() -> AnswerSet {
        let mut answers = AnswerSet::new();
        for id in [
            "interest_1",
            "interest_2",
            "interest_3",
            "personality_1",
            "personality_2",
            "personality_3",
            "motivation_1",
            "motivation_2",
        ] {
            answers.record(id, 7);
        }
        answers.record("working_style_1", "Mix of creative and technical environments");
        answers.record("working_style_2", "Brainstorm creative solutions first, then refine");
        answers.record("logical_1", "Material cushioning and shock absorption");
        answers.record("logical_2", "Optimize package dimensions to reduce material use");
        answers.record("numerical_1", "603 cm³");
        answers.record("domain_1", "Recyclable cardboard");
        answers.record("domain_2", "The cutting and folding template for the package");
        answers.record("domain_3", "Flexographic printing");
        answers.record("tools_1", 100);
        answers.record("tools_2", 100);
        answers.record("tools_3", "yes");
        answers
    }

    #[test]
    fn empty_answer_set_scores_low_but_never_fails() {
        let report = assess(&AnswerSet::new());
        assert_eq!(report.psychometric, 0);
        assert_eq!(report.technical, 0);
        assert_eq!(
            report.factors,
            FactorProfile {
                will: 0,
                interest: 0,
                skill: 0,
                cognitive_readiness: 30,
                ability_to_learn: 0,
                real_world_alignment: 0,
            }
        );
        // round(0.4 * mean(0, 0, 0, 30, 0, 0)) = round(0.4 * 5) = 2
        assert_eq!(report.overall, 2);
        assert_eq!(report.recommendation, Recommendation::NotRecommended);
    }

    #[test]
    fn top_answers_score_at_ceiling() {
        let report = assess(&top_answers());
        assert_eq!(report.psychometric, 100);
        assert_eq!(report.technical, 100);
        assert_eq!(report.factors.will, 100);
        assert_eq!(report.factors.interest, 100);
        assert_eq!(report.factors.skill, 100);
        assert_eq!(report.factors.cognitive_readiness, 95);
        assert_eq!(report.factors.ability_to_learn, 65);
        assert_eq!(report.factors.real_world_alignment, 100);
        // 0.3*100 + 0.3*100 + 0.4*(560/6) = 97.33
        assert_eq!(report.overall, 97);
        assert_eq!(report.recommendation, Recommendation::Recommended);
    }

    #[test]
    fn assessment_is_idempotent() {
        let answers = top_answers();
        assert_eq!(assess(&answers), assess(&answers));
    }

    #[test]
    fn every_field_stays_in_range() {
        let mut answers = AnswerSet::new();
        answers.record("interest_1", 200);
        answers.record("tools_1", 5000);
        answers.record("motivation_1", -3);

        let report = assess(&answers);
        assert!(report.psychometric <= 100);
        assert!(report.technical <= 100);
        assert!(report.overall <= 100);
        for value in report.factors.values() {
            assert!(value <= 100);
        }
    }

    #[test]
    fn raising_one_answer_never_lowers_the_overall() {
        let mut low = AnswerSet::new();
        low.record("tools_1", 20);
        low.record("interest_1", 3);
        let mut high = low.clone();
        high.record("tools_1", 90);

        assert!(assess(&high).overall >= assess(&low).overall);

        let mut higher = high.clone();
        higher.record("interest_1", 7);
        assert!(assess(&higher).overall >= assess(&high).overall);
    }

    #[test]
    fn helpers_guard_division_and_range() {
        assert_eq!(mean_rounded(0.0, 0), 0);
        assert_eq!(mean_rounded(250.0, 2), 100);
        assert_eq!(clamp_score(-4.0), 0);
        assert_eq!(clamp_score(240.0), 100);
        assert_eq!(lookup(&[("a", 80.0)], 40.0, "b"), 40.0);
    }
}
