use super::{clamp_score, scale_to_percent};
use crate::types::answers::AnswerSet;
use crate::types::report::FactorProfile;

const REASONING_ANSWERED_BONUS: f64 = 90.0;
const REASONING_UNANSWERED_BONUS: f64 = 60.0;
const LEARNING_PSYCHOMETRIC_WEIGHT: f64 = 0.3;

/// Build the six readiness factors from the category scores and selected raw
/// answers. Unlike the category scorers, missing ordinal answers contribute 0
/// here instead of shrinking the divisor; each factor is rounded once, at its
/// mean.
pub fn factor_profile(psychometric: u8, technical: u8, answers: &AnswerSet) -> FactorProfile {
    let ordinal_or_zero = |id: &str| answers.number(id).map(scale_to_percent).unwrap_or(0.0);
    let reasoning_bonus = |id: &str| {
        // Answering at all earns the bonus, correctness does not matter.
        if answers.is_answered(id) {
            REASONING_ANSWERED_BONUS
        } else {
            REASONING_UNANSWERED_BONUS
        }
    };

    let will = clamp_score(
        (ordinal_or_zero("motivation_1")
            + ordinal_or_zero("motivation_2")
            + ordinal_or_zero("personality_3"))
            / 3.0,
    );

    let interest = clamp_score(
        (ordinal_or_zero("interest_1")
            + ordinal_or_zero("interest_2")
            + ordinal_or_zero("interest_3"))
            / 3.0,
    );

    let cognitive_readiness = clamp_score(
        (ordinal_or_zero("personality_1")
            + ordinal_or_zero("personality_2")
            + reasoning_bonus("logical_1")
            + reasoning_bonus("logical_2"))
            / 4.0,
    );

    let ability_to_learn = clamp_score(
        (ordinal_or_zero("personality_3")
            + f64::from(psychometric) * LEARNING_PSYCHOMETRIC_WEIGHT)
            / 2.0,
    );

    let real_world_alignment =
        clamp_score((f64::from(psychometric) + f64::from(technical)) / 2.0);

    FactorProfile {
        will,
        interest,
        skill: technical,
        cognitive_readiness,
        ability_to_learn,
        real_world_alignment,
    }
}
