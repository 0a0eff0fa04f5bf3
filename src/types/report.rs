use serde::Serialize;

/// The six synthesized readiness indicators, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactorProfile {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive_readiness: u8,
    pub ability_to_learn: u8,
    pub real_world_alignment: u8,
}

impl FactorProfile {
    pub fn values(&self) -> [u8; 6] {
        [
            self.will,
            self.interest,
            self.skill,
            self.cognitive_readiness,
            self.ability_to_learn,
            self.real_world_alignment,
        ]
    }

    /// Unrounded mean of the six factors, used by the composite weighting.
    pub fn mean(&self) -> f64 {
        let total: u32 = self.values().iter().map(|value| u32::from(*value)).sum();
        f64::from(total) / 6.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Recommended,
    ModerateFit,
    NotRecommended,
}

impl Recommendation {
    pub const RECOMMENDED_MIN: u8 = 75;
    pub const MODERATE_MIN: u8 = 50;

    /// Threshold classifier on the already-rounded overall score.
    pub fn for_score(overall: u8) -> Self {
        if overall >= Self::RECOMMENDED_MIN {
            Recommendation::Recommended
        } else if overall >= Self::MODERATE_MIN {
            Recommendation::ModerateFit
        } else {
            Recommendation::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Recommended => "recommended",
            Recommendation::ModerateFit => "moderate fit",
            Recommendation::NotRecommended => "not recommended",
        }
    }
}

/// The complete assessment outcome. Every field is an integer in [0, 100];
/// the report is immutable once produced and carries no further lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub psychometric: u8,
    pub technical: u8,
    pub factors: FactorProfile,
    pub overall: u8,
    pub recommendation: Recommendation,
}
