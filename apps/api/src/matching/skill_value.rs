use serde::{Deserialize, Serialize};

use crate::models::SkillLevel;

/// Process-wide scoring constants. Built once at startup and shared read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub beginner: f64,
    pub intermediate: f64,
    pub advanced: f64,
    pub expert: f64,
    /// Multiplier on `ln(1 + years)`.
    pub experience_factor: f64,
    /// Assumed ceiling of a skill value; values are divided by it and capped at 1.0.
    pub normalization_ceiling: f64,
    /// Score multiplier when no required skill is met. Rises linearly to 1.0.
    pub required_penalty_floor: f64,
    /// Importance at or above which an under-leveled match is an improvement area.
    pub improvement_importance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            beginner: 0.6,
            intermediate: 1.0,
            advanced: 1.4,
            expert: 1.8,
            experience_factor: 0.15,
            normalization_ceiling: 2.5,
            required_penalty_floor: 0.5,
            improvement_importance: 0.8,
        }
    }
}

impl ScoringWeights {
    /// Base weight for a level. Unrecognized levels score as intermediate.
    pub fn level_weight(&self, level: &SkillLevel) -> f64 {
        match level {
            SkillLevel::Beginner => self.beginner,
            SkillLevel::Intermediate | SkillLevel::Unrecognized(_) => self.intermediate,
            SkillLevel::Advanced => self.advanced,
            SkillLevel::Expert => self.expert,
        }
    }
}

/// Competency value of one skill: level weight plus a logarithmic experience bonus.
///
/// Negative or non-finite experience is treated as zero years.
pub fn skill_value(level: &SkillLevel, years_experience: f64, weights: &ScoringWeights) -> f64 {
    let years = if years_experience.is_finite() {
        years_experience.max(0.0)
    } else {
        0.0
    };
    weights.level_weight(level) + weights.experience_factor * years.ln_1p()
}
