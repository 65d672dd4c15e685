//! Match Scorer — weighted overlap between a job's requirements and a candidate's skills.
//!
//! Algorithm:
//! 1. No requirements → 0.0
//! 2. Key requirements by lowercase name; Σ importance = total. Total of 0 → 0.0
//! 3. Key candidate skills by lowercase name → `skill_value`
//! 4. For each requirement the candidate holds:
//!    matched += importance × min(value / ceiling, 1.0)
//! 5. base = matched / total
//! 6. Missing required skills scale base by floor + (1 - floor) × met / required
//! 7. Round to 3 decimals
//!
//! Malformed entries (blank names, non-finite importance) are skipped, never raised.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::matching::skill_value::{skill_value, ScoringWeights};
use crate::models::{SkillRecord, SkillRequirement};

/// Requirement as seen by the scorer once keyed.
#[derive(Debug, Clone, Copy)]
struct KeyedRequirement {
    importance: f64,
    is_required: bool,
}

/// Keys requirements by lowercase name. Later duplicates overwrite earlier ones, but
/// every valid entry still counts toward the returned total importance.
///
/// Ordered so the weighted sum accumulates identically on every call.
fn index_requirements(
    requirements: &[SkillRequirement],
) -> (BTreeMap<String, KeyedRequirement>, f64) {
    let mut index = BTreeMap::new();
    let mut total_importance = 0.0_f64;

    for req in requirements {
        let Some(key) = req.key() else {
            debug!("Skipping requirement with blank skill name");
            continue;
        };
        if !req.importance.is_finite() {
            debug!(skill = %req.skill_name, "Skipping requirement with non-finite importance");
            continue;
        }
        let importance = req.importance.max(0.0);
        total_importance += importance;
        index.insert(
            key,
            KeyedRequirement {
                importance,
                is_required: req.is_required,
            },
        );
    }

    (index, total_importance)
}

/// Keys candidate skills by lowercase name → competency value. Last duplicate wins.
fn index_skill_values(
    skills: &[SkillRecord],
    weights: &ScoringWeights,
) -> HashMap<String, f64> {
    let mut index = HashMap::with_capacity(skills.len());
    for record in skills {
        let Some(key) = record.key() else {
            debug!("Skipping candidate skill with blank name");
            continue;
        };
        index.insert(
            key,
            skill_value(&record.level, record.years_experience, weights),
        );
    }
    index
}

/// Bounded match score in [0, 1] for one job against one candidate.
pub fn match_score(
    requirements: &[SkillRequirement],
    candidate_skills: &[SkillRecord],
    weights: &ScoringWeights,
) -> f64 {
    if requirements.is_empty() {
        return 0.0;
    }

    let (job_requirements, total_importance) = index_requirements(requirements);
    if total_importance <= 0.0 {
        return 0.0;
    }

    let candidate_values = index_skill_values(candidate_skills, weights);

    let mut matched_importance = 0.0_f64;
    let mut required_met = 0usize;
    let total_required = job_requirements
        .values()
        .filter(|r| r.is_required)
        .count();

    for (skill, req) in &job_requirements {
        let Some(value) = candidate_values.get(skill) else {
            continue;
        };
        let normalized = (value / weights.normalization_ceiling).min(1.0);
        matched_importance += req.importance * normalized;
        if req.is_required {
            required_met += 1;
        }
    }

    let mut score = matched_importance / total_importance;

    if total_required > 0 && required_met < total_required {
        let ratio = required_met as f64 / total_required as f64;
        let floor = weights.required_penalty_floor;
        score *= floor + (1.0 - floor) * ratio;
    }

    if !score.is_finite() {
        return 0.0;
    }

    round3(score.clamp(0.0, 1.0))
}

/// Rounds to 3 decimals on the exact binary value, ties to even (0.3125 → 0.312).
fn round3(value: f64) -> f64 {
    format!("{value:.3}").parse().unwrap_or(0.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
