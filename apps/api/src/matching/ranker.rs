//! Population Ranker — scores a pool against one fixed counterpart and keeps the best.
//!
//! Used in both directions: candidates for a job, and jobs for a candidate.
//! Ordering is by score descending; the sort is stable, so equal scores keep pool order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::scorer::match_score;
use crate::matching::skill_value::ScoringWeights;
use crate::models::{CandidateProfile, JobPosting, SkillRecord, SkillRequirement};

pub const DEFAULT_LIMIT: usize = 50;
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankOptions {
    pub limit: usize,
    pub min_score: f64,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// A pool member paired with its score. Serializes as the member's own fields
/// plus `match_score`.
#[derive(Debug, Clone, Serialize)]
pub struct Ranked<T> {
    #[serde(flatten)]
    pub item: T,
    pub match_score: f64,
}

/// Anything that carries a candidate skill inventory.
pub trait HasSkills {
    fn skill_records(&self) -> &[SkillRecord];
}

/// Anything that carries a job's skill requirements.
pub trait HasRequirements {
    fn skill_requirements(&self) -> &[SkillRequirement];
}

impl HasSkills for CandidateProfile {
    fn skill_records(&self) -> &[SkillRecord] {
        &self.skills
    }
}

impl HasRequirements for JobPosting {
    fn skill_requirements(&self) -> &[SkillRequirement] {
        &self.requirements
    }
}

impl<T: HasSkills + ?Sized> HasSkills for &T {
    fn skill_records(&self) -> &[SkillRecord] {
        (**self).skill_records()
    }
}

impl<T: HasRequirements + ?Sized> HasRequirements for &T {
    fn skill_requirements(&self) -> &[SkillRequirement] {
        (**self).skill_requirements()
    }
}

/// Ranks candidates against one job's requirements.
pub fn rank_candidates<C, I>(
    job_requirements: &[SkillRequirement],
    candidate_pool: I,
    options: &RankOptions,
    weights: &ScoringWeights,
) -> Vec<Ranked<C>>
where
    C: HasSkills,
    I: IntoIterator<Item = C>,
{
    rank_by(candidate_pool, options, |candidate| {
        match_score(job_requirements, candidate.skill_records(), weights)
    })
}

/// Ranks jobs against one candidate's skills.
pub fn rank_jobs<J, I>(
    candidate_skills: &[SkillRecord],
    job_pool: I,
    options: &RankOptions,
    weights: &ScoringWeights,
) -> Vec<Ranked<J>>
where
    J: HasRequirements,
    I: IntoIterator<Item = J>,
{
    rank_by(job_pool, options, |job| {
        match_score(job.skill_requirements(), candidate_skills, weights)
    })
}

fn rank_by<T, I, F>(pool: I, options: &RankOptions, score: F) -> Vec<Ranked<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> f64,
{
    let mut scored = 0usize;
    let mut ranked: Vec<Ranked<T>> = pool
        .into_iter()
        .filter_map(|item| {
            scored += 1;
            let match_score = score(&item);
            (match_score >= options.min_score).then_some(Ranked { item, match_score })
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    ranked.truncate(options.limit);

    debug!(
        scored,
        returned = ranked.len(),
        min_score = options.min_score,
        limit = options.limit,
        "Ranked pool"
    );

    ranked
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
