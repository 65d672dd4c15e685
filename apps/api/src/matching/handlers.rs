//! Axum route handlers for the Matching API.
//!
//! Callers supply every record in the request body; nothing is looked up or stored.
//! Pool members arrive as raw JSON so one malformed member is dropped instead of
//! failing the whole request.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::matching::{
    match_score, rank_candidates, rank_jobs, skill_gap, GapReport, RankOptions, Ranked,
};
use crate::models::{CandidateProfile, JobPosting, SkillRecord, SkillRequirement};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `?limit=&min_score=` on ranking routes. Absent values fall back to config.
#[derive(Debug, Default, Deserialize)]
pub struct RankQuery {
    pub limit: Option<usize>,
    pub min_score: Option<f64>,
}

impl RankQuery {
    fn resolve(&self, config: &Config) -> Result<RankOptions, AppError> {
        let min_score = self.min_score.unwrap_or(config.default_min_score);
        if !min_score.is_finite() || !(0.0..=1.0).contains(&min_score) {
            return Err(AppError::Validation(format!(
                "min_score must be between 0 and 1, got {min_score}"
            )));
        }
        Ok(RankOptions {
            limit: self.limit.unwrap_or(config.default_limit),
            min_score,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub job_id: Option<Uuid>,
    #[serde(default)]
    pub profile_id: Option<Uuid>,
    #[serde(default)]
    pub requirements: Vec<SkillRequirement>,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub job_id: Option<Uuid>,
    pub profile_id: Option<Uuid>,
    pub match_score: f64,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub job: JobPosting,
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Serialize)]
pub struct SkillGapResponse {
    pub job_id: Uuid,
    pub job_title: String,
    pub analysis: GapReport,
}

#[derive(Debug, Deserialize)]
pub struct MatchCandidatesRequest {
    pub job: JobPosting,
    #[serde(default)]
    pub candidates: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct MatchCandidatesResponse {
    pub job_id: Uuid,
    pub job_title: String,
    pub total_matches: usize,
    pub candidates: Vec<Ranked<CandidateProfile>>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct MatchJobsRequest {
    pub profile: CandidateProfile,
    #[serde(default)]
    pub jobs: Vec<Value>,
}

#[derive(Debug, Serialize)]
pub struct MatchJobsResponse {
    pub profile_id: Uuid,
    pub total_matches: usize,
    pub jobs: Vec<Ranked<JobPosting>>,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matching/score
///
/// Scores one requirement set against one skill set.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let score = match_score(&request.requirements, &request.skills, &state.weights);

    info!(
        job_id = ?request.job_id,
        profile_id = ?request.profile_id,
        score,
        "Computed match score"
    );

    Ok(Json(ScoreResponse {
        job_id: request.job_id,
        profile_id: request.profile_id,
        match_score: score,
    }))
}

/// POST /api/v1/matching/skill-gap
///
/// Matched, missing and under-leveled skills for an active job.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResponse>, AppError> {
    let job = request.job;
    if !job.is_active() {
        return Err(AppError::NotFound(format!(
            "Job {} not found or not active",
            job.id
        )));
    }

    let analysis = skill_gap(&job.requirements, &request.skills, &state.weights);

    info!(
        job_id = %job.id,
        matched = analysis.matched.len(),
        missing = analysis.missing.len(),
        "Computed skill gap"
    );

    Ok(Json(SkillGapResponse {
        job_id: job.id,
        job_title: job.title,
        analysis,
    }))
}

/// POST /api/v1/matching/candidates
///
/// Ranks discoverable candidates (public and available) against a job.
pub async fn handle_match_candidates(
    State(state): State<AppState>,
    query: Result<Query<RankQuery>, QueryRejection>,
    Json(request): Json<MatchCandidatesRequest>,
) -> Result<Json<MatchCandidatesResponse>, AppError> {
    let Query(query) = query?;
    let options = query.resolve(&state.config)?;
    check_pool_size(request.candidates.len(), state.config.max_pool_size)?;

    let job = request.job;
    let pool: Vec<CandidateProfile> = parse_pool(request.candidates, "candidate")
        .into_iter()
        .filter(CandidateProfile::is_discoverable)
        .collect();
    let pool_size = pool.len();

    let weights = Arc::clone(&state.weights);
    let requirements = job.requirements.clone();
    let candidates = tokio::task::spawn_blocking(move || {
        rank_candidates(&requirements, pool, &options, &weights)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in ranking: {e}")))?;

    info!(
        job_id = %job.id,
        pool_size,
        matches = candidates.len(),
        "Ranked candidates for job"
    );

    Ok(Json(MatchCandidatesResponse {
        job_id: job.id,
        job_title: job.title,
        total_matches: candidates.len(),
        candidates,
        generated_at: Utc::now(),
    }))
}

/// POST /api/v1/matching/jobs
///
/// Ranks active jobs against a candidate's skills.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    query: Result<Query<RankQuery>, QueryRejection>,
    Json(request): Json<MatchJobsRequest>,
) -> Result<Json<MatchJobsResponse>, AppError> {
    let Query(query) = query?;
    let options = query.resolve(&state.config)?;
    check_pool_size(request.jobs.len(), state.config.max_pool_size)?;

    let profile = request.profile;
    let pool: Vec<JobPosting> = parse_pool(request.jobs, "job")
        .into_iter()
        .filter(JobPosting::is_active)
        .collect();
    let pool_size = pool.len();

    let weights = Arc::clone(&state.weights);
    let skills = profile.skills.clone();
    let jobs = tokio::task::spawn_blocking(move || rank_jobs(&skills, pool, &options, &weights))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in ranking: {e}"))
        })?;

    info!(
        profile_id = %profile.id,
        pool_size,
        matches = jobs.len(),
        "Ranked jobs for profile"
    );

    Ok(Json(MatchJobsResponse {
        profile_id: profile.id,
        total_matches: jobs.len(),
        jobs,
        generated_at: Utc::now(),
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn check_pool_size(len: usize, max: usize) -> Result<(), AppError> {
    if len > max {
        return Err(AppError::Validation(format!(
            "Pool of {len} exceeds the maximum of {max}"
        )));
    }
    Ok(())
}

/// Deserializes each pool member independently, dropping the ones that fail.
fn parse_pool<T: DeserializeOwned>(raw: Vec<Value>, kind: &str) -> Vec<T> {
    raw.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
            Ok(member) => Some(member),
            Err(e) => {
                warn!(index, "Dropping malformed {kind} from pool: {e}");
                None
            }
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
