//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::matching::engine::{Candidate, JobPosting, MatchResult};
use crate::state::AppState;

/// Matches returned when the caller does not pass `limit`.
pub const DEFAULT_MATCH_LIMIT: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub backend: &'static str,
    pub total: usize,
    pub matches: Vec<MatchResult>,
}

#[derive(Debug, Deserialize)]
pub struct MatchPreviewRequest {
    pub job: JobPosting,
    #[serde(default)]
    pub freelancers: Vec<Candidate>,
    pub limit: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs/:id/matches?limit=N
///
/// Loads the job and the full candidate pool, ranks with the configured
/// engine, returns at most `limit` results. An empty pool is an empty list,
/// not an error.
pub async fn handle_job_matches(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchListResponse>, ApiError> {
    let job = crate::jobs::store::get_job(&state.db, job_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Job {job_id} not found")))?;

    let rows = crate::freelancers::store::candidate_pool(&state.db).await?;
    let candidates: Vec<Candidate> = rows.iter().map(Candidate::from).collect();

    let posting = JobPosting::from(&job);
    let limit = query.limit.unwrap_or(DEFAULT_MATCH_LIMIT);
    let matches = state.match_engine.rank(&posting, &candidates, limit);

    info!(
        "Ranked {} of {} candidates for job {job_id} via {} backend",
        matches.len(),
        candidates.len(),
        state.match_engine.backend()
    );

    Ok(Json(MatchListResponse {
        backend: state.match_engine.backend(),
        total: matches.len(),
        matches,
    }))
}

/// POST /api/v1/matches/preview
///
/// Runs the configured engine over a job and candidate pool supplied inline.
/// Nothing is read from or written to storage — this is the engines exercised
/// as the pure functions they are.
pub async fn handle_match_preview(
    State(state): State<AppState>,
    Json(request): Json<MatchPreviewRequest>,
) -> Result<Json<MatchListResponse>, ApiError> {
    let limit = request.limit.unwrap_or(DEFAULT_MATCH_LIMIT);
    let matches = state
        .match_engine
        .rank(&request.job, &request.freelancers, limit);

    Ok(Json(MatchListResponse {
        backend: state.match_engine.backend(),
        total: matches.len(),
        matches,
    }))
}
