//! Axum route handlers for job postings.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::jobs::store::{self, NewJob};
use crate::matching::engine::BudgetRange;
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub budget: BudgetRange,
    pub location_preference: Option<String>,
}

/// POST /api/v1/jobs
///
/// Creates a job posting. An inverted or negative budget range is rejected
/// here rather than tolerated downstream.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::Validation("title cannot be empty".to_string()));
    }
    if request.budget.min < 0.0 || request.budget.max < 0.0 {
        return Err(ApiError::Validation(
            "budget bounds cannot be negative".to_string(),
        ));
    }
    if request.budget.min > request.budget.max {
        return Err(ApiError::Validation(
            "budget.min cannot exceed budget.max".to_string(),
        ));
    }

    let row = store::insert_job(
        &state.db,
        NewJob {
            title: request.title.trim(),
            description: &request.description,
            required_skills: &request.required_skills,
            budget_min: request.budget.min,
            budget_max: request.budget.max,
            location_preference: request.location_preference.as_deref(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, ApiError> {
    let row = store::get_job(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(row))
}
