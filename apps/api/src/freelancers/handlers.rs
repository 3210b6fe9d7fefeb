//! Axum route handlers for freelancer profiles and skill passports.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::freelancers::resume_ingest::{ingest_resume, ResumeIngestResponse};
use crate::freelancers::store::{self, NewFreelancer};
use crate::models::freelancer::FreelancerRow;
use crate::skills::extraction::extract_skills;
use crate::skills::passport::{generate_passport, SkillPassport};
use crate::skills::scoring::{compute_skill_score, ScoreInputs};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateFreelancerRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    #[serde(default)]
    pub project_count: i32,
    #[serde(default)]
    pub portfolio_links: Vec<String>,
    pub resume_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
    pub count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/freelancers
///
/// Registers a freelancer. The skill score is computed from whatever profile
/// fields are supplied — an empty profile starts at 0 and grows on refresh.
pub async fn handle_create_freelancer(
    State(state): State<AppState>,
    Json(request): Json<CreateFreelancerRequest>,
) -> Result<(StatusCode, Json<FreelancerRow>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::Validation("name cannot be empty".to_string()));
    }
    if request.email.trim().is_empty() {
        return Err(ApiError::Validation("email cannot be empty".to_string()));
    }
    if request.hourly_rate.is_some_and(|r| r < 0.0) {
        return Err(ApiError::Validation(
            "hourly_rate cannot be negative".to_string(),
        ));
    }
    if request.project_count < 0 {
        return Err(ApiError::Validation(
            "project_count cannot be negative".to_string(),
        ));
    }

    let ai_skill_score = compute_skill_score(&ScoreInputs {
        project_count: request.project_count as u32,
        portfolio_links: &request.portfolio_links,
        resume_text: request.resume_text.as_deref(),
    });

    let row = store::insert_freelancer(
        &state.db,
        NewFreelancer {
            name: request.name.trim(),
            email: request.email.trim(),
            skills: &request.skills,
            hourly_rate: request.hourly_rate,
            location: request.location.as_deref(),
            ai_skill_score: ai_skill_score as f64,
            project_count: request.project_count,
            portfolio_links: &request.portfolio_links,
            resume_text: request.resume_text.as_deref(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/freelancers/:id
pub async fn handle_get_freelancer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FreelancerRow>, ApiError> {
    let row = store::get_freelancer(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Freelancer {id} not found")))?;
    Ok(Json(row))
}

/// GET /api/v1/freelancers/:id/passport
///
/// Generates the skill passport from the current row. Read-only: nothing is
/// persisted; use the refresh endpoint to update the stored score.
pub async fn handle_get_passport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SkillPassport>, ApiError> {
    let row = store::get_freelancer(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Freelancer {id} not found")))?;
    Ok(Json(generate_passport(&row, &state.vocabulary)))
}

/// POST /api/v1/freelancers/:id/passport/refresh
pub async fn handle_refresh_passport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SkillPassport>, ApiError> {
    let passport = store::refresh_passport(&state.db, &state.vocabulary, id).await?;
    Ok(Json(passport))
}

/// POST /api/v1/skills/extract
///
/// Extraction preview: scans posted text against the vocabulary and returns
/// the matched skills without touching any record.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::Validation(
            "Please provide text to extract skills from".to_string(),
        ));
    }
    let skills = extract_skills(&request.text, &state.vocabulary);
    let count = skills.len();
    Ok(Json(ExtractSkillsResponse { skills, count }))
}

/// POST /api/v1/freelancers/:id/resume
///
/// Multipart resume upload: expects one `file` field containing a PDF.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<ResumeIngestResponse>, ApiError> {
    let mut file_bytes = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            file_bytes = Some(field.bytes().await.map_err(|e| {
                ApiError::Validation(format!("Failed to read uploaded file: {e}"))
            })?);
        }
    }

    let bytes = file_bytes
        .ok_or_else(|| ApiError::Validation("Missing 'file' field in upload".to_string()))?;

    let response = ingest_resume(&state, id, bytes).await?;
    Ok(Json(response))
}
