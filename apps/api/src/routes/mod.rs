pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::freelancers::handlers as freelancer_handlers;
use crate::jobs::handlers as job_handlers;
use crate::matching::handlers as match_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Freelancer profiles & skill passports
        .route(
            "/api/v1/freelancers",
            post(freelancer_handlers::handle_create_freelancer),
        )
        .route(
            "/api/v1/freelancers/:id",
            get(freelancer_handlers::handle_get_freelancer),
        )
        .route(
            "/api/v1/freelancers/:id/passport",
            get(freelancer_handlers::handle_get_passport),
        )
        .route(
            "/api/v1/freelancers/:id/passport/refresh",
            post(freelancer_handlers::handle_refresh_passport),
        )
        .route(
            "/api/v1/freelancers/:id/resume",
            post(freelancer_handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/skills/extract",
            post(freelancer_handlers::handle_extract_skills),
        )
        // Jobs & matching
        .route("/api/v1/jobs", post(job_handlers::handle_create_job))
        .route("/api/v1/jobs/:id", get(job_handlers::handle_get_job))
        .route(
            "/api/v1/jobs/:id/matches",
            get(match_handlers::handle_job_matches),
        )
        .route(
            "/api/v1/matches/preview",
            post(match_handlers::handle_match_preview),
        )
        .with_state(state)
}
