use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A freelancer row. `ai_skill_score` is derived: computed at registration,
/// recomputed and persisted on every passport refresh, and read back by the
/// matching engine as one of its four inputs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FreelancerRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Self-declared skill names, compared case-insensitively everywhere.
    pub skills: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub location: Option<String>,
    /// Derived, clamped to [0,100].
    pub ai_skill_score: f64,
    pub project_count: i32,
    pub portfolio_links: Vec<String>,
    pub resume_text: Option<String>,
    pub resume_s3_key: Option<String>,
    pub rating: f64,
    pub review_count: i32,
    pub created_at: DateTime<Utc>,
}
