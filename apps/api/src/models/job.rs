use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job posting row. `budget_min <= budget_max` is enforced at creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub budget_min: f64,
    pub budget_max: f64,
    pub location_preference: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
