use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::JobRow;

/// Parameters for inserting a job row. Budget bounds are validated at the
/// handler boundary before this is built.
pub struct NewJob<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub required_skills: &'a [String],
    pub budget_min: f64,
    pub budget_max: f64,
    pub location_preference: Option<&'a str>,
}

pub async fn insert_job(pool: &PgPool, new: NewJob<'_>) -> Result<JobRow, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs
            (id, title, description, required_skills, budget_min, budget_max,
             location_preference, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, 'open')
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.title)
    .bind(new.description)
    .bind(new.required_skills)
    .bind(new.budget_min)
    .bind(new.budget_max)
    .bind(new.location_preference)
    .fetch_one(pool)
    .await
}

pub async fn get_job(pool: &PgPool, id: Uuid) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
