use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::freelancer::FreelancerRow;
use crate::skills::extraction::extract_skills;
use crate::skills::passport::{generate_passport, merged_skills, SkillPassport};
use crate::skills::scoring::{compute_skill_score, ScoreInputs};
use crate::skills::vocabulary::SkillVocabulary;

/// Parameters for inserting a freelancer row.
pub struct NewFreelancer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub skills: &'a [String],
    pub hourly_rate: Option<f64>,
    pub location: Option<&'a str>,
    pub ai_skill_score: f64,
    pub project_count: i32,
    pub portfolio_links: &'a [String],
    pub resume_text: Option<&'a str>,
}

pub async fn insert_freelancer(
    pool: &PgPool,
    new: NewFreelancer<'_>,
) -> Result<FreelancerRow, sqlx::Error> {
    sqlx::query_as::<_, FreelancerRow>(
        r#"
        INSERT INTO freelancers
            (id, name, email, role, skills, hourly_rate, location, ai_skill_score,
             project_count, portfolio_links, resume_text)
        VALUES ($1, $2, $3, 'freelancer', $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(new.name)
    .bind(new.email)
    .bind(new.skills)
    .bind(new.hourly_rate)
    .bind(new.location)
    .bind(new.ai_skill_score)
    .bind(new.project_count)
    .bind(new.portfolio_links)
    .bind(new.resume_text)
    .fetch_one(pool)
    .await
}

pub async fn get_freelancer(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<FreelancerRow>, sqlx::Error> {
    sqlx::query_as::<_, FreelancerRow>("SELECT * FROM freelancers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// The matching candidate pool: freelancers with at least one declared skill.
/// No pagination — the matcher ranks the whole pool per request.
pub async fn candidate_pool(pool: &PgPool) -> Result<Vec<FreelancerRow>, sqlx::Error> {
    sqlx::query_as::<_, FreelancerRow>(
        r#"
        SELECT * FROM freelancers
        WHERE role = 'freelancer' AND cardinality(skills) > 0
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn persist_resume(
    pool: &PgPool,
    id: Uuid,
    resume_text: &str,
    resume_s3_key: &str,
) -> Result<FreelancerRow, sqlx::Error> {
    sqlx::query_as::<_, FreelancerRow>(
        "UPDATE freelancers SET resume_text = $1, resume_s3_key = $2 WHERE id = $3 RETURNING *",
    )
    .bind(resume_text)
    .bind(resume_s3_key)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// The "skill passport update" operation: recomputes the aggregate score,
/// merges resume-extracted skills into the declared set, persists both, and
/// returns the regenerated passport.
pub async fn refresh_passport(
    pool: &PgPool,
    vocab: &SkillVocabulary,
    freelancer_id: Uuid,
) -> Result<SkillPassport, ApiError> {
    let row = get_freelancer(pool, freelancer_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Freelancer {freelancer_id} not found")))?;

    let extracted = row
        .resume_text
        .as_deref()
        .map(|t| extract_skills(t, vocab))
        .unwrap_or_default();
    let skills = merged_skills(&row.skills, &extracted);

    let score = compute_skill_score(&ScoreInputs {
        project_count: row.project_count.max(0) as u32,
        portfolio_links: &row.portfolio_links,
        resume_text: row.resume_text.as_deref(),
    });

    let updated = sqlx::query_as::<_, FreelancerRow>(
        "UPDATE freelancers SET skills = $1, ai_skill_score = $2 WHERE id = $3 RETURNING *",
    )
    .bind(&skills)
    .bind(score as f64)
    .bind(freelancer_id)
    .fetch_one(pool)
    .await?;

    info!("Refreshed skill passport for freelancer {freelancer_id}: score {score}");
    Ok(generate_passport(&updated, vocab))
}
