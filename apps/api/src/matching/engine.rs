//! Match engine — pluggable, trait-based ranking of freelancers against a job.
//!
//! Default: `RuleBasedEngine` (weighted component sum, deterministic, the
//! production path). Alternate: `EmbeddingEngine`, an experimental
//! bag-of-words similarity ranker that no production route defaults to.
//!
//! `AppState` holds an `Arc<dyn MatchEngine>`, selected at startup via
//! `MATCH_ENGINE`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::freelancer::FreelancerRow;
use crate::models::job::JobRow;

// ────────────────────────────────────────────────────────────────────────────
// Input/output data models (shared across all engine backends)
// ────────────────────────────────────────────────────────────────────────────

/// Job budget range. Non-negative with `min <= max`, enforced at the API
/// boundary on job creation; the engine still tolerates anything.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

impl BudgetRange {
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, rate: f64) -> bool {
        rate >= self.min && rate <= self.max
    }
}

/// The job projection the engines read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub budget: BudgetRange,
    #[serde(default)]
    pub location_preference: Option<String>,
}

impl From<&JobRow> for JobPosting {
    fn from(row: &JobRow) -> Self {
        JobPosting {
            title: row.title.clone(),
            description: row.description.clone(),
            required_skills: row.required_skills.clone(),
            budget: BudgetRange {
                min: row.budget_min,
                max: row.budget_max,
            },
            location_preference: row.location_preference.clone(),
        }
    }
}

/// The freelancer projection the engines read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub ai_skill_score: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: i32,
    /// Only the embedding backend reads this.
    #[serde(default)]
    pub resume_text: Option<String>,
}

impl From<&FreelancerRow> for Candidate {
    fn from(row: &FreelancerRow) -> Self {
        Candidate {
            id: row.id,
            name: row.name.clone(),
            email: row.email.clone(),
            skills: row.skills.clone(),
            hourly_rate: row.hourly_rate,
            location: row.location.clone(),
            ai_skill_score: row.ai_skill_score,
            rating: row.rating,
            review_count: row.review_count,
            resume_text: row.resume_text.clone(),
        }
    }
}

impl Candidate {
    pub fn summary(&self) -> CandidateSummary {
        CandidateSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            location: self.location.clone(),
            skills: self.skills.clone(),
            hourly_rate: self.hourly_rate,
            ai_skill_score: self.ai_skill_score,
            rating: self.rating,
            review_count: self.review_count,
        }
    }
}

/// The candidate projection echoed back in results.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub ai_skill_score: f64,
    pub rating: f64,
    pub review_count: i32,
}

/// One ranked match. Ephemeral — recomputed per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub freelancer: CandidateSummary,
    pub match_score: u32,
    pub reasons: Vec<String>,
    pub matched_skills: Vec<String>,
    pub explanation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match engine trait. Implement this to swap ranking backends without
/// touching the endpoints or callers.
///
/// Engines must be pure: no I/O, no shared mutable state, identical output
/// for identical input. That makes every implementation trivially safe to
/// call from any number of concurrent request handlers.
pub trait MatchEngine: Send + Sync {
    /// Ranks `candidates` against `job`, descending by score, at most `limit`
    /// entries. An empty pool yields an empty ranking, never an error.
    fn rank(&self, job: &JobPosting, candidates: &[Candidate], limit: usize) -> Vec<MatchResult>;

    /// Backend label echoed in responses for transparency.
    fn backend(&self) -> &'static str;
}

/// Weighted component sum over skills, budget, location, and the stored
/// skill score. The production default.
pub struct RuleBasedEngine;

impl MatchEngine for RuleBasedEngine {
    fn rank(&self, job: &JobPosting, candidates: &[Candidate], limit: usize) -> Vec<MatchResult> {
        crate::matching::rule_based::rank(job, candidates, limit)
    }

    fn backend(&self) -> &'static str {
        "rule_based"
    }
}

/// Experimental bag-of-words similarity ranker. Selectable, never default.
pub struct EmbeddingEngine;

impl MatchEngine for EmbeddingEngine {
    fn rank(&self, job: &JobPosting, candidates: &[Candidate], limit: usize) -> Vec<MatchResult> {
        crate::matching::embedding::rank(job, candidates, limit)
    }

    fn backend(&self) -> &'static str {
        "embedding"
    }
}
