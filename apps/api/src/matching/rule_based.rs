//! Rule-based ranking — the production match algorithm.
//!
//! Per-candidate score is the sum of four independently-capped components:
//! skill overlap (0–40), budget fit (0–30), location match (0–15), and the
//! stored skill score (0–15). Candidates below the cutoff are dropped, the
//! rest sort descending (stable, so ties keep pool discovery order).

use std::collections::HashSet;

use crate::matching::engine::{BudgetRange, Candidate, JobPosting, MatchResult};
use crate::matching::explanation;

pub const SKILL_OVERLAP_POINTS: f64 = 40.0;
pub const BUDGET_FIT_POINTS: f64 = 30.0;
pub const LOCATION_EXACT_POINTS: f64 = 15.0;
pub const LOCATION_PARTIAL_POINTS: f64 = 10.0;
pub const SKILL_SCORE_POINTS: f64 = 15.0;

/// Hard cutoff on the raw (unrounded) total. Below it a candidate is excluded
/// entirely, not penalized.
pub const MIN_MATCH_SCORE: f64 = 20.0;

pub fn rank(job: &JobPosting, candidates: &[Candidate], limit: usize) -> Vec<MatchResult> {
    let mut matches: Vec<MatchResult> = Vec::new();

    for candidate in candidates {
        let (overlap_points, matched_skills) =
            skill_overlap(&job.required_skills, &candidate.skills);
        let budget_points = budget_fit(&job.budget, candidate.hourly_rate);
        let location = location_fit(
            job.location_preference.as_deref(),
            candidate.location.as_deref(),
        );
        let derived_points = derived_skill_points(candidate.ai_skill_score);

        let total = overlap_points + budget_points + location.points() + derived_points;
        if total < MIN_MATCH_SCORE {
            continue;
        }

        let match_score = total.round().min(100.0) as u32;
        let reasons =
            explanation::build_reasons(job, candidate, &matched_skills, budget_points, &location);
        let explanation =
            explanation::build_explanation(&candidate.name, match_score, &reasons, &matched_skills);

        matches.push(MatchResult {
            freelancer: candidate.summary(),
            match_score,
            reasons,
            matched_skills,
            explanation,
        });
    }

    // Stable: equal scores keep candidate-pool discovery order.
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(limit);
    matches
}

/// Skill overlap: fraction of required skills present in the candidate's
/// declared set, case-insensitive. Empty requirements contribute 0 — the
/// ratio is never a division by zero. Matched skills keep the job's casing.
fn skill_overlap(required: &[String], declared: &[String]) -> (f64, Vec<String>) {
    if required.is_empty() {
        return (0.0, Vec::new());
    }

    let declared_lower: HashSet<String> = declared.iter().map(|s| s.to_lowercase()).collect();

    // Required skills are a set; dedupe before taking the ratio.
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique_count = 0usize;
    let mut matched: Vec<String> = Vec::new();
    for skill in required {
        let lower = skill.to_lowercase();
        if !seen.insert(lower.clone()) {
            continue;
        }
        unique_count += 1;
        if declared_lower.contains(&lower) {
            matched.push(skill.clone());
        }
    }

    let ratio = matched.len() as f64 / unique_count as f64;
    (ratio * SKILL_OVERLAP_POINTS, matched)
}

/// Budget fit: full points at the budget midpoint, degrading linearly to 0 at
/// 100% deviation, floored there. Skipped (0) when the rate is absent or the
/// midpoint is not positive.
fn budget_fit(budget: &BudgetRange, hourly_rate: Option<f64>) -> f64 {
    let Some(rate) = hourly_rate else {
        return 0.0;
    };
    let midpoint = budget.midpoint();
    if midpoint <= 0.0 {
        return 0.0;
    }
    let diff_ratio = (midpoint - rate).abs() / midpoint;
    (BUDGET_FIT_POINTS - diff_ratio * BUDGET_FIT_POINTS).max(0.0)
}

/// Location comparison outcome. Skipped entirely when either side is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LocationFit {
    Exact,
    Partial,
    None,
}

impl LocationFit {
    pub(crate) fn points(&self) -> f64 {
        match self {
            LocationFit::Exact => LOCATION_EXACT_POINTS,
            LocationFit::Partial => LOCATION_PARTIAL_POINTS,
            LocationFit::None => 0.0,
        }
    }
}

fn location_fit(preference: Option<&str>, location: Option<&str>) -> LocationFit {
    let (Some(preference), Some(location)) = (preference, location) else {
        return LocationFit::None;
    };
    let preference = preference.trim().to_lowercase();
    let location = location.trim().to_lowercase();
    if preference.is_empty() || location.is_empty() {
        return LocationFit::None;
    }
    if preference == location {
        LocationFit::Exact
    } else if location.contains(&preference) || preference.contains(&location) {
        LocationFit::Partial
    } else {
        LocationFit::None
    }
}

/// Proportional credit for the stored 0–100 skill score.
fn derived_skill_points(ai_skill_score: f64) -> f64 {
    (ai_skill_score.clamp(0.0, 100.0) / 100.0) * SKILL_SCORE_POINTS
}
