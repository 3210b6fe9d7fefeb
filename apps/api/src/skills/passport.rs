//! Skill passport — the aggregate score plus a per-skill evidence breakdown.
//!
//! Each skill in the union of resume-extracted and self-declared skills is
//! scored by where it is evidenced: resume text, the declared list, and
//! portfolio links. Generation is read-only; persistence of a refreshed
//! passport lives with the freelancer store.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::freelancer::FreelancerRow;
use crate::skills::extraction::extract_skills;
use crate::skills::scoring::{compute_breakdown, ScoreInputs, SkillScoreBreakdown};
use crate::skills::vocabulary::SkillVocabulary;

/// Evidence weights for a single skill. They sum to 100, so per-skill scores
/// are bounded without a clamp.
pub const RESUME_EVIDENCE_POINTS: u32 = 50;
pub const DECLARED_POINTS: u32 = 30;
pub const PORTFOLIO_MENTION_POINTS: u32 = 20;

const PASSPORT_SKILL_LIMIT: usize = 10;
const TOP_SKILL_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct VerifiedSkill {
    pub skill: String,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillPassport {
    pub freelancer_id: Uuid,
    pub name: String,
    pub overall_score: u32,
    pub breakdown: SkillScoreBreakdown,
    /// Strongest-evidence skills, at most ten.
    pub verified_skills: Vec<VerifiedSkill>,
    pub top_skills: Vec<String>,
    pub total_skills: usize,
    pub generated_at: DateTime<Utc>,
}

/// Scores every skill in the union of resume-extracted and declared skills.
/// Sorted descending by score; ties keep union order (resume skills first).
pub fn verify_skills(
    declared: &[String],
    resume_text: Option<&str>,
    portfolio_links: &[String],
    vocab: &SkillVocabulary,
) -> Vec<VerifiedSkill> {
    let resume_skills = resume_text
        .map(|t| extract_skills(t, vocab))
        .unwrap_or_default();

    let mut union: Vec<String> = Vec::new();
    for skill in resume_skills
        .iter()
        .cloned()
        .chain(declared.iter().map(|s| s.to_lowercase()))
    {
        if !union.contains(&skill) {
            union.push(skill);
        }
    }

    let declared_lower: Vec<String> = declared.iter().map(|s| s.to_lowercase()).collect();
    let portfolio_text = portfolio_links.join(" ").to_lowercase();

    let mut verified: Vec<VerifiedSkill> = union
        .into_iter()
        .map(|skill| {
            let mut score = 0;
            if resume_skills.contains(&skill) {
                score += RESUME_EVIDENCE_POINTS;
            }
            if declared_lower.contains(&skill) {
                score += DECLARED_POINTS;
            }
            if !portfolio_text.is_empty() && portfolio_text.contains(&skill) {
                score += PORTFOLIO_MENTION_POINTS;
            }
            VerifiedSkill { skill, score }
        })
        .collect();

    verified.sort_by(|a, b| b.score.cmp(&a.score));
    verified
}

/// Assembles a passport from the current row. Pure: recomputes everything,
/// persists nothing.
pub fn generate_passport(row: &FreelancerRow, vocab: &SkillVocabulary) -> SkillPassport {
    let breakdown = compute_breakdown(&ScoreInputs::from(row));
    let verified = verify_skills(
        &row.skills,
        row.resume_text.as_deref(),
        &row.portfolio_links,
        vocab,
    );

    let total_skills = verified.len();
    let top_skills = verified
        .iter()
        .take(TOP_SKILL_LIMIT)
        .map(|s| s.skill.clone())
        .collect();
    let verified_skills = verified.into_iter().take(PASSPORT_SKILL_LIMIT).collect();

    SkillPassport {
        freelancer_id: row.id,
        name: row.name.clone(),
        overall_score: breakdown.total(),
        breakdown,
        verified_skills,
        top_skills,
        total_skills,
        generated_at: Utc::now(),
    }
}

/// Declared skills with resume-extracted skills merged in, case-insensitively
/// deduplicated, declared order preserved. Used by passport refresh.
pub fn merged_skills(declared: &[String], extracted: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = declared.to_vec();
    for skill in extracted {
        if !merged.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            merged.push(skill.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn vocab() -> SkillVocabulary {
        SkillVocabulary::builtin().unwrap()
    }

    fn row(
        skills: Vec<&str>,
        resume_text: Option<&str>,
        portfolio_links: Vec<&str>,
        project_count: i32,
    ) -> FreelancerRow {
        FreelancerRow {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            role: "freelancer".to_string(),
            skills: skills.into_iter().map(String::from).collect(),
            hourly_rate: None,
            location: None,
            ai_skill_score: 0.0,
            project_count,
            portfolio_links: portfolio_links.into_iter().map(String::from).collect(),
            resume_text: resume_text.map(String::from),
            resume_s3_key: None,
            rating: 0.0,
            review_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_skill_in_all_three_sources_scores_100() {
        let verified = verify_skills(
            &["React".to_string()],
            Some("Shipped React dashboards."),
            &["https://github.com/asha/react-widgets".to_string()],
            &vocab(),
        );
        let react = verified.iter().find(|s| s.skill == "react").unwrap();
        assert_eq!(
            react.score,
            RESUME_EVIDENCE_POINTS + DECLARED_POINTS + PORTFOLIO_MENTION_POINTS
        );
    }

    #[test]
    fn test_declared_only_scores_30() {
        let verified = verify_skills(&["Figma".to_string()], None, &[], &vocab());
        assert_eq!(verified.len(), 1);
        assert_eq!(verified[0].skill, "figma");
        assert_eq!(verified[0].score, DECLARED_POINTS);
    }

    #[test]
    fn test_resume_only_scores_50() {
        let verified = verify_skills(&[], Some("Kubernetes operator work."), &[], &vocab());
        let k8s = verified.iter().find(|s| s.skill == "kubernetes").unwrap();
        assert_eq!(k8s.score, RESUME_EVIDENCE_POINTS);
    }

    #[test]
    fn test_sorted_descending() {
        let verified = verify_skills(
            &["Figma".to_string()],
            Some("Rust services and more Rust."),
            &[],
            &vocab(),
        );
        for pair in verified.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(verified[0].skill, "rust");
    }

    #[test]
    fn test_scores_bounded_and_made_of_evidence_weights() {
        let verified = verify_skills(
            &["React".to_string(), "Figma".to_string()],
            Some("React and PostgreSQL."),
            &["https://r.example/react".to_string()],
            &vocab(),
        );
        for skill in &verified {
            assert!(skill.score <= 100);
            assert!(
                [20, 30, 50, 70, 80, 100].contains(&skill.score),
                "unexpected evidence sum {} for {}",
                skill.score,
                skill.skill
            );
        }
    }

    #[test]
    fn test_passport_breakdown_matches_formula() {
        let row = row(
            vec!["React"],
            Some("React work"),
            vec!["https://a.example", "https://b.example"],
            3,
        );
        let passport = generate_passport(&row, &vocab());
        assert_eq!(passport.breakdown.project_score, 30);
        assert_eq!(passport.breakdown.portfolio_score, 20);
        assert_eq!(passport.breakdown.resume_score, 30);
        assert_eq!(passport.overall_score, 80);
    }

    #[test]
    fn test_passport_truncates_top_lists() {
        let declared: Vec<String> = [
            "react", "python", "java", "docker", "aws", "figma", "seo", "css", "html", "rust",
            "go", "php",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        let row = FreelancerRow {
            skills: declared,
            ..row(vec![], None, vec![], 0)
        };
        let passport = generate_passport(&row, &vocab());
        assert_eq!(passport.total_skills, 12);
        assert_eq!(passport.verified_skills.len(), 10);
        assert_eq!(passport.top_skills.len(), 5);
    }

    #[test]
    fn test_empty_profile_passport() {
        let row = row(vec![], None, vec![], 0);
        let passport = generate_passport(&row, &vocab());
        assert_eq!(passport.overall_score, 0);
        assert!(passport.verified_skills.is_empty());
        assert_eq!(passport.total_skills, 0);
    }

    #[test]
    fn test_merged_skills_deduplicates_case_insensitively() {
        let merged = merged_skills(
            &["React".to_string(), "Figma".to_string()],
            &["react".to_string(), "python".to_string()],
        );
        assert_eq!(
            merged,
            vec!["React".to_string(), "Figma".to_string(), "python".to_string()]
        );
    }
}
