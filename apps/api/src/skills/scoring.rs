//! Aggregate skill score — the 0–100 "skill passport" number.
//!
//! Canonical formula: capped project component + capped portfolio component +
//! flat resume component. Missing fields contribute zero; there is no error
//! path.

use serde::{Deserialize, Serialize};

use crate::models::freelancer::FreelancerRow;

/// Linear project credit, 10 points per project, saturating at 40.
pub const PROJECT_POINTS_PER: u32 = 10;
pub const PROJECT_CAP: u32 = 40;

/// Linear portfolio credit, 10 points per link, saturating at 30.
pub const PORTFOLIO_POINTS_PER: u32 = 10;
pub const PORTFOLIO_CAP: u32 = 30;

/// Flat credit for a non-blank resume.
pub const RESUME_POINTS: u32 = 30;

/// The profile projection the scorer reads. Callers hand in whatever subset
/// they have; absent fields degrade to zero contribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs<'a> {
    pub project_count: u32,
    pub portfolio_links: &'a [String],
    pub resume_text: Option<&'a str>,
}

impl<'a> From<&'a FreelancerRow> for ScoreInputs<'a> {
    fn from(row: &'a FreelancerRow) -> Self {
        ScoreInputs {
            project_count: row.project_count.max(0) as u32,
            portfolio_links: &row.portfolio_links,
            resume_text: row.resume_text.as_deref(),
        }
    }
}

/// Per-component view of the aggregate score, surfaced on the passport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillScoreBreakdown {
    pub project_score: u32,
    pub portfolio_score: u32,
    pub resume_score: u32,
}

impl SkillScoreBreakdown {
    pub fn total(&self) -> u32 {
        // 40 + 30 + 30 bounds the sum at 100 by construction; the clamp
        // guards the invariant if any cap is ever retuned.
        (self.project_score + self.portfolio_score + self.resume_score).min(100)
    }
}

pub fn compute_breakdown(inputs: &ScoreInputs) -> SkillScoreBreakdown {
    let project_score = (inputs.project_count * PROJECT_POINTS_PER).min(PROJECT_CAP);
    let portfolio_score =
        (inputs.portfolio_links.len() as u32 * PORTFOLIO_POINTS_PER).min(PORTFOLIO_CAP);
    let resume_score = if has_resume(inputs.resume_text) {
        RESUME_POINTS
    } else {
        0
    };

    SkillScoreBreakdown {
        project_score,
        portfolio_score,
        resume_score,
    }
}

/// The 0–100 aggregate skill score.
pub fn compute_skill_score(inputs: &ScoreInputs) -> u32 {
    compute_breakdown(inputs).total()
}

fn has_resume(resume_text: Option<&str>) -> bool {
    resume_text.is_some_and(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("https://example.com/{i}")).collect()
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        assert_eq!(compute_skill_score(&ScoreInputs::default()), 0);
    }

    #[test]
    fn test_project_component_caps_at_40() {
        let inputs = ScoreInputs {
            project_count: 9,
            ..Default::default()
        };
        let breakdown = compute_breakdown(&inputs);
        assert_eq!(breakdown.project_score, 40);
    }

    #[test]
    fn test_portfolio_component_caps_at_30() {
        let many = links(12);
        let inputs = ScoreInputs {
            portfolio_links: &many,
            ..Default::default()
        };
        assert_eq!(compute_breakdown(&inputs).portfolio_score, 30);
    }

    #[test]
    fn test_resume_component_is_flat_30() {
        let inputs = ScoreInputs {
            resume_text: Some("Ten years of embedded firmware."),
            ..Default::default()
        };
        assert_eq!(compute_breakdown(&inputs).resume_score, 30);
    }

    #[test]
    fn test_blank_resume_counts_as_absent() {
        let inputs = ScoreInputs {
            resume_text: Some("   \n\t"),
            ..Default::default()
        };
        assert_eq!(compute_breakdown(&inputs).resume_score, 0);
    }

    #[test]
    fn test_saturated_profile_scores_exactly_100() {
        // 5 projects (capped 40) + 4 links (capped 30) + resume (30) = 100.
        let four = links(4);
        let inputs = ScoreInputs {
            project_count: 5,
            portfolio_links: &four,
            resume_text: Some("resume"),
        };
        assert_eq!(compute_skill_score(&inputs), 100);
    }

    #[test]
    fn test_partial_profile_sums_components() {
        // 2 projects (20) + 1 link (10) + no resume = 30.
        let one = links(1);
        let inputs = ScoreInputs {
            project_count: 2,
            portfolio_links: &one,
            resume_text: None,
        };
        assert_eq!(compute_skill_score(&inputs), 30);
    }

    #[test]
    fn test_monotone_in_project_count() {
        let mut last = 0;
        for n in 0..8 {
            let inputs = ScoreInputs {
                project_count: n,
                ..Default::default()
            };
            let score = compute_skill_score(&inputs);
            assert!(score >= last, "score dropped at project_count={n}");
            last = score;
        }
    }

    #[test]
    fn test_monotone_in_portfolio_and_resume() {
        let fewer = links(2);
        let more = links(3);
        let base = compute_skill_score(&ScoreInputs {
            portfolio_links: &fewer,
            ..Default::default()
        });
        let with_link = compute_skill_score(&ScoreInputs {
            portfolio_links: &more,
            ..Default::default()
        });
        assert!(with_link >= base);

        let with_resume = compute_skill_score(&ScoreInputs {
            portfolio_links: &more,
            resume_text: Some("resume"),
            ..Default::default()
        });
        assert!(with_resume >= with_link);
    }

    #[test]
    fn test_score_always_bounded() {
        let many = links(50);
        let inputs = ScoreInputs {
            project_count: 1000,
            portfolio_links: &many,
            resume_text: Some("resume"),
        };
        let score = compute_skill_score(&inputs);
        assert!(score <= 100);
    }
}
