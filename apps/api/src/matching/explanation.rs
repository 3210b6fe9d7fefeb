//! Reason and explanation strings for ranked matches.
//!
//! Purely presentational: nothing here feeds back into scores or ordering.

use crate::matching::engine::{Candidate, JobPosting};
use crate::matching::rule_based::LocationFit;

/// At most this many matched skills are named in the skills reason.
const MAX_REASON_SKILLS: usize = 3;

/// A rate outside the posted range still earns a "close to budget" mention
/// when the budget component stays above this.
const CLOSE_BUDGET_MIN_POINTS: f64 = 15.0;

/// Stored skill scores above this get called out.
const HIGH_SKILL_SCORE: f64 = 70.0;

/// Builds the reason list for one retained candidate. Each component that
/// contributed non-trivially gets one line.
pub(crate) fn build_reasons(
    job: &JobPosting,
    candidate: &Candidate,
    matched_skills: &[String],
    budget_points: f64,
    location: &LocationFit,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if !matched_skills.is_empty() {
        reasons.push(format!(
            "{}/{} skills match: {}",
            matched_skills.len(),
            job.required_skills.len(),
            matched_skills
                .iter()
                .take(MAX_REASON_SKILLS)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if let Some(rate) = candidate.hourly_rate {
        if job.budget.contains(rate) {
            reasons.push(format!("Rate ₹{rate}/hr fits budget"));
        } else if budget_points > CLOSE_BUDGET_MIN_POINTS {
            reasons.push(format!("Rate ₹{rate}/hr close to budget"));
        }
    }

    match location {
        LocationFit::Exact => {
            if let Some(loc) = candidate.location.as_deref() {
                reasons.push(format!("Located in {loc}"));
            }
        }
        LocationFit::Partial => {
            if let Some(pref) = job.location_preference.as_deref() {
                reasons.push(format!("Near {pref}"));
            }
        }
        LocationFit::None => {}
    }

    if candidate.ai_skill_score > HIGH_SKILL_SCORE {
        reasons.push(format!(
            "High skill score ({}/100)",
            candidate.ai_skill_score.round() as u32
        ));
    }

    reasons
}

/// One-sentence summary: name, rounded score, joined reasons, matched skills.
pub fn build_explanation(
    name: &str,
    match_score: u32,
    reasons: &[String],
    matched_skills: &[String],
) -> String {
    let mut explanation = format!("{name} is a {match_score}% match for this job.");
    if !reasons.is_empty() {
        explanation.push_str(&format!(" Key factors: {}.", reasons.join("; ")));
    }
    if !matched_skills.is_empty() {
        explanation.push_str(&format!(" Matching skills: {}.", matched_skills.join(", ")));
    }
    explanation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::engine::BudgetRange;
    use uuid::Uuid;

    fn job() -> JobPosting {
        JobPosting {
            title: "Dashboard rebuild".to_string(),
            description: String::new(),
            required_skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
            ],
            budget: BudgetRange {
                min: 1800.0,
                max: 2200.0,
            },
            location_preference: Some("Chennai".to_string()),
        }
    }

    fn candidate() -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            skills: vec!["React".to_string(), "Node.js".to_string()],
            hourly_rate: Some(2000.0),
            location: Some("Chennai".to_string()),
            ai_skill_score: 80.0,
            rating: 4.8,
            review_count: 12,
            resume_text: None,
        }
    }

    #[test]
    fn test_all_components_produce_reasons() {
        let matched = vec!["React".to_string(), "Node.js".to_string()];
        let reasons = build_reasons(&job(), &candidate(), &matched, 30.0, &LocationFit::Exact);
        assert_eq!(reasons.len(), 4);
        assert_eq!(reasons[0], "2/3 skills match: React, Node.js");
        assert_eq!(reasons[1], "Rate ₹2000/hr fits budget");
        assert_eq!(reasons[2], "Located in Chennai");
        assert_eq!(reasons[3], "High skill score (80/100)");
    }

    #[test]
    fn test_skills_reason_names_at_most_three() {
        let matched: Vec<String> = ["React", "Node.js", "MongoDB", "Docker"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut job = job();
        job.required_skills = matched.clone();
        let reasons = build_reasons(&job, &candidate(), &matched, 0.0, &LocationFit::None);
        assert_eq!(reasons[0], "4/4 skills match: React, Node.js, MongoDB");
    }

    #[test]
    fn test_out_of_range_rate_close_to_budget() {
        let mut c = candidate();
        c.hourly_rate = Some(2400.0);
        // Component 24 > 15 but the rate is outside [1800, 2200].
        let reasons = build_reasons(&job(), &c, &[], 24.0, &LocationFit::None);
        assert!(reasons.iter().any(|r| r == "Rate ₹2400/hr close to budget"));
        assert!(!reasons.iter().any(|r| r.contains("fits budget")));
    }

    #[test]
    fn test_partial_location_reason_names_preference() {
        let mut c = candidate();
        c.location = Some("Chennai, Tamil Nadu".to_string());
        let reasons = build_reasons(&job(), &c, &[], 0.0, &LocationFit::Partial);
        assert!(reasons.iter().any(|r| r == "Near Chennai"));
    }

    #[test]
    fn test_no_reasons_for_empty_contributions() {
        let c = Candidate {
            hourly_rate: None,
            location: None,
            ai_skill_score: 0.0,
            skills: vec![],
            ..candidate()
        };
        let reasons = build_reasons(&job(), &c, &[], 0.0, &LocationFit::None);
        assert!(reasons.is_empty());
    }

    #[test]
    fn test_explanation_sentence_shape() {
        let reasons = vec![
            "2/3 skills match: React, Node.js".to_string(),
            "Located in Chennai".to_string(),
        ];
        let matched = vec!["React".to_string(), "Node.js".to_string()];
        let explanation = build_explanation("Asha", 84, &reasons, &matched);
        assert_eq!(
            explanation,
            "Asha is a 84% match for this job. \
             Key factors: 2/3 skills match: React, Node.js; Located in Chennai. \
             Matching skills: React, Node.js."
        );
    }

    #[test]
    fn test_explanation_without_reasons_stays_short() {
        let explanation = build_explanation("Ravi", 21, &[], &[]);
        assert_eq!(explanation, "Ravi is a 21% match for this job.");
    }
}
