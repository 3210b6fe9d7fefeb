//! Experimental bag-of-words ranking backend.
//!
//! Crude text similarity: Jaccard overlap between the job's words (title,
//! description, required skills) and the candidate's words (skills, resume
//! text), lowercased, words longer than three characters. No production
//! route selects this backend; it exists behind `MATCH_ENGINE=embedding` as
//! a comparison baseline for the rule-based ranker.

use std::collections::BTreeSet;

use crate::matching::engine::{Candidate, JobPosting, MatchResult};
use crate::matching::explanation;

/// Candidates at or below this similarity (0–100 scale) are dropped.
pub const MIN_SIMILARITY: f64 = 10.0;

/// Words this short carry no signal.
const MIN_WORD_CHARS: usize = 4;

/// At most this many shared terms are echoed back per match.
const MAX_SHARED_TERMS: usize = 5;

pub fn rank(job: &JobPosting, candidates: &[Candidate], limit: usize) -> Vec<MatchResult> {
    let job_text = format!(
        "{} {} {}",
        job.title,
        job.description,
        job.required_skills.join(" ")
    );
    let job_words = significant_words(&job_text);

    let mut matches: Vec<MatchResult> = Vec::new();
    for candidate in candidates {
        let candidate_text = format!(
            "{} {}",
            candidate.skills.join(" "),
            candidate.resume_text.as_deref().unwrap_or("")
        );
        let candidate_words = significant_words(&candidate_text);

        let shared: Vec<&String> = job_words.intersection(&candidate_words).collect();
        let union_size = job_words.union(&candidate_words).count();
        let similarity = if union_size > 0 {
            (shared.len() as f64 / union_size as f64) * 100.0
        } else {
            0.0
        };

        if similarity <= MIN_SIMILARITY {
            continue;
        }

        let match_score = similarity.round().min(100.0) as u32;
        // BTreeSet iteration is sorted, so the echoed terms are deterministic.
        let matched_skills: Vec<String> = shared
            .iter()
            .take(MAX_SHARED_TERMS)
            .map(|s| s.to_string())
            .collect();
        let reasons = vec![format!(
            "{} shared terms with the job posting",
            shared.len()
        )];
        let explanation = explanation::build_explanation(
            &candidate.name,
            match_score,
            &reasons,
            &matched_skills,
        );

        matches.push(MatchResult {
            freelancer: candidate.summary(),
            match_score,
            reasons,
            matched_skills,
            explanation,
        });
    }

    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches.truncate(limit);
    matches
}

fn significant_words(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() >= MIN_WORD_CHARS)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::engine::BudgetRange;
    use uuid::Uuid;

    fn job(title: &str, description: &str, skills: Vec<&str>) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            description: description.to_string(),
            required_skills: skills.into_iter().map(String::from).collect(),
            budget: BudgetRange {
                min: 100.0,
                max: 200.0,
            },
            location_preference: None,
        }
    }

    fn candidate(name: &str, skills: Vec<&str>, resume: Option<&str>) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: String::new(),
            skills: skills.into_iter().map(String::from).collect(),
            hourly_rate: None,
            location: None,
            ai_skill_score: 0.0,
            rating: 0.0,
            review_count: 0,
            resume_text: resume.map(String::from),
        }
    }

    #[test]
    fn test_short_words_ignored() {
        let words = significant_words("go js c a big word here");
        assert!(!words.contains("go"));
        assert!(!words.contains("js"));
        assert!(words.contains("word"));
        assert!(words.contains("here"));
    }

    #[test]
    fn test_overlapping_vocabulary_ranks_above_threshold() {
        let job = job(
            "React dashboard",
            "dashboard work with react components",
            vec!["react"],
        );
        let pool = vec![
            candidate("Asha", vec!["react"], Some("Built react dashboard components")),
            candidate("Ravi", vec!["welding"], Some("industrial welding certificates")),
        ];
        let results = rank(&job, &pool, 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].freelancer.name, "Asha");
        assert!(results[0].match_score > 10);
    }

    #[test]
    fn test_disjoint_text_yields_no_matches() {
        let job = job("Plumbing fixes", "bathroom pipe repair", vec![]);
        let pool = vec![candidate("Dev", vec!["react", "angular"], None)];
        assert!(rank(&job, &pool, 10).is_empty());
    }

    #[test]
    fn test_shared_terms_are_sorted_and_capped() {
        let overlap = "alpha bravo charlie delta echo foxtrot golf";
        let job = job(overlap, "", vec![]);
        let pool = vec![candidate("Asha", vec![], Some(overlap))];
        let results = rank(&job, &pool, 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].matched_skills.len(), MAX_SHARED_TERMS);
        let mut sorted = results[0].matched_skills.clone();
        sorted.sort();
        assert_eq!(results[0].matched_skills, sorted);
    }

    #[test]
    fn test_empty_pool_is_empty_result() {
        let job = job("Anything", "", vec![]);
        assert!(rank(&job, &[], 10).is_empty());
    }
}
