//! Skill extraction — whole-word vocabulary scan over free text.
//!
//! This is a substring/regex scan against the fixed vocabulary, not a
//! tokenizer: each vocabulary term is matched case-insensitively and counted,
//! and the matched canonical names come back ranked by in-text frequency.

use crate::skills::vocabulary::SkillVocabulary;

/// A matched vocabulary term with its in-text occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSkill {
    pub canonical: String,
    pub frequency: u32,
}

/// Scans `text` and returns matched terms ranked by frequency (descending,
/// ties in vocabulary order). Canonical names are deduplicated: when two
/// patterns map to the same canonical name, their counts merge.
pub fn extract_with_frequency(text: &str, vocab: &SkillVocabulary) -> Vec<ExtractedSkill> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut found: Vec<ExtractedSkill> = Vec::new();
    for term in vocab.terms() {
        let frequency = term.matcher.find_iter(text).count() as u32;
        if frequency == 0 {
            continue;
        }
        match found.iter_mut().find(|s| s.canonical == term.canonical) {
            Some(existing) => existing.frequency += frequency,
            None => found.push(ExtractedSkill {
                canonical: term.canonical.clone(),
                frequency,
            }),
        }
    }

    // Stable sort keeps vocabulary order for equal frequencies.
    found.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    found
}

/// Frequency-ranked canonical names only. This is the shape the passport and
/// preview endpoints consume.
pub fn extract_skills(text: &str, vocab: &SkillVocabulary) -> Vec<String> {
    extract_with_frequency(text, vocab)
        .into_iter()
        .map(|s| s.canonical)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> SkillVocabulary {
        SkillVocabulary::builtin().unwrap()
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_skills("", &vocab()).is_empty());
        assert!(extract_skills("   \n ", &vocab()).is_empty());
    }

    #[test]
    fn test_finds_known_terms_case_insensitively() {
        let skills = extract_skills("Senior REACT developer, strong in Python.", &vocab());
        assert!(skills.contains(&"react".to_string()));
        assert!(skills.contains(&"python".to_string()));
    }

    #[test]
    fn test_whole_word_only() {
        // "javascript" must not register as "java".
        let skills = extract_skills("I only know javascript", &vocab());
        assert!(skills.contains(&"javascript".to_string()));
        assert!(!skills.contains(&"java".to_string()));
    }

    #[test]
    fn test_ranked_by_frequency() {
        let text = "Python scripts, python services, more Python. Also some css.";
        let ranked = extract_with_frequency(text, &vocab());
        assert_eq!(ranked[0].canonical, "python");
        assert_eq!(ranked[0].frequency, 3);
        assert!(ranked.iter().any(|s| s.canonical == "css" && s.frequency == 1));
    }

    #[test]
    fn test_deduplicates_repeated_mentions() {
        let skills = extract_skills("docker docker docker", &vocab());
        assert_eq!(skills, vec!["docker".to_string()]);
    }

    #[test]
    fn test_idempotent() {
        let text = "Rust and PostgreSQL on AWS";
        assert_eq!(extract_skills(text, &vocab()), extract_skills(text, &vocab()));
    }
}
