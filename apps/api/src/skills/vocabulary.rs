//! Skill vocabulary — the versioned dictionary behind all text scanning.
//!
//! The dictionary is external configuration, not code: set `SKILL_VOCAB_PATH`
//! to a JSON file of the form
//! `{ "version": 3, "skills": [{ "pattern": "nodejs", "canonical": "node.js" }] }`
//! to extend or replace the table without a rebuild. When unset, the
//! compiled-in default table below is used. Patterns are compiled to
//! case-insensitive whole-word regexes once, at load time.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// On-disk vocabulary format.
#[derive(Debug, Deserialize)]
struct VocabularyFile {
    version: u32,
    skills: Vec<VocabularyEntry>,
}

#[derive(Debug, Deserialize)]
struct VocabularyEntry {
    pattern: String,
    canonical: String,
}

/// A single compiled term: the canonical skill name plus its text matcher.
pub struct SkillTerm {
    pub canonical: String,
    pub matcher: Regex,
}

/// The compiled vocabulary handed to the extraction and passport code.
pub struct SkillVocabulary {
    version: u32,
    terms: Vec<SkillTerm>,
}

impl SkillVocabulary {
    /// Loads and compiles a vocabulary file.
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary at '{path}'"))?;
        let file: VocabularyFile = serde_json::from_str(&raw)
            .with_context(|| format!("Skill vocabulary at '{path}' is not valid JSON"))?;
        Self::compile(
            file.version,
            file.skills
                .into_iter()
                .map(|e| (e.pattern, e.canonical))
                .collect(),
        )
    }

    /// Compiles the default table shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::compile(
            1,
            DEFAULT_TERMS
                .iter()
                .map(|t| (t.to_string(), t.to_string()))
                .collect(),
        )
    }

    fn compile(version: u32, entries: Vec<(String, String)>) -> Result<Self> {
        let mut terms = Vec::with_capacity(entries.len());
        for (pattern, canonical) in entries {
            let matcher = word_regex(&pattern)
                .with_context(|| format!("Invalid vocabulary pattern '{pattern}'"))?;
            terms.push(SkillTerm { canonical, matcher });
        }
        Ok(SkillVocabulary { version, terms })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> &[SkillTerm] {
        &self.terms
    }
}

/// Builds a case-insensitive whole-word matcher for a vocabulary pattern.
/// A `\b` anchor is only meaningful next to a word character, so terms with
/// punctuation at an edge (`c++`, `.net`) get the anchor on the other side only.
fn word_regex(pattern: &str) -> Result<Regex> {
    let mut source = String::with_capacity(pattern.len() + 4);
    if pattern.chars().next().is_some_and(is_word_char) {
        source.push_str(r"\b");
    }
    source.push_str(&regex::escape(pattern));
    if pattern.chars().last().is_some_and(is_word_char) {
        source.push_str(r"\b");
    }
    Ok(RegexBuilder::new(&source).case_insensitive(true).build()?)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Default vocabulary, version 1. Lowercase canonical names; extraction output
/// feeds case-insensitive comparisons throughout.
const DEFAULT_TERMS: &[&str] = &[
    // Programming languages
    "javascript",
    "python",
    "java",
    "c++",
    "c#",
    "php",
    "ruby",
    "go",
    "rust",
    "swift",
    "kotlin",
    "typescript",
    "scala",
    "perl",
    "dart",
    // Web technologies
    "html",
    "css",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "laravel",
    "rails",
    "next.js",
    "svelte",
    // Mobile
    "android",
    "ios",
    "react native",
    "flutter",
    "xamarin",
    "ionic",
    // Databases
    "mongodb",
    "mysql",
    "postgresql",
    "oracle",
    "redis",
    "cassandra",
    "dynamodb",
    "firebase",
    "sqlite",
    "mariadb",
    // Cloud & DevOps
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "jenkins",
    "git",
    "ci/cd",
    "terraform",
    "ansible",
    "linux",
    "nginx",
    // AI / ML
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "nlp",
    "computer vision",
    "data science",
    "pandas",
    "numpy",
    // Design, marketing, other
    "rest api",
    "graphql",
    "microservices",
    "agile",
    "scrum",
    "ui/ux",
    "figma",
    "photoshop",
    "illustrator",
    "seo",
    "digital marketing",
    "content writing",
];
