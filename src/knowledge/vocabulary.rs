//! Term lists used to scan free text, compiled once into case-insensitive
//! word-boundary matchers.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::KeywordCategory;

/// The five raw term lists, as stored in a knowledge file.
/// Missing lists deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyLists {
    pub symptoms: Vec<String>,
    pub diseases: Vec<String>,
    pub medications: Vec<String>,
    pub tests: Vec<String>,
    pub vitals: Vec<String>,
}

impl VocabularyLists {
    /// Lists paired with their category, in scan order.
    pub fn by_category(&self) -> [(KeywordCategory, &[String]); 5] {
        [
            (KeywordCategory::Symptom, &self.symptoms),
            (KeywordCategory::Disease, &self.diseases),
            (KeywordCategory::Medication, &self.medications),
            (KeywordCategory::Test, &self.tests),
            (KeywordCategory::Vital, &self.vitals),
        ]
    }
}

/// One vocabulary term with its compiled pattern.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    pub term: String,
    pub category: KeywordCategory,
    pub regex: Regex,
}

#[derive(Debug, Clone)]
pub struct Vocabulary {
    lists: VocabularyLists,
    matchers: Vec<TermMatcher>,
}

impl Vocabulary {
    pub fn compile(lists: VocabularyLists) -> Result<Self, regex::Error> {
        let mut matchers = Vec::new();
        for (category, terms) in lists.by_category() {
            for term in terms {
                matchers.push(TermMatcher {
                    term: term.clone(),
                    category,
                    regex: Regex::new(&term_pattern(term))?,
                });
            }
        }
        Ok(Self { lists, matchers })
    }

    pub fn lists(&self) -> &VocabularyLists {
        &self.lists
    }

    pub fn matchers(&self) -> &[TermMatcher] {
        &self.matchers
    }

    pub fn terms(&self, category: KeywordCategory) -> &[String] {
        match category {
            KeywordCategory::Symptom => &self.lists.symptoms,
            KeywordCategory::Disease => &self.lists.diseases,
            KeywordCategory::Medication => &self.lists.medications,
            KeywordCategory::Test => &self.lists.tests,
            KeywordCategory::Vital => &self.lists.vitals,
        }
    }
}

/// Word-boundary, case-insensitive pattern. Whitespace inside a multi-word
/// term matches any run of whitespace in the text.
pub fn term_pattern(term: &str) -> String {
    let words: Vec<String> = term.split_whitespace().map(regex::escape).collect();
    format!(r"(?i)\b{}\b", words.join(r"\s+"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> VocabularyLists {
        VocabularyLists {
            symptoms: vec!["fever".into(), "shortness of breath".into()],
            diseases: vec!["flu".into()],
            medications: vec![],
            tests: vec!["x-ray".into()],
            vitals: vec!["bp".into()],
        }
    }

    #[test]
    fn multi_word_term_matches_flexible_whitespace() {
        let re = Regex::new(&term_pattern("shortness of breath")).unwrap();
        assert!(re.is_match("Shortness   of\nbreath since Monday"));
    }

    #[test]
    fn term_respects_word_boundaries() {
        let re = Regex::new(&term_pattern("flu")).unwrap();
        assert!(re.is_match("had the flu"));
        assert!(!re.is_match("fluid intake"));
    }

    #[test]
    fn special_characters_are_escaped() {
        let re = Regex::new(&term_pattern("x-ray")).unwrap();
        assert!(re.is_match("Chest X-ray clear"));
        assert!(!re.is_match("xaray"));
    }

    #[test]
    fn compile_keeps_category_order() {
        let vocab = Vocabulary::compile(lists()).unwrap();
        let cats: Vec<_> = vocab.matchers().iter().map(|m| m.category).collect();
        assert_eq!(
            cats,
            vec![
                KeywordCategory::Symptom,
                KeywordCategory::Symptom,
                KeywordCategory::Disease,
                KeywordCategory::Test,
                KeywordCategory::Vital,
            ]
        );
        assert_eq!(vocab.terms(KeywordCategory::Test), &["x-ray".to_string()]);
    }
}
