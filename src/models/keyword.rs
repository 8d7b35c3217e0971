use serde::{Deserialize, Serialize};

use super::enums::KeywordCategory;

/// A vocabulary term found in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedKeyword {
    pub keyword: String,
    pub category: KeywordCategory,
    /// Frequency heuristic in 0-100, damped for short texts.
    pub confidence: u8,
    /// Text surrounding the first occurrence.
    pub context: String,
}
