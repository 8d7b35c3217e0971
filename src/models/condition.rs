use serde::{Deserialize, Serialize};

/// A named condition in the knowledge base with its canonical symptoms and
/// the medicines usually suggested for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionRecord {
    pub name: String,
    pub symptoms: Vec<String>,
    pub medicines: Vec<String>,
}

/// Patient-facing guidance shown alongside a predicted condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionInfo {
    pub description: String,
    #[serde(default)]
    pub diet: Vec<String>,
    #[serde(default)]
    pub precautions: Vec<String>,
}

/// One scored condition. `confidence` is a 0-100 match percentage,
/// not a probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub name: String,
    pub confidence: u8,
    pub symptoms: Vec<String>,
    pub medicines: Vec<String>,
}
