//! Condition, medicine and vocabulary tables.
//!
//! The tables are validated and compiled once, then only read. Callers share
//! a `KnowledgeBase` by reference (`builtin()` is a process-wide static) or
//! through an `Arc` when a knowledge file is configured.

pub mod builtin;
pub mod vocabulary;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ConditionInfo, ConditionRecord, MedicineRecord};
pub use vocabulary::{TermMatcher, Vocabulary, VocabularyLists};

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge file {0}: {1}")]
    Load(String, String),

    #[error("Failed to parse knowledge file {0}: {1}")]
    Parse(String, String),

    #[error("Knowledge base has no conditions")]
    NoConditions,

    #[error("Knowledge base has no medicines")]
    NoMedicines,

    #[error("Duplicate condition: {0}")]
    DuplicateCondition(String),

    #[error("Blank vocabulary term in {0} list")]
    BlankTerm(&'static str),

    #[error("Vocabulary term '{0}' appears more than once")]
    OverlappingTerm(String),

    #[error("Invalid vocabulary pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Serialized shape of the knowledge base (builtin or JSON file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeTables {
    pub conditions: Vec<ConditionRecord>,
    #[serde(default)]
    pub condition_info: HashMap<String, ConditionInfo>,
    pub medicines: Vec<MedicineRecord>,
    pub vocabulary: VocabularyLists,
}

#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    conditions: Vec<ConditionRecord>,
    condition_info: HashMap<String, ConditionInfo>,
    medicines: Vec<MedicineRecord>,
    medicine_index: HashMap<String, usize>,
    vocabulary: Vocabulary,
}

static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(|| {
    KnowledgeBase::from_tables(builtin::tables()).expect("Invalid builtin knowledge tables")
});

impl KnowledgeBase {
    /// The tables compiled into the binary.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    /// Load tables from a JSON file.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| KnowledgeError::Load(path.display().to_string(), e.to_string()))?;
        let tables: KnowledgeTables = serde_json::from_str(&json)
            .map_err(|e| KnowledgeError::Parse(path.display().to_string(), e.to_string()))?;
        let kb = Self::from_tables(tables)?;
        tracing::info!(
            path = %path.display(),
            conditions = kb.conditions.len(),
            medicines = kb.medicines.len(),
            terms = kb.vocabulary.matchers().len(),
            "Knowledge base loaded"
        );
        Ok(kb)
    }

    pub fn from_tables(tables: KnowledgeTables) -> Result<Self, KnowledgeError> {
        if tables.conditions.is_empty() {
            return Err(KnowledgeError::NoConditions);
        }
        if tables.medicines.is_empty() {
            return Err(KnowledgeError::NoMedicines);
        }

        let mut names = HashSet::new();
        for condition in &tables.conditions {
            if !names.insert(condition.name.to_lowercase()) {
                return Err(KnowledgeError::DuplicateCondition(condition.name.clone()));
            }
        }

        validate_vocabulary(&tables.vocabulary)?;

        let condition_info = tables
            .condition_info
            .into_iter()
            .map(|(name, info)| (name.to_lowercase(), info))
            .collect();

        // First entry wins if a medicine is listed twice.
        let mut medicine_index = HashMap::new();
        for (i, med) in tables.medicines.iter().enumerate() {
            medicine_index.entry(med.name.to_lowercase()).or_insert(i);
        }

        Ok(Self {
            conditions: tables.conditions,
            condition_info,
            medicines: tables.medicines,
            medicine_index,
            vocabulary: Vocabulary::compile(tables.vocabulary)?,
        })
    }

    pub fn conditions(&self) -> &[ConditionRecord] {
        &self.conditions
    }

    pub fn medicines(&self) -> &[MedicineRecord] {
        &self.medicines
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn condition(&self, name: &str) -> Option<&ConditionRecord> {
        let lower = name.trim().to_lowercase();
        self.conditions
            .iter()
            .find(|c| c.name.to_lowercase() == lower)
    }

    pub fn condition_info(&self, name: &str) -> Option<&ConditionInfo> {
        self.condition_info.get(&name.trim().to_lowercase())
    }

    pub fn medicine(&self, name: &str) -> Option<&MedicineRecord> {
        self.medicine_index
            .get(&name.trim().to_lowercase())
            .map(|&i| &self.medicines[i])
    }

    /// Every canonical symptom across all conditions, sorted and de-duplicated.
    pub fn all_symptoms(&self) -> Vec<String> {
        let mut symptoms: Vec<String> = self
            .conditions
            .iter()
            .flat_map(|c| c.symptoms.iter().cloned())
            .collect();
        symptoms.sort();
        symptoms.dedup();
        symptoms
    }
}

fn validate_vocabulary(lists: &VocabularyLists) -> Result<(), KnowledgeError> {
    let mut seen = HashSet::new();
    for (category, terms) in lists.by_category() {
        for term in terms {
            if term.trim().is_empty() {
                return Err(KnowledgeError::BlankTerm(category.as_str()));
            }
            if !seen.insert(term.trim().to_lowercase()) {
                return Err(KnowledgeError::OverlappingTerm(term.clone()));
            }
        }
    }
    Ok(())
}
