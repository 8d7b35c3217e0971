use serde::{Deserialize, Serialize};

/// Price used when a medicine has no entry in the price table.
pub const DEFAULT_UNIT_PRICE: f64 = 10.00;

/// Category label used when a medicine has no category entry.
pub const DEFAULT_CATEGORY: &str = "Medication";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicineRecord {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    /// Drugs this medicine is known to conflict with. Directional: only
    /// consulted when this medicine is the candidate being screened.
    #[serde(default)]
    pub interacts_with: Vec<String>,
}

impl MedicineRecord {
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn price(&self) -> f64 {
        self.unit_price.unwrap_or(DEFAULT_UNIT_PRICE)
    }
}

/// Why a medicine was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SafetyConcern {
    /// A declared allergy overlaps the medicine name.
    Allergy { allergen: String },
    /// A current medication contains a known interaction partner.
    Interaction { partner: String },
}

/// Screening outcome for one candidate medicine.
///
/// `safe == true` only means no allergy or interaction string matched.
/// There is no notion of dose or severity here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyVerdict {
    pub medicine: String,
    pub safe: bool,
    pub reason: String,
    pub concern: Option<SafetyConcern>,
    pub price: f64,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyStats {
    pub safe: usize,
    #[serde(rename = "unsafe")]
    pub flagged: usize,
    pub total: usize,
}
