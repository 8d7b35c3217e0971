use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ExtractedKeyword, VitalKind};
use crate::pipeline::import::FormatDetection;

/// Structured vital readings keyed by kind. Ordered for stable summaries.
pub type VitalSigns = BTreeMap<VitalKind, String>;

/// Everything found in one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub keywords: Vec<ExtractedKeyword>,
    pub identified_symptoms: Vec<String>,
    pub identified_medications: Vec<String>,
    pub identified_diseases: Vec<String>,
    pub test_results: Vec<String>,
    pub vital_signs: VitalSigns,
    pub summary: String,
    /// Set when the analysis came from a file rather than a text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<DocumentSource>,
}

/// The file an analysis was produced from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSource {
    pub file_name: String,
    pub format: FormatDetection,
    pub extracted_text: String,
}
