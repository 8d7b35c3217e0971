//! End-to-end assessment: symptoms → ranked conditions → safety screen of
//! the top condition's medicines.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::knowledge::KnowledgeBase;
use crate::models::{ConditionInfo, Prediction, SafetyStats, SafetyVerdict};
use crate::pipeline::extraction::{analyze_text, DocumentAnalysis};
use crate::prediction::match_conditions;
use crate::safety::{calculate_safety_stats, evaluate_safety};

pub const DISCLAIMER: &str =
    "This is for educational purposes only. Always consult a healthcare professional.";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentRequest {
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub current_medications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: Uuid,
    pub assessed_on: NaiveDate,
    pub symptoms: Vec<String>,
    pub allergies: Vec<String>,
    pub current_medications: Vec<String>,
    pub predictions: Vec<Prediction>,
    /// Guidance for the top-ranked condition, when one matched.
    pub primary_info: Option<ConditionInfo>,
    /// Verdicts for the top-ranked condition's medicines.
    pub safety: Vec<SafetyVerdict>,
    pub stats: SafetyStats,
    pub disclaimer: String,
}

impl Assessment {
    pub fn primary(&self) -> Option<&Prediction> {
        self.predictions.first()
    }

    pub fn safe_medicines(&self) -> impl Iterator<Item = &SafetyVerdict> {
        self.safety.iter().filter(|v| v.safe)
    }
}

pub fn assess(kb: &KnowledgeBase, request: AssessmentRequest, assessed_on: NaiveDate) -> Assessment {
    let predictions = match_conditions(kb, &request.symptoms);

    let (primary_info, safety) = match predictions.first() {
        Some(top) => (
            kb.condition_info(&top.name).cloned(),
            evaluate_safety(
                kb,
                &top.medicines,
                &request.allergies,
                &request.current_medications,
            ),
        ),
        None => (None, Vec::new()),
    };
    let stats = calculate_safety_stats(&safety);

    let assessment = Assessment {
        id: Uuid::new_v4(),
        assessed_on,
        symptoms: request.symptoms,
        allergies: request.allergies,
        current_medications: request.current_medications,
        predictions,
        primary_info,
        safety,
        stats,
        disclaimer: DISCLAIMER.to_string(),
    };

    tracing::info!(
        assessment_id = %assessment.id,
        symptoms = assessment.symptoms.len(),
        conditions = assessment.predictions.len(),
        primary = assessment.primary().map(|p| p.name.as_str()),
        flagged = stats.flagged,
        "Assessment complete"
    );

    assessment
}

/// Assess from document text: symptoms found in the text feed the matcher.
pub fn assess_document_text(
    kb: &KnowledgeBase,
    text: &str,
    allergies: Vec<String>,
    current_medications: Vec<String>,
    assessed_on: NaiveDate,
) -> (DocumentAnalysis, Assessment) {
    let analysis = analyze_text(kb, text);
    let request = AssessmentRequest {
        symptoms: analysis.identified_symptoms.clone(),
        allergies,
        current_medications,
    };
    let assessment = assess(kb, request, assessed_on);
    (analysis, assessment)
}
