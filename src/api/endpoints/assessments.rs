//! Assessment endpoints: the full symptom → condition → safety flow,
//! returned together with the shareable plain-text report.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::assessment::{assess, assess_document_text, Assessment, AssessmentRequest};
use crate::pipeline::extraction::DocumentAnalysis;
use crate::pipeline::import::check_size;
use crate::report::render_share_text;

#[derive(Serialize)]
pub struct AssessmentResponse {
    pub assessment: Assessment,
    pub share_text: String,
}

#[derive(Deserialize)]
pub struct DocumentAssessmentRequest {
    pub text: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub current_medications: Vec<String>,
}

#[derive(Serialize)]
pub struct DocumentAssessmentResponse {
    pub analysis: DocumentAnalysis,
    pub assessment: Assessment,
    pub share_text: String,
}

/// `POST /api/assessments`: at least one non-blank symptom is required.
pub async fn create(
    State(ctx): State<ApiContext>,
    ApiJson(payload): ApiJson<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    if payload.symptoms.iter().all(|s| s.trim().is_empty()) {
        return Err(ApiError::BadRequest("Select at least one symptom".into()));
    }

    let assessment = assess(&ctx.kb, payload, today());
    let share_text = render_share_text(&assessment);
    Ok(Json(AssessmentResponse {
        assessment,
        share_text,
    }))
}

/// `POST /api/assessments/document`: symptoms come from the document
/// text instead of the request.
pub async fn from_document(
    State(ctx): State<ApiContext>,
    ApiJson(payload): ApiJson<DocumentAssessmentRequest>,
) -> Result<Json<DocumentAssessmentResponse>, ApiError> {
    check_size(payload.text.len() as u64, ctx.max_upload_bytes)
        .map_err(|e| ApiError::PayloadTooLarge(e.to_string()))?;

    let (analysis, assessment) = assess_document_text(
        &ctx.kb,
        &payload.text,
        payload.allergies,
        payload.current_medications,
        today(),
    );
    let share_text = render_share_text(&assessment);
    Ok(Json(DocumentAssessmentResponse {
        analysis,
        assessment,
        share_text,
    }))
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
