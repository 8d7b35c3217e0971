//! Symptom picker list.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<String>,
}

/// `GET /api/symptoms`: every canonical symptom, sorted.
pub async fn list(State(ctx): State<ApiContext>) -> Json<SymptomsResponse> {
    Json(SymptomsResponse {
        symptoms: ctx.kb.all_symptoms(),
    })
}
