//! Medicine safety screen endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::models::{SafetyStats, SafetyVerdict};
use crate::safety::{calculate_safety_stats, evaluate_safety};

#[derive(Deserialize)]
pub struct SafetyRequest {
    pub medicines: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub current_medications: Vec<String>,
}

#[derive(Serialize)]
pub struct SafetyResponse {
    pub verdicts: Vec<SafetyVerdict>,
    pub stats: SafetyStats,
}

/// `POST /api/safety`: one verdict per requested medicine.
pub async fn evaluate(
    State(ctx): State<ApiContext>,
    ApiJson(payload): ApiJson<SafetyRequest>,
) -> Json<SafetyResponse> {
    let verdicts = evaluate_safety(
        &ctx.kb,
        &payload.medicines,
        &payload.allergies,
        &payload.current_medications,
    );
    let stats = calculate_safety_stats(&verdicts);
    Json(SafetyResponse { verdicts, stats })
}
