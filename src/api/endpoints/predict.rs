//! Condition matching endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::models::Prediction;
use crate::prediction::match_conditions;

#[derive(Deserialize)]
pub struct PredictRequest {
    pub symptoms: Vec<String>,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub predictions: Vec<Prediction>,
}

/// `POST /api/predict`: ranked conditions. No matches is an empty list,
/// not an error.
pub async fn predict(
    State(ctx): State<ApiContext>,
    ApiJson(payload): ApiJson<PredictRequest>,
) -> Json<PredictResponse> {
    Json(PredictResponse {
        predictions: match_conditions(&ctx.kb, &payload.symptoms),
    })
}
