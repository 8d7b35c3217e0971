//! Condition lookups.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{ConditionInfo, ConditionRecord};

#[derive(Serialize)]
pub struct ConditionListResponse {
    pub conditions: Vec<String>,
}

#[derive(Serialize)]
pub struct ConditionResponse {
    pub condition: ConditionRecord,
    pub info: Option<ConditionInfo>,
}

/// `GET /api/conditions`: condition names in table order.
pub async fn list(State(ctx): State<ApiContext>) -> Json<ConditionListResponse> {
    Json(ConditionListResponse {
        conditions: ctx.kb.conditions().iter().map(|c| c.name.clone()).collect(),
    })
}

/// `GET /api/conditions/:name`: record plus guidance, case-insensitive.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(name): Path<String>,
) -> Result<Json<ConditionResponse>, ApiError> {
    let condition = ctx
        .kb
        .condition(&name)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("Condition not found: {name}")))?;
    let info = ctx.kb.condition_info(&condition.name).cloned();

    Ok(Json(ConditionResponse { condition, info }))
}
