//! Health assistant chat endpoints.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::assistant::{reply, GREETING, QUICK_QUESTIONS};

#[derive(Deserialize)]
pub struct AssistantRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct AssistantReply {
    pub reply: &'static str,
}

#[derive(Serialize)]
pub struct AssistantIntro {
    pub greeting: &'static str,
    pub quick_questions: [&'static str; 4],
}

/// `GET /api/assistant`: opening message and suggested questions.
pub async fn intro() -> Json<AssistantIntro> {
    Json(AssistantIntro {
        greeting: GREETING,
        quick_questions: QUICK_QUESTIONS,
    })
}

/// `POST /api/assistant`
pub async fn ask(
    ApiJson(payload): ApiJson<AssistantRequest>,
) -> Result<Json<AssistantReply>, ApiError> {
    if payload.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message is required".into()));
    }
    Ok(Json(AssistantReply {
        reply: reply(&payload.message),
    }))
}
