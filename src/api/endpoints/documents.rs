//! Document analysis endpoints.
//!
//! `POST /api/documents/analyze` scans text the front-end already holds.
//! `POST /api/documents/upload` receives a file as base64 (raw or data
//! URL), runs format detection and text extraction, then the same scan.

use axum::extract::State;
use axum::Json;
use base64::Engine;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::extract::ApiJson;
use crate::api::types::ApiContext;
use crate::pipeline::extraction::{analyze_text, analyze_upload, DocumentAnalysis};
use crate::pipeline::import::check_size;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct UploadRequest {
    pub file_name: String,
    /// Base64 data URL (e.g., `data:text/plain;base64,...`) or raw base64.
    pub data: String,
}

/// `POST /api/documents/analyze`
pub async fn analyze(
    State(ctx): State<ApiContext>,
    ApiJson(payload): ApiJson<AnalyzeRequest>,
) -> Result<Json<DocumentAnalysis>, ApiError> {
    check_size(payload.text.len() as u64, ctx.max_upload_bytes)
        .map_err(|e| ApiError::PayloadTooLarge(e.to_string()))?;

    Ok(Json(analyze_text(&ctx.kb, &payload.text)))
}

/// `POST /api/documents/upload`
pub async fn upload(
    State(ctx): State<ApiContext>,
    ApiJson(payload): ApiJson<UploadRequest>,
) -> Result<Json<DocumentAnalysis>, ApiError> {
    if payload.file_name.trim().is_empty() {
        return Err(ApiError::BadRequest("file_name is required".into()));
    }

    let bytes = decode_data_url(&payload.data)
        .map_err(|e| ApiError::BadRequest(format!("Invalid file data: {e}")))?;

    let analysis = analyze_upload(&ctx.kb, &payload.file_name, &bytes, ctx.max_upload_bytes)?;
    Ok(Json(analysis))
}

/// Decode a base64 data URL to raw bytes.
///
/// Handles both `data:text/plain;base64,...` and raw base64 strings.
fn decode_data_url(data_url: &str) -> Result<Vec<u8>, String> {
    let base64_data = match data_url.find(',') {
        Some(idx) => &data_url[idx + 1..],
        None => data_url,
    };

    base64::engine::general_purpose::STANDARD
        .decode(base64_data.trim())
        .map_err(|e| format!("Base64 decode failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_data_url_text() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(b"fever and cough");
        let bytes = decode_data_url(&format!("data:text/plain;base64,{encoded}")).unwrap();
        assert_eq!(bytes, b"fever and cough");
    }

    #[test]
    fn decode_data_url_raw_base64() {
        let raw = base64::engine::general_purpose::STANDARD.encode(b"hello");
        let bytes = decode_data_url(&raw).unwrap();
        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn decode_data_url_invalid_base64() {
        let result = decode_data_url("not-valid-base64!!!");
        assert!(result.is_err());
    }
}
