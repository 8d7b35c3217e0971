//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Layers (outermost → innermost): CORS → body limit → request logging.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Extra room over the upload limit for base64 inflation and JSON framing.
const BODY_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the API router.
///
/// Handlers use `State<ApiContext>` (provided via `with_state`).
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    let body_limit = body_limit(ctx.max_upload_bytes);

    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/symptoms", get(endpoints::symptoms::list))
        .route("/conditions", get(endpoints::conditions::list))
        .route("/conditions/:name", get(endpoints::conditions::detail))
        .route("/predict", post(endpoints::predict::predict))
        .route("/safety", post(endpoints::safety::evaluate))
        .route("/documents/analyze", post(endpoints::documents::analyze))
        .route("/documents/upload", post(endpoints::documents::upload))
        .route(
            "/assistant",
            get(endpoints::assistant::intro).post(endpoints::assistant::ask),
        )
        .route("/assessments", post(endpoints::assessments::create))
        .route(
            "/assessments/document",
            post(endpoints::assessments::from_document),
        )
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::audit::log_request))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive());

    Router::new().nest("/api", routes)
}

/// Request body cap derived from the upload limit: base64 costs 4 bytes per 3.
fn body_limit(max_upload_bytes: u64) -> usize {
    let encoded = max_upload_bytes.saturating_mul(4) / 3;
    usize::try_from(encoded)
        .unwrap_or(usize::MAX)
        .saturating_add(BODY_OVERHEAD_BYTES)
}
