//! HTTP API for the browser front-end.
//!
//! Routes are nested under `/api/` behind CORS and request logging.
//! `api_router()` returns a `Router` that can be mounted on any axum
//! server instance; `server` owns the listener lifecycle.

pub mod endpoints;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::api_router;
pub use server::{start_server, ApiServer, ApiSession, ServerError};
pub use types::ApiContext;
