//! Shared state for the API layer.

use std::sync::Arc;

use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::knowledge::KnowledgeBase;

/// State handed to every route. Cheap to clone.
#[derive(Clone)]
pub struct ApiContext {
    pub kb: Arc<KnowledgeBase>,
    pub max_upload_bytes: u64,
}

impl ApiContext {
    pub fn new(kb: Arc<KnowledgeBase>, max_upload_bytes: u64) -> Self {
        Self {
            kb,
            max_upload_bytes,
        }
    }

    /// Context over the builtin tables with the default upload limit.
    pub fn builtin() -> Self {
        Self::new(
            Arc::new(KnowledgeBase::builtin().clone()),
            DEFAULT_MAX_UPLOAD_BYTES,
        )
    }
}
