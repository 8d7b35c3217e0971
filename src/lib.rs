pub mod api;
pub mod assessment;
pub mod assistant;
pub mod config;
pub mod knowledge;
pub mod models;
pub mod pipeline;
pub mod prediction;
pub mod report;
pub mod safety;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{start_server, ApiContext, ServerError};
use crate::config::{AppConfig, ConfigError};
use crate::knowledge::{KnowledgeBase, KnowledgeError};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Knowledge base error: {0}")]
    Knowledge(#[from] KnowledgeError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Failed to listen for shutdown signal: {0}")]
    Signal(std::io::Error),
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Knowledge base named by the configuration, or the builtin tables.
pub fn load_knowledge(config: &AppConfig) -> Result<Arc<KnowledgeBase>, KnowledgeError> {
    match &config.knowledge_path {
        Some(path) => Ok(Arc::new(KnowledgeBase::load(path)?)),
        None => Ok(Arc::new(KnowledgeBase::builtin().clone())),
    }
}

/// Run the service until Ctrl-C.
pub async fn run() -> Result<(), StartupError> {
    init_tracing();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = AppConfig::from_env()?;
    let kb = load_knowledge(&config)?;
    tracing::info!(
        conditions = kb.conditions().len(),
        medicines = kb.medicines().len(),
        custom = config.knowledge_path.is_some(),
        "Knowledge base ready"
    );

    let ctx = ApiContext::new(kb, config.max_upload_bytes);
    let server = start_server(ctx, config.bind_addr).await?;
    tracing::info!(addr = %server.session.server_addr, "Listening");

    tokio::signal::ctrl_c().await.map_err(StartupError::Signal)?;
    server.stop().await;

    tracing::info!("{} stopped", config::APP_NAME);
    Ok(())
}
