use std::sync::Arc;

use crate::config::Config;
use crate::knowledge::KnowledgeBase;

/// Shared application state.
///
/// Constructed once at startup and read-only afterwards: the knowledge base
/// is immutable, the config is fixed for the process lifetime, and the HTTP
/// client is shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub knowledge: Arc<KnowledgeBase>,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            knowledge: Arc::new(KnowledgeBase::builtin()),
            http_client: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
        })
    }
}
