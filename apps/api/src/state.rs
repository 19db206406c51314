use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cache::{DailyCache, TieredCache};
use crate::config::Config;
use crate::content::polish::PolishAdapter;
use crate::llm_client::LlmClient;
use crate::render::fonts::FontLibrary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: LlmClient,
    /// Calendar cache. Default: `TieredCache` rooted at `<DATA_DIR>/cache/daily`.
    pub cache: Arc<dyn DailyCache>,
    pub polish: Arc<PolishAdapter>,
    pub fonts: FontLibrary,
    /// Plain client for brand logo fetches.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let llm = LlmClient::new(config.llm_settings()).context("failed to build LLM client")?;
        let polish = Arc::new(PolishAdapter::new(llm.clone(), config.polish_deadline));
        let cache: Arc<dyn DailyCache> = Arc::new(TieredCache::new(config.cache_dir()));
        let fonts = FontLibrary::load(&config.fonts);
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            config,
            llm,
            cache,
            polish,
            fonts,
            http,
        })
    }
}
