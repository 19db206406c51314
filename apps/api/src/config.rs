use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{LlmSettings, DEFAULT_API_URL};

/// Application configuration loaded from environment variables.
/// Every variable is optional; missing ones fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    /// When set, every route except `GET /` requires a matching `x-astro-secret` header.
    pub shared_secret: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub data_dir: PathBuf,
    pub llm_api_url: String,
    pub llm_timeout: Duration,
    pub polish_deadline: Duration,
    pub stream_fallback: Duration,
    pub fonts: FontPaths,
    pub app_name: String,
}

/// Optional TTF overrides. Unset slots use the builtin Helvetica family.
#[derive(Debug, Clone, Default)]
pub struct FontPaths {
    pub en_regular: Option<PathBuf>,
    pub en_bold: Option<PathBuf>,
    pub hi_regular: Option<PathBuf>,
    pub hi_bold: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anthropic_api_key: None,
            shared_secret: None,
            port: 8080,
            rust_log: "info".to_string(),
            data_dir: PathBuf::from("data"),
            llm_api_url: DEFAULT_API_URL.to_string(),
            llm_timeout: Duration::from_secs(20),
            polish_deadline: Duration::from_secs(8),
            stream_fallback: Duration::from_secs(4),
            fonts: FontPaths::default(),
            app_name: "Astro-Baba".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            shared_secret: optional_env("ASTRO_SHARED_SECRET"),
            port: parsed_env("PORT", defaults.port)?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            data_dir: optional_env("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            llm_api_url: optional_env("LLM_API_URL").unwrap_or(defaults.llm_api_url),
            llm_timeout: secs_env("LLM_TIMEOUT_SECS", defaults.llm_timeout)?,
            polish_deadline: secs_env("POLISH_DEADLINE_SECS", defaults.polish_deadline)?,
            stream_fallback: secs_env("STREAM_FALLBACK_SECS", defaults.stream_fallback)?,
            fonts: FontPaths {
                en_regular: optional_env("FONT_EN_REGULAR").map(PathBuf::from),
                en_bold: optional_env("FONT_EN_BOLD").map(PathBuf::from),
                hi_regular: optional_env("FONT_HI_REGULAR").map(PathBuf::from),
                hi_bold: optional_env("FONT_HI_BOLD").map(PathBuf::from),
            },
            app_name: optional_env("APP_NAME").unwrap_or(defaults.app_name),
        })
    }

    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            api_key: self.anthropic_api_key.clone(),
            api_url: self.llm_api_url.clone(),
            timeout: self.llm_timeout,
            ..LlmSettings::default()
        }
    }

    /// Root of the file-backed daily cache.
    pub fn cache_dir(&self) -> PathBuf {
        self.data_dir.join("cache").join("daily")
    }
}

/// Non-empty, trimmed value of `key`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

fn secs_env(key: &str, default: Duration) -> Result<Duration> {
    parsed_env(key, default.as_secs()).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.polish_deadline, Duration::from_secs(8));
        assert_eq!(config.stream_fallback, Duration::from_secs(4));
        assert_eq!(config.cache_dir(), PathBuf::from("data/cache/daily"));
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_llm_settings_carry_key_and_url() {
        let config = Config {
            anthropic_api_key: Some("k".to_string()),
            llm_api_url: "http://localhost:9/v1/messages".to_string(),
            ..Config::default()
        };
        let settings = config.llm_settings();
        assert_eq!(settings.api_key.as_deref(), Some("k"));
        assert_eq!(settings.api_url, "http://localhost:9/v1/messages");
        assert_eq!(settings.timeout, Duration::from_secs(20));
    }
}
