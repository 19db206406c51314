//! Polish/Translate adapter: ordered provider chains over the LLM client.
//!
//! Each chain tries its providers in order; the first non-empty `Ok` wins and the
//! unmodified input is the final fallback. Nothing here returns an error to callers.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::content::locale::Lang;
use crate::content::prompts::{polish_prompt, translate_prompt, POLISH_SYSTEM, TRANSLATE_SYSTEM};
use crate::content::tables::Planet;
use crate::llm_client::prompts::{with_fidelity, PLAIN_TEXT_SYSTEM};
use crate::llm_client::{strip_code_fences, LlmClient, LlmError};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider not configured")]
    Unconfigured,

    #[error("provider does not handle {0}")]
    NotApplicable(Lang),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// One step in a polish or translate chain.
#[async_trait]
pub trait TextProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn provide(&self, text: &str, lang: Lang) -> Result<String, ProviderError>;
}

/// Providers tried in order until one produces non-empty text.
pub struct ProviderChain {
    label: &'static str,
    providers: Vec<Box<dyn TextProvider>>,
}

impl ProviderChain {
    pub fn new(label: &'static str, providers: Vec<Box<dyn TextProvider>>) -> Self {
        Self { label, providers }
    }

    pub async fn run(&self, text: &str, lang: Lang) -> String {
        for provider in &self.providers {
            match provider.provide(text, lang).await {
                Ok(out) if !out.trim().is_empty() => {
                    debug!(chain = self.label, provider = provider.name(), "provider succeeded");
                    return out;
                }
                Ok(_) => {
                    warn!(chain = self.label, provider = provider.name(), "provider returned empty text");
                }
                Err(ProviderError::Llm(LlmError::Unconfigured)) | Err(ProviderError::Unconfigured) => {
                    debug!(chain = self.label, provider = provider.name(), "provider not configured");
                }
                Err(ProviderError::NotApplicable(_)) => {}
                Err(e) => {
                    warn!(chain = self.label, provider = provider.name(), error = %e, "provider failed");
                }
            }
        }
        text.to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Providers
// ────────────────────────────────────────────────────────────────────────────

/// Rewrites the draft in its own language.
pub struct LlmPolish {
    llm: LlmClient,
}

#[async_trait]
impl TextProvider for LlmPolish {
    fn name(&self) -> &'static str {
        "llm-polish"
    }

    async fn provide(&self, text: &str, lang: Lang) -> Result<String, ProviderError> {
        if !self.llm.is_configured() {
            return Err(ProviderError::Unconfigured);
        }
        let system = format!(
            "{POLISH_SYSTEM} Respond in {}.\n{PLAIN_TEXT_SYSTEM}",
            language_name(lang)
        );
        let out = self
            .llm
            .complete(&polish_prompt(text), &with_fidelity(&system))
            .await?;
        Ok(match lang {
            Lang::Hi => cleanup_hindi(&out),
            Lang::En => out,
        })
    }
}

/// Translates into the target language. English targets are passed through.
pub struct LlmTranslate {
    llm: LlmClient,
}

#[async_trait]
impl TextProvider for LlmTranslate {
    fn name(&self) -> &'static str {
        "llm-translate"
    }

    async fn provide(&self, text: &str, lang: Lang) -> Result<String, ProviderError> {
        if lang == Lang::En {
            return Err(ProviderError::NotApplicable(lang));
        }
        if !self.llm.is_configured() {
            return Err(ProviderError::Unconfigured);
        }
        let system = format!("{TRANSLATE_SYSTEM}\n{PLAIN_TEXT_SYSTEM}");
        let out = self
            .llm
            .complete(&translate_prompt(text), &with_fidelity(&system))
            .await?;
        Ok(cleanup_hindi(&out))
    }
}

/// Offline term substitution for Hindi targets.
pub struct Glossary;

#[async_trait]
impl TextProvider for Glossary {
    fn name(&self) -> &'static str {
        "glossary"
    }

    async fn provide(&self, text: &str, lang: Lang) -> Result<String, ProviderError> {
        match lang {
            Lang::Hi => Ok(apply_glossary(text)),
            Lang::En => Err(ProviderError::NotApplicable(lang)),
        }
    }
}

fn language_name(lang: Lang) -> &'static str {
    match lang {
        Lang::En => "English",
        Lang::Hi => "Hindi written in Devanagari",
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Hindi cleanup & glossary
// ────────────────────────────────────────────────────────────────────────────

static WRAPPING_QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)^\s*["“”'](.*)["“”']\s*$"#).unwrap());

/// Transliteration leaks and their Devanagari forms.
static HINDI_FIXES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\brahu\s*kaal(am)?\b", "राहु काल"),
        (r"(?i)\bgulika\s*kaal(am)?\b", "गुलिक काल"),
        (r"(?i)\byamagan?da(m)?\b", "यमगंड"),
        (r"(?i)\babhijit\b", "अभिजीत"),
        (r"\bOm\b", "ॐ"),
        (r"।\s*।", "।"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Fixed substitutions applied to LLM Hindi output.
pub fn cleanup_hindi(text: &str) -> String {
    let mut out = strip_code_fences(text).to_string();
    if let Some(caps) = WRAPPING_QUOTES.captures(&out) {
        out = caps[1].to_string();
    }
    for (re, replacement) in HINDI_FIXES.iter() {
        out = re.replace_all(&out, *replacement).into_owned();
    }
    out.trim().to_string()
}

static GLOSSARY: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    let en = &Lang::En.resources().labels;
    let hi = &Lang::Hi.resources().labels;
    let mut terms: Vec<(String, String)> = vec![
        (en.rahu_kaal.to_string(), hi.rahu_kaal.to_string()),
        (en.yamaganda.to_string(), hi.yamaganda.to_string()),
        (en.gulika_kaal.to_string(), hi.gulika_kaal.to_string()),
        (en.abhijit_muhurat.to_string(), hi.abhijit_muhurat.to_string()),
        (en.remedy.to_string(), hi.remedy.to_string()),
        (en.lucky_color.to_string(), hi.lucky_color.to_string()),
        (en.lucky_number.to_string(), hi.lucky_number.to_string()),
        (en.primary_gem.to_string(), hi.primary_gem.to_string()),
        (en.seed_mantra.to_string(), hi.seed_mantra.to_string()),
    ];
    for planet in Planet::ALL {
        terms.push((
            planet.name(Lang::En).to_string(),
            planet.name(Lang::Hi).to_string(),
        ));
    }
    terms.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    terms
        .into_iter()
        .filter_map(|(en, hi)| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(&en)))
                .ok()
                .map(|re| (re, hi))
        })
        .collect()
});

/// Replaces known English astrology terms with their Hindi labels.
pub fn apply_glossary(text: &str) -> String {
    GLOSSARY.iter().fold(text.to_string(), |acc, (re, hi)| {
        re.replace_all(&acc, hi.as_str()).into_owned()
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Adapter
// ────────────────────────────────────────────────────────────────────────────

/// The three chains used by the routes, each bounded by a deadline.
pub struct PolishAdapter {
    polish: ProviderChain,
    translate: ProviderChain,
    glossary_translate: ProviderChain,
    deadline: Duration,
}

impl PolishAdapter {
    pub fn new(llm: LlmClient, deadline: Duration) -> Self {
        Self {
            polish: ProviderChain::new("polish", vec![Box::new(LlmPolish { llm: llm.clone() })]),
            translate: ProviderChain::new(
                "translate",
                vec![Box::new(LlmTranslate { llm: llm.clone() })],
            ),
            glossary_translate: ProviderChain::new(
                "translate-glossary",
                vec![Box::new(LlmTranslate { llm }), Box::new(Glossary)],
            ),
            deadline,
        }
    }

    pub async fn polish(&self, text: &str, lang: Lang) -> String {
        self.bounded(&self.polish, text, lang).await
    }

    pub async fn translate(&self, text: &str, target: Lang) -> String {
        self.bounded(&self.translate, text, target).await
    }

    pub async fn translate_with_glossary(&self, text: &str, target: Lang) -> String {
        self.bounded(&self.glossary_translate, text, target).await
    }

    async fn bounded(&self, chain: &ProviderChain, text: &str, lang: Lang) -> String {
        match tokio::time::timeout(self.deadline, chain.run(text, lang)).await {
            Ok(out) => out,
            Err(_) => {
                warn!(
                    chain = chain.label,
                    deadline_ms = self.deadline.as_millis() as u64,
                    "chain missed its deadline, using input"
                );
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmSettings;
    use httpmock::prelude::*;
    use serde_json::json;

    fn llm_for(server: &MockServer) -> LlmClient {
        LlmClient::new(LlmSettings {
            api_key: Some("test-key".to_string()),
            api_url: server.url("/v1/messages"),
            timeout: Duration::from_secs(5),
            max_attempts: 1,
        })
        .unwrap()
    }

    fn reply(text: &str) -> serde_json::Value {
        json!({
            "content": [{"type": "text", "text": text}],
            "usage": {"input_tokens": 1, "output_tokens": 1}
        })
    }

    struct Fixed(Result<&'static str, ()>);

    #[async_trait]
    impl TextProvider for Fixed {
        fn name(&self) -> &'static str {
            "fixed"
        }
        async fn provide(&self, _text: &str, _lang: Lang) -> Result<String, ProviderError> {
            self.0.map(str::to_string).map_err(|_| ProviderError::Unconfigured)
        }
    }

    #[tokio::test]
    async fn test_chain_first_non_empty_wins() {
        let chain = ProviderChain::new(
            "test",
            vec![
                Box::new(Fixed(Err(()))),
                Box::new(Fixed(Ok("   "))),
                Box::new(Fixed(Ok("second"))),
                Box::new(Fixed(Ok("third"))),
            ],
        );
        assert_eq!(chain.run("input", Lang::En).await, "second");
    }

    #[tokio::test]
    async fn test_chain_falls_back_to_input() {
        let chain = ProviderChain::new("test", vec![Box::new(Fixed(Err(())))]);
        assert_eq!(chain.run("input", Lang::En).await, "input");
    }

    #[tokio::test]
    async fn test_polish_without_key_returns_input() {
        let adapter = PolishAdapter::new(
            LlmClient::new(LlmSettings::default()).unwrap(),
            Duration::from_secs(1),
        );
        assert_eq!(adapter.polish("draft text", Lang::En).await, "draft text");
        assert_eq!(adapter.translate("draft text", Lang::Hi).await, "draft text");
    }

    #[tokio::test]
    async fn test_upstream_500_returns_input_unchanged() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(500).body("boom");
            })
            .await;

        let adapter = PolishAdapter::new(llm_for(&server), Duration::from_secs(5));
        assert_eq!(adapter.polish("**Leo** draft", Lang::En).await, "**Leo** draft");
        assert_eq!(adapter.translate("Good day", Lang::Hi).await, "Good day");
    }

    #[tokio::test]
    async fn test_polish_uses_llm_text() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200).json_body(reply("A brighter draft"));
            })
            .await;

        let adapter = PolishAdapter::new(llm_for(&server), Duration::from_secs(5));
        assert_eq!(adapter.polish("draft", Lang::En).await, "A brighter draft");
    }

    #[tokio::test]
    async fn test_slow_upstream_hits_deadline() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200)
                    .delay(Duration::from_secs(3))
                    .json_body(reply("too late"));
            })
            .await;

        let adapter = PolishAdapter::new(llm_for(&server), Duration::from_millis(200));
        assert_eq!(adapter.polish("draft", Lang::En).await, "draft");
    }

    #[tokio::test]
    async fn test_translate_to_english_is_passthrough() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200).json_body(reply("should not be used"));
            })
            .await;

        let adapter = PolishAdapter::new(llm_for(&server), Duration::from_secs(5));
        assert_eq!(adapter.translate("Hello", Lang::En).await, "Hello");
    }

    #[tokio::test]
    async fn test_glossary_fallback_when_llm_missing() {
        let adapter = PolishAdapter::new(
            LlmClient::new(LlmSettings::default()).unwrap(),
            Duration::from_secs(1),
        );
        let out = adapter
            .translate_with_glossary("Avoid new starts during Rahu Kaal.", Lang::Hi)
            .await;
        assert!(out.contains("राहु काल"), "{out}");
        assert!(!out.contains("Rahu Kaal"));
    }

    #[test]
    fn test_cleanup_hindi_substitutions() {
        assert_eq!(cleanup_hindi("```\nआज Rahu Kaal से बचें।।\n```"), "आज राहु काल से बचें।");
        assert_eq!(cleanup_hindi("\"Abhijit मुहूर्त शुभ है\""), "अभिजीत मुहूर्त शुभ है");
        assert_eq!(cleanup_hindi("Om नमः शिवाय"), "ॐ नमः शिवाय");
        assert_eq!(cleanup_hindi("rahukaal में धैर्य रखें"), "राहु काल में धैर्य रखें");
    }

    #[test]
    fn test_cleanup_leaves_clean_text_alone() {
        let clean = "आज का दिन शुभ है। ॐ सूर्याय नमः";
        assert_eq!(cleanup_hindi(clean), clean);
    }
}
