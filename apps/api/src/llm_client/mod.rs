//! LLM Client: the single point of entry for all text-completion calls in Astro-Baba.
//!
//! ARCHITECTURAL RULE: No other module may call the completion API directly.
//! All LLM interactions MUST go through this module.
//!
//! The API key is optional. Without it every call fails fast with
//! `LlmError::Unconfigured` and callers fall back to deterministic text.
use std::collections::VecDeque;
use std::pin::Pin;
use std::time::Duration;

use bytes::Bytes;
use futures_util::{stream, Stream, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured")]
    Unconfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Connection settings, built from `Config`.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub api_url: String,
    pub timeout: Duration,
    /// Total attempts for retryable failures (429 / 5xx / transport).
    pub max_attempts: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(20),
            max_attempts: 2,
        }
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    stream: bool,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Ordered text deltas from a streaming completion.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

/// The single LLM client used by all services.
/// Wraps the Messages API with retry logic, plain-text and streaming helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    settings: LlmSettings,
}

impl LlmClient {
    pub fn new(settings: LlmSettings) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(settings.timeout).build()?;
        Ok(Self { client, settings })
    }

    pub fn is_configured(&self) -> bool {
        self.settings
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Masked key for diagnostics: first four characters, then `…`.
    pub fn key_hint(&self) -> Option<String> {
        self.settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .map(|k| format!("{}…", k.chars().take(4).collect::<String>()))
    }

    pub fn api_url(&self) -> &str {
        &self.settings.api_url
    }

    fn api_key(&self) -> Result<&str, LlmError> {
        self.settings
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(LlmError::Unconfigured)
    }

    fn request(&self, key: &str, body: &AnthropicRequest<'_>) -> reqwest::RequestBuilder {
        let accept = if body.stream {
            "text/event-stream"
        } else {
            "application/json"
        };
        self.client
            .post(&self.settings.api_url)
            .header("x-api-key", key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .header("accept", accept)
            .json(body)
    }

    /// Makes a raw call to the completion API, returning the full response object.
    /// Retries on 429 (rate limit) and 5xx errors with exponential backoff.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        let key = self.api_key()?;
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
            stream: false,
        };

        let attempts = self.settings.max_attempts.max(1);
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..attempts {
            if attempt > 0 {
                // Exponential backoff: 500ms, 1s, 2s
                let delay = Duration::from_millis(500 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.request(key, &request_body).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message: error_message(body),
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited { retries: attempts }))
    }

    /// Calls the LLM and returns the trimmed text, with code fences removed.
    pub async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        let text = strip_code_fences(text);
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }

    /// Starts a streaming completion. No retries: callers own the fallback policy.
    ///
    /// Dropping the returned stream drops the underlying connection.
    pub async fn stream(&self, prompt: &str, system: &str) -> Result<TextStream, LlmError> {
        let key = self.api_key()?;
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
            stream: true,
        };

        let response = self.request(key, &request_body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_message(body),
            });
        }

        Ok(Box::pin(text_deltas(Box::pin(response.bytes_stream()))))
    }
}

fn error_message(body: String) -> String {
    serde_json::from_str::<AnthropicError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

// ────────────────────────────────────────────────────────────────────────────
// SSE decoding
// ────────────────────────────────────────────────────────────────────────────

struct DeltaState<S> {
    bytes: S,
    buffer: Vec<u8>,
    pending: VecDeque<String>,
    done: bool,
}

/// Splits an SSE byte stream into `content_block_delta` text chunks, in order.
/// Lines are decoded only once complete so multi-byte characters never split.
fn text_deltas<S>(bytes: S) -> impl Stream<Item = Result<String, LlmError>>
where
    S: Stream<Item = Result<Bytes, reqwest::Error>> + Unpin,
{
    let state = DeltaState {
        bytes,
        buffer: Vec::new(),
        pending: VecDeque::new(),
        done: false,
    };

    stream::unfold(state, |mut st| async move {
        loop {
            if let Some(text) = st.pending.pop_front() {
                return Some((Ok(text), st));
            }
            if st.done {
                return None;
            }
            match st.bytes.next().await {
                Some(Ok(chunk)) => {
                    st.buffer.extend_from_slice(&chunk);
                    while let Some(pos) = st.buffer.iter().position(|b| *b == b'\n') {
                        let line: Vec<u8> = st.buffer.drain(..=pos).collect();
                        if let Some(text) = parse_sse_line(&String::from_utf8_lossy(&line)) {
                            st.pending.push_back(text);
                        }
                    }
                }
                Some(Err(e)) => {
                    st.done = true;
                    return Some((Err(LlmError::Http(e)), st));
                }
                None => {
                    st.done = true;
                    let rest = std::mem::take(&mut st.buffer);
                    if let Some(text) = parse_sse_line(&String::from_utf8_lossy(&rest)) {
                        st.pending.push_back(text);
                    }
                }
            }
        }
    })
}

/// Extracts delta text from one `data:` line of the Messages streaming protocol.
fn parse_sse_line(line: &str) -> Option<String> {
    let payload = line.trim().strip_prefix("data:")?.trim();
    let value: serde_json::Value = serde_json::from_str(payload).ok()?;
    if value.get("type")?.as_str()? != "content_block_delta" {
        return None;
    }
    value
        .get("delta")?
        .get("text")?
        .as_str()
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Strips ```lang ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag on the opening fence line.
    let body = match stripped.find('\n') {
        Some(nl) if !stripped[..nl].trim().contains(' ') => &stripped[nl + 1..],
        _ => stripped,
    };
    body.trim_end()
        .strip_suffix("```")
        .map(|s| s.trim())
        .unwrap_or(body.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer, key: Option<&str>) -> LlmClient {
        LlmClient::new(LlmSettings {
            api_key: key.map(str::to_string),
            api_url: server.url("/v1/messages"),
            timeout: Duration::from_secs(5),
            max_attempts: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_strip_code_fences_with_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\nनमस्ते\n```";
        assert_eq!(strip_code_fences(input), "नमस्ते");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        assert_eq!(strip_code_fences("  plain text \n"), "plain text");
    }

    #[test]
    fn test_parse_sse_line_reads_text_delta() {
        let line = r#"data: {"type":"content_block_delta","index":0,"delta":{"type":"text_delta","text":"Hello"}}"#;
        assert_eq!(parse_sse_line(line).as_deref(), Some("Hello"));
        assert!(parse_sse_line(r#"data: {"type":"message_stop"}"#).is_none());
        assert!(parse_sse_line("event: content_block_delta").is_none());
        assert!(parse_sse_line("data: not-json").is_none());
    }

    #[tokio::test]
    async fn test_text_deltas_reassembles_split_utf8_lines() {
        let line = "data: {\"type\":\"content_block_delta\",\"delta\":{\"text\":\"शुभ\"}}\n";
        let bytes = line.as_bytes();
        // Split inside a multi-byte character.
        let split = line.find('श').unwrap() + 1;
        let chunks: Vec<Result<Bytes, reqwest::Error>> = vec![
            Ok(Bytes::copy_from_slice(&bytes[..split])),
            Ok(Bytes::copy_from_slice(&bytes[split..])),
            Ok(Bytes::from(
                "data: {\"type\":\"content_block_delta\",\"delta\":{\"text\":\" दिन\"}}",
            )),
        ];
        let out: Vec<String> = text_deltas(stream::iter(chunks))
            .map(|r| r.unwrap())
            .collect()
            .await;
        assert_eq!(out, vec!["शुभ".to_string(), " दिन".to_string()]);
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_fast() {
        let client = LlmClient::new(LlmSettings::default()).unwrap();
        assert!(!client.is_configured());
        assert!(matches!(
            client.complete("hi", "sys").await,
            Err(LlmError::Unconfigured)
        ));
    }

    #[tokio::test]
    async fn test_complete_returns_text() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/messages")
                    .header("x-api-key", "test-key");
                then.status(200).json_body(json!({
                    "content": [{"type": "text", "text": "Polished words"}],
                    "usage": {"input_tokens": 10, "output_tokens": 3}
                }));
            })
            .await;

        let client = client_for(&server, Some("test-key"));
        assert_eq!(client.complete("draft", "sys").await.unwrap(), "Polished words");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_surfaces_as_api_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(500).body("upstream down");
            })
            .await;

        let client = client_for(&server, Some("test-key"));
        match client.complete("draft", "sys").await {
            Err(LlmError::Api { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_key_hint_masks_key() {
        let client = LlmClient::new(LlmSettings {
            api_key: Some("sk-ant-secret".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.key_hint().as_deref(), Some("sk-a…"));
    }
}
