//! Chat: buffered replies and SSE streaming.
//!
//! Streaming flow: open the upstream stream and wait up to `STREAM_FALLBACK_SECS`
//! for its first chunk. On timeout or error, make one buffered call and drip the
//! reply out in small chunks. A client disconnect drops the SSE body, whose drop
//! guard cancels the producer task and with it the upstream request.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use futures_util::{stream, Stream, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::content::prompts::CHAT_SYSTEM;
use crate::errors::{AppError, ValidJson};
use crate::llm_client::{LlmClient, LlmError};
use crate::state::AppState;

/// Target size of a locally dripped chunk, in characters.
const DRIP_CHUNK_CHARS: usize = 24;
const DRIP_DELAY: Duration = Duration::from_millis(25);
const CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub system: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

impl ChatRequest {
    /// Validated `(message, system)` pair.
    fn parts(&self) -> Result<(String, String), AppError> {
        let message = self
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .ok_or_else(|| AppError::Validation("message is required".to_string()))?;
        let system = self
            .system
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(CHAT_SYSTEM);
        Ok((message.to_string(), system.to_string()))
    }
}

/// POST /chat
pub async fn handle_chat(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let (message, system) = req.parts()?;
    let reply = state.llm.complete(&message, &system).await?;
    Ok(Json(ChatResponse { reply }))
}

/// Items handed from the producer task to the SSE body.
#[derive(Debug, Clone, PartialEq)]
enum ChatEvent {
    Chunk(String),
    Failed,
}

/// POST /chat/stream
pub async fn handle_chat_stream(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<ChatRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    let (message, system) = req.parts()?;
    if !state.llm.is_configured() {
        return Err(AppError::Llm(LlmError::Unconfigured));
    }

    let cancel = CancellationToken::new();
    let guard = cancel.clone().drop_guard();
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    let llm = state.llm.clone();
    let fallback_after = state.config.stream_fallback;
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => debug!("chat stream cancelled by client"),
            _ = produce(&llm, &message, &system, fallback_after, &tx) => {}
        }
    });

    // The guard lives inside the body stream; dropping the body cancels the producer.
    let events = stream::unfold((rx, guard), |(mut rx, guard)| async move {
        rx.recv().await.map(|item| (item, (rx, guard)))
    })
    .map(|item| {
        Ok::<_, Infallible>(match item {
            ChatEvent::Chunk(text) => Event::default().event("chunk").data(text.replace('\r', "")),
            ChatEvent::Failed => Event::default().event("error").data("Server error"),
        })
    })
    .chain(stream::once(async {
        Ok::<_, Infallible>(Event::default().event("done").data("[DONE]"))
    }));

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// Streams upstream chunks into `tx`, falling back to a dripped buffered reply.
async fn produce(
    llm: &LlmClient,
    message: &str,
    system: &str,
    fallback_after: Duration,
    tx: &mpsc::Sender<ChatEvent>,
) {
    let first = tokio::time::timeout(fallback_after, async {
        let mut upstream = llm.stream(message, system).await?;
        let first = upstream.next().await.transpose()?;
        Ok::<_, LlmError>((upstream, first))
    })
    .await;

    match first {
        Ok(Ok((mut upstream, Some(first)))) => {
            if tx.send(ChatEvent::Chunk(first)).await.is_err() {
                return;
            }
            while let Some(item) = upstream.next().await {
                let event = match item {
                    Ok(text) => ChatEvent::Chunk(text),
                    Err(e) => {
                        warn!(error = %e, "upstream stream broke mid-reply");
                        ChatEvent::Failed
                    }
                };
                let failed = event == ChatEvent::Failed;
                if tx.send(event).await.is_err() || failed {
                    return;
                }
            }
            return;
        }
        Ok(Ok((_, None))) => warn!("upstream stream ended without content, falling back"),
        Ok(Err(e)) => warn!(error = %e, "upstream stream failed, falling back"),
        Err(_) => warn!(
            after_ms = fallback_after.as_millis() as u64,
            "no first chunk in time, falling back"
        ),
    }

    match llm.complete(message, system).await {
        Ok(reply) => {
            for chunk in drip_chunks(&reply, DRIP_CHUNK_CHARS) {
                if tx.send(ChatEvent::Chunk(chunk)).await.is_err() {
                    return;
                }
                tokio::time::sleep(DRIP_DELAY).await;
            }
        }
        Err(e) => {
            warn!(error = %e, "buffered fallback failed");
            let _ = tx.send(ChatEvent::Failed).await;
        }
    }
}

/// Splits `text` into chunks of roughly `target` characters, breaking after
/// whitespace. Concatenating the chunks yields `text` exactly.
fn drip_chunks(text: &str, target: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut chars = 0usize;

    for piece in text.split_inclusive(char::is_whitespace) {
        current.push_str(piece);
        chars += piece.chars().count();
        if chars >= target {
            chunks.push(std::mem::take(&mut current));
            chars = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
