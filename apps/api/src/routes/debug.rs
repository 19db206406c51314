use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::routes::ROUTES;
use crate::state::AppState;

/// GET /debug/key
/// Whether an LLM key is configured, with a masked hint. Never returns the key.
pub async fn handle_key(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "configured": state.llm.is_configured(),
        "hint": state.llm.key_hint(),
        "model": MODEL,
        "apiUrl": state.llm.api_url(),
    }))
}

/// GET /debug/fonts
pub async fn handle_fonts(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "fonts": state.fonts.status() }))
}

/// GET /debug/version
pub async fn handle_version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "model": MODEL,
    }))
}

/// GET /debug/routes
pub async fn handle_routes() -> Json<Value> {
    let routes: Vec<String> = ROUTES
        .iter()
        .map(|(method, path)| format!("{method} {path}"))
        .collect();
    Json(json!({ "routes": routes }))
}
