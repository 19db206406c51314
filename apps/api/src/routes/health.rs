use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness probe. Exempt from the shared-secret check.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": "astro-baba"
    }))
}
