pub mod chat;
pub mod daily;
pub mod debug;
pub mod health;
pub mod reports;

use std::any::Any;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use subtle::ConstantTimeEq;
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::AppError;
use crate::state::AppState;

pub const SECRET_HEADER: &str = "x-astro-secret";

/// Every mounted route, as reported by `/debug/routes`.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/daily"),
    ("POST", "/daily"),
    ("POST", "/report/from-daily"),
    ("POST", "/report/weekly"),
    ("POST", "/report/generate"),
    ("POST", "/report/gemstone"),
    ("POST", "/report/mantra"),
    ("POST", "/chat"),
    ("POST", "/chat/stream"),
    ("GET", "/debug/key"),
    ("GET", "/debug/fonts"),
    ("GET", "/debug/version"),
    ("GET", "/debug/routes"),
];

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        // Daily horoscope
        .route(
            "/daily",
            get(daily::handle_get_daily).post(daily::handle_post_daily),
        )
        // PDF reports
        .route("/report/from-daily", post(reports::handle_from_daily))
        .route("/report/weekly", post(reports::handle_weekly))
        .route("/report/generate", post(reports::handle_generate))
        .route("/report/gemstone", post(reports::handle_gemstone))
        .route("/report/mantra", post(reports::handle_mantra))
        // Chat
        .route("/chat", post(chat::handle_chat))
        .route("/chat/stream", post(chat::handle_chat_stream))
        // Diagnostics
        .route("/debug/key", get(debug::handle_key))
        .route("/debug/fonts", get(debug::handle_fonts))
        .route("/debug/version", get(debug::handle_version))
        .route("/debug/routes", get(debug::handle_routes))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_shared_secret,
        ))
        // Panic recovery: a panicking handler becomes a generic 500.
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Server error" })),
    )
        .into_response()
}

/// Rejects requests without the configured shared secret. `GET /` stays open.
async fn require_shared_secret(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(secret) = state.config.shared_secret.as_deref() {
        let exempt = req.method() == Method::GET && req.uri().path() == "/";
        let presented = req
            .headers()
            .get(SECRET_HEADER)
            .and_then(|v| v.to_str().ok());
        if !exempt && !presented.is_some_and(|p| secrets_match(p, secret)) {
            return Err(AppError::Unauthorized);
        }
    }
    Ok(next.run(req).await)
}

fn secrets_match(presented: &str, expected: &str) -> bool {
    presented.as_bytes().ct_eq(expected.as_bytes()).into()
}
