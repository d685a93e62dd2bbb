//! HTTP API gateway for Wayfarer.
//!
//! Exposes the chat endpoint and a health check. The gateway owns boundary
//! validation: an absent, non-string, or empty `message` never reaches the
//! dispatcher. Built on Axum.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info, warn};

use wayfarer_engine::Dispatcher;

/// Build the Axum router with all gateway routes.
///
/// CORS is restricted to the single configured browser origin, matching the
/// deployment model of a dedicated chat frontend.
pub fn build_router(dispatcher: Arc<Dispatcher>, allowed_origin: &str) -> Router {
    let mut cors = CorsLayer::new()
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600));

    match allowed_origin.parse() {
        Ok(origin) => {
            cors = cors.allow_origin(AllowOrigin::exact(origin));
        }
        Err(_) => {
            warn!(origin = %allowed_origin, "Invalid allowed_origin — cross-origin requests will be rejected");
        }
    }

    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(dispatcher)
}

/// Start the gateway HTTP server.
pub async fn start(
    host: &str,
    port: u16,
    allowed_origin: &str,
    dispatcher: Arc<Dispatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = format!("{host}:{port}");
    let app = build_router(dispatcher, allowed_origin);

    info!(addr = %addr, "Gateway starting");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `POST /chat` — one message in, one reply out.
///
/// The payload is taken as a raw JSON value so that a missing or non-string
/// `message` can be rejected with a 400 and a JSON error body, before the
/// dispatcher is ever invoked.
async fn chat_handler(
    State(dispatcher): State<Arc<Dispatcher>>,
    Json(payload): Json<serde_json::Value>,
) -> Response {
    let message = payload
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let Some(message) = message else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Message must be a string."})),
        )
            .into_response();
    };

    let message = message.to_string();
    let task = tokio::spawn(async move { dispatcher.dispatch(&message).await });

    match task.await {
        Ok(reply) => (StatusCode::OK, Json(json!({"reply": reply}))).into_response(),
        // The dispatcher absorbs all expected failures; only a panicking
        // task lands here.
        Err(e) => {
            error!(error = %e, "Dispatch task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"reply": "An internal error occurred."})),
            )
                .into_response()
        }
    }
}
