use axum::{extract::State, http::StatusCode, http::Uri, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::AppState;

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "💜 Welcome to Pling API",
        "version": env!("CARGO_PKG_VERSION"),
        "features": [
            "AI Video Generation",
            "Mood-Based Content",
            "Social Creativity",
            "Wellness Tracking",
        ],
    }))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "pling-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
    }))
}

pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let store_ok = state.store.list_posts().await.is_ok();

    if store_ok {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "checks": { "store": "ok", "video_provider": state.video.name() },
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "checks": { "store": "failed" },
            })),
        )
    }
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "message": format!("No route for {}", uri.path()),
            "path": uri.path(),
        })),
    )
}
