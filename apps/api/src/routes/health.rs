use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness acknowledgment kept for the dashboard's existing probe.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "status": "Scraper running" }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "internship-api"
    }))
}
