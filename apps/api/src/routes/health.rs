use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with the service name and crate version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "fieldhint-api"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let Json(body) = health_handler().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "fieldhint-api");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
