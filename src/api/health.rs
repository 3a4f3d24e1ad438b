use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            timestamp: Utc::now(),
        }
    }
}

/// Liveness probe. Does not touch the store.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_package_identity() {
        let Json(health) = health_check().await;
        let body = serde_json::to_value(&health).unwrap();

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "cinema-api");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["timestamp"].as_str().unwrap().parse::<DateTime<Utc>>().is_ok());
    }
}
