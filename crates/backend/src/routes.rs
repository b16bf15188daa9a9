use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::api::handlers;

/// All application routes; anything unmatched is served from `static_dir`
pub fn configure_routes(static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D100 Sales commission dashboard
        .route(
            "/api/d100/sales-reps",
            get(handlers::d100_commission::list_sales_reps),
        )
        .route(
            "/api/d100/sales-reps/:id/dashboard",
            get(handlers::d100_commission::get_dashboard),
        )
        .route("/api/d100/periods", get(handlers::d100_commission::get_periods))
        .route(
            "/api/d100/settings",
            get(handlers::d100_commission::get_display_settings),
        )
        .fallback_service(ServeDir::new(static_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    async fn get_status(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = configure_routes("dist")
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_status("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_dashboard_routes() {
        let (status, body) = get_status("/api/d100/sales-reps/rep3/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["salesRepData"]["name"], "Ana Gutierrez");
        assert_eq!(json["penalties"].as_array().map(Vec::len), Some(3));

        let (status, _) = get_status("/api/d100/sales-reps/rep99/dashboard").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_periods_and_settings() {
        let (status, body) = get_status("/api/d100/periods").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json[0]["value"], "may2025");

        let (status, body) = get_status("/api/d100/settings").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["thousandsSeparator"], ",");
    }
}
