/// Application routes configuration
use crate::handlers::{compute_circular_eclipse, compute_yearly_eclipse, health, AppState};
use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Eclipse endpoints
        .route("/api/eclipse/circular", post(compute_circular_eclipse))
        .route("/api/eclipse/yearly", post(compute_yearly_eclipse))
        .with_state(state)
}

/// CORS layer for the configured frontend origins
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::EclipseService;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_router() -> Router {
        build_router(AppState {
            eclipse_service: Arc::new(EclipseService::new()),
        })
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], json!("ok"));
    }

    #[tokio::test]
    async fn test_circular_eclipse_endpoint() {
        let (status, body) = post_json(
            "/api/eclipse/circular",
            json!({"altitude_km": 400.0, "beta_deg": 0.0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["altitude_km"], json!(400.0));
        assert_eq!(body["orbit_radius_km"], json!(6771.0));
        assert!(body["eclipse_min"].as_f64().unwrap() > 30.0);
        assert!(body["period_sec"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_circular_eclipse_rejects_negative_altitude() {
        let (status, body) = post_json(
            "/api/eclipse/circular",
            json!({"altitude_km": -10.0, "beta_deg": 0.0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], json!(false));
        assert_eq!(body["error"]["code"], json!("INVALID_INPUT"));
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("altitude_km"));
    }

    #[tokio::test]
    async fn test_yearly_eclipse_applies_request_defaults() {
        let (status, body) = post_json(
            "/api/eclipse/yearly",
            json!({"altitude_km": 400.0, "inclination_deg": 51.6, "raan_deg": 0.0}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], json!(true));
        let samples = body["samples"].as_array().unwrap();
        assert_eq!(samples.len(), 366);
        assert_eq!(samples[0]["t_utc"], json!("2026-01-01T00:00:00Z"));
        assert!(body["summary"]["max_eclipse_min"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn test_yearly_eclipse_rejects_out_of_range_inclination() {
        let (status, body) = post_json(
            "/api/eclipse/yearly",
            json!({"altitude_km": 400.0, "inclination_deg": 200.0, "raan_deg": 0.0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!("INVALID_INPUT"));
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("inclination_deg"));
    }

    #[tokio::test]
    async fn test_yearly_eclipse_rejects_malformed_start() {
        let (status, body) = post_json(
            "/api/eclipse/yearly",
            json!({
                "altitude_km": 400.0,
                "inclination_deg": 51.6,
                "raan_deg": 0.0,
                "start_utc": "not-a-date"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!("INVALID_TIMESTAMP"));
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("start_utc"));
    }
}
