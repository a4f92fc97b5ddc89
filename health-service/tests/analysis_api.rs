//! End-to-end tests for the analysis endpoint, using a mock provider.
//!
//! Run with: cargo test -p health-service --test analysis_api

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use health_service::config::{GoogleConfig, HealthConfig, ModelConfig};
use health_service::models::DISCLAIMER;
use health_service::services::providers::mock::MockTextProvider;
use health_service::services::AnalysisService;
use health_service::startup::{AppState, Application};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

/// A full provider response in the declared report shape.
const FULL_ANALYSIS: &str = r#"{
    "overallScore": 85,
    "riskLevel": "low",
    "categories": {
        "cardiovascular": {"score": 90, "status": "excellent", "findings": ["Tensi normal"], "recommendations": ["Pertahankan aktivitas"]},
        "metabolic": {"score": 82, "status": "good", "findings": ["Gula darah wajar"], "recommendations": ["Kurangi gula tambahan"]},
        "lifestyle": {"score": 75, "status": "good", "findings": ["Tidur cukup"], "recommendations": ["Olahraga 3x seminggu"]},
        "mental": {"score": 70, "status": "fair", "findings": ["Stres sedang"], "recommendations": ["Latihan pernapasan"]}
    },
    "bmi": {"value": 22.5, "category": "normal", "recommendation": "Pertahankan berat badan"},
    "immediateConcerns": [],
    "lifestyleRecommendations": ["Minum air cukup"],
    "whenToSeeDoctor": ["Nyeri dada menetap"],
    "summary": "Kondisi kesehatan secara umum baik.",
    "nextSteps": ["Pemeriksaan tahunan"]
}"#;

fn test_config(api_key: Option<&str>) -> HealthConfig {
    HealthConfig {
        common: service_core::config::Config {
            port: 0,
            log_level: "info".to_string(),
        },
        models: ModelConfig {
            text_model: "gemini-1.5-flash".to_string(),
        },
        google: GoogleConfig {
            api_key: api_key.map(String::from),
        },
    }
}

fn test_state(api_key: Option<&str>, provider: Arc<MockTextProvider>) -> AppState {
    AppState {
        analysis: Arc::new(AnalysisService::new(
            api_key.map(String::from),
            provider,
        )),
    }
}

fn analysis_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/health-analysis")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}

#[tokio::test]
async fn successful_analysis_returns_stamped_report() {
    let provider = Arc::new(MockTextProvider::with_text(FULL_ANALYSIS));
    let app = Application::build_with_provider(test_config(Some("test-api-key")), provider.clone())
        .await
        .expect("Failed to build application");
    let port = app.port();
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let intake = json!({
        "personalInfo": {"name": "Budi", "age": "35", "gender": "male", "height": "170", "weight": "65"},
        "lifestyle": {"activityLevel": "moderate", "sleepHours": 7, "stressLevel": "low", "smokingStatus": "never", "alcoholStatus": "never"},
        "symptoms": ["Pusing"],
        "medicalHistory": {"bloodPressure": "normal", "diabetes": "none", "heartDisease": "none", "medications": ""}
    });

    let client = reqwest::Client::new();
    let response = client
        .post(format!("http://localhost:{}/api/health-analysis", port))
        .json(&intake)
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);

    let payload: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(payload["success"], true);
    assert_eq!(payload["data"]["overallScore"], 85);
    assert_eq!(payload["data"]["riskLevel"], "low");
    assert_eq!(payload["data"]["bmi"]["category"], "normal");
    assert_eq!(payload["data"]["disclaimer"], DISCLAIMER);

    // The stamp is a valid ISO-8601 timestamp.
    let analyzed_at = payload["data"]["analyzedAt"]
        .as_str()
        .expect("analyzedAt missing");
    assert!(chrono::DateTime::parse_from_rfc3339(analyzed_at).is_ok());

    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn empty_intake_is_analyzed_without_error() {
    let provider = Arc::new(MockTextProvider::with_text(FULL_ANALYSIS));
    let router = Application::router(test_state(Some("test-api-key"), provider.clone()));

    let response = router.oneshot(analysis_request(json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let payload = response_json(response).await;
    assert_eq!(payload["success"], true);
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn missing_credential_fails_without_calling_the_provider() {
    let provider = Arc::new(MockTextProvider::with_text(FULL_ANALYSIS));
    let router = Application::router(test_state(None, provider.clone()));

    let response = router.oneshot(analysis_request(json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let payload = response_json(response).await;
    assert_eq!(payload["success"], false);
    assert!(payload["data"].is_null());
    let error = payload["error"].as_str().unwrap();
    assert!(error.contains("API Key"));

    // The network layer was never reached.
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn invalid_provider_json_is_a_decode_failure() {
    let provider = Arc::new(MockTextProvider::with_text("Maaf, terjadi kesalahan."));
    let router = Application::router(test_state(Some("test-api-key"), provider));

    let response = router.oneshot(analysis_request(json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let payload = response_json(response).await;
    assert_eq!(payload["success"], false);
    assert!(payload["data"].is_null());
    assert!(payload["error"]
        .as_str()
        .unwrap()
        .contains("Failed to decode analysis response"));
}

#[tokio::test]
async fn provider_failure_surfaces_the_error_envelope() {
    let provider = Arc::new(MockTextProvider::with_network_error("connection reset"));
    let router = Application::router(test_state(Some("test-api-key"), provider));

    let response = router.oneshot(analysis_request(json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let payload = response_json(response).await;
    assert_eq!(payload["success"], false);
    assert!(payload["data"].is_null());
    assert!(!payload["error"].as_str().unwrap().is_empty());
}
