//! End-to-end tests over the /api router: external service success,
//! every failure mode resolving to the fallback, and the validation
//! error surface.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use solar_predict::config::{Config, FallbackConfig, MlServiceConfig, ServerConfig};
use solar_predict::routes::predict_routes::api_routes;
use solar_predict::shared_state::AppState;

fn app(base_url: &str, rng_seed: Option<u64>) -> Router {
    let config = Config {
        server: ServerConfig { port: 0 },
        ml_service: MlServiceConfig {
            base_url: base_url.to_string(),
            timeout_s: 2,
        },
        fallback: FallbackConfig { rng_seed },
    };
    api_routes(AppState::new(config))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn phoenix_request() -> Value {
    json!({
        "latitude": 33.4484,
        "longitude": -112.074,
        "start_date": "20250101",
        "end_date": "20250107",
        "temporal": "daily",
        "include_analysis": true
    })
}

#[tokio::test]
async fn external_success_passes_through_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/solar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prediction": 4.37,
            "confidence": 92.1,
            "model": "Gradient Boosting Ensemble",
            "processing_time": "0.82s",
            "features_analyzed": 12
        })))
        .mount(&server)
        .await;

    let (status, body) = post_json(app(&server.uri(), None), "/solar-predict", phoenix_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["model"], json!("Gradient Boosting Ensemble"));
    assert_eq!(body["data"]["prediction"], json!(4.37));
    assert_eq!(body["data"]["used_fallback"], json!(false));
    assert!(body.get("warning").is_none());
}

#[tokio::test]
async fn server_error_resolves_to_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/solar"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (status, body) = post_json(app(&server.uri(), None), "/solar-predict", phoenix_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["used_fallback"], json!(true));
    assert_eq!(body["data"]["model"], json!("Fallback Solar Model"));
    assert!(body["data"]["prediction"].as_f64().unwrap() >= 0.0);
    let confidence = body["data"]["confidence"].as_f64().unwrap();
    assert!((75.0..=90.0).contains(&confidence));
    assert!(body["warning"].as_str().unwrap().contains("fallback"));

    let recommendations = body["data"]["recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty());
    assert!(
        recommendations
            .iter()
            .any(|r| r["category"] == json!("Data Quality") && r["priority"] == json!("High"))
    );
}

#[tokio::test]
async fn malformed_body_resolves_to_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict/solar"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let (status, body) = post_json(app(&server.uri(), None), "/solar-predict", phoenix_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["used_fallback"], json!(true));
}

#[tokio::test]
async fn unreachable_service_is_reproducible_with_a_seed() {
    // Nothing listens on this port; both calls take the fallback path.
    let router = app("http://127.0.0.1:1", Some(42));
    let (_, a) = post_json(router.clone(), "/solar-predict", phoenix_request()).await;
    let (_, b) = post_json(router, "/solar-predict", phoenix_request()).await;
    assert_eq!(a, b);

    // Phoenix in January: temperature inside base ± (seasonal + noise).
    let temperature = a["data"]["weather_data"]["temperature_c"].as_f64().unwrap();
    let base = 20.0 + (33.4484_f64 - 30.0) * -0.5;
    assert!((temperature - base).abs() <= 12.6);
}

#[tokio::test]
async fn validation_errors_use_the_documented_messages() {
    let router = app("http://127.0.0.1:1", None);

    let mut bad_latitude = phoenix_request();
    bad_latitude["latitude"] = json!(95);
    let (status, body) = post_json(router.clone(), "/solar-predict", bad_latitude).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Latitude must be between -90 and 90"));

    let mut bad_longitude = phoenix_request();
    bad_longitude["longitude"] = json!(200);
    let (status, body) = post_json(router.clone(), "/solar-predict", bad_longitude).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Longitude must be between -180 and 180"));

    let mut bad_date = phoenix_request();
    bad_date["start_date"] = json!("2025-01-01");
    let (status, body) = post_json(router, "/solar-predict", bad_date).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Date format must be YYYYMMDD"));
}

#[tokio::test]
async fn manual_prediction_falls_back_and_validates() {
    let router = app("http://127.0.0.1:1", Some(7));

    let (status, body) = post_json(
        router.clone(),
        "/predict",
        json!({ "features": [81.5, 25.0, 40.0, 1130], "model": "random_forest" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["used_fallback"], json!(true));
    assert_eq!(body["data"]["model"], json!("Random Forest"));
    assert_eq!(body["data"]["features_analyzed"], json!(4));

    let (status, body) = post_json(
        router.clone(),
        "/predict",
        json!({ "features": [81.5, 25.0] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid features. Expected array of 4 numbers."));

    let (status, body) = post_json(
        router,
        "/predict",
        json!({ "features": [81.5, 25.0, "abc", 1130] }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid feature value")
    );
}
