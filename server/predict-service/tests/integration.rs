//! Integration tests for the prediction service handlers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::{extract::State, Json};
use heat_risk_engine::{EvaluateRequest, RiskConfig, RiskEngine, RiskLevel};
use predict_service::{evaluate, health, predict, router, AppState, PredictPayload};
use tower::ServiceExt;

fn state() -> Arc<AppState> {
  Arc::new(AppState {
    engine: RiskEngine::with_defaults(),
  })
}

fn payload(json: &str) -> PredictPayload {
  serde_json::from_str(json).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
  assert_eq!(health().await, "ok");
}

#[tokio::test]
async fn predict_danger_for_hyperthermia() {
  let Json(res) = predict(
    State(state()),
    Json(payload(r#"{"hr": 112, "skin_temp": 39.2, "env_temp": 35, "humidity": 0.8, "sun": 0}"#)),
  )
  .await;
  assert_eq!(res.level, RiskLevel::Danger);
  assert!(res.prob.unwrap() >= 0.5);
  assert_eq!(res.components.core_temperature, Some(1.0));
}

#[tokio::test]
async fn predict_matches_engine_on_equivalent_readings() {
  let Json(res) = predict(
    State(state()),
    Json(payload(r#"{"skin_temp": 37.8, "env_temp": 30, "humidity": 0.6, "sun": 0}"#)),
  )
  .await;

  let req: EvaluateRequest = serde_json::from_str(
    r#"{"vitals": {"bodyTemperatureC": 37.8}, "weather": {"temperatureC": 30, "humidityPercent": 60}}"#,
  )
  .unwrap();
  let expected = RiskEngine::with_defaults().evaluate(&req.vitals, &req.weather);

  assert_eq!(res.level, RiskLevel::Warning);
  assert_eq!(res.prob, expected.composite_risk);
}

#[tokio::test]
async fn sun_flag_raises_heat_component() {
  let shade = predict(
    State(state()),
    Json(payload(r#"{"skin_temp": 37.0, "env_temp": 30, "humidity": 0.6, "sun": 0}"#)),
  )
  .await
  .0;
  let sun = predict(
    State(state()),
    Json(payload(r#"{"skin_temp": 37.0, "env_temp": 30, "humidity": 0.6, "sun": 1}"#)),
  )
  .await
  .0;
  assert!(sun.components.heat_index.unwrap() > shade.components.heat_index.unwrap());
}

#[tokio::test]
async fn all_null_payload_is_unknown() {
  let Json(res) = predict(
    State(state()),
    Json(payload(r#"{"hr": null, "skin_temp": null, "env_temp": null, "humidity": null, "sun": 0}"#)),
  )
  .await;
  assert_eq!(res.level, RiskLevel::Unknown);
  assert!(res.prob.is_none());

  let json = serde_json::to_value(&res).unwrap();
  assert_eq!(json["level"], "unknown");
  assert!(json["components"]["CT"].is_null());
}

#[tokio::test]
async fn evaluate_uses_configured_engine() {
  let strict = Arc::new(AppState {
    engine: RiskEngine::new(RiskConfig {
      warning_threshold: 0.3,
      ..RiskConfig::default()
    }),
  });
  let req: EvaluateRequest = serde_json::from_str(
    r#"{"vitals": {"bodyTemperatureC": 37.8}, "weather": {"temperatureC": 30, "humidityPercent": 60}}"#,
  )
  .unwrap();

  let Json(out) = evaluate(State(strict), Json(req)).await;
  assert_eq!(out.assessment.level, RiskLevel::Stable);
  assert!(out.heat_index_c.is_some());
}

#[tokio::test]
async fn missing_skin_temp_is_unknown_with_heat_component() {
  let Json(res) = predict(
    State(state()),
    Json(payload(r#"{"hr": null, "skin_temp": null, "env_temp": 35, "humidity": 0.8, "sun": true}"#)),
  )
  .await;
  assert_eq!(res.level, RiskLevel::Unknown);
  assert!(res.prob.is_none());
  assert_eq!(res.components.heat_index, Some(1.0));
}

async fn body_bytes(res: axum::response::Response) -> Vec<u8> {
  axum::body::to_bytes(res.into_body(), usize::MAX)
    .await
    .unwrap()
    .to_vec()
}

#[tokio::test]
async fn predict_route_returns_level_prob_and_components() {
  let req = Request::builder()
    .method("POST")
    .uri("/ai/predict")
    .header("content-type", "application/json")
    .body(Body::from(
      r#"{"hr": 112, "skin_temp": 39.2, "env_temp": 35, "humidity": 0.8, "sun": true}"#,
    ))
    .unwrap();
  let res = router(state()).oneshot(req).await.unwrap();
  assert_eq!(res.status(), StatusCode::OK);

  let json: serde_json::Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
  assert_eq!(json["level"], "danger");
  assert!(json["prob"].as_f64().unwrap() >= 0.5);
  assert_eq!(json["components"]["CT"], 1.0);
  assert!(json["components"]["HI"].is_f64());
  assert!(json["components"]["LR"].is_f64());
}

#[tokio::test]
async fn evaluate_route_returns_report() {
  let req = Request::builder()
    .method("POST")
    .uri("/evaluate")
    .header("content-type", "application/json")
    .body(Body::from(
      r#"{"vitals": {"bodyTemperatureC": 36.8}, "weather": {"temperatureC": 25, "humidityPercent": 50}}"#,
    ))
    .unwrap();
  let res = router(state()).oneshot(req).await.unwrap();
  assert_eq!(res.status(), StatusCode::OK);

  let json: serde_json::Value = serde_json::from_slice(&body_bytes(res).await).unwrap();
  assert_eq!(json["level"], "stable");
  assert!(json["explanations"].is_array());
}

#[tokio::test]
async fn health_route_is_ok() {
  let req = Request::builder()
    .method("GET")
    .uri("/health")
    .body(Body::empty())
    .unwrap();
  let res = router(state()).oneshot(req).await.unwrap();
  assert_eq!(res.status(), StatusCode::OK);
  assert_eq!(body_bytes(res).await, b"ok");
}
