//! HTTP handlers for the prediction service.

use axum::{extract::State, Json};
use heat_risk_engine::{report, AssessmentReport, EvaluateRequest};
use std::sync::Arc;
use tracing::debug;

use crate::state::AppState;
use crate::types::{PredictPayload, PredictResponse};

pub async fn health() -> &'static str {
  "ok"
}

/// Dashboard contract: flat payload in, `{level, prob, components}` out.
pub async fn predict(
  State(state): State<Arc<AppState>>,
  Json(payload): Json<PredictPayload>,
) -> Json<PredictResponse> {
  let detail = state
    .engine
    .evaluate_normalized(payload.body_temperature(), payload.conditions());
  let assessment = detail.assessment;
  debug!(level = %assessment.level, "predict");

  Json(PredictResponse {
    level: assessment.level,
    prob: assessment.composite_risk,
    components: assessment.components.into(),
  })
}

pub async fn evaluate(
  State(state): State<Arc<AppState>>,
  Json(request): Json<EvaluateRequest>,
) -> Json<AssessmentReport> {
  let out = report(&state.engine, &request);
  debug!(level = %out.assessment.level, "evaluate");
  Json(out)
}
