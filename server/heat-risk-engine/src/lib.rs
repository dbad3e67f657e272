//! Heat Illness Risk Engine: pure scoring, no DB, no network, no clock.
//!
//! Combines a wearable vitals reading with an ambient weather reading into a
//! composite heat-illness risk and a level (stable / warning / danger / unknown).
//! Used by the JSON-lines binary and the prediction service; can also be called
//! as a library.

pub mod advisory;
pub mod combine;
pub mod config;
pub mod core_temp;
pub mod engine;
pub mod error;
pub mod explain;
pub mod heat_index;
pub mod logistic;
pub mod normalize;
pub mod screen;
pub mod smoothing;
pub mod types;

pub use config::{CombinePolicy, LogisticModel, RiskConfig};
pub use engine::{evaluate_risk, RiskEngine};
pub use error::EngineError;
pub use types::{
  AssessmentReport, ComponentScores, EvaluateRequest, RiskAssessment, RiskLevel, VitalsReading,
  WeatherReading,
};

/// Evaluate one request and attach the display extras (no I/O).
pub fn report(engine: &RiskEngine, request: &EvaluateRequest) -> AssessmentReport {
  let detail = engine.evaluate_detailed(&request.vitals, &request.weather);
  AssessmentReport {
    assessment: detail.assessment,
    heat_index_c: detail.heat_index_c.map(|hi| (hi * 10.0).round() / 10.0),
    explanations: explain::explanations(&detail, engine.config()),
    vitals_screen: screen::screen_vitals(&request.vitals),
    advisory: advisory::weather_advisory(&request.weather).map(|a| a.message()),
    display_level: None,
  }
}
