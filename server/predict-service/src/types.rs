//! Request/response types for the prediction service.

use heat_risk_engine::normalize::Conditions;
use heat_risk_engine::{ComponentScores, RiskLevel};
use serde::{Deserialize, Deserializer, Serialize};

/// The dashboard's flat prediction payload. Every field may be null.
#[derive(Debug, Default, Deserialize)]
pub struct PredictPayload {
  /// Heart rate; carried by the dashboard but not a model feature.
  #[serde(default)]
  pub hr: Option<f64>,
  /// Skin or body temperature, °C.
  #[serde(default)]
  pub skin_temp: Option<f64>,
  #[serde(default)]
  pub env_temp: Option<f64>,
  /// Relative humidity as a 0–1 ratio.
  #[serde(default)]
  pub humidity: Option<f64>,
  /// 1/true when UV > 5. Anything that is not a positive number or `true` reads as no sun.
  #[serde(default, deserialize_with = "lenient_flag")]
  pub sun: bool,
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(match serde_json::Value::deserialize(deserializer)? {
    serde_json::Value::Bool(b) => b,
    serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v > 0.0),
    _ => false,
  })
}

impl PredictPayload {
  pub fn body_temperature(&self) -> Option<f64> {
    self.skin_temp.filter(|t| t.is_finite())
  }

  /// Usable conditions, or `None` when temperature or humidity is missing/out of range.
  pub fn conditions(&self) -> Option<Conditions> {
    let temperature_c = self.env_temp.filter(|t| t.is_finite())?;
    let humidity_ratio = self
      .humidity
      .filter(|h| h.is_finite() && (0.0..=1.0).contains(h))?;
    Some(Conditions {
      temperature_c,
      humidity_ratio,
      sun_exposure: self.sun,
    })
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictComponents {
  #[serde(rename = "CT")]
  pub core_temperature: Option<f64>,
  #[serde(rename = "HI")]
  pub heat_index: Option<f64>,
  #[serde(rename = "LR")]
  pub logistic_regression: Option<f64>,
}

impl From<ComponentScores> for PredictComponents {
  fn from(c: ComponentScores) -> Self {
    Self {
      core_temperature: c.core_temperature,
      heat_index: c.heat_index,
      logistic_regression: c.logistic_regression,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
  pub level: RiskLevel,
  pub prob: Option<f64>,
  pub components: PredictComponents,
}
