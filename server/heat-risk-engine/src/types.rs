//! Core types for the risk engine (JSON contracts with the dashboard + internal models).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inputs (what the vitals and weather sources hand us)
// ---------------------------------------------------------------------------

/// Point-in-time biometric sample from a wearable. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsReading {
  #[serde(default)]
  pub heart_rate_bpm: Option<f64>,
  #[serde(default)]
  pub body_temperature_c: Option<f64>,
  /// Used when `body_temperature_c` is absent.
  #[serde(default)]
  pub skin_temperature_c: Option<f64>,
  #[serde(default)]
  pub measured_at: Option<DateTime<Utc>>,
}

/// Ambient conditions from the weather source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
  #[serde(default)]
  pub temperature_c: Option<f64>,
  /// 0–100.
  #[serde(default, alias = "humidityPercent")]
  pub relative_humidity_percent: Option<f64>,
  #[serde(default)]
  pub uv_index: Option<f64>,
  /// Free-text condition ("light rain", "clear sky", ...). Only used for advisories.
  #[serde(default)]
  pub description: Option<String>,
}

/// One evaluation request: a vitals snapshot and a weather snapshot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluateRequest {
  #[serde(default)]
  pub vitals: VitalsReading,
  #[serde(default)]
  pub weather: WeatherReading,
}

// ---------------------------------------------------------------------------
// Risk level
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
  Unknown,
  Stable,
  Warning,
  Danger,
}

impl RiskLevel {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Unknown => "unknown",
      Self::Stable => "stable",
      Self::Warning => "warning",
      Self::Danger => "danger",
    }
  }

  /// Ordering used for escalation; `Unknown` sits outside the scale.
  pub fn severity(self) -> Option<u8> {
    match self {
      Self::Unknown => None,
      Self::Stable => Some(0),
      Self::Warning => Some(1),
      Self::Danger => Some(2),
    }
  }
}

impl std::fmt::Display for RiskLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Per-component scores, each in [0,1] or absent when its inputs were unusable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentScores {
  pub core_temperature: Option<f64>,
  pub heat_index: Option<f64>,
  pub logistic_regression: Option<f64>,
}

impl ComponentScores {
  pub fn is_empty(&self) -> bool {
    self.core_temperature.is_none() && self.heat_index.is_none() && self.logistic_regression.is_none()
  }
}

/// The engine's sole output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
  pub level: RiskLevel,
  pub composite_risk: Option<f64>,
  pub components: ComponentScores,
}

impl RiskAssessment {
  pub fn unknown() -> Self {
    Self {
      level: RiskLevel::Unknown,
      composite_risk: None,
      components: ComponentScores::default(),
    }
  }
}

/// Assessment plus the intermediate values the dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationDetail {
  pub assessment: RiskAssessment,
  /// Estimated apparent temperature (°C), sun bonus included.
  pub heat_index_c: Option<f64>,
  pub sun_exposure: bool,
  pub body_temperature_c: Option<f64>,
}

/// One output line of the CLI / body of `POST /evaluate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
  #[serde(flatten)]
  pub assessment: RiskAssessment,
  pub heat_index_c: Option<f64>,
  pub explanations: Vec<String>,
  /// Fixed-band heart-rate/temperature screen, independent of weather.
  pub vitals_screen: RiskLevel,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub advisory: Option<String>,
  /// Level after presentation smoothing, when enabled.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub display_level: Option<RiskLevel>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
