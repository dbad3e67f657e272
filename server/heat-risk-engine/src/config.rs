//! Engine configuration with reference defaults.
//!
//! Weights and cutoffs are tunable parameters, not physiological constants;
//! load overrides from a JSON file and validate before use.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How the three component scores are merged into one composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum CombinePolicy {
  /// Arithmetic mean of the present components.
  Mean,
  /// Fixed weights, renormalized over the present components.
  Weighted {
    core: f64,
    logistic: f64,
    heat_index: f64,
  },
}

impl Default for CombinePolicy {
  fn default() -> Self {
    Self::Weighted {
      core: 0.6,
      logistic: 0.25,
      heat_index: 0.15,
    }
  }
}

/// Pre-trained linear model over `[body_temp_c, heat_index_c, humidity_ratio, env_temp_c]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
  pub coefficients: [f64; 4],
  pub intercept: f64,
}

impl Default for LogisticModel {
  fn default() -> Self {
    Self {
      coefficients: [
        2.574003400838424,
        0.21202990703854882,
        13.598795820953342,
        0.3255197628042613,
      ],
      intercept: -131.8250160887149,
    }
  }
}

/// Tunable constants for every component of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
  /// Below this body temperature the core risk is 0.
  pub core_temp_lower_c: f64,
  /// At or above this body temperature the core risk is 1.
  pub core_temp_upper_c: f64,
  /// Logistic ramp `1 / (1 + exp(offset - slope * x))`.
  pub core_curve_offset: f64,
  pub core_curve_slope: f64,
  /// Heat index (°C) where the heat-index risk starts rising.
  pub heat_index_low_c: f64,
  /// Heat index (°C) where the heat-index risk saturates.
  pub heat_index_high_c: f64,
  /// Flat bonus added to the apparent temperature under direct sun.
  pub sun_bonus_c: f64,
  /// UV index strictly above this counts as sun exposure.
  pub sun_uv_threshold: f64,
  pub combine: CombinePolicy,
  pub danger_threshold: f64,
  pub warning_threshold: f64,
  pub model: LogisticModel,
}

impl Default for RiskConfig {
  fn default() -> Self {
    Self {
      core_temp_lower_c: 37.5,
      core_temp_upper_c: 39.0,
      core_curve_offset: 2.0,
      core_curve_slope: 8.0,
      heat_index_low_c: 30.0,
      heat_index_high_c: 41.0,
      sun_bonus_c: 4.0,
      sun_uv_threshold: 5.0,
      combine: CombinePolicy::default(),
      danger_threshold: 0.5,
      warning_threshold: 0.2,
      model: LogisticModel::default(),
    }
  }
}

impl RiskConfig {
  /// Read a (possibly partial) JSON config; missing fields keep their defaults.
  pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
    let raw = std::fs::read_to_string(path)?;
    let config: Self = serde_json::from_str(&raw)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), EngineError> {
    let scalars = [
      ("core_temp_lower_c", self.core_temp_lower_c),
      ("core_temp_upper_c", self.core_temp_upper_c),
      ("core_curve_offset", self.core_curve_offset),
      ("core_curve_slope", self.core_curve_slope),
      ("heat_index_low_c", self.heat_index_low_c),
      ("heat_index_high_c", self.heat_index_high_c),
      ("sun_bonus_c", self.sun_bonus_c),
      ("sun_uv_threshold", self.sun_uv_threshold),
      ("danger_threshold", self.danger_threshold),
      ("warning_threshold", self.warning_threshold),
      ("model.intercept", self.model.intercept),
    ];
    for (field, value) in scalars {
      if !value.is_finite() {
        return Err(EngineError::config(field, "must be finite"));
      }
    }
    if self.model.coefficients.iter().any(|c| !c.is_finite()) {
      return Err(EngineError::config("model.coefficients", "must be finite"));
    }

    if self.core_temp_lower_c >= self.core_temp_upper_c {
      return Err(EngineError::config(
        "core_temp_lower_c",
        "must be below core_temp_upper_c",
      ));
    }
    if self.heat_index_low_c >= self.heat_index_high_c {
      return Err(EngineError::config(
        "heat_index_low_c",
        "must be below heat_index_high_c",
      ));
    }

    for (field, value) in [
      ("danger_threshold", self.danger_threshold),
      ("warning_threshold", self.warning_threshold),
    ] {
      if !(0.0..=1.0).contains(&value) {
        return Err(EngineError::config(field, "must be within [0, 1]"));
      }
    }
    if self.warning_threshold > self.danger_threshold {
      return Err(EngineError::config(
        "warning_threshold",
        "must not exceed danger_threshold",
      ));
    }

    if let CombinePolicy::Weighted {
      core,
      logistic,
      heat_index,
    } = self.combine
    {
      let weights = [core, logistic, heat_index];
      if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(EngineError::config(
          "combine",
          "weights must be finite and non-negative",
        ));
      }
      if weights.iter().sum::<f64>() <= 0.0 {
        return Err(EngineError::config("combine", "weights must not all be zero"));
      }
    }

    Ok(())
  }
}
