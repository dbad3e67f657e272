//! Evaluation entry point: normalize inputs, run the three scorers, combine.

use tracing::debug;

use crate::combine;
use crate::config::RiskConfig;
use crate::core_temp::core_temperature_risk;
use crate::heat_index::{estimate_heat_index_c, risk_for_heat_index_c};
use crate::logistic::Features;
use crate::normalize::{self, Conditions};
use crate::types::*;

/// Stateless risk engine bound to one configuration. Cheap to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
  config: RiskConfig,
}

impl RiskEngine {
  pub fn new(config: RiskConfig) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(RiskConfig::default())
  }

  pub fn config(&self) -> &RiskConfig {
    &self.config
  }

  pub fn evaluate(&self, vitals: &VitalsReading, weather: &WeatherReading) -> RiskAssessment {
    self.evaluate_detailed(vitals, weather).assessment
  }

  /// Evaluate and keep the intermediate values for display.
  pub fn evaluate_detailed(&self, vitals: &VitalsReading, weather: &WeatherReading) -> EvaluationDetail {
    self.evaluate_normalized(
      normalize::body_temperature(vitals),
      normalize::conditions(weather, &self.config),
    )
  }

  /// Evaluate inputs that were already validated (e.g. the dashboard's flat predict payload).
  pub fn evaluate_normalized(&self, body: Option<f64>, conditions: Option<Conditions>) -> EvaluationDetail {
    let config = &self.config;
    let heat_index_c = conditions.map(|c| {
      estimate_heat_index_c(c.humidity_ratio, c.temperature_c, c.sun_exposure, config)
    });

    let core_temperature = body.map(|t| core_temperature_risk(t, config));
    let heat_index = heat_index_c.map(|hi| risk_for_heat_index_c(hi, config));
    let logistic_regression = match (body, conditions, heat_index_c) {
      (Some(body_temperature_c), Some(c), Some(hi)) => Some(config.model.score(&Features {
        body_temperature_c,
        heat_index_c: hi,
        humidity_ratio: c.humidity_ratio,
        env_temperature_c: c.temperature_c,
      })),
      _ => None,
    };

    let components = ComponentScores {
      core_temperature,
      heat_index,
      logistic_regression,
    };
    // Weather alone never yields a level; its component is still reported for display.
    let assessment = match body {
      Some(_) => combine::assess(components, config),
      None => RiskAssessment {
        components,
        ..RiskAssessment::unknown()
      },
    };

    if assessment.level == RiskLevel::Unknown {
      debug!(
        has_vitals = body.is_some(),
        has_weather = conditions.is_some(),
        "insufficient data for risk evaluation"
      );
    } else {
      debug!(
        level = %assessment.level,
        composite = assessment.composite_risk.unwrap_or_default(),
        "risk evaluated"
      );
    }

    EvaluationDetail {
      assessment,
      heat_index_c,
      sun_exposure: conditions.is_some_and(|c| c.sun_exposure),
      body_temperature_c: body,
    }
  }
}

/// Evaluate with the reference configuration.
pub fn evaluate_risk(vitals: &VitalsReading, weather: &WeatherReading) -> RiskAssessment {
  RiskEngine::with_defaults().evaluate(vitals, weather)
}
