//! Risk combiner and level classifier.

use crate::config::{CombinePolicy, RiskConfig};
use crate::types::{ComponentScores, RiskAssessment, RiskLevel};

/// Composite risk over the present components; `None` when none are present.
pub fn composite_risk(components: &ComponentScores, policy: &CombinePolicy) -> Option<f64> {
  let present: Vec<f64> = [
    components.core_temperature,
    components.logistic_regression,
    components.heat_index,
  ]
  .into_iter()
  .flatten()
  .collect();
  if present.is_empty() {
    return None;
  }
  let mean = present.iter().sum::<f64>() / present.len() as f64;

  match *policy {
    CombinePolicy::Mean => Some(mean),
    CombinePolicy::Weighted {
      core,
      logistic,
      heat_index,
    } => {
      let pairs = [
        (components.core_temperature, core),
        (components.logistic_regression, logistic),
        (components.heat_index, heat_index),
      ];
      let (sum, weight) = pairs
        .iter()
        .filter_map(|(score, w)| score.map(|s| (s * w, *w)))
        .fold((0.0, 0.0), |(sum, weight), (sw, w)| (sum + sw, weight + w));
      // Present components may all carry zero weight.
      if weight > 0.0 {
        Some(sum / weight)
      } else {
        Some(mean)
      }
    }
  }
}

/// Threshold a composite risk into a level.
pub fn classify(composite: Option<f64>, config: &RiskConfig) -> RiskLevel {
  match composite {
    None => RiskLevel::Unknown,
    Some(r) if r >= config.danger_threshold => RiskLevel::Danger,
    Some(r) if r >= config.warning_threshold => RiskLevel::Warning,
    Some(_) => RiskLevel::Stable,
  }
}

/// Merge component scores into an assessment.
pub fn assess(components: ComponentScores, config: &RiskConfig) -> RiskAssessment {
  let composite = composite_risk(&components, &config.combine).map(|r| r.clamp(0.0, 1.0));
  RiskAssessment {
    level: classify(composite, config),
    composite_risk: composite,
    components,
  }
}
