//! Fixed logistic-regression scorer.

use crate::config::LogisticModel;

/// Feature vector in model order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
  pub body_temperature_c: f64,
  pub heat_index_c: f64,
  pub humidity_ratio: f64,
  pub env_temperature_c: f64,
}

impl Features {
  pub fn as_array(&self) -> [f64; 4] {
    [
      self.body_temperature_c,
      self.heat_index_c,
      self.humidity_ratio,
      self.env_temperature_c,
    ]
  }
}

/// Numerically stable logistic function.
pub fn sigmoid(z: f64) -> f64 {
  if z >= 0.0 {
    1.0 / (1.0 + (-z).exp())
  } else {
    let e = z.exp();
    e / (1.0 + e)
  }
}

impl LogisticModel {
  /// Linear predictor `intercept + Σ coef[i] * feature[i]`.
  pub fn logit(&self, features: &Features) -> f64 {
    self
      .coefficients
      .iter()
      .zip(features.as_array())
      .fold(self.intercept, |acc, (c, x)| acc + c * x)
  }

  /// Probability in (0,1).
  pub fn score(&self, features: &Features) -> f64 {
    sigmoid(self.logit(features))
  }
}
