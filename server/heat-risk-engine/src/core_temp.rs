//! Core (body) temperature risk: logistic ramp pinned at both bounds.

use crate::config::RiskConfig;

/// Risk in [0,1] for a body temperature in °C.
///
/// - `>= upper` is certain danger (1).
/// - `< lower` is 0.
/// - In between, `1 / (1 + exp(offset - slope * x))` with `x` the position in the band.
pub fn core_temperature_risk(body_temperature_c: f64, config: &RiskConfig) -> f64 {
  let lower = config.core_temp_lower_c;
  let upper = config.core_temp_upper_c;

  if body_temperature_c >= upper {
    return 1.0;
  }
  if body_temperature_c < lower {
    return 0.0;
  }

  let x = (body_temperature_c - lower) / (upper - lower);
  1.0 / (1.0 + (config.core_curve_offset - config.core_curve_slope * x).exp())
}
