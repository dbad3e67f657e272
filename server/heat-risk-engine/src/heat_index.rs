//! Apparent temperature estimate and the heat-index risk ramp.

use crate::config::RiskConfig;

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
  c * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
  (f - 32.0) * 5.0 / 9.0
}

/// NOAA nine-term regression (Rothfusz), `t` in °F and `rh` in percent.
///
/// Applied across the whole temperature range. It is non-decreasing in `t`
/// from roughly 27 °C upward at any humidity; below that, at high humidity,
/// it dips slightly.
fn rothfusz_f(t: f64, rh: f64) -> f64 {
  let t2 = t * t;
  let rh2 = rh * rh;
  -42.379 + 2.04901523 * t + 10.14333127 * rh
    - 0.22475541 * t * rh
    - 6.83783e-3 * t2
    - 5.481717e-2 * rh2
    + 1.22874e-3 * t2 * rh
    + 8.5282e-4 * t * rh2
    - 1.99e-6 * t2 * rh2
}

/// Estimated apparent temperature in °C.
///
/// `humidity_ratio` is 0–1. Sun exposure adds `config.sun_bonus_c` on top.
/// NaN inputs propagate; callers filter unusable readings beforehand.
pub fn estimate_heat_index_c(
  humidity_ratio: f64,
  temperature_c: f64,
  sun_exposure: bool,
  config: &RiskConfig,
) -> f64 {
  let hi_f = rothfusz_f(celsius_to_fahrenheit(temperature_c), humidity_ratio * 100.0);
  let hi_c = fahrenheit_to_celsius(hi_f);
  if sun_exposure {
    hi_c + config.sun_bonus_c
  } else {
    hi_c
  }
}

/// Linear ramp: 0 at or below `low`, 1 at or above `high`.
fn linear_ramp(value: f64, low: f64, high: f64) -> f64 {
  if value <= low {
    0.0
  } else if value >= high {
    1.0
  } else {
    (value - low) / (high - low)
  }
}

/// Risk in [0,1] for an apparent temperature that was already estimated.
pub fn risk_for_heat_index_c(heat_index_c: f64, config: &RiskConfig) -> f64 {
  linear_ramp(heat_index_c, config.heat_index_low_c, config.heat_index_high_c)
}

/// Heat-index risk in [0,1] straight from raw conditions.
///
/// Callers that also display the apparent temperature estimate it once and use
/// [`risk_for_heat_index_c`] instead.
pub fn heat_index_risk(
  humidity_ratio: f64,
  temperature_c: f64,
  sun_exposure: bool,
  config: &RiskConfig,
) -> f64 {
  risk_for_heat_index_c(
    estimate_heat_index_c(humidity_ratio, temperature_c, sun_exposure, config),
    config,
  )
}
