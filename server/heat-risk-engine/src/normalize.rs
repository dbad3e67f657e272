//! Normalize raw vitals/weather readings into the values the scorers consume.
//!
//! Absent, non-finite, or out-of-range fields become "absent". Nothing is
//! default-filled.

use crate::config::RiskConfig;
use crate::types::{VitalsReading, WeatherReading};

/// Weather conditions after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
  pub temperature_c: f64,
  /// 0–1.
  pub humidity_ratio: f64,
  pub sun_exposure: bool,
}

fn finite(v: Option<f64>) -> Option<f64> {
  v.filter(|x| x.is_finite())
}

/// Body temperature, falling back to skin temperature.
pub fn body_temperature(vitals: &VitalsReading) -> Option<f64> {
  finite(vitals.body_temperature_c).or_else(|| finite(vitals.skin_temperature_c))
}

/// Usable weather conditions, or `None` when temperature or humidity is missing.
pub fn conditions(weather: &WeatherReading, config: &RiskConfig) -> Option<Conditions> {
  let temperature_c = finite(weather.temperature_c)?;
  let humidity = finite(weather.relative_humidity_percent).filter(|h| (0.0..=100.0).contains(h))?;
  Some(Conditions {
    temperature_c,
    humidity_ratio: humidity / 100.0,
    sun_exposure: sun_exposure(weather.uv_index, config),
  })
}

/// Sun exposure iff the UV index is known and above the threshold.
pub fn sun_exposure(uv_index: Option<f64>, config: &RiskConfig) -> bool {
  finite(uv_index).is_some_and(|uv| uv > config.sun_uv_threshold)
}
