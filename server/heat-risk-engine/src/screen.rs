//! Vitals quick screen: fixed heart-rate and body-temperature bands.
//!
//! Independent of weather; used by the health page when only the wearable is available.

use crate::types::{RiskLevel, VitalsReading};

/// Classify heart rate + body temperature. Both must be present and finite.
pub fn screen_vitals(vitals: &VitalsReading) -> RiskLevel {
  let (hr, temp) = match (
    vitals.heart_rate_bpm.filter(|v| v.is_finite()),
    vitals.body_temperature_c.filter(|v| v.is_finite()),
  ) {
    (Some(hr), Some(temp)) => (hr, temp),
    _ => return RiskLevel::Unknown,
  };

  if hr > 100.0 || hr < 60.0 || temp > 37.5 || temp < 36.5 {
    RiskLevel::Danger
  } else if hr > 90.0 || hr < 70.0 || temp > 37.2 || temp < 36.8 {
    RiskLevel::Warning
  } else {
    RiskLevel::Stable
  }
}
