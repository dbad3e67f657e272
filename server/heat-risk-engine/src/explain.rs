//! Short human-readable reasons behind an assessment.

use crate::config::RiskConfig;
use crate::types::EvaluationDetail;

pub fn explanations(detail: &EvaluationDetail, config: &RiskConfig) -> Vec<String> {
  let mut out = Vec::new();

  match detail.body_temperature_c {
    None => out.push("No body or skin temperature reading".to_string()),
    Some(t) if t >= config.core_temp_upper_c => out.push(format!(
      "Body temperature {:.1} °C is at or above {:.1} °C",
      t, config.core_temp_upper_c
    )),
    Some(t) if t >= config.core_temp_lower_c => {
      out.push(format!("Body temperature {:.1} °C is elevated", t))
    }
    Some(_) => {}
  }

  match detail.heat_index_c {
    None => out.push("Weather reading incomplete (temperature or humidity missing)".to_string()),
    Some(hi) if hi >= config.heat_index_high_c => out.push(format!(
      "Apparent temperature {:.1} °C is extreme",
      hi
    )),
    Some(hi) if hi > config.heat_index_low_c => {
      out.push(format!("Apparent temperature {:.1} °C adds heat stress", hi))
    }
    Some(_) => {}
  }

  if detail.sun_exposure {
    out.push(format!(
      "Strong UV: +{:.0} °C added for direct sun",
      config.sun_bonus_c
    ));
  }

  if let Some(p) = detail.assessment.components.logistic_regression {
    if p >= 0.5 {
      out.push(format!("Model probability {:.0}%", p * 100.0));
    }
  }

  out
}
