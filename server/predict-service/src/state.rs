//! Shared handler state.

use heat_risk_engine::RiskEngine;

pub struct AppState {
  pub engine: RiskEngine,
}
