//! Structured error types for the risk engine.
//!
//! Evaluation itself never fails; these cover configuration and I/O around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("config: {field}: {reason}")]
  Config { field: String, reason: String },

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn config(field: &str, reason: &str) -> Self {
    Self::Config {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}
