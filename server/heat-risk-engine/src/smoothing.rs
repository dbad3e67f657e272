//! Presentation-layer hysteresis for the displayed risk level.
//!
//! The engine itself is stateless; this holds the last shown level across a
//! stream of assessments so the badge does not flicker between adjacent levels.

use crate::types::RiskLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothingConfig {
  /// Consecutive higher readings needed to escalate.
  pub escalate_after: u32,
  /// Consecutive lower readings needed to de-escalate.
  pub deescalate_after: u32,
}

impl Default for SmoothingConfig {
  fn default() -> Self {
    Self {
      escalate_after: 1,
      deescalate_after: 3,
    }
  }
}

#[derive(Debug, Clone)]
pub struct LevelSmoother {
  config: SmoothingConfig,
  shown: RiskLevel,
  consecutive_above: u32,
  consecutive_below: u32,
}

impl LevelSmoother {
  pub fn new(config: SmoothingConfig) -> Self {
    Self {
      config,
      shown: RiskLevel::Unknown,
      consecutive_above: 0,
      consecutive_below: 0,
    }
  }

  /// Feed the latest computed level; returns the level to display.
  pub fn update(&mut self, level: RiskLevel) -> RiskLevel {
    let (current, next) = match (self.shown.severity(), level.severity()) {
      (Some(c), Some(n)) => (c, n),
      // Unknown in or out: nothing to hold against.
      _ => {
        self.reset(level);
        return level;
      }
    };

    if next > current {
      self.consecutive_above += 1;
      self.consecutive_below = 0;
      if self.consecutive_above >= self.config.escalate_after {
        self.reset(level);
      }
    } else if next < current {
      self.consecutive_below += 1;
      self.consecutive_above = 0;
      if self.consecutive_below >= self.config.deescalate_after {
        self.reset(level);
      }
    } else {
      self.consecutive_above = 0;
      self.consecutive_below = 0;
    }

    self.shown
  }

  fn reset(&mut self, level: RiskLevel) {
    self.shown = level;
    self.consecutive_above = 0;
    self.consecutive_below = 0;
  }
}

impl Default for LevelSmoother {
  fn default() -> Self {
    Self::new(SmoothingConfig::default())
  }
}
