//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is an EvaluateRequest `{"vitals": {...}, "weather": {...}}`.
//! Each output line is either an AssessmentReport or an ErrorOutput (bad JSON).
//! Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use heat_risk_engine::smoothing::LevelSmoother;
use heat_risk_engine::types::ErrorOutput;
use heat_risk_engine::{report, EvaluateRequest, RiskConfig, RiskEngine};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "heat-risk-engine", about = "Score heat-illness risk from vitals + weather JSON lines")]
struct Cli {
  /// JSON file overriding the default thresholds and weights.
  #[arg(long)]
  config: Option<PathBuf>,

  /// Treat the input as one wearable's stream and add a smoothed `displayLevel`.
  #[arg(long)]
  smooth: bool,

  /// Debug logging.
  #[arg(short, long)]
  verbose: bool,
}

fn main() {
  let cli = Cli::parse();
  let default_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(io::stderr)
    .init();

  if let Err(e) = run_binary(&cli) {
    let _ = writeln!(io::stderr(), "heat-risk-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
  let config = match &cli.config {
    Some(path) => {
      info!(path = %path.display(), "loading risk config");
      RiskConfig::from_json_file(path)?
    }
    None => RiskConfig::default(),
  };
  let engine = RiskEngine::new(config);
  let mut smoother = cli.smooth.then(LevelSmoother::default);

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  for line in stdin.lock().lines() {
    let line = line?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let request: EvaluateRequest = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        warn!(error = %e, "skipping malformed input line");
        serde_json::to_writer(&mut out, &ErrorOutput::new(format!("json parse: {}", e)))?;
        writeln!(out)?;
        continue;
      }
    };

    let mut result = report(&engine, &request);
    if let Some(s) = smoother.as_mut() {
      result.display_level = Some(s.update(result.assessment.level));
    }
    serde_json::to_writer(&mut out, &result)?;
    writeln!(out)?;
  }

  out.flush()?;
  Ok(())
}
