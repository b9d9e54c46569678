//! Command handlers.

use anyhow::{Context, Result};
use bosco_core::{GateConfig, GateEvaluator, GateMessage, GateRequest, GateResult};
use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// How `open` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The gate message only
    #[default]
    Text,
    /// Request, result and message as JSON
    Json,
}

/// Inputs for `open`. Flags override values from `--request`.
#[derive(Debug, Clone, Default, Args)]
pub struct OpenArgs {
    /// Throat radius r0 [0.001, 0.05]
    #[arg(long)]
    pub radius: Option<f64>,

    /// Exotic energy density [10, 200]
    #[arg(long)]
    pub energy: Option<f64>,

    /// Quantum state label
    #[arg(long)]
    pub label: Option<String>,

    /// Current time (t_now) [0, 10000]
    #[arg(long)]
    pub now: Option<f64>,

    /// Target time (t_target) [0, 10000]
    #[arg(long)]
    pub target: Option<f64>,

    /// Divergence decay rate (defaults to the config value)
    #[arg(long, allow_hyphen_values = true)]
    pub decay_rate: Option<f64>,

    /// Request file (YAML, or JSON by extension)
    #[arg(long)]
    pub request: Option<PathBuf>,

    /// Evaluator config file (YAML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Clamp out-of-range inputs instead of rejecting them
    #[arg(long)]
    pub clamp: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Everything produced by one `open` invocation.
#[derive(Debug, Clone, Serialize)]
pub struct OpenReport {
    pub request: GateRequest,
    pub result: GateResult,
    pub message: GateMessage,
    pub evaluated_at: DateTime<Utc>,
}

/// Evaluate one request.
///
/// An unstable gate is a normal outcome and returns `Ok`.
pub fn cmd_open(args: &OpenArgs) -> Result<OpenReport> {
    let request = build_request(args)?;
    let config = load_config(args.config.as_deref())?;

    info!(
        label = %request.state_label,
        radius = request.throat_radius,
        energy = request.exotic_energy_density,
        "opening gate"
    );

    let result = GateEvaluator::with_config(config).evaluate(&request);
    let message = GateMessage::from_result(&request, &result);

    if result.is_stable {
        info!(beta = result.beta, divergence = result.divergence, "gate stable");
    } else {
        info!(beta = result.beta, divergence = result.divergence, "gate unstable");
    }

    Ok(OpenReport {
        request,
        result,
        message,
        evaluated_at: Utc::now(),
    })
}

/// Load and validate a request file.
pub fn cmd_validate(path: &Path) -> Result<GateRequest> {
    let request = GateRequest::from_file(path)
        .with_context(|| format!("Invalid request file {}", path.display()))?;
    debug!(path = %path.display(), "request file valid");
    Ok(request)
}

/// The default request as YAML.
pub fn cmd_defaults() -> Result<String> {
    let request = GateRequest::default().with_decay_rate(GateConfig::default().decay_rate);
    serde_yaml::to_string(&request).context("Failed to serialize default request")
}

/// Render an `open` report in the chosen format.
pub fn render_report(report: &OpenReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.message.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(report).context("Failed to serialize report")
        }
    }
}

fn build_request(args: &OpenArgs) -> Result<GateRequest> {
    // With --clamp, file values are clamped below rather than rejected on load.
    let mut request = match &args.request {
        Some(path) if args.clamp => GateRequest::from_file_unchecked(path)
            .with_context(|| format!("Failed to load request {}", path.display()))?,
        Some(path) => GateRequest::from_file(path)
            .with_context(|| format!("Failed to load request {}", path.display()))?,
        None => GateRequest::default(),
    };

    if let Some(radius) = args.radius {
        request.throat_radius = radius;
    }
    if let Some(energy) = args.energy {
        request.exotic_energy_density = energy;
    }
    if let Some(label) = &args.label {
        request.state_label = label.clone();
    }
    if let Some(now) = args.now {
        request.current_time = now;
    }
    if let Some(target) = args.target {
        request.target_time = target;
    }
    if let Some(decay_rate) = args.decay_rate {
        request.decay_rate = Some(decay_rate);
    }

    if args.clamp {
        let clamped = request.clamped();
        if clamped != request {
            debug!("clamped out-of-range inputs");
        }
        request = clamped;
    }

    request.validate().context("Invalid gate inputs")?;
    Ok(request)
}

fn load_config(path: Option<&Path>) -> Result<GateConfig> {
    match path {
        Some(path) => GateConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(GateConfig::default()),
    }
}
