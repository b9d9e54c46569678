//! Gate messages: what the user sees after pressing "Open Gate".
//!
//! A stable gate yields a success headline plus a divergence detail line.
//! An unstable gate yields a single error line with the same diagnostics.
//! Beta is shown to two decimals and divergence to three.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{GateRequest, GateResult};

/// Message category and text for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateMessage {
    /// The gate opened
    Success { headline: String, detail: String },

    /// The gate failed to stabilize
    Failure { text: String },
}

impl GateMessage {
    /// Build the message for an evaluated request.
    pub fn from_result(request: &GateRequest, result: &GateResult) -> Self {
        if result.is_stable {
            GateMessage::Success {
                headline: format!(
                    "Wormhole open to timeline '{}' at time {} with stability {:.2}.",
                    request.state_label,
                    format_time(request.target_time),
                    result.beta
                ),
                detail: format!("Timeline divergence factor: {:.3}", result.divergence),
            }
        } else {
            GateMessage::Failure {
                text: format!(
                    "Failed to stabilize wormhole. Stability {:.2}, divergence {:.3}.",
                    result.beta, result.divergence
                ),
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GateMessage::Success { .. })
    }
}

impl fmt::Display for GateMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateMessage::Success { headline, detail } => write!(f, "{}\n{}", headline, detail),
            GateMessage::Failure { text } => write!(f, "{}", text),
        }
    }
}

/// Whole-number times print without a fractional part.
fn format_time(time: f64) -> String {
    if time.is_finite() && time.fract() == 0.0 && time.abs() < 1e15 {
        format!("{}", time as i64)
    } else {
        format!("{}", time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GateEvaluator;

    fn result(is_stable: bool, beta: f64, divergence: f64) -> GateResult {
        GateResult {
            is_stable,
            beta,
            divergence,
            alpha: divergence,
            delta_t: 0.0,
            decay_rate: 0.1,
        }
    }

    #[test]
    fn test_success_wording() {
        let request = GateRequest::new(0.05, 200.0, "Q-Event-42", 900.0, 900.0);
        let message = GateMessage::from_result(&request, &result(true, 6.283_185, 0.662));

        assert_eq!(
            message,
            GateMessage::Success {
                headline: "Wormhole open to timeline 'Q-Event-42' at time 900 with stability 6.28."
                    .to_string(),
                detail: "Timeline divergence factor: 0.662".to_string(),
            }
        );
        assert!(message.is_success());
    }

    #[test]
    fn test_failure_wording() {
        let message = GateMessage::from_result(
            &GateRequest::default(),
            &result(false, 0.125_663_7, 0.000_030_05),
        );

        assert_eq!(
            message.to_string(),
            "Failed to stabilize wormhole. Stability 0.13, divergence 0.000."
        );
        assert!(!message.is_success());
    }

    #[test]
    fn test_success_display_is_two_lines() {
        let request = GateRequest::new(0.05, 200.0, "Q-Event-42", 900.0, 900.0);
        let evaluated = GateEvaluator::new().evaluate(&request);
        let text = GateMessage::from_result(&request, &evaluated).to_string();

        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with("Timeline divergence factor: 0.662"));
    }

    #[test]
    fn test_infinite_divergence_renders() {
        let message = GateMessage::from_result(
            &GateRequest::default(),
            &result(false, 0.1, f64::INFINITY),
        );
        assert_eq!(
            message.to_string(),
            "Failed to stabilize wormhole. Stability 0.10, divergence inf."
        );
    }

    #[test]
    fn test_fractional_time() {
        assert_eq!(format_time(900.0), "900");
        assert_eq!(format_time(900.5), "900.5");
    }
}
