//! Error types for build evaluation.
//!
//! All errors that can occur while evaluating a build or running the
//! search are represented by the `BuildError` enum.

use crate::catalog::Category;
use std::fmt;
use thiserror::Error;

/// The formula that rejected its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    /// `ln(a*b*c*d*e) / 9.8 - 0.25`
    StatMultiplier,
    /// `sqrt(175 * multiplier) - 10`
    GpRegen,
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::StatMultiplier => write!(f, "stat multiplier"),
            Formula::GpRegen => write!(f, "gp regen"),
        }
    }
}

/// Format formula inputs as a readable list.
fn format_inputs(inputs: &[f64]) -> String {
    inputs
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur during build evaluation.
///
/// # Examples
///
/// ```rust
/// use build_optimizer::BuildError;
///
/// let err = BuildError::UnreachableThreshold {
///     skill: "dagger".to_string(),
///     threshold: 700.0,
/// };
/// assert!(err.to_string().contains("dagger"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BuildError {
    /// A formula was evaluated outside its domain.
    ///
    /// The stat multiplier needs a strictly positive product; gp regen
    /// needs a non-negative radicand.
    #[error("{formula} undefined for inputs [{}]", format_inputs(.inputs))]
    DomainViolation { formula: Formula, inputs: Vec<f64> },

    /// No level reaches the bonus threshold for this skill.
    #[error("Threshold {threshold} unreachable for skill {skill}")]
    UnreachableThreshold { skill: String, threshold: f64 },

    /// A catalog pattern is malformed.
    ///
    /// The catalog is static, so this only surfaces when it is loaded.
    #[error("Invalid pattern {code:?} for skill {skill}: {reason}")]
    InvalidPattern {
        skill: String,
        code: String,
        reason: String,
    },

    /// A best-of category had no alternatives to choose from.
    #[error("No skills to choose from in {0}")]
    EmptyCategory(Category),

    /// The search configuration could not be loaded or is inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
