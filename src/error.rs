use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the generation pipeline.
///
/// Heuristic findings (missing ARIA attributes, oversized components, and so
/// on) are data, not errors: they flow into the quality report and never take
/// this form. `FigforgeError` is reserved for structural failures that abort
/// the current phase and the whole run.
#[derive(Debug, Error)]
pub enum FigforgeError {
    /// Invalid configuration: unknown enum value or out-of-range option.
    /// Raised before any phase runs.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or missing Figma document structure.
    #[error("Input error: {0}")]
    Input(String),

    /// A pipeline phase threw; tagged with the phase name and the time spent
    /// in it before the failure.
    #[error("Phase '{phase}' failed after {elapsed_ms}ms: {message}")]
    Phase {
        phase: String,
        elapsed_ms: u64,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FigforgeError {
    pub fn config(message: impl Into<String>) -> Self {
        FigforgeError::Config(message.into())
    }

    pub fn input(message: impl Into<String>) -> Self {
        FigforgeError::Input(message.into())
    }

    pub fn phase(phase: impl Into<String>, elapsed_ms: u64, message: impl Into<String>) -> Self {
        FigforgeError::Phase {
            phase: phase.into(),
            elapsed_ms,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FigforgeError::Config(_) => ErrorCategory::Config,
            FigforgeError::Input(_) => ErrorCategory::Input,
            FigforgeError::Phase { .. } => ErrorCategory::Phase,
            FigforgeError::Serialization(_) => ErrorCategory::Config,
        }
    }

    /// Human-readable remediation text for the failure.
    ///
    /// The orchestrator embeds this in the fallback result's quality
    /// recommendations; it is the only error-reporting channel exposed
    /// through the main result type.
    pub fn suggested_fix(&self) -> String {
        match self {
            FigforgeError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("framework") {
                    "Use one of the supported frameworks: react, vue, angular, svelte.".to_string()
                } else if lower.contains("styling") {
                    "Use one of the supported styling systems: css, scss, styled-components, tailwind."
                        .to_string()
                } else if lower.contains("methodology") {
                    "Use one of the supported CSS methodologies: bem, smacss, itcss, cube."
                        .to_string()
                } else if lower.contains("bundle") {
                    "Set optimization.maxBundleSizeKb to a value greater than zero.".to_string()
                } else if lower.contains("performance score") {
                    "Set optimization.targetPerformanceScore between 0 and 100.".to_string()
                } else {
                    "Review the generation configuration; the error message names the offending field."
                        .to_string()
                }
            }
            FigforgeError::Input(_) => {
                "Verify the Figma API response contains a document tree; re-fetch the file if it was truncated."
                    .to_string()
            }
            FigforgeError::Phase { phase, .. } => format!(
                "Inspect the input handed to the '{}' phase; re-run with debug logging enabled for details.",
                phase
            ),
            FigforgeError::Serialization(_) => {
                "Check the structure of the Figma JSON payload against the documented schema."
                    .to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FigforgeError>;

/// Coarse error classification, serialized into failure summaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Input,
    Phase,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCategory::Config => "config",
            ErrorCategory::Input => "input",
            ErrorCategory::Phase => "phase",
        })
    }
}
