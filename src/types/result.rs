//! The terminal result bundle and the reports embedded in it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::component::GeneratedComponent;
use crate::tokens::DesignTokens;

/// Everything one generation run produces. Owned solely by the caller once
/// returned; the pipeline keeps no reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub components: Vec<GeneratedComponent>,
    pub design_tokens: DesignTokens,
    pub design_system: DesignSystemOutput,
    pub documentation: DocumentationOutput,
    pub tests: TestOutput,
    pub storybook: StorybookOutput,
    pub performance: PerformanceReport,
    pub quality: QualityReport,
}

/// Design-system text artifacts derived from the extracted tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSystemOutput {
    /// Contents of `design-tokens.css`.
    pub token_stylesheet: String,
    /// Token name to CSS value, in stable order.
    pub theme: BTreeMap<String, String>,
    pub utility_classes: String,
    pub base_styles: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationOutput {
    /// Contents of `README.md`. On a failed run this carries the failure
    /// explanation.
    pub readme: String,
    /// Per-component markdown, keyed by filename.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub component_docs: BTreeMap<String, String>,
}

/// Generated test file text, one map per category, keyed by filename.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutput {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub unit: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub integration: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub e2e: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub accessibility: BTreeMap<String, String>,
}

impl TestOutput {
    pub fn file_count(&self) -> usize {
        self.unit.len() + self.integration.len() + self.e2e.len() + self.accessibility.len()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorybookOutput {
    /// Story file text keyed by filename.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stories: BTreeMap<String, String>,
}

/// Per-run performance observations. Advisory; nothing here is enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub bundle_size_kb: f64,
    pub estimated_load_time_ms: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phase_timings: Vec<PhaseTiming>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub optimizations_applied: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseTiming {
    pub phase: String,
    pub elapsed_ms: u64,
}

/// Aggregated quality scores plus the individual findings behind them.
///
/// Scores are relative deduction metrics: each starts at 100 and fixed
/// per-issue penalties are subtracted, floored at 0. They are not derived
/// from any absolute rubric.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    pub code_quality: u8,
    pub accessibility: u8,
    pub performance: u8,
    pub maintainability: u8,
    /// A constant 85 when test generation is enabled, 0 otherwise. A coarse
    /// proxy, not measured from the generated tests.
    pub test_coverage: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<QualityIssue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl QualityReport {
    /// All-zero report used as the fallback shape for failed runs.
    pub fn zeroed() -> Self {
        Self {
            code_quality: 0,
            accessibility: 0,
            performance: 0,
            maintainability: 0,
            test_coverage: 0,
            issues: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityIssue {
    pub severity: IssueSeverity,
    pub category: IssueCategory,
    /// Name of the component the finding applies to.
    pub component: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    Accessibility,
    Performance,
    Maintainability,
    CodeStandards,
}
