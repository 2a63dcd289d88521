//! The generated component unit.

use serde::{Deserialize, Serialize};

use crate::config::ResponsiveStrategy;

/// One generated component: the central output unit of the pipeline.
///
/// Created exactly once per matching Figma node by a framework generator.
/// Later phases replace rather than mutate: the optimizer may swap a
/// component for a rewritten copy (or drop it during deduplication, keeping
/// one representative), and the library manager may extend its text to
/// reference a synthesized base component.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedComponent {
    /// Source Figma node id; the stable join key across phases.
    pub id: String,
    /// Sanitized to a valid type/identifier form in every target language.
    pub name: String,
    /// Markup/template text (JSX, SFC template, decorator class, ...).
    pub jsx: String,
    /// Stylesheet text.
    pub css: String,
    /// Stylesheet text split off to load lazily when the bundle goes over
    /// budget; not counted toward the eager bundle size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deferred_css: Option<String>,
    /// Type declaration text, present when TypeScript output is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typescript: Option<String>,
    pub accessibility: AccessibilityReport,
    pub responsive: ResponsiveReport,
    pub metadata: ComponentMetadata,
}

impl GeneratedComponent {
    /// Byte size of the eagerly loaded text (markup plus stylesheet).
    pub fn eager_bytes(&self) -> usize {
        self.jsx.len() + self.css.len()
    }
}

/// Heuristic accessibility assessment of the emitted markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityReport {
    /// 0-100; deduction-based, not an audit.
    pub score: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
    pub wcag_level: WcagLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    A,
    AA,
    AAA,
}

/// Responsive treatment applied to the component's stylesheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveReport {
    pub strategy: ResponsiveStrategy,
    pub breakpoints: Vec<u32>,
}

/// Broad component classification from the node name and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Button,
    Card,
    Text,
    Input,
    Layout,
    Complex,
}

/// Complexity classification. A size heuristic over node counts, documented
/// as such; it is not a measure of actual UI complexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    /// Scheduling multiplier for generation-time estimates.
    pub fn time_multiplier(&self) -> u64 {
        match self {
            Complexity::Simple => 1,
            Complexity::Medium => 2,
            Complexity::Complex => 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMetadata {
    pub component_type: ComponentType,
    pub complexity: Complexity,
    /// 0-100 estimate of how faithfully the emitted code reproduces the
    /// source node; lowered for approximated paints and vector geometry.
    pub estimated_accuracy: u8,
    /// Wall-clock time spent emitting this component. Observability only;
    /// never part of the emitted text.
    pub generation_time_ms: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eager_bytes_ignores_deferred_css() {
        let component = GeneratedComponent {
            id: "1:1".into(),
            name: "Card".into(),
            jsx: "abcd".into(),
            css: "efgh".into(),
            deferred_css: Some("x".repeat(1000)),
            typescript: None,
            accessibility: AccessibilityReport {
                score: 100,
                issues: vec![],
                suggestions: vec![],
                wcag_level: WcagLevel::AA,
            },
            responsive: ResponsiveReport {
                strategy: crate::config::ResponsiveStrategy::MediaQueries,
                breakpoints: vec![768, 1024],
            },
            metadata: ComponentMetadata {
                component_type: ComponentType::Card,
                complexity: Complexity::Simple,
                estimated_accuracy: 95,
                generation_time_ms: 0,
                dependencies: vec![],
            },
        };
        assert_eq!(component.eager_bytes(), 8);
    }

    #[test]
    fn complexity_multipliers_match_schedule() {
        assert_eq!(Complexity::Simple.time_multiplier(), 1);
        assert_eq!(Complexity::Medium.time_multiplier(), 2);
        assert_eq!(Complexity::Complex.time_multiplier(), 4);
    }

    #[test]
    fn component_serializes_camel_case() {
        let report = AccessibilityReport {
            score: 90,
            issues: vec![],
            suggestions: vec![],
            wcag_level: WcagLevel::AA,
        };
        let json = serde_json::to_string(&report).expect("serialize");
        assert!(json.contains("\"wcagLevel\":\"AA\""));
    }
}
