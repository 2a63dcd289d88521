//! Heuristic quality assurance over generated artifacts.
//!
//! A small table-driven rule set scans each component's emitted text and
//! records findings; scores start at 100 and fixed per-category penalties
//! are subtracted, clamped to [0, 100]. Findings are data, never errors:
//! nothing here can abort a run.

use crate::config::EnterpriseGenerationConfig;
use crate::types::{
    GeneratedComponent, IssueCategory, IssueSeverity, QualityIssue, QualityReport,
};

const ACCESSIBILITY_PENALTY: u8 = 10;
const PERFORMANCE_PENALTY: u8 = 5;
const MAINTAINABILITY_PENALTY: u8 = 3;
const CODE_STANDARDS_PENALTY: u8 = 3;

/// Proxy coverage value reported when test generation is enabled. Not
/// measured from the generated tests.
const TEST_COVERAGE_PROXY: u8 = 85;

struct QualityRule {
    category: IssueCategory,
    severity: IssueSeverity,
    message: &'static str,
    check: fn(&GeneratedComponent) -> bool,
}

/// Each rule is independent and evaluated per component. Purely textual
/// substring heuristics; false positives are acceptable.
const RULES: &[QualityRule] = &[
    QualityRule {
        category: IssueCategory::Maintainability,
        severity: IssueSeverity::Warning,
        message: "Component markup exceeds 1000 characters; consider splitting it",
        check: |c| c.jsx.len() > 1000,
    },
    QualityRule {
        category: IssueCategory::Accessibility,
        severity: IssueSeverity::Warning,
        message: "No aria-* or role attributes found in markup",
        check: |c| !c.jsx.contains("aria-") && !c.jsx.contains("role="),
    },
    QualityRule {
        category: IssueCategory::Performance,
        severity: IssueSeverity::Info,
        message: "Image tags are not lazily loaded",
        check: |c| c.jsx.contains("<img") && !c.jsx.contains("loading=\"lazy\""),
    },
    QualityRule {
        category: IssueCategory::CodeStandards,
        severity: IssueSeverity::Warning,
        message: "Inline style attributes bypass the generated stylesheet",
        check: |c| c.jsx.contains("style=\"") || c.jsx.contains("style={{"),
    },
];

fn category_enabled(config: &EnterpriseGenerationConfig, category: IssueCategory) -> bool {
    match category {
        IssueCategory::Accessibility => config.features.accessibility_enforcement,
        IssueCategory::Performance => config.features.performance_enforcement,
        IssueCategory::CodeStandards => config.features.code_standards_enforcement,
        IssueCategory::Maintainability => true,
    }
}

fn penalty(category: IssueCategory) -> u8 {
    match category {
        IssueCategory::Accessibility => ACCESSIBILITY_PENALTY,
        IssueCategory::Performance => PERFORMANCE_PENALTY,
        IssueCategory::Maintainability => MAINTAINABILITY_PENALTY,
        IssueCategory::CodeStandards => CODE_STANDARDS_PENALTY,
    }
}

/// Scan all components and aggregate per-category deduction scores.
pub fn analyze_quality(
    components: &[GeneratedComponent],
    config: &EnterpriseGenerationConfig,
) -> QualityReport {
    let mut issues = Vec::new();
    for component in components {
        for rule in RULES {
            if category_enabled(config, rule.category) && (rule.check)(component) {
                issues.push(QualityIssue {
                    severity: rule.severity,
                    category: rule.category,
                    component: component.name.clone(),
                    message: rule.message.to_string(),
                });
            }
        }
    }

    let score_for = |category: IssueCategory| -> u8 {
        let deductions: u32 = issues
            .iter()
            .filter(|issue| issue.category == category)
            .map(|_| penalty(category) as u32)
            .sum();
        100u32.saturating_sub(deductions).min(100) as u8
    };

    let mut recommendations = Vec::new();
    if issues
        .iter()
        .any(|i| i.category == IssueCategory::Accessibility)
    {
        recommendations
            .push("Add aria-label or role attributes to interactive elements".to_string());
    }
    if issues
        .iter()
        .any(|i| i.category == IssueCategory::Performance)
    {
        recommendations.push("Enable lazy loading for image assets".to_string());
    }
    if issues
        .iter()
        .any(|i| i.category == IssueCategory::Maintainability)
    {
        recommendations.push("Split oversized components into smaller units".to_string());
    }

    QualityReport {
        code_quality: score_for(IssueCategory::CodeStandards),
        accessibility: score_for(IssueCategory::Accessibility),
        performance: score_for(IssueCategory::Performance),
        maintainability: score_for(IssueCategory::Maintainability),
        test_coverage: if config.features.testing {
            TEST_COVERAGE_PROXY
        } else {
            0
        },
        issues,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResponsiveStrategy;
    use crate::types::{
        AccessibilityReport, Complexity, ComponentMetadata, ComponentType, ResponsiveReport,
        WcagLevel,
    };

    fn component(name: &str, jsx: &str) -> GeneratedComponent {
        GeneratedComponent {
            id: name.to_lowercase(),
            name: name.into(),
            jsx: jsx.into(),
            css: String::new(),
            deferred_css: None,
            typescript: None,
            accessibility: AccessibilityReport {
                score: 100,
                issues: vec![],
                suggestions: vec![],
                wcag_level: WcagLevel::AA,
            },
            responsive: ResponsiveReport {
                strategy: ResponsiveStrategy::MediaQueries,
                breakpoints: vec![768, 1024],
            },
            metadata: ComponentMetadata {
                component_type: ComponentType::Complex,
                complexity: Complexity::Simple,
                estimated_accuracy: 95,
                generation_time_ms: 0,
                dependencies: vec![],
            },
        }
    }

    #[test]
    fn clean_component_scores_perfect() {
        let clean = component("Clean", "<button aria-label=\"go\">go</button>");
        let report = analyze_quality(&[clean], &EnterpriseGenerationConfig::default());
        assert_eq!(report.accessibility, 100);
        assert_eq!(report.performance, 100);
        assert_eq!(report.maintainability, 100);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn missing_aria_deducts_ten_points() {
        let plain = component("Plain", "<div>hello</div>");
        let report = analyze_quality(&[plain], &EnterpriseGenerationConfig::default());
        assert_eq!(report.accessibility, 90);
        assert!(report
            .issues
            .iter()
            .any(|i| i.category == IssueCategory::Accessibility && i.component == "Plain"));
        assert!(!report.recommendations.is_empty());
    }

    #[test]
    fn eager_images_deduct_five_points() {
        let img = component(
            "Pic",
            "<div role=\"img\"><img src=\"/a.png\" alt=\"a\" /></div>",
        );
        let report = analyze_quality(&[img], &EnterpriseGenerationConfig::default());
        assert_eq!(report.performance, 95);
        assert_eq!(report.accessibility, 100);
    }

    #[test]
    fn oversized_markup_deducts_three_points() {
        let big = component(
            "Big",
            &format!("<div role=\"main\">{}</div>", "x".repeat(1200)),
        );
        let report = analyze_quality(&[big], &EnterpriseGenerationConfig::default());
        assert_eq!(report.maintainability, 97);
    }

    #[test]
    fn scores_clamp_at_zero_with_many_issues() {
        let components: Vec<GeneratedComponent> = (0..60)
            .map(|i| component(&format!("C{i}"), "<div>plain</div>"))
            .collect();
        let report = analyze_quality(&components, &EnterpriseGenerationConfig::default());
        assert_eq!(report.accessibility, 0);
        assert_eq!(report.issues.len(), 60);
        for score in [
            report.code_quality,
            report.accessibility,
            report.performance,
            report.maintainability,
            report.test_coverage,
        ] {
            assert!(score <= 100);
        }
    }

    #[test]
    fn enforcement_flags_gate_rule_categories() {
        let mut config = EnterpriseGenerationConfig::default();
        config.features.accessibility_enforcement = false;
        let plain = component("Plain", "<div>hello</div>");
        let report = analyze_quality(&[plain], &config);
        assert_eq!(report.accessibility, 100);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn test_coverage_is_a_toggle_proxy() {
        let mut config = EnterpriseGenerationConfig::default();
        let report = analyze_quality(&[], &config);
        assert_eq!(report.test_coverage, 85);

        config.features.testing = false;
        let report = analyze_quality(&[], &config);
        assert_eq!(report.test_coverage, 0);
    }
}
