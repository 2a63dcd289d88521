//! Post-generation optimization passes.
//!
//! An ordered pipeline of independently toggleable passes over the generated
//! component set: deduplication, CSS tree-shaking, textual minification and
//! asset rewriting, followed by a bundle-size budget check with escalating
//! reduction passes. All passes are textual; they tolerate malformed CSS but
//! never try to repair it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::config::OptimizationConfig;
use crate::css::class_slug;
use crate::types::GeneratedComponent;

/// Counters and applied-pass names for one optimization run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationMetrics {
    pub duplicate_components: usize,
    pub css_rules_removed: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub passes_applied: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct OptimizationOutcome {
    pub components: Vec<GeneratedComponent>,
    pub metrics: OptimizationMetrics,
}

/// Rolling multiplicative hash over text. Deliberately simple: components
/// are deduplicated only when their emitted text is identical, which is a
/// documented limitation, not a bug - visually identical but differently
/// authored components are not detected.
pub fn structural_hash(jsx: &str, css: &str) -> u64 {
    let mut hash: u64 = 0;
    for byte in jsx.bytes().chain(css.bytes()) {
        hash = hash.wrapping_mul(31).wrapping_add(byte as u64);
    }
    hash
}

/// Name-insensitive structural fingerprint used for reuse detection: the
/// component's own name and class slug are normalized out before hashing, so
/// identically shaped components with different names group together.
pub fn reuse_fingerprint(component: &GeneratedComponent) -> u64 {
    let slug = class_slug(&component.name);
    let normalize = |text: &str| {
        text.replace(&component.name, "@name@")
            .replace(&slug, "@slug@")
    };
    structural_hash(&normalize(&component.jsx), &normalize(&component.css))
}

/// Sum of eager jsx+css byte lengths in kilobytes.
pub fn calculate_bundle_size(components: &[GeneratedComponent]) -> f64 {
    let bytes: usize = components.iter().map(GeneratedComponent::eager_bytes).sum();
    bytes as f64 / 1024.0
}

pub struct Optimizer {
    config: OptimizationConfig,
}

impl Optimizer {
    pub fn new(config: OptimizationConfig) -> Self {
        Self { config }
    }

    /// Run the toggled passes in their fixed order.
    pub fn optimize_components(
        &self,
        components: Vec<GeneratedComponent>,
    ) -> OptimizationOutcome {
        let mut components = components;
        let mut metrics = OptimizationMetrics::default();

        if self.config.deduplicate {
            let before = components.len();
            components = deduplicate(components);
            metrics.duplicate_components = before - components.len();
            metrics.passes_applied.push("deduplication".to_string());
        }

        if self.config.tree_shake {
            let used = collect_used_classes(&components);
            let mut removed = 0;
            for component in &mut components {
                let (shaken, count) = shake_css(&component.css, &used);
                component.css = shaken;
                removed += count;
            }
            metrics.css_rules_removed = removed;
            metrics.passes_applied.push("tree-shaking".to_string());
        }

        if self.config.minify {
            for component in &mut components {
                component.css = minify_css(&component.css);
            }
            metrics.passes_applied.push("minification".to_string());
        }

        if self.config.lazy_load_assets {
            for component in &mut components {
                component.jsx = rewrite_img_tags(&component.jsx);
            }
            metrics.passes_applied.push("asset-rewriting".to_string());
        }

        OptimizationOutcome {
            components,
            metrics,
        }
    }

    /// Escalating bundle-size reduction. Applies passes until the eager
    /// bundle fits the budget or no pass reduces it further; when the budget
    /// still cannot be met the components are returned as-is with a
    /// recommendation, never an error.
    pub fn optimize_bundle_size(
        &self,
        components: Vec<GeneratedComponent>,
    ) -> (Vec<GeneratedComponent>, OptimizationMetrics) {
        let mut components = components;
        let mut metrics = OptimizationMetrics::default();
        let budget = self.config.max_bundle_size_kb;

        if calculate_bundle_size(&components) <= budget {
            return (components, metrics);
        }

        type Pass = fn(Vec<GeneratedComponent>) -> Vec<GeneratedComponent>;
        let passes: [(&str, Pass); 3] = [
            ("redundant-style-removal", remove_redundant_rules),
            ("common-style-extraction", extract_common_styles),
            ("chunk-splitting", split_responsive_chunks),
        ];

        for (name, pass) in passes {
            let before = calculate_bundle_size(&components);
            let candidate = pass(components.clone());
            let after = calculate_bundle_size(&candidate);
            // A pass must never grow the bundle; keep the smaller set.
            if after < before {
                components = candidate;
                metrics.passes_applied.push(name.to_string());
            }
            if calculate_bundle_size(&components) <= budget {
                break;
            }
        }

        let final_size = calculate_bundle_size(&components);
        if final_size > budget {
            metrics.recommendations.push(format!(
                "Bundle size {:.1} KB exceeds the {:.0} KB budget after all reduction passes; split the output into separately loaded chunks or raise the budget.",
                final_size, budget
            ));
        }

        (components, metrics)
    }
}

/// Collapse components with identical jsx+css text; first seen wins.
fn deduplicate(components: Vec<GeneratedComponent>) -> Vec<GeneratedComponent> {
    let mut seen = HashSet::new();
    components
        .into_iter()
        .filter(|c| seen.insert(structural_hash(&c.jsx, &c.css)))
        .collect()
}

/// Union of class names referenced by any component's markup. Tree-shaking
/// works batch-wide: a shared utility class used anywhere survives.
fn collect_used_classes(components: &[GeneratedComponent]) -> HashSet<String> {
    let mut used = HashSet::new();
    for component in components {
        collect_classes_from_markup(&component.jsx, &mut used);
    }
    used
}

fn collect_classes_from_markup(markup: &str, used: &mut HashSet<String>) {
    for attr in ["class=", "className="] {
        let mut rest = markup;
        while let Some(pos) = rest.find(attr) {
            rest = &rest[pos + attr.len()..];
            let Some(quote) = rest.chars().next() else {
                break;
            };
            if quote != '"' && quote != '\'' && quote != '`' && quote != '{' {
                continue;
            }
            // className={`a b ${expr}`} and plain quoted values both end at
            // the first closing quote/brace; expression fragments are
            // filtered below.
            let close = if quote == '{' { '}' } else { quote };
            let body = &rest[1..];
            let Some(end) = body.find(close) else { continue };
            for token in body[..end].split_whitespace() {
                let cleaned: String = token
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                    .collect();
                if !cleaned.is_empty() && !token.contains('$') {
                    used.insert(cleaned);
                }
            }
        }
    }
}

/// One top-level CSS segment: a rule, an at-block, or loose text between
/// rules (comments, blank lines).
enum CssSegment {
    Rule { selector: String, body: String },
    AtBlock(String),
    Loose(String),
}

/// Split a stylesheet into top-level segments, tolerating malformed input by
/// passing unparseable trailing text through untouched.
fn split_css_segments(css: &str) -> Vec<CssSegment> {
    let mut segments = Vec::new();
    let bytes = css.as_bytes();
    let mut i = 0;
    let mut loose_start = 0;

    while i < bytes.len() {
        if bytes[i] == b'{' {
            let selector_start = loose_start;
            let selector = &css[selector_start..i];
            // Walk to the matching closing brace.
            let mut depth = 1;
            let mut j = i + 1;
            while j < bytes.len() && depth > 0 {
                match bytes[j] {
                    b'{' => depth += 1,
                    b'}' => depth -= 1,
                    _ => {}
                }
                j += 1;
            }
            let full = &css[selector_start..j.min(css.len())];
            // Separate any leading comment/blank lines from the selector.
            let trimmed = selector.trim_start();
            let lead_len = selector.len() - trimmed.len();
            if lead_len > 0 {
                segments.push(CssSegment::Loose(selector[..lead_len].to_string()));
            }
            if trimmed.trim_start().starts_with('@') {
                segments.push(CssSegment::AtBlock(full[lead_len..].to_string()));
            } else {
                let body = &css[i + 1..j.saturating_sub(1).max(i + 1)];
                segments.push(CssSegment::Rule {
                    selector: trimmed.to_string(),
                    body: body.to_string(),
                });
            }
            i = j;
            loose_start = j;
        } else {
            i += 1;
        }
    }
    if loose_start < css.len() {
        segments.push(CssSegment::Loose(css[loose_start..].to_string()));
    }
    segments
}

fn render_segments(segments: &[CssSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            CssSegment::Rule { selector, body } => {
                out.push_str(selector);
                out.push('{');
                out.push_str(body);
                out.push('}');
                out.push('\n');
            }
            CssSegment::AtBlock(text) => {
                out.push_str(text);
                out.push('\n');
            }
            CssSegment::Loose(text) => out.push_str(text),
        }
    }
    out
}

/// First class name in a selector, if any.
fn base_class(selector: &str) -> Option<String> {
    let pos = selector.find('.')?;
    let tail = &selector[pos + 1..];
    let class: String = tail
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if class.is_empty() {
        None
    } else {
        Some(class)
    }
}

/// Remove rules whose base class is unused anywhere in the batch. Element
/// selectors and at-blocks are kept; modifier/element selectors survive with
/// their base class.
fn shake_css(css: &str, used: &HashSet<String>) -> (String, usize) {
    let segments = split_css_segments(css);
    let mut removed = 0;
    let kept: Vec<CssSegment> = segments
        .into_iter()
        .filter(|segment| match segment {
            CssSegment::Rule { selector, .. } => match base_class(selector) {
                Some(class) => {
                    let keep = used.contains(&class)
                        || used
                            .iter()
                            .any(|u| class.starts_with(u.as_str()) || u.starts_with(&class));
                    if !keep {
                        removed += 1;
                    }
                    keep
                }
                None => true,
            },
            _ => true,
        })
        .collect();
    (render_segments(&kept), removed)
}

/// Textual CSS minification: strip comments, collapse whitespace, drop the
/// semicolon before a closing brace. Tolerates malformed CSS without trying
/// to fix it.
pub fn minify_css(css: &str) -> String {
    // Strip comments.
    let mut without_comments = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        without_comments.push_str(&rest[..start]);
        match rest[start..].find("*/") {
            Some(end) => rest = &rest[start + end + 2..],
            None => {
                rest = "";
            }
        }
    }
    without_comments.push_str(rest);

    // Collapse whitespace and tighten around punctuation.
    let mut out = String::with_capacity(without_comments.len());
    let mut pending_space = false;
    for c in without_comments.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            let prev = out.chars().last().unwrap_or(' ');
            if !matches!(prev, '{' | '}' | ':' | ';' | ',') && !matches!(c, '{' | '}' | ':' | ';' | ',')
            {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(c);
    }
    out.replace(";}", "}")
}

/// Append `loading="lazy" decoding="async"` to `<img>` tags that lack them.
/// Idempotent: tags already carrying a `loading` attribute are untouched.
pub fn rewrite_img_tags(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(start) = rest.find("<img") {
        let after_tag = &rest[start..];
        let Some(end) = after_tag.find('>') else {
            break;
        };
        let tag = &after_tag[..end + 1];
        out.push_str(&rest[..start]);
        if tag.contains("loading=") {
            out.push_str(tag);
        } else if let Some(stripped) = tag.strip_suffix("/>") {
            out.push_str(stripped.trim_end());
            out.push_str(" loading=\"lazy\" decoding=\"async\" />");
        } else if let Some(stripped) = tag.strip_suffix('>') {
            out.push_str(stripped.trim_end());
            out.push_str(" loading=\"lazy\" decoding=\"async\">");
        } else {
            out.push_str(tag);
        }
        rest = &rest[start + end + 1..];
    }
    out.push_str(rest);
    out
}

/// Budget pass 1: drop exact-duplicate rules (same selector and body) within
/// each component, keeping the first occurrence.
fn remove_redundant_rules(components: Vec<GeneratedComponent>) -> Vec<GeneratedComponent> {
    components
        .into_iter()
        .map(|mut component| {
            let segments = split_css_segments(&component.css);
            let mut seen = HashSet::new();
            let kept: Vec<CssSegment> = segments
                .into_iter()
                .filter(|segment| match segment {
                    CssSegment::Rule { selector, body } => {
                        seen.insert(format!("{}|{}", selector.trim(), body.trim()))
                    }
                    _ => true,
                })
                .collect();
            component.css = render_segments(&kept);
            component
        })
        .collect()
}

/// Budget pass 2: rule bodies repeated across components collapse into one
/// grouped-selector rule carried by the first component. The original
/// selectors are kept in the group, so no markup rewrite is needed and no
/// component loses its styling. Bodies and selectors are ordered by first
/// occurrence, so the emitted text is stable across runs.
fn extract_common_styles(components: Vec<GeneratedComponent>) -> Vec<GeneratedComponent> {
    let mut body_order: Vec<String> = Vec::new();
    let mut body_counts: HashMap<String, usize> = HashMap::new();
    let mut body_selectors: HashMap<String, Vec<String>> = HashMap::new();
    for component in &components {
        for segment in split_css_segments(&component.css) {
            if let CssSegment::Rule { selector, body } = segment {
                let trimmed = body.trim().to_string();
                if trimmed.len() < 24 {
                    continue;
                }
                if !body_counts.contains_key(&trimmed) {
                    body_order.push(trimmed.clone());
                }
                *body_counts.entry(trimmed.clone()).or_default() += 1;
                let selectors = body_selectors.entry(trimmed).or_default();
                let selector = selector.trim().to_string();
                if !selectors.contains(&selector) {
                    selectors.push(selector);
                }
            }
        }
    }
    let shared: HashSet<&String> = body_order
        .iter()
        .filter(|body| body_counts[*body] >= 2)
        .collect();
    if shared.is_empty() {
        return components;
    }

    let mut grouped = String::new();
    for body in &body_order {
        if !shared.contains(body) {
            continue;
        }
        grouped.push_str(&body_selectors[body].join(",\n"));
        grouped.push_str(&format!("{{{}}}\n", body));
    }

    components
        .into_iter()
        .enumerate()
        .map(|(index, mut component)| {
            let segments = split_css_segments(&component.css);
            let kept: Vec<CssSegment> = segments
                .into_iter()
                .filter(|segment| match segment {
                    CssSegment::Rule { body, .. } => !shared.contains(&body.trim().to_string()),
                    _ => true,
                })
                .collect();
            component.css = render_segments(&kept);
            if index == 0 {
                component.css.push_str(&grouped);
            }
            component
        })
        .collect()
}

/// Budget pass 3: move responsive at-blocks out of the eager stylesheet into
/// the lazily loaded chunk.
fn split_responsive_chunks(components: Vec<GeneratedComponent>) -> Vec<GeneratedComponent> {
    components
        .into_iter()
        .map(|mut component| {
            let segments = split_css_segments(&component.css);
            let mut eager = Vec::new();
            let mut deferred = String::new();
            for segment in segments {
                match segment {
                    CssSegment::AtBlock(text)
                        if text.starts_with("@media") || text.starts_with("@container") =>
                    {
                        deferred.push_str(&text);
                        deferred.push('\n');
                    }
                    other => eager.push(other),
                }
            }
            if !deferred.is_empty() {
                component.css = render_segments(&eager);
                let mut chunk = component.deferred_css.take().unwrap_or_default();
                chunk.push_str(&deferred);
                component.deferred_css = Some(chunk);
            }
            component
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResponsiveStrategy;
    use crate::types::{
        AccessibilityReport, Complexity, ComponentMetadata, ComponentType, ResponsiveReport,
        WcagLevel,
    };

    fn component(id: &str, name: &str, jsx: &str, css: &str) -> GeneratedComponent {
        GeneratedComponent {
            id: id.into(),
            name: name.into(),
            jsx: jsx.into(),
            css: css.into(),
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

    fn default_optimizer() -> Optimizer {
        Optimizer::new(OptimizationConfig::default())
    }

    #[test]
    fn identical_components_collapse_to_first_seen() {
        let a = component("1", "A", "<div className=\"x\" />", ".x { color: red; }");
        let b = component("2", "B", "<div className=\"x\" />", ".x { color: red; }");
        let c = component("3", "C", "<div className=\"y\" />", ".y { color: blue; }");
        let outcome = default_optimizer().optimize_components(vec![a, b, c]);
        assert_eq!(outcome.components.len(), 2);
        assert_eq!(outcome.metrics.duplicate_components, 1);
        assert_eq!(outcome.components[0].id, "1", "first seen wins");
    }

    #[test]
    fn reuse_fingerprint_ignores_component_name() {
        let a = component(
            "1",
            "HeroOne",
            "<div className=\"heroone\">x</div>",
            ".heroone { color: red; }",
        );
        let b = component(
            "2",
            "HeroTwo",
            "<div className=\"herotwo\">x</div>",
            ".herotwo { color: red; }",
        );
        assert_eq!(reuse_fingerprint(&a), reuse_fingerprint(&b));
        assert_ne!(
            structural_hash(&a.jsx, &a.css),
            structural_hash(&b.jsx, &b.css)
        );
    }

    #[test]
    fn tree_shaking_uses_class_union_across_batch() {
        let a = component(
            "1",
            "A",
            "<div className=\"a shared\" />",
            ".a { color: red; }\n.unused { color: green; }\n",
        );
        let b = component(
            "2",
            "B",
            "<div className=\"b\" />",
            ".b { color: blue; }\n.shared { margin: 0; }\n",
        );
        let outcome = default_optimizer().optimize_components(vec![a, b]);
        let all_css: String = outcome.components.iter().map(|c| c.css.clone()).collect();
        assert!(!all_css.contains("unused"));
        // `.shared` is only used by component A's markup but must survive in
        // component B's stylesheet.
        assert!(all_css.contains("shared"));
    }

    #[test]
    fn minify_strips_comments_and_whitespace() {
        let css = "/* note */\n.x {\n  color: red;\n}\n";
        assert_eq!(minify_css(css), ".x{color:red}");
    }

    #[test]
    fn minify_tolerates_malformed_css() {
        let css = ".broken { color: red;\n/* unterminated";
        let out = minify_css(css);
        assert!(out.contains(".broken{color:red"));
    }

    #[test]
    fn img_rewrite_adds_lazy_attributes_once() {
        let markup = "<img className=\"pic\" src=\"/a.png\" alt=\"a\" />";
        let once = rewrite_img_tags(markup);
        assert!(once.contains("loading=\"lazy\" decoding=\"async\""));
        let twice = rewrite_img_tags(&once);
        assert_eq!(once, twice, "rewrite must be idempotent");
        assert_eq!(twice.matches("loading=").count(), 1);
    }

    #[test]
    fn bundle_size_sums_jsx_and_css_bytes() {
        let a = component("1", "A", &"x".repeat(512), &"y".repeat(512));
        assert!((calculate_bundle_size(&[a]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn over_budget_bundle_gets_recommendation_not_error() {
        let big = component(
            "1",
            "Big",
            &"<div className=\"big\" />".repeat(100),
            &".big { color: red; }".repeat(100),
        );
        let optimizer = Optimizer::new(OptimizationConfig {
            max_bundle_size_kb: 1.0,
            ..OptimizationConfig::default()
        });
        let before = calculate_bundle_size(std::slice::from_ref(&big));
        let (components, metrics) = optimizer.optimize_bundle_size(vec![big]);
        let after = calculate_bundle_size(&components);
        assert!(after <= before, "optimization must never grow the bundle");
        assert!(
            metrics
                .recommendations
                .iter()
                .any(|r| r.to_lowercase().contains("bundle size")),
            "expected a bundle size recommendation, got {:?}",
            metrics.recommendations
        );
    }

    #[test]
    fn bundle_under_budget_is_untouched() {
        let small = component("1", "S", "<div />", ".s{}");
        let optimizer = default_optimizer();
        let (components, metrics) = optimizer.optimize_bundle_size(vec![small.clone()]);
        assert_eq!(components[0].css, small.css);
        assert!(metrics.passes_applied.is_empty());
        assert!(metrics.recommendations.is_empty());
    }

    #[test]
    fn common_style_extraction_is_deterministic() {
        let build = || {
            vec![
                component(
                    "1",
                    "A",
                    "<div className=\"a\" />",
                    ".a{display: flex; gap: 8px; padding: 16px;}\n.a-inner{color: rgba(0, 0, 0, 1); margin: 0;}\n",
                ),
                component(
                    "2",
                    "B",
                    "<div className=\"b\" />",
                    ".b{display: flex; gap: 8px; padding: 16px;}\n.b-inner{color: rgba(0, 0, 0, 1); margin: 0;}\n",
                ),
            ]
        };
        let first = extract_common_styles(build());
        for _ in 0..8 {
            let again = extract_common_styles(build());
            for (a, b) in first.iter().zip(&again) {
                assert_eq!(a.css, b.css, "css differs across identical runs");
            }
        }
        // Shared bodies are emitted in first-occurrence order.
        let css = &first[0].css;
        let flex = css.find("display: flex").expect("flex body");
        let color = css.find("color: rgba").expect("color body");
        assert!(flex < color);
    }

    #[test]
    fn common_style_extraction_keeps_every_selector_styled() {
        let body = "display: flex; gap: 8px; padding: 16px;";
        let out = extract_common_styles(vec![
            component(
                "1",
                "A",
                "<div className=\"a\" />",
                &format!(".a{{{body}}}\n"),
            ),
            component(
                "2",
                "B",
                "<div className=\"b\" />",
                &format!(".b{{{body}}}\n"),
            ),
        ]);
        let all_css: String = out.iter().map(|c| c.css.clone()).collect();
        assert!(all_css.contains(".a"), "selector .a lost its styling");
        assert!(all_css.contains(".b"), "selector .b lost its styling");
        assert_eq!(
            all_css.matches(body).count(),
            1,
            "shared body should be emitted exactly once"
        );
        // The grouped rule lives in the first component.
        assert!(out[0].css.contains(".a,\n.b{"));
    }

    #[test]
    fn chunk_splitting_defers_responsive_blocks() {
        let css = ".a{color:red}\n@media (min-width: 768px){.a{max-width:768px}}\n";
        let comp = component("1", "A", "<div className=\"a\" />", css);
        let out = split_responsive_chunks(vec![comp]);
        assert!(!out[0].css.contains("@media"));
        let deferred = out[0].deferred_css.as_deref().unwrap_or("");
        assert!(deferred.contains("@media (min-width: 768px)"));
    }

    #[test]
    fn at_blocks_survive_tree_shaking() {
        let a = component(
            "1",
            "A",
            "<div className=\"a\" />",
            ".a{color:red}\n@media (min-width: 768px){.a{max-width:768px}}\n",
        );
        let outcome = default_optimizer().optimize_components(vec![a]);
        assert!(outcome.components[0].css.contains("@media"));
    }
}
