//! Framework code-emission strategies.
//!
//! One strategy per target framework, all sharing the same contract:
//! given a Figma node and a sanitized name, emit the component's
//! markup/template text, stylesheet text and optional type declarations.
//! A closed enum-keyed factory selects the strategy; adding a framework
//! means one new variant and one new factory arm.
//!
//! - [`react`] - JSX function components
//! - [`vue`] - single-file components with `<script setup>`
//! - [`angular`] - decorator-based component classes
//! - [`svelte`] - single-file components

mod angular;
mod react;
mod svelte;
mod vue;

#[cfg(test)]
mod tests;

use std::time::Instant;

use crate::config::{
    CssMethodology, EnterpriseGenerationConfig, Framework, StylingSystem,
};
use crate::css::{class_slug, CssArchitect};
use crate::error::Result;
use crate::figma::{FigmaNode, NodeType, PaintType};
use crate::types::{
    AccessibilityReport, Complexity, ComponentMetadata, ComponentType, GeneratedComponent,
    ResponsiveReport, WcagLevel,
};

pub use angular::AngularGenerator;
pub use react::ReactGenerator;
pub use svelte::SvelteGenerator;
pub use vue::VueGenerator;

/// Options shared by every emission strategy.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorOptions {
    pub typescript: bool,
    pub i18n: bool,
    pub styling: StylingSystem,
    pub methodology: CssMethodology,
}

impl GeneratorOptions {
    pub fn from_config(config: &EnterpriseGenerationConfig) -> Self {
        Self {
            typescript: config.typescript,
            i18n: config.features.i18n,
            styling: config.styling,
            methodology: config.css_methodology,
        }
    }
}

/// A per-framework code-emission strategy.
pub trait FrameworkGenerator: Send + Sync {
    fn framework(&self) -> Framework;

    /// Emit one component for a node. `name` is already sanitized.
    fn generate_component(&self, node: &FigmaNode, name: &str) -> Result<GeneratedComponent>;

    /// Framework-idiomatic usage snippet for an emitted component.
    fn framework_specific_code(&self, component: &GeneratedComponent) -> String;

    /// Emit components for a batch of candidate nodes in document order.
    fn generate_components(&self, nodes: &[&FigmaNode]) -> Result<Vec<GeneratedComponent>> {
        let mut components = Vec::with_capacity(nodes.len());
        for node in nodes {
            let name = sanitize_component_name(&node.name);
            components.push(self.generate_component(node, &name)?);
        }
        Ok(components)
    }
}

/// Select the emission strategy for the configured framework.
///
/// `Framework` is a closed enum, so selection cannot fail here; unsupported
/// values are rejected with a configuration error at parse time, before any
/// phase runs.
pub fn create_generator(config: &EnterpriseGenerationConfig) -> Box<dyn FrameworkGenerator> {
    let options = GeneratorOptions::from_config(config);
    let architect = CssArchitect::new(config.css_methodology, config.responsive_strategy);
    match config.framework {
        Framework::React => Box::new(ReactGenerator::new(options, architect)),
        Framework::Vue => Box::new(VueGenerator::new(options, architect)),
        Framework::Angular => Box::new(AngularGenerator::new(options, architect)),
        Framework::Svelte => Box::new(SvelteGenerator::new(options, architect)),
    }
}

/// Sanitize a Figma node name into a valid type/identifier for every target
/// language. Shared by all strategies and bit-exact across them: strip
/// non-alphanumerics, prefix `Component` when the result starts with a digit,
/// upper-case the first character, and fall back to `Component` for empty
/// results.
pub fn sanitize_component_name(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let prefixed = if stripped.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        format!("Component{}", stripped)
    } else {
        stripped
    };
    let mut chars = prefixed.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => "Component".to_string(),
    }
}

/// Classify a component from its source node's name and shape.
pub fn classify_component_type(node: &FigmaNode) -> ComponentType {
    let name = node.name.to_lowercase();
    if name.contains("button") || name.contains("btn") {
        ComponentType::Button
    } else if name.contains("card") {
        ComponentType::Card
    } else if name.contains("input") || name.contains("field") || name.contains("form") {
        ComponentType::Input
    } else if node.node_type == NodeType::Text
        || name.contains("text")
        || name.contains("label")
        || name.contains("title")
    {
        ComponentType::Text
    } else if node.layout_mode.is_some()
        || name.contains("header")
        || name.contains("footer")
        || name.contains("sidebar")
        || name.contains("layout")
    {
        ComponentType::Layout
    } else {
        ComponentType::Complex
    }
}

/// Per-component complexity from the node's own subtree size.
pub fn component_complexity(node: &FigmaNode) -> Complexity {
    let size = node.subtree_size();
    if size < 10 {
        Complexity::Simple
    } else if size < 30 {
        Complexity::Medium
    } else {
        Complexity::Complex
    }
}

/// Accuracy estimate from real signal: starts at 95 and deducts 5 per
/// approximated paint (gradient or image fill) and 3 per vector-like node
/// whose geometry is only roughly reproduced, floored at 40.
pub fn estimate_accuracy(node: &FigmaNode) -> u8 {
    let mut approximated_paints = 0u32;
    let mut vector_nodes = 0u32;
    node.walk(&mut |n| {
        approximated_paints += n
            .fills
            .iter()
            .chain(n.background.iter())
            .filter(|p| p.visible && p.paint_type.is_approximated())
            .count() as u32;
        if n.node_type.is_vector_like() {
            vector_nodes += 1;
        }
    });
    let deduction = approximated_paints * 5 + vector_nodes * 3;
    95u32.saturating_sub(deduction).max(40) as u8
}

/// Whether a node's first visible fill is an image paint.
pub fn has_image_fill(node: &FigmaNode) -> bool {
    node.fills
        .iter()
        .any(|p| p.visible && p.paint_type == PaintType::Image)
}

/// Heuristic accessibility assessment of emitted markup. A deduction score,
/// not an audit.
pub fn assess_accessibility(markup: &str, component_type: ComponentType) -> AccessibilityReport {
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();

    let has_aria = markup.contains("aria-") || markup.contains("role=");
    if !has_aria {
        score -= 15;
        issues.push("Markup carries no ARIA attributes or roles".to_string());
        suggestions.push("Add aria-label or role to interactive elements".to_string());
    }

    if markup.contains("<img") && !markup.contains("alt=") {
        score -= 10;
        issues.push("Image without alt text".to_string());
        suggestions.push("Give every <img> a descriptive alt attribute".to_string());
    }

    if component_type == ComponentType::Button && !markup.contains("<button") {
        score -= 10;
        issues.push("Button component not rendered as a <button> element".to_string());
        suggestions.push("Use a native <button> for keyboard and screen-reader support".to_string());
    }

    let score = score.clamp(0, 100) as u8;
    let wcag_level = if score >= 95 {
        WcagLevel::AAA
    } else if score >= 80 {
        WcagLevel::AA
    } else {
        WcagLevel::A
    };

    AccessibilityReport {
        score,
        issues,
        suggestions,
        wcag_level,
    }
}

/// Package dependencies of an emitted component.
pub fn base_dependencies(framework: Framework, i18n: bool) -> Vec<String> {
    let mut deps: Vec<String> = match framework {
        Framework::React => vec!["react".into()],
        Framework::Vue => vec!["vue".into()],
        Framework::Angular => vec!["@angular/core".into()],
        Framework::Svelte => vec![],
    };
    if i18n {
        deps.push(
            match framework {
                Framework::React => "react-i18next",
                Framework::Vue => "vue-i18n",
                Framework::Angular => "@ngx-translate/core",
                Framework::Svelte => "svelte-i18n",
            }
            .to_string(),
        );
    }
    deps
}

/// Class attribute value for a child element, mirroring what the methodology
/// renderers emit for it.
pub fn child_class(methodology: CssMethodology, block: &str, child_name: &str) -> String {
    let slug = class_slug(child_name);
    match methodology {
        CssMethodology::Bem => format!("{}__{}", block, slug),
        CssMethodology::Itcss => format!("c-{}-{}", block, slug),
        CssMethodology::Smacss | CssMethodology::Cube => format!("{}-{}", block, slug),
    }
}

/// Assemble the common parts of a generated component around
/// strategy-emitted markup and declarations.
pub(crate) fn finish_component(
    node: &FigmaNode,
    name: &str,
    jsx: String,
    css: String,
    typescript: Option<String>,
    architect: &CssArchitect,
    framework: Framework,
    i18n: bool,
    started: Instant,
) -> GeneratedComponent {
    let component_type = classify_component_type(node);
    let accessibility = assess_accessibility(&jsx, component_type);
    GeneratedComponent {
        id: node.id.clone(),
        name: name.to_string(),
        jsx,
        css,
        deferred_css: None,
        typescript,
        accessibility,
        responsive: ResponsiveReport {
            strategy: architect.responsive_strategy(),
            breakpoints: architect.responsive_strategy().breakpoints().to_vec(),
        },
        metadata: ComponentMetadata {
            component_type,
            complexity: component_complexity(node),
            estimated_accuracy: estimate_accuracy(node),
            generation_time_ms: started.elapsed().as_millis() as u64,
            dependencies: base_dependencies(framework, i18n),
        },
    }
}
