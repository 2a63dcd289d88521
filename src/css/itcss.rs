//! ITCSS rendering: the seven-layer inverted-triangle cascade.
//!
//! Layers are emitted in their literal order (settings, tools, generic,
//! elements, objects, components, utilities) so specificity accumulates the
//! way the methodology prescribes.

use super::facts::{render_rule, StyleFacts};
use super::class_slug;
use crate::figma::FigmaNode;

pub fn render(node: &FigmaNode, block: &str) -> String {
    let facts = StyleFacts::from_node(node);
    let mut css = String::new();

    css.push_str("/* 1. Settings */\n");
    let settings = facts.as_custom_properties(block);
    if settings.is_empty() {
        css.push_str(&render_rule(":root", &[]));
    } else {
        css.push_str(&render_rule(":root", &settings));
    }

    css.push_str("\n/* 2. Tools */\n");
    css.push_str("/* mixins and functions live in the preprocessor layer */\n");

    css.push_str("\n/* 3. Generic */\n");
    css.push_str(&render_rule(
        "*, *::before, *::after",
        &[("box-sizing".to_string(), "border-box".to_string())],
    ));

    css.push_str("\n/* 4. Elements */\n");
    css.push_str(&render_rule(
        "img",
        &[
            ("max-width".to_string(), "100%".to_string()),
            ("display".to_string(), "block".to_string()),
        ],
    ));

    css.push_str("\n/* 5. Objects */\n");
    css.push_str(&render_rule(
        &format!(".o-{}-wrapper", block),
        &[
            ("margin-left".to_string(), "auto".to_string()),
            ("margin-right".to_string(), "auto".to_string()),
        ],
    ));

    css.push_str("\n/* 6. Components */\n");
    css.push_str(&render_rule(&format!(".c-{}", block), facts.declarations()));
    for child in &node.children {
        let child_facts = StyleFacts::from_node(child);
        if child_facts.is_empty() {
            continue;
        }
        css.push('\n');
        css.push_str(&render_rule(
            &format!(".c-{}-{}", block, class_slug(&child.name)),
            child_facts.declarations(),
        ));
    }

    css.push_str("\n/* 7. Utilities */\n");
    css.push_str(&render_rule(
        ".u-hidden",
        &[("display".to_string(), "none !important".to_string())],
    ));

    css
}
