//! SMACSS rendering: base, layout, module, state and theme rule groups.

use super::facts::{render_rule, StyleFacts};
use super::class_slug;
use crate::figma::FigmaNode;

pub fn render(node: &FigmaNode, block: &str) -> String {
    let mut css = String::new();

    css.push_str("/* Base */\n");
    css.push_str(&render_rule(
        &format!(".{} *", block),
        &[("box-sizing".to_string(), "border-box".to_string())],
    ));

    css.push_str("\n/* Layout */\n");
    css.push_str(&render_rule(
        &format!(".l-{}", block),
        &[("position".to_string(), "relative".to_string())],
    ));

    css.push_str("\n/* Module */\n");
    let facts = StyleFacts::from_node(node);
    css.push_str(&render_rule(&format!(".{}", block), facts.declarations()));
    for child in &node.children {
        let child_facts = StyleFacts::from_node(child);
        if child_facts.is_empty() {
            continue;
        }
        css.push('\n');
        css.push_str(&render_rule(
            &format!(".{}-{}", block, class_slug(&child.name)),
            child_facts.declarations(),
        ));
    }

    css.push_str("\n/* State */\n");
    css.push_str(&render_rule(
        &format!(".{}.is-hidden", block),
        &[("display".to_string(), "none".to_string())],
    ));
    css.push('\n');
    css.push_str(&render_rule(
        &format!(".{}.is-disabled", block),
        &[
            ("opacity".to_string(), "0.5".to_string()),
            ("pointer-events".to_string(), "none".to_string()),
        ],
    ));

    css.push_str("\n/* Theme */\n");
    css.push_str(&render_rule(
        &format!(".theme-dark .{}", block),
        &[("color-scheme".to_string(), "dark".to_string())],
    ));

    css
}
