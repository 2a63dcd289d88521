//! CUBE CSS rendering: composition, utilities, block, exception layers.

use super::facts::{render_rule, StyleFacts};
use super::class_slug;
use crate::figma::FigmaNode;

pub fn render(node: &FigmaNode, block: &str) -> String {
    let mut css = String::new();

    css.push_str("/* Composition */\n");
    css.push_str(&render_rule(
        &format!(".{} > * + *", block),
        &[("margin-block-start".to_string(), "var(--flow-space, 1em)".to_string())],
    ));

    css.push_str("\n/* Utilities */\n");
    css.push_str(&render_rule(
        ".wrapper",
        &[
            ("max-width".to_string(), "60ch".to_string()),
            ("margin-inline".to_string(), "auto".to_string()),
        ],
    ));

    css.push_str("\n/* Block */\n");
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

    css.push_str("\n/* Exception */\n");
    css.push_str(&render_rule(
        &format!(".{}[data-state='disabled']", block),
        &[
            ("opacity".to_string(), "0.5".to_string()),
            ("pointer-events".to_string(), "none".to_string()),
        ],
    ));

    css
}
