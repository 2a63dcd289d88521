//! BEM rendering: `block`, `block__element`, `block--modifier`.

use super::facts::{render_rule, StyleFacts};
use super::class_slug;
use crate::figma::FigmaNode;

pub fn render(node: &FigmaNode, block: &str) -> String {
    let mut css = String::new();
    css.push_str(&format!("/* {} (BEM) */\n", block));

    let facts = StyleFacts::from_node(node);
    css.push_str(&render_rule(&format!(".{}", block), facts.declarations()));

    // One element rule per direct child carrying style facts.
    for child in &node.children {
        let child_facts = StyleFacts::from_node(child);
        if child_facts.is_empty() {
            continue;
        }
        let element = format!(".{}__{}", block, class_slug(&child.name));
        css.push('\n');
        css.push_str(&render_rule(&element, child_facts.declarations()));
    }

    // Standard state modifiers.
    css.push('\n');
    css.push_str(&render_rule(
        &format!(".{}--disabled", block),
        &[
            ("opacity".to_string(), "0.5".to_string()),
            ("pointer-events".to_string(), "none".to_string()),
        ],
    ));
    css.push('\n');
    css.push_str(&render_rule(
        &format!(".{}--hidden", block),
        &[("display".to_string(), "none".to_string())],
    ));

    css
}
