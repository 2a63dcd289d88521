use super::*;
use crate::config::{CssMethodology, ResponsiveStrategy};
use crate::figma::{Color, FigmaNode, LayoutMode, NodeType, Paint};

fn card_node() -> FigmaNode {
    let mut card = FigmaNode::new("1:0", "Product Card", NodeType::Frame);
    card.layout_mode = Some(LayoutMode::Vertical);
    card.item_spacing = Some(12.0);
    card.padding_top = Some(16.0);
    card.padding_bottom = Some(16.0);
    card.padding_left = Some(16.0);
    card.padding_right = Some(16.0);
    card.corner_radius = Some(8.0);
    card.fills = vec![Paint::solid(Color::new(1.0, 1.0, 1.0, 1.0))];

    let mut title = FigmaNode::new("1:1", "Title", NodeType::Text);
    title.fills = vec![Paint::solid(Color::new(0.1, 0.1, 0.1, 1.0))];
    card.children.push(title);
    card
}

#[test]
fn class_slug_lowercases_and_hyphenates() {
    assert_eq!(class_slug("Product Card"), "product-card");
    assert_eq!(class_slug("  Hero   Banner "), "hero-banner");
}

#[test]
fn bem_emits_block_element_modifier() {
    let architect = CssArchitect::new(CssMethodology::Bem, ResponsiveStrategy::MediaQueries);
    let css = architect.generate_architectural_css(&card_node(), "ProductCard");
    assert!(css.contains(".productcard {"));
    assert!(css.contains(".productcard__title {"));
    assert!(css.contains(".productcard--disabled {"));
}

#[test]
fn smacss_emits_rule_groups_with_state_classes() {
    let architect = CssArchitect::new(CssMethodology::Smacss, ResponsiveStrategy::MediaQueries);
    let css = architect.generate_architectural_css(&card_node(), "ProductCard");
    assert!(css.contains("/* Base */"));
    assert!(css.contains("/* Layout */"));
    assert!(css.contains("/* Module */"));
    assert!(css.contains(".productcard.is-hidden"));
    assert!(css.contains(".productcard.is-disabled"));
    assert!(css.contains("/* Theme */"));
}

#[test]
fn itcss_layers_appear_in_literal_order() {
    let architect = CssArchitect::new(CssMethodology::Itcss, ResponsiveStrategy::MediaQueries);
    let css = architect.generate_architectural_css(&card_node(), "ProductCard");
    let positions: Vec<usize> = [
        "/* 1. Settings */",
        "/* 2. Tools */",
        "/* 3. Generic */",
        "/* 4. Elements */",
        "/* 5. Objects */",
        "/* 6. Components */",
        "/* 7. Utilities */",
    ]
    .iter()
    .map(|layer| css.find(layer).unwrap_or_else(|| panic!("missing {layer}")))
    .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "layers out of order"
    );
    assert!(css.contains(".c-productcard {"));
}

#[test]
fn cube_emits_composition_and_exception_layers() {
    let architect = CssArchitect::new(CssMethodology::Cube, ResponsiveStrategy::MediaQueries);
    let css = architect.generate_architectural_css(&card_node(), "ProductCard");
    assert!(css.contains("/* Composition */"));
    assert!(css.contains("/* Exception */"));
    assert!(css.contains(".productcard[data-state='disabled']"));
}

#[test]
fn methodology_changes_naming_not_values() {
    let node = card_node();
    let bem = CssArchitect::new(CssMethodology::Bem, ResponsiveStrategy::MediaQueries)
        .generate_architectural_css(&node, "ProductCard");
    let cube = CssArchitect::new(CssMethodology::Cube, ResponsiveStrategy::MediaQueries)
        .generate_architectural_css(&node, "ProductCard");
    for value in ["gap: 12px;", "padding: 16px;", "border-radius: 8px;"] {
        assert!(bem.contains(value), "BEM missing {value}");
        assert!(cube.contains(value), "CUBE missing {value}");
    }
}

#[test]
fn media_queries_use_two_fixed_breakpoints() {
    let architect = CssArchitect::new(CssMethodology::Bem, ResponsiveStrategy::MediaQueries);
    let css = architect.generate_architectural_css(&card_node(), "Card");
    assert!(css.contains("@media (min-width: 768px)"));
    assert!(css.contains("@media (min-width: 1024px)"));
    assert!(!css.contains("@container"));
}

#[test]
fn container_queries_use_three_fixed_breakpoints() {
    let architect = CssArchitect::new(CssMethodology::Bem, ResponsiveStrategy::ContainerQueries);
    let css = architect.generate_architectural_css(&card_node(), "Card");
    assert!(css.contains("container-type: inline-size;"));
    assert!(css.contains("@container (min-width: 300px)"));
    assert!(css.contains("@container (min-width: 500px)"));
    assert!(css.contains("@container (min-width: 700px)"));
    assert!(!css.contains("@media"));
}

#[test]
fn rendering_is_deterministic() {
    let node = card_node();
    let architect = CssArchitect::new(CssMethodology::Itcss, ResponsiveStrategy::ContainerQueries);
    let first = architect.generate_architectural_css(&node, "ProductCard");
    let second = architect.generate_architectural_css(&node, "ProductCard");
    assert_eq!(first, second);
}
