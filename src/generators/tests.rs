use super::*;
use crate::config::{CssMethodology, EnterpriseGenerationConfig, Framework, ResponsiveStrategy};
use crate::figma::{FigmaNode, NodeType};
use crate::types::ComponentType;

fn button_node() -> FigmaNode {
    let mut button = FigmaNode::new("1:23", "Primary Button", NodeType::Component);
    let mut label = FigmaNode::new("1:24", "Label", NodeType::Text);
    label.characters = Some("Click me".into());
    button.children.push(label);
    button
}

fn config_for(framework: Framework) -> EnterpriseGenerationConfig {
    EnterpriseGenerationConfig {
        framework,
        ..EnterpriseGenerationConfig::default()
    }
}

#[test]
fn sanitize_strips_non_alphanumerics_and_uppercases() {
    assert_eq!(sanitize_component_name("Primary Button"), "PrimaryButton");
    assert_eq!(sanitize_component_name("card/header v2"), "Cardheaderv2");
    assert_eq!(sanitize_component_name("nav-bar"), "Navbar");
}

#[test]
fn sanitize_prefixes_leading_digits() {
    assert_eq!(sanitize_component_name("404 page"), "Component404page");
}

#[test]
fn sanitize_falls_back_to_component_for_empty_input() {
    assert_eq!(sanitize_component_name(""), "Component");
    assert_eq!(sanitize_component_name("!!!"), "Component");
}

#[test]
fn sanitize_is_idempotent() {
    for raw in ["Primary Button", "404 page", "!!!", "weird--name__x", "a"] {
        let once = sanitize_component_name(raw);
        let twice = sanitize_component_name(&once);
        assert_eq!(once, twice, "not idempotent for {raw:?}");
    }
}

#[test]
fn sanitized_names_match_identifier_shape() {
    for raw in ["Primary Button", "42", "éclair", "x y z", ""] {
        let name = sanitize_component_name(raw);
        let mut chars = name.chars();
        let first = chars.next().expect("non-empty");
        assert!(first.is_ascii_uppercase(), "bad first char in {name:?}");
        assert!(
            chars.all(|c| c.is_ascii_alphanumeric()),
            "bad tail in {name:?}"
        );
    }
}

#[test]
fn classification_matches_name_keywords() {
    assert_eq!(
        classify_component_type(&button_node()),
        ComponentType::Button
    );
    let card = FigmaNode::new("1", "Product Card", NodeType::Frame);
    assert_eq!(classify_component_type(&card), ComponentType::Card);
    let input = FigmaNode::new("2", "Search Field", NodeType::Frame);
    assert_eq!(classify_component_type(&input), ComponentType::Input);
}

#[test]
fn factory_selects_strategy_per_framework() {
    for framework in Framework::all() {
        let generator = create_generator(&config_for(framework));
        assert_eq!(generator.framework(), framework);
    }
}

#[test]
fn react_button_markup_contains_text_and_aria() {
    let generator = create_generator(&config_for(Framework::React));
    let component = generator
        .generate_component(&button_node(), "PrimaryButton")
        .expect("generate");
    assert_eq!(component.name, "PrimaryButton");
    assert_eq!(component.metadata.component_type, ComponentType::Button);
    assert!(component.jsx.contains("Click me"));
    assert!(component.jsx.contains("<button"));
    assert!(component.jsx.contains("aria-label=\"Primary Button\""));
    assert!(component.jsx.contains("className=\"primarybutton__label\""));
    assert!(component.typescript.is_some());
    assert!(component.css.contains(".primarybutton {"));
}

#[test]
fn vue_emits_single_file_component() {
    let generator = create_generator(&config_for(Framework::Vue));
    let component = generator
        .generate_component(&button_node(), "PrimaryButton")
        .expect("generate");
    assert!(component.jsx.starts_with("<template>"));
    assert!(component.jsx.contains("<script setup lang=\"ts\">"));
    assert!(component.jsx.contains("<style scoped>"));
    assert!(component.jsx.contains("Click me"));
}

#[test]
fn angular_emits_decorator_class_with_selector() {
    let generator = create_generator(&config_for(Framework::Angular));
    let component = generator
        .generate_component(&button_node(), "PrimaryButton")
        .expect("generate");
    assert!(component.jsx.contains("@Component({"));
    assert!(component.jsx.contains("selector: 'app-primarybutton'"));
    assert!(component.jsx.contains("export class PrimaryButtonComponent"));
    assert!(component.jsx.contains("Click me"));
}

#[test]
fn svelte_emits_script_markup_style() {
    let generator = create_generator(&config_for(Framework::Svelte));
    let component = generator
        .generate_component(&button_node(), "PrimaryButton")
        .expect("generate");
    assert!(component.jsx.contains("<script lang=\"ts\">"));
    assert!(component.jsx.contains("Click me"));
    assert!(component.jsx.contains("<style>"));
}

#[test]
fn children_render_in_document_order() {
    let mut frame = FigmaNode::new("2:0", "Hero", NodeType::Frame);
    for (i, label) in ["First", "Second", "Third"].iter().enumerate() {
        let mut text = FigmaNode::new(format!("2:{}", i + 1), *label, NodeType::Text);
        text.characters = Some(label.to_string());
        frame.children.push(text);
    }
    let generator = create_generator(&config_for(Framework::React));
    let component = generator
        .generate_component(&frame, "Hero")
        .expect("generate");
    let first = component.jsx.find("First").expect("First");
    let second = component.jsx.find("Second").expect("Second");
    let third = component.jsx.find("Third").expect("Third");
    assert!(first < second && second < third, "order not preserved");
}

#[test]
fn text_node_without_characters_renders_placeholder() {
    let mut frame = FigmaNode::new("3:0", "Shell", NodeType::Frame);
    frame
        .children
        .push(FigmaNode::new("3:1", "Slot", NodeType::Text));
    let generator = create_generator(&config_for(Framework::React));
    let component = generator
        .generate_component(&frame, "Shell")
        .expect("generate");
    assert!(component.jsx.contains("{children}"));
}

#[test]
fn emission_is_deterministic() {
    let node = button_node();
    let generator = create_generator(&config_for(Framework::React));
    let first = generator
        .generate_component(&node, "PrimaryButton")
        .expect("generate");
    let second = generator
        .generate_component(&node, "PrimaryButton")
        .expect("generate");
    assert_eq!(first.jsx, second.jsx);
    assert_eq!(first.css, second.css);
}

#[test]
fn i18n_toggle_replaces_literal_text_with_lookup() {
    let mut config = config_for(Framework::React);
    config.features.i18n = true;
    let generator = create_generator(&config);
    let component = generator
        .generate_component(&button_node(), "PrimaryButton")
        .expect("generate");
    assert!(component.jsx.contains("useTranslation"));
    assert!(component.jsx.contains("{t('primarybutton.label')}"));
    assert!(!component.jsx.contains("Click me"));
    assert!(component
        .metadata
        .dependencies
        .iter()
        .any(|d| d == "react-i18next"));
}

#[test]
fn accuracy_drops_for_approximated_paints() {
    use crate::figma::{Color, Paint, PaintType};
    let mut node = FigmaNode::new("4:0", "Art", NodeType::Frame);
    node.fills = vec![Paint {
        paint_type: PaintType::GradientLinear,
        color: Some(Color::new(0.0, 0.0, 0.0, 1.0)),
        opacity: None,
        visible: true,
    }];
    node.children
        .push(FigmaNode::new("4:1", "Shape", NodeType::Vector));
    assert_eq!(estimate_accuracy(&node), 95 - 5 - 3);

    let plain = FigmaNode::new("4:2", "Plain", NodeType::Frame);
    assert_eq!(estimate_accuracy(&plain), 95);
}

#[test]
fn accessibility_report_flags_missing_aria() {
    let report = assess_accessibility("<div class=\"x\">hi</div>", ComponentType::Complex);
    assert!(report.score < 100);
    assert!(!report.issues.is_empty());

    let with_aria = assess_accessibility(
        "<button aria-label=\"go\">go</button>",
        ComponentType::Button,
    );
    assert_eq!(with_aria.score, 100);
}

#[test]
fn itcss_methodology_prefixes_markup_classes() {
    let mut config = config_for(Framework::React);
    config.css_methodology = CssMethodology::Itcss;
    let generator = create_generator(&config);
    let component = generator
        .generate_component(&button_node(), "PrimaryButton")
        .expect("generate");
    assert!(component.jsx.contains("c-primarybutton"));
    assert!(component.css.contains(".c-primarybutton {"));
}

#[test]
fn responsive_report_names_strategy_breakpoints() {
    let mut config = config_for(Framework::React);
    config.responsive_strategy = ResponsiveStrategy::ContainerQueries;
    let generator = create_generator(&config);
    let component = generator
        .generate_component(&button_node(), "PrimaryButton")
        .expect("generate");
    assert_eq!(component.responsive.breakpoints, vec![300, 500, 700]);
}
