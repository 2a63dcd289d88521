//! Style fact extraction.
//!
//! Facts are extracted once per node; every methodology renders the same
//! facts and differs only in naming and layering.

use crate::figma::{EffectType, FigmaNode, LayoutMode, NodeType};
use crate::tokens::format_px;

/// The style facts of one node, as CSS property/value pairs in a fixed
/// emission order.
#[derive(Debug, Clone, Default)]
pub struct StyleFacts {
    declarations: Vec<(String, String)>,
}

impl StyleFacts {
    pub fn from_node(node: &FigmaNode) -> Self {
        let mut facts = StyleFacts::default();

        if let Some(mode) = node.layout_mode {
            if mode != LayoutMode::None {
                facts.push("display", "flex");
                facts.push(
                    "flex-direction",
                    if mode == LayoutMode::Horizontal {
                        "row"
                    } else {
                        "column"
                    },
                );
                if let Some(gap) = node.item_spacing {
                    if gap > 0.0 {
                        facts.push("gap", format!("{}px", format_px(gap)));
                    }
                }
            }
        }

        if let Some(padding) = padding_shorthand(node) {
            facts.push("padding", padding);
        }

        if let Some(color) = node.solid_fill_color() {
            // A text node's fill is its text color; anything else paints the box.
            if node.node_type == NodeType::Text {
                facts.push("color", color.to_rgba_string());
            } else {
                facts.push("background-color", color.to_rgba_string());
            }
        }

        if let Some(stroke) = node.solid_stroke_color() {
            facts.push("border", format!("1px solid {}", stroke.to_rgba_string()));
        }

        if let Some(radius) = node.corner_radius {
            if radius > 0.0 {
                facts.push("border-radius", format!("{}px", format_px(radius)));
            }
        }

        if let Some(shadow) = drop_shadow_value(node) {
            facts.push("box-shadow", shadow);
        }

        if node.node_type == NodeType::Text {
            if let Some(style) = &node.style {
                if let Some(family) = &style.font_family {
                    facts.push("font-family", format!("'{}'", family));
                }
                if let Some(size) = style.font_size {
                    facts.push("font-size", format!("{}px", format_px(size)));
                }
                if let Some(weight) = style.font_weight {
                    facts.push("font-weight", format!("{}", weight as u32));
                }
                if let Some(line) = style.line_height_px {
                    facts.push("line-height", format!("{}px", format_px(line)));
                }
            }
        }

        facts
    }

    fn push(&mut self, property: &str, value: impl Into<String>) {
        self.declarations.push((property.to_string(), value.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn declarations(&self) -> &[(String, String)] {
        &self.declarations
    }

    /// Declarations as CSS custom properties, for settings-style layers.
    pub fn as_custom_properties(&self, prefix: &str) -> Vec<(String, String)> {
        self.declarations
            .iter()
            .map(|(property, value)| (format!("--{}-{}", prefix, property), value.clone()))
            .collect()
    }
}

fn padding_shorthand(node: &FigmaNode) -> Option<String> {
    let top = node.padding_top.unwrap_or(0.0);
    let right = node.padding_right.unwrap_or(0.0);
    let bottom = node.padding_bottom.unwrap_or(0.0);
    let left = node.padding_left.unwrap_or(0.0);
    if top == 0.0 && right == 0.0 && bottom == 0.0 && left == 0.0 {
        return None;
    }
    if top == bottom && right == left {
        if top == right {
            Some(format!("{}px", format_px(top)))
        } else {
            Some(format!("{}px {}px", format_px(top), format_px(right)))
        }
    } else {
        Some(format!(
            "{}px {}px {}px {}px",
            format_px(top),
            format_px(right),
            format_px(bottom),
            format_px(left)
        ))
    }
}

fn drop_shadow_value(node: &FigmaNode) -> Option<String> {
    let effect = node
        .effects
        .iter()
        .find(|e| e.visible && e.effect_type == EffectType::DropShadow)?;
    let (x, y) = effect.offset.map(|o| (o.x, o.y)).unwrap_or((0.0, 0.0));
    let radius = effect.radius.unwrap_or(0.0);
    let color = effect
        .color
        .map(|c| c.to_rgba_string())
        .unwrap_or_else(|| "rgba(0, 0, 0, 0.25)".to_string());
    Some(format!(
        "{}px {}px {}px {}",
        format_px(x),
        format_px(y),
        format_px(radius),
        color
    ))
}

/// Render one rule block with two-space indentation.
pub fn render_rule(selector: &str, declarations: &[(String, String)]) -> String {
    let mut out = String::new();
    out.push_str(selector);
    out.push_str(" {\n");
    for (property, value) in declarations {
        out.push_str("  ");
        out.push_str(property);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figma::{Color, Paint, TypeStyle};

    #[test]
    fn auto_layout_frame_produces_flex_facts() {
        let mut node = FigmaNode::new("1:1", "Stack", NodeType::Frame);
        node.layout_mode = Some(LayoutMode::Vertical);
        node.item_spacing = Some(12.0);
        let facts = StyleFacts::from_node(&node);
        let css = render_rule(".stack", facts.declarations());
        assert!(css.contains("display: flex;"));
        assert!(css.contains("flex-direction: column;"));
        assert!(css.contains("gap: 12px;"));
    }

    #[test]
    fn text_fill_becomes_color_not_background() {
        let mut node = FigmaNode::new("1:2", "Label", NodeType::Text);
        node.fills = vec![Paint::solid(Color::new(0.0, 0.0, 0.0, 1.0))];
        node.style = Some(TypeStyle {
            font_family: Some("Inter".into()),
            font_size: Some(14.0),
            font_weight: Some(500.0),
            line_height_px: None,
            letter_spacing: None,
        });
        let facts = StyleFacts::from_node(&node);
        let css = render_rule(".label", facts.declarations());
        assert!(css.contains("color: rgba(0, 0, 0, 1);"));
        assert!(!css.contains("background-color"));
        assert!(css.contains("font-family: 'Inter';"));
        assert!(css.contains("font-weight: 500;"));
    }

    #[test]
    fn symmetric_padding_collapses_to_shorthand() {
        let mut node = FigmaNode::new("1:3", "Box", NodeType::Frame);
        node.padding_top = Some(8.0);
        node.padding_bottom = Some(8.0);
        node.padding_left = Some(16.0);
        node.padding_right = Some(16.0);
        let facts = StyleFacts::from_node(&node);
        let css = render_rule(".box", facts.declarations());
        assert!(css.contains("padding: 8px 16px;"));
    }

    #[test]
    fn custom_properties_carry_prefix() {
        let mut node = FigmaNode::new("1:4", "Chip", NodeType::Frame);
        node.corner_radius = Some(4.0);
        let facts = StyleFacts::from_node(&node);
        let props = facts.as_custom_properties("chip");
        assert_eq!(props[0].0, "--chip-border-radius");
        assert_eq!(props[0].1, "4px");
    }
}
