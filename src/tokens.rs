//! Design token extraction.
//!
//! A pure map/reduce over the node tree: walks fills, strokes, effects,
//! layout values and text styles and produces deduplicated named entries per
//! category. No internal state, no side effects; tokens are derived data,
//! recomputed fully on each run.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::figma::{EffectType, FigmaApiResponse, FigmaNode, NodeType};

/// A named, reusable design value with a CSS-literal `value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignToken {
    pub name: String,
    pub value: String,
    pub description: String,
}

impl DesignToken {
    fn new(name: String, value: String, description: String) -> Self {
        Self {
            name,
            value,
            description,
        }
    }
}

/// Extracted token set: five independent ordered collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignTokens {
    pub colors: Vec<DesignToken>,
    pub typography: Vec<DesignToken>,
    pub spacing: Vec<DesignToken>,
    pub shadows: Vec<DesignToken>,
    pub border_radius: Vec<DesignToken>,
}

impl DesignTokens {
    pub fn total(&self) -> usize {
        self.colors.len()
            + self.typography.len()
            + self.spacing.len()
            + self.shadows.len()
            + self.border_radius.len()
    }
}

/// Extract design tokens from a Figma file payload.
///
/// An absent document yields an empty token set rather than an error; the
/// analyzer is the phase that rejects malformed input.
pub fn extract(file: &FigmaApiResponse) -> DesignTokens {
    let mut extractor = Extractor::default();
    if let Some(document) = &file.document {
        document.walk(&mut |node| extractor.visit(node));
    }
    extractor.tokens
}

#[derive(Default)]
struct Extractor {
    tokens: DesignTokens,
    seen_colors: HashSet<String>,
    seen_typography: HashSet<String>,
    seen_spacing: HashSet<String>,
    seen_shadows: HashSet<String>,
    seen_radii: HashSet<String>,
}

impl Extractor {
    fn visit(&mut self, node: &FigmaNode) {
        self.collect_colors(node);
        self.collect_typography(node);
        self.collect_spacing(node);
        self.collect_shadows(node);
        self.collect_radii(node);
    }

    fn collect_colors(&mut self, node: &FigmaNode) {
        if let Some(color) = node.solid_fill_color() {
            let value = color.to_rgba_string();
            if self.seen_colors.insert(value.clone()) {
                let index = self.tokens.colors.len() + 1;
                self.tokens.colors.push(DesignToken::new(
                    format!("color-{}", index),
                    value,
                    format!("Fill color from '{}'", node.name),
                ));
            }
        }
        if let Some(color) = node.solid_stroke_color() {
            let value = color.to_rgba_string();
            if self.seen_colors.insert(value.clone()) {
                let index = self.tokens.colors.len() + 1;
                self.tokens.colors.push(DesignToken::new(
                    format!("color-{}", index),
                    value,
                    format!("Stroke color from '{}'", node.name),
                ));
            }
        }
    }

    fn collect_typography(&mut self, node: &FigmaNode) {
        if node.node_type != NodeType::Text {
            return;
        }
        let Some(style) = &node.style else {
            return;
        };
        // Literal pixel sizes from Figma's fontSize/lineHeightPx.
        let family = style.font_family.as_deref().unwrap_or("inherit");
        let size = style.font_size.unwrap_or(16.0);
        let weight = style.font_weight.unwrap_or(400.0) as u32;
        let value = match style.line_height_px {
            Some(line) => format!("{} {}px/{}px '{}'", weight, size, line, family),
            None => format!("{} {}px '{}'", weight, size, family),
        };
        if self.seen_typography.insert(value.clone()) {
            let index = self.tokens.typography.len() + 1;
            self.tokens.typography.push(DesignToken::new(
                format!("font-{}", index),
                value,
                format!("Text style from '{}'", node.name),
            ));
        }
    }

    fn collect_spacing(&mut self, node: &FigmaNode) {
        let mut candidates = Vec::new();
        if let Some(gap) = node.item_spacing {
            candidates.push(gap);
        }
        for padding in [
            node.padding_top,
            node.padding_right,
            node.padding_bottom,
            node.padding_left,
        ]
        .into_iter()
        .flatten()
        {
            candidates.push(padding);
        }
        for px in candidates {
            if px <= 0.0 {
                continue;
            }
            let value = format!("{}px", format_px(px));
            if self.seen_spacing.insert(value.clone()) {
                self.tokens.spacing.push(DesignToken::new(
                    format!("spacing-{}", format_px(px)),
                    value,
                    format!("Spacing from '{}'", node.name),
                ));
            }
        }
    }

    fn collect_shadows(&mut self, node: &FigmaNode) {
        for effect in &node.effects {
            if !effect.visible || effect.effect_type != EffectType::DropShadow {
                continue;
            }
            let (x, y) = effect.offset.map(|o| (o.x, o.y)).unwrap_or((0.0, 0.0));
            let radius = effect.radius.unwrap_or(0.0);
            let color = effect
                .color
                .map(|c| c.to_rgba_string())
                .unwrap_or_else(|| "rgba(0, 0, 0, 0.25)".to_string());
            let value = format!(
                "{}px {}px {}px {}",
                format_px(x),
                format_px(y),
                format_px(radius),
                color
            );
            if self.seen_shadows.insert(value.clone()) {
                let index = self.tokens.shadows.len() + 1;
                self.tokens.shadows.push(DesignToken::new(
                    format!("shadow-{}", index),
                    value,
                    format!("Drop shadow from '{}'", node.name),
                ));
            }
        }
    }

    fn collect_radii(&mut self, node: &FigmaNode) {
        let Some(radius) = node.corner_radius else {
            return;
        };
        if radius <= 0.0 {
            return;
        }
        let value = format!("{}px", format_px(radius));
        if self.seen_radii.insert(value.clone()) {
            self.tokens.border_radius.push(DesignToken::new(
                format!("radius-{}", format_px(radius)),
                value,
                format!("Corner radius from '{}'", node.name),
            ));
        }
    }
}

/// Pixel value without a fractional tail when it is whole.
pub(crate) fn format_px(value: f32) -> String {
    if (value.fract()).abs() < f32::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figma::{Color, Effect, Offset, Paint, TypeStyle};

    fn file_with_document(document: FigmaNode) -> FigmaApiResponse {
        FigmaApiResponse {
            name: "Fixture".into(),
            document: Some(document),
            components: Default::default(),
            styles: Default::default(),
        }
    }

    #[test]
    fn missing_document_yields_empty_tokens() {
        let file = FigmaApiResponse {
            name: "Empty".into(),
            document: None,
            components: Default::default(),
            styles: Default::default(),
        };
        assert_eq!(extract(&file).total(), 0);
    }

    #[test]
    fn identical_fill_colors_are_deduplicated() {
        let mut root = FigmaNode::new("0", "Root", NodeType::Frame);
        for i in 0..3 {
            let mut child = FigmaNode::new(format!("1:{i}"), "Box", NodeType::Rectangle);
            child.fills = vec![Paint::solid(Color::new(1.0, 0.0, 0.0, 1.0))];
            root.children.push(child);
        }
        let tokens = extract(&file_with_document(root));
        assert_eq!(tokens.colors.len(), 1);
        assert_eq!(tokens.colors[0].value, "rgba(255, 0, 0, 1)");
    }

    #[test]
    fn typography_uses_literal_pixel_sizes() {
        let mut text = FigmaNode::new("1:1", "Heading", NodeType::Text);
        text.style = Some(TypeStyle {
            font_family: Some("Inter".into()),
            font_size: Some(24.0),
            font_weight: Some(700.0),
            line_height_px: Some(32.0),
            letter_spacing: None,
        });
        let mut root = FigmaNode::new("0", "Root", NodeType::Frame);
        root.children.push(text);
        let tokens = extract(&file_with_document(root));
        assert_eq!(tokens.typography.len(), 1);
        assert_eq!(tokens.typography[0].value, "700 24px/32px 'Inter'");
    }

    #[test]
    fn spacing_comes_from_item_spacing_and_padding() {
        let mut frame = FigmaNode::new("0", "Stack", NodeType::Frame);
        frame.item_spacing = Some(8.0);
        frame.padding_left = Some(16.0);
        frame.padding_right = Some(16.0);
        let tokens = extract(&file_with_document(frame));
        let values: Vec<&str> = tokens.spacing.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["8px", "16px"]);
    }

    #[test]
    fn drop_shadow_renders_css_shadow_value() {
        let mut card = FigmaNode::new("0", "Card", NodeType::Frame);
        card.effects = vec![Effect {
            effect_type: EffectType::DropShadow,
            visible: true,
            color: Some(Color::new(0.0, 0.0, 0.0, 0.25)),
            offset: Some(Offset { x: 0.0, y: 4.0 }),
            radius: Some(12.0),
        }];
        let tokens = extract(&file_with_document(card));
        assert_eq!(tokens.shadows.len(), 1);
        assert_eq!(tokens.shadows[0].value, "0px 4px 12px rgba(0, 0, 0, 0.25)");
    }

    #[test]
    fn extraction_is_deterministic() {
        let mut root = FigmaNode::new("0", "Root", NodeType::Frame);
        root.corner_radius = Some(6.0);
        let mut child = FigmaNode::new("1", "Box", NodeType::Rectangle);
        child.fills = vec![Paint::solid(Color::new(0.2, 0.4, 0.6, 1.0))];
        root.children.push(child);
        let file = file_with_document(root);

        let first = serde_json::to_string(&extract(&file)).expect("serialize");
        let second = serde_json::to_string(&extract(&file)).expect("serialize");
        assert_eq!(first, second);
    }
}
