//! Figma document types, parsed from Figma REST API JSON.
//!
//! The tree is immutable input: the pipeline reads it for the duration of one
//! generation run and never mutates a node. Network access and authentication
//! belong to the external client that produced the [`FigmaApiResponse`]; this
//! module only models the payload.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A Figma file payload from the files endpoint.
///
/// `document` is optional on purpose: a truncated or malformed response must
/// surface as an input error from the analyzer, not as a deserialization
/// panic deeper in the pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaApiResponse {
    #[serde(default)]
    pub name: String,
    pub document: Option<FigmaNode>,
    #[serde(default)]
    pub components: HashMap<String, ComponentMeta>,
    #[serde(default)]
    pub styles: HashMap<String, StyleMeta>,
}

/// Published-component metadata from the file payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Shared-style metadata from the file payload.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub style_type: String,
}

/// A node in the Figma document tree.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub children: Vec<FigmaNode>,
    pub absolute_bounding_box: Option<BoundingBox>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub background: Vec<Paint>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    pub layout_mode: Option<LayoutMode>,
    pub item_spacing: Option<f32>,
    pub padding_left: Option<f32>,
    pub padding_right: Option<f32>,
    pub padding_top: Option<f32>,
    pub padding_bottom: Option<f32>,
    pub corner_radius: Option<f32>,
    /// Literal text content; only present on TEXT nodes.
    pub characters: Option<String>,
    /// Type style; only present on TEXT nodes.
    pub style: Option<TypeStyle>,
}

impl FigmaNode {
    /// Bare node with the given identity; everything else defaulted. Fixture
    /// construction for callers and tests.
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            children: Vec::new(),
            absolute_bounding_box: None,
            fills: Vec::new(),
            strokes: Vec::new(),
            background: Vec::new(),
            effects: Vec::new(),
            layout_mode: None,
            item_spacing: None,
            padding_left: None,
            padding_right: None,
            padding_top: None,
            padding_bottom: None,
            corner_radius: None,
            characters: None,
            style: None,
        }
    }

    /// Whether this node is a component candidate: COMPONENT nodes and FRAME
    /// nodes (frames double as layout components).
    pub fn is_component_candidate(&self) -> bool {
        matches!(self.node_type, NodeType::Component | NodeType::Frame)
    }

    /// First visible SOLID paint in the list, matching how a renderer paints:
    /// when multiple fills are present, the first one wins.
    pub fn first_solid(paints: &[Paint]) -> Option<&Paint> {
        paints
            .iter()
            .find(|p| p.visible && p.paint_type == PaintType::Solid && p.color.is_some())
    }

    /// Solid fill color of this node, falling back to the background list.
    pub fn solid_fill_color(&self) -> Option<Color> {
        Self::first_solid(&self.fills)
            .or_else(|| Self::first_solid(&self.background))
            .and_then(|p| p.color)
    }

    /// Solid stroke color of this node.
    pub fn solid_stroke_color(&self) -> Option<Color> {
        Self::first_solid(&self.strokes).and_then(|p| p.color)
    }

    /// Number of nodes in this subtree, including self.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FigmaNode::subtree_size)
            .sum::<usize>()
    }

    /// Depth-first walk over the subtree in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a FigmaNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Closed set of Figma node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Vector,
    BooleanOperation,
    Star,
    Line,
    Ellipse,
    RegularPolygon,
    Rectangle,
    Text,
    Slice,
    Component,
    ComponentSet,
    Instance,
}

impl NodeType {
    /// Node kinds whose geometry the generators only approximate with a box.
    pub fn is_vector_like(&self) -> bool {
        matches!(
            self,
            NodeType::Vector | NodeType::BooleanOperation | NodeType::Star | NodeType::Line
        )
    }
}

/// Absolute bounding box in canvas coordinates.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A paint (fill, stroke or background entry).
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(rename = "type")]
    pub paint_type: PaintType,
    pub color: Option<Color>,
    pub opacity: Option<f32>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self {
            paint_type: PaintType::Solid,
            color: Some(color),
            opacity: None,
            visible: true,
        }
    }
}

/// Paint kinds the API can return. Only SOLID is fully reproduced; gradient
/// and image paints are approximated and lower the accuracy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaintType {
    Solid,
    GradientLinear,
    GradientRadial,
    GradientAngular,
    GradientDiamond,
    Image,
    Emoji,
}

impl PaintType {
    pub fn is_approximated(&self) -> bool {
        !matches!(self, PaintType::Solid)
    }
}

/// RGBA color with normalized 0.0-1.0 channels, as Figma serializes it.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS `rgba(r, g, b, a)` literal with 0-255 channel rounding.
    pub fn to_rgba_string(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            format_alpha(self.a)
        )
    }
}

/// Alpha formatted with at most two decimals, without a trailing zero tail.
fn format_alpha(a: f32) -> String {
    let rounded = (a.clamp(0.0, 1.0) * 100.0).round() / 100.0;
    let mut text = format!("{:.2}", rounded);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// A visual effect attached to a node. Drop shadows feed the shadow tokens.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Effect {
    #[serde(rename = "type")]
    pub effect_type: EffectType,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub color: Option<Color>,
    pub offset: Option<Offset>,
    pub radius: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EffectType {
    DropShadow,
    InnerShadow,
    LayerBlur,
    BackgroundBlur,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

/// Auto-layout direction of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    None,
    Horizontal,
    Vertical,
}

/// Type style of a TEXT node.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: Option<String>,
    pub font_size: Option<f32>,
    pub font_weight: Option<f32>,
    pub line_height_px: Option<f32>,
    pub letter_spacing: Option<f32>,
}
