//! Format-agnostic renderable document.
//!
//! A [`Document`] is an ordered list of [`RenderLayer`]s (later layers paint
//! over earlier ones) plus the named [`Definition`]s those layers reference.
//! Composers build documents; the [`svg`](crate::svg) module serializes and
//! rasterizes them.
//!
//! Documents embed each other structurally: [`Document::embed`] namespaces
//! the child's definition ids so a logo can carry a full icon without id
//! collisions.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Point;

// ============================================================================
// Document
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub width: f64,
    pub height: f64,

    /// Reusable gradients, filters and clip paths.
    pub definitions: Vec<Definition>,

    /// Draw commands in paint order.
    pub layers: Vec<RenderLayer>,

    /// Optional CSS (keyframes for animated assets).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stylesheet: Option<String>,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            definitions: Vec::new(),
            layers: Vec::new(),
            stylesheet: None,
        }
    }

    /// Creates a square document.
    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }

    pub fn push_definition(&mut self, definition: Definition) {
        self.definitions.push(definition);
    }

    pub fn push_layer(&mut self, layer: RenderLayer) {
        self.layers.push(layer);
    }

    /// Looks up a definition by id.
    pub fn definition(&self, id: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.id() == id)
    }

    /// Top-level layers with the given role, in paint order.
    pub fn layers_with_role(&self, role: LayerRole) -> impl Iterator<Item = &RenderLayer> {
        self.layers.iter().filter(move |layer| layer.role == role)
    }

    /// Roles of the top-level layers, in paint order.
    pub fn roles(&self) -> Vec<LayerRole> {
        self.layers.iter().map(|layer| layer.role).collect()
    }

    /// Embeds `child` as a group layer.
    ///
    /// Every definition of the child is renamed to `{prefix}{id}` and every
    /// reference inside its layers is rewritten to match, so the same child
    /// can be embedded more than once under different prefixes.
    pub fn embed(&mut self, child: Document, prefix: &str, transform: Vec<TransformOp>) {
        let Document {
            definitions,
            mut layers,
            ..
        } = child;

        self.definitions
            .extend(definitions.into_iter().map(|d| d.with_prefix(prefix)));

        for layer in &mut layers {
            layer.prefix_references(prefix);
        }
        self.layers.push(RenderLayer {
            transform,
            ..RenderLayer::new(LayerRole::Embedded, Shape::Group { layers })
        });
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Definitions
// ============================================================================

/// A named, reusable paint server, filter or clip region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Definition {
    /// Linear gradient whose endpoints are percentages of the bounding box.
    LinearGradient {
        id: String,
        start: Point,
        end: Point,
        stops: Vec<ColorStop>,
    },
    /// Radial gradient; center and radius are percentages of the bounding box.
    RadialGradient {
        id: String,
        center: Point,
        radius: f64,
        stops: Vec<ColorStop>,
    },
    Filter {
        id: String,
        region: FilterRegion,
        effects: Vec<FilterEffect>,
    },
    ClipPath { id: String, shape: Shape },
}

impl Definition {
    pub fn id(&self) -> &str {
        match self {
            Self::LinearGradient { id, .. }
            | Self::RadialGradient { id, .. }
            | Self::Filter { id, .. }
            | Self::ClipPath { id, .. } => id,
        }
    }

    fn with_prefix(mut self, prefix: &str) -> Self {
        match &mut self {
            Self::LinearGradient { id, .. }
            | Self::RadialGradient { id, .. }
            | Self::Filter { id, .. }
            | Self::ClipPath { id, .. } => id.insert_str(0, prefix),
        }
        self
    }
}

/// A gradient stop with its offset in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
    pub opacity: f64,
}

/// Filter region as percentages of the element bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct FilterRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for FilterRegion {
    /// Twice the bounding box, so soft edges are never clipped.
    fn default() -> Self {
        Self {
            x: -50.0,
            y: -50.0,
            width: 200.0,
            height: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FilterEffect {
    #[serde(rename_all = "camelCase")]
    DropShadow {
        dx: f64,
        dy: f64,
        std_deviation: f64,
        color: String,
        opacity: f64,
    },
    #[serde(rename_all = "camelCase")]
    GaussianBlur { std_deviation: f64 },
    /// Tileable fractal noise, desaturated to grey.
    #[serde(rename_all = "camelCase")]
    FractalNoise { base_frequency: f64, octaves: u32 },
}

// ============================================================================
// Layers
// ============================================================================

/// Purpose of a layer within its asset template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum LayerRole {
    GlowHalo,
    Shadow,
    SecondaryArc,
    Ring,
    PrimaryArc,
    Specular,
    InnerRim,
    Particle,
    Background,
    Border,
    Glyph,
    Text,
    Accent,
    Streak,
    Texture,
    Spinner,
    Embedded,
    /// Clipped group holding an app icon's contents.
    Container,
}

/// One draw command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RenderLayer {
    pub role: LayerRole,
    pub shape: Shape,
    pub fill: Paint,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,

    pub opacity: f64,

    /// Id of a [`Definition::Filter`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Id of a [`Definition::ClipPath`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clip_path: Option<String>,

    /// Applied left to right, like an SVG transform list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transform: Vec<TransformOp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_style: Option<String>,
}

impl RenderLayer {
    /// A fully opaque layer with no paint.
    pub fn new(role: LayerRole, shape: Shape) -> Self {
        Self {
            role,
            shape,
            fill: Paint::None,
            stroke: None,
            opacity: 1.0,
            filter: None,
            clip_path: None,
            transform: Vec::new(),
            class: None,
            inline_style: None,
        }
    }

    pub fn fill(mut self, paint: Paint) -> Self {
        self.fill = paint;
        self
    }

    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn filter(mut self, id: impl Into<String>) -> Self {
        self.filter = Some(id.into());
        self
    }

    pub fn clip_path(mut self, id: impl Into<String>) -> Self {
        self.clip_path = Some(id.into());
        self
    }

    pub fn transform(mut self, op: TransformOp) -> Self {
        self.transform.push(op);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn inline_style(mut self, style: impl Into<String>) -> Self {
        self.inline_style = Some(style.into());
        self
    }

    fn prefix_references(&mut self, prefix: &str) {
        self.fill.prefix_reference(prefix);
        if let Some(stroke) = &mut self.stroke {
            stroke.paint.prefix_reference(prefix);
        }
        for id in [&mut self.filter, &mut self.clip_path].into_iter().flatten() {
            id.insert_str(0, prefix);
        }
        match &mut self.shape {
            Shape::Group { layers } => {
                for layer in layers {
                    layer.prefix_references(prefix);
                }
            }
            Shape::Text { spans, .. } => {
                for span in spans {
                    if let Some(fill) = &mut span.fill {
                        fill.prefix_reference(prefix);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Geometry of a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
    },
    Circle {
        center: Point,
        r: f64,
    },
    #[serde(rename_all = "camelCase")]
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    /// Closed polygon, e.g. a tapered arc outline.
    Polygon { points: Vec<Point> },
    /// Raw path data for fixed glyphs and curved streaks.
    Path { data: String },
    Text {
        position: Point,
        font: Font,
        spans: Vec<TextSpan>,
    },
    Group { layers: Vec<RenderLayer> },
}

impl Shape {
    /// A rectangle anchored at the origin.
    pub fn rect(width: f64, height: f64, corner_radius: f64) -> Self {
        Self::Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
            corner_radius,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Font {
    pub family: String,
    pub weight: String,
    pub size: f64,
    pub letter_spacing: f64,
    pub anchor: TextAnchor,
    pub italic: bool,
    /// Vertically center the text on its position.
    pub centered_baseline: bool,
}

impl Font {
    pub fn new(family: impl Into<String>, weight: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
            size,
            letter_spacing: 0.0,
            anchor: TextAnchor::Start,
            italic: false,
            centered_baseline: false,
        }
    }

    pub fn letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered_baseline = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// A run of text; `fill` overrides the layer fill for this run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct TextSpan {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Paint>,
}

impl TextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fill: None,
        }
    }

    pub fn painted(text: impl Into<String>, fill: Paint) -> Self {
        Self {
            text: text.into(),
            fill: Some(fill),
        }
    }
}

/// Fill or stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Paint {
    None,
    /// Any CSS color (hex literal or keyword).
    Color(String),
    /// Id of a gradient definition.
    Reference(String),
}

impl Paint {
    pub fn color(color: impl Into<String>) -> Self {
        Self::Color(color.into())
    }

    pub fn reference(id: impl Into<String>) -> Self {
        Self::Reference(id.into())
    }

    fn prefix_reference(&mut self, prefix: &str) {
        if let Self::Reference(id) = self {
            id.insert_str(0, prefix);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    /// Dash and gap lengths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<[f64; 2]>,
    #[serde(default)]
    pub round_cap: bool,
}

impl Stroke {
    pub fn new(paint: Paint, width: f64) -> Self {
        Self {
            paint,
            width,
            dash: None,
            round_cap: false,
        }
    }

    pub fn dashed(mut self, dash: f64, gap: f64) -> Self {
        self.dash = Some([dash, gap]);
        self.round_cap = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum TransformOp {
    /// Rotation in degrees about `center`.
    Rotate { angle: f64, center: Point },
    Translate { x: f64, y: f64 },
    Scale { factor: f64 },
    /// Horizontal skew in degrees.
    SkewX { angle: f64 },
}

// ============================================================================
// Tests
// ============================================================================
