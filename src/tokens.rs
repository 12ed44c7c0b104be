//! Design-token document.
//!
//! A [`DesignTokens`] value is the whole brand description: colors,
//! gradients, glow presets and the geometric ratios the composer turns into
//! shapes. It is deserialized once from JSON and only ever read afterwards.
//!
//! Every geometric ratio is relative to the canonical edge length of the
//! asset (icon size, badge height, ...) so any output size is a uniform
//! scale of the same description.
//!
//! # Example
//!
//! ```
//! use brand_renderer::DesignTokens;
//!
//! let tokens = DesignTokens::from_json(r##"{
//!     "colorSystem": { "neonRed": { "hex": "#E22229" } },
//!     "gradientSystem": { "gradients": [] }
//! }"##).unwrap();
//!
//! assert_eq!(tokens.color_system.len(), 1);
//! // Sections that are absent fall back to the built-in geometry.
//! assert_eq!(tokens.icon_system.geometry.ellipse_outer.rotation_deg, -18.0);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{RenderError, Result};

// ============================================================================
// DesignTokens
// ============================================================================

/// The complete design-token document.
///
/// Unknown namespaces and fields are ignored; missing ones take the defaults
/// documented on each type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct DesignTokens {
    /// Named colors (`name -> { "hex": "#RRGGBB" }`).
    pub color_system: BTreeMap<String, ColorEntry>,

    /// Ordered gradient definitions.
    pub gradient_system: GradientSystem,

    /// Named glow presets.
    pub glow_system: BTreeMap<String, GlowSpec>,

    /// Vortex mark geometry and per-variant effects.
    pub icon_system: IconSystem,
    /// Lockup proportions and the underline streak.
    pub logo_system: LogoSystem,
    pub typography_system: TypographySystem,

    /// Badge styles keyed by badge type (`verifiedDealer`, `featured`, ...).
    pub badge_system: BTreeMap<String, BadgeSpec>,

    /// Category banner styles keyed by category (`vehicles`, `hifiAv`, ...).
    pub category_expressions: BTreeMap<String, CategoryExpression>,

    /// Speed streaks and the spinner pulse.
    pub motion_graphics: MotionGraphics,
    pub app_icon_system: AppIconSystem,
}

impl DesignTokens {
    /// Parses a token document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a token document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| RenderError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Serializes the document back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ============================================================================
// Colors
// ============================================================================

/// One entry of the `colorSystem` namespace.
///
/// Real documents mix color tokens with free-form notes, so anything that is
/// not a `{ "hex": ... }` object is kept but never resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum ColorEntry {
    /// A color token with its hex value.
    Token { hex: String },
    /// A bare hex string.
    Literal(String),
    /// Anything else (descriptions, usage notes).
    Other(serde_json::Value),
}

impl ColorEntry {
    /// Returns the hex value if this entry is a color.
    pub fn hex(&self) -> Option<&str> {
        match self {
            Self::Token { hex } => Some(hex),
            Self::Literal(s) if s.starts_with('#') => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// Gradients
// ============================================================================

/// The `gradientSystem` namespace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct GradientSystem {
    /// Looked up by name; the first match wins.
    pub gradients: Vec<GradientSpec>,
}

/// Geometry family of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
    /// Any type this renderer does not draw (e.g. `conic`).
    #[serde(other)]
    Unsupported,
}

/// A named gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct GradientSpec {
    /// Token name, also used as the element id in rendered markup.
    pub name: String,

    #[serde(rename = "type")]
    pub kind: GradientKind,

    /// Direction in degrees for linear gradients (0 = left to right).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,

    /// Stops ordered by position.
    #[serde(default)]
    pub stops: Vec<GradientStop>,
}

/// A single gradient stop. `position` is a percentage (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct GradientStop {
    pub position: f64,

    /// Hex literal or color token name.
    pub color: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

// ============================================================================
// Glow
// ============================================================================

/// A glow preset. Blur and spread are expressed at the 1024-unit reference
/// size; see [`GlowSpec::scaled`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct GlowSpec {
    /// Hex literal or color token name.
    pub color: String,
    pub blur_px: f64,
    /// Not drawn; kept so documents round-trip.
    pub spread_px: f64,
    pub opacity: f64,
}

impl Default for GlowSpec {
    fn default() -> Self {
        Self {
            color: "#3CAAFF".into(),
            blur_px: 22.0,
            spread_px: 0.0,
            opacity: 0.5,
        }
    }
}

// ============================================================================
// Icon system
// ============================================================================

/// The `iconSystem` namespace: shared vortex geometry plus per-variant
/// effects.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct IconSystem {
    pub geometry: IconGeometry,
    /// Keyed by variant key (`core`, `trust`, ...).
    pub variants: BTreeMap<String, IconVariantTokens>,
}

/// Ratios describing the vortex mark, relative to the icon edge length.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct IconGeometry {
    /// Path the arc bands sweep along.
    pub ellipse_outer: EllipseRatios,
    pub arc_thickness: ArcThickness,
    /// The dark hole inside the ring.
    pub core_cutout: EllipseRatios,
    pub tail_taper: TailTaper,
    pub shadow: ShadowTokens,
    pub specular: SpecularTokens,
}

impl Default for IconGeometry {
    fn default() -> Self {
        Self {
            ellipse_outer: EllipseRatios {
                rx_ratio: 0.40,
                ry_ratio: 0.30,
                rotation_deg: -18.0,
            },
            arc_thickness: ArcThickness::default(),
            core_cutout: EllipseRatios {
                rx_ratio: 0.26,
                ry_ratio: 0.18,
                rotation_deg: -18.0,
            },
            tail_taper: TailTaper::default(),
            shadow: ShadowTokens::default(),
            specular: SpecularTokens::default(),
        }
    }
}

/// A rotated ellipse expressed as fractions of the icon edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct EllipseRatios {
    pub rx_ratio: f64,
    pub ry_ratio: f64,
    /// Clockwise in degrees; negative tilts the ellipse up to the right.
    #[serde(default)]
    pub rotation_deg: f64,
}

/// Arc band thickness as a fraction of the outer ellipse's `ry`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ArcThickness {
    /// Thickness of the leading arc band.
    pub outer_ratio_to_outer_ry: f64,
    /// Not drawn; the ring spans the outer and core ellipses.
    pub inner_ratio_to_outer_ry: f64,
}

impl Default for ArcThickness {
    fn default() -> Self {
        Self {
            outer_ratio_to_outer_ry: 0.22,
            inner_ratio_to_outer_ry: 0.12,
        }
    }
}

/// Comet-tail taper applied along every vortex arc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct TailTaper {
    pub start_thickness_ratio: f64,
    pub end_thickness_ratio: f64,
    /// Values above 1 keep the head thick for longer.
    pub taper_exponent: f64,
}

impl Default for TailTaper {
    fn default() -> Self {
        Self {
            start_thickness_ratio: 1.0,
            end_thickness_ratio: 0.18,
            taper_exponent: 1.8,
        }
    }
}

/// Drop shadow under the whole mark. Offsets and blur are at 1024 units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ShadowTokens {
    pub enabled: bool,
    pub offset: RatioPoint,
    pub blur_px: f64,
    pub color: String,
    pub opacity: f64,
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            enabled: true,
            offset: RatioPoint { x: 0.0, y: 18.0 },
            blur_px: 48.0,
            color: "#000000".into(),
            opacity: 0.45,
        }
    }
}

/// Highlights drawn over the arcs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct SpecularTokens {
    pub top_highlight: TopHighlight,
    pub inner_rim_highlight: InnerRimHighlight,
}

/// Blurred highlight dot placed at a polar offset from the icon center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct TopHighlight {
    pub blur_px: f64,
    pub position_polar: PolarPosition,
    /// Dot diameter as a fraction of the icon edge.
    pub size_ratio: f64,
    pub opacity: f64,
}

impl Default for TopHighlight {
    fn default() -> Self {
        Self {
            blur_px: 24.0,
            position_polar: PolarPosition {
                angle_deg: -120.0,
                radius_ratio: 0.42,
            },
            size_ratio: 0.08,
            opacity: 0.35,
        }
    }
}

/// Polar coordinates; `radius_ratio` is relative to half the edge length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PolarPosition {
    /// Measured from the positive x axis, clockwise in screen space.
    pub angle_deg: f64,
    pub radius_ratio: f64,
}

/// Thin light stroke along the core cutout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct InnerRimHighlight {
    pub enabled: bool,
    /// Upward shift of the stroke, as a fraction of the icon edge.
    pub offset_ratio: f64,
    pub opacity: f64,
}

impl Default for InnerRimHighlight {
    fn default() -> Self {
        Self {
            enabled: true,
            offset_ratio: 0.004,
            opacity: 0.35,
        }
    }
}

/// Per-variant effects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct IconVariantTokens {
    /// Halos drawn only when the caller asks for glow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow: Option<VariantGlow>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub particle_specks: Option<ParticleSpecks>,
}

/// Outer glows of a variant, in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct VariantGlow {
    /// Preset name and spec, one halo each.
    #[serde(with = "ordered_map")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "BTreeMap<String, GlowSpec>"))]
    pub outer: Vec<(String, GlowSpec)>,
}

/// Scattered highlight particles around the mark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct ParticleSpecks {
    /// Only the core variant draws specks.
    pub enabled: bool,
    /// Speck count at 1024 units; scaled linearly with the icon size.
    #[serde(rename = "countPer1024px")]
    pub count_per_1024px: f64,
    /// Particle radius range at 1024 units.
    pub size_px: [f64; 2],
    /// Lower and upper opacity bound.
    pub opacity: [f64; 2],
}

impl Default for ParticleSpecks {
    fn default() -> Self {
        Self {
            enabled: false,
            count_per_1024px: 24.0,
            size_px: [1.5, 4.0],
            opacity: [0.2, 0.6],
        }
    }
}

// ============================================================================
// Logo and typography
// ============================================================================

/// The `logoSystem` namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct LogoSystem {
    pub proportions: LogoProportions,
    /// Accents laid over the wordmark.
    pub highlight_effects: HighlightEffects,
}

/// Horizontal lockup layout, as fractions of the logo width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct LogoProportions {
    pub icon_to_total_width: f64,
    pub gap_icon_to_wordmark: f64,
    /// Skew of the wordmark; negative leans right.
    pub italic_angle_deg: f64,
}

impl Default for LogoProportions {
    fn default() -> Self {
        Self {
            icon_to_total_width: 0.22,
            gap_icon_to_wordmark: 0.03,
            italic_angle_deg: -10.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct HighlightEffects {
    pub red_underline_streak: UnderlineStreak,
}

/// Underline streak under the wordmark; endpoints are fractions of the logo
/// box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct UnderlineStreak {
    pub enabled: bool,
    pub start: RatioPoint,
    pub end: RatioPoint,
    /// Stroke width relative to the wordmark font size.
    pub thickness_ratio_to_wordmark_cap_height: f64,
    pub opacity: f64,
}

impl Default for UnderlineStreak {
    fn default() -> Self {
        Self {
            enabled: true,
            start: RatioPoint { x: 0.30, y: 0.68 },
            end: RatioPoint { x: 0.92, y: 0.68 },
            thickness_ratio_to_wordmark_cap_height: 0.06,
            opacity: 0.85,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct TypographySystem {
    pub supporting: SupportingType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct SupportingType {
    pub tagline: TaglineTokens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct TaglineTokens {
    /// Tagline font size relative to the wordmark's.
    pub size_ratio_to_wordmark: f64,
    /// Letter spacing in 1/100 em.
    pub tracking: f64,
}

impl Default for TaglineTokens {
    fn default() -> Self {
        Self {
            size_ratio_to_wordmark: 0.22,
            tracking: 160.0,
        }
    }
}

// ============================================================================
// Badges
// ============================================================================

/// Style of one token-driven badge. Sizes are fractions of the badge height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeSpec {
    /// 0.5 gives a pill.
    pub corner_radius_ratio: f64,
    pub fill: BadgePaint,
    pub border: BadgeBorder,
    /// Outer glow behind the pill; none when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow: Option<BadgeGlow>,
    pub icon: BadgeIcon,
    pub text: BadgeText,
}

impl Default for BadgeSpec {
    fn default() -> Self {
        Self {
            corner_radius_ratio: 0.5,
            fill: BadgePaint {
                color: Some("#121318".into()),
                ..BadgePaint::default()
            },
            border: BadgeBorder {
                color: Some("#2A2C33".into()),
                ..BadgeBorder::default()
            },
            glow: None,
            icon: BadgeIcon::default(),
            text: BadgeText::default(),
        }
    }
}

/// Either a flat color or a named gradient; a color wins when both are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct BadgePaint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    pub opacity: f64,
}

impl Default for BadgePaint {
    fn default() -> Self {
        Self {
            color: None,
            gradient: None,
            opacity: 1.0,
        }
    }
}

/// Badge outline; a gradient wins when both are set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeBorder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    /// Stroke width as a fraction of the badge height.
    pub width_ratio: f64,
    pub opacity: f64,
}

impl Default for BadgeBorder {
    fn default() -> Self {
        Self {
            color: None,
            gradient: None,
            width_ratio: 0.05,
            opacity: 1.0,
        }
    }
}

/// Blurred halo behind a badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeGlow {
    /// Name of a `glowSystem` preset supplying the color.
    pub preset: String,
    pub blur_px: f64,
    pub opacity: f64,
}

impl Default for BadgeGlow {
    fn default() -> Self {
        Self {
            preset: "blue".into(),
            blur_px: 22.0,
            opacity: 0.35,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeIcon {
    /// Glyph name: `checkmarkShield`, `star` or `crown`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Glyph center as fractions of the badge box.
    pub placement: RatioPoint,
    pub scale_ratio_to_badge_height: f64,
}

impl Default for BadgeIcon {
    fn default() -> Self {
        Self {
            kind: "checkmarkShield".into(),
            placement: RatioPoint { x: 0.12, y: 0.5 },
            scale_ratio_to_badge_height: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct BadgeText {
    /// Start of the label baseline as fractions of the badge box.
    pub placement: RatioPoint,
    pub color: String,
}

impl Default for BadgeText {
    fn default() -> Self {
        Self {
            placement: RatioPoint { x: 0.22, y: 0.5 },
            color: "#FAFAFC".into(),
        }
    }
}

// ============================================================================
// Categories, motion, app icon
// ============================================================================

/// Visual treatment of one category banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryExpression {
    /// Accent color token.
    pub primary_accent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion_streak: Option<CategoryStreak>,
    /// Top-left corner of the logo as fractions of the banner.
    pub logo_placement_ratio: RatioPoint,
}

impl Default for CategoryExpression {
    fn default() -> Self {
        Self {
            primary_accent: "neonRed".into(),
            motion_streak: None,
            logo_placement_ratio: RatioPoint { x: 0.09, y: 0.22 },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryStreak {
    /// Band height as a fraction of the banner height.
    pub thickness_ratio: f64,
}

impl Default for CategoryStreak {
    fn default() -> Self {
        Self {
            thickness_ratio: 0.1,
        }
    }
}

/// The `motionGraphics` namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct MotionGraphics {
    pub horizontal_streak: StreakTokens,
    pub vertical_streak: StreakTokens,
    pub suggested_animation: SuggestedAnimation,
}

impl Default for MotionGraphics {
    fn default() -> Self {
        Self {
            horizontal_streak: StreakTokens {
                gradient: "redStreakGradient".into(),
                secondary_overlay: SecondaryOverlay {
                    enabled: true,
                    gradient: "blueStreakGradient".into(),
                    offset_ratio: RatioPoint { x: 0.0, y: 0.12 },
                    opacity: 0.55,
                },
                edge_feather_px_at_1024: 6.0,
            },
            vertical_streak: StreakTokens {
                gradient: "blueStreakGradient".into(),
                secondary_overlay: SecondaryOverlay {
                    enabled: true,
                    gradient: "redStreakGradient".into(),
                    offset_ratio: RatioPoint { x: 0.12, y: 0.0 },
                    opacity: 0.55,
                },
                edge_feather_px_at_1024: 6.0,
            },
            suggested_animation: SuggestedAnimation::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct StreakTokens {
    /// Gradient token of the main band.
    pub gradient: String,
    pub secondary_overlay: SecondaryOverlay,
    /// Blur of the band edges.
    #[serde(rename = "edgeFeatherPxAt1024")]
    pub edge_feather_px_at_1024: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct SecondaryOverlay {
    pub enabled: bool,
    pub gradient: String,
    /// Shift from the main band as fractions of the streak box.
    pub offset_ratio: RatioPoint,
    pub opacity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestedAnimation {
    pub icon_pulse: IconPulse,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct IconPulse {
    /// Period of the spinner's pulse animation.
    pub duration_ms: u32,
}

impl Default for IconPulse {
    fn default() -> Self {
        Self { duration_ms: 2400 }
    }
}

/// The `appIconSystem` namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct AppIconSystem {
    pub container: AppIconContainer,
    pub icon_placement: AppIconPlacement,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct AppIconContainer {
    /// Corner radius in percent of the container edge.
    pub corner_radius_pct: f64,
}

impl Default for AppIconContainer {
    fn default() -> Self {
        Self {
            corner_radius_pct: 22.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct AppIconPlacement {
    /// Offset of the mark from the container center, in percent of the edge.
    pub center_offset_pct: RatioPoint,
}

/// A 2D pair of ratios (or, for shadow offsets, 1024-unit pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(default)]
pub struct RatioPoint {
    pub x: f64,
    pub y: f64,
}

// ============================================================================
// Ordered maps
// ============================================================================

/// (De)serializes a JSON object as a `Vec` of entries in document order.
mod ordered_map {
    use super::*;

    pub fn serialize<S, V>(entries: &Vec<(String, V)>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Vec<(String, V)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let tokens = DesignTokens::from_json("{}").unwrap();

        assert!(tokens.color_system.is_empty());
        assert!(tokens.gradient_system.gradients.is_empty());
        assert_eq!(tokens.icon_system.geometry.tail_taper.taper_exponent, 1.8);
        assert!(tokens.icon_system.geometry.shadow.enabled);
    }

    #[test]
    fn outer_glows_keep_document_order() {
        let json = r##"{
            "iconSystem": { "variants": { "core": { "glow": { "outer": {
                "red":  { "color": "#FF2436", "blurPx": 60, "opacity": 0.5 },
                "blue": { "color": "#3CAAFF", "blurPx": 50, "opacity": 0.4 }
            } } } } }
        }"##;
        let tokens = DesignTokens::from_json(json).unwrap();
        let glow = tokens.icon_system.variants["core"].glow.as_ref().unwrap();

        let names: Vec<_> = glow.outer.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["red", "blue"]);
        assert_eq!(glow.outer[0].1.blur_px, 60.0);
        assert_eq!(glow.outer[1].1.spread_px, 0.0);
    }

    #[test]
    fn color_entries_tolerate_notes() {
        let json = r##"{ "colorSystem": {
            "neonRed": { "hex": "#E22229", "usage": "primary" },
            "accent": "#123456",
            "notes": ["not a color"]
        } }"##;
        let tokens = DesignTokens::from_json(json).unwrap();

        assert_eq!(tokens.color_system["neonRed"].hex(), Some("#E22229"));
        assert_eq!(tokens.color_system["accent"].hex(), Some("#123456"));
        assert_eq!(tokens.color_system["notes"].hex(), None);
    }

    #[test]
    fn unsupported_gradient_type_still_parses() {
        let json = r##"{ "gradientSystem": { "gradients": [
            { "name": "sweep", "type": "conic", "stops": [] }
        ] } }"##;
        let tokens = DesignTokens::from_json(json).unwrap();

        assert_eq!(tokens.gradient_system.gradients[0].kind, GradientKind::Unsupported);
    }

    #[test]
    fn particle_fields_use_brand_names() {
        let json = r##"{ "iconSystem": { "variants": { "core": { "particleSpecks": {
            "enabled": true, "countPer1024px": 40, "sizePx": [1, 3], "opacity": [0.1, 0.5]
        } } } } }"##;
        let tokens = DesignTokens::from_json(json).unwrap();
        let specks = tokens.icon_system.variants["core"]
            .particle_specks
            .as_ref()
            .unwrap();

        assert!(specks.enabled);
        assert_eq!(specks.count_per_1024px, 40.0);
        assert_eq!(specks.size_px, [1.0, 3.0]);
    }

    #[test]
    fn json_roundtrip_preserves_glow_order() {
        let json = r##"{ "iconSystem": { "variants": { "energy": { "glow": { "outer": {
            "z": { "color": "#000000" }, "a": { "color": "#FFFFFF" }
        } } } } } }"##;
        let tokens = DesignTokens::from_json(json).unwrap();
        let restored = DesignTokens::from_json(&tokens.to_json_pretty().unwrap()).unwrap();

        assert_eq!(
            restored.icon_system.variants["energy"],
            tokens.icon_system.variants["energy"]
        );
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DesignTokens::from_path("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
