//! Motion streaks, texture, loaders and the Safari pinned-tab silhouette.

use std::f64::consts::PI;

use super::icon::IconFrame;
use super::Composer;
use crate::catalog::{IconVariant, SpinnerPreset, StreakDirection};
use crate::document::{Document, LayerRole, Paint, RenderLayer, Shape, Stroke, TransformOp};
use crate::effects::{gaussian_blur_filter, glow_filter, noise_filter};
use crate::geometry::Point;

const STREAK_LENGTH: f64 = 1024.0;
const STREAK_BREADTH: f64 = 120.0;
const NOISE_SIZE: f64 = 256.0;
const SPINNER_SIZE: f64 = 64.0;
const LOADER_SIZE: f64 = 120.0;
const LOADER_ICON_SIZE: f64 = 80.0;
const PINNED_TAB_SIZE: f64 = 512.0;

/// Closed quadratic outline of a streak running along x, thinning towards
/// the far end.
fn horizontal_streak_path(w: f64, h: f64) -> String {
    let thick = h * 0.5;
    let y = h / 2.0;
    format!(
        "M 0 {} Q {} {} {} {} Q {} {} {w} {y} L {w} {y} Q {} {} {} {} Q {} {} 0 {} Z",
        y - thick / 2.0,
        w * 0.1,
        y - thick * 0.6,
        w * 0.5,
        y - thick * 0.3,
        w * 0.9,
        y - thick * 0.1,
        w * 0.9,
        y + thick * 0.1,
        w * 0.5,
        y + thick * 0.3,
        w * 0.1,
        y + thick * 0.6,
        y + thick / 2.0,
    )
}

/// The same outline running along y.
fn vertical_streak_path(w: f64, h: f64) -> String {
    let thick = w * 0.5;
    let x = w / 2.0;
    format!(
        "M {} 0 Q {} {} {} {} Q {} {} {x} {h} L {x} {h} Q {} {} {} {} Q {} {} {} 0 Z",
        x - thick / 2.0,
        x - thick * 0.6,
        h * 0.1,
        x - thick * 0.3,
        h * 0.5,
        x - thick * 0.1,
        h * 0.9,
        x + thick * 0.1,
        h * 0.9,
        x + thick * 0.3,
        h * 0.5,
        x + thick * 0.6,
        h * 0.1,
        x + thick / 2.0,
    )
}

impl Composer<'_> {
    /// Renders a feathered motion streak with its optional offset overlay.
    pub fn streak(&self, direction: StreakDirection) -> Document {
        let motion = &self.tokens().motion_graphics;
        let (spec, w, h, path, opacity) = match direction {
            StreakDirection::Horizontal => (
                &motion.horizontal_streak,
                STREAK_LENGTH,
                STREAK_BREADTH,
                horizontal_streak_path(STREAK_LENGTH, STREAK_BREADTH),
                0.9,
            ),
            StreakDirection::Vertical => (
                &motion.vertical_streak,
                STREAK_BREADTH,
                STREAK_LENGTH,
                vertical_streak_path(STREAK_BREADTH, STREAK_LENGTH),
                0.85,
            ),
        };
        let mut doc = Document::new(w, h);

        let main = self.gradient(&mut doc, &spec.gradient, "streakGrad");
        let overlay = &spec.secondary_overlay;
        let secondary = if overlay.enabled {
            self.gradient(&mut doc, &overlay.gradient, "streakGrad2")
        } else {
            None
        };
        doc.push_definition(gaussian_blur_filter("streakBlur", spec.edge_feather_px_at_1024));

        if let Some(fill) = main {
            doc.push_layer(
                RenderLayer::new(LayerRole::Streak, Shape::Path { data: path.clone() })
                    .fill(fill)
                    .opacity(opacity)
                    .filter("streakBlur"),
            );
        }
        if let Some(fill) = secondary {
            let shift = match direction {
                StreakDirection::Horizontal => TransformOp::Translate {
                    x: 0.0,
                    y: overlay.offset_ratio.y * h,
                },
                StreakDirection::Vertical => TransformOp::Translate {
                    x: overlay.offset_ratio.x * w,
                    y: 0.0,
                },
            };
            doc.push_layer(
                RenderLayer::new(LayerRole::Streak, Shape::Path { data: path })
                    .fill(fill)
                    .opacity(overlay.opacity)
                    .filter("streakBlur")
                    .transform(shift),
            );
        }

        doc
    }

    /// Renders a tileable grey noise texture at low opacity.
    pub fn noise_texture(&self) -> Document {
        let mut doc = Document::square(NOISE_SIZE);
        doc.push_definition(noise_filter("noise", 0.65, 4));
        doc.push_layer(
            RenderLayer::new(LayerRole::Texture, Shape::rect(NOISE_SIZE, NOISE_SIZE, 0.0))
                .fill(Paint::color("black"))
                .opacity(0.08)
                .filter("noise"),
        );
        doc
    }

    /// Renders a two-ring CSS-animated loading spinner.
    pub fn spinner(&self, preset: SpinnerPreset) -> Document {
        let (primary, secondary) = match preset {
            SpinnerPreset::Energy => ("neonRed", "accentStreakRed"),
            SpinnerPreset::Trust => ("electricBlue", "accentStreakBlue"),
            SpinnerPreset::Default => ("silverMetallic", "silverHighlight"),
        };
        let primary = self.color(primary);
        let center = Point::new(SPINNER_SIZE / 2.0, SPINNER_SIZE / 2.0);
        let mut doc = Document::square(SPINNER_SIZE);

        doc.push_definition(glow_filter("spinGlow", &primary, 8.0, 0.4));
        doc.stylesheet = Some(format!(
            "@keyframes spin {{ from {{ transform: rotate(0deg); }} to {{ transform: rotate(360deg); }} }}\n\
             .spinner {{ animation: spin 1s linear infinite; transform-origin: {}px {}px; }}",
            center.x, center.y
        ));

        let outer = 24.0;
        doc.push_layer(
            RenderLayer::new(LayerRole::Spinner, Shape::Circle { center, r: outer })
                .stroke(Stroke::new(Paint::Color(primary), 4.0).dashed(outer * PI * 1.2, outer * PI * 0.8))
                .opacity(0.9)
                .filter("spinGlow")
                .class("spinner"),
        );
        let inner = outer - 6.0;
        doc.push_layer(
            RenderLayer::new(LayerRole::Spinner, Shape::Circle { center, r: inner })
                .stroke(
                    Stroke::new(self.color_paint(secondary), 2.0)
                        .dashed(inner * PI * 0.6, inner * PI * 1.4),
                )
                .opacity(0.5)
                .class("spinner")
                .inline_style("animation-direction: reverse; animation-duration: 1.4s;"),
        );

        doc
    }

    /// Renders the pulsing mark used as a page loader.
    pub fn animated_logo(&self) -> Document {
        let pulse = &self.tokens().motion_graphics.suggested_animation.icon_pulse;
        let origin = LOADER_SIZE / 2.0;
        let inset = (LOADER_SIZE - LOADER_ICON_SIZE) / 2.0;
        let mut doc = Document::square(LOADER_SIZE);

        doc.stylesheet = Some(format!(
            "@keyframes pulse {{\n  0%, 100% {{ transform: scale(1); opacity: 0.45; }}\n  50% {{ transform: scale(1.03); opacity: 0.62; }}\n}}\n\
             @keyframes streakSweep {{\n  0% {{ transform: translateX(-35%); opacity: 0; }}\n  15% {{ transform: translateX(-5%); opacity: 0.85; }}\n  55% {{ transform: translateX(35%); opacity: 0.85; }}\n  100% {{ transform: translateX(85%); opacity: 0; }}\n}}\n\
             .icon-pulse {{\n  animation: pulse {}ms ease-in-out infinite;\n  transform-origin: {origin}px {origin}px;\n}}",
            pulse.duration_ms
        ));

        let mark = self.icon(IconVariant::Core, LOADER_ICON_SIZE, true);
        doc.embed(mark, "", vec![TransformOp::Translate { x: inset, y: inset }]);
        if let Some(group) = doc.layers.last_mut() {
            group.class = Some("icon-pulse".into());
        }
        doc
    }

    /// Renders the mark as a single-color silhouette.
    pub fn safari_pinned_tab(&self) -> Document {
        let frame = IconFrame::new(&self.tokens().icon_system.geometry, PINNED_TAB_SIZE);
        let black = Paint::color("black");
        let mut doc = Document::square(PINNED_TAB_SIZE);

        doc.push_layer(
            RenderLayer::new(LayerRole::Ring, frame.ring_shape())
                .stroke(Stroke::new(black.clone(), frame.ring_thickness))
                .transform(frame.rotate()),
        );
        for (sweep, scale) in [((-30.0, 200.0), 1.0), ((150.0, 380.0), 0.8)] {
            let points = frame.arc(sweep, scale).outline(self.arc_steps);
            doc.push_layer(
                RenderLayer::new(LayerRole::PrimaryArc, Shape::Polygon { points }).fill(black.clone()),
            );
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Definition, FilterEffect};
    use crate::resolver::TokenResolver;
    use crate::tokens::DesignTokens;

    fn resolver() -> TokenResolver {
        TokenResolver::new(
            DesignTokens::from_json(
                r##"{
                    "colorSystem": {
                        "neonRed": { "hex": "#E22229" },
                        "accentStreakRed": { "hex": "#FF4A55" }
                    },
                    "gradientSystem": { "gradients": [
                        { "name": "redStreakGradient", "type": "linear", "stops": [] },
                        { "name": "blueStreakGradient", "type": "linear", "stops": [] }
                    ] }
                }"##,
            )
            .unwrap(),
        )
    }

    #[test]
    fn horizontal_streak_has_offset_overlay() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).streak(StreakDirection::Horizontal);

        assert_eq!((doc.width, doc.height), (1024.0, 120.0));
        assert_eq!(doc.roles(), [LayerRole::Streak, LayerRole::Streak]);
        assert_eq!(doc.layers[0].fill, Paint::reference("streakGrad"));
        assert_eq!(doc.layers[0].opacity, 0.9);
        assert_eq!(doc.layers[1].fill, Paint::reference("streakGrad2"));
        let TransformOp::Translate { x, y } = doc.layers[1].transform[0] else {
            panic!("overlay should be translated");
        };
        assert_eq!(x, 0.0);
        assert!((y - 0.12 * 120.0).abs() < 1e-9);
    }

    #[test]
    fn vertical_streak_shifts_sideways() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).streak(StreakDirection::Vertical);

        assert_eq!((doc.width, doc.height), (120.0, 1024.0));
        assert_eq!(doc.layers[0].opacity, 0.85);
        let TransformOp::Translate { y, .. } = doc.layers[1].transform[0] else {
            panic!("overlay should be translated");
        };
        assert_eq!(y, 0.0);
    }

    #[test]
    fn streak_without_gradients_keeps_only_the_filter() {
        let resolver = TokenResolver::default();
        let doc = Composer::new(&resolver).streak(StreakDirection::Horizontal);
        assert!(doc.layers.is_empty());
        assert!(doc.definition("streakBlur").is_some());
    }

    #[test]
    fn streak_path_is_closed() {
        let path = horizontal_streak_path(1024.0, 120.0);
        assert!(path.starts_with("M 0 30 Q 102.4 "));
        assert!(path.contains("1024 60 L 1024 60"));
        assert!(path.ends_with(" 0 90 Z"));
    }

    #[test]
    fn noise_texture_is_faint() {
        let doc = Composer::new(&TokenResolver::default()).noise_texture();
        assert_eq!(doc.roles(), [LayerRole::Texture]);
        assert_eq!(doc.layers[0].opacity, 0.08);
        let Some(Definition::Filter { effects, .. }) = doc.definition("noise") else {
            panic!("missing noise filter");
        };
        assert_eq!(
            effects[0],
            FilterEffect::FractalNoise {
                base_frequency: 0.65,
                octaves: 4
            }
        );
    }

    #[test]
    fn energy_spinner_uses_red_rings() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).spinner(SpinnerPreset::Energy);

        assert!(doc.stylesheet.as_deref().unwrap().contains("@keyframes spin"));
        let outer = doc.layers[0].stroke.as_ref().unwrap();
        assert_eq!(outer.paint, Paint::color("#E22229"));
        let [dash, gap] = outer.dash.unwrap();
        assert!((dash + gap - 48.0 * PI).abs() < 1e-9);
        assert_eq!(
            doc.layers[1].stroke.as_ref().unwrap().paint,
            Paint::color("#FF4A55")
        );
        assert!(doc.layers[1].inline_style.is_some());
    }

    #[test]
    fn animated_logo_pulses_embedded_mark() {
        let doc = Composer::new(&TokenResolver::default()).animated_logo();

        assert_eq!(doc.roles(), [LayerRole::Embedded]);
        assert_eq!(doc.layers[0].class.as_deref(), Some("icon-pulse"));
        assert_eq!(
            doc.layers[0].transform,
            [TransformOp::Translate { x: 20.0, y: 20.0 }]
        );
        assert!(doc.stylesheet.as_deref().unwrap().contains("pulse 2400ms"));
    }

    #[test]
    fn pinned_tab_is_black_silhouette() {
        let doc = Composer::new(&TokenResolver::default())
            .with_arc_steps(10)
            .safari_pinned_tab();

        assert_eq!(
            doc.roles(),
            [LayerRole::Ring, LayerRole::PrimaryArc, LayerRole::PrimaryArc]
        );
        assert!(doc.definitions.is_empty());
        let Shape::Polygon { points } = &doc.layers[1].shape else {
            panic!("arc should be a polygon");
        };
        assert_eq!(points.len(), 22);
    }
}
