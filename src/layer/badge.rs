//! Status and payment badges.
//!
//! Status badges (`verifiedDealer`, `featured`, `premium`) are styled by the
//! token document's badge system. Payment badges are fixed pills with a
//! colored dot.

use super::Composer;
use crate::catalog::{BadgeKind, VariantKey};
use crate::document::{
    Document, Font, LayerRole, Paint, RenderLayer, Shape, Stroke, TextAnchor, TextSpan,
    TransformOp,
};
use crate::effects::glow_filter;
use crate::geometry::Point;
use crate::tokens::BadgeSpec;

const BADGE_WIDTH: f64 = 200.0;
const BADGE_HEIGHT: f64 = 44.0;
const PAYMENT_WIDTH: f64 = 120.0;
const PAYMENT_HEIGHT: f64 = 36.0;

const GLOW_FILTER: &str = "badgeGlow";
const DEFAULT_GLOW_COLOR: &str = "#3CAAFF";
const BADGE_FONT: &str = "'Montserrat', Arial, sans-serif";

/// Glyphs are drawn on a 24-unit grid.
const GLYPH_GRID: f64 = 24.0;

/// Path data and fill of a named glyph.
fn glyph(kind: &str) -> Option<(&'static str, &'static str)> {
    match kind {
        "checkmarkShield" => Some((
            "M12 1L3 5v6c0 5.55 3.84 10.74 9 12 5.16-1.26 9-6.45 9-12V5l-9-4zm-2 16l-4-4 1.41-1.41L10 14.17l6.59-6.59L18 9l-8 8z",
            "#FAFAFC",
        )),
        "star" => Some((
            "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            "#FAFAFC",
        )),
        "crown" => Some(("M2 19h20v3H2v-3zm1-9l5 3 4-5.5 4 5.5 5-3-1 9H4l-1-9z", "#0B0A0D")),
        _ => None,
    }
}

impl BadgeKind {
    fn label(self) -> &'static str {
        match self {
            Self::VerifiedDealer => "VERIFIED DEALER",
            Self::Featured => "FEATURED",
            Self::Premium => "PREMIUM",
            Self::PaymentStripe => "STRIPE",
            Self::PaymentSecure => "SECURE",
        }
    }
}

impl Composer<'_> {
    /// Renders one badge.
    ///
    /// A status badge with no entry in the badge system is drawn with the
    /// default style.
    pub fn badge(&self, kind: BadgeKind) -> Document {
        match kind {
            BadgeKind::PaymentStripe => self.payment_badge(kind, "#635BFF"),
            BadgeKind::PaymentSecure => self.payment_badge(kind, "#4CAF50"),
            _ => match self.tokens().badge_system.get(kind.key()) {
                Some(spec) => self.status_badge(kind, spec),
                None => {
                    tracing::debug!(badge = kind.key(), "no badge style, using defaults");
                    self.status_badge(kind, &BadgeSpec::default())
                }
            },
        }
    }

    fn status_badge(&self, kind: BadgeKind, spec: &BadgeSpec) -> Document {
        let (w, h) = (BADGE_WIDTH, BADGE_HEIGHT);
        let radius = h * spec.corner_radius_ratio;
        let mut doc = Document::new(w, h);

        let fill = match (&spec.fill.color, &spec.fill.gradient) {
            (Some(color), _) => Some(Paint::Color(self.color(color))),
            (None, Some(gradient)) => self.gradient(&mut doc, gradient, "badgeFill"),
            (None, None) => None,
        };
        let border = match (&spec.border.gradient, &spec.border.color) {
            (Some(gradient), _) => self.gradient(&mut doc, gradient, "badgeBorder"),
            (None, Some(color)) => Some(Paint::Color(self.color(color))),
            (None, None) => None,
        };

        if let Some(glow) = &spec.glow {
            let color = self
                .resolver()
                .resolve_glow(&glow.preset)
                .map_or(DEFAULT_GLOW_COLOR, |preset| preset.color.as_str());
            doc.push_definition(glow_filter(GLOW_FILTER, &self.color(color), glow.blur_px, glow.opacity));
        }

        if let Some(fill) = fill {
            let mut background = RenderLayer::new(LayerRole::Background, Shape::rect(w, h, radius))
                .fill(fill)
                .opacity(spec.fill.opacity);
            if spec.glow.is_some() {
                background = background.filter(GLOW_FILTER);
            }
            doc.push_layer(background);
        }

        if let Some(border) = border {
            let bw = h * spec.border.width_ratio;
            doc.push_layer(
                RenderLayer::new(
                    LayerRole::Border,
                    Shape::Rect {
                        x: bw / 2.0,
                        y: bw / 2.0,
                        width: w - bw,
                        height: h - bw,
                        corner_radius: radius,
                    },
                )
                .stroke(Stroke::new(border, bw))
                .opacity(spec.border.opacity),
            );
        }

        let icon = &spec.icon;
        match glyph(&icon.kind) {
            Some((data, color)) => {
                let s = h * icon.scale_ratio_to_badge_height;
                doc.push_layer(
                    RenderLayer::new(LayerRole::Glyph, Shape::Path { data: data.into() })
                        .fill(Paint::color(color))
                        .transform(TransformOp::Translate {
                            x: w * icon.placement.x - s / 2.0,
                            y: h * icon.placement.y - s / 2.0,
                        })
                        .transform(TransformOp::Scale {
                            factor: s / GLYPH_GRID,
                        }),
                );
            }
            None => tracing::debug!(glyph = %icon.kind, "unknown badge glyph"),
        }

        let text = &spec.text;
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Text,
                Shape::Text {
                    position: Point::new(w * text.placement.x, h * text.placement.y),
                    font: Font::new(BADGE_FONT, "500", 11.0)
                        .letter_spacing(1.6)
                        .centered(),
                    spans: vec![TextSpan::plain(kind.label())],
                },
            )
            .fill(Paint::Color(self.color(&text.color))),
        );

        doc
    }

    fn payment_badge(&self, kind: BadgeKind, accent: &str) -> Document {
        let (w, h) = (PAYMENT_WIDTH, PAYMENT_HEIGHT);
        let mut doc = Document::new(w, h);

        doc.push_layer(
            RenderLayer::new(LayerRole::Background, Shape::rect(w, h, h / 2.0))
                .fill(self.color_paint("carbonDark"))
                .opacity(0.9),
        );
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Border,
                Shape::Rect {
                    x: 1.0,
                    y: 1.0,
                    width: w - 2.0,
                    height: h - 2.0,
                    corner_radius: (h - 2.0) / 2.0,
                },
            )
            .stroke(Stroke::new(self.color_paint("slateSurface"), 1.0))
            .opacity(0.7),
        );
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Accent,
                Shape::Circle {
                    center: Point::new(18.0, h / 2.0),
                    r: 8.0,
                },
            )
            .fill(Paint::color(accent))
            .opacity(0.85),
        );
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Text,
                Shape::Text {
                    position: Point::new(w / 2.0 + 8.0, h / 2.0),
                    font: Font::new("'Montserrat', sans-serif", "600", 10.0)
                        .letter_spacing(1.8)
                        .anchor(TextAnchor::Middle)
                        .centered(),
                    spans: vec![TextSpan::plain(kind.label())],
                },
            )
            .fill(self.color_paint("pureWhite")),
        );

        doc
    }
}
