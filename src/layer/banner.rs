//! Category banners and social sharing cards.
//!
//! Both are dark, full-bleed compositions: shaded background, a soft accent
//! glow, a horizontal light streak and the wordmark set in plain text.

use super::{Composer, BRAND_FONT, TAGLINE};
use crate::catalog::{CategoryKey, SocialCard, VariantKey};
use crate::color::shade;
use crate::document::{
    ColorStop, Definition, Document, Font, LayerRole, Paint, RenderLayer, Shape, TextAnchor,
    TextSpan,
};
use crate::effects::gaussian_blur_filter;
use crate::geometry::Point;
use crate::tokens::CategoryExpression;

const BASE_BACKGROUND: &str = "#050405";
const WORDMARK: &str = "#EFF0F3";
const WORDMARK_ACCENT: &str = "#E22229";
const LABEL: &str = "#FAFAFC";
const SUBDUED: &str = "#CFCFD4";
const CAPTION: &str = "#B7ACAA";
const CARD_GLOW: &str = "#157BCA";

/// Category used when a key has no expression of its own.
const FALLBACK_CATEGORY: &str = "vehicles";

/// 8-bit alpha as an opacity.
fn alpha(value: u8) -> f64 {
    f64::from(value) / 255.0
}

fn stop(offset: f64, color: &str, opacity: f64) -> ColorStop {
    ColorStop {
        offset,
        color: color.to_string(),
        opacity,
    }
}

/// Top-to-bottom gradient.
fn vertical(id: &str, stops: Vec<ColorStop>) -> Definition {
    Definition::LinearGradient {
        id: id.to_string(),
        start: Point::new(0.0, 0.0),
        end: Point::new(0.0, 100.0),
        stops,
    }
}

/// Left-to-right gradient.
fn horizontal(id: &str, stops: Vec<ColorStop>) -> Definition {
    Definition::LinearGradient {
        id: id.to_string(),
        start: Point::new(0.0, 0.0),
        end: Point::new(100.0, 0.0),
        stops,
    }
}

/// `iTrader.im` with the accent on the suffix.
fn wordmark(position: Point, size: f64, anchor: TextAnchor) -> RenderLayer {
    RenderLayer::new(
        LayerRole::Text,
        Shape::Text {
            position,
            font: Font::new(BRAND_FONT, "bold", size).anchor(anchor),
            spans: vec![
                TextSpan::plain("iTrader"),
                TextSpan::painted(".im", Paint::color(WORDMARK_ACCENT)),
            ],
        },
    )
    .fill(Paint::color(WORDMARK))
}

fn caption(position: Point, size: f64, anchor: TextAnchor, text: &str) -> RenderLayer {
    RenderLayer::new(
        LayerRole::Text,
        Shape::Text {
            position,
            font: Font::new(BRAND_FONT, "normal", size).anchor(anchor),
            spans: vec![TextSpan::plain(text)],
        },
    )
}

impl Composer<'_> {
    /// Renders the hero banner of a marketplace category.
    ///
    /// Categories without an expression in the token document borrow the
    /// `vehicles` expression.
    pub fn category_banner(&self, category: CategoryKey, width: f64, height: f64) -> Document {
        let (w, h) = (width, height);
        let expressions = &self.tokens().category_expressions;
        let fallback = CategoryExpression::default();
        let expression = expressions
            .get(category.key())
            .or_else(|| expressions.get(FALLBACK_CATEGORY))
            .unwrap_or(&fallback);
        let accent = self.color(&expression.primary_accent);
        let mut doc = Document::new(w, h);

        doc.push_definition(vertical(
            "bandShade",
            vec![
                stop(0.0, "#000000", 0.55),
                stop(30.0, "#000000", 0.55),
                stop(30.0, "#000000", 0.15),
                stop(70.0, "#000000", 0.15),
                stop(70.0, "#000000", 0.55),
                stop(100.0, "#000000", 0.55),
            ],
        ));
        let edge = shade(&accent, 0.5);
        doc.push_definition(vertical(
            "accentStreak",
            vec![
                stop(0.0, &edge, 0.0),
                stop(50.0, &accent, alpha(180)),
                stop(100.0, &edge, 0.0),
            ],
        ));
        let glow_radius = (w.max(h) / 4.0).floor();
        doc.push_definition(gaussian_blur_filter("accentBlur", glow_radius));

        doc.push_layer(
            RenderLayer::new(LayerRole::Background, Shape::rect(w, h, 0.0))
                .fill(Paint::color(BASE_BACKGROUND)),
        );
        doc.push_layer(
            RenderLayer::new(LayerRole::Background, Shape::rect(w, h, 0.0))
                .fill(Paint::reference("bandShade")),
        );

        let thickness = expression.motion_streak.map_or(0.1, |s| s.thickness_ratio);
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Streak,
                Shape::Rect {
                    x: 0.0,
                    y: (h * 0.5).floor(),
                    width: w,
                    height: (h * thickness).floor(),
                    corner_radius: 0.0,
                },
            )
            .fill(Paint::reference("accentStreak")),
        );
        doc.push_layer(
            RenderLayer::new(
                LayerRole::GlowHalo,
                Shape::Circle {
                    center: Point::new(w / 2.0, h / 2.0),
                    r: glow_radius,
                },
            )
            .fill(Paint::Color(accent))
            .opacity(alpha(40))
            .filter("accentBlur"),
        );

        let large = (h / 14.0).floor().max(28.0);
        let small = (h / 28.0).floor().max(14.0);
        let x = (w * expression.logo_placement_ratio.x).floor();
        let top = (h * expression.logo_placement_ratio.y).floor();
        doc.push_layer(wordmark(Point::new(x, top + large), large, TextAnchor::Start));
        doc.push_layer(
            caption(
                Point::new(x, top + (h / 10.0).floor() + small),
                small,
                TextAnchor::Start,
                category.label(),
            )
            .fill(Paint::color(LABEL))
            .opacity(alpha(200)),
        );
        doc.push_layer(
            caption(
                Point::new(w / 2.0, (h * 0.83).floor() + small),
                small,
                TextAnchor::Middle,
                TAGLINE,
            )
            .fill(Paint::color(SUBDUED))
            .opacity(alpha(180)),
        );

        doc
    }

    /// Renders an Open Graph or Twitter card.
    pub fn social_card(&self, card: SocialCard) -> Document {
        let (width, height) = card.dimensions();
        let (w, h) = (f64::from(width), f64::from(height));
        let mut doc = Document::new(w, h);

        doc.push_definition(vertical(
            "cardBase",
            vec![
                stop(0.0, "#050407", 1.0),
                stop(50.0, "#0B0A0D", 1.0),
                stop(100.0, "#050407", 1.0),
            ],
        ));
        doc.push_definition(horizontal(
            "cardVignette",
            vec![
                stop(0.0, "#000000", alpha(40)),
                stop(50.0, "#000000", 0.0),
                stop(100.0, "#000000", alpha(40)),
            ],
        ));
        doc.push_definition(vertical(
            "cardStreak",
            vec![
                stop(0.0, WORDMARK_ACCENT, 0.0),
                stop(50.0, WORDMARK_ACCENT, alpha(120)),
                stop(100.0, WORDMARK_ACCENT, 0.0),
            ],
        ));
        doc.push_definition(gaussian_blur_filter("cardBlur", 160.0));

        for paint in ["cardBase", "cardVignette"] {
            doc.push_layer(
                RenderLayer::new(LayerRole::Background, Shape::rect(w, h, 0.0))
                    .fill(Paint::reference(paint)),
            );
        }
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Streak,
                Shape::Rect {
                    x: w * 0.15,
                    y: (h / 2.0).floor() + 30.0,
                    width: w * 0.7,
                    height: 12.0,
                    corner_radius: 0.0,
                },
            )
            .fill(Paint::reference("cardStreak")),
        );
        doc.push_layer(
            RenderLayer::new(
                LayerRole::GlowHalo,
                Shape::Ellipse {
                    center: Point::new(w / 2.0, h / 2.0),
                    rx: 200.0,
                    ry: 100.0,
                },
            )
            .fill(Paint::color(CARD_GLOW))
            .opacity(alpha(25))
            .filter("cardBlur"),
        );

        doc.push_layer(wordmark(
            Point::new(w / 2.0, h * 0.38 + 52.0),
            52.0,
            TextAnchor::Middle,
        ));
        doc.push_layer(
            caption(Point::new(w / 2.0, h * 0.58 + 18.0), 18.0, TextAnchor::Middle, TAGLINE)
                .fill(Paint::color(SUBDUED))
                .opacity(alpha(200)),
        );

        let label = match card {
            SocialCard::Listing => Some("LISTING DETAILS"),
            SocialCard::Categories => Some("BROWSE CATEGORIES"),
            SocialCard::Default | SocialCard::Twitter => None,
        };
        if let Some(label) = label {
            doc.push_layer(
                caption(Point::new(w * 0.1, h * 0.78 + 18.0), 18.0, TextAnchor::Start, label)
                    .fill(Paint::color(CAPTION))
                    .opacity(alpha(120)),
            );
        }

        doc
    }
}
