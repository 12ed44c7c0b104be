//! Wordmark lockups.

use super::{BRAND_FONT, Composer, TAGLINE};
use crate::catalog::{IconVariant, LogoMode};
use crate::document::{
    Document, Font, LayerRole, Paint, RenderLayer, Shape, TextAnchor, TextSpan, TransformOp,
};
use crate::effects::glow_filter;
use crate::geometry::Point;

const TEXT_GLOW: &str = "textGlow";
const RED_GLOW: &str = "redGlow";
const TAGLINE_GLOW: &str = "taglineGlow";

/// Light-theme flat colors.
const LIGHT_WORDMARK: &str = "#101114";
const LIGHT_ACCENT: &str = "#C7001A";
const LIGHT_TAGLINE: &str = "#2B2C31";

impl Composer<'_> {
    /// Renders a wordmark lockup of `width` x `height` units.
    ///
    /// Dark lockups get gradient fills, glows, a vignette background and the
    /// underline streak; light lockups use flat colors. When the lockup shows
    /// the mark, the core icon is embedded at 65% of the height, with glow
    /// only on dark backgrounds.
    pub fn logo(&self, mode: LogoMode, width: f64, height: f64) -> Document {
        let tokens = self.tokens();
        let proportions = &tokens.logo_system.proportions;
        let dark = mode.is_dark();
        let mut doc = Document::new(width, height);

        if dark {
            doc.push_definition(glow_filter(TEXT_GLOW, "#FFFFFF", 10.0, 0.18));
            doc.push_definition(glow_filter(RED_GLOW, "#FF2436", 18.0, 0.55));
            doc.push_definition(glow_filter(TAGLINE_GLOW, "#FFFFFF", 6.0, 0.12));

            if let Some(vignette) = self.gradient(&mut doc, "graphiteVignette", "bgVignette") {
                doc.push_layer(
                    RenderLayer::new(LayerRole::Background, Shape::rect(width, height, 0.0))
                        .fill(vignette),
                );
            }
        }

        let wordmark_x = if mode.include_icon {
            width * (proportions.icon_to_total_width + proportions.gap_icon_to_wordmark)
        } else {
            width * 0.05
        };
        let font_size = height * 0.38;

        let (wordmark_fill, accent_fill, tagline_fill) = if dark {
            (
                self.gradient(&mut doc, "chromeTextGradient", "chromeText"),
                self.gradient(&mut doc, "redArcGradientStrong", "redAccent"),
                self.gradient(&mut doc, "softWhiteGradient", "whiteGrad"),
            )
        } else {
            (
                Some(Paint::color(LIGHT_WORDMARK)),
                Some(Paint::color(LIGHT_ACCENT)),
                Some(Paint::color(LIGHT_TAGLINE)),
            )
        };

        if let Some(fill) = wordmark_fill {
            let mut spans = vec![TextSpan::plain("iTrader")];
            spans.push(match accent_fill {
                Some(accent) => TextSpan::painted(".im", accent),
                None => TextSpan::plain(".im"),
            });
            let mut layer = RenderLayer::new(
                LayerRole::Text,
                Shape::Text {
                    position: Point::default(),
                    font: Font::new(BRAND_FONT, "bold", font_size)
                        .letter_spacing(-1.0)
                        .centered(),
                    spans,
                },
            )
            .fill(fill)
            .transform(TransformOp::Translate {
                x: wordmark_x,
                y: height * 0.52,
            })
            .transform(TransformOp::SkewX {
                angle: proportions.italic_angle_deg,
            });
            if dark {
                layer = layer.filter(TEXT_GLOW);
            }
            doc.push_layer(layer);
        }

        let streak = &tokens.logo_system.highlight_effects.red_underline_streak;
        if dark && streak.enabled {
            if let Some(fill) = self.gradient(&mut doc, "redStreakGradient", "redStreak") {
                let thickness = font_size * streak.thickness_ratio_to_wordmark_cap_height;
                let x = width * streak.start.x;
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Accent,
                        Shape::Rect {
                            x,
                            y: height * streak.start.y,
                            width: width * streak.end.x - x,
                            height: thickness,
                            corner_radius: thickness / 2.0,
                        },
                    )
                    .fill(fill)
                    .opacity(streak.opacity)
                    .filter(RED_GLOW),
                );
            }
        }

        if mode.include_tagline {
            if let Some(fill) = tagline_fill {
                let tagline = &tokens.typography_system.supporting.tagline;
                let mut layer = RenderLayer::new(
                    LayerRole::Text,
                    Shape::Text {
                        position: Point::new(width * 0.5, height * 0.83),
                        font: Font::new(BRAND_FONT, "500", font_size * tagline.size_ratio_to_wordmark)
                            .letter_spacing(tagline.tracking / 100.0)
                            .anchor(TextAnchor::Middle),
                        spans: vec![TextSpan::plain(TAGLINE)],
                    },
                )
                .fill(fill)
                .opacity(0.9);
                if dark {
                    layer = layer.filter(TAGLINE_GLOW);
                }
                doc.push_layer(layer);
            }
        }

        if mode.include_icon {
            let icon_size = height * 0.65;
            let icon = self.icon(IconVariant::Core, icon_size, dark);
            doc.embed(
                icon,
                "icon-",
                vec![TransformOp::Translate {
                    x: width * 0.02,
                    y: (height - icon_size) / 2.0 - height * 0.05,
                }],
            );
        }

        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Theme;
    use crate::resolver::TokenResolver;
    use crate::tokens::DesignTokens;

    fn resolver() -> TokenResolver {
        let json = r##"{ "gradientSystem": { "gradients": [
            { "name": "chromeTextGradient", "type": "linear", "stops": [] },
            { "name": "redArcGradientStrong", "type": "linear", "stops": [] },
            { "name": "softWhiteGradient", "type": "linear", "stops": [] },
            { "name": "redStreakGradient", "type": "linear", "stops": [] },
            { "name": "graphiteVignette", "type": "radial", "stops": [] },
            { "name": "redArcGradient", "type": "linear", "stops": [] }
        ] } }"##;
        TokenResolver::new(DesignTokens::from_json(json).unwrap())
    }

    #[test]
    fn full_dark_lockup() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).logo(LogoMode::new(Theme::Dark, true, true), 1200.0, 400.0);

        assert_eq!(
            doc.roles(),
            [
                LayerRole::Background,
                LayerRole::Text,
                LayerRole::Accent,
                LayerRole::Text,
                LayerRole::Embedded,
            ]
        );
        assert!(doc.definition("icon-redArc").is_some());
        assert!(doc.definition("icon-specBlur").is_some());
    }

    #[test]
    fn light_wordmark_uses_flat_colors() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).logo(LogoMode::new(Theme::Light, false, false), 800.0, 200.0);

        assert_eq!(doc.roles(), [LayerRole::Text]);
        assert!(doc.definitions.is_empty());
        let text = &doc.layers[0];
        assert_eq!(text.fill, Paint::color(LIGHT_WORDMARK));
        assert!(text.filter.is_none());
        let TransformOp::Translate { x, y } = text.transform[0] else {
            panic!("wordmark should be translated first");
        };
        assert!((x - 40.0).abs() < 1e-9);
        assert!((y - 104.0).abs() < 1e-9);
    }

    #[test]
    fn embedded_icon_glows_only_when_dark() {
        let json = r##"{ "iconSystem": { "variants": { "core": { "glow": { "outer": {
            "red": { "color": "#FF2436", "blurPx": 40, "opacity": 0.5 }
        } } } } } }"##;
        let resolver = TokenResolver::new(DesignTokens::from_json(json).unwrap());
        let composer = Composer::new(&resolver);

        let dark = composer.logo(LogoMode::new(Theme::Dark, true, false), 400.0, 140.0);
        let light = composer.logo(LogoMode::new(Theme::Light, true, false), 400.0, 140.0);
        assert!(dark.definition("icon-glow_red").is_some());
        assert!(light.definition("icon-glow_red").is_none());
    }
}
