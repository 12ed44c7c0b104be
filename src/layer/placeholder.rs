//! Image placeholders and empty states.

use super::Composer;
use crate::catalog::PlaceholderKind;
use crate::document::{
    Document, Font, LayerRole, RenderLayer, Shape, Stroke, TextAnchor, TextSpan,
};
use crate::geometry::Point;

const PLACEHOLDER_FONT: &str = "'Montserrat', sans-serif";

impl PlaceholderKind {
    /// Canvas size in units.
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Self::Avatar => (200.0, 200.0),
            Self::DealerLogo => (300.0, 200.0),
            Self::Listing | Self::NoListings | Self::NoResults | Self::NoMessages => (400.0, 300.0),
        }
    }

    fn message(self) -> Option<&'static str> {
        match self {
            Self::NoListings => Some("No listings found"),
            Self::NoResults => Some("No results"),
            Self::NoMessages => Some("No messages"),
            _ => None,
        }
    }
}

impl Composer<'_> {
    /// Renders a placeholder on a rounded carbon card.
    pub fn placeholder(&self, kind: PlaceholderKind) -> Document {
        let (w, h) = kind.dimensions();
        let surface = self.color_paint("slateSurface");
        let accent = self.color_paint("silverMetallic");
        let mut doc = Document::new(w, h);

        doc.push_layer(
            RenderLayer::new(LayerRole::Background, Shape::rect(w, h, 8.0))
                .fill(self.color_paint("carbonDark")),
        );
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Border,
                Shape::Rect {
                    x: 1.0,
                    y: 1.0,
                    width: w - 2.0,
                    height: h - 2.0,
                    corner_radius: 7.0,
                },
            )
            .stroke(Stroke::new(surface.clone(), 1.0))
            .opacity(0.5),
        );

        match kind {
            PlaceholderKind::Listing => {
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Glyph,
                        Shape::Rect {
                            x: w * 0.3,
                            y: h * 0.25,
                            width: w * 0.4,
                            height: h * 0.35,
                            corner_radius: 8.0,
                        },
                    )
                    .fill(surface)
                    .opacity(0.6),
                );
                // Mountains.
                let data = format!(
                    "M{} {} l{} {} l{} -{} l{} {} h-{}",
                    w * 0.42,
                    h * 0.35,
                    w * 0.08,
                    h * 0.08,
                    w * 0.08,
                    h * 0.12,
                    w * 0.06,
                    h * 0.16,
                    w * 0.3,
                );
                doc.push_layer(
                    RenderLayer::new(LayerRole::Glyph, Shape::Path { data })
                        .fill(accent.clone())
                        .opacity(0.3),
                );
                // Sun.
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Glyph,
                        Shape::Circle {
                            center: Point::new(w * 0.58, h * 0.33),
                            r: w.min(h) * 0.04,
                        },
                    )
                    .fill(accent)
                    .opacity(0.3),
                );
            }
            PlaceholderKind::Avatar => {
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Glyph,
                        Shape::Circle {
                            center: Point::new(w / 2.0, h * 0.38),
                            r: w * 0.15,
                        },
                    )
                    .fill(surface.clone())
                    .opacity(0.6),
                );
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Glyph,
                        Shape::Ellipse {
                            center: Point::new(w / 2.0, h * 0.72),
                            rx: w * 0.22,
                            ry: h * 0.15,
                        },
                    )
                    .fill(surface)
                    .opacity(0.5),
                );
            }
            PlaceholderKind::DealerLogo => {
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Glyph,
                        Shape::Rect {
                            x: w * 0.2,
                            y: h * 0.2,
                            width: w * 0.6,
                            height: h * 0.6,
                            corner_radius: 12.0,
                        },
                    )
                    .fill(surface)
                    .opacity(0.5),
                );
                doc.push_layer(
                    centered_text(Point::new(w / 2.0, h / 2.0), 14.0, "DEALER")
                        .fill(accent)
                        .opacity(0.5),
                );
            }
            PlaceholderKind::NoListings | PlaceholderKind::NoResults | PlaceholderKind::NoMessages => {
                let message = kind.message().unwrap_or("Empty").to_uppercase();
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Glyph,
                        Shape::Circle {
                            center: Point::new(w / 2.0, h * 0.38),
                            r: 36.0,
                        },
                    )
                    .stroke(Stroke::new(surface, 2.0))
                    .opacity(0.5),
                );
                doc.push_layer(
                    centered_text(Point::new(w / 2.0, h * 0.38), 28.0, "?")
                        .fill(accent.clone())
                        .opacity(0.35),
                );
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Text,
                        Shape::Text {
                            position: Point::new(w / 2.0, h * 0.62),
                            font: Font::new(PLACEHOLDER_FONT, "normal", 14.0)
                                .letter_spacing(1.5)
                                .anchor(TextAnchor::Middle),
                            spans: vec![TextSpan::plain(message)],
                        },
                    )
                    .fill(accent)
                    .opacity(0.5),
                );
            }
        }

        doc
    }
}

fn centered_text(position: Point, size: f64, text: &str) -> RenderLayer {
    RenderLayer::new(
        LayerRole::Text,
        Shape::Text {
            position,
            font: Font::new(PLACEHOLDER_FONT, "normal", size)
                .anchor(TextAnchor::Middle)
                .centered(),
            spans: vec![TextSpan::plain(text)],
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VariantKey;
    use crate::document::Paint;
    use crate::resolver::TokenResolver;
    use crate::tokens::DesignTokens;

    fn resolver() -> TokenResolver {
        TokenResolver::new(
            DesignTokens::from_json(
                r##"{ "colorSystem": {
                    "carbonDark": { "hex": "#0B0A0D" },
                    "slateSurface": { "hex": "#2A2C33" },
                    "silverMetallic": { "hex": "#B9BCC4" }
                } }"##,
            )
            .unwrap(),
        )
    }

    #[test]
    fn every_placeholder_sits_on_a_card() {
        let resolver = resolver();
        let composer = Composer::new(&resolver);
        for &kind in PlaceholderKind::ALL {
            let doc = composer.placeholder(kind);
            assert_eq!((doc.width, doc.height), kind.dimensions(), "{}", kind.key());
            assert_eq!(&doc.roles()[..2], [LayerRole::Background, LayerRole::Border]);
            assert_eq!(doc.layers[0].fill, Paint::color("#0B0A0D"));
        }
    }

    #[test]
    fn empty_states_show_uppercase_message() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).placeholder(PlaceholderKind::NoListings);

        let Shape::Text { spans, .. } = &doc.layers.last().unwrap().shape else {
            panic!("last layer should be the message");
        };
        assert_eq!(spans[0].text, "NO LISTINGS FOUND");
    }

    #[test]
    fn avatar_is_square() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).placeholder(PlaceholderKind::Avatar);
        assert_eq!((doc.width, doc.height), (200.0, 200.0));
        assert_eq!(doc.layers_with_role(LayerRole::Glyph).count(), 2);
    }
}
