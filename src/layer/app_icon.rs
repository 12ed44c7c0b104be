//! App-store icons: a rounded, clipped container holding the mark or the
//! `iT` monogram.

use super::{Composer, BRAND_FONT};
use crate::catalog::{AppIconVariant, IconVariant};
use crate::document::{
    Definition, Document, Font, LayerRole, RenderLayer, Shape, Stroke, TextAnchor, TextSpan,
    TransformOp,
};
use crate::geometry::Point;

/// Canvas size of every app icon.
pub const APP_ICON_SIZE: f64 = 1024.0;

const CLIP_ID: &str = "appClip";
/// Fraction of the container occupied by the embedded mark.
const MARK_SCALE: f64 = 0.72;

impl Composer<'_> {
    /// Renders an app icon at [`APP_ICON_SIZE`].
    ///
    /// Everything is drawn inside one [`LayerRole::Container`] group clipped
    /// to the rounded square, so rasterized corners stay transparent.
    pub fn app_icon(&self, variant: AppIconVariant) -> Document {
        let s = APP_ICON_SIZE;
        let app = &self.tokens().app_icon_system;
        let corner = s * app.container.corner_radius_pct / 100.0;
        let mut doc = Document::square(s);

        doc.push_definition(Definition::ClipPath {
            id: CLIP_ID.into(),
            shape: Shape::rect(s, s, corner),
        });

        if let Some(background) = self.gradient(&mut doc, "appIconBackground", "appBg") {
            doc.push_layer(
                RenderLayer::new(LayerRole::Background, Shape::rect(s, s, corner)).fill(background),
            );
        }
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Border,
                Shape::Rect {
                    x: 2.0,
                    y: 2.0,
                    width: s - 4.0,
                    height: s - 4.0,
                    corner_radius: corner - 2.0,
                },
            )
            .stroke(Stroke::new(self.color_paint("slateSurface"), 2.0))
            .opacity(0.9),
        );

        match variant {
            AppIconVariant::VortexOnly => {
                let offset = (s - s * MARK_SCALE) / 2.0;
                let placement = app.icon_placement.center_offset_pct;
                let mark = self.icon(IconVariant::Core, (s * MARK_SCALE).floor(), true);
                doc.embed(
                    mark,
                    "icon-",
                    vec![TransformOp::Translate {
                        x: offset + s * placement.x / 100.0,
                        y: offset + s * placement.y / 100.0,
                    }],
                );
            }
            AppIconVariant::MonogramIt => {
                if let Some(chrome) = self.gradient(&mut doc, "chromeTextGradient", "chromeText") {
                    doc.push_layer(
                        RenderLayer::new(
                            LayerRole::Text,
                            Shape::Text {
                                position: Point::new(s / 2.0, s / 2.0),
                                font: Font::new(BRAND_FONT, "bold", s * 0.4)
                                    .anchor(TextAnchor::Middle)
                                    .italic()
                                    .centered(),
                                spans: vec![TextSpan::plain("iT")],
                            },
                        )
                        .fill(chrome),
                    );
                }
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Accent,
                        Shape::Rect {
                            x: s * 0.55,
                            y: s * 0.62,
                            width: s * 0.12,
                            height: s * 0.032,
                            corner_radius: 4.0,
                        },
                    )
                    .fill(self.color_paint("neonRed"))
                    .opacity(0.9),
                );
            }
        }

        let layers = std::mem::take(&mut doc.layers);
        doc.push_layer(
            RenderLayer::new(LayerRole::Container, Shape::Group { layers }).clip_path(CLIP_ID),
        );
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Paint;
    use crate::resolver::TokenResolver;
    use crate::tokens::DesignTokens;

    fn resolver() -> TokenResolver {
        TokenResolver::new(
            DesignTokens::from_json(
                r##"{
                    "gradientSystem": { "gradients": [
                        { "name": "appIconBackground", "type": "radial", "stops": [] },
                        { "name": "chromeTextGradient", "type": "linear", "stops": [] }
                    ] },
                    "appIconSystem": { "iconPlacement": { "centerOffsetPct": { "x": 0, "y": 2 } } }
                }"##,
            )
            .unwrap(),
        )
    }

    fn children(doc: &Document) -> &[RenderLayer] {
        assert_eq!(doc.roles(), [LayerRole::Container]);
        assert_eq!(doc.layers[0].clip_path.as_deref(), Some(CLIP_ID));
        let Shape::Group { layers } = &doc.layers[0].shape else {
            panic!("container should be a group");
        };
        layers
    }

    #[test]
    fn clip_uses_corner_radius_percentage() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).app_icon(AppIconVariant::MonogramIt);

        let Some(Definition::ClipPath { shape, .. }) = doc.definition(CLIP_ID) else {
            panic!("missing clip path");
        };
        assert_eq!(*shape, Shape::rect(1024.0, 1024.0, 1024.0 * 22.0 / 100.0));
    }

    #[test]
    fn monogram_draws_text_and_bar() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).app_icon(AppIconVariant::MonogramIt);

        let roles: Vec<_> = children(&doc).iter().map(|l| l.role).collect();
        assert_eq!(
            roles,
            [LayerRole::Background, LayerRole::Border, LayerRole::Text, LayerRole::Accent]
        );
        assert_eq!(children(&doc)[0].fill, Paint::reference("appBg"));
    }

    #[test]
    fn vortex_embeds_offset_mark() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).app_icon(AppIconVariant::VortexOnly);

        let mark = children(&doc).last().unwrap();
        assert_eq!(mark.role, LayerRole::Embedded);
        let TransformOp::Translate { x, y } = mark.transform[0] else {
            panic!("mark should be translated");
        };
        let offset = (1024.0 - 1024.0 * 0.72) / 2.0;
        assert!((x - offset).abs() < 1e-9);
        assert!((y - (offset + 1024.0 * 0.02)).abs() < 1e-9);
        assert!(doc.definition("icon-specBlur").is_some());
    }
}
