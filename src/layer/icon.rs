//! The vortex mark.
//!
//! Every variant walks the same template, in paint order:
//!
//! 1. glow halos (when requested and the variant defines outer glows)
//! 2. drop shadow (when enabled)
//! 3. secondary arcs
//! 4. ring
//! 5. primary arcs
//! 6. specular highlight
//! 7. inner rim highlight (when enabled)
//! 8. particle specks (`core` only, when enabled)
//!
//! Halos are emitted first so later layers paint over them; they read as a
//! glow behind the mark.

use super::{Composer, Lcg, RandomSource};
use crate::catalog::{IconVariant, VariantKey};
use crate::document::{Document, LayerRole, Paint, RenderLayer, Shape, Stroke, TransformOp};
use crate::effects::{drop_shadow_filter, gaussian_blur_filter, glow_filter, scale_to_size};
use crate::geometry::{ArcGeometry, Point};
use crate::tokens::{IconGeometry, TailTaper};

/// Arc sweep of the leading band.
const FRONT_SWEEP: (f64, f64) = (-30.0, 200.0);
/// Arc sweep of the trailing band, wrapping past 360.
const BACK_SWEEP: (f64, f64) = (150.0, 380.0);
/// Thickness of a trailing band relative to the leading one.
const TRAILING_THICKNESS: f64 = 0.8;

const HALO_GROWTH: f64 = 1.1;
const HALO_OPACITY: f64 = 0.6;
const SHADOW_OPACITY: f64 = 0.6;
const RING_OPACITY: f64 = 0.95;
const RIM_INSET: f64 = 0.95;
const RIM_WIDTH_AT_1024: f64 = 1.5;

const SHADOW_FILTER: &str = "iconShadow";
const SPECULAR_FILTER: &str = "specBlur";

// ============================================================================
// Frame
// ============================================================================

/// Absolute dimensions of the mark at one size.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconFrame {
    pub center: Point,
    pub outer_rx: f64,
    pub outer_ry: f64,
    pub rotation: f64,
    pub outer_thickness: f64,
    pub core_rx: f64,
    pub core_ry: f64,
    pub core_rotation: f64,
    pub ring_rx: f64,
    pub ring_ry: f64,
    pub ring_thickness: f64,
    taper: TailTaper,
}

impl IconFrame {
    pub fn new(geometry: &IconGeometry, size: f64) -> Self {
        let outer_rx = geometry.ellipse_outer.rx_ratio * size;
        let outer_ry = geometry.ellipse_outer.ry_ratio * size;
        let core_rx = geometry.core_cutout.rx_ratio * size;
        let core_ry = geometry.core_cutout.ry_ratio * size;

        Self {
            center: Point::new(size / 2.0, size / 2.0),
            outer_rx,
            outer_ry,
            rotation: geometry.ellipse_outer.rotation_deg,
            outer_thickness: geometry.arc_thickness.outer_ratio_to_outer_ry * outer_ry,
            core_rx,
            core_ry,
            core_rotation: geometry.core_cutout.rotation_deg,
            ring_rx: (outer_rx + core_rx) / 2.0,
            ring_ry: (outer_ry + core_ry) / 2.0,
            ring_thickness: outer_rx - core_rx,
            taper: geometry.tail_taper,
        }
    }

    /// A tapered band along the outer ellipse.
    pub fn arc(&self, (start, end): (f64, f64), thickness_scale: f64) -> ArcGeometry {
        ArcGeometry {
            center: self.center,
            radius_x: self.outer_rx,
            radius_y: self.outer_ry,
            rotation_deg: self.rotation,
            start_angle_deg: start,
            end_angle_deg: end,
            max_thickness: self.outer_thickness * thickness_scale,
            start_taper_ratio: self.taper.start_thickness_ratio,
            end_taper_ratio: self.taper.end_thickness_ratio,
            taper_exponent: self.taper.taper_exponent,
        }
    }

    pub fn rotate(&self) -> TransformOp {
        TransformOp::Rotate {
            angle: self.rotation,
            center: self.center,
        }
    }

    /// The ring between the outer ellipse and the core cutout.
    pub fn ring_shape(&self) -> Shape {
        Shape::Ellipse {
            center: self.center,
            rx: self.ring_rx,
            ry: self.ring_ry,
        }
    }
}

// ============================================================================
// Variant plans
// ============================================================================

/// One arc band of a variant.
#[derive(Debug, Clone, Copy)]
struct Band {
    paint: &'static str,
    sweep: (f64, f64),
    thickness_scale: f64,
    opacity: f64,
}

const fn band(paint: &'static str, sweep: (f64, f64), thickness_scale: f64, opacity: f64) -> Band {
    Band {
        paint,
        sweep,
        thickness_scale,
        opacity,
    }
}

/// Gradients, arcs and ring paint of one variant. Paint names are the
/// definition ids; `gradients` maps them to token names.
struct VariantPlan {
    gradients: &'static [(&'static str, &'static str)],
    secondary: &'static [Band],
    primary: &'static [Band],
    ring: &'static str,
}

fn plan(variant: IconVariant) -> VariantPlan {
    match variant {
        IconVariant::Core => VariantPlan {
            gradients: &[
                ("redArc", "redArcGradient"),
                ("blueArc", "blueArcGradient"),
                ("chromeCore", "chromeRingGradient"),
            ],
            secondary: CORE_SECONDARY,
            primary: CORE_PRIMARY,
            ring: "chromeCore",
        },
        IconVariant::Energy => VariantPlan {
            gradients: &[
                ("redArc", "redArcGradientStrong"),
                ("chromeCore", "chromeRingGradient"),
            ],
            secondary: &[],
            primary: ENERGY_PRIMARY,
            ring: "chromeCore",
        },
        IconVariant::Trust => VariantPlan {
            gradients: &[
                ("blueArc", "blueArcGradientStrong"),
                ("chromeCore", "chromeRingGradient"),
            ],
            secondary: TRUST_SECONDARY,
            primary: &[],
            ring: "chromeCore",
        },
        IconVariant::Premium => VariantPlan {
            gradients: &[
                ("goldArc", "goldArcGradient"),
                ("chromeCore", "chromeRingGradientWarm"),
            ],
            secondary: &[],
            primary: PREMIUM_PRIMARY,
            ring: "chromeCore",
        },
        IconVariant::MonochromeWhite => VariantPlan {
            gradients: &[("monoGrad", "monoWhiteGradient")],
            secondary: &[],
            primary: MONO_PRIMARY,
            ring: "monoGrad",
        },
        IconVariant::MonochromeDark => VariantPlan {
            gradients: &[("monoGrad", "monoDarkGradient")],
            secondary: &[],
            primary: MONO_PRIMARY,
            ring: "monoGrad",
        },
    }
}

const CORE_SECONDARY: &[Band] = &[band("blueArc", BACK_SWEEP, 1.0, 0.9)];
const CORE_PRIMARY: &[Band] = &[band("redArc", FRONT_SWEEP, 1.0, 0.92)];
const ENERGY_PRIMARY: &[Band] = &[
    band("redArc", FRONT_SWEEP, 1.0, 0.95),
    band("redArc", BACK_SWEEP, TRAILING_THICKNESS, 0.65),
];
const TRUST_SECONDARY: &[Band] = &[
    band("blueArc", FRONT_SWEEP, 1.0, 0.85),
    band("blueArc", BACK_SWEEP, 1.0, 0.7),
];
const PREMIUM_PRIMARY: &[Band] = &[
    band("goldArc", FRONT_SWEEP, 1.0, 0.92),
    band("goldArc", BACK_SWEEP, TRAILING_THICKNESS, 0.65),
];
const MONO_PRIMARY: &[Band] = &[
    band("monoGrad", FRONT_SWEEP, 1.0, 0.9),
    band("monoGrad", BACK_SWEEP, TRAILING_THICKNESS, 0.65),
];

// ============================================================================
// Composer
// ============================================================================

impl Composer<'_> {
    /// Renders the mark of `variant` at `size` units square.
    ///
    /// Particles are drawn from an [`Lcg`] seeded with the composer's
    /// particle seed, so repeated calls produce identical documents.
    pub fn icon(&self, variant: IconVariant, size: f64, glow: bool) -> Document {
        let mut random = Lcg::new(self.particle_seed);
        self.icon_with_random(variant, size, glow, &mut random)
    }

    /// Like [`icon`](Self::icon) but draws particles from `random`.
    pub fn icon_with_random(
        &self,
        variant: IconVariant,
        size: f64,
        glow: bool,
        random: &mut dyn RandomSource,
    ) -> Document {
        let tokens = self.tokens();
        let geometry = &tokens.icon_system.geometry;
        let variant_tokens = tokens.icon_system.variants.get(variant.key());
        let frame = IconFrame::new(geometry, size);
        let plan = plan(variant);
        let mut doc = Document::square(size);

        let paints: Vec<(&str, Option<Paint>)> = plan
            .gradients
            .iter()
            .map(|&(id, token)| (id, self.gradient(&mut doc, token, id)))
            .collect();
        let paint = |id: &str| {
            paints
                .iter()
                .find(|(name, _)| *name == id)
                .and_then(|(_, paint)| paint.clone())
        };

        let mut halos = Vec::new();
        if glow {
            let outer = variant_tokens
                .and_then(|v| v.glow.as_ref())
                .map(|g| g.outer.as_slice())
                .unwrap_or_default();
            for (name, spec) in outer {
                let spec = spec.scaled(size);
                let color = self.color(&spec.color);
                let filter_id = format!("glow_{name}");
                doc.push_definition(glow_filter(&filter_id, &color, spec.blur_px, spec.opacity));
                halos.push(
                    RenderLayer::new(
                        LayerRole::GlowHalo,
                        Shape::Ellipse {
                            center: frame.center,
                            rx: frame.outer_rx * HALO_GROWTH,
                            ry: frame.outer_ry * HALO_GROWTH,
                        },
                    )
                    .fill(Paint::Color(color))
                    .opacity(spec.opacity * HALO_OPACITY)
                    .filter(filter_id)
                    .transform(frame.rotate()),
                );
            }
        }

        let shadow = &geometry.shadow;
        if shadow.enabled {
            doc.push_definition(drop_shadow_filter(
                SHADOW_FILTER,
                scale_to_size(shadow.offset.x, size),
                scale_to_size(shadow.offset.y, size),
                scale_to_size(shadow.blur_px, size),
                &self.color(&shadow.color),
                shadow.opacity,
            ));
        }
        let highlight = &geometry.specular.top_highlight;
        doc.push_definition(gaussian_blur_filter(
            SPECULAR_FILTER,
            scale_to_size(highlight.blur_px, size),
        ));

        doc.layers.extend(halos);

        if shadow.enabled {
            doc.push_layer(
                RenderLayer::new(
                    LayerRole::Shadow,
                    Shape::Ellipse {
                        center: frame.center,
                        rx: frame.outer_rx,
                        ry: frame.outer_ry,
                    },
                )
                .fill(self.color_paint("graphiteBackground"))
                .opacity(SHADOW_OPACITY)
                .filter(SHADOW_FILTER)
                .transform(frame.rotate()),
            );
        }

        self.push_bands(&mut doc, &frame, LayerRole::SecondaryArc, plan.secondary, &paint);

        match paint(plan.ring) {
            Some(ring) => doc.push_layer(
                RenderLayer::new(LayerRole::Ring, frame.ring_shape())
                    .stroke(Stroke::new(ring, frame.ring_thickness))
                    .opacity(RING_OPACITY)
                    .transform(frame.rotate()),
            ),
            None => tracing::debug!(variant = variant.key(), "ring paint missing"),
        }

        self.push_bands(&mut doc, &frame, LayerRole::PrimaryArc, plan.primary, &paint);

        let polar = highlight.position_polar;
        let (sin, cos) = polar.angle_deg.to_radians().sin_cos();
        let distance = polar.radius_ratio * size / 2.0;
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Specular,
                Shape::Circle {
                    center: Point::new(frame.center.x + distance * cos, frame.center.y + distance * sin),
                    r: highlight.size_ratio * size / 2.0,
                },
            )
            .fill(Paint::color("white"))
            .opacity(highlight.opacity)
            .filter(SPECULAR_FILTER),
        );

        let rim = &geometry.specular.inner_rim_highlight;
        if rim.enabled {
            let center = Point::new(frame.center.x, frame.center.y - rim.offset_ratio * size);
            doc.push_layer(
                RenderLayer::new(
                    LayerRole::InnerRim,
                    Shape::Ellipse {
                        center,
                        rx: frame.core_rx * RIM_INSET,
                        ry: frame.core_ry * RIM_INSET,
                    },
                )
                .stroke(Stroke::new(
                    self.color_paint("silverHighlight"),
                    scale_to_size(RIM_WIDTH_AT_1024, size),
                ))
                .opacity(rim.opacity)
                .filter(SPECULAR_FILTER)
                .transform(TransformOp::Rotate {
                    angle: frame.core_rotation,
                    center,
                }),
            );
        }

        let specks = variant_tokens
            .and_then(|v| v.particle_specks.as_ref())
            .filter(|specks| specks.enabled);
        if let (IconVariant::Core, Some(specks)) = (variant, specks) {
            let count = (specks.count_per_1024px * size / 1024.0).floor().max(0.0) as usize;
            for _ in 0..count {
                let angle = random.uniform(0.0, 360.0);
                let radius = random.uniform(frame.outer_rx * 0.6, frame.outer_rx * 1.3);
                let speck_size = scale_to_size(random.uniform(specks.size_px[0], specks.size_px[1]), size);
                let opacity = random.uniform(specks.opacity[0], specks.opacity[1]);
                let (sin, cos) = angle.to_radians().sin_cos();

                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Particle,
                        Shape::Circle {
                            center: Point::new(
                                frame.center.x + radius * cos,
                                frame.center.y + radius * sin,
                            ),
                            r: speck_size,
                        },
                    )
                    .fill(Paint::color("white"))
                    .opacity(opacity),
                );
            }
        }

        doc
    }

    fn push_bands(
        &self,
        doc: &mut Document,
        frame: &IconFrame,
        role: LayerRole,
        bands: &[Band],
        paint: &dyn Fn(&str) -> Option<Paint>,
    ) {
        for band in bands {
            let Some(fill) = paint(band.paint) else {
                continue;
            };
            let outline = frame
                .arc(band.sweep, band.thickness_scale)
                .outline(self.arc_steps);
            doc.push_layer(
                RenderLayer::new(role, Shape::Polygon { points: outline })
                    .fill(fill)
                    .opacity(band.opacity),
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::TokenResolver;
    use crate::tokens::DesignTokens;

    const TOKENS: &str = r##"{
        "colorSystem": {
            "graphiteBackground": { "hex": "#050405" },
            "silverHighlight": { "hex": "#EFF0F3" }
        },
        "gradientSystem": { "gradients": [
            { "name": "redArcGradient", "type": "linear", "angle": 20, "stops": [] },
            { "name": "blueArcGradient", "type": "linear", "stops": [] },
            { "name": "chromeRingGradient", "type": "linear", "stops": [] },
            { "name": "redArcGradientStrong", "type": "linear", "stops": [] },
            { "name": "monoDarkGradient", "type": "linear", "stops": [] }
        ] },
        "iconSystem": { "variants": {
            "core": {
                "glow": { "outer": {
                    "red": { "color": "#FF2436", "blurPx": 64, "opacity": 0.5 },
                    "blue": { "color": "#3CAAFF", "blurPx": 48, "opacity": 0.4 }
                } },
                "particleSpecks": { "enabled": true, "countPer1024px": 20,
                                    "sizePx": [1, 3], "opacity": [0.2, 0.6] }
            },
            "energy": { "particleSpecks": { "enabled": true, "countPer1024px": 20 } }
        } }
    }"##;

    fn resolver() -> TokenResolver {
        TokenResolver::new(DesignTokens::from_json(TOKENS).unwrap())
    }

    #[test]
    fn core_template_order() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).icon(IconVariant::Core, 1024.0, true);
        let roles = doc.roles();

        assert_eq!(
            &roles[..8],
            [
                LayerRole::GlowHalo,
                LayerRole::GlowHalo,
                LayerRole::Shadow,
                LayerRole::SecondaryArc,
                LayerRole::Ring,
                LayerRole::PrimaryArc,
                LayerRole::Specular,
                LayerRole::InnerRim,
            ]
        );
        assert_eq!(doc.layers_with_role(LayerRole::Particle).count(), 20);
    }

    #[test]
    fn halos_follow_glow_order_and_scale() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).icon(IconVariant::Core, 256.0, true);

        let filters: Vec<_> = doc
            .layers_with_role(LayerRole::GlowHalo)
            .map(|l| l.filter.clone().unwrap())
            .collect();
        assert_eq!(filters, ["glow_red", "glow_blue"]);

        let halo = doc.layers_with_role(LayerRole::GlowHalo).next().unwrap();
        assert!((halo.opacity - 0.3).abs() < 1e-12);
        let Some(crate::document::Definition::Filter { effects, .. }) = doc.definition("glow_red")
        else {
            panic!("missing glow filter");
        };
        assert_eq!(
            effects[0],
            crate::document::FilterEffect::DropShadow {
                dx: 0.0,
                dy: 0.0,
                std_deviation: 8.0,
                color: "#FF2436".into(),
                opacity: 0.5,
            }
        );
    }

    #[test]
    fn glow_disabled_drops_halos() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).icon(IconVariant::Core, 1024.0, false);
        assert_eq!(doc.layers_with_role(LayerRole::GlowHalo).count(), 0);
        assert!(doc.definition("glow_red").is_none());
    }

    #[test]
    fn energy_draws_two_primary_bands() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).icon(IconVariant::Energy, 512.0, true);

        let bands: Vec<_> = doc.layers_with_role(LayerRole::PrimaryArc).collect();
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].opacity, 0.95);
        assert_eq!(bands[1].opacity, 0.65);
        assert_eq!(doc.layers_with_role(LayerRole::SecondaryArc).count(), 0);
        // Particles belong to the core mark only.
        assert_eq!(doc.layers_with_role(LayerRole::Particle).count(), 0);
    }

    #[test]
    fn missing_gradient_omits_painted_layers() {
        let resolver = resolver();
        // Trust needs blueArcGradientStrong, which is not defined.
        let doc = Composer::new(&resolver).icon(IconVariant::Trust, 512.0, true);

        assert_eq!(doc.layers_with_role(LayerRole::SecondaryArc).count(), 0);
        assert_eq!(doc.layers_with_role(LayerRole::Ring).count(), 1);
        assert_eq!(doc.layers_with_role(LayerRole::Specular).count(), 1);
    }

    #[test]
    fn particles_are_deterministic() {
        let resolver = resolver();
        let composer = Composer::new(&resolver);
        let a = composer.icon(IconVariant::Core, 1024.0, true);
        let b = composer.icon(IconVariant::Core, 1024.0, true);
        assert_eq!(a, b);

        let reseeded = composer.with_particle_seed(42).icon(IconVariant::Core, 1024.0, true);
        assert_ne!(a, reseeded);
    }

    #[test]
    fn injected_random_source_drives_particles() {
        struct Constant;
        impl RandomSource for Constant {
            fn next_f64(&mut self) -> f64 {
                0.0
            }
        }

        let resolver = resolver();
        let doc = Composer::new(&resolver).icon_with_random(
            IconVariant::Core,
            1024.0,
            false,
            &mut Constant,
        );
        let speck = doc.layers_with_role(LayerRole::Particle).next().unwrap();
        let Shape::Circle { center, r } = speck.shape else {
            panic!("particle should be a circle");
        };
        let frame = IconFrame::new(&resolver.tokens().icon_system.geometry, 1024.0);
        assert!((center.x - (512.0 + frame.outer_rx * 0.6)).abs() < 1e-9);
        assert!((center.y - 512.0).abs() < 1e-9);
        assert_eq!(r, 1.0);
        assert_eq!(speck.opacity, 0.2);
    }

    #[test]
    fn small_sizes_scale_filters() {
        let resolver = resolver();
        let doc = Composer::new(&resolver).icon(IconVariant::MonochromeDark, 32.0, false);

        let Some(crate::document::Definition::Filter { effects, .. }) = doc.definition(SPECULAR_FILTER)
        else {
            panic!("missing specular blur");
        };
        assert_eq!(
            effects[0],
            crate::document::FilterEffect::GaussianBlur {
                std_deviation: 24.0 * 32.0 / 1024.0 / 2.0
            }
        );
        assert_eq!(doc.layers_with_role(LayerRole::GlowHalo).count(), 0);
    }
}
