//! Gradient and filter definitions.
//!
//! Blur radii, offsets and spreads in the token document are expressed at a
//! 1024-unit reference size. Everything here that takes a blur expects the
//! caller to have rescaled it with [`scale_to_size`] (or
//! [`GlowSpec::scaled`]) first; the builders then halve it into an SVG
//! standard deviation.

use crate::document::{ColorStop, Definition, FilterEffect, FilterRegion};
use crate::geometry::Point;
use crate::resolver::TokenResolver;
use crate::tokens::{GlowSpec, GradientKind, GradientSpec};

/// Edge length at which token blur and offset values are expressed.
pub const REFERENCE_SIZE: f64 = 1024.0;

/// Rescales a value given at [`REFERENCE_SIZE`] to `size`.
pub fn scale_to_size(value_at_1024: f64, size: f64) -> f64 {
    value_at_1024 * size / REFERENCE_SIZE
}

impl GlowSpec {
    /// Returns this preset with blur and spread rescaled to `size`.
    pub fn scaled(&self, size: f64) -> Self {
        Self {
            blur_px: scale_to_size(self.blur_px, size),
            spread_px: scale_to_size(self.spread_px, size),
            ..self.clone()
        }
    }
}

// ============================================================================
// Gradients
// ============================================================================

/// Builds the definition matching the gradient's type.
///
/// Returns `None` for gradient types this renderer does not draw, which
/// callers treat the same as a missing gradient.
pub fn gradient_definition(
    id: &str,
    spec: &GradientSpec,
    resolver: &TokenResolver,
) -> Option<Definition> {
    match spec.kind {
        GradientKind::Linear => Some(linear_gradient(id, spec, resolver)),
        GradientKind::Radial => Some(radial_gradient(id, spec, resolver)),
        GradientKind::Unsupported => {
            tracing::debug!(gradient = %spec.name, "unsupported gradient type");
            None
        }
    }
}

/// Linear gradient along `angle` (degrees, default 0).
///
/// The endpoints sit on a circle of radius 50% around the box center at
/// `angle + 180` and `angle`.
pub fn linear_gradient(id: &str, spec: &GradientSpec, resolver: &TokenResolver) -> Definition {
    let (sin, cos) = spec.angle.unwrap_or(0.0).to_radians().sin_cos();
    Definition::LinearGradient {
        id: id.to_string(),
        start: Point::new(50.0 - 50.0 * cos, 50.0 - 50.0 * sin),
        end: Point::new(50.0 + 50.0 * cos, 50.0 + 50.0 * sin),
        stops: color_stops(spec, resolver),
    }
}

/// Radial gradient centered in the bounding box.
pub fn radial_gradient(id: &str, spec: &GradientSpec, resolver: &TokenResolver) -> Definition {
    Definition::RadialGradient {
        id: id.to_string(),
        center: Point::new(50.0, 50.0),
        radius: 50.0,
        stops: color_stops(spec, resolver),
    }
}

fn color_stops(spec: &GradientSpec, resolver: &TokenResolver) -> Vec<ColorStop> {
    spec.stops
        .iter()
        .map(|stop| ColorStop {
            offset: stop.position,
            color: resolver.resolve_color(&stop.color),
            opacity: stop.opacity.unwrap_or(1.0),
        })
        .collect()
}

// ============================================================================
// Filters
// ============================================================================

/// Soft colored halo: an unshifted drop shadow.
pub fn glow_filter(id: &str, color: &str, blur: f64, opacity: f64) -> Definition {
    drop_shadow_filter(id, 0.0, 0.0, blur, color, opacity)
}

pub fn drop_shadow_filter(
    id: &str,
    dx: f64,
    dy: f64,
    blur: f64,
    color: &str,
    opacity: f64,
) -> Definition {
    Definition::Filter {
        id: id.to_string(),
        region: FilterRegion::default(),
        effects: vec![FilterEffect::DropShadow {
            dx,
            dy,
            std_deviation: blur / 2.0,
            color: color.to_string(),
            opacity,
        }],
    }
}

pub fn gaussian_blur_filter(id: &str, blur: f64) -> Definition {
    Definition::Filter {
        id: id.to_string(),
        region: FilterRegion::default(),
        effects: vec![FilterEffect::GaussianBlur {
            std_deviation: blur / 2.0,
        }],
    }
}

/// Grey, tileable fractal noise.
pub fn noise_filter(id: &str, base_frequency: f64, octaves: u32) -> Definition {
    Definition::Filter {
        id: id.to_string(),
        region: FilterRegion::default(),
        effects: vec![FilterEffect::FractalNoise {
            base_frequency,
            octaves,
        }],
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{DesignTokens, GradientStop};

    fn resolver() -> TokenResolver {
        TokenResolver::new(
            DesignTokens::from_json(r##"{ "colorSystem": { "neonRed": { "hex": "#E22229" } } }"##)
                .unwrap(),
        )
    }

    fn spec(kind: GradientKind, angle: Option<f64>) -> GradientSpec {
        GradientSpec {
            name: "test".into(),
            kind,
            angle,
            stops: vec![
                GradientStop {
                    position: 0.0,
                    color: "neonRed".into(),
                    opacity: None,
                },
                GradientStop {
                    position: 65.0,
                    color: "#3CAAFF".into(),
                    opacity: Some(0.4),
                },
            ],
        }
    }

    fn std_deviation(definition: &Definition) -> f64 {
        match definition {
            Definition::Filter { effects, .. } => match effects[0] {
                FilterEffect::DropShadow { std_deviation, .. }
                | FilterEffect::GaussianBlur { std_deviation } => std_deviation,
                FilterEffect::FractalNoise { .. } => panic!("no blur"),
            },
            _ => panic!("not a filter"),
        }
    }

    #[test]
    fn linear_endpoints_follow_angle() {
        let Definition::LinearGradient { start, end, .. } =
            linear_gradient("g", &spec(GradientKind::Linear, Some(90.0)), &resolver())
        else {
            panic!("expected linear gradient");
        };
        assert!((start.x - 50.0).abs() < 1e-9 && start.y.abs() < 1e-9);
        assert!((end.x - 50.0).abs() < 1e-9 && (end.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn missing_angle_runs_left_to_right() {
        let Definition::LinearGradient { start, end, .. } =
            linear_gradient("g", &spec(GradientKind::Linear, None), &resolver())
        else {
            panic!("expected linear gradient");
        };
        assert_eq!((start.x, start.y), (0.0, 50.0));
        assert_eq!((end.x, end.y), (100.0, 50.0));
    }

    #[test]
    fn stops_pass_through_with_resolved_colors() {
        let Definition::RadialGradient { stops, radius, .. } =
            radial_gradient("g", &spec(GradientKind::Radial, None), &resolver())
        else {
            panic!("expected radial gradient");
        };
        assert_eq!(radius, 50.0);
        assert_eq!(stops[0].color, "#E22229");
        assert_eq!(stops[0].opacity, 1.0);
        assert_eq!(stops[1].offset, 65.0);
        assert_eq!(stops[1].opacity, 0.4);
    }

    #[test]
    fn unsupported_gradient_has_no_definition() {
        let spec = spec(GradientKind::Unsupported, None);
        assert!(gradient_definition("g", &spec, &resolver()).is_none());
    }

    #[test]
    fn blur_is_linear_in_size() {
        let at_1024 = std_deviation(&glow_filter("g", "#FFF", scale_to_size(60.0, 1024.0), 0.5));
        for size in [16.0, 32.0, 180.0, 512.0] {
            let blur = std_deviation(&gaussian_blur_filter("b", scale_to_size(60.0, size)));
            assert!((blur - at_1024 * size / 1024.0).abs() < 1e-12);
        }
    }

    #[test]
    fn glow_spec_scales_blur_and_spread() {
        let glow = GlowSpec {
            color: "#FF2436".into(),
            blur_px: 64.0,
            spread_px: 8.0,
            opacity: 0.5,
        };
        let small = glow.scaled(32.0);
        assert_eq!(small.blur_px, 2.0);
        assert_eq!(small.spread_px, 0.25);
        assert_eq!(small.opacity, 0.5);
    }

    #[test]
    fn drop_shadow_keeps_offsets() {
        let Definition::Filter { effects, region, .. } =
            drop_shadow_filter("s", 0.0, 9.0, 24.0, "#000000", 0.45)
        else {
            panic!("expected filter");
        };
        assert_eq!(region, FilterRegion::default());
        assert_eq!(
            effects[0],
            FilterEffect::DropShadow {
                dx: 0.0,
                dy: 9.0,
                std_deviation: 12.0,
                color: "#000000".into(),
                opacity: 0.45,
            }
        );
    }
}
