//! Rotated-ellipse math and tapered arc outlines.
//!
//! Angles are in degrees throughout. Ellipse parameters follow the usual
//! parametric form `(rx cos t, ry sin t)` rotated by `rotation_deg` about the
//! center, with the y axis pointing down as in SVG user space.

use serde::{Deserialize, Serialize};

/// Reference sample count for arc outlines.
pub const DEFAULT_ARC_STEPS: u32 = 80;

/// Derivatives shorter than this are treated as degenerate.
const DEGENERATE_LENGTH: f64 = 1e-9;

/// Normal used when the ellipse derivative vanishes (zero radii).
const FALLBACK_NORMAL: Point = Point { x: 0.0, y: 1.0 };

// ============================================================================
// Point
// ============================================================================

/// A point (or direction) in document user space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `self + direction * distance`.
    pub fn offset(self, direction: Point, distance: f64) -> Self {
        Self::new(self.x + direction.x * distance, self.y + direction.y * distance)
    }

    /// Uniformly scales both coordinates about the origin.
    pub fn scaled(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// ============================================================================
// Ellipse primitives
// ============================================================================

/// Point on a rotated ellipse at parameter `t_deg`.
pub fn ellipse_point(center: Point, rx: f64, ry: f64, rotation_deg: f64, t_deg: f64) -> Point {
    let (sin_t, cos_t) = t_deg.to_radians().sin_cos();
    let (sin_r, cos_r) = rotation_deg.to_radians().sin_cos();
    let x = rx * cos_t;
    let y = ry * sin_t;
    Point::new(
        x * cos_r - y * sin_r + center.x,
        x * sin_r + y * cos_r + center.y,
    )
}

/// Unit outward normal of a rotated ellipse at parameter `t_deg`.
///
/// Falls back to `(0, 1)` when the derivative is degenerate, which happens
/// only when both radii are (close to) zero.
pub fn ellipse_normal(rx: f64, ry: f64, rotation_deg: f64, t_deg: f64) -> Point {
    let (sin_t, cos_t) = t_deg.to_radians().sin_cos();
    let (sin_r, cos_r) = rotation_deg.to_radians().sin_cos();
    let dx = -rx * sin_t;
    let dy = ry * cos_t;
    let tx = dx * cos_r - dy * sin_r;
    let ty = dx * sin_r + dy * cos_r;

    let length = tx.hypot(ty);
    if length < DEGENERATE_LENGTH {
        return FALLBACK_NORMAL;
    }
    // The tangent turned a quarter clockwise points away from the center.
    Point::new(ty / length, -tx / length)
}

// ============================================================================
// ArcGeometry
// ============================================================================

/// One tapered elliptical arc, fully determined by its parameters.
///
/// `end_angle_deg` may exceed 360 to express wrap-around. Taper ratios are
/// fractions of `max_thickness` applied at the start and end of the arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub rotation_deg: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub max_thickness: f64,
    pub start_taper_ratio: f64,
    pub end_taper_ratio: f64,
    pub taper_exponent: f64,
}

impl ArcGeometry {
    /// Thickness multiplier at normalized progress `s` (0..=1).
    ///
    /// The ease is asymmetric: with an exponent above 1 the arc keeps close
    /// to its start thickness for longer and narrows quickly near the end.
    pub fn thickness_factor(&self, s: f64) -> f64 {
        let eased = s.powf(self.taper_exponent);
        self.start_taper_ratio * (1.0 - eased) + self.end_taper_ratio * eased
    }

    /// Closed outline of the tapered band.
    ///
    /// Samples `steps + 1` evenly spaced parameters and returns the outer
    /// boundary in order followed by the inner boundary reversed, so the
    /// result always has `2 * (steps + 1)` vertices. `steps == 0` is treated
    /// as 1.
    pub fn outline(&self, steps: u32) -> Vec<Point> {
        let steps = steps.max(1);
        let samples = steps as usize + 1;
        let mut outer = Vec::with_capacity(samples * 2);
        let mut inner = Vec::with_capacity(samples);

        for i in 0..=steps {
            let s = f64::from(i) / f64::from(steps);
            let t = self.start_angle_deg + s * (self.end_angle_deg - self.start_angle_deg);
            let point = ellipse_point(
                self.center,
                self.radius_x,
                self.radius_y,
                self.rotation_deg,
                t,
            );
            let normal = ellipse_normal(self.radius_x, self.radius_y, self.rotation_deg, t);
            let half_width = self.max_thickness * self.thickness_factor(s) / 2.0;

            outer.push(point.offset(normal, half_width));
            inner.push(point.offset(normal, -half_width));
        }

        outer.extend(inner.into_iter().rev());
        outer
    }

    /// Scales every length by `k`. Angles and ratios are unchanged.
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            center: self.center.scaled(k),
            radius_x: self.radius_x * k,
            radius_y: self.radius_y * k,
            max_thickness: self.max_thickness * k,
            ..*self
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
