//! Layer composition for every brand asset.
//!
//! [`Composer`] turns resolved tokens into [`Document`]s. Each asset family
//! has its own template module:
//!
//! - [`icon`]: the vortex mark and its six variants
//! - [`logo`]: wordmark lockups, optionally embedding the mark
//! - [`badge`]: token-driven and payment badges
//! - [`placeholder`]: listing, avatar, dealer and empty-state placeholders
//! - [`app_icon`]: rounded app-store containers
//! - [`decorative`]: streaks, noise, spinners, animated loader, pinned tab
//! - [`banner`]: category banners and social cards
//! - [`texture`]: carbon-fiber weave and glass grain backgrounds
//!
//! Templates are fixed: a variant decides which layers exist and with what
//! parameters, never their relative order. A gradient the token document
//! does not define removes the layers painted with it and nothing else.

pub mod app_icon;
pub mod badge;
pub mod banner;
pub mod decorative;
pub mod icon;
pub mod logo;
pub mod placeholder;
pub mod texture;

use crate::document::{Document, Paint};
use crate::effects::gradient_definition;
use crate::geometry::DEFAULT_ARC_STEPS;
use crate::resolver::TokenResolver;
use crate::tokens::DesignTokens;

/// Seed of the default particle stream.
pub const DEFAULT_PARTICLE_SEED: u32 = 1337;

/// Font stack shared by every text layer.
pub(crate) const BRAND_FONT: &str = "'Montserrat', 'Eurostile', Arial, sans-serif";

/// Tagline used by logos, banners and social cards.
pub(crate) const TAGLINE: &str = "BUY \u{2022} SELL \u{2022} UPGRADE";

// ============================================================================
// Random source
// ============================================================================

/// Uniform random numbers in `[0, 1)`.
///
/// Implementations must be deterministic for a given starting state:
/// particle layouts are compared bit for bit across runs.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

/// 32-bit linear congruential generator (Numerical Recipes constants).
///
/// Portable and trivially reproducible in any language, which is all the
/// particle scatter needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(DEFAULT_PARTICLE_SEED)
    }
}

impl RandomSource for Lcg {
    fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        f64::from(self.state) / 4_294_967_296.0
    }
}

// ============================================================================
// Composer
// ============================================================================

/// Builds documents from a [`TokenResolver`].
///
/// The composer holds no per-render state; every method is a pure function
/// of the tokens, its settings and the arguments, so calls may run in any
/// order or in parallel.
///
/// # Example
///
/// ```
/// use brand_renderer::{Composer, DesignTokens, IconVariant, LayerRole, TokenResolver};
///
/// let resolver = TokenResolver::new(DesignTokens::default());
/// let composer = Composer::new(&resolver).with_arc_steps(40);
///
/// let doc = composer.icon(IconVariant::Trust, 256.0, false);
/// // No gradients are defined, so only unpainted layers remain.
/// assert_eq!(doc.layers_with_role(LayerRole::SecondaryArc).count(), 0);
/// assert_eq!(doc.layers_with_role(LayerRole::Specular).count(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    resolver: &'a TokenResolver,
    arc_steps: u32,
    particle_seed: u32,
}

impl<'a> Composer<'a> {
    pub fn new(resolver: &'a TokenResolver) -> Self {
        Self {
            resolver,
            arc_steps: DEFAULT_ARC_STEPS,
            particle_seed: DEFAULT_PARTICLE_SEED,
        }
    }

    /// Sets the number of samples per arc outline.
    pub fn with_arc_steps(mut self, steps: u32) -> Self {
        self.arc_steps = steps;
        self
    }

    /// Sets the seed of the default [`Lcg`] particle stream.
    pub fn with_particle_seed(mut self, seed: u32) -> Self {
        self.particle_seed = seed;
        self
    }

    pub fn resolver(&self) -> &'a TokenResolver {
        self.resolver
    }

    pub fn arc_steps(&self) -> u32 {
        self.arc_steps
    }

    pub fn particle_seed(&self) -> u32 {
        self.particle_seed
    }

    fn tokens(&self) -> &'a DesignTokens {
        self.resolver.tokens()
    }

    fn color(&self, name: &str) -> String {
        self.resolver.resolve_color(name)
    }

    fn color_paint(&self, name: &str) -> Paint {
        Paint::Color(self.color(name))
    }

    /// Defines gradient `token` under `id` in `doc` and returns a paint
    /// referencing it.
    ///
    /// Returns `None` when the token document has no usable gradient of that
    /// name; the caller then drops the layers that would use it.
    fn gradient(&self, doc: &mut Document, token: &str, id: &str) -> Option<Paint> {
        if doc.definition(id).is_none() {
            let Some(spec) = self.resolver.resolve_gradient(token) else {
                tracing::debug!(gradient = token, "gradient not defined, omitting its layers");
                return None;
            };
            doc.push_definition(gradient_definition(id, spec, self.resolver)?);
        }
        Some(Paint::reference(id))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lcg_matches_reference_sequence() {
        let mut rng = Lcg::new(0);
        assert_eq!(rng.next_f64(), 1_013_904_223.0 / 4_294_967_296.0);
        // 1013904223 * 1664525 + 1013904223 mod 2^32
        assert_eq!(rng.next_f64(), 1_196_435_762.0 / 4_294_967_296.0);
    }

    #[test]
    fn lcg_stays_in_unit_interval() {
        let mut rng = Lcg::default();
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn uniform_respects_bounds() {
        let mut rng = Lcg::new(7);
        for _ in 0..1_000 {
            let v = rng.uniform(0.6, 1.3);
            assert!((0.6..1.3).contains(&v));
        }
    }

    #[test]
    fn gradient_is_defined_once() {
        let tokens = DesignTokens::from_json(
            r##"{ "gradientSystem": { "gradients": [
                { "name": "redArcGradient", "type": "linear", "stops": [] }
            ] } }"##,
        )
        .unwrap();
        let resolver = TokenResolver::new(tokens);
        let composer = Composer::new(&resolver);
        let mut doc = Document::square(10.0);

        assert!(composer.gradient(&mut doc, "redArcGradient", "redArc").is_some());
        assert!(composer.gradient(&mut doc, "redArcGradient", "redArc").is_some());
        assert!(composer.gradient(&mut doc, "missing", "other").is_none());
        assert_eq!(doc.definitions.len(), 1);
    }
}
