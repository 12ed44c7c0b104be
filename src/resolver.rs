//! Symbolic name lookup over a [`DesignTokens`] document.

use crate::tokens::{DesignTokens, GlowSpec, GradientSpec};

/// Color returned for names the document does not define.
pub const FALLBACK_COLOR: &str = "#FFFFFF";

/// Resolves color, gradient and glow names against an immutable token
/// document.
///
/// The resolver owns its document and never mutates it, so one instance can
/// be shared by any number of composers.
///
/// # Example
///
/// ```
/// use brand_renderer::{DesignTokens, TokenResolver};
///
/// let tokens = DesignTokens::from_json(
///     r##"{ "colorSystem": { "neonRed": { "hex": "#E22229" } } }"##,
/// ).unwrap();
/// let resolver = TokenResolver::new(tokens);
///
/// assert_eq!(resolver.resolve_color("neonRed"), "#E22229");
/// assert_eq!(resolver.resolve_color("#101114"), "#101114");
/// assert_eq!(resolver.resolve_color("somethingNew"), "#FFFFFF");
/// assert!(resolver.resolve_gradient("doesNotExist").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    tokens: DesignTokens,
}

impl TokenResolver {
    pub fn new(tokens: DesignTokens) -> Self {
        Self { tokens }
    }

    /// The underlying document.
    pub fn tokens(&self) -> &DesignTokens {
        &self.tokens
    }

    /// Resolves a color name or literal to a hex string.
    ///
    /// Hex literals pass through unchanged. Unknown names resolve to
    /// [`FALLBACK_COLOR`]; this never fails.
    pub fn resolve_color(&self, name: &str) -> String {
        if name.starts_with('#') {
            return name.to_string();
        }
        match self.tokens.color_system.get(name).and_then(|entry| entry.hex()) {
            Some(hex) => hex.to_string(),
            None => {
                tracing::debug!(name, "unknown color token, using fallback");
                FALLBACK_COLOR.to_string()
            }
        }
    }

    /// Finds a gradient by name. The first definition with that name wins.
    pub fn resolve_gradient(&self, name: &str) -> Option<&GradientSpec> {
        self.tokens
            .gradient_system
            .gradients
            .iter()
            .find(|gradient| gradient.name == name)
    }

    /// Finds a glow preset by name.
    pub fn resolve_glow(&self, preset: &str) -> Option<&GlowSpec> {
        self.tokens.glow_system.get(preset)
    }
}

impl From<DesignTokens> for TokenResolver {
    fn from(tokens: DesignTokens) -> Self {
        Self::new(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> TokenResolver {
        let json = r##"{
            "colorSystem": {
                "neonRed": { "hex": "#E22229" },
                "usageNotes": { "text": "not a color" }
            },
            "gradientSystem": { "gradients": [
                { "name": "redArcGradient", "type": "linear", "angle": 20,
                  "stops": [{ "position": 0, "color": "#FF2436" }] },
                { "name": "redArcGradient", "type": "radial", "stops": [] }
            ] },
            "glowSystem": { "red": { "color": "#FF2436", "blurPx": 40, "opacity": 0.5 } }
        }"##;
        TokenResolver::new(DesignTokens::from_json(json).unwrap())
    }

    #[test]
    fn literal_colors_pass_through() {
        assert_eq!(resolver().resolve_color("#abcdef"), "#abcdef");
    }

    #[test]
    fn named_colors_resolve() {
        assert_eq!(resolver().resolve_color("neonRed"), "#E22229");
    }

    #[test]
    fn unknown_and_non_color_names_fall_back() {
        let resolver = resolver();
        for name in ["", "missing", "usageNotes", "  "] {
            assert_eq!(resolver.resolve_color(name), FALLBACK_COLOR);
        }
    }

    #[test]
    fn first_gradient_with_name_wins() {
        let resolver = resolver();
        let gradient = resolver.resolve_gradient("redArcGradient").unwrap();
        assert_eq!(gradient.angle, Some(20.0));
    }

    #[test]
    fn absent_names_are_none() {
        let resolver = resolver();
        assert!(resolver.resolve_gradient("doesNotExist").is_none());
        assert!(resolver.resolve_glow("doesNotExist").is_none());
        assert_eq!(resolver.resolve_glow("red").unwrap().blur_px, 40.0);
    }
}
