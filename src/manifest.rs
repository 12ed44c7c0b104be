//! Text outputs of a batch: the PWA web manifest and the brand usage notes.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resolver::TokenResolver;

/// One icon entry of a [`WebManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl ManifestIcon {
    fn png(size: u32) -> Self {
        Self {
            src: format!("/favicon/android-chrome-{size}x{size}.png"),
            sizes: format!("{size}x{size}"),
            mime_type: "image/png".into(),
        }
    }
}

/// `site.webmanifest` contents. Field names serialize in snake case, as
/// browsers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

impl Default for WebManifest {
    fn default() -> Self {
        Self {
            name: "iTrader.im".into(),
            short_name: "iTrader".into(),
            description: "BUY \u{2022} SELL \u{2022} UPGRADE - Isle of Man Marketplace".into(),
            start_url: "/".into(),
            display: "standalone".into(),
            background_color: "#050405".into(),
            theme_color: "#E22229".into(),
            icons: vec![
                ManifestIcon::png(192),
                ManifestIcon::png(512),
                ManifestIcon {
                    src: "/favicon/icon.svg".into(),
                    sizes: "any".into(),
                    mime_type: "image/svg+xml".into(),
                },
            ],
        }
    }
}

impl WebManifest {
    /// Pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Plain-text brand usage guidelines quoting the primary palette.
pub fn usage_guidelines(resolver: &TokenResolver) -> String {
    let title = "iTrader.im Brand Usage Guidelines";
    let mut text = format!("{title}\n{}\n\n", "=".repeat(40));
    let rules = [
        "Always use official logo files from this package.",
        "Maintain minimum clear space around the logo.",
        "Do not alter colors, proportions, or effects.",
        "Use dark variants on dark backgrounds, light variants on light backgrounds.",
        "The vortex icon may be used standalone at sizes >= 32px.",
    ];
    for (i, rule) in rules.iter().enumerate() {
        let _ = writeln!(text, "{}. {rule}", i + 1);
    }
    let _ = writeln!(
        text,
        "6. Primary brand colors: Red {}, Blue {}, Gold {}",
        resolver.resolve_color("neonRed"),
        resolver.resolve_color("electricBlue"),
        resolver.resolve_color("premiumGold"),
    );
    text.push_str("7. For questions, contact the brand team.\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::DesignTokens;

    #[test]
    fn icons_point_at_favicon_outputs() {
        let manifest = WebManifest::default();
        let srcs: Vec<_> = manifest.icons.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(
            srcs,
            [
                "/favicon/android-chrome-192x192.png",
                "/favicon/android-chrome-512x512.png",
                "/favicon/icon.svg",
            ]
        );
        assert_eq!(manifest.icons[2].sizes, "any");
    }

    #[test]
    fn serializes_snake_case_keys() {
        let json = WebManifest::default().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["short_name"], "iTrader");
        assert_eq!(value["theme_color"], "#E22229");
        assert_eq!(value["background_color"], "#050405");
        assert_eq!(value["icons"][0]["type"], "image/png");
        assert!(value.get("shortName").is_none());
    }

    #[test]
    fn guidelines_quote_resolved_palette() {
        let resolver = TokenResolver::new(
            DesignTokens::from_json(r##"{ "colorSystem": { "neonRed": { "hex": "#E22229" } } }"##)
                .unwrap(),
        );
        let text = usage_guidelines(&resolver);

        assert!(text.starts_with("iTrader.im Brand Usage Guidelines\n====="));
        assert!(text.contains("6. Primary brand colors: Red #E22229, Blue #FFFFFF, Gold #FFFFFF\n"));
        assert!(text.ends_with("7. For questions, contact the brand team.\n"));
    }
}
