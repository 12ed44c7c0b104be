//! The closed set of assets this crate produces.
//!
//! Every variant family is an enum whose [`FromStr`] fails on unknown keys,
//! and [`Catalog::entries`] lists every file a full batch writes. Drivers
//! enumerate the catalog instead of keeping their own lists, and
//! [`Catalog::render`] is the only place catalog entries turn into composer
//! calls.

use std::fmt;
use std::str::FromStr;

use image::RgbaImage;

use crate::document::Document;
use crate::error::{RenderError, Result};
use crate::layer::texture::TEXTURE_SIZE;
use crate::layer::Composer;

// ============================================================================
// Variant keys
// ============================================================================

/// A closed, enumerable family of variants with stable string keys.
pub trait VariantKey: Copy + Sized + 'static {
    /// Human-readable family name used in error messages.
    const KIND: &'static str;

    /// Every member, in catalog order.
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    /// Looks up a member by key, failing with [`RenderError::UnknownVariant`].
    fn from_key(key: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.key() == key)
            .ok_or_else(|| RenderError::unknown(Self::KIND, key))
    }
}

/// Icon styles of the vortex mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    Core,
    Energy,
    Trust,
    Premium,
    MonochromeWhite,
    MonochromeDark,
}

impl VariantKey for IconVariant {
    const KIND: &'static str = "icon variant";
    const ALL: &'static [Self] = &[
        Self::Core,
        Self::Energy,
        Self::Trust,
        Self::Premium,
        Self::MonochromeWhite,
        Self::MonochromeDark,
    ];

    /// Key of the variant in `iconSystem.variants`.
    fn key(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Energy => "energy",
            Self::Trust => "trust",
            Self::Premium => "premium",
            Self::MonochromeWhite => "monochromeWhite",
            Self::MonochromeDark => "monochromeDark",
        }
    }
}

impl IconVariant {
    fn file_stem(self) -> &'static str {
        match self {
            Self::Core => "icon-core",
            Self::Energy => "icon-energy",
            Self::Trust => "icon-trust",
            Self::Premium => "icon-premium",
            Self::MonochromeWhite => "icon-monochrome-white",
            Self::MonochromeDark => "icon-monochrome-dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Dark,
    Light,
}

/// A wordmark lockup: theme plus whether the mark and tagline are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogoMode {
    pub theme: Theme,
    pub include_icon: bool,
    pub include_tagline: bool,
}

impl LogoMode {
    pub const fn new(theme: Theme, include_icon: bool, include_tagline: bool) -> Self {
        Self {
            theme,
            include_icon,
            include_tagline,
        }
    }

    pub fn is_dark(self) -> bool {
        self.theme == Theme::Dark
    }
}

impl VariantKey for LogoMode {
    const KIND: &'static str = "logo mode";
    const ALL: &'static [Self] = &[
        Self::new(Theme::Dark, true, true),
        Self::new(Theme::Dark, true, false),
        Self::new(Theme::Dark, false, true),
        Self::new(Theme::Dark, false, false),
        Self::new(Theme::Light, true, true),
        Self::new(Theme::Light, true, false),
        Self::new(Theme::Light, false, true),
        Self::new(Theme::Light, false, false),
    ];

    fn key(self) -> &'static str {
        match (self.theme, self.include_icon, self.include_tagline) {
            (Theme::Dark, true, true) => "dark-icon-tagline",
            (Theme::Dark, true, false) => "dark-icon",
            (Theme::Dark, false, true) => "dark-tagline",
            (Theme::Dark, false, false) => "dark",
            (Theme::Light, true, true) => "light-icon-tagline",
            (Theme::Light, true, false) => "light-icon",
            (Theme::Light, false, true) => "light-tagline",
            (Theme::Light, false, false) => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeKind {
    VerifiedDealer,
    Featured,
    Premium,
    PaymentStripe,
    PaymentSecure,
}

impl VariantKey for BadgeKind {
    const KIND: &'static str = "badge type";
    const ALL: &'static [Self] = &[
        Self::VerifiedDealer,
        Self::Featured,
        Self::Premium,
        Self::PaymentStripe,
        Self::PaymentSecure,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::VerifiedDealer => "verifiedDealer",
            Self::Featured => "featured",
            Self::Premium => "premium",
            Self::PaymentStripe => "stripe",
            Self::PaymentSecure => "secure",
        }
    }
}

impl BadgeKind {
    fn file_stem(self) -> &'static str {
        match self {
            Self::VerifiedDealer => "badge-verified-dealer",
            Self::Featured => "badge-featured",
            Self::Premium => "badge-premium",
            Self::PaymentStripe => "payment-stripe",
            Self::PaymentSecure => "payment-secure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderKind {
    Listing,
    Avatar,
    DealerLogo,
    NoListings,
    NoResults,
    NoMessages,
}

impl VariantKey for PlaceholderKind {
    const KIND: &'static str = "placeholder type";
    const ALL: &'static [Self] = &[
        Self::Listing,
        Self::Avatar,
        Self::DealerLogo,
        Self::NoListings,
        Self::NoResults,
        Self::NoMessages,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Avatar => "avatar",
            Self::DealerLogo => "dealer-logo",
            Self::NoListings => "empty-state-no-listings",
            Self::NoResults => "empty-state-no-results",
            Self::NoMessages => "empty-state-no-messages",
        }
    }
}

impl PlaceholderKind {
    fn file_stem(self) -> String {
        match self {
            Self::Listing | Self::Avatar | Self::DealerLogo => format!("placeholder-{}", self.key()),
            _ => self.key().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Vehicles,
    HifiAv,
    Watches,
    Luxury,
    Default,
}

impl VariantKey for CategoryKey {
    const KIND: &'static str = "category";
    const ALL: &'static [Self] = &[
        Self::Vehicles,
        Self::HifiAv,
        Self::Watches,
        Self::Luxury,
        Self::Default,
    ];

    /// Key in `categoryExpressions`.
    fn key(self) -> &'static str {
        match self {
            Self::Vehicles => "vehicles",
            Self::HifiAv => "hifiAv",
            Self::Watches => "watches",
            Self::Luxury => "luxury",
            Self::Default => "default",
        }
    }
}

impl CategoryKey {
    /// Banner caption.
    pub fn label(self) -> &'static str {
        match self {
            Self::Vehicles => "VEHICLES",
            Self::HifiAv => "HI-FI & AV",
            Self::Watches => "WATCHES",
            Self::Luxury => "LUXURY",
            Self::Default => "MARKETPLACE",
        }
    }

    fn file_stem(self) -> &'static str {
        match self {
            Self::Vehicles => "category-vehicles",
            Self::HifiAv => "category-hifi-av",
            Self::Watches => "category-watches",
            Self::Luxury => "category-luxury",
            Self::Default => "category-default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppIconVariant {
    VortexOnly,
    MonogramIt,
}

impl VariantKey for AppIconVariant {
    const KIND: &'static str = "app icon variant";
    const ALL: &'static [Self] = &[Self::VortexOnly, Self::MonogramIt];

    fn key(self) -> &'static str {
        match self {
            Self::VortexOnly => "vortexOnly",
            Self::MonogramIt => "monogramIT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpinnerPreset {
    Energy,
    Trust,
    Default,
}

impl VariantKey for SpinnerPreset {
    const KIND: &'static str = "spinner preset";
    const ALL: &'static [Self] = &[Self::Energy, Self::Trust, Self::Default];

    fn key(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::Trust => "trust",
            Self::Default => "default",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreakDirection {
    Horizontal,
    Vertical,
}

impl VariantKey for StreakDirection {
    const KIND: &'static str = "streak direction";
    const ALL: &'static [Self] = &[Self::Horizontal, Self::Vertical];

    fn key(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Open Graph / Twitter share images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialCard {
    Default,
    Listing,
    Categories,
    Twitter,
}

impl VariantKey for SocialCard {
    const KIND: &'static str = "social card";
    const ALL: &'static [Self] = &[Self::Default, Self::Listing, Self::Categories, Self::Twitter];

    fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Listing => "listing",
            Self::Categories => "categories",
            Self::Twitter => "twitter",
        }
    }
}

impl SocialCard {
    /// Pixel size of the card.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Twitter => (1200, 600),
            _ => (1200, 630),
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            Self::Default => "opengraph-image.png",
            Self::Listing => "opengraph-image-listing.png",
            Self::Categories => "opengraph-image-categories.png",
            Self::Twitter => "twitter-image.png",
        }
    }
}

macro_rules! impl_from_str {
    ($($ty:ty),* $(,)?) => {$(
        impl FromStr for $ty {
            type Err = RenderError;

            fn from_str(s: &str) -> Result<Self> {
                Self::from_key(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }
    )*};
}

impl_from_str!(
    IconVariant,
    LogoMode,
    BadgeKind,
    PlaceholderKind,
    CategoryKey,
    AppIconVariant,
    SpinnerPreset,
    StreakDirection,
    SocialCard,
);

// ============================================================================
// Assets
// ============================================================================

/// One renderable asset with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssetKind {
    Icon {
        variant: IconVariant,
        size: f64,
        glow: bool,
    },
    Logo {
        mode: LogoMode,
        width: f64,
        height: f64,
    },
    Badge(BadgeKind),
    Placeholder(PlaceholderKind),
    AppIcon(AppIconVariant),
    Streak(StreakDirection),
    NoiseTexture,
    Spinner(SpinnerPreset),
    AnimatedLogo,
    SafariPinnedTab,
    CategoryBanner {
        category: CategoryKey,
        width: f64,
        height: f64,
    },
    SocialCard(SocialCard),
    CarbonFiber,
    /// Generated per pixel; has no vector form.
    GlassNoise,
}

/// What [`Catalog::render`] produces for one asset.
#[derive(Debug, Clone, PartialEq)]
pub enum Artwork {
    Vector(Document),
    Raster(RgbaImage),
}

impl Artwork {
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Vector(doc) => Some(doc),
            Self::Raster(_) => None,
        }
    }
}

/// How one output file is produced from its entry's document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png { width: u32, height: u32 },
    /// Multi-resolution icon container with one PNG per size.
    Ico { sizes: Vec<u32> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub file_name: String,
    pub format: OutputFormat,
}

impl OutputFile {
    fn svg(stem: &str) -> Self {
        Self {
            file_name: format!("{stem}.svg"),
            format: OutputFormat::Svg,
        }
    }

    fn png(file_name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            file_name: file_name.into(),
            format: OutputFormat::Png { width, height },
        }
    }
}

/// An asset and every file written from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Output subdirectory.
    pub directory: &'static str,
    pub asset: AssetKind,
    pub outputs: Vec<OutputFile>,
}

// ============================================================================
// Catalog
// ============================================================================

/// Raster sizes requested for a batch. Everything else about the asset set
/// is fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub icon_sizes: Vec<u32>,
    pub favicon_sizes: Vec<u32>,
    pub ico_sizes: Vec<u32>,
    pub app_icon_sizes: Vec<u32>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            icon_sizes: vec![1024, 512, 256, 128, 64, 32],
            favicon_sizes: vec![32, 180, 192, 512, 150],
            ico_sizes: vec![16, 32, 48],
            app_icon_sizes: vec![1024, 512, 256, 128],
        }
    }
}

/// File name conventionally used for a favicon raster of `size`.
pub fn favicon_file_name(size: u32) -> String {
    match size {
        32 => "icon.png".to_string(),
        180 => "apple-icon.png".to_string(),
        150 => "mstile-150x150.png".to_string(),
        n => format!("android-chrome-{n}x{n}.png"),
    }
}

impl Catalog {
    /// Every asset of a full batch, in generation order.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        let mut entries = Vec::new();
        self.logo_entries(&mut entries);
        self.icon_entries(&mut entries);
        self.favicon_entries(&mut entries);
        self.app_icon_entries(&mut entries);
        Self::category_entries(&mut entries);
        Self::social_entries(&mut entries);
        Self::badge_and_placeholder_entries(&mut entries);
        Self::effect_entries(&mut entries);
        Self::email_entries(&mut entries);
        entries
    }

    /// Builds the artwork for one asset.
    pub fn render(composer: &Composer<'_>, asset: &AssetKind) -> Artwork {
        let doc = match *asset {
            AssetKind::Icon {
                variant,
                size,
                glow,
            } => composer.icon(variant, size, glow),
            AssetKind::Logo {
                mode,
                width,
                height,
            } => composer.logo(mode, width, height),
            AssetKind::Badge(kind) => composer.badge(kind),
            AssetKind::Placeholder(kind) => composer.placeholder(kind),
            AssetKind::AppIcon(variant) => composer.app_icon(variant),
            AssetKind::Streak(direction) => composer.streak(direction),
            AssetKind::NoiseTexture => composer.noise_texture(),
            AssetKind::Spinner(preset) => composer.spinner(preset),
            AssetKind::AnimatedLogo => composer.animated_logo(),
            AssetKind::SafariPinnedTab => composer.safari_pinned_tab(),
            AssetKind::CategoryBanner {
                category,
                width,
                height,
            } => composer.category_banner(category, width, height),
            AssetKind::SocialCard(card) => composer.social_card(card),
            AssetKind::CarbonFiber => composer.carbon_fiber(),
            AssetKind::GlassNoise => return Artwork::Raster(composer.glass_noise()),
        };
        Artwork::Vector(doc)
    }

    fn logo_entries(&self, entries: &mut Vec<CatalogEntry>) {
        let lockups = [
            ("logo-full", 1200.0, 400.0, true, true, Some(1200)),
            ("logo-compact", 400.0, 140.0, true, false, Some(400)),
            ("logo-wordmark", 800.0, 200.0, false, false, None),
        ];
        for (stem, width, height, icon, tagline, png_width) in lockups {
            for theme in [Theme::Dark, Theme::Light] {
                let stem = match (stem, theme) {
                    ("logo-wordmark", Theme::Dark) => stem.to_string(),
                    (_, Theme::Dark) => format!("{stem}-dark"),
                    (_, Theme::Light) => format!("{stem}-light"),
                };
                let mut outputs = vec![OutputFile::svg(&stem)];
                if let Some(png_width) = png_width {
                    let png_height = (f64::from(png_width) * height / width) as u32;
                    outputs.push(OutputFile::png(format!("{stem}.png"), png_width, png_height));
                }
                entries.push(CatalogEntry {
                    directory: "logo",
                    asset: AssetKind::Logo {
                        mode: LogoMode::new(theme, icon, tagline),
                        width,
                        height,
                    },
                    outputs,
                });
            }
        }
    }

    fn icon_entries(&self, entries: &mut Vec<CatalogEntry>) {
        for &variant in IconVariant::ALL {
            let stem = variant.file_stem();
            let mut outputs = vec![OutputFile::svg(stem)];
            outputs.extend(
                self.icon_sizes
                    .iter()
                    .map(|&size| OutputFile::png(format!("{stem}-{size}.png"), size, size)),
            );
            entries.push(CatalogEntry {
                directory: "icon",
                asset: AssetKind::Icon {
                    variant,
                    size: 1024.0,
                    glow: true,
                },
                outputs,
            });
        }
    }

    fn favicon_entries(&self, entries: &mut Vec<CatalogEntry>) {
        let mut outputs = vec![OutputFile::svg("icon")];
        outputs.extend(
            self.favicon_sizes
                .iter()
                .map(|&size| OutputFile::png(favicon_file_name(size), size, size)),
        );
        if !self.ico_sizes.is_empty() {
            outputs.push(OutputFile {
                file_name: "favicon.ico".to_string(),
                format: OutputFormat::Ico {
                    sizes: self.ico_sizes.clone(),
                },
            });
        }
        entries.push(CatalogEntry {
            directory: "favicon",
            asset: AssetKind::Icon {
                variant: IconVariant::Core,
                size: 512.0,
                glow: false,
            },
            outputs,
        });
        entries.push(CatalogEntry {
            directory: "favicon",
            asset: AssetKind::SafariPinnedTab,
            outputs: vec![OutputFile::svg("safari-pinned-tab")],
        });
    }

    fn app_icon_entries(&self, entries: &mut Vec<CatalogEntry>) {
        for &variant in AppIconVariant::ALL {
            let stem = format!("app-icon-{}", variant.key().to_lowercase());
            let mut outputs = vec![OutputFile::svg(&stem)];
            outputs.extend(
                self.app_icon_sizes
                    .iter()
                    .map(|&size| OutputFile::png(format!("{stem}-{size}.png"), size, size)),
            );
            entries.push(CatalogEntry {
                directory: "app",
                asset: AssetKind::AppIcon(variant),
                outputs,
            });
        }
    }

    fn category_entries(entries: &mut Vec<CatalogEntry>) {
        for &category in CategoryKey::ALL {
            for (width, height, suffix) in [(1920, 1080, ""), (1200, 630, "-og")] {
                entries.push(CatalogEntry {
                    directory: "category",
                    asset: AssetKind::CategoryBanner {
                        category,
                        width: f64::from(width),
                        height: f64::from(height),
                    },
                    outputs: vec![OutputFile::png(
                        format!("{}{suffix}.png", category.file_stem()),
                        width,
                        height,
                    )],
                });
            }
        }
    }

    fn social_entries(entries: &mut Vec<CatalogEntry>) {
        for &card in SocialCard::ALL {
            let (width, height) = card.dimensions();
            entries.push(CatalogEntry {
                directory: "og",
                asset: AssetKind::SocialCard(card),
                outputs: vec![OutputFile::png(card.file_name(), width, height)],
            });
        }
    }

    fn badge_and_placeholder_entries(entries: &mut Vec<CatalogEntry>) {
        for &kind in BadgeKind::ALL {
            entries.push(CatalogEntry {
                directory: "badges",
                asset: AssetKind::Badge(kind),
                outputs: vec![OutputFile::svg(kind.file_stem())],
            });
        }
        for &kind in PlaceholderKind::ALL {
            entries.push(CatalogEntry {
                directory: "placeholders",
                asset: AssetKind::Placeholder(kind),
                outputs: vec![OutputFile::svg(&kind.file_stem())],
            });
        }
    }

    fn effect_entries(entries: &mut Vec<CatalogEntry>) {
        for &direction in StreakDirection::ALL {
            entries.push(CatalogEntry {
                directory: "effects",
                asset: AssetKind::Streak(direction),
                outputs: vec![OutputFile::svg(&format!(
                    "gradient-streak-{}",
                    direction.key()
                ))],
            });
        }
        entries.push(CatalogEntry {
            directory: "effects",
            asset: AssetKind::NoiseTexture,
            outputs: vec![OutputFile::svg("noise-texture")],
        });
        for (asset, file_name) in [
            (AssetKind::CarbonFiber, "carbon-fiber-pattern.png"),
            (AssetKind::GlassNoise, "glass-noise.png"),
        ] {
            entries.push(CatalogEntry {
                directory: "effects",
                asset,
                outputs: vec![OutputFile::png(file_name, TEXTURE_SIZE, TEXTURE_SIZE)],
            });
        }
        for &preset in SpinnerPreset::ALL {
            entries.push(CatalogEntry {
                directory: "spinners",
                asset: AssetKind::Spinner(preset),
                outputs: vec![OutputFile::svg(&format!("spinner-{}", preset.key()))],
            });
        }
        entries.push(CatalogEntry {
            directory: "spinners",
            asset: AssetKind::AnimatedLogo,
            outputs: vec![OutputFile::svg("logo-animated")],
        });
    }

    fn email_entries(entries: &mut Vec<CatalogEntry>) {
        entries.push(CatalogEntry {
            directory: "email",
            asset: AssetKind::Logo {
                mode: LogoMode::new(Theme::Dark, true, false),
                width: 600.0,
                height: 200.0,
            },
            outputs: vec![
                OutputFile::png("email-header-logo.png", 600, 200),
                OutputFile::png("email-footer-logo.png", 400, 133),
            ],
        });
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_roundtrip_through_from_str() {
        for &variant in IconVariant::ALL {
            assert_eq!(variant.key().parse::<IconVariant>().unwrap(), variant);
        }
        for &mode in LogoMode::ALL {
            assert_eq!(mode.to_string().parse::<LogoMode>().unwrap(), mode);
        }
        assert_eq!("hifiAv".parse::<CategoryKey>().unwrap(), CategoryKey::HifiAv);
        assert_eq!("monogramIT".parse::<AppIconVariant>().unwrap(), AppIconVariant::MonogramIt);
    }

    #[test]
    fn unknown_keys_fail_fast() {
        let err = "neon".parse::<IconVariant>().unwrap_err();
        assert!(matches!(
            err,
            RenderError::UnknownVariant { kind: "icon variant", ref key } if key == "neon"
        ));
        assert!("gold".parse::<BadgeKind>().is_err());
        assert!("empty-state-nothing".parse::<PlaceholderKind>().is_err());
        assert!("Core".parse::<IconVariant>().is_err());
    }

    #[test]
    fn catalog_covers_every_family() {
        assert_eq!(IconVariant::ALL.len(), 6);
        assert_eq!(BadgeKind::ALL.len(), 5);
        assert_eq!(PlaceholderKind::ALL.len(), 6);
        assert_eq!(AppIconVariant::ALL.len(), 2);

        let entries = Catalog::default().entries();
        for &variant in IconVariant::ALL {
            assert!(entries.iter().any(|e| matches!(
                e.asset,
                AssetKind::Icon { variant: v, glow: true, .. } if v == variant
            )));
        }
        for &kind in PlaceholderKind::ALL {
            assert!(entries.iter().any(|e| e.asset == AssetKind::Placeholder(kind)));
        }
    }

    #[test]
    fn output_paths_are_unique() {
        let entries = Catalog::default().entries();
        let mut seen = HashSet::new();
        for entry in &entries {
            for output in &entry.outputs {
                let path = format!("{}/{}", entry.directory, output.file_name);
                assert!(seen.insert(path.clone()), "duplicate output {path}");
            }
        }
    }

    #[test]
    fn icon_rasters_follow_requested_sizes() {
        let catalog = Catalog {
            icon_sizes: vec![64, 16],
            ..Catalog::default()
        };
        let entries = catalog.entries();
        let core = entries
            .iter()
            .find(|e| e.directory == "icon" && e.outputs[0].file_name == "icon-core.svg")
            .unwrap();
        let names: Vec<_> = core.outputs.iter().map(|o| o.file_name.as_str()).collect();
        assert_eq!(names, ["icon-core.svg", "icon-core-64.png", "icon-core-16.png"]);
    }

    #[test]
    fn textures_are_png_only_effects() {
        let entries = Catalog::default().entries();
        for (asset, file_name) in [
            (AssetKind::CarbonFiber, "carbon-fiber-pattern.png"),
            (AssetKind::GlassNoise, "glass-noise.png"),
        ] {
            let entry = entries.iter().find(|e| e.asset == asset).unwrap();
            assert_eq!(entry.directory, "effects");
            assert_eq!(
                entry.outputs,
                [OutputFile::png(file_name, TEXTURE_SIZE, TEXTURE_SIZE)]
            );
        }
    }

    #[test]
    fn glass_noise_renders_as_raster() {
        let resolver = crate::resolver::TokenResolver::new(crate::tokens::DesignTokens::default());
        let composer = Composer::new(&resolver);

        let first = Catalog::render(&composer, &AssetKind::GlassNoise);
        let second = Catalog::render(&composer, &AssetKind::GlassNoise);
        assert!(first.as_document().is_none());
        assert_eq!(first, second);
        assert!(Catalog::render(&composer, &AssetKind::CarbonFiber).as_document().is_some());
    }

    #[test]
    fn favicon_entry_carries_ico() {
        let entries = Catalog::default().entries();
        let favicon = entries.iter().find(|e| e.directory == "favicon").unwrap();
        assert!(favicon.outputs.iter().any(|o| o.format
            == OutputFormat::Ico {
                sizes: vec![16, 32, 48]
            }));
        assert_eq!(favicon_file_name(192), "android-chrome-192x192.png");
    }
}
