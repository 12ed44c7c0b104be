//! brand-renderer: token-driven brand asset generation
//!
//! This crate turns a JSON design-token document into the vector and raster
//! assets of a brand: the vortex mark and its variants, wordmark lockups,
//! badges, placeholders, app icons, banners, decorative effects, favicons
//! and the web manifest.
//!
//! Rendering happens in three stages:
//!
//! 1. [`TokenResolver`] answers color, gradient and glow lookups against a
//!    [`DesignTokens`] document.
//! 2. [`Composer`] builds a [`Document`]: an ordered list of layers plus the
//!    gradient, filter and clip definitions they reference.
//! 3. Output collaborators serialize it: [`svg::to_svg`] for markup,
//!    [`svg::Rasterizer`] for pixels, [`icon::pack_ico`] for favicons.
//!
//! # Example
//!
//! ```
//! use brand_renderer::{Composer, DesignTokens, IconVariant, LayerRole, TokenResolver};
//!
//! let tokens = DesignTokens::from_json(r##"{
//!     "colorSystem": { "neonRed": { "hex": "#E22229" } },
//!     "gradientSystem": { "gradients": [] }
//! }"##).unwrap();
//! let resolver = TokenResolver::new(tokens);
//!
//! let doc = Composer::new(&resolver).icon(IconVariant::Core, 512.0, true);
//! assert_eq!(doc.width, 512.0);
//! assert!(doc.layers_with_role(LayerRole::Specular).count() > 0);
//!
//! let svg = brand_renderer::svg::to_svg(&doc);
//! assert!(svg.contains("viewBox=\"0 0 512 512\""));
//! ```
//!
//! # Batches
//!
//! [`Catalog`] lists every asset and output file of a full run, and
//! [`batch::BatchGenerator`] writes them, collecting per-file failures in a
//! [`batch::BatchReport`] instead of stopping.

pub mod batch;
pub mod catalog;
pub mod color;
pub mod config;
pub mod document;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod layer;
pub mod manifest;
pub mod resolver;
pub mod svg;
pub mod tokens;

pub use catalog::{
    AppIconVariant, Artwork, AssetKind, BadgeKind, Catalog, CatalogEntry, CategoryKey,
    IconVariant, LogoMode, OutputFile, OutputFormat, PlaceholderKind, SocialCard, SpinnerPreset,
    StreakDirection, Theme, VariantKey,
};
pub use config::GeneratorConfig;
pub use document::{Definition, Document, LayerRole, Paint, RenderLayer, Shape};
pub use error::{RenderError, Result};
pub use geometry::{ArcGeometry, Point};
pub use layer::{Composer, Lcg, RandomSource};
pub use resolver::TokenResolver;
pub use tokens::DesignTokens;
