//! Error type shared by the token loader, the catalog and the output layers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by brand-renderer.
///
/// Missing optional tokens never show up here: the resolver reports them as
/// absence and the composer drops the dependent layer instead.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A catalog key did not name any known variant of the given kind.
    #[error("unknown {kind} '{key}'")]
    UnknownVariant { kind: &'static str, key: String },

    /// The design-token document could not be parsed.
    #[error("invalid design-token document: {0}")]
    Json(#[from] serde_json::Error),

    /// The generator config file could not be parsed.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialized markup was rejected by the SVG parser.
    #[error("SVG parse error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    /// The rasterizer could not allocate or fill a pixmap.
    #[error("rasterization failed: {0}")]
    Raster(String),

    /// PNG or ICO encoding failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

impl RenderError {
    /// Builds an [`RenderError::UnknownVariant`] for a catalog lookup.
    pub fn unknown(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            key: key.into(),
        }
    }

    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Shorthand result type.
pub type Result<T, E = RenderError> = std::result::Result<T, E>;
