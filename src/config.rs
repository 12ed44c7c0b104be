//! Generator settings loaded from TOML.
//!
//! Every field has a built-in default, so a config file only needs the keys
//! it changes and an empty file is valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{RenderError, Result};
use crate::geometry::DEFAULT_ARC_STEPS;
use crate::layer::DEFAULT_PARTICLE_SEED;

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Design-token JSON document.
    pub tokens: PathBuf,
    /// Root directory the asset tree is written under.
    pub output_dir: PathBuf,

    pub icon_sizes: Vec<u32>,
    pub favicon_sizes: Vec<u32>,
    /// Frames packed into `favicon.ico`. Empty skips the ICO.
    pub ico_sizes: Vec<u32>,
    pub app_icon_sizes: Vec<u32>,

    /// Samples per arc edge.
    pub arc_steps: u32,
    pub particle_seed: u32,
    /// When false only vector and text outputs are written.
    pub rasterize: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let catalog = Catalog::default();
        Self {
            tokens: PathBuf::from("brand.json"),
            output_dir: PathBuf::from("brand-assets"),
            icon_sizes: catalog.icon_sizes,
            favicon_sizes: catalog.favicon_sizes,
            ico_sizes: catalog.ico_sizes,
            app_icon_sizes: catalog.app_icon_sizes,
            arc_steps: DEFAULT_ARC_STEPS,
            particle_seed: DEFAULT_PARTICLE_SEED,
            rasterize: true,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads a config file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| RenderError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// The file at `path` if it exists, otherwise the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// The raster sizes of this config as a catalog.
    pub fn catalog(&self) -> Catalog {
        Catalog {
            icon_sizes: self.icon_sizes.clone(),
            favicon_sizes: self.favicon_sizes.clone(),
            ico_sizes: self.ico_sizes.clone(),
            app_icon_sizes: self.app_icon_sizes.clone(),
        }
    }
}
