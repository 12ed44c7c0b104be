//! Writes the whole asset tree to disk.
//!
//! [`BatchGenerator`] walks [`Catalog::entries`], renders each entry once
//! and writes every output file of it. Pixel artwork is written even when
//! rasterization is disabled. A failed output is logged and
//! recorded in the [`BatchReport`]; the remaining outputs are still written.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::{debug, info, warn};

use crate::catalog::{Artwork, Catalog, CatalogEntry, OutputFormat};
use crate::document::Document;
use crate::error::{RenderError, Result};
use crate::icon::{pack_ico, IconImage, IconSet};
use crate::layer::Composer;
use crate::manifest::{usage_guidelines, WebManifest};
use crate::svg::{encode_png, to_svg, Rasterizer};

pub const MANIFEST_PATH: &str = "manifest/site.webmanifest";
pub const GUIDELINES_PATH: &str = "legal/brand-usage-guidelines.txt";

/// An output that could not be produced.
#[derive(Debug)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub error: RenderError,
}

/// What a batch run wrote, skipped and failed to write.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    /// Rasterized outputs left out because rasterization is disabled.
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<BatchFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, path: PathBuf, result: Result<()>) {
        match result {
            Ok(()) => {
                info!(path = %path.display(), "wrote asset");
                self.written.push(path);
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "asset failed");
                self.failures.push(BatchFailure { path, error });
            }
        }
    }
}

/// Renders catalog entries and writes them under an output directory.
pub struct BatchGenerator<'a> {
    composer: Composer<'a>,
    catalog: Catalog,
    rasterizer: Option<Rasterizer>,
    manifest: WebManifest,
}

impl<'a> BatchGenerator<'a> {
    /// A generator rasterizing with [`Rasterizer::default`].
    pub fn new(composer: Composer<'a>, catalog: Catalog) -> Self {
        Self {
            composer,
            catalog,
            rasterizer: Some(Rasterizer::default()),
            manifest: WebManifest::default(),
        }
    }

    pub fn with_rasterizer(mut self, rasterizer: Rasterizer) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    /// Writes vector and text outputs only.
    pub fn without_rasters(mut self) -> Self {
        self.rasterizer = None;
        self
    }

    pub fn with_manifest(mut self, manifest: WebManifest) -> Self {
        self.manifest = manifest;
        self
    }

    /// Writes every catalog entry, the web manifest and the usage
    /// guidelines.
    pub fn run(&self, out_dir: &Path) -> BatchReport {
        let mut report = self.run_entries(&self.catalog.entries(), out_dir);

        let path = out_dir.join(MANIFEST_PATH);
        let result = self
            .manifest
            .to_json_pretty()
            .and_then(|json| write_file(&path, json.as_bytes()));
        report.record(path, result);

        let path = out_dir.join(GUIDELINES_PATH);
        let text = usage_guidelines(self.composer.resolver());
        let result = write_file(&path, text.as_bytes());
        report.record(path, result);

        report
    }

    /// Writes the outputs of `entries` only.
    pub fn run_entries(&self, entries: &[CatalogEntry], out_dir: &Path) -> BatchReport {
        let mut report = BatchReport::default();
        for entry in entries {
            self.write_entry(entry, out_dir, &mut report);
        }
        report
    }

    fn write_entry(&self, entry: &CatalogEntry, out_dir: &Path, report: &mut BatchReport) {
        let dir = out_dir.join(entry.directory);
        match Catalog::render(&self.composer, &entry.asset) {
            Artwork::Vector(doc) => self.write_vector(entry, &doc, &dir, report),
            Artwork::Raster(image) => {
                for output in &entry.outputs {
                    let path = dir.join(&output.file_name);
                    let result = encode_raster(&image, &output.format)
                        .and_then(|bytes| write_file(&path, &bytes));
                    report.record(path, result);
                }
            }
        }
    }

    fn write_vector(
        &self,
        entry: &CatalogEntry,
        doc: &Document,
        dir: &Path,
        report: &mut BatchReport,
    ) {
        let svg = to_svg(doc);
        for output in &entry.outputs {
            let path = dir.join(&output.file_name);
            let bytes = match (&output.format, &self.rasterizer) {
                (OutputFormat::Svg, _) => Ok(svg.clone().into_bytes()),
                (OutputFormat::Png { width, height }, Some(rasterizer)) => rasterizer
                    .render_svg(&svg, *width, *height)
                    .and_then(|image| encode_png(&image)),
                (OutputFormat::Ico { sizes }, Some(rasterizer)) => {
                    IconSet::render(rasterizer, doc, sizes).and_then(|set| pack_ico(&set))
                }
                (_, None) => {
                    debug!(path = %path.display(), "rasterization disabled, skipping");
                    report.skipped.push(path);
                    continue;
                }
            };
            let result = bytes.and_then(|bytes| write_file(&path, &bytes));
            report.record(path, result);
        }
    }
}

/// Encodes pixel artwork, resampling when the output size differs.
fn encode_raster(image: &RgbaImage, format: &OutputFormat) -> Result<Vec<u8>> {
    let resized = |width: u32, height: u32| {
        if image.dimensions() == (width, height) {
            image.clone()
        } else {
            imageops::resize(image, width, height, FilterType::Triangle)
        }
    };
    match format {
        OutputFormat::Png { width, height } => encode_png(&resized(*width, *height)),
        OutputFormat::Ico { sizes } => {
            let images = sizes
                .iter()
                .map(|&size| IconImage::new(resized(size, size)))
                .collect();
            pack_ico(&IconSet::from_images(images))
        }
        OutputFormat::Svg => Err(RenderError::Raster(
            "pixel artwork has no vector form".into(),
        )),
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;
    }
    fs::write(path, bytes).map_err(|e| RenderError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AssetKind, IconVariant, OutputFile};
    use crate::resolver::TokenResolver;
    use crate::tokens::DesignTokens;

    fn resolver() -> TokenResolver {
        TokenResolver::new(
            DesignTokens::from_json(
                r##"{
                    "colorSystem": { "neonRed": { "hex": "#E22229" } },
                    "gradientSystem": { "gradients": [
                        { "name": "redArcGradient", "type": "linear", "stops": [
                            { "position": 0, "color": "neonRed" },
                            { "position": 100, "color": "#8B0010" }
                        ] }
                    ] }
                }"##,
            )
            .unwrap(),
        )
    }

    fn icon_entry(outputs: Vec<OutputFile>) -> CatalogEntry {
        CatalogEntry {
            directory: "icon",
            asset: AssetKind::Icon {
                variant: IconVariant::Core,
                size: 64.0,
                glow: false,
            },
            outputs,
        }
    }

    fn output(file_name: &str, format: OutputFormat) -> OutputFile {
        OutputFile {
            file_name: file_name.into(),
            format,
        }
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = resolver();
        let generator = BatchGenerator::new(Composer::new(&resolver), Catalog::default());

        let entry = icon_entry(vec![
            output("broken.png", OutputFormat::Png { width: 0, height: 0 }),
            output("huge.ico", OutputFormat::Ico { sizes: vec![16, 300] }),
            output("core.svg", OutputFormat::Svg),
            output("core-32.png", OutputFormat::Png { width: 32, height: 32 }),
            output("favicon.ico", OutputFormat::Ico { sizes: vec![16, 32] }),
        ]);
        let report = generator.run_entries(&[entry], dir.path());

        let failed: Vec<_> = report.failures.iter().map(|f| f.path.clone()).collect();
        assert_eq!(
            failed,
            [dir.path().join("icon/broken.png"), dir.path().join("icon/huge.ico")]
        );
        assert!(matches!(report.failures[0].error, RenderError::Raster(_)));
        assert_eq!(report.written.len(), 3);
        assert!(!report.is_success());

        let png = fs::read(dir.path().join("icon/core-32.png")).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        let ico = fs::read(dir.path().join("icon/favicon.ico")).unwrap();
        assert_eq!(&ico[..6], [0, 0, 1, 0, 2, 0]);
        assert!(!dir.path().join("icon/broken.png").exists());
    }

    #[test]
    fn pixel_artwork_is_resampled_and_never_vectorized() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = resolver();
        let generator =
            BatchGenerator::new(Composer::new(&resolver), Catalog::default()).without_rasters();

        let entry = CatalogEntry {
            directory: "effects",
            asset: AssetKind::GlassNoise,
            outputs: vec![
                output("grain.svg", OutputFormat::Svg),
                output("grain-64.png", OutputFormat::Png { width: 64, height: 64 }),
                output("grain.ico", OutputFormat::Ico { sizes: vec![16, 32] }),
            ],
        };
        let report = generator.run_entries(&[entry], dir.path());

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, dir.path().join("effects/grain.svg"));
        assert!(matches!(report.failures[0].error, RenderError::Raster(_)));
        assert_eq!(report.written.len(), 2);
        assert!(report.skipped.is_empty());

        let png = image::open(dir.path().join("effects/grain-64.png")).unwrap();
        assert_eq!((png.width(), png.height()), (64, 64));
        let ico = fs::read(dir.path().join("effects/grain.ico")).unwrap();
        assert_eq!(&ico[..6], [0, 0, 1, 0, 2, 0]);
    }

    #[test]
    fn vector_only_run_writes_whole_tree() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = resolver();
        let generator =
            BatchGenerator::new(Composer::new(&resolver), Catalog::default()).without_rasters();

        let report = generator.run(dir.path());

        assert!(report.is_success());
        assert!(!report.skipped.is_empty());
        assert!(report.skipped.iter().all(|p| p.extension().unwrap() != "svg"));
        for file in [
            "icon/icon-core.svg",
            "favicon/icon.svg",
            "favicon/safari-pinned-tab.svg",
            "badges/badge-premium.svg",
            "spinners/logo-animated.svg",
            MANIFEST_PATH,
            GUIDELINES_PATH,
        ] {
            let path = dir.path().join(file);
            assert!(path.is_file(), "{file} missing");
            assert!(report.written.contains(&path));
        }

        let grain = dir.path().join("effects/glass-noise.png");
        assert!(report.written.contains(&grain));
        assert!(!report.skipped.contains(&grain));
        let weave = dir.path().join("effects/carbon-fiber-pattern.png");
        assert!(report.skipped.contains(&weave));
        assert!(!weave.exists());

        let svg = fs::read_to_string(dir.path().join("icon/icon-core.svg")).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg xmlns="));
        let manifest = fs::read_to_string(dir.path().join(MANIFEST_PATH)).unwrap();
        assert!(manifest.contains("\"start_url\": \"/\""));
    }
}
