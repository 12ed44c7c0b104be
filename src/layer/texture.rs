//! Tileable background textures: the carbon-fiber weave and glass grain.

use image::{Rgba, RgbaImage};

use super::{Composer, Lcg, RandomSource};
use crate::document::{Document, LayerRole, Paint, RenderLayer, Shape};

/// Edge length of both textures.
pub const TEXTURE_SIZE: u32 = 256;

/// Seed of the glass grain; the texture is identical on every run.
pub const GLASS_NOISE_SEED: u32 = 42;

const WEAVE_CELL: u32 = 8;
const WEAVE_BASE: &str = "#0F0D10";
const WEAVE_LIGHT: &str = "#121014";
const WEAVE_DARK: &str = "#0C0A0E";
const WEAVE_THREAD: &str = "#19181C";
const ROW_THREAD_OPACITY: f64 = 80.0 / 255.0;
const COLUMN_THREAD_OPACITY: f64 = 60.0 / 255.0;

const GRAIN_ALPHA: (u8, u8) = (5, 25);

impl Composer<'_> {
    /// Checkerboard of 8-unit cells with a thread line along the top and
    /// left edge of every cell row and column.
    pub fn carbon_fiber(&self) -> Document {
        let size = f64::from(TEXTURE_SIZE);
        let cell = f64::from(WEAVE_CELL);
        let cells = TEXTURE_SIZE / WEAVE_CELL;
        let mut doc = Document::square(size);

        doc.push_layer(
            RenderLayer::new(LayerRole::Background, Shape::rect(size, size, 0.0))
                .fill(Paint::color(WEAVE_BASE)),
        );
        for row in 0..cells {
            for column in 0..cells {
                let shade = if (row + column) % 2 == 0 { WEAVE_LIGHT } else { WEAVE_DARK };
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Texture,
                        Shape::Rect {
                            x: f64::from(column) * cell,
                            y: f64::from(row) * cell,
                            width: cell,
                            height: cell,
                            corner_radius: 0.0,
                        },
                    )
                    .fill(Paint::color(shade)),
                );
            }
        }
        for i in 0..cells {
            let offset = f64::from(i) * cell;
            let threads = [
                (0.0, offset, size, 1.0, ROW_THREAD_OPACITY),
                (offset, 0.0, 1.0, size, COLUMN_THREAD_OPACITY),
            ];
            for (x, y, width, height, opacity) in threads {
                doc.push_layer(
                    RenderLayer::new(
                        LayerRole::Texture,
                        Shape::Rect {
                            x,
                            y,
                            width,
                            height,
                            corner_radius: 0.0,
                        },
                    )
                    .fill(Paint::color(WEAVE_THREAD))
                    .opacity(opacity),
                );
            }
        }
        doc
    }

    /// Per-pixel grey grain at low alpha, seeded with [`GLASS_NOISE_SEED`].
    pub fn glass_noise(&self) -> RgbaImage {
        glass_noise_with_random(TEXTURE_SIZE, &mut Lcg::new(GLASS_NOISE_SEED))
    }
}

/// Grain of `size` x `size` pixels drawn from `random`, two values per pixel
/// in row-major order: the grey level, then the alpha.
pub fn glass_noise_with_random(size: u32, random: &mut dyn RandomSource) -> RgbaImage {
    let (low, high) = GRAIN_ALPHA;
    let mut image = RgbaImage::new(size, size);
    for pixel in image.pixels_mut() {
        let grey = random.uniform(0.0, 256.0).floor().min(255.0) as u8;
        let alpha = random
            .uniform(f64::from(low), f64::from(high) + 1.0)
            .floor()
            .min(f64::from(high)) as u8;
        *pixel = Rgba([grey, grey, grey, alpha]);
    }
    image
}
