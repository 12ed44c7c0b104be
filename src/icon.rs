//! Multi-resolution icon sets and the Windows ICO container.

use std::io::Cursor;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, RgbaImage};

use crate::document::Document;
use crate::error::Result;
use crate::svg::Rasterizer;

/// One rasterized square image of an icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    pub data: RgbaImage,
}

impl IconImage {
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }
}

/// The same icon rasterized at several sizes, in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    pub images: Vec<IconImage>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_images(images: Vec<IconImage>) -> Self {
        Self { images }
    }

    /// Rasterizes `doc` once per entry of `sizes`.
    pub fn render(rasterizer: &Rasterizer, doc: &Document, sizes: &[u32]) -> Result<Self> {
        let images = sizes
            .iter()
            .map(|&size| rasterizer.render(doc, size, size).map(IconImage::new))
            .collect::<Result<_>>()?;
        Ok(Self { images })
    }

    pub fn add_image(&mut self, image: IconImage) {
        self.images.push(image);
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The image with exactly this edge length, if any.
    pub fn find_by_size(&self, size: u32) -> Option<&IconImage> {
        self.images.iter().find(|image| image.size() == size)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IconImage> {
        self.images.iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconImage;
    type IntoIter = std::slice::Iter<'a, IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// Packs every image of `set` into an ICO file.
///
/// The file holds a 6-byte header, one 16-byte directory entry per image
/// (32 bits per pixel) and the PNG-encoded payloads in directory order.
/// Images must be at most 256 pixels wide.
pub fn pack_ico(set: &IconSet) -> Result<Vec<u8>> {
    let frames = set
        .iter()
        .map(|image| {
            let data = &image.data;
            IcoFrame::as_png(data.as_raw(), data.width(), data.height(), ExtendedColorType::Rgba8)
        })
        .collect::<image::ImageResult<Vec<_>>>()?;

    let mut bytes = Vec::new();
    IcoEncoder::new(Cursor::new(&mut bytes)).encode_images(&frames)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(size: u32) -> IconImage {
        IconImage::new(RgbaImage::from_pixel(size, size, Rgba([226, 34, 41, 255])))
    }

    fn u32_at(bytes: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    }

    #[test]
    fn ico_directory_layout() {
        let set = IconSet::from_images(vec![solid(16), solid(32), solid(48)]);
        let ico = pack_ico(&set).unwrap();

        // reserved, type 1 (icon), three images
        assert_eq!(&ico[..6], [0, 0, 1, 0, 3, 0]);

        let mut expected_offset = 6 + 16 * 3;
        for (i, size) in [16u8, 32, 48].into_iter().enumerate() {
            let entry = &ico[6 + 16 * i..6 + 16 * (i + 1)];
            assert_eq!(entry[0], size);
            assert_eq!(entry[1], size);
            assert_eq!(u16::from_le_bytes([entry[6], entry[7]]), 32);

            let length = u32_at(entry, 8) as usize;
            let offset = u32_at(entry, 12) as usize;
            assert_eq!(offset, expected_offset);
            assert_eq!(&ico[offset..offset + 8], b"\x89PNG\r\n\x1a\n");
            expected_offset += length;
        }
        assert_eq!(ico.len(), expected_offset);
    }

    #[test]
    fn oversized_frame_is_rejected() {
        let set = IconSet::from_images(vec![solid(300)]);
        assert!(pack_ico(&set).is_err());
    }

    #[test]
    fn render_produces_one_image_per_size() {
        let mut doc = Document::square(64.0);
        doc.push_layer(
            crate::document::RenderLayer::new(
                crate::document::LayerRole::Background,
                crate::document::Shape::rect(64.0, 64.0, 0.0),
            )
            .fill(crate::document::Paint::color("#E22229")),
        );
        let set = IconSet::render(&Rasterizer::default(), &doc, &[16, 32]).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.find_by_size(32).unwrap().data.get_pixel(5, 5).0, [226, 34, 41, 255]);
        assert!(set.find_by_size(48).is_none());
    }
}
