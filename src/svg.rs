//! SVG serialization and rasterization.
//!
//! [`to_svg`] writes a [`Document`] as standalone SVG 1.1 markup, one
//! element per layer in paint order. [`Rasterizer`] renders that markup with
//! resvg into an [`RgbaImage`] at any pixel size.

use std::fmt::{self, Write as _};
use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::document::{
    ColorStop, Definition, Document, FilterEffect, Font, Paint, RenderLayer, Shape, TextAnchor,
    TransformOp,
};
use crate::error::{RenderError, Result};

// ============================================================================
// Serialization
// ============================================================================

/// Serializes `doc` as SVG markup.
///
/// # Example
///
/// ```
/// use brand_renderer::document::{Document, LayerRole, Paint, RenderLayer, Shape};
/// use brand_renderer::svg::to_svg;
///
/// let mut doc = Document::square(16.0);
/// doc.push_layer(
///     RenderLayer::new(LayerRole::Background, Shape::rect(16.0, 16.0, 4.0))
///         .fill(Paint::color("#E22229")),
/// );
///
/// let svg = to_svg(&doc);
/// assert!(svg.contains(r##"<rect x="0" y="0" width="16" height="16" rx="4" fill="#E22229"/>"##));
/// ```
pub fn to_svg(doc: &Document) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_document(&mut out, doc);
    out
}

fn write_document(out: &mut String, doc: &Document) -> fmt::Result {
    writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = doc.width,
        h = doc.height,
    )?;

    if !doc.definitions.is_empty() {
        writeln!(out, "<defs>")?;
        for definition in &doc.definitions {
            write_definition(out, definition)?;
        }
        writeln!(out, "</defs>")?;
    }
    if let Some(css) = &doc.stylesheet {
        writeln!(out, "<style>\n{}\n</style>", escape(css))?;
    }
    for layer in &doc.layers {
        write_layer(out, layer)?;
    }

    writeln!(out, "</svg>")
}

fn write_definition(out: &mut String, definition: &Definition) -> fmt::Result {
    match definition {
        Definition::LinearGradient {
            id,
            start,
            end,
            stops,
        } => {
            writeln!(
                out,
                r#"<linearGradient id="{}" x1="{}%" y1="{}%" x2="{}%" y2="{}%">"#,
                escape(id),
                start.x,
                start.y,
                end.x,
                end.y
            )?;
            write_stops(out, stops)?;
            writeln!(out, "</linearGradient>")
        }
        Definition::RadialGradient {
            id,
            center,
            radius,
            stops,
        } => {
            writeln!(
                out,
                r#"<radialGradient id="{}" cx="{}%" cy="{}%" r="{}%">"#,
                escape(id),
                center.x,
                center.y,
                radius
            )?;
            write_stops(out, stops)?;
            writeln!(out, "</radialGradient>")
        }
        Definition::Filter {
            id,
            region,
            effects,
        } => {
            writeln!(
                out,
                r#"<filter id="{}" x="{}%" y="{}%" width="{}%" height="{}%">"#,
                escape(id),
                region.x,
                region.y,
                region.width,
                region.height
            )?;
            for effect in effects {
                match effect {
                    FilterEffect::DropShadow {
                        dx,
                        dy,
                        std_deviation,
                        color,
                        opacity,
                    } => writeln!(
                        out,
                        r#"<feDropShadow dx="{dx}" dy="{dy}" stdDeviation="{std_deviation}" flood-color="{}" flood-opacity="{opacity}"/>"#,
                        escape(color)
                    )?,
                    FilterEffect::GaussianBlur { std_deviation } => {
                        writeln!(out, r#"<feGaussianBlur stdDeviation="{std_deviation}"/>"#)?
                    }
                    FilterEffect::FractalNoise {
                        base_frequency,
                        octaves,
                    } => {
                        writeln!(
                            out,
                            r#"<feTurbulence type="fractalNoise" baseFrequency="{base_frequency}" numOctaves="{octaves}" stitchTiles="stitch"/>"#
                        )?;
                        writeln!(out, r#"<feColorMatrix type="saturate" values="0"/>"#)?
                    }
                }
            }
            writeln!(out, "</filter>")
        }
        Definition::ClipPath { id, shape } => {
            writeln!(out, r#"<clipPath id="{}">"#, escape(id))?;
            write_shape(out, shape, "")?;
            writeln!(out, "</clipPath>")
        }
    }
}

fn write_stops(out: &mut String, stops: &[ColorStop]) -> fmt::Result {
    for stop in stops {
        writeln!(
            out,
            r#"<stop offset="{}%" stop-color="{}" stop-opacity="{}"/>"#,
            stop.offset,
            escape(&stop.color),
            stop.opacity
        )?;
    }
    Ok(())
}

fn write_layer(out: &mut String, layer: &RenderLayer) -> fmt::Result {
    let attributes = layer_attributes(layer)?;
    write_shape(out, &layer.shape, &attributes)
}

/// Presentation attributes of a layer, each with a leading space.
fn layer_attributes(layer: &RenderLayer) -> Result<String, fmt::Error> {
    let mut attrs = String::new();

    if !matches!(layer.shape, Shape::Group { .. }) {
        write!(attrs, r#" fill="{}""#, paint(&layer.fill))?;
    }
    if let Some(stroke) = &layer.stroke {
        write!(
            attrs,
            r#" stroke="{}" stroke-width="{}""#,
            paint(&stroke.paint),
            stroke.width
        )?;
        if let Some([dash, gap]) = stroke.dash {
            write!(attrs, r#" stroke-dasharray="{dash} {gap}""#)?;
        }
        if stroke.round_cap {
            attrs.push_str(r#" stroke-linecap="round""#);
        }
    }
    if layer.opacity != 1.0 {
        write!(attrs, r#" opacity="{}""#, layer.opacity)?;
    }
    if let Some(filter) = &layer.filter {
        write!(attrs, r#" filter="url(#{})""#, escape(filter))?;
    }
    if let Some(clip) = &layer.clip_path {
        write!(attrs, r#" clip-path="url(#{})""#, escape(clip))?;
    }
    if !layer.transform.is_empty() {
        let ops: Vec<String> = layer.transform.iter().map(transform_op).collect();
        write!(attrs, r#" transform="{}""#, ops.join(" "))?;
    }
    if let Some(class) = &layer.class {
        write!(attrs, r#" class="{}""#, escape(class))?;
    }
    if let Some(style) = &layer.inline_style {
        write!(attrs, r#" style="{}""#, escape(style))?;
    }
    Ok(attrs)
}

fn write_shape(out: &mut String, shape: &Shape, attrs: &str) -> fmt::Result {
    match shape {
        Shape::Ellipse { center, rx, ry } => writeln!(
            out,
            r#"<ellipse cx="{}" cy="{}" rx="{rx}" ry="{ry}"{attrs}/>"#,
            center.x, center.y
        ),
        Shape::Circle { center, r } => writeln!(
            out,
            r#"<circle cx="{}" cy="{}" r="{r}"{attrs}/>"#,
            center.x, center.y
        ),
        Shape::Rect {
            x,
            y,
            width,
            height,
            corner_radius,
        } => {
            write!(out, r#"<rect x="{x}" y="{y}" width="{width}" height="{height}""#)?;
            if *corner_radius > 0.0 {
                write!(out, r#" rx="{corner_radius}""#)?;
            }
            writeln!(out, "{attrs}/>")
        }
        Shape::Polygon { points } => {
            let mut data = String::new();
            for (i, point) in points.iter().enumerate() {
                let command = if i == 0 { 'M' } else { 'L' };
                write!(data, "{command} {:.2} {:.2} ", point.x, point.y)?;
            }
            data.push('Z');
            writeln!(out, r#"<path d="{data}"{attrs}/>"#)
        }
        Shape::Path { data } => writeln!(out, r#"<path d="{}"{attrs}/>"#, escape(data)),
        Shape::Text {
            position,
            font,
            spans,
        } => {
            write!(
                out,
                r#"<text x="{}" y="{}"{}{attrs}>"#,
                position.x,
                position.y,
                font_attributes(font)
            )?;
            for span in spans {
                match &span.fill {
                    Some(fill) => write!(
                        out,
                        r#"<tspan fill="{}">{}</tspan>"#,
                        paint(fill),
                        escape(&span.text)
                    )?,
                    None => out.push_str(&escape(&span.text)),
                }
            }
            writeln!(out, "</text>")
        }
        Shape::Group { layers } => {
            writeln!(out, "<g{attrs}>")?;
            for layer in layers {
                write_layer(out, layer)?;
            }
            writeln!(out, "</g>")
        }
    }
}

fn font_attributes(font: &Font) -> String {
    let mut attrs = format!(
        r#" font-family="{}" font-weight="{}" font-size="{}""#,
        escape(&font.family),
        escape(&font.weight),
        font.size
    );
    if font.letter_spacing != 0.0 {
        let _ = write!(attrs, r#" letter-spacing="{}""#, font.letter_spacing);
    }
    match font.anchor {
        TextAnchor::Start => {}
        TextAnchor::Middle => attrs.push_str(r#" text-anchor="middle""#),
        TextAnchor::End => attrs.push_str(r#" text-anchor="end""#),
    }
    if font.italic {
        attrs.push_str(r#" font-style="italic""#);
    }
    if font.centered_baseline {
        attrs.push_str(r#" dominant-baseline="central""#);
    }
    attrs
}

fn paint(paint: &Paint) -> String {
    match paint {
        Paint::None => "none".to_string(),
        Paint::Color(color) => escape(color),
        Paint::Reference(id) => format!("url(#{})", escape(id)),
    }
}

fn transform_op(op: &TransformOp) -> String {
    match op {
        TransformOp::Rotate { angle, center } => {
            format!("rotate({angle} {} {})", center.x, center.y)
        }
        TransformOp::Translate { x, y } => format!("translate({x} {y})"),
        TransformOp::Scale { factor } => format!("scale({factor})"),
        TransformOp::SkewX { angle } => format!("skewX({angle})"),
    }
}

/// Escapes XML special characters in text and attribute values.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// ============================================================================
// Rasterization
// ============================================================================

/// Renders SVG markup to RGBA pixels with resvg.
///
/// Parsing options (including the font database) are built once and reused
/// for every render.
pub struct Rasterizer {
    options: Options<'static>,
}

impl Default for Rasterizer {
    /// A rasterizer without system fonts; text layers are skipped.
    fn default() -> Self {
        Self {
            options: Options::default(),
        }
    }
}

impl Rasterizer {
    /// A rasterizer that resolves font families against the system fonts.
    pub fn with_system_fonts() -> Self {
        let mut options = Options::default();
        Arc::make_mut(&mut options.fontdb).load_system_fonts();
        Self { options }
    }

    /// Rasterizes `doc` stretched to `width` x `height` pixels.
    pub fn render(&self, doc: &Document, width: u32, height: u32) -> Result<RgbaImage> {
        self.render_svg(&to_svg(doc), width, height)
    }

    /// Rasterizes SVG markup stretched to `width` x `height` pixels.
    pub fn render_svg(&self, svg: &str, width: u32, height: u32) -> Result<RgbaImage> {
        let tree = Tree::from_str(svg, &self.options)?;

        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| RenderError::Raster(format!("cannot allocate {width}x{height} pixmap")))?;
        let size = tree.size();
        let transform = Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap_to_rgba_image(&pixmap)
    }
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Converts a premultiplied tiny-skia pixmap into a straight-alpha image.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> Result<RgbaImage> {
    let data = pixmap
        .pixels()
        .iter()
        .flat_map(|p| unpremultiply(p.red(), p.green(), p.blue(), p.alpha()))
        .collect();
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), data)
        .ok_or_else(|| RenderError::Raster("pixmap size mismatch".into()))
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let a_f = a as f32 / 255.0;
    let channel = |c: u8| (c as f32 / a_f).round().min(255.0) as u8;
    [channel(r), channel(g), channel(b), a]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{LayerRole, Stroke, TextSpan};
    use crate::effects::glow_filter;
    use crate::geometry::Point;

    fn red_square() -> Document {
        let mut doc = Document::square(8.0);
        doc.push_layer(
            RenderLayer::new(LayerRole::Background, Shape::rect(8.0, 8.0, 0.0))
                .fill(Paint::color("#FF0000")),
        );
        doc
    }

    #[test]
    fn layers_serialize_in_paint_order() {
        let mut doc = red_square();
        doc.push_definition(glow_filter("glow", "#3CAAFF", 8.0, 0.5));
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Ring,
                Shape::Ellipse {
                    center: Point::new(4.0, 4.0),
                    rx: 3.0,
                    ry: 2.0,
                },
            )
            .stroke(Stroke::new(Paint::reference("chrome"), 1.5))
            .opacity(0.95)
            .filter("glow")
            .transform(TransformOp::Rotate {
                angle: -18.0,
                center: Point::new(4.0, 4.0),
            }),
        );

        let svg = to_svg(&doc);
        let rect = svg.find("<rect").unwrap();
        let ellipse = svg.find("<ellipse").unwrap();
        assert!(rect < ellipse);
        assert!(svg.contains(
            r##"<ellipse cx="4" cy="4" rx="3" ry="2" fill="none" stroke="url(#chrome)" stroke-width="1.5" opacity="0.95" filter="url(#glow)" transform="rotate(-18 4 4)"/>"##
        ));
        assert!(svg.contains(
            r##"<feDropShadow dx="0" dy="0" stdDeviation="4" flood-color="#3CAAFF" flood-opacity="0.5"/>"##
        ));
    }

    #[test]
    fn polygon_becomes_closed_path() {
        let mut doc = Document::square(10.0);
        doc.push_layer(RenderLayer::new(
            LayerRole::PrimaryArc,
            Shape::Polygon {
                points: vec![Point::new(1.0, 2.0), Point::new(3.456, 4.0), Point::new(5.0, 6.0)],
            },
        ));
        assert!(to_svg(&doc).contains(r#"d="M 1.00 2.00 L 3.46 4.00 L 5.00 6.00 Z""#));
    }

    #[test]
    fn text_is_escaped_and_spans_keep_fills() {
        let mut doc = Document::new(100.0, 20.0);
        doc.push_layer(
            RenderLayer::new(
                LayerRole::Text,
                Shape::Text {
                    position: Point::new(0.0, 10.0),
                    font: Font::new("'Montserrat', sans-serif", "bold", 12.0).centered(),
                    spans: vec![
                        TextSpan::plain("HI-FI & AV"),
                        TextSpan::painted(".im", Paint::reference("red")),
                    ],
                },
            )
            .fill(Paint::color("#FFFFFF")),
        );

        let svg = to_svg(&doc);
        assert!(svg.contains("HI-FI &amp; AV"));
        assert!(svg.contains(r##"<tspan fill="url(#red)">.im</tspan>"##));
        assert!(svg.contains(r#"dominant-baseline="central""#));
    }

    #[test]
    fn rasterizes_to_requested_size() {
        let image = Rasterizer::default().render(&red_square(), 16, 16).unwrap();
        assert_eq!(image.dimensions(), (16, 16));
        assert_eq!(image.get_pixel(8, 8).0, [255, 0, 0, 255]);
    }

    #[test]
    fn zero_size_raster_is_an_error() {
        let result = Rasterizer::default().render(&red_square(), 0, 16);
        assert!(matches!(result, Err(RenderError::Raster(_))));
    }

    #[test]
    fn invalid_markup_is_an_error() {
        let result = Rasterizer::default().render_svg("<svg", 8, 8);
        assert!(matches!(result, Err(RenderError::Svg(_))));
    }

    #[test]
    fn png_has_signature() {
        let image = Rasterizer::default().render(&red_square(), 4, 4).unwrap();
        let png = encode_png(&image).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn unpremultiply_restores_straight_alpha() {
        assert_eq!(unpremultiply(0, 0, 0, 0), [0, 0, 0, 0]);
        assert_eq!(unpremultiply(120, 0, 40, 120), [255, 0, 85, 120]);
    }
}
