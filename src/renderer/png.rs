//! PNG output via SVG rasterization.
//!
//! The crate has a single source of truth for icon geometry, the SVG
//! renderer; PNG output parses that SVG with usvg and rasterizes it with
//! tiny-skia before encoding through the `image` crate.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::Pixmap;
use resvg::usvg::{Options, Tree};

use crate::error::IconError;

/// Rasterizes an SVG document to PNG bytes at `size`x`size` pixels.
pub(crate) fn rasterize_svg(svg: &str, size: u32) -> Result<Vec<u8>, IconError> {
    if size == 0 {
        return Err(IconError::InvalidSize);
    }

    let tree = Tree::from_str(svg, &Options::default())?;

    let mut pixmap = Pixmap::new(size, size).ok_or(IconError::InvalidSize)?;
    let svg_size = tree.size();
    let scale = size as f32 / svg_size.width().max(svg_size.height());
    let transform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let img = pixmap_to_rgba_image(&pixmap);
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Converts a tiny-skia pixmap (premultiplied alpha) to an RGBA image.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    for (x, y, out) in img.enumerate_pixels_mut() {
        if let Some(pixel) = pixmap.pixel(x, y) {
            let (r, g, b, a) =
                unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
            *out = Rgba([r, g, b, a]);
        }
    }

    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let alpha = a as f32 / 255.0;
        (
            (r as f32 / alpha).round().min(255.0) as u8,
            (g as f32 / alpha).round().min(255.0) as u8,
            (b as f32 / alpha).round().min(255.0) as u8,
            a,
        )
    }
}
