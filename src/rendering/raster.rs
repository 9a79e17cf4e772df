/// Canvas allocation, compositing, flattening and PNG encoding

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{imageops, DynamicImage, ExtendedColorType, ImageEncoder, Rgba, RgbImage, RgbaImage};

use crate::{Result, Rgb};

/// Opaque square canvas filled with `background`.
pub fn new_canvas(size: u32, background: Rgb) -> RgbaImage {
    let [r, g, b] = background;
    RgbaImage::from_pixel(size, size, Rgba([r, g, b, 255]))
}

/// Fully transparent square overlay.
pub fn new_overlay(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]))
}

/// Alpha-composite `overlay` over `canvas` in place.
pub fn composite(canvas: &mut RgbaImage, overlay: &RgbaImage) {
    imageops::overlay(canvas, overlay, 0, 0);
}

/// Blend `canvas` onto a solid `background` and drop the alpha channel.
pub fn flatten(canvas: &RgbaImage, background: Rgb) -> RgbImage {
    let [r, g, b] = background;
    let mut base = RgbaImage::from_pixel(canvas.width(), canvas.height(), Rgba([r, g, b, 255]));
    imageops::overlay(&mut base, canvas, 0, 0);
    DynamicImage::ImageRgba8(base).into_rgb8()
}

/// Encode losslessly as an 8-bit RGB PNG.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgb8)?;
    Ok(buf)
}
