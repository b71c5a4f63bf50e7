use anyhow::Context;
use image::{imageops, DynamicImage, Rgb, RgbImage};
use std::path::Path;

/// Width and height of every output image
pub const CANVAS_SIZE: u32 = 768;

pub const CANVAS_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Offset that centers `dimension` inside `canvas`.
///
/// Floors toward negative infinity, so an odd remainder shifts the image up/left
/// and an oversized image gets a negative offset.
pub fn centering_offset(canvas: u32, dimension: u32) -> i64 {
    (i64::from(canvas) - i64::from(dimension)).div_euclid(2)
}

/// Paste `img` onto a fresh white canvas, centered. Parts that fall outside the
/// canvas are clipped.
pub fn center_on_canvas(img: &DynamicImage) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, CANVAS_BACKGROUND);

    let x_offset = centering_offset(CANVAS_SIZE, img.width());
    let y_offset = centering_offset(CANVAS_SIZE, img.height());

    // Alpha is dropped rather than blended
    imageops::replace(&mut canvas, &img.to_rgb8(), x_offset, y_offset);

    canvas
}

/// Center `img` on the canvas and write it to `output_path`. The format comes
/// from the path's extension; the parent directory must already exist.
pub fn center_and_save(img: &DynamicImage, output_path: &Path) -> anyhow::Result<()> {
    let canvas = center_on_canvas(img);

    canvas.save(output_path)
        .with_context(|| format!("Failed to save image to {}", output_path.display()))?;

    Ok(())
}
