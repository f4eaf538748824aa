// ABOUTME: Demo sending raster images to a running wcat server
// ABOUTME: Shows the PNG default and an explicit JPEG upload

use anyhow::Result;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use wcat_client::raster;

fn gradient(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let r = (x * 255 / width) as u8;
        let b = (y * 255 / height) as u8;
        *pixel = Rgb([r, 109, b]);
    }
    DynamicImage::ImageRgb8(img)
}

fn main() -> Result<()> {
    env_logger::init();

    // Defaults to PNG.
    raster::show(&gradient(200, 60), "Gradient PNG", None)?;

    // JPEG compresses better for larger previews.
    raster::show(&gradient(400, 120), "Gradient JPEG", Some(ImageFormat::Jpeg))?;

    Ok(())
}
