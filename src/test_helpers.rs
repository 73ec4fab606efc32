//! Shared test utilities for the adsflow test suite.
//!
//! Synthetic image builders (no fixture files needed) and catalog item
//! factories used across the per-module test suites.

use crate::types::{MediaItem, MediaOrigin, ProcessStatus};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use image::{DynamicImage, ImageEncoder, Rgb, RgbImage};
use std::path::Path;

/// A gradient test image: every pixel depends on its coordinates, so crops
/// from different regions differ.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    }))
}

/// A single-color test image.
pub fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)))
}

/// Write a small valid JPEG file with the given dimensions.
pub fn write_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient_image(width, height).into_rgb8();
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Encode a synthetic PNG as a `data:image/png;base64,` URL.
pub fn png_data_url(width: u32, height: u32) -> String {
    let mut png = Vec::new();
    gradient_image(width, height)
        .write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageFormat::Png,
        )
        .unwrap();
    format!("data:image/png;base64,{}", BASE64.encode(&png))
}

/// A pending catalog item with the given id and no derived data.
pub fn sample_item(id: &str) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        original_url: format!("https://example.com/{id}.jpg"),
        origin: MediaOrigin::Channel,
        imported_at: Utc::now(),
        status: ProcessStatus::Pending,
        square_path: None,
        story_path: None,
        product_name: None,
        ad_copy: None,
    }
}
