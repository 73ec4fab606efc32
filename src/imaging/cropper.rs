//! Cover-fit crop rendering and JPEG encoding.
//!
//! The single pixel-level transform in the pipeline: scale a decoded source
//! uniformly until it covers the target canvas, trim the overflow around the
//! center, flatten onto opaque white, and encode as JPEG.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Scale | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Center window | `image::imageops::crop_imm` |
//! | Flatten onto white | `image::imageops::overlay` (alpha blend) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` |

use super::calculations::cover_layout;
use super::params::{CropSpec, Quality};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image operation failed: {0}")]
    Image(#[from] image::ImageError),
}

/// An encoded crop result: JPEG bytes plus the recorded canvas dimensions.
///
/// Produced fresh on every [`crop`] call and owned by the caller — there is
/// no sharing or identity beyond the value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CroppedImage {
    width: u32,
    height: u32,
    jpeg: Vec<u8>,
}

impl CroppedImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_jpeg_bytes(&self) -> &[u8] {
        &self.jpeg
    }

    pub fn into_jpeg_bytes(self) -> Vec<u8> {
        self.jpeg
    }

    /// Render as a `data:image/jpeg;base64,` payload, ready to hand to a
    /// downstream collaborator or embed directly.
    pub fn to_data_url(&self) -> String {
        format!("data:image/jpeg;base64,{}", BASE64.encode(&self.jpeg))
    }

    /// Write the JPEG bytes to `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), CropError> {
        std::fs::write(path, &self.jpeg)?;
        Ok(())
    }

    /// Read a previously written crop back from disk.
    ///
    /// Dimensions come from the JPEG header; the pixel data is not decoded.
    pub fn read_jpeg(path: &Path) -> Result<Self, CropError> {
        let (width, height) = image::image_dimensions(path)?;
        let jpeg = std::fs::read(path)?;
        Ok(Self {
            width,
            height,
            jpeg,
        })
    }
}

/// Crop a decoded source image onto the spec's canvas.
///
/// Cover-fit, center-anchored: the source is scaled uniformly until it fully
/// covers the canvas, the overflow is trimmed symmetrically, and the result
/// is flattened onto opaque white (sources with transparency show white, not
/// black, behind them). The output always measures exactly
/// `spec.target_width × spec.target_height`.
///
/// Deterministic: the same source and spec produce byte-identical output.
pub fn crop(
    source: &DynamicImage,
    spec: CropSpec,
    quality: Quality,
) -> Result<CroppedImage, CropError> {
    let (target_w, target_h) = spec.dimensions();
    let layout = cover_layout((source.width(), source.height()), (target_w, target_h));

    let scaled = source
        .resize_exact(
            layout.scaled_width,
            layout.scaled_height,
            FilterType::Lanczos3,
        )
        .into_rgba8();
    let window =
        imageops::crop_imm(&scaled, layout.offset_x, layout.offset_y, target_w, target_h)
            .to_image();

    let mut canvas = RgbaImage::from_pixel(target_w, target_h, Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut canvas, &window, 0, 0);

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, quality.value() as u8);
    DynamicImage::ImageRgba8(canvas)
        .into_rgb8()
        .write_with_encoder(encoder)?;

    Ok(CroppedImage {
        width: target_w,
        height: target_h,
        jpeg,
    })
}
