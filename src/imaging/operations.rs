//! High-level crop operations.
//!
//! Combines the fixed ad canvases with the cropper: one decoded source in,
//! the full set of placement-ready crops out.

use super::cropper::{CropError, CroppedImage, crop};
use super::params::{CropSpec, Quality};
use image::DynamicImage;

/// The two placement crops every catalog item carries.
#[derive(Debug, Clone)]
pub struct CropPair {
    /// 1:1 feed crop (1080×1080).
    pub square: CroppedImage,
    /// 9:16 story crop (1080×1920).
    pub story: CroppedImage,
}

/// Render the square and story crops for one decoded source.
///
/// The two crops are independent: each is a separate pass over the source,
/// neither affects the other, and their order is irrelevant. There are no
/// partial results — an error from either pass discards both.
pub fn render_crop_pair(source: &DynamicImage, quality: Quality) -> Result<CropPair, CropError> {
    let square = crop(source, CropSpec::SQUARE, quality)?;
    let story = crop(source, CropSpec::STORY, quality)?;
    Ok(CropPair { square, story })
}
