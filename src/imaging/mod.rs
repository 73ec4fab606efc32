//! Image re-cropping — pure Rust, statically linked.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Cover layout** | `calculations` (pure math) |
//! | **Scale** | `image` Lanczos3 resampling |
//! | **Crop + flatten** | `image::imageops` |
//! | **Encode** | `image` JPEG encoder |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for cover-fit geometry (unit testable)
//! - **Parameters**: Data structures describing crop targets
//! - **Cropper**: The pixel-level transform and [`CroppedImage`]
//! - **Operations**: The square + story pair over one source

mod calculations;
mod cropper;
mod operations;
mod params;

pub use calculations::{CoverLayout, cover_layout};
pub use cropper::{CropError, CroppedImage, crop};
pub use operations::{CropPair, render_crop_pair};
pub use params::{CropSpec, Quality};
