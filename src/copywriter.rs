//! Ad-copy generation behind a collaborator trait.
//!
//! The pipeline never talks to a copy service directly — it depends on
//! [`Copywriter`], which takes a product name and optionally one encoded
//! crop and returns structured [`AdCopy`]. That keeps the generation
//! backend swappable (hosted model, local model, canned templates) without
//! touching calling code.
//!
//! The implementation shipped here is [`TemplateCopywriter`]: deterministic,
//! offline, good enough to exercise the whole pipeline end to end.

use crate::imaging::CroppedImage;
use crate::types::AdCopy;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("product name is empty")]
    EmptyProductName,
    #[error("copy generation failed: {0}")]
    Backend(String),
}

/// Collaborator contract for ad-copy generation.
///
/// Given a product name and at most one encoded product image, produce a
/// complete copy block: headline, body, at least one selling point, and a
/// call to action. Implementations may ignore the image.
pub trait Copywriter {
    fn generate(
        &self,
        product_name: &str,
        image: Option<&CroppedImage>,
    ) -> Result<AdCopy, CopyError>;
}

/// Offline copywriter that fills a fixed copy skeleton with the product
/// name. Deterministic: the same name always yields the same copy.
pub struct TemplateCopywriter;

impl Copywriter for TemplateCopywriter {
    fn generate(
        &self,
        product_name: &str,
        _image: Option<&CroppedImage>,
    ) -> Result<AdCopy, CopyError> {
        let name = product_name.trim();
        if name.is_empty() {
            return Err(CopyError::EmptyProductName);
        }

        Ok(AdCopy {
            title: format!("{name}: Your New Favorite Is Here"),
            description: format!(
                "Meet {name}: the upgrade your customers keep asking about. \
                 Limited stock this week, so don't sit on it."
            ),
            selling_points: vec![
                format!("Premium quality {name} at a small-business price"),
                "Ships within 24 hours".to_string(),
                "Loved by repeat customers".to_string(),
            ],
            cta: "Order now before stock runs out".to_string(),
        })
    }
}
