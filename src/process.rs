//! Photo processing and the sync pipeline.
//!
//! [`Processor::process`] is the per-photo unit of work: decode one source
//! reference, then render the square and story crops. It fails as a unit —
//! a photo that cannot be decoded produces neither crop, and there is no
//! retry and no partial output.
//!
//! [`sync`] drives a whole batch: poll a [`PhotoSource`], process each
//! incoming photo in turn, write the crops into the workspace media
//! directory, and record one [`MediaItem`] per photo. A photo that fails to
//! decode becomes a `Failed` item — still visible in the catalog, clearly
//! unprocessed — and never aborts the rest of the batch.
//!
//! Photos are processed one at a time, in arrival order. Each `process`
//! call owns its decoded image and drops it as soon as the crops exist.

use crate::copywriter::{CopyError, Copywriter};
use crate::imaging::{CropError, CropPair, CroppedImage, Quality, render_crop_pair};
use crate::loader::{LoadError, Loader, SourceRef};
use crate::source::{PhotoSource, SourceError};
use crate::types::{AdCopy, MediaItem, MediaOrigin, ProcessStatus, new_media_id};
use chrono::Utc;
use rand::Rng;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("could not decode source image: {0}")]
    Decode(#[from] LoadError),
    #[error(transparent)]
    Crop(#[from] CropError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Copy(#[from] CopyError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Decodes photos and renders their placement crops.
pub struct Processor {
    loader: Loader,
    quality: Quality,
}

impl Processor {
    pub fn new(quality: Quality) -> Self {
        Self {
            loader: Loader::new(),
            quality,
        }
    }

    /// Decode `source` and render both placement crops.
    ///
    /// Both-or-neither: decoding failure rejects the whole operation, and a
    /// successful decode always yields the full pair.
    pub fn process(&self, source: &SourceRef) -> Result<CropPair, ProcessError> {
        let image = self.loader.load(source)?;
        Ok(render_crop_pair(&image, self.quality)?)
    }
}

/// Poll `source` once and process everything it yields.
///
/// Returns the new catalog items, newest batch in arrival order. Crops are
/// written as `{id}-square.jpg` / `{id}-story.jpg` under `media_dir`.
pub fn sync(
    source: &mut dyn PhotoSource,
    processor: &Processor,
    origin: MediaOrigin,
    media_dir: &Path,
    rng: &mut impl Rng,
) -> Result<Vec<MediaItem>, ProcessError> {
    std::fs::create_dir_all(media_dir)?;
    let photos = source.poll()?;
    log::info!("received {} photo(s)", photos.len());

    let mut items = Vec::with_capacity(photos.len());
    for photo in photos {
        let id = new_media_id(rng);
        let source_ref = SourceRef::parse(&photo.url);

        let mut item = MediaItem {
            id: id.clone(),
            original_url: photo.url,
            origin,
            imported_at: Utc::now(),
            status: ProcessStatus::Processing,
            square_path: None,
            story_path: None,
            product_name: photo.suggested_name,
            ad_copy: None,
        };

        match processor.process(&source_ref) {
            Ok(pair) => {
                let square_name = format!("{id}-square.jpg");
                let story_name = format!("{id}-story.jpg");
                pair.square.write_to(&media_dir.join(&square_name))?;
                pair.story.write_to(&media_dir.join(&story_name))?;
                item.square_path = Some(square_name);
                item.story_path = Some(story_name);
                item.status = ProcessStatus::Completed;
            }
            Err(err) => {
                log::warn!("processing {} failed: {}", source_ref, err);
                item.status = ProcessStatus::Failed;
            }
        }
        items.push(item);
    }

    Ok(items)
}

/// Generate ad copy for a catalog item.
///
/// When the item has a processed square crop, it is read back and handed to
/// the copywriter so image-aware backends can see the product; items without
/// crops get name-only generation.
pub fn generate_copy(
    copywriter: &impl Copywriter,
    item: &MediaItem,
    media_dir: &Path,
    product_name: &str,
) -> Result<AdCopy, ProcessError> {
    let image = match &item.square_path {
        Some(path) => Some(CroppedImage::read_jpeg(&media_dir.join(path))?),
        None => None,
    };
    Ok(copywriter.generate(product_name, image.as_ref())?)
}
