//! Ad bundle export.
//!
//! Copies a completed item's crops out of the workspace under
//! placement-ready names and writes the rendered post text next to them:
//!
//! ```text
//! exports/
//! ├── ads_1x1_<id>.jpg      # feed placement
//! ├── ads_9x16_<id>.jpg     # story/reels placement
//! └── ads_post_<id>.txt     # full post text (when copy is attached)
//! ```

use crate::output::render_post_text;
use crate::types::MediaItem;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("item {0} has no processed crops to export")]
    MissingCrops(String),
}

/// Paths written by a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedBundle {
    pub square: PathBuf,
    pub story: PathBuf,
    /// Present only when the item has ad copy attached.
    pub post: Option<PathBuf>,
}

/// Export one item's ad bundle from `media_dir` into `out_dir`.
pub fn export_bundle(
    item: &MediaItem,
    media_dir: &Path,
    out_dir: &Path,
) -> Result<ExportedBundle, ExportError> {
    let (square_name, story_name) = match (&item.square_path, &item.story_path) {
        (Some(square), Some(story)) => (square, story),
        _ => return Err(ExportError::MissingCrops(item.id.clone())),
    };

    std::fs::create_dir_all(out_dir)?;

    let square = out_dir.join(format!("ads_1x1_{}.jpg", item.id));
    let story = out_dir.join(format!("ads_9x16_{}.jpg", item.id));
    std::fs::copy(media_dir.join(square_name), &square)?;
    std::fs::copy(media_dir.join(story_name), &story)?;

    let post = match &item.ad_copy {
        Some(copy) => {
            let path = out_dir.join(format!("ads_post_{}.txt", item.id));
            std::fs::write(&path, render_post_text(copy))?;
            Some(path)
        }
        None => None,
    };

    log::info!("exported bundle for {} to {}", item.id, out_dir.display());
    Ok(ExportedBundle {
        square,
        story,
        post,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_item;
    use crate::types::{AdCopy, ProcessStatus};

    fn completed_item(tmp: &Path) -> MediaItem {
        std::fs::write(tmp.join("abc-square.jpg"), b"square bytes").unwrap();
        std::fs::write(tmp.join("abc-story.jpg"), b"story bytes").unwrap();
        let mut item = sample_item("abc");
        item.status = ProcessStatus::Completed;
        item.square_path = Some("abc-square.jpg".into());
        item.story_path = Some("abc-story.jpg".into());
        item
    }

    #[test]
    fn exports_both_crops_under_placement_names() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("exports");
        let item = completed_item(tmp.path());

        let bundle = export_bundle(&item, tmp.path(), &out).unwrap();
        assert_eq!(bundle.square, out.join("ads_1x1_abc.jpg"));
        assert_eq!(bundle.story, out.join("ads_9x16_abc.jpg"));
        assert_eq!(bundle.post, None);
        assert_eq!(std::fs::read(&bundle.square).unwrap(), b"square bytes");
        assert_eq!(std::fs::read(&bundle.story).unwrap(), b"story bytes");
    }

    #[test]
    fn writes_post_text_when_copy_is_attached() {
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("exports");
        let mut item = completed_item(tmp.path());
        item.ad_copy = Some(AdCopy {
            title: "Headline".into(),
            description: "Body".into(),
            selling_points: vec!["Point".into()],
            cta: "Buy".into(),
        });

        let bundle = export_bundle(&item, tmp.path(), &out).unwrap();
        let post = bundle.post.unwrap();
        let text = std::fs::read_to_string(post).unwrap();
        assert_eq!(text, "Headline\n\nBody\n\n✅ Point\n\nBuy");
    }

    #[test]
    fn unprocessed_items_cannot_be_exported() {
        let tmp = tempfile::TempDir::new().unwrap();
        let item = sample_item("abc");
        let result = export_bundle(&item, tmp.path(), &tmp.path().join("exports"));
        assert!(matches!(result, Err(ExportError::MissingCrops(_))));
    }
}
