//! Pluggable photo sources.
//!
//! New product photos enter the pipeline through the [`PhotoSource`]
//! capability: something that yields freshly received `{url, name}` pairs on
//! demand. The sync command only ever talks to the trait, so the demo feed
//! and a real integration swap without touching calling code.
//!
//! Two implementations ship:
//! - [`SampleFeed`] — a seedable demo feed over a small built-in catalog,
//!   standing in for a messaging-channel webhook
//! - [`DirectorySource`] — picks up image files dropped into a local folder

use rand::rngs::SmallRng;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to walk {path:?}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// A newly received product photo, before any processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingPhoto {
    /// Source reference: remote URL, data URL, or local path.
    pub url: String,
    /// Product name suggested by the source, if it has one.
    pub suggested_name: Option<String>,
}

/// A capability that yields newly received product photos on demand.
///
/// `poll` returns the photos that arrived since the last poll; an empty
/// vector means nothing new. Implementations keep whatever bookkeeping they
/// need to avoid re-yielding the same photo.
pub trait PhotoSource {
    fn poll(&mut self) -> Result<Vec<IncomingPhoto>, SourceError>;
}

/// Demo catalog the sample feed draws from.
const SAMPLE_PRODUCTS: &[(&str, &str)] = &[
    ("https://picsum.photos/seed/shoes/800/800", "Trail Running Shoes"),
    ("https://picsum.photos/seed/bag/600/800", "Leather Handbag"),
    ("https://picsum.photos/seed/watch/1200/900", "Smart Watch Pro"),
    ("https://picsum.photos/seed/skincare/800/800", "Glow Face Serum"),
];

/// Demo feed simulating a messaging-channel webhook: each poll "receives"
/// one or two random products from the built-in catalog.
///
/// Seedable so tests (and reproducible demos) get a fixed sequence.
pub struct SampleFeed {
    rng: SmallRng,
}

impl SampleFeed {
    pub fn new() -> Self {
        Self::seeded(rand::thread_rng().r#gen())
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for SampleFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoSource for SampleFeed {
    fn poll(&mut self) -> Result<Vec<IncomingPhoto>, SourceError> {
        let count = self.rng.gen_range(1..=2);
        let picks = SAMPLE_PRODUCTS
            .iter()
            .choose_multiple(&mut self.rng, count);
        let mut photos: Vec<IncomingPhoto> = picks
            .into_iter()
            .map(|(url, name)| IncomingPhoto {
                url: (*url).to_string(),
                suggested_name: Some((*name).to_string()),
            })
            .collect();
        // choose_multiple preserves catalog order; the feed should not
        photos.shuffle(&mut self.rng);
        log::debug!("sample feed yielded {} photo(s)", photos.len());
        Ok(photos)
    }
}

/// Extensions the directory source picks up.
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Photo source over a local directory: each poll yields image files that
/// have not been yielded before, in path order.
pub struct DirectorySource {
    root: PathBuf,
    seen: HashSet<PathBuf>,
}

impl DirectorySource {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            seen: HashSet::new(),
        }
    }

    /// Pre-mark references already in the catalog so a fresh process does
    /// not re-import them.
    pub fn mark_seen<I: IntoIterator<Item = PathBuf>>(&mut self, paths: I) {
        self.seen.extend(paths);
    }

    fn is_photo(path: &std::path::Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| PHOTO_EXTENSIONS.iter().any(|p| e.eq_ignore_ascii_case(p)))
    }

    /// Derive a product name from the file stem: dashes and underscores
    /// become spaces.
    fn name_from_stem(path: &std::path::Path) -> Option<String> {
        let stem = path.file_stem()?.to_str()?;
        Some(stem.replace(['-', '_'], " "))
    }
}

impl PhotoSource for DirectorySource {
    fn poll(&mut self) -> Result<Vec<IncomingPhoto>, SourceError> {
        let mut fresh = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|source| SourceError::Walk {
                path: self.root.clone(),
                source,
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || !Self::is_photo(path) {
                continue;
            }
            if self.seen.insert(path.to_path_buf()) {
                fresh.push(IncomingPhoto {
                    url: path.display().to_string(),
                    suggested_name: Self::name_from_stem(path),
                });
            }
        }
        log::debug!(
            "directory source found {} new photo(s) under {}",
            fresh.len(),
            self.root.display()
        );
        Ok(fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::write_test_jpeg;

    #[test]
    fn sample_feed_yields_one_or_two_known_products() {
        let mut feed = SampleFeed::seeded(42);
        for _ in 0..10 {
            let photos = feed.poll().unwrap();
            assert!((1..=2).contains(&photos.len()));
            for photo in &photos {
                assert!(
                    SAMPLE_PRODUCTS
                        .iter()
                        .any(|(url, _)| *url == photo.url),
                    "unknown url {}",
                    photo.url
                );
                assert!(photo.suggested_name.is_some());
            }
        }
    }

    #[test]
    fn sample_feed_never_repeats_within_a_poll() {
        let mut feed = SampleFeed::seeded(7);
        for _ in 0..20 {
            let photos = feed.poll().unwrap();
            if photos.len() == 2 {
                assert_ne!(photos[0].url, photos[1].url);
            }
        }
    }

    #[test]
    fn seeded_feeds_are_reproducible() {
        let mut first = SampleFeed::seeded(99);
        let mut second = SampleFeed::seeded(99);
        let a: Vec<_> = (0..5).flat_map(|_| first.poll().unwrap()).collect();
        let b: Vec<_> = (0..5).flat_map(|_| second.poll().unwrap()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn directory_source_yields_each_photo_once() {
        let tmp = tempfile::TempDir::new().unwrap();
        write_test_jpeg(&tmp.path().join("red-sneakers.jpg"), 20, 20);
        write_test_jpeg(&tmp.path().join("tote_bag.jpg"), 20, 20);
        std::fs::write(tmp.path().join("notes.txt"), "not a photo").unwrap();

        let mut source = DirectorySource::new(tmp.path().to_path_buf());
        let first = source.poll().unwrap();
        assert_eq!(first.len(), 2);
        let names: Vec<_> = first
            .iter()
            .map(|p| p.suggested_name.clone().unwrap())
            .collect();
        assert_eq!(names, ["red sneakers", "tote bag"]);

        // Nothing new: second poll is empty
        assert!(source.poll().unwrap().is_empty());

        // A new drop shows up on the next poll
        write_test_jpeg(&tmp.path().join("zen-candle.png"), 20, 20);
        let third = source.poll().unwrap();
        assert_eq!(third.len(), 1);
        assert_eq!(third[0].suggested_name.as_deref(), Some("zen candle"));
    }

    #[test]
    fn mark_seen_suppresses_already_cataloged_photos() {
        let tmp = tempfile::TempDir::new().unwrap();
        let known = tmp.path().join("known.jpg");
        write_test_jpeg(&known, 20, 20);
        write_test_jpeg(&tmp.path().join("new.jpg"), 20, 20);

        let mut source = DirectorySource::new(tmp.path().to_path_buf());
        source.mark_seen([known]);
        let photos = source.poll().unwrap();
        assert_eq!(photos.len(), 1);
        assert!(photos[0].url.ends_with("new.jpg"));
    }
}
