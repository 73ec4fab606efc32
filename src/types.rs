//! Shared types serialized into the catalog manifest.
//!
//! Everything the CLI persists between invocations lives in these types;
//! they must stay stable across commands reading the same `catalog.json`.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lifecycle of a catalog item, from receipt to placement-ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessStatus {
    Pending,
    Processing,
    Completed,
    /// The source could not be decoded; the item stays in the catalog,
    /// distinguishable and unprocessed.
    Failed,
}

/// Where a photo entered the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaOrigin {
    /// Pulled from the connected messaging channel feed.
    Channel,
    /// Picked up from a local directory.
    Upload,
}

/// Structured marketing copy produced by the copywriter collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCopy {
    /// Catchy headline.
    pub title: String,
    /// Body copy for the post.
    pub description: String,
    /// Unique selling points, at least one.
    pub selling_points: Vec<String>,
    /// Call to action.
    pub cta: String,
}

/// One product photo and everything derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    /// The reference the photo arrived as (URL, data URL, or path).
    pub original_url: String,
    pub origin: MediaOrigin,
    pub imported_at: DateTime<Utc>,
    pub status: ProcessStatus,
    /// File name of the 1:1 crop inside the workspace media directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_path: Option<String>,
    /// File name of the 9:16 crop inside the workspace media directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_copy: Option<AdCopy>,
}

/// Messaging-channel credential state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    pub bot_token: String,
    pub channel_id: String,
    pub connected: bool,
}

/// Generate a fresh 9-character lowercase alphanumeric media id.
pub fn new_media_id(rng: &mut impl Rng) -> String {
    rng.sample_iter(rand::distributions::Alphanumeric)
        .take(9)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}
