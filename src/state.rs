//! Application state and its transition functions.
//!
//! All catalog and channel state lives in one explicit [`AppState`] value
//! owned by the CLI layer. Nothing mutates it in place from a distance:
//! every change is an [`Event`] put through [`apply`], which takes the
//! current state and returns the next one. That keeps transitions pure,
//! testable, and easy to trace.
//!
//! Between invocations the state is serialized to `catalog.json` inside the
//! workspace directory.

use crate::types::{AdCopy, ChannelConfig, MediaItem, ProcessStatus};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The whole of the application's persistent state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub channel: ChannelConfig,
    /// Newest items first.
    pub catalog: Vec<MediaItem>,
}

/// A state transition. Every mutation of [`AppState`] is one of these.
#[derive(Debug, Clone)]
pub enum Event {
    /// Channel credentials entered. An empty token drops the connection
    /// instead of establishing one.
    ChannelConnected {
        bot_token: String,
        channel_id: String,
    },
    ChannelDisconnected,
    /// A processed batch arrived; items are prepended, newest first.
    PhotosImported(Vec<MediaItem>),
    ProductRenamed { id: String, name: String },
    CopyAttached { id: String, copy: AdCopy },
    MediaRemoved { id: String },
}

/// Apply one event to the state, returning the next state.
///
/// Events referencing an unknown item id are no-ops.
pub fn apply(state: AppState, event: Event) -> AppState {
    let AppState {
        mut channel,
        mut catalog,
    } = state;

    match event {
        Event::ChannelConnected {
            bot_token,
            channel_id,
        } => {
            if bot_token.is_empty() {
                channel.connected = false;
            } else {
                channel = ChannelConfig {
                    bot_token,
                    channel_id,
                    connected: true,
                };
            }
        }
        Event::ChannelDisconnected => {
            channel.connected = false;
        }
        Event::PhotosImported(items) => {
            let mut merged = items;
            merged.append(&mut catalog);
            catalog = merged;
        }
        Event::ProductRenamed { id, name } => {
            if let Some(item) = catalog.iter_mut().find(|m| m.id == id) {
                item.product_name = Some(name);
            }
        }
        Event::CopyAttached { id, copy } => {
            if let Some(item) = catalog.iter_mut().find(|m| m.id == id) {
                item.ad_copy = Some(copy);
            }
        }
        Event::MediaRemoved { id } => {
            catalog.retain(|m| m.id != id);
        }
    }

    AppState { channel, catalog }
}

/// Dashboard counts derived from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
    pub with_copy: usize,
}

impl AppState {
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            total: self.catalog.len(),
            completed: self
                .catalog
                .iter()
                .filter(|m| m.status == ProcessStatus::Completed)
                .count(),
            failed: self
                .catalog
                .iter()
                .filter(|m| m.status == ProcessStatus::Failed)
                .count(),
            with_copy: self.catalog.iter().filter(|m| m.ad_copy.is_some()).count(),
        }
    }

    pub fn find(&self, id: &str) -> Option<&MediaItem> {
        self.catalog.iter().find(|m| m.id == id)
    }

    /// Load the state manifest, or start fresh if none exists yet.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
