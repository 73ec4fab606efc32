//! # AdsFlow
//!
//! An ad-creative automation pipeline for small-business social sellers:
//! product photos come in from a pluggable source, get re-cropped into the
//! two standard ad canvases, pick up AI-style marketing copy, and leave as
//! placement-ready bundles.
//!
//! # Architecture: Source → Process → Publish
//!
//! ```text
//! 1. Sync     PhotoSource  →  catalog.json + media/   (fetch, crop, record)
//! 2. Copy     Copywriter   →  catalog.json            (attach ad copy)
//! 3. Export   catalog      →  exports/                (placement-ready bundle)
//! ```
//!
//! The catalog manifest is human-readable JSON you can inspect between
//! commands, and every stage is exercised through the same library API the
//! CLI uses — unit tests drive pipeline logic without a network or a
//! workspace.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | Pluggable photo sources — demo feed and directory watcher |
//! | [`loader`] | Source reference resolution (URL / data URL / path) and decoding |
//! | [`imaging`] | Cover-fit crop geometry, rendering, JPEG encoding |
//! | [`process`] | Per-photo orchestration and the sync pipeline |
//! | [`copywriter`] | Ad-copy collaborator trait + offline implementation |
//! | [`state`] | Explicit app state, event reducer, catalog manifest IO |
//! | [`config`] | `adsflow.toml` loading and validation |
//! | [`export`] | Placement-ready bundle export |
//! | [`output`] | CLI output formatting — pure format functions |
//! | [`types`] | Shared types serialized into the catalog manifest |
//!
//! # Design Decisions
//!
//! ## Fixed Canvases
//!
//! Every placement uses exactly two crops: 1080×1080 feed and 1080×1920
//! story. These are constants, not configuration — ad platforms don't
//! negotiate, and a fixed pair keeps the output contract obvious. The
//! re-cropper itself ([`imaging::crop`]) takes any [`imaging::CropSpec`],
//! so adding a canvas later is a one-line change at the call site.
//!
//! ## Cover-Fit, Never Letterbox
//!
//! Product shots get scaled uniformly until they fill the canvas and the
//! overflow is trimmed around the center. Bars and distortion both kill ad
//! performance; symmetric center-cropping is the only fitting strategy the
//! pipeline offers. Transparent sources are flattened onto white.
//!
//! ## Events Over Ambient Mutation
//!
//! All catalog and channel state lives in one [`state::AppState`] value and
//! changes only through [`state::apply`] — current state plus an event in,
//! next state out. The CLI owns the value, loads it at startup, and saves
//! it on exit. No global containers, no mutation at a distance.
//!
//! ## Collaborators Behind Traits
//!
//! The two external capabilities — where photos come from
//! ([`source::PhotoSource`]) and who writes the copy
//! ([`copywriter::Copywriter`]) — are traits. The shipped implementations
//! (demo feed, directory watcher, template copywriter) are stand-ins a real
//! integration replaces without touching the pipeline.

pub mod config;
pub mod copywriter;
pub mod export;
pub mod imaging;
pub mod loader;
pub mod output;
pub mod process;
pub mod source;
pub mod state;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
