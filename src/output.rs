//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every catalog item is its semantic identity — positional index and
//! product name — with source references and file names shown as secondary
//! context via indented lines.
//!
//! Each concern has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::state::CatalogStats;
use crate::types::{AdCopy, ChannelConfig, MediaItem, ProcessStatus};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format an item header: positional index + product name, falling back to
/// the media id when the item is unnamed.
///
/// ```text
/// 001 Trail Running Shoes
/// 002 (k9dkk2l1x)
/// ```
fn item_header(index: usize, item: &MediaItem) -> String {
    match item.product_name.as_deref() {
        Some(name) if !name.is_empty() => format!("{} {}", format_index(index), name),
        _ => format!("{} ({})", format_index(index), item.id),
    }
}

fn status_label(status: ProcessStatus) -> &'static str {
    match status {
        ProcessStatus::Pending => "pending",
        ProcessStatus::Processing => "processing",
        ProcessStatus::Completed => "completed",
        ProcessStatus::Failed => "failed",
    }
}

/// Format the result of a sync run: one entity block per received photo.
pub fn format_sync_output(items: &[MediaItem]) -> Vec<String> {
    if items.is_empty() {
        return vec!["No new photos.".to_string()];
    }

    let mut lines = vec![format!("{} new photo(s)", items.len())];
    for (pos, item) in items.iter().enumerate() {
        lines.push(item_header(pos + 1, item));
        lines.push(format!("    Source: {}", item.original_url));
        match (&item.square_path, &item.story_path) {
            (Some(square), Some(story)) => {
                lines.push(format!("    square: {}", square));
                lines.push(format!("    story: {}", story));
            }
            _ => lines.push(format!("    status: {}", status_label(item.status))),
        }
    }
    lines
}

/// Format the catalog listing.
pub fn format_catalog_output(items: &[MediaItem]) -> Vec<String> {
    if items.is_empty() {
        return vec!["Catalog is empty. Run `adsflow sync` to pull photos.".to_string()];
    }

    let mut lines = vec![format!("{} item(s)", items.len())];
    for (pos, item) in items.iter().enumerate() {
        let copy_marker = if item.ad_copy.is_some() {
            "  [copy ready]"
        } else {
            ""
        };
        lines.push(format!(
            "{}  {}{}",
            item_header(pos + 1, item),
            status_label(item.status),
            copy_marker
        ));
        lines.push(format!("    Id: {}", item.id));
        lines.push(format!("    Source: {}", item.original_url));
    }
    lines
}

/// Format the dashboard summary: catalog counts plus channel state.
pub fn format_status_output(stats: &CatalogStats, channel: &ChannelConfig) -> Vec<String> {
    let mut lines = vec![
        "Catalog".to_string(),
        format!("    {} photo(s) imported", stats.total),
        format!("    {} processed", stats.completed),
        format!("    {} failed", stats.failed),
        format!("    {} with ad copy", stats.with_copy),
        "Channel".to_string(),
    ];
    if channel.connected {
        lines.push(format!("    {} (connected)", channel.channel_id));
    } else {
        lines.push("    not connected".to_string());
    }
    lines
}

/// Render the complete post text for an ad: headline, body, one line per
/// selling point, then the call to action.
pub fn render_post_text(copy: &AdCopy) -> String {
    let points = copy
        .selling_points
        .iter()
        .map(|p| format!("✅ {}", p))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "{}\n\n{}\n\n{}\n\n{}",
        copy.title, copy.description, points, copy.cta
    )
}

pub fn print_sync_output(items: &[MediaItem]) {
    for line in format_sync_output(items) {
        println!("{}", line);
    }
}

pub fn print_catalog_output(items: &[MediaItem]) {
    for line in format_catalog_output(items) {
        println!("{}", line);
    }
}

pub fn print_status_output(stats: &CatalogStats, channel: &ChannelConfig) {
    for line in format_status_output(stats, channel) {
        println!("{}", line);
    }
}
