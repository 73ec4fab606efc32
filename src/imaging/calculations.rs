//! Pure calculation functions for cover-fit crop geometry.
//!
//! All functions here are pure and testable without any I/O or images.

/// Placement of a uniformly scaled source image on a target canvas.
///
/// Exactly one axis fits the canvas edge-to-edge; the other overflows and is
/// cropped symmetrically. `offset_x`/`offset_y` are the pixels trimmed from
/// the left/top (the same amount falls off the right/bottom, give or take
/// one pixel when the overflow is odd).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverLayout {
    /// Scaled source width. Always >= the target width.
    pub scaled_width: u32,
    /// Scaled source height. Always >= the target height.
    pub scaled_height: u32,
    /// Horizontal crop offset (left edge of the visible window).
    pub offset_x: u32,
    /// Vertical crop offset (top edge of the visible window).
    pub offset_y: u32,
}

/// Calculate the cover-fit layout for a source image on a target canvas.
///
/// Cover-fit scales the source uniformly until it fully covers the target
/// box, then crops the overflow symmetrically — never letterboxed, never
/// distorted. A source wider than the target aspect fits its height and
/// loses its flanks; a taller (or equal-aspect) source fits its width and
/// loses top and bottom.
///
/// # Arguments
/// * `source` - Decoded source dimensions (width, height), both non-zero
/// * `target` - Target canvas dimensions (width, height), both non-zero
///
/// # Examples
/// ```
/// # use adsflow::imaging::cover_layout;
/// // Square source on a square canvas: pure upscale, nothing cropped
/// let layout = cover_layout((800, 800), (1080, 1080));
/// assert_eq!((layout.scaled_width, layout.scaled_height), (1080, 1080));
/// assert_eq!((layout.offset_x, layout.offset_y), (0, 0));
///
/// // 4:3 source on a story canvas: height fits, flanks are cropped
/// let layout = cover_layout((1200, 900), (1080, 1920));
/// assert_eq!(layout.scaled_width, 2560);
/// assert_eq!(layout.offset_x, 740);
/// ```
pub fn cover_layout(source: (u32, u32), target: (u32, u32)) -> CoverLayout {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;

    if src_aspect > tgt_aspect {
        // Source is wider: height fits exactly, width overflows.
        let scale = tgt_h as f64 / src_h as f64;
        // Rounding must never leave the canvas uncovered.
        let scaled_w = ((src_w as f64 * scale).round() as u32).max(tgt_w);
        CoverLayout {
            scaled_width: scaled_w,
            scaled_height: tgt_h,
            offset_x: (scaled_w - tgt_w) / 2,
            offset_y: 0,
        }
    } else {
        // Source is taller or equal-aspect: width fits exactly, height overflows.
        let scale = tgt_w as f64 / src_w as f64;
        let scaled_h = ((src_h as f64 * scale).round() as u32).max(tgt_h);
        CoverLayout {
            scaled_width: tgt_w,
            scaled_height: scaled_h,
            offset_x: 0,
            offset_y: (scaled_h - tgt_h) / 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_source_on_square_canvas_is_pure_upscale() {
        // 800x800 → 1080x1080: aspects match, no cropping needed
        let layout = cover_layout((800, 800), (1080, 1080));
        assert_eq!(layout.scaled_width, 1080);
        assert_eq!(layout.scaled_height, 1080);
        assert_eq!(layout.offset_x, 0);
        assert_eq!(layout.offset_y, 0);
    }

    #[test]
    fn wide_source_on_square_canvas_crops_flanks() {
        // 1600x800 (2:1) → 1080x1080: scale 1.35, scaled width 2160,
        // 540px trimmed from each side
        let layout = cover_layout((1600, 800), (1080, 1080));
        assert_eq!(layout.scaled_width, 2160);
        assert_eq!(layout.scaled_height, 1080);
        assert_eq!(layout.offset_x, 540);
        assert_eq!(layout.offset_y, 0);
    }

    #[test]
    fn landscape_source_on_story_canvas() {
        // 1200x900 (4:3) → 1080x1920: source aspect (1.33) beats the story
        // aspect (0.5625), so height fits 1920 and width scales to 2560,
        // trimming 740px from each flank
        let layout = cover_layout((1200, 900), (1080, 1920));
        assert_eq!(layout.scaled_width, 2560);
        assert_eq!(layout.scaled_height, 1920);
        assert_eq!(layout.offset_x, 740);
        assert_eq!(layout.offset_y, 0);
    }

    #[test]
    fn tall_source_on_square_canvas_crops_top_and_bottom() {
        // 600x800 (3:4) → 1080x1080: width fits, scaled height 1440,
        // 180px trimmed top and bottom
        let layout = cover_layout((600, 800), (1080, 1080));
        assert_eq!(layout.scaled_width, 1080);
        assert_eq!(layout.scaled_height, 1440);
        assert_eq!(layout.offset_x, 0);
        assert_eq!(layout.offset_y, 180);
    }

    #[test]
    fn story_source_on_story_canvas_is_exact() {
        let layout = cover_layout((540, 960), (1080, 1920));
        assert_eq!(layout.scaled_width, 1080);
        assert_eq!(layout.scaled_height, 1920);
        assert_eq!(layout.offset_x, 0);
        assert_eq!(layout.offset_y, 0);
    }

    #[test]
    fn downscales_oversized_sources() {
        // 4000x4000 → 1080x1080: cover-fit shrinks as well as enlarges
        let layout = cover_layout((4000, 4000), (1080, 1080));
        assert_eq!(layout.scaled_width, 1080);
        assert_eq!(layout.scaled_height, 1080);
    }

    #[test]
    fn odd_overflow_floors_the_offset() {
        // 301x100 → 100x100: scaled width 301, overflow 201, offset 100
        let layout = cover_layout((301, 100), (100, 100));
        assert_eq!(layout.scaled_width, 301);
        assert_eq!(layout.offset_x, 100);
    }

    proptest! {
        /// The scaled image always covers the canvas, with one axis fitting
        /// edge-to-edge.
        #[test]
        fn scaled_dimensions_cover_the_canvas(
            src_w in 1u32..4000,
            src_h in 1u32..4000,
            tgt_w in 1u32..2000,
            tgt_h in 1u32..2000,
        ) {
            let layout = cover_layout((src_w, src_h), (tgt_w, tgt_h));
            prop_assert!(layout.scaled_width >= tgt_w);
            prop_assert!(layout.scaled_height >= tgt_h);
            prop_assert!(layout.scaled_width == tgt_w || layout.scaled_height == tgt_h);
        }

        /// Scaling is uniform: both axes use the same scale factor, so the
        /// scaled aspect matches the source aspect up to rounding.
        #[test]
        fn scaling_is_uniform(
            src_w in 1u32..4000,
            src_h in 1u32..4000,
            tgt_w in 1u32..2000,
            tgt_h in 1u32..2000,
        ) {
            let layout = cover_layout((src_w, src_h), (tgt_w, tgt_h));
            let sx = layout.scaled_width as f64 / src_w as f64;
            let sy = layout.scaled_height as f64 / src_h as f64;
            // One rounded pixel of slack on the overflowing axis
            let tolerance = 1.0 / src_w.min(src_h) as f64;
            prop_assert!((sx - sy).abs() <= tolerance, "sx={} sy={}", sx, sy);
        }

        /// The crop is centered: the visible window sits at half the overflow.
        #[test]
        fn crop_is_centered(
            src_w in 1u32..4000,
            src_h in 1u32..4000,
            tgt_w in 1u32..2000,
            tgt_h in 1u32..2000,
        ) {
            let layout = cover_layout((src_w, src_h), (tgt_w, tgt_h));
            prop_assert_eq!(layout.offset_x, (layout.scaled_width - tgt_w) / 2);
            prop_assert_eq!(layout.offset_y, (layout.scaled_height - tgt_h) / 2);
        }
    }
}
