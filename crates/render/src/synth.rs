//! Synthetic masks for demos and tests.
//!
//! The real system is handed a rasterized, blurred glyph; this module
//! builds a comparable stand-in — a centered disc with a feathered edge —
//! without any text or image dependencies.

use glam::DVec2;
use trail_engine_core::error::TrailError;
use trail_engine_core::mask::MaskBuffer;

/// Builds a centered feathered disc, written identically to R, G, and B
/// with full alpha.
///
/// `radius_frac` sizes the disc as a fraction of the inscribed circle;
/// `feather_frac` is the fraction of the radius over which the value falls
/// smoothly from 255 to 0 (0 gives a hard edge).
pub fn soft_disc_mask(
    width: usize,
    height: usize,
    radius_frac: f64,
    feather_frac: f64,
) -> Result<MaskBuffer, TrailError> {
    let center = DVec2::new(width as f64 / 2.0, height as f64 / 2.0);
    let radius = radius_frac * width.min(height) as f64 / 2.0;
    let inner = radius * (1.0 - feather_frac);
    let band = radius - inner;

    MaskBuffer::from_fn(width, height, |x, y| {
        let d = DVec2::new(x as f64 + 0.5, y as f64 + 0.5).distance(center);
        let t = if d <= inner {
            1.0
        } else if d >= radius || band <= 0.0 {
            0.0
        } else {
            (radius - d) / band
        };
        let s = t * t * (3.0 - 2.0 * t);
        let v = (s * 255.0).round() as u8;
        [v, v, v, 255]
    })
}
