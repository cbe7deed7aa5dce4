//! Pure rasterization of trajectories into an RGBA8 pixel buffer.
//!
//! A preview, not a print pipeline: each trajectory is stamped as a chain of
//! filled discs along its polyline, with no anti-aliasing. Stroke weight
//! varies per trail, seeded from the configuration, the same way every other
//! random decision in the system is seeded.

use glam::DVec2;
use trail_engine_core::error::TrailError;
use trail_engine_core::integrate::Trajectory;
use trail_engine_core::{rng, TrailConfig};

/// Spacing of disc stamps along a segment, in pixels.
const STAMP_SPACING: f64 = 0.5;

/// Background and stroke colors of a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotStyle {
    pub background: [u8; 4],
    pub stroke: [u8; 4],
}

impl Default for PlotStyle {
    /// Near-black background with an off-white stroke.
    fn default() -> Self {
        Self {
            background: [16, 16, 20, 255],
            stroke: [235, 235, 230, 255],
        }
    }
}

/// Stroke weight of the trajectory at `index`, in pixels.
///
/// The configured base weight plus a seeded share of the variability, so
/// re-renders of the same configuration produce identical line widths.
pub fn stroke_weight(config: &TrailConfig, index: usize) -> f64 {
    let seed = format!("{}#stroke#{index}", config.letter_or_shape_seed);
    config.stroke_base_weight + config.stroke_variability * rng::unit(&seed)
}

/// Rasterizes trajectories into a `width * height` RGBA8 buffer.
///
/// Trajectories are drawn in order, later ones over earlier ones. Points
/// outside the buffer are simply not stamped; a trajectory may dip in and
/// out of view.
pub fn plot_trajectories(
    trajectories: &[Trajectory],
    config: &TrailConfig,
    width: usize,
    height: usize,
    style: &PlotStyle,
) -> Result<Vec<u8>, TrailError> {
    if width == 0 || height == 0 {
        return Err(TrailError::InvalidDimensions);
    }
    let pixels = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or(TrailError::InvalidDimensions)?;

    let mut rgba = Vec::with_capacity(pixels);
    for _ in 0..width * height {
        rgba.extend_from_slice(&style.background);
    }

    for (index, trajectory) in trajectories.iter().enumerate() {
        let radius = stroke_weight(config, index) / 2.0;
        if let Some(&first) = trajectory.points().first() {
            stamp_disc(&mut rgba, width, height, first, radius, style.stroke);
        }
        for pair in trajectory.points().windows(2) {
            stamp_segment(&mut rgba, width, height, pair[0], pair[1], radius, style.stroke);
        }
    }
    Ok(rgba)
}

/// Stamps discs along the segment at sub-pixel spacing.
fn stamp_segment(
    rgba: &mut [u8],
    width: usize,
    height: usize,
    from: DVec2,
    to: DVec2,
    radius: f64,
    color: [u8; 4],
) {
    let steps = (from.distance(to) / STAMP_SPACING).ceil() as usize + 1;
    for k in 0..=steps {
        let t = k as f64 / steps as f64;
        stamp_disc(rgba, width, height, from.lerp(to, t), radius, color);
    }
}

/// Fills the pixels whose centers fall within `radius` of `center`.
fn stamp_disc(
    rgba: &mut [u8],
    width: usize,
    height: usize,
    center: DVec2,
    radius: f64,
    color: [u8; 4],
) {
    let r = radius.max(0.5);
    let min_x = ((center.x - r).floor() as i64).max(0);
    let max_x = ((center.x + r).ceil() as i64).min(width as i64 - 1);
    let min_y = ((center.y - r).floor() as i64).max(0);
    let max_y = ((center.y + r).ceil() as i64).min(height as i64 - 1);
    if min_x > max_x || min_y > max_y {
        return;
    }
    let r2 = r * r;
    for py in min_y..=max_y {
        for px in min_x..=max_x {
            let d = DVec2::new(px as f64 + 0.5, py as f64 + 0.5) - center;
            if d.length_squared() <= r2 {
                let idx = (py as usize * width + px as usize) * 4;
                rgba[idx..idx + 4].copy_from_slice(&color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trajectory(points: serde_json::Value) -> Trajectory {
        serde_json::from_value(points).unwrap()
    }

    fn pixel(rgba: &[u8], width: usize, px: usize, py: usize) -> [u8; 4] {
        let idx = (py * width + px) * 4;
        [rgba[idx], rgba[idx + 1], rgba[idx + 2], rgba[idx + 3]]
    }

    // -- Buffer shape --

    #[test]
    fn empty_plot_is_all_background() {
        let style = PlotStyle::default();
        let rgba = plot_trajectories(&[], &TrailConfig::default(), 8, 4, &style).unwrap();
        assert_eq!(rgba.len(), 8 * 4 * 4);
        for py in 0..4 {
            for px in 0..8 {
                assert_eq!(pixel(&rgba, 8, px, py), style.background);
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            plot_trajectories(&[], &TrailConfig::default(), 0, 4, &PlotStyle::default()),
            Err(TrailError::InvalidDimensions)
        ));
        assert!(matches!(
            plot_trajectories(&[], &TrailConfig::default(), 4, 0, &PlotStyle::default()),
            Err(TrailError::InvalidDimensions)
        ));
    }

    // -- Stroke placement --

    #[test]
    fn a_horizontal_trail_stamps_its_path() {
        let style = PlotStyle::default();
        let trail = trajectory(json!([[10.5, 10.5], [20.5, 10.5]]));
        let rgba =
            plot_trajectories(&[trail], &TrailConfig::default(), 32, 32, &style).unwrap();
        // Endpoints and a mid-path pixel carry the stroke color.
        assert_eq!(pixel(&rgba, 32, 10, 10), style.stroke);
        assert_eq!(pixel(&rgba, 32, 20, 10), style.stroke);
        assert_eq!(pixel(&rgba, 32, 15, 10), style.stroke);
        // Far corner stays background.
        assert_eq!(pixel(&rgba, 32, 31, 31), style.background);
    }

    #[test]
    fn off_canvas_points_are_skipped_not_fatal() {
        let style = PlotStyle::default();
        let trail = trajectory(json!([[-50.0, -50.0], [-40.0, -50.0]]));
        let rgba =
            plot_trajectories(&[trail], &TrailConfig::default(), 16, 16, &style).unwrap();
        for py in 0..16 {
            for px in 0..16 {
                assert_eq!(pixel(&rgba, 16, px, py), style.background);
            }
        }
    }

    // -- Determinism --

    #[test]
    fn identical_inputs_plot_identically() {
        let trail = trajectory(json!([[3.0, 3.0], [12.0, 9.0], [5.0, 14.0]]));
        let config = TrailConfig::default();
        let style = PlotStyle::default();
        let a = plot_trajectories(std::slice::from_ref(&trail), &config, 16, 16, &style).unwrap();
        let b = plot_trajectories(std::slice::from_ref(&trail), &config, 16, 16, &style).unwrap();
        assert_eq!(a, b);
    }

    // -- Stroke weight --

    #[test]
    fn stroke_weight_matches_the_seeded_spread() {
        let config = TrailConfig {
            letter_or_shape_seed: "demo".into(),
            stroke_base_weight: 1.0,
            stroke_variability: 1.0,
            ..TrailConfig::default()
        };
        // unit("demo#stroke#0") pinned by the core golden tests.
        let expected = 1.0 + 0.717_614_319_833_762;
        assert!((stroke_weight(&config, 0) - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_variability_pins_the_weight_to_the_base() {
        let config = TrailConfig {
            stroke_base_weight: 2.5,
            stroke_variability: 0.0,
            ..TrailConfig::default()
        };
        for index in 0..8 {
            assert_eq!(stroke_weight(&config, index), 2.5);
        }
    }

    #[test]
    fn stroke_weight_varies_per_trail() {
        let config = TrailConfig::default();
        assert_ne!(stroke_weight(&config, 0), stroke_weight(&config, 1));
    }
}
