//! PNG input and output.
//!
//! Feature-gated behind `png` (default on) so builds that only need the
//! pure buffer path can drop the `image` crate. Writes plotted previews and
//! reads externally rasterized masks.

use std::path::Path;
use trail_engine_core::error::TrailError;
use trail_engine_core::mask::MaskBuffer;

/// Writes an RGBA8 buffer as a PNG image.
///
/// Returns `TrailError::InvalidDimensions` if the dimensions overflow `u32`,
/// `TrailError::Io` on a buffer/dimension mismatch or write failure.
pub fn write_png(width: usize, height: usize, rgba: &[u8], path: &Path) -> Result<(), TrailError> {
    let w = u32::try_from(width).map_err(|_| TrailError::InvalidDimensions)?;
    let h = u32::try_from(height).map_err(|_| TrailError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba.to_vec())
        .ok_or_else(|| TrailError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| TrailError::Io(e.to_string()))
}

/// Reads a PNG into a mask buffer, converting to RGBA8 if needed.
pub fn read_mask_png(path: &Path) -> Result<MaskBuffer, TrailError> {
    let img = image::open(path)
        .map_err(|e| TrailError::Io(e.to_string()))?
        .to_rgba8();
    let (w, h) = img.dimensions();
    MaskBuffer::new(w as usize, h as usize, img.into_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{plot_trajectories, PlotStyle};
    use crate::synth::soft_disc_mask;
    use trail_engine_core::TrailConfig;

    #[test]
    fn write_png_round_trip() {
        let rgba =
            plot_trajectories(&[], &TrailConfig::default(), 16, 16, &PlotStyle::default())
                .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");

        write_png(16, 16, &rgba, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
    }

    #[test]
    fn mask_survives_a_png_round_trip_byte_for_byte() {
        let mask = soft_disc_mask(32, 32, 0.8, 0.3).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");

        write_png(mask.width(), mask.height(), mask.data(), &path).unwrap();
        let back = read_mask_png(&path).unwrap();

        assert_eq!(back.width(), 32);
        assert_eq!(back.height(), 32);
        assert_eq!(back.data(), mask.data());
    }

    #[test]
    fn write_png_rejects_mismatched_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        let result = write_png(16, 16, &[0u8; 16], &path);
        assert!(matches!(result, Err(TrailError::Io(_))));
    }

    #[test]
    fn read_mask_png_reports_missing_files() {
        let result = read_mask_png(Path::new("/nonexistent/mask.png"));
        assert!(matches!(result, Err(TrailError::Io(_))));
    }
}
