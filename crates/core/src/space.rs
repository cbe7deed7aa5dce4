//! Sampling rectangle and coordinate-space conversions.
//!
//! The generator works in two spaces: world pixels (sampling, integration,
//! output geometry) and the normalized unit square (mask lookups, noise
//! evaluation). `Extent` owns the conversion between them.

use crate::error::TrailError;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A positive, finite rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    width: f64,
    height: f64,
}

impl Extent {
    /// Creates an extent, rejecting zero, negative, or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self, TrailError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(TrailError::InvalidDimensions);
        }
        Ok(Self { width, height })
    }

    /// Width in world units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height in world units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The center point of the rectangle.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// The corner-to-corner diagonal length.
    pub fn diagonal(&self) -> f64 {
        DVec2::new(self.width, self.height).length()
    }

    /// Maps a world-space point into the unit square (component-wise divide).
    ///
    /// Points outside the rectangle map outside [0, 1]^2; no clamping.
    pub fn normalize(&self, p: DVec2) -> DVec2 {
        DVec2::new(p.x / self.width, p.y / self.height)
    }

    /// Whether a world-space point lies inside the rectangle.
    ///
    /// Half-open on the far edges so every contained point maps to a valid
    /// grid cell and pixel index.
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

/// Whether a normalized point lies in the closed unit square.
pub fn in_unit_square(p: DVec2) -> bool {
    (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y)
}
