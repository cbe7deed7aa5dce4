//! Composite flow field: value noise, curl noise, and the mask gradient.
//!
//! All three components read from one shared Perlin source; the curl is the
//! discrete curl of the same noise the value component samples, decorrelated
//! purely through the z coordinate. Evaluation is pure: the same config,
//! coordinate, layer, and mask always produce bit-identical displacement.

use crate::config::FieldConfig;
use crate::error::TrailError;
use crate::mask::{MaskBuffer, BOUNDARY_CHANNEL};
use crate::space::in_unit_square;
use glam::DVec2;
use noise::{NoiseFn, Perlin};

/// Mask byte value below which the gradient component switches off.
///
/// The feathered silhouette fades to black; past this point the shape has
/// no presence and exerts no force.
const ACTIVATION_THRESHOLD: u8 = 50;

/// z offset decorrelating the second value-noise axis from the first.
const AXIS_OFFSET: f64 = 100.0;

/// Construction seed of the shared Perlin source. Slice selection happens
/// entirely through the z coordinate, so the source itself stays fixed.
const PERLIN_SOURCE_SEED: u32 = 0;

/// Evaluates the combined displacement field over a mask.
///
/// Coordinates are normalized: the unit square spans the canvas. The noise
/// components extend past it; only the mask gradient is bounded.
pub struct FieldEvaluator<'a> {
    config: FieldConfig,
    perlin: Perlin,
    mask: &'a MaskBuffer,
}

impl<'a> FieldEvaluator<'a> {
    /// Creates an evaluator over the given mask.
    pub fn new(config: FieldConfig, mask: &'a MaskBuffer) -> Self {
        Self {
            config,
            perlin: Perlin::new(PERLIN_SOURCE_SEED),
            mask,
        }
    }

    fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.perlin.get([x, y, z])
    }

    /// Value-noise displacement; defined over the whole plane.
    ///
    /// The two axes sample the same slice stack at z and z + 100 so they
    /// wander independently.
    pub fn noise_displacement(&self, coord: DVec2, layer: f64) -> DVec2 {
        let c = &self.config;
        let sx = coord.x / c.noise_scale;
        let sy = coord.y / c.noise_scale;
        let z = c.noise_seed + layer;
        let dx = self.noise3(sx, sy, z);
        let dy = self.noise3(sx, sy, z + AXIS_OFFSET);
        DVec2::new(dx, dy) * c.noise_intensity
    }

    /// Curl-noise displacement; defined over the whole plane.
    ///
    /// Central differences of the shared source with the gradient rotated a
    /// quarter turn, so the flow follows iso-lines instead of climbing them.
    pub fn curl_displacement(&self, coord: DVec2, layer: f64) -> DVec2 {
        let c = &self.config;
        let sx = coord.x / c.curl_scale;
        let sy = coord.y / c.curl_scale;
        let z = c.curl_seed + layer;
        let d = c.sample_delta;
        let dn_dx = (self.noise3(sx + d, sy, z) - self.noise3(sx - d, sy, z)) / (2.0 * d);
        let dn_dy = (self.noise3(sx, sy + d, z) - self.noise3(sx, sy - d, z)) / (2.0 * d);
        DVec2::new(-dn_dy, dn_dx) * c.curl_intensity
    }

    /// Mask-gradient displacement at a normalized coordinate.
    ///
    /// Errors when the coordinate leaves the unit square — the mask has no
    /// values there, and silently clamping would bend trails along the
    /// canvas edges. Below the activation threshold the component is zero.
    pub fn mask_displacement(&self, coord: DVec2) -> Result<DVec2, TrailError> {
        let value = self.mask.sample(BOUNDARY_CHANNEL, coord)?;
        Ok(self.gradient_from(value, coord))
    }

    /// Sum of all three components; strict about the unit square like
    /// `mask_displacement`.
    pub fn displacement(&self, coord: DVec2, layer: f64) -> Result<DVec2, TrailError> {
        Ok(self.noise_displacement(coord, layer)
            + self.curl_displacement(coord, layer)
            + self.mask_displacement(coord)?)
    }

    /// Total displacement for integration: noise and curl everywhere, the
    /// mask gradient only where the coordinate can legally sample the
    /// buffer. Particles that leave the canvas keep drifting under coherent
    /// noise alone.
    pub fn drift(&self, coord: DVec2, layer: f64) -> DVec2 {
        let mut d = self.noise_displacement(coord, layer) + self.curl_displacement(coord, layer);
        if in_unit_square(coord) {
            let value = self.mask.sample_clamped(BOUNDARY_CHANNEL, coord);
            d += self.gradient_from(value, coord);
        }
        d
    }

    /// Symmetric-difference gradient of the boundary channel, one pixel per
    /// tap, normalized to byte range. The stencil's offset taps clamp at
    /// the mask edge; `value` is the already-sampled center value.
    fn gradient_from(&self, value: u8, coord: DVec2) -> DVec2 {
        if value < ACTIVATION_THRESHOLD {
            return DVec2::ZERO;
        }
        let dx = 1.0 / self.mask.width() as f64;
        let dy = 1.0 / self.mask.height() as f64;
        let right = self
            .mask
            .sample_clamped(BOUNDARY_CHANNEL, coord + DVec2::new(dx, 0.0));
        let left = self
            .mask
            .sample_clamped(BOUNDARY_CHANNEL, coord - DVec2::new(dx, 0.0));
        let below = self
            .mask
            .sample_clamped(BOUNDARY_CHANNEL, coord + DVec2::new(0.0, dy));
        let above = self
            .mask
            .sample_clamped(BOUNDARY_CHANNEL, coord - DVec2::new(0.0, dy));
        let grad = DVec2::new(
            (f64::from(right) - f64::from(left)) / 255.0,
            (f64::from(below) - f64::from(above)) / 255.0,
        );
        grad * self.config.blur_intensity
    }
}
