//! Run configuration for the trail generator.
//!
//! Mirrors the options record the surrounding tooling passes in: a loose
//! JSON object with camelCase keys. Unknown keys are ignored and every
//! option has a documented default, so any record — including `{}` — yields
//! a usable configuration. Validation of the values themselves happens
//! separately in `validate`, at the point a generator is built.

use crate::error::TrailError;
use crate::mask::MaskFilter;
use crate::params::{param_bool, param_f64, param_seed, param_usize};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Seed used when the configuration does not name one.
pub const DEFAULT_SEED: &str = "default-seed";

/// Number of integration steps per trail.
pub const DEFAULT_FRAMES_QUANTITY: usize = 25;

/// Minimum separation between sampled trail origins, in pixels.
pub const DEFAULT_POISSON_DISC_RADIUS: f64 = 12.0;

/// Candidate attempts per anchor before the sampler retires it.
pub const DEFAULT_MAX_TRY: usize = 25;

/// Base z offset selecting the value-noise slice.
pub const DEFAULT_NOISE_SEED: f64 = 100.0;

/// Base z offset selecting the curl-noise slice.
pub const DEFAULT_CURL_SEED: f64 = 10.0;

/// Strength of the curl component of the flow field.
pub const DEFAULT_CURL_INTENSITY: f64 = 0.8;

/// Spatial frequency divisor of the curl component.
pub const DEFAULT_CURL_SCALE: f64 = 0.5;

/// Strength of the value-noise component of the flow field.
pub const DEFAULT_NOISE_INTENSITY: f64 = 0.8;

/// Spatial frequency divisor of the value-noise component.
pub const DEFAULT_NOISE_SCALE: f64 = 0.5;

/// Strength of the mask-gradient component of the flow field.
pub const DEFAULT_BLUR_INTENSITY: f64 = 2.0;

/// Velocity magnitude cap during integration, in pixels per step.
pub const DEFAULT_MAX_VELOCITY: f64 = 1.0;

/// Step of the curl derivative stencil, in scaled noise space.
pub const DEFAULT_SAMPLE_DELTA: f64 = 0.01;

/// Base stroke weight for preview rendering, in pixels.
pub const DEFAULT_STROKE_BASE_WEIGHT: f64 = 1.0;

/// Seeded spread added on top of the base stroke weight, per trail.
pub const DEFAULT_STROKE_VARIABILITY: f64 = 1.0;

/// The options record driving one generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrailConfig {
    /// Seed string from which every random decision of the run derives.
    pub letter_or_shape_seed: String,
    /// Keep points in a disc over the dark mask interior.
    pub is_circle_filter: bool,
    /// Keep points over the bright region including the feathered fringe.
    pub is_large_filter: bool,
    /// Integration steps per trail.
    pub frames_quantity: usize,
    /// Base stroke weight for preview rendering.
    pub stroke_base_weight: f64,
    /// Seeded per-trail spread added to the base stroke weight.
    pub stroke_variability: f64,
    /// Minimum separation between trail origins, in pixels.
    pub poisson_disc_radius: f64,
    /// z offset selecting the value-noise slice.
    pub noise_seed: f64,
    /// z offset selecting the curl-noise slice.
    pub curl_seed: f64,
    /// Strength of the curl component.
    pub curl_intensity: f64,
    /// Spatial frequency divisor of the curl component.
    pub curl_scale: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            letter_or_shape_seed: DEFAULT_SEED.to_owned(),
            is_circle_filter: false,
            is_large_filter: false,
            frames_quantity: DEFAULT_FRAMES_QUANTITY,
            stroke_base_weight: DEFAULT_STROKE_BASE_WEIGHT,
            stroke_variability: DEFAULT_STROKE_VARIABILITY,
            poisson_disc_radius: DEFAULT_POISSON_DISC_RADIUS,
            noise_seed: DEFAULT_NOISE_SEED,
            curl_seed: DEFAULT_CURL_SEED,
            curl_intensity: DEFAULT_CURL_INTENSITY,
            curl_scale: DEFAULT_CURL_SCALE,
        }
    }
}

impl TrailConfig {
    /// Builds a configuration from a loose JSON record.
    ///
    /// Missing keys, mistyped values, and unknown keys all fall through to
    /// the defaults; this never fails.
    pub fn from_json(options: &Value) -> Self {
        let defaults = Self::default();
        Self {
            letter_or_shape_seed: param_seed(options, "letterOrShapeSeed", DEFAULT_SEED),
            is_circle_filter: param_bool(options, "isCircleFilter", defaults.is_circle_filter),
            is_large_filter: param_bool(options, "isLargeFilter", defaults.is_large_filter),
            frames_quantity: param_usize(options, "framesQuantity", defaults.frames_quantity),
            stroke_base_weight: param_f64(
                options,
                "strokeBaseWeight",
                defaults.stroke_base_weight,
            ),
            stroke_variability: param_f64(
                options,
                "strokeVariability",
                defaults.stroke_variability,
            ),
            poisson_disc_radius: param_f64(
                options,
                "poissonDiscRadius",
                defaults.poisson_disc_radius,
            ),
            noise_seed: param_f64(options, "noiseSeed", defaults.noise_seed),
            curl_seed: param_f64(options, "curlSeed", defaults.curl_seed),
            curl_intensity: param_f64(options, "curlIntensity", defaults.curl_intensity),
            curl_scale: param_f64(options, "curlScale", defaults.curl_scale),
        }
    }

    /// Checks the values a generator cannot work with.
    ///
    /// Returns `TrailError::NonPositiveRadius` for a zero, negative, or
    /// non-finite disc radius; everything else is permissive by design of
    /// the options record.
    pub fn validate(&self) -> Result<(), TrailError> {
        if !(self.poisson_disc_radius.is_finite() && self.poisson_disc_radius > 0.0) {
            return Err(TrailError::NonPositiveRadius {
                radius: self.poisson_disc_radius,
            });
        }
        Ok(())
    }

    /// The mask filter selected by the boolean flags.
    pub fn filter(&self) -> MaskFilter {
        MaskFilter::from_flags(self.is_circle_filter, self.is_large_filter)
    }

    /// The flow-field tuning derived from this configuration.
    pub fn field_config(&self) -> FieldConfig {
        FieldConfig {
            noise_seed: self.noise_seed,
            curl_seed: self.curl_seed,
            curl_intensity: self.curl_intensity,
            curl_scale: self.curl_scale,
            ..FieldConfig::default()
        }
    }
}

/// Tuning knobs of the flow-field evaluator.
///
/// Constructed once per run and never mutated; field evaluation is a pure
/// function of this struct, a coordinate, a layer index, and the mask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub noise_scale: f64,
    pub noise_intensity: f64,
    pub noise_seed: f64,
    pub curl_scale: f64,
    pub curl_intensity: f64,
    pub curl_seed: f64,
    pub blur_intensity: f64,
    pub sample_delta: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            noise_scale: DEFAULT_NOISE_SCALE,
            noise_intensity: DEFAULT_NOISE_INTENSITY,
            noise_seed: DEFAULT_NOISE_SEED,
            curl_scale: DEFAULT_CURL_SCALE,
            curl_intensity: DEFAULT_CURL_INTENSITY,
            curl_seed: DEFAULT_CURL_SEED,
            blur_intensity: DEFAULT_BLUR_INTENSITY,
            sample_delta: DEFAULT_SAMPLE_DELTA,
        }
    }
}
