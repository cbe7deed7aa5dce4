//! The full generation pipeline: sample, filter, integrate.

use crate::config::{TrailConfig, DEFAULT_MAX_TRY, DEFAULT_MAX_VELOCITY};
use crate::error::TrailError;
use crate::flow::FieldEvaluator;
use crate::integrate::{ParticleIntegrator, Trajectory};
use crate::mask::{MaskBuffer, BOUNDARY_CHANNEL};
use crate::sampler::BlueNoiseSampler;
use crate::space::Extent;
use glam::DVec2;

/// Drives one configuration through sample -> filter -> integrate.
///
/// The stages are exposed separately for callers that report on the
/// intermediate point sets; `generate` chains them.
pub struct TrailGenerator {
    config: TrailConfig,
}

impl TrailGenerator {
    /// Creates a generator, validating the configuration up front.
    pub fn new(config: TrailConfig) -> Result<Self, TrailError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Blue-noise samples the canvas with the configured radius and seed.
    pub fn sample_points(&self, canvas: Extent) -> Result<Vec<DVec2>, TrailError> {
        let sampler =
            BlueNoiseSampler::new(self.config.poisson_disc_radius, DEFAULT_MAX_TRY, canvas)?;
        Ok(sampler.sample(&self.config.letter_or_shape_seed))
    }

    /// Drops sampled points the configured mask filter rejects.
    ///
    /// Points are classified at their normalized canvas position; survivors
    /// keep their world coordinates and acceptance order.
    pub fn filter_points(
        &self,
        points: &[DVec2],
        mask: &MaskBuffer,
        canvas: Extent,
    ) -> Result<Vec<DVec2>, TrailError> {
        let filter = self.config.filter();
        let mut kept = Vec::new();
        for &p in points {
            if filter.admits(mask, BOUNDARY_CHANNEL, canvas.normalize(p))? {
                kept.push(p);
            }
        }
        Ok(kept)
    }

    /// Runs the whole pipeline: one trajectory per surviving point, in
    /// acceptance order.
    pub fn generate(
        &self,
        mask: &MaskBuffer,
        canvas: Extent,
    ) -> Result<Vec<Trajectory>, TrailError> {
        let sampled = self.sample_points(canvas)?;
        let kept = self.filter_points(&sampled, mask, canvas)?;
        let field = FieldEvaluator::new(self.config.field_config(), mask);
        let integrator =
            ParticleIntegrator::new(self.config.frames_quantity, DEFAULT_MAX_VELOCITY, canvas);
        Ok(integrator.run(&kept, &field, &self.config.letter_or_shape_seed))
    }
}
