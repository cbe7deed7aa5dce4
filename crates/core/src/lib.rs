#![deny(unsafe_code)]
//! Core components of the trail-engine particle-trail generator.
//!
//! Provides the seeded hash (`rng`), the blue-noise `BlueNoiseSampler`, the
//! composite `FieldEvaluator` (value noise + curl noise + mask gradient),
//! the `ParticleIntegrator`, the `MaskBuffer`/`MaskFilter` mask model, the
//! `TrailConfig` options record, and the `TrailGenerator` pipeline driving
//! them.

pub mod config;
pub mod error;
pub mod flow;
pub mod generator;
pub mod integrate;
pub mod mask;
pub mod params;
pub mod rng;
pub mod sampler;
pub mod space;

pub use config::{FieldConfig, TrailConfig};
pub use error::TrailError;
pub use flow::FieldEvaluator;
pub use generator::TrailGenerator;
pub use integrate::{Particle, ParticleIntegrator, Trajectory};
pub use mask::{Channel, MaskBuffer, MaskFilter};
pub use sampler::BlueNoiseSampler;
pub use space::Extent;
