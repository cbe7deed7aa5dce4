//! Particle advection through the flow field.
//!
//! Particles are advanced in lockstep-free isolation: each one reads the
//! shared field and mask but owns its velocity and path, so the batch is
//! just a loop over independent integrations, in input order.

use crate::flow::FieldEvaluator;
use crate::rng;
use crate::space::Extent;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Launch speed of a freshly seeded particle, in pixels per step.
const BASE_SPEED: f64 = 0.01;

/// A point mass advected by the field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
}

impl Particle {
    /// Creates a particle at `start` heading in a seeded direction at base
    /// speed.
    ///
    /// The heading seed derives from the start position itself, so a
    /// particle's path depends only on where it begins, not on its index
    /// in the batch.
    pub fn launch(start: DVec2, seed: &str) -> Self {
        let angle = TAU * rng::unit(&format!("{seed}#head#{}:{}", start.x, start.y));
        Self {
            position: start,
            velocity: BASE_SPEED * DVec2::from_angle(angle),
        }
    }
}

/// One particle's path: the start position plus every stepped position.
///
/// Immutable once integration completes. Serializes transparently as an
/// array of `[x, y]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<DVec2>,
}

impl Trajectory {
    fn with_start(start: DVec2, steps: usize) -> Self {
        let mut points = Vec::with_capacity(steps + 1);
        points.push(start);
        Self { points }
    }

    /// The recorded positions, start first.
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Number of recorded positions; always the step count plus one.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Fixed-step integrator advancing particles under a field evaluator.
#[derive(Debug, Clone, Copy)]
pub struct ParticleIntegrator {
    frames: usize,
    max_velocity: f64,
    canvas: Extent,
}

impl ParticleIntegrator {
    /// Creates an integrator for `frames` steps with the given velocity cap
    /// over the given canvas.
    pub fn new(frames: usize, max_velocity: f64, canvas: Extent) -> Self {
        Self {
            frames,
            max_velocity,
            canvas,
        }
    }

    /// Advects one particle per start point, returning trajectories in the
    /// same order.
    ///
    /// Total: integration never fails mid-run. Particles may leave the
    /// canvas and keep integrating; outside it the field degrades to its
    /// noise components.
    pub fn run(
        &self,
        starts: &[DVec2],
        field: &FieldEvaluator<'_>,
        seed: &str,
    ) -> Vec<Trajectory> {
        starts
            .iter()
            .map(|&start| self.advect(start, field, seed))
            .collect()
    }

    fn advect(&self, start: DVec2, field: &FieldEvaluator<'_>, seed: &str) -> Trajectory {
        let mut particle = Particle::launch(start, seed);
        let mut trajectory = Trajectory::with_start(start, self.frames);
        for step in 0..self.frames {
            let coord = self.canvas.normalize(particle.position);
            particle.velocity += field.drift(coord, step as f64);
            particle.velocity = particle.velocity.clamp_length_max(self.max_velocity);
            particle.position += particle.velocity;
            trajectory.points.push(particle.position);
        }
        trajectory
    }
}
