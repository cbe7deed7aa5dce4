#![deny(unsafe_code)]
//! CPU preview rendering for trail-engine geometry.
//!
//! `plot` rasterizes trajectories into an RGBA8 buffer (always available).
//! `snapshot` adds PNG input/output behind the `png` feature (default on) so
//! builds that only need the pure buffer path can drop the `image`
//! dependency. `synth` builds the synthetic masks demos and tests use in
//! place of an external glyph rasterizer.

pub mod plot;
pub mod synth;

#[cfg(feature = "png")]
pub mod snapshot;

pub use plot::{plot_trajectories, stroke_weight, PlotStyle};
pub use synth::soft_disc_mask;
