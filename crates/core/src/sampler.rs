//! Seeded blue-noise point sampling by dart throwing.
//!
//! Accepted points land at least one separation radius apart (up to the
//! tolerance discussed on `sample`), giving the even-but-unstructured
//! distribution the trails start from. The sampler is purely sequential:
//! each acceptance updates the grid the next candidate is tested against.

use crate::error::TrailError;
use crate::rng;
use crate::space::Extent;
use glam::DVec2;
use std::f64::consts::{SQRT_2, TAU};

/// Dart-throwing sampler over a uniform acceleration grid.
///
/// The grid uses cells of `radius / sqrt(2)` so a cell can hold at most one
/// accepted point, and a 3x3 neighborhood suffices for the distance test.
/// That stencil admits rare diagonal pairs closer than `radius`; the hard
/// floor it does guarantee is `radius / sqrt(2)`.
#[derive(Debug, Clone)]
pub struct BlueNoiseSampler {
    radius: f64,
    max_try: usize,
    extent: Extent,
    cell: f64,
    cols: usize,
    rows: usize,
}

impl BlueNoiseSampler {
    /// Creates a sampler for the given separation radius and rectangle.
    ///
    /// Rejects a non-positive or non-finite `radius` and a zero `max_try`
    /// before any sampling happens. The grid always has at least one cell
    /// per axis so the center seed point stays insertable when `radius`
    /// exceeds the rectangle.
    pub fn new(radius: f64, max_try: usize, extent: Extent) -> Result<Self, TrailError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(TrailError::NonPositiveRadius { radius });
        }
        if max_try == 0 {
            return Err(TrailError::ZeroMaxTry);
        }
        let cell = radius / SQRT_2;
        let cols = ((extent.width() / cell) as usize).max(1);
        let rows = ((extent.height() / cell) as usize).max(1);
        cols.checked_mul(rows)
            .ok_or(TrailError::InvalidDimensions)?;
        Ok(Self {
            radius,
            max_try,
            extent,
            cell,
            cols,
            rows,
        })
    }

    /// Generates the full point set for one seed, in acceptance order.
    ///
    /// The rectangle center primes the frontier but is deliberately left out
    /// of the output; it shapes the spacing of its neighbors without ever
    /// becoming a trail origin itself. Each loop iteration either accepts a
    /// candidate (filling a grid cell) or retires an exhausted anchor, so
    /// the loop terminates after at most `2 * cols * rows + 1` iterations.
    ///
    /// A radius larger than the rectangle diagonal yields an empty set:
    /// every candidate around the center falls outside and the frontier
    /// drains immediately.
    pub fn sample(&self, seed: &str) -> Vec<DVec2> {
        let mut grid: Vec<Option<DVec2>> = vec![None; self.cols * self.rows];
        let mut active: Vec<DVec2> = Vec::new();
        let mut ordered: Vec<DVec2> = Vec::new();

        let center = self.extent.center();
        if let Some((col, row)) = self.cell_of(center) {
            grid[row * self.cols + col] = Some(center);
            active.push(center);
        }

        let mut iteration: usize = 0;
        while !active.is_empty() {
            let anchor_idx = rng::index(&format!("{seed}#anchor#{iteration}"), active.len());
            let anchor = active[anchor_idx];

            let mut placed = false;
            for attempt in 0..self.max_try {
                let candidate = self.candidate_near(seed, anchor, anchor_idx + attempt);
                if let Some((col, row)) = self.admissible_cell(candidate, &grid) {
                    grid[row * self.cols + col] = Some(candidate);
                    active.push(candidate);
                    ordered.push(candidate);
                    placed = true;
                    break;
                }
            }
            if !placed {
                // Exhausted anchors leave the frontier but stay in the grid,
                // still blocking their neighborhood.
                active.remove(anchor_idx);
            }
            iteration += 1;
        }
        ordered
    }

    /// A seeded candidate in the annulus [radius, 2 * radius) around
    /// `anchor`.
    ///
    /// `n` is the anchor index plus the attempt number, so retries walk a
    /// different offset sequence per pick.
    fn candidate_near(&self, seed: &str, anchor: DVec2, n: usize) -> DVec2 {
        let dist = self.radius * (1.0 + rng::unit(&format!("{seed}#cand#{n}#d")));
        let angle = TAU * rng::unit(&format!("{seed}#cand#{n}#a"));
        anchor + dist * DVec2::from_angle(angle)
    }

    /// The grid cell of a world point, or `None` when the point falls
    /// outside the rectangle or outside the grid-covered area.
    fn cell_of(&self, p: DVec2) -> Option<(usize, usize)> {
        if !self.extent.contains(p) {
            return None;
        }
        let col = (p.x / self.cell) as usize;
        let row = (p.y / self.cell) as usize;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((col, row))
    }

    /// The cell a candidate may be accepted into: in range, empty, and with
    /// no occupied 3x3 neighbor closer than `radius`.
    ///
    /// Neighborhood lookups are bounds-checked, never wrapped; the rectangle
    /// edge is a hard edge.
    fn admissible_cell(&self, candidate: DVec2, grid: &[Option<DVec2>]) -> Option<(usize, usize)> {
        let (col, row) = self.cell_of(candidate)?;
        if grid[row * self.cols + col].is_some() {
            return None;
        }
        for drow in -1..=1_isize {
            for dcol in -1..=1_isize {
                let ncol = col as isize + dcol;
                let nrow = row as isize + drow;
                if ncol < 0 || nrow < 0 || ncol >= self.cols as isize || nrow >= self.rows as isize
                {
                    continue;
                }
                if let Some(occupant) = grid[nrow as usize * self.cols + ncol as usize] {
                    if occupant.distance(candidate) < self.radius {
                        return None;
                    }
                }
            }
        }
        Some((col, row))
    }
}
