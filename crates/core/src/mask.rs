//! Shape mask buffer, typed channel access, and point classification.
//!
//! The mask is an externally produced RGBA byte image (row-major, top-left
//! origin) holding the feathered silhouette the trails are confined to. The
//! generator only ever reads it: the sampler's filter stage classifies
//! candidate points against it and the field evaluator differentiates it.

use crate::error::TrailError;
use crate::space::in_unit_square;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The channel the silhouette is written to by the upstream compositor.
pub const BOUNDARY_CHANNEL: Channel = Channel::Blue;

/// Byte value below which a point admitted by the default filter is rejected.
const DEFAULT_THRESHOLD: u8 = 190;

/// Byte value below which a point admitted by the large filter is rejected.
const LARGE_THRESHOLD: u8 = 90;

/// Byte value at or above which the circle filter rejects a point: the
/// circle mode keeps the dark interior rather than the bright silhouette.
const CIRCLE_THRESHOLD: u8 = 190;

/// Radius of the circle filter's keep region, as a fraction of mask width.
const CIRCLE_RADIUS_FRAC: f64 = 0.38;

/// One of the four RGBA components of a mask pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Byte offset of this channel within an RGBA pixel.
    pub fn offset(&self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }
}

/// A read-only RGBA mask image sampled by normalized coordinates.
#[derive(Debug, Clone)]
pub struct MaskBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl MaskBuffer {
    /// Creates a mask from raw RGBA bytes, validating that the buffer length
    /// matches `width * height * 4`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, TrailError> {
        if width == 0 || height == 0 {
            return Err(TrailError::InvalidDimensions);
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(TrailError::InvalidDimensions)?;
        if data.len() != expected {
            return Err(TrailError::MaskLengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a mask by evaluating `f` at every pixel, row-major.
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Result<Self, TrailError>
    where
        F: Fn(usize, usize) -> [u8; 4],
    {
        if width == 0 || height == 0 {
            return Err(TrailError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(TrailError::InvalidDimensions)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a mask with every pixel set to the same RGBA value.
    pub fn uniform(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, TrailError> {
        Self::from_fn(width, height, |_, _| rgba)
    }

    /// Mask width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Mask height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the underlying row-major RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Reads one channel of the pixel at `(px, py)`, or `None` out of bounds.
    pub fn value_at(&self, channel: Channel, px: usize, py: usize) -> Option<u8> {
        if px >= self.width || py >= self.height {
            return None;
        }
        Some(self.data[(py * self.width + px) * 4 + channel.offset()])
    }

    /// Converts a normalized coordinate in [0, 1] to a pixel index.
    ///
    /// Floor mapping; the far edge (exactly 1.0) lands in the last pixel.
    fn pixel_of(&self, coord: DVec2) -> (usize, usize) {
        let px = ((coord.x * self.width as f64) as usize).min(self.width - 1);
        let py = ((coord.y * self.height as f64) as usize).min(self.height - 1);
        (px, py)
    }

    /// Samples one channel at a normalized coordinate.
    ///
    /// Returns `TrailError::CoordOutOfRange` if the coordinate falls outside
    /// the unit square; callers that can produce out-of-square coordinates
    /// must handle or pre-screen them, never feed them through silently.
    pub fn sample(&self, channel: Channel, coord: DVec2) -> Result<u8, TrailError> {
        if !in_unit_square(coord) {
            return Err(TrailError::CoordOutOfRange {
                x: coord.x,
                y: coord.y,
            });
        }
        let (px, py) = self.pixel_of(coord);
        Ok(self.data[(py * self.width + px) * 4 + channel.offset()])
    }

    /// Samples one channel with the coordinate clamped into the unit square.
    ///
    /// Only the derivative stencil uses this: its offset taps may poke one
    /// pixel past the edge and are defined to read the edge pixel there.
    pub fn sample_clamped(&self, channel: Channel, coord: DVec2) -> u8 {
        let clamped = coord.clamp(DVec2::ZERO, DVec2::ONE);
        let (px, py) = self.pixel_of(clamped);
        self.data[(py * self.width + px) * 4 + channel.offset()]
    }
}

/// How sampled points are classified against the mask.
///
/// The variants carry their predicates; there is no string dispatch at the
/// classification site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskFilter {
    /// Keep points in the dark interior within a fixed-radius disc around
    /// the mask center.
    Circle,
    /// Keep points over the bright region, with a permissive threshold that
    /// includes the feathered fringe.
    Large,
    /// Keep points over the solidly bright region.
    Default,
}

impl MaskFilter {
    /// Resolves a filter from the configuration's boolean flags.
    ///
    /// The circle flag wins when both are set.
    pub fn from_flags(is_circle: bool, is_large: bool) -> Self {
        if is_circle {
            MaskFilter::Circle
        } else if is_large {
            MaskFilter::Large
        } else {
            MaskFilter::Default
        }
    }

    /// Looks up a filter by name.
    pub fn from_name(name: &str) -> Result<Self, TrailError> {
        match name {
            "circle" => Ok(MaskFilter::Circle),
            "large" => Ok(MaskFilter::Large),
            "default" => Ok(MaskFilter::Default),
            other => Err(TrailError::UnknownFilter(other.to_owned())),
        }
    }

    /// The canonical name of this filter.
    pub fn name(&self) -> &'static str {
        match self {
            MaskFilter::Circle => "circle",
            MaskFilter::Large => "large",
            MaskFilter::Default => "default",
        }
    }

    /// All filter names accepted by `from_name`.
    pub fn list_names() -> Vec<&'static str> {
        vec!["circle", "large", "default"]
    }

    /// Whether the point at the given normalized coordinate survives this
    /// filter.
    ///
    /// The circle radius test runs in mask pixel space, relative to mask
    /// width (the mask is square in practice; a non-square mask keeps the
    /// width convention).
    pub fn admits(
        &self,
        mask: &MaskBuffer,
        channel: Channel,
        coord: DVec2,
    ) -> Result<bool, TrailError> {
        let value = mask.sample(channel, coord)?;
        Ok(match self {
            MaskFilter::Circle => {
                let p = DVec2::new(
                    coord.x * mask.width() as f64,
                    coord.y * mask.height() as f64,
                );
                let center = DVec2::new(mask.width() as f64 / 2.0, mask.height() as f64 / 2.0);
                value < CIRCLE_THRESHOLD
                    && p.distance(center) < CIRCLE_RADIUS_FRAC * mask.width() as f64
            }
            MaskFilter::Large => value > LARGE_THRESHOLD,
            MaskFilter::Default => value > DEFAULT_THRESHOLD,
        })
    }
}
