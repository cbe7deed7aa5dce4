//! Error types for the trail-engine core.

use thiserror::Error;

/// Errors produced by trail generation operations.
#[derive(Debug, Error)]
pub enum TrailError {
    /// Width or height was zero, negative, or non-finite when creating an
    /// extent or mask buffer.
    #[error("invalid dimensions: width and height must be positive and finite")]
    InvalidDimensions,

    /// The blue-noise separation radius was zero, negative, or non-finite.
    #[error("invalid disc radius {radius}: must be positive and finite")]
    NonPositiveRadius { radius: f64 },

    /// The candidate retry budget was zero, which would reject every anchor
    /// without attempting a single candidate.
    #[error("max_try must be at least 1")]
    ZeroMaxTry,

    /// A normalized coordinate fell outside [0, 1] x [0, 1] where an exact
    /// mask sample was required.
    #[error("coordinate ({x}, {y}) outside the unit square")]
    CoordOutOfRange { x: f64, y: f64 },

    /// A mask byte buffer did not match its declared RGBA dimensions.
    #[error("mask length mismatch: expected {expected} bytes, got {got}")]
    MaskLengthMismatch { expected: usize, got: usize },

    /// A mask filter name did not match any known variant.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// An I/O failure while reading a mask or writing a preview.
    #[error("io error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimensions_displays_readable_message() {
        let err = TrailError::InvalidDimensions;
        let msg = format!("{err}");
        assert!(
            msg.contains("width") && msg.contains("height"),
            "expected message mentioning width and height, got: {msg}"
        );
    }

    #[test]
    fn non_positive_radius_includes_value() {
        let err = TrailError::NonPositiveRadius { radius: -3.5 };
        let msg = format!("{err}");
        assert!(msg.contains("-3.5"), "missing radius in: {msg}");
    }

    #[test]
    fn coord_out_of_range_includes_both_coordinates() {
        let err = TrailError::CoordOutOfRange { x: 1.25, y: -0.5 };
        let msg = format!("{err}");
        assert!(msg.contains("1.25"), "missing x in: {msg}");
        assert!(msg.contains("-0.5"), "missing y in: {msg}");
    }

    #[test]
    fn mask_length_mismatch_includes_both_lengths() {
        let err = TrailError::MaskLengthMismatch {
            expected: 1024,
            got: 768,
        };
        let msg = format!("{err}");
        assert!(msg.contains("1024"), "missing expected length in: {msg}");
        assert!(msg.contains("768"), "missing actual length in: {msg}");
    }

    #[test]
    fn unknown_filter_includes_name() {
        let err = TrailError::UnknownFilter("blob".into());
        let msg = format!("{err}");
        assert!(msg.contains("blob"), "missing filter name in: {msg}");
    }

    #[test]
    fn io_includes_message() {
        let err = TrailError::Io("permission denied".into());
        let msg = format!("{err}");
        assert!(msg.contains("permission denied"), "missing message in: {msg}");
    }

    #[test]
    fn trail_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TrailError>();
    }

    #[test]
    fn trail_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<TrailError>();
    }
}
