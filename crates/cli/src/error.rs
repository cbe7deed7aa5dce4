//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: generation error (bad radius, bad dimensions, out-of-range sample)
//! - 11: I/O error (mask read, preview write)
//! - 12: input error (bad JSON options)
//! - 13: serialization error

use std::fmt;
use trail_engine_core::TrailError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
pub enum CliError {
    /// A generation-level error (bad radius, bad dimensions, bad sample).
    Trail(TrailError),
    /// An I/O error (mask read, preview write).
    Io(String),
    /// A user input error (bad JSON options).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Trail(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Trail(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<TrailError> for CliError {
    fn from(e: TrailError) -> Self {
        match e {
            TrailError::Io(msg) => CliError::Io(msg),
            other => CliError::Trail(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_error_exit_code_is_10() {
        let err = CliError::Trail(TrailError::NonPositiveRadius { radius: -1.0 });
        assert_eq!(err.exit_code(), 10);
    }

    #[test]
    fn io_error_exit_code_is_11() {
        let err = CliError::Io("write failed".into());
        assert_eq!(err.exit_code(), 11);
    }

    #[test]
    fn input_error_exit_code_is_12() {
        let err = CliError::Input("bad options".into());
        assert_eq!(err.exit_code(), 12);
    }

    #[test]
    fn serialization_error_exit_code_is_13() {
        let err = CliError::Serialization("json fail".into());
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn from_trail_error_io_routes_to_cli_io() {
        let trail_err = TrailError::Io("disk full".into());
        let cli_err = CliError::from(trail_err);
        assert_eq!(cli_err.exit_code(), 11);
        assert!(cli_err.to_string().contains("disk full"));
    }

    #[test]
    fn from_trail_error_non_io_routes_to_cli_trail() {
        let trail_err = TrailError::InvalidDimensions;
        let cli_err = CliError::from(trail_err);
        assert_eq!(cli_err.exit_code(), 10);
        assert!(cli_err.to_string().contains("dimensions"));
    }

    #[test]
    fn from_serde_json_error_routes_to_serialization() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let cli_err = CliError::from(bad_json.unwrap_err());
        assert_eq!(cli_err.exit_code(), 13);
    }
}
