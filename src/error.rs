// src/error.rs

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, KinematicsError>;

/// Domain errors for sample construction and gravity recovery.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// A computation needed at least one sample.
    #[error("sample set is empty")]
    EmptySamples,

    /// Recovering acceleration from a final sample at t = 0 would divide by zero.
    #[error("final sample is at t = 0 s; cannot recover acceleration from zero elapsed time")]
    ZeroElapsedTime,

    /// The three sequences of a sample set must have the same length.
    #[error(
        "sequence lengths differ: times={times}, speeds={speeds}, displacements={displacements}"
    )]
    LengthMismatch {
        times: usize,
        speeds: usize,
        displacements: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = KinematicsError::LengthMismatch {
            times: 17,
            speeds: 16,
            displacements: 17,
        };
        let msg = format!("{e}");
        assert!(msg.contains("times=17"));
        assert!(msg.contains("speeds=16"));
    }

    #[test]
    fn zero_elapsed_time_mentions_division() {
        let msg = KinematicsError::ZeroElapsedTime.to_string();
        assert!(msg.contains("t = 0"));
    }
}
