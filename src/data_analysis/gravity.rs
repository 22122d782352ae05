// src/data_analysis/gravity.rs

use crate::constants::INITIAL_SPEED;
use crate::error::{KinematicsError, Result};
use crate::types::KinematicSamples;

/// Recovers the acceleration implied by the final sample: a = (v - u) / t, with u = 0.
///
/// Fails with `EmptySamples` for an empty set and `ZeroElapsedTime` when the
/// final sample is at t = 0 (e.g. a single-sample set), rather than returning NaN/inf.
pub fn calculate_gravity(samples: &KinematicSamples) -> Result<f64> {
    let (t, v, _s) = samples.last().ok_or(KinematicsError::EmptySamples)?;
    if t == 0.0 {
        return Err(KinematicsError::ZeroElapsedTime);
    }
    Ok((v - INITIAL_SPEED) / t)
}
