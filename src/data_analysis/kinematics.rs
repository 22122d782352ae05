// src/data_analysis/kinematics.rs

use log::{debug, warn};
use ndarray::Array1;

use crate::constants::{DEFAULT_INTERVAL_S, DEFAULT_ITERATIONS, INITIAL_SPEED, SAMPLE_COUNT};
use crate::types::KinematicSamples;

/// Generates time/speed/displacement samples for an object accelerating
/// uniformly from rest.
///
/// Always returns `SAMPLE_COUNT` samples at t = 0, 1, ..., 16 s:
/// v = u + a·t and s = u·t + (½·a)·t² with u = 0.
///
/// `interval` and `iterations` are accepted for the call shape of the
/// experiment but do not change spacing or length; a warning is logged when
/// they differ from the defaults.
pub fn calculate_kinematics(acceleration: f64, interval: f64, iterations: usize) -> KinematicSamples {
    if iterations != DEFAULT_ITERATIONS {
        warn!(
            "iterations={} requested, but the sample length is fixed at {} (t = 0..{} s)",
            iterations,
            SAMPLE_COUNT,
            SAMPLE_COUNT - 1
        );
    }
    if interval != DEFAULT_INTERVAL_S {
        warn!(
            "interval={} s requested, but samples are always spaced {} s apart",
            interval, DEFAULT_INTERVAL_S
        );
    }

    let a = acceleration;
    let u = INITIAL_SPEED;

    let t = Array1::range(0.0, SAMPLE_COUNT as f64, DEFAULT_INTERVAL_S);
    let v = t.mapv(|t| u + a * t);
    let s = t.mapv(|t| u * t + 0.5 * a * t.powi(2));

    debug!(
        "Generated {} samples for a = {} m/s² (final v = {:.5}, s = {:.5})",
        t.len(),
        a,
        v[v.len() - 1],
        s[s.len() - 1]
    );

    // Lengths are equal by construction.
    KinematicSamples::from_generated(t, v, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EARTH_G: f64 = 9.80665;

    #[test]
    fn test_times_are_whole_seconds() {
        let samples = calculate_kinematics(EARTH_G, 1.0, 16);
        assert_eq!(samples.len(), SAMPLE_COUNT);
        for (i, t) in samples.times().iter().enumerate() {
            assert_eq!(*t, i as f64);
        }
    }

    #[test]
    fn test_length_ignores_iteration_count() {
        for iterations in [0, 5, 16, 100] {
            let samples = calculate_kinematics(EARTH_G, 1.0, iterations);
            assert_eq!(samples.len(), 17, "iterations={iterations}");
            assert_eq!(samples.times()[16], 16.0);
        }
    }

    #[test]
    fn test_interval_does_not_change_spacing() {
        let samples = calculate_kinematics(EARTH_G, 0.5, 16);
        assert_eq!(samples.times()[1], 1.0);
        assert_eq!(samples.times()[16], 16.0);
    }

    #[test]
    fn test_speed_and_displacement_formulas() {
        for a in [1.622, 3.7, EARTH_G, 24.79] {
            let samples = calculate_kinematics(a, 1.0, 16);
            for (i, (t, v, s)) in samples.rows().enumerate() {
                let i = i as f64;
                assert_eq!(t, i);
                assert_eq!(v, a * i, "v[{i}] for a={a}");
                assert_eq!(s, 0.5 * a * i.powi(2), "s[{i}] for a={a}");
            }
        }
    }

    #[test]
    fn test_displacement_is_half_a_times_t_squared() {
        // (½·a)·t² and ((½·a)·t)·t differ by one ULP at these samples for Earth,
        // which flips the 5th decimal of the printed table.
        let samples = calculate_kinematics(EARTH_G, 1.0, 16);
        let s = samples.displacements();
        assert_eq!(s[7], 240.262925);
        assert_eq!(s[9], 0.5 * EARTH_G * 81.0);
        assert_eq!(s[15], 0.5 * EARTH_G * 225.0);
        for i in [7usize, 9, 13, 14, 15] {
            let t = i as f64;
            assert_eq!(s[i], 0.5 * EARTH_G * t.powi(2), "s[{i}]");
        }
        assert_eq!(format!("{:.5}", s[9]), "397.16932");
        assert_eq!(format!("{:.5}", s[15]), "1103.24812");
    }

    #[test]
    fn test_starts_from_rest() {
        let samples = calculate_kinematics(EARTH_G, 1.0, 16);
        assert_eq!(samples.speeds()[0], 0.0);
        assert_eq!(samples.displacements()[0], 0.0);
    }

    #[test]
    fn test_earth_endpoints() {
        let samples = calculate_kinematics(EARTH_G, 1.0, 16);
        let (t, v, s) = samples.last().unwrap();
        assert_eq!(t, 16.0);
        assert!((v - 156.9064).abs() < 1e-9);
        assert!((s - 1255.2512).abs() < 1e-9);
    }
}
