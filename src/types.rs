// src/types.rs

use ndarray::{Array1, ArrayView1};

use crate::error::{KinematicsError, Result};

/// One row of the sample set: (time s, speed m/s, displacement m).
pub type KinematicRow = (f64, f64, f64);

/// Three parallel sequences (times, speeds, displacements) of equal length.
///
/// The set is read-only once built; construct it with [`KinematicSamples::new`]
/// or via [`crate::data_analysis::kinematics::calculate_kinematics`].
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicSamples {
    times: Array1<f64>,
    speeds: Array1<f64>,
    displacements: Array1<f64>,
}

impl KinematicSamples {
    pub fn new(
        times: Array1<f64>,
        speeds: Array1<f64>,
        displacements: Array1<f64>,
    ) -> Result<Self> {
        if times.len() != speeds.len() || times.len() != displacements.len() {
            return Err(KinematicsError::LengthMismatch {
                times: times.len(),
                speeds: speeds.len(),
                displacements: displacements.len(),
            });
        }
        Ok(Self {
            times,
            speeds,
            displacements,
        })
    }

    /// Builds a set whose sequences the caller already produced with equal lengths.
    pub(crate) fn from_generated(
        times: Array1<f64>,
        speeds: Array1<f64>,
        displacements: Array1<f64>,
    ) -> Self {
        debug_assert!(times.len() == speeds.len() && times.len() == displacements.len());
        Self {
            times,
            speeds,
            displacements,
        }
    }

    pub fn times(&self) -> ArrayView1<'_, f64> {
        self.times.view()
    }

    pub fn speeds(&self) -> ArrayView1<'_, f64> {
        self.speeds.view()
    }

    pub fn displacements(&self) -> ArrayView1<'_, f64> {
        self.displacements.view()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Final (t, v, s) triple, if any.
    pub fn last(&self) -> Option<KinematicRow> {
        let i = self.len().checked_sub(1)?;
        Some((self.times[i], self.speeds[i], self.displacements[i]))
    }

    pub fn rows(&self) -> impl Iterator<Item = KinematicRow> + '_ {
        self.times
            .iter()
            .zip(self.speeds.iter())
            .zip(self.displacements.iter())
            .map(|((&t, &v), &s)| (t, v, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let err = KinematicSamples::new(array![0.0, 1.0], array![0.0], array![0.0, 0.5])
            .unwrap_err();
        assert_eq!(
            err,
            KinematicsError::LengthMismatch {
                times: 2,
                speeds: 1,
                displacements: 2
            }
        );
    }

    #[test]
    fn test_rows_and_last() {
        let samples =
            KinematicSamples::new(array![0.0, 1.0], array![0.0, 2.0], array![0.0, 1.0]).unwrap();
        assert_eq!(samples.len(), 2);
        assert!(!samples.is_empty());
        let rows: Vec<KinematicRow> = samples.rows().collect();
        assert_eq!(rows, vec![(0.0, 0.0, 0.0), (1.0, 2.0, 1.0)]);
        assert_eq!(samples.last(), Some((1.0, 2.0, 1.0)));
    }

    #[test]
    fn test_empty_has_no_last() {
        let empty = Array1::<f64>::zeros(0);
        let samples = KinematicSamples::new(empty.clone(), empty.clone(), empty).unwrap();
        assert!(samples.is_empty());
        assert_eq!(samples.last(), None);
    }
}
