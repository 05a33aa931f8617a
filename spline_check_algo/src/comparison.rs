//! Residuals between reported and numerically derived velocity.

use std::fmt;

use nalgebra::Vector3;

use crate::derivative::NumericalVelocity;

/// Per-axis statistics of `reported[i] - numerical[i]` over the defined
/// samples of a [`NumericalVelocity`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityResidual {
    /// Largest absolute residual on each axis
    pub max_abs: Vector3<f64>,
    /// Sample index at which `max_abs` occurs on each axis
    pub max_index: [usize; 3],
    /// Root mean square residual on each axis
    pub rms: Vector3<f64>,
    /// Number of compared samples (`N - 1`)
    pub samples: usize,
}

impl VelocityResidual {
    /// Compare `reported` against the defined part of `numerical`.
    ///
    /// The undefined tail of `numerical` is never read. Extra trailing
    /// samples in `reported` are ignored.
    pub fn compute(reported: &[Vector3<f64>], numerical: &NumericalVelocity) -> Self {
        let mut max_abs = Vector3::<f64>::zeros();
        let mut max_index = [0; 3];
        let mut sum_sq = Vector3::<f64>::zeros();
        let mut samples = 0;

        for (i, (r, n)) in reported.iter().zip(numerical.valid()).enumerate() {
            let err = (r - n).abs();
            for axis in 0..3 {
                if err[axis] > max_abs[axis] {
                    max_abs[axis] = err[axis];
                    max_index[axis] = i;
                }
            }
            sum_sq += err.component_mul(&err);
            samples += 1;
        }

        let rms = if samples == 0 {
            Vector3::zeros()
        } else {
            (sum_sq / samples as f64).map(f64::sqrt)
        };

        Self {
            max_abs,
            max_index,
            rms,
            samples,
        }
    }

    /// Largest absolute residual over all axes.
    pub fn worst(&self) -> f64 {
        self.max_abs.max()
    }
}

impl fmt::Display for VelocityResidual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} samples", self.samples)?;
        for (axis, name) in ["x", "y", "z"].iter().enumerate() {
            write!(
                f,
                ", {name}: max {:.3e} @ {} rms {:.3e}",
                self.max_abs[axis], self.max_index[axis], self.rms[axis]
            )?;
        }
        Ok(())
    }
}
