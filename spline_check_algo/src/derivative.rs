//! Forward finite-difference velocity from sampled positions.

use nalgebra::Vector3;
use tracing::warn;

use crate::error::{Error, Result};
use crate::samples::MIN_SAMPLES;

/// Numerically derived velocity, one element per position sample.
///
/// The forward difference leaves the last sample undefined. It is filled with
/// a copy of the last position so the sequence keeps length `N`, but it is
/// only reachable through [`NumericalVelocity::placeholder`]. Plotting and
/// comparison go through [`NumericalVelocity::valid`], which stops at `N - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericalVelocity {
    values: Vec<Vector3<f64>>,
}

impl NumericalVelocity {
    /// Length including the undefined tail sample (equal to `N`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of defined samples (`N - 1`).
    pub fn valid_len(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// The defined samples, indices `0..N-1`.
    pub fn valid(&self) -> &[Vector3<f64>] {
        &self.values[..self.valid_len()]
    }

    /// The timestamps matching [`valid`](Self::valid), i.e. `time` without its
    /// last element.
    pub fn valid_time<'a>(&self, time: &'a [f64]) -> &'a [f64] {
        &time[..self.valid_len().min(time.len())]
    }

    /// The undefined tail value. Never use it as a velocity.
    pub fn placeholder(&self) -> Option<&Vector3<f64>> {
        self.values.last()
    }
}

/// Differentiate `position` with respect to `time` by forward differences.
///
/// `result[i] = (position[i+1] - position[i]) / (time[i+1] - time[i])` for
/// `i` in `0..N-1`. Equal consecutive timestamps are rejected before any
/// element is computed, and an element that overflows to infinity is an
/// [`Error::NonFiniteDerivative`].
pub fn forward_difference(position: &[Vector3<f64>], time: &[f64]) -> Result<NumericalVelocity> {
    if position.len() != time.len() {
        return Err(Error::DerivativeLengthMismatch {
            position: position.len(),
            time: time.len(),
        });
    }
    if time.len() < MIN_SAMPLES {
        return Err(Error::malformed(format!(
            "need at least {MIN_SAMPLES} samples to differentiate, found {}",
            time.len()
        )));
    }

    for (index, pair) in time.windows(2).enumerate() {
        if pair[1] == pair[0] {
            return Err(Error::DegenerateTimestep {
                index,
                time: pair[0],
            });
        }
        if pair[1] < pair[0] {
            warn!(index, from = pair[0], to = pair[1], "timestamps decrease");
        }
    }

    let mut values = Vec::with_capacity(position.len());
    for (index, (p, t)) in position.windows(2).zip(time.windows(2)).enumerate() {
        let v: Vector3<f64> = (p[1] - p[0]) / (t[1] - t[0]);
        if let Some(value) = v.iter().copied().find(|value| !value.is_finite()) {
            return Err(Error::NonFiniteDerivative { index, value });
        }
        values.push(v);
    }
    // Undefined tail, kept so the sequence has length N.
    values.push(position[position.len() - 1]);

    Ok(NumericalVelocity { values })
}
