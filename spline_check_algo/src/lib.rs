//! Checks a spline planner's reported velocity against the forward difference
//! of its sampled positions, and computes the tiling used to lay out the
//! comparison figures.

pub mod comparison;
pub mod derivative;
pub mod error;
pub mod layout;
pub mod samples;

pub mod prelude {
    pub use crate::comparison::VelocityResidual;
    pub use crate::derivative::{forward_difference, NumericalVelocity};
    pub use crate::error::{Error, Result};
    pub use crate::layout::{LayoutConfig, LayoutState, TilingDirection, WindowGeometry};
    pub use crate::samples::{DataFiles, SampleSet};
    pub use nalgebra;
    pub use nalgebra::{vector, Vector3};
}

pub use prelude::*;
