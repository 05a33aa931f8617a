#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod compare;
pub mod data;
pub mod error;
pub mod figure;

pub use app::FigureApp;
pub use compare::{render_comparison_views, ComparisonOutcome};
pub use error::{Error, RenderError, Result};

pub mod prelude {
    pub use crate::compare::{
        position_figure, render_comparison_views, velocity_figure, ComparisonOutcome,
    };
    pub use crate::figure::{EguiSurface, Figure, Panel, RecordingSurface, RenderSurface, Series};
    pub use spline_check_algo::prelude::*;
}
