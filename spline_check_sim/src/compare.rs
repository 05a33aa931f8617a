//! Position and velocity comparison figures for one set of spline samples.

use spline_check_algo::prelude::*;
use tracing::info;

use crate::data::AxisSeries;
use crate::error::Result;
use crate::figure::{Figure, Panel, RenderSurface, Series};

/// Title of the position figure
pub const POSITION_TITLE: &str = "spline";
/// Title of the velocity figure
pub const VELOCITY_TITLE: &str = "spline vel";
/// Label of the shared horizontal axis
pub const TIME_LABEL: &str = "time (sec)";

/// Legend names of the velocity series
pub const REPORTED_NAME: &str = "reported";
pub const NUMERICAL_NAME: &str = "numerical";

const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];

/// Standard colors for the plotted series.
pub mod colors {
    use egui::Color32;

    /// Position samples and reported velocity (blue)
    pub const REPORTED: Color32 = Color32::from_rgb(30, 90, 230);

    /// Forward-difference velocity (red)
    pub const NUMERICAL: Color32 = Color32::from_rgb(220, 40, 40);
}

/// What a comparison run leaves behind for the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonOutcome {
    /// Layout state after both figures, ready for a further figure
    pub next: LayoutState,
    /// Reported minus numerical velocity over the defined samples
    pub residual: VelocityResidual,
}

/// Differentiate the positions, then present the position figure followed by
/// the velocity figure, tiled according to `config`.
///
/// Differentiation and placement happen before anything is presented, so a
/// degenerate timestep or a layout overflow leaves `surface` untouched.
pub fn render_comparison_views<S>(
    samples: &SampleSet,
    config: &LayoutConfig,
    surface: &mut S,
) -> Result<ComparisonOutcome>
where
    S: RenderSurface + ?Sized,
{
    let numerical = samples.numerical_velocity()?;
    let residual = VelocityResidual::compute(samples.velocity(), &numerical);
    info!(%residual, "velocity residual");

    let first = config.initial_state();
    let second = first.advance(config.tiling_direction)?;
    let next = second.advance(config.tiling_direction)?;
    let first_geometry = config.geometry(first)?;
    let second_geometry = config.geometry(second)?;

    surface.present(position_figure(samples, first.figure, first_geometry))?;
    surface.present(velocity_figure(
        samples,
        &numerical,
        second.figure,
        second_geometry,
    ))?;

    Ok(ComparisonOutcome { next, residual })
}

/// Three stacked plots of position against time, one per axis.
pub fn position_figure(samples: &SampleSet, id: u32, geometry: WindowGeometry) -> Figure {
    let time = samples.time();
    let panels = AXIS_NAMES
        .iter()
        .enumerate()
        .map(|(axis, name)| {
            time_panel(
                name,
                time,
                vec![Series::new(
                    *name,
                    colors::REPORTED,
                    samples.position().axis_points(axis, time),
                )],
            )
        })
        .collect();

    Figure {
        id,
        title: POSITION_TITLE.into(),
        geometry,
        panels,
    }
}

/// Three stacked plots overlaying reported and numerical velocity per axis.
///
/// The numerical series only covers the defined samples, so it ends one
/// timestamp before the reported series.
pub fn velocity_figure(
    samples: &SampleSet,
    numerical: &NumericalVelocity,
    id: u32,
    geometry: WindowGeometry,
) -> Figure {
    let time = samples.time();
    let numerical_time = numerical.valid_time(time);
    let panels = AXIS_NAMES
        .iter()
        .enumerate()
        .map(|(axis, name)| {
            time_panel(
                &format!("v{name}"),
                time,
                vec![
                    Series::new(
                        REPORTED_NAME,
                        colors::REPORTED,
                        samples.velocity().axis_points(axis, time),
                    ),
                    Series::new(
                        NUMERICAL_NAME,
                        colors::NUMERICAL,
                        numerical.valid().axis_points(axis, numerical_time),
                    ),
                ],
            )
        })
        .collect();

    Figure {
        id,
        title: VELOCITY_TITLE.into(),
        geometry,
        panels,
    }
}

fn time_panel(y_label: &str, time: &[f64], series: Vec<Series>) -> Panel {
    let first = time.first().copied().unwrap_or_default();
    let last = time.last().copied().unwrap_or_default();
    Panel {
        y_label: y_label.into(),
        x_label: TIME_LABEL.into(),
        grid: true,
        x_range: [first.min(last), first.max(last)],
        series,
    }
}
