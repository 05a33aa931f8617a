//! Figure description and the surfaces that can display one.
//!
//! A [`Figure`] is plain data: a window geometry plus a stack of line plots.
//! Building figures never touches a display; only a [`RenderSurface`] does.

mod egui_surface;

pub use egui_surface::EguiSurface;

use egui::Color32;
use spline_check_algo::WindowGeometry;
use tracing::debug;

use crate::error::RenderError;

/// One line series on a panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend entry
    pub name: String,
    pub color: Color32,
    /// `[x, y]` points in drawing order
    pub points: Vec<[f64; 2]>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Color32, points: Vec<[f64; 2]>) -> Self {
        Self {
            name: name.into(),
            color,
            points,
        }
    }
}

/// A single plot inside a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub y_label: String,
    pub x_label: String,
    pub grid: bool,
    /// Horizontal extent shared by every panel of the figure
    pub x_range: [f64; 2],
    pub series: Vec<Series>,
}

/// A window holding vertically stacked panels.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Figure number, unique within a run
    pub id: u32,
    pub title: String,
    pub geometry: WindowGeometry,
    pub panels: Vec<Panel>,
}

/// Something that can put a [`Figure`] on screen at its geometry.
///
/// Implementations decide when the figure becomes visible; presenting must
/// not block.
pub trait RenderSurface {
    fn present(&mut self, figure: Figure) -> Result<(), RenderError>;
}

/// Headless surface that keeps every presented figure in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    figures: Vec<Figure>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn into_figures(self) -> Vec<Figure> {
        self.figures
    }
}

impl RenderSurface for RecordingSurface {
    fn present(&mut self, figure: Figure) -> Result<(), RenderError> {
        debug!(
            id = figure.id,
            title = %figure.title,
            geometry = ?figure.geometry,
            "recorded figure"
        );
        self.figures.push(figure);
        Ok(())
    }
}
