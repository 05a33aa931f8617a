//! Tiling of figure windows over a grid of equally sized screen cells.
//!
//! A [`LayoutState`] is an immutable value: each placed figure consumes the
//! current state and [`LayoutState::advance`] produces the next one, so a
//! sequence of figures never needs shared counters.
//!
//! Every counter and offset is checked: a start index near `u32::MAX` is an
//! [`Error::LayoutOverflow`], never a wrapped window position.

use crate::error::{Error, Result};

/// How the tile position moves after each figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TilingDirection {
    /// Next figure goes one column to the right
    #[default]
    Horizontal,
    /// Next figure goes one row down
    Vertical,
    /// Tile position never changes; every figure lands on the same cell
    Fixed,
}

impl TilingDirection {
    /// Map the numeric layout codes used by older plotting scripts:
    /// `0` is vertical, `1` is horizontal, anything else keeps the tile fixed.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Vertical,
            1 => Self::Horizontal,
            _ => Self::Fixed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Fixed => "fixed",
        }
    }
}

/// Options for placing a sequence of figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Width of one screen cell in pixels
    pub subfigure_width: u32,
    /// Height of one screen cell in pixels
    pub subfigure_height: u32,
    /// Identifier of the first figure; later figures count up from it
    pub starting_figure_index: u32,
    pub starting_column_index: u32,
    pub starting_row_index: u32,
    pub tiling_direction: TilingDirection,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            subfigure_width: 480,
            subfigure_height: 600,
            starting_figure_index: 1,
            starting_column_index: 0,
            starting_row_index: 0,
            tiling_direction: TilingDirection::Horizontal,
        }
    }
}

impl LayoutConfig {
    /// The state for the first figure.
    pub fn initial_state(&self) -> LayoutState {
        LayoutState {
            figure: self.starting_figure_index,
            column: self.starting_column_index,
            row: self.starting_row_index,
        }
    }

    /// Screen geometry of the cell `state` points at.
    pub fn geometry(&self, state: LayoutState) -> Result<WindowGeometry> {
        let x = self.subfigure_width.checked_mul(state.column).ok_or_else(|| {
            Error::LayoutOverflow(format!(
                "column {} of width {} is past the last pixel",
                state.column, self.subfigure_width
            ))
        })?;
        let y = self.subfigure_height.checked_mul(state.row).ok_or_else(|| {
            Error::LayoutOverflow(format!(
                "row {} of height {} is past the last pixel",
                state.row, self.subfigure_height
            ))
        })?;
        Ok(WindowGeometry {
            x,
            y,
            width: self.subfigure_width,
            height: self.subfigure_height,
        })
    }
}

/// Which figure comes next and which tile it goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutState {
    pub figure: u32,
    pub column: u32,
    pub row: u32,
}

impl LayoutState {
    /// The state for the figure after this one.
    pub fn advance(self, direction: TilingDirection) -> Result<Self> {
        let (column, row) = match direction {
            TilingDirection::Horizontal => (step(self.column, "column")?, self.row),
            TilingDirection::Vertical => (self.column, step(self.row, "row")?),
            TilingDirection::Fixed => (self.column, self.row),
        };
        Ok(Self {
            figure: step(self.figure, "figure number")?,
            column,
            row,
        })
    }
}

fn step(value: u32, what: &str) -> Result<u32> {
    value
        .checked_add(1)
        .ok_or_else(|| Error::LayoutOverflow(format!("{what} after {value}")))
}

/// Window placement in screen pixels, origin at the top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowGeometry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
