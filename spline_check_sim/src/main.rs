use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use spline_check_sim::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Compare a spline's reported velocity with the forward difference of its
/// positions, in two tiled plot windows.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory holding spline.txt, spline_vel.txt and time.txt
    #[arg(long, default_value = "../test_data")]
    data_dir: PathBuf,

    /// Width of one screen cell in pixels
    #[arg(long, default_value_t = 480)]
    width: u32,

    /// Height of one screen cell in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Number of the first figure
    #[arg(long, default_value_t = 1)]
    figure: u32,

    /// Starting tile column
    #[arg(long, default_value_t = 0)]
    column: u32,

    /// Starting tile row
    #[arg(long, default_value_t = 0)]
    row: u32,

    /// Direction in which consecutive figures are tiled
    #[arg(long, value_enum, default_value_t = Tiling::Horizontal)]
    tiling: Tiling,

    /// Only log figure placements, do not open windows
    #[arg(long)]
    headless: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Tiling {
    Horizontal,
    Vertical,
    Fixed,
}

impl From<Tiling> for TilingDirection {
    fn from(tiling: Tiling) -> Self {
        match tiling {
            Tiling::Horizontal => Self::Horizontal,
            Tiling::Vertical => Self::Vertical,
            Tiling::Fixed => Self::Fixed,
        }
    }
}

impl Args {
    fn layout(&self) -> LayoutConfig {
        LayoutConfig {
            subfigure_width: self.width,
            subfigure_height: self.height,
            starting_figure_index: self.figure,
            starting_column_index: self.column,
            starting_row_index: self.row,
            tiling_direction: self.tiling.into(),
        }
    }
}

fn run(args: &Args) -> spline_check_sim::Result<()> {
    let samples = SampleSet::load(&args.data_dir)?;
    let layout = args.layout();
    info!(tiling = layout.tiling_direction.label(), "rendering comparison views");

    if args.headless {
        let mut surface = RecordingSurface::new();
        render_comparison_views(&samples, &layout, &mut surface)?;
        for figure in surface.figures() {
            info!(
                id = figure.id,
                title = %figure.title,
                geometry = ?figure.geometry,
                "figure placement"
            );
        }
        return Ok(());
    }

    let mut surface = EguiSurface::new()?;
    render_comparison_views(&samples, &layout, &mut surface)?;
    surface.show_all()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                error!("caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
