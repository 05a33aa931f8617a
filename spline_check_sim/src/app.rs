use egui::{CentralPanel, Context, Id, ViewportBuilder, ViewportId};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

use crate::figure::Figure;

/// Panels never shrink below this many points, even in a small window.
const MIN_PANEL_HEIGHT: f32 = 60.0;

pub(crate) fn viewport_builder(figure: &Figure) -> ViewportBuilder {
    let g = figure.geometry;
    ViewportBuilder::default()
        .with_title(figure.title.clone())
        .with_position([g.x as f32, g.y as f32])
        .with_inner_size([g.width as f32, g.height as f32])
}

struct FigureWindow {
    figure: Figure,
    open: bool,
}

/// Shows one root figure plus any number of secondary figure windows.
pub struct FigureApp {
    root: Figure,
    others: Vec<FigureWindow>,
}

impl FigureApp {
    pub fn new(root: Figure, others: Vec<Figure>) -> Self {
        Self {
            root,
            others: others
                .into_iter()
                .map(|figure| FigureWindow { figure, open: true })
                .collect(),
        }
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        for window in self.others.iter_mut().filter(|w| w.open) {
            ctx.show_viewport_immediate(
                ViewportId::from_hash_of(("figure", window.figure.id)),
                viewport_builder(&window.figure),
                |ctx, _class| {
                    CentralPanel::default().show(ctx, |ui| draw_figure(ui, &window.figure));
                    if ctx.input(|i| i.viewport().close_requested()) {
                        window.open = false;
                    }
                },
            );
        }

        CentralPanel::default().show(ctx, |ui| draw_figure(ui, &self.root));
    }
}

/// Stack the panels of `figure` vertically, splitting the available height.
fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
    let count = figure.panels.len().max(1) as f32;
    let spacing = ui.spacing().item_spacing.y * (count - 1.0);
    let height = ((ui.available_height() - spacing) / count).max(MIN_PANEL_HEIGHT);
    // Panels of one figure pan and zoom together along time.
    let link_group = Id::new(("figure-time", figure.id));

    for (index, panel) in figure.panels.iter().enumerate() {
        Plot::new(("panel", figure.id, index))
            .height(height)
            .legend(Legend::default().position(Corner::RightTop))
            .show_grid(panel.grid)
            .x_axis_label(panel.x_label.clone())
            .y_axis_label(panel.y_label.clone())
            .include_x(panel.x_range[0])
            .include_x(panel.x_range[1])
            .link_axis(link_group, [true, false])
            .show(ui, |plot_ui| {
                for series in &panel.series {
                    plot_ui.line(
                        Line::new(series.name.clone(), PlotPoints::new(series.points.clone()))
                            .color(series.color),
                    );
                }
            });
    }
}
