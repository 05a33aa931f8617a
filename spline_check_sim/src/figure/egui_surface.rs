//! Native windows for figures, one egui viewport per figure.

use std::ffi::OsString;

use tracing::info;

use super::{Figure, RenderSurface};
use crate::app::{viewport_builder, FigureApp};
use crate::error::RenderError;

/// Collects figures and shows them all in a single blocking event loop.
///
/// The first presented figure becomes the root window; closing it ends
/// [`show_all`](Self::show_all). Every other figure gets its own viewport
/// that can be closed independently.
#[derive(Debug)]
pub struct EguiSurface {
    figures: Vec<Figure>,
}

impl EguiSurface {
    /// Fails if there is no display to open windows on.
    pub fn new() -> Result<Self, RenderError> {
        check_display(|var| std::env::var_os(var))?;
        Ok(Self {
            figures: Vec::new(),
        })
    }

    /// Open every presented figure and block until the root window closes.
    pub fn show_all(self) -> Result<(), RenderError> {
        let mut figures = self.figures.into_iter();
        let Some(root) = figures.next() else {
            info!("no figures to show");
            return Ok(());
        };

        let app_name = root.title.clone();
        let options = eframe::NativeOptions {
            viewport: viewport_builder(&root),
            ..Default::default()
        };
        let app = FigureApp::new(root, figures.collect());

        eframe::run_native(&app_name, options, Box::new(move |_cc| Ok(Box::new(app))))
            .map_err(|e| RenderError::TargetUnavailable(e.to_string()))
    }
}

impl RenderSurface for EguiSurface {
    fn present(&mut self, figure: Figure) -> Result<(), RenderError> {
        info!(
            id = figure.id,
            title = %figure.title,
            x = figure.geometry.x,
            y = figure.geometry.y,
            "queued figure window"
        );
        self.figures.push(figure);
        Ok(())
    }
}

/// Variables that point a Linux/BSD client at a running display server
const DISPLAY_VARS: [&str; 2] = ["DISPLAY", "WAYLAND_DISPLAY"];

fn check_display(lookup: impl Fn(&str) -> Option<OsString>) -> Result<(), RenderError> {
    if cfg!(all(unix, not(target_os = "macos"))) {
        require_display_var(lookup)?;
    }
    Ok(())
}

fn require_display_var(lookup: impl Fn(&str) -> Option<OsString>) -> Result<(), RenderError> {
    let found = DISPLAY_VARS
        .iter()
        .any(|&var| lookup(var).is_some_and(|v| !v.is_empty()));
    if !found {
        return Err(RenderError::TargetUnavailable(
            "neither DISPLAY nor WAYLAND_DISPLAY is set".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spline_check_algo::WindowGeometry;

    fn env(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<OsString> {
        move |name: &str| {
            vars.iter()
                .find(|(var, _)| *var == name)
                .map(|(_, value)| OsString::from(*value))
        }
    }

    #[test]
    fn test_missing_display_is_target_unavailable() {
        assert!(matches!(
            require_display_var(env(&[])),
            Err(RenderError::TargetUnavailable(_))
        ));
        assert!(matches!(
            require_display_var(env(&[("DISPLAY", ""), ("WAYLAND_DISPLAY", "")])),
            Err(RenderError::TargetUnavailable(_))
        ));
    }

    #[test]
    fn test_either_display_var_is_enough() {
        assert!(require_display_var(env(&[("DISPLAY", ":0")])).is_ok());
        assert!(require_display_var(env(&[("WAYLAND_DISPLAY", "wayland-0")])).is_ok());
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_new_surface_without_display_fails() {
        assert!(matches!(
            check_display(env(&[])),
            Err(RenderError::TargetUnavailable(_))
        ));
    }

    #[test]
    fn test_show_all_without_figures_returns_immediately() {
        let surface = EguiSurface {
            figures: Vec::new(),
        };
        assert!(surface.show_all().is_ok());
    }

    #[test]
    fn test_present_queues_in_order() {
        let mut surface = EguiSurface {
            figures: Vec::new(),
        };
        for id in [1, 2] {
            surface
                .present(Figure {
                    id,
                    title: format!("figure {id}"),
                    geometry: WindowGeometry {
                        x: 0,
                        y: 0,
                        width: 10,
                        height: 10,
                    },
                    panels: Vec::new(),
                })
                .unwrap();
        }

        let ids: Vec<_> = surface.figures.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
