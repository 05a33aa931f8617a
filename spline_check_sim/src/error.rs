use thiserror::Error;

/// Failure to open or drive a render target.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No window can be created, e.g. there is no display to draw on.
    #[error("render target unavailable: {0}")]
    TargetUnavailable(String),
}

/// Anything that can abort a comparison run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] spline_check_algo::Error),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
