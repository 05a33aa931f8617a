//! Error taxonomy for loading and differentiating spline samples.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A sample file is missing or could not be read.
    #[error("sample data not found at {}", path.display())]
    DataNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sample file (or in-memory table) is not a valid numeric table.
    #[error("malformed sample data{}: {reason}", location(path.as_deref(), *line))]
    MalformedData {
        path: Option<PathBuf>,
        /// 1-based line number within `path`
        line: Option<usize>,
        reason: String,
    },

    /// The position, velocity and time sequences disagree in length.
    #[error(
        "sample length mismatch: {position} positions, {velocity} velocities, {time} timestamps"
    )]
    LengthMismatch {
        position: usize,
        velocity: usize,
        time: usize,
    },

    /// Two consecutive timestamps are equal, so the forward difference at
    /// `index` would divide by zero.
    #[error("degenerate timestep at index {index}: time[{index}] == time[{}] == {time}", index + 1)]
    DegenerateTimestep { index: usize, time: f64 },

    /// Positions and timestamps handed to the differentiator disagree in
    /// length.
    #[error("cannot differentiate {position} positions against {time} timestamps")]
    DerivativeLengthMismatch { position: usize, time: usize },

    /// The forward difference at `index` overflowed even though its inputs
    /// were finite, e.g. a subnormal timestep.
    #[error("non-finite velocity at index {index}: {value}")]
    NonFiniteDerivative { index: usize, value: f64 },

    /// A window offset or a layout counter does not fit in `u32`.
    #[error("layout overflow: {0}")]
    LayoutOverflow(String),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedData {
            path: None,
            line: None,
            reason: reason.into(),
        }
    }
}

fn location(path: Option<&std::path::Path>, line: Option<usize>) -> String {
    match (path, line) {
        (Some(path), Some(line)) => format!(" in {}:{line}", path.display()),
        (Some(path), None) => format!(" in {}", path.display()),
        (None, Some(line)) => format!(" at line {line}"),
        (None, None) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_file_and_line() {
        let err = Error::MalformedData {
            path: Some(PathBuf::from("data/spline.txt")),
            line: Some(7),
            reason: "expected 3 columns, found 2".into(),
        };
        assert_eq!(
            err.to_string(),
            "malformed sample data in data/spline.txt:7: expected 3 columns, found 2"
        );
    }

    #[test]
    fn test_layout_overflow_message() {
        let err = Error::LayoutOverflow("figure number after 4294967295".into());
        assert_eq!(
            err.to_string(),
            "layout overflow: figure number after 4294967295"
        );
    }

    #[test]
    fn test_degenerate_message_names_both_indices() {
        let err = Error::DegenerateTimestep {
            index: 1,
            time: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "degenerate timestep at index 1: time[1] == time[2] == 1"
        );
    }
}
