//! Loading spline samples (position, reported velocity, time) from disk.
//!
//! The three files are plain text tables: one sample per line, values
//! separated by whitespace. Blank lines are skipped and `#` starts a comment.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nalgebra::Vector3;
use tracing::{debug, info};

use crate::derivative::{forward_difference, NumericalVelocity};
use crate::error::{Error, Result};

/// File name of the position table
pub const POSITION_FILE: &str = "spline.txt";
/// File name of the reported velocity table
pub const VELOCITY_FILE: &str = "spline_vel.txt";
/// File name of the timestamp column
pub const TIME_FILE: &str = "time.txt";

/// Minimum number of samples needed to take a forward difference.
pub const MIN_SAMPLES: usize = 2;

/// Names of the three resources inside a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub position: PathBuf,
    pub velocity: PathBuf,
    pub time: PathBuf,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            position: POSITION_FILE.into(),
            velocity: VELOCITY_FILE.into(),
            time: TIME_FILE.into(),
        }
    }
}

/// Co-indexed position, reported velocity and time samples.
///
/// All three sequences have the same length `N >= 2`. The fields are private
/// so a `SampleSet` can only exist once that has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    position: Vec<Vector3<f64>>,
    velocity: Vec<Vector3<f64>>,
    time: Vec<f64>,
}

impl SampleSet {
    /// Build a sample set from in-memory sequences.
    pub fn new(
        position: Vec<Vector3<f64>>,
        velocity: Vec<Vector3<f64>>,
        time: Vec<f64>,
    ) -> Result<Self> {
        check_lengths(position.len(), velocity.len(), time.len())?;
        Ok(Self {
            position,
            velocity,
            time,
        })
    }

    /// Load `spline.txt`, `spline_vel.txt` and `time.txt` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(dir, &DataFiles::default())
    }

    /// Load the three tables named by `files` from `dir`.
    ///
    /// Nothing is returned unless all three files parse and agree in length.
    pub fn load_with(dir: impl AsRef<Path>, files: &DataFiles) -> Result<Self> {
        let dir = dir.as_ref();

        let position = read_vectors(&dir.join(&files.position))?;
        let velocity = read_vectors(&dir.join(&files.velocity))?;
        let time = read_column(&dir.join(&files.time))?;

        let samples = Self::new(position, velocity, time)?;
        info!(
            dir = %dir.display(),
            samples = samples.len(),
            "loaded spline samples"
        );
        Ok(samples)
    }

    /// Number of samples `N`.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Always false: a sample set holds at least [`MIN_SAMPLES`] samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn position(&self) -> &[Vector3<f64>] {
        &self.position
    }

    pub fn velocity(&self) -> &[Vector3<f64>] {
        &self.velocity
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Forward-difference velocity of the position samples.
    pub fn numerical_velocity(&self) -> Result<NumericalVelocity> {
        forward_difference(&self.position, &self.time)
    }
}

fn check_lengths(position: usize, velocity: usize, time: usize) -> Result<()> {
    if position != velocity || position != time {
        return Err(Error::LengthMismatch {
            position,
            velocity,
            time,
        });
    }
    if time < MIN_SAMPLES {
        return Err(Error::malformed(format!(
            "need at least {MIN_SAMPLES} samples, found {time}"
        )));
    }
    Ok(())
}

fn read_vectors(path: &Path) -> Result<Vec<Vector3<f64>>> {
    let rows = read_table(path, 3)?;
    Ok(rows
        .into_iter()
        .map(|row| Vector3::new(row[0], row[1], row[2]))
        .collect())
}

fn read_column(path: &Path) -> Result<Vec<f64>> {
    let rows = read_table(path, 1)?;
    Ok(rows.into_iter().map(|row| row[0]).collect())
}

fn read_table(path: &Path, columns: usize) -> Result<Vec<Vec<f64>>> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::InvalidData => Error::MalformedData {
            path: Some(path.to_path_buf()),
            line: None,
            reason: format!("not valid UTF-8 text ({source})"),
        },
        _ => Error::DataNotFound {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let rows = parse_table(&text, columns).map_err(|err| match err {
        Error::MalformedData { line, reason, .. } => Error::MalformedData {
            path: Some(path.to_path_buf()),
            line,
            reason,
        },
        other => other,
    })?;

    debug!(path = %path.display(), rows = rows.len(), "parsed sample table");
    Ok(rows)
}

/// Parse a whitespace-delimited numeric table with a fixed column count.
pub fn parse_table(text: &str, columns: usize) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let content = raw.split('#').next().unwrap_or_default().trim();
        if content.is_empty() {
            continue;
        }

        let malformed = |reason: String| Error::MalformedData {
            path: None,
            line: Some(line),
            reason,
        };

        let row = content
            .split_whitespace()
            .map(|token| match token.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                Ok(_) => Err(malformed(format!("non-finite value `{token}`"))),
                Err(_) => Err(malformed(format!("`{token}` is not a number"))),
            })
            .collect::<Result<Vec<_>>>()?;

        if row.len() != columns {
            return Err(malformed(format!(
                "expected {columns} column(s), found {}",
                row.len()
            )));
        }
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    fn write_dir(position: &str, velocity: &str, time: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(POSITION_FILE), position).unwrap();
        fs::write(dir.path().join(VELOCITY_FILE), velocity).unwrap();
        fs::write(dir.path().join(TIME_FILE), time).unwrap();
        dir
    }

    const FOUR_ROWS: &str = "0 0 0\n1 2 3\n2 4 6\n3 6 9\n";
    const FOUR_TIMES: &str = "0\n1\n2\n3\n";

    #[test]
    fn test_load_matching_lengths() {
        let dir = write_dir(FOUR_ROWS, "1 2 3\n1 2 3\n1 2 3\n1 2 3\n", FOUR_TIMES);

        let samples = SampleSet::load(dir.path()).unwrap();

        assert_eq!(samples.len(), 4);
        assert_eq!(samples.position().len(), 4);
        assert_eq!(samples.velocity().len(), 4);
        assert_eq!(samples.time().len(), 4);
        assert_eq!(samples.position()[2], Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(samples.time()[3], 3.0);
    }

    #[test]
    fn test_load_rejects_length_mismatch() {
        let five_rows = "0 0 0\n1 2 3\n2 4 6\n3 6 9\n4 8 12\n";
        let dir = write_dir(five_rows, five_rows, FOUR_TIMES);

        match SampleSet::load(dir.path()) {
            Err(Error::LengthMismatch {
                position,
                velocity,
                time,
            }) => {
                assert_eq!((position, velocity, time), (5, 5, 4));
            }
            other => panic!("expected length mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(POSITION_FILE), FOUR_ROWS).unwrap();

        match SampleSet::load(dir.path()) {
            Err(Error::DataNotFound { path, .. }) => {
                assert_eq!(path, dir.path().join(VELOCITY_FILE));
            }
            other => panic!("expected missing data, got {other:?}"),
        }
    }

    #[test]
    fn test_load_with_custom_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("pos.dat"), "0 0 0\n1 1 1\n").unwrap();
        fs::write(dir.path().join("vel.dat"), "1 1 1\n1 1 1\n").unwrap();
        fs::write(dir.path().join("t.dat"), "0.0\n0.5\n").unwrap();
        let files = DataFiles {
            position: "pos.dat".into(),
            velocity: "vel.dat".into(),
            time: "t.dat".into(),
        };

        let samples = SampleSet::load_with(dir.path(), &files).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples.time(), &[0.0, 0.5]);
    }

    #[test]
    fn test_malformed_file_reports_path_and_line() {
        let dir = write_dir("0 0 0\n1 2\n", "0 0 0\n0 0 0\n", "0\n1\n");

        match SampleSet::load(dir.path()) {
            Err(Error::MalformedData { path, line, .. }) => {
                assert_eq!(path, Some(dir.path().join(POSITION_FILE)));
                assert_eq!(line, Some(2));
            }
            other => panic!("expected malformed data, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_malformed_not_missing() {
        let dir = write_dir(FOUR_ROWS, FOUR_ROWS, FOUR_TIMES);
        fs::write(dir.path().join(TIME_FILE), [0xff, 0xfe]).unwrap();

        match SampleSet::load(dir.path()) {
            Err(Error::MalformedData { path, line, .. }) => {
                assert_eq!(path, Some(dir.path().join(TIME_FILE)));
                assert_eq!(line, None);
            }
            other => panic!("expected malformed data, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_skips_blank_lines_and_comments() {
        let text = "# x y z\n1.0 2.0 3.0\n\n  4e-1\t5 -6  # trailing\n";
        let rows = parse_table(text, 3).unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![0.4, 5.0, -6.0]]);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        match parse_table("0.0\nabc\n", 1) {
            Err(Error::MalformedData { line, reason, .. }) => {
                assert_eq!(line, Some(2));
                assert!(reason.contains("abc"));
            }
            other => panic!("expected malformed data, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            parse_table("1 2 3\n1 nan 3\n", 3),
            Err(Error::MalformedData { line: Some(2), .. })
        ));
        assert!(matches!(
            parse_table("inf\n", 1),
            Err(Error::MalformedData { line: Some(1), .. })
        ));
    }

    #[test]
    fn test_time_column_rejects_extra_values() {
        assert!(matches!(
            parse_table("0 1\n", 1),
            Err(Error::MalformedData { line: Some(1), .. })
        ));
    }

    #[test]
    fn test_new_requires_two_samples() {
        let result = SampleSet::new(vec![Vector3::zeros()], vec![Vector3::zeros()], vec![0.0]);
        assert!(matches!(result, Err(Error::MalformedData { .. })));
    }

    #[test]
    fn test_new_rejects_mismatched_velocity() {
        let result = SampleSet::new(
            vec![Vector3::zeros(); 3],
            vec![Vector3::zeros(); 2],
            vec![0.0, 1.0, 2.0],
        );
        assert!(matches!(
            result,
            Err(Error::LengthMismatch {
                position: 3,
                velocity: 2,
                time: 3
            })
        ));
    }
}
