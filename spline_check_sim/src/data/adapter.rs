use spline_check_algo::Vector3;

/// Allows extracting one spatial component of a vector sequence as `[t, v]`
/// points for a [`Line`](egui_plot::Line).
///
/// Axis assignments:
///
/// - 0 = x
/// - 1 = y
/// - 2 = z
pub trait AxisSeries {
    /// Pair `self[i][axis]` with `time[i]`. Stops at the shorter of the two.
    fn axis_points(&self, axis: usize, time: &[f64]) -> Vec<[f64; 2]>;
}

impl AxisSeries for [Vector3<f64>] {
    fn axis_points(&self, axis: usize, time: &[f64]) -> Vec<[f64; 2]> {
        time.iter()
            .zip(self)
            .map(|(&t, v)| [t, v[axis]])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_points_pairs_time_and_component() {
        let values = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
        let time = [0.0, 0.1];

        assert_eq!(values.axis_points(1, &time), vec![[0.0, 2.0], [0.1, 5.0]]);
        assert_eq!(values.axis_points(2, &time), vec![[0.0, 3.0], [0.1, 6.0]]);
    }

    #[test]
    fn test_axis_points_truncates_to_shorter() {
        let values = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];

        assert_eq!(values.axis_points(0, &[0.0]), vec![[0.0, 1.0]]);
        assert_eq!(values[..1].axis_points(0, &[0.0, 1.0, 2.0]), vec![[0.0, 1.0]]);
    }
}
