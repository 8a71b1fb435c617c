//! Piecewise-linear, wrap-around mapping between two `[0, 1)` progress
//! spaces, used to align the outline-progress of two polygons before
//! matching their cubics.

use crate::{
    error::{Error, Result},
    geometry::DISTANCE_EPSILON,
    util::{positive_modulo, progress_distance, progress_in_range},
};

pub struct DoubleMapper {
    source_values: Vec<f32>,
    target_values: Vec<f32>,
}

fn validate_progress(p: &[f32]) -> Result<()> {
    let mut prev = p.last().copied().unwrap_or_default();
    let mut wraps = 0;

    for &curr in p {
        if !(0.0..1.0).contains(&curr) {
            return Err(Error::invalid_argument(format!("progress outside of [0, 1): {p:?}")));
        }

        if progress_distance(curr, prev) <= DISTANCE_EPSILON {
            return Err(Error::invalid_argument(format!("progress repeats a value: {p:?}")));
        }

        if curr < prev {
            wraps += 1;

            if wraps > 1 {
                return Err(Error::invalid_argument(format!("progress wraps more than once: {p:?}")));
            }
        }

        prev = curr;
    }

    Ok(())
}

impl DoubleMapper {
    /// The identity mapping: every source progress maps to itself.
    pub fn identity() -> Self {
        Self::new([(0.0, 0.0), (0.5, 0.5)]).expect("identity mapping is always valid")
    }

    /// Builds a mapper from paired (source, target) progress values. Both
    /// sequences must be monotonically increasing modulo at most one wrap,
    /// lie in `[0, 1)`, and not repeat a value.
    pub fn new<T: IntoIterator<Item = (f32, f32)>>(mappings: T) -> Result<Self> {
        let (source_values, target_values): (Vec<_>, Vec<_>) = mappings.into_iter().unzip();

        validate_progress(&source_values)?;
        validate_progress(&target_values)?;

        Ok(Self { source_values, target_values })
    }

    /// Maps a source progress `x` into the target progress space.
    pub fn map(&self, x: f32) -> f32 {
        linear_map(&self.source_values, &self.target_values, x)
    }

    /// Maps a target progress `x` back into the source progress space.
    pub fn map_back(&self, x: f32) -> f32 {
        linear_map(&self.target_values, &self.source_values, x)
    }
}

fn linear_map(x_values: &[f32], y_values: &[f32], x: f32) -> f32 {
    debug_assert!((0.0..=1.0).contains(&x), "invalid progress: {x}");

    let segment_start_index = (0..x_values.len())
        .find(|&it| progress_in_range(x, x_values[it], x_values[(it + 1) % x_values.len()]))
        .unwrap_or_default();

    let segment_end_index = (segment_start_index + 1) % x_values.len();
    let segment_size_x = positive_modulo(x_values[segment_end_index] - x_values[segment_start_index], 1.0);
    let segment_size_y = positive_modulo(y_values[segment_end_index] - y_values[segment_start_index], 1.0);
    let position_in_segment = if segment_size_x < 0.001 {
        0.5
    } else {
        positive_modulo(x - x_values[segment_start_index], 1.0) / segment_size_x
    };

    positive_modulo(segment_size_y.mul_add(position_in_segment, y_values[segment_start_index]), 1.0)
}
