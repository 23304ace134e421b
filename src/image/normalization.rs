//! Rescaling of arbitrary numeric samples into the 8-bit display range

use log::{debug, trace};
use ndarray::{Array, ArrayBase, ArrayD, Data, Dimension};
use num_traits::AsPrimitive;

use super::grid::{Sample, SampleGrid, with_grid};
use crate::error::{Error, Result};
use crate::types::Range;

/// Ensure a grid holds unsigned bytes
///
/// A `u8` grid without an explicit range is returned unchanged. Anything else
/// is rescaled so that `lo -> 0` and `hi -> 255`, with `(lo, hi)` defaulting
/// to the grid's own minimum and maximum.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if the range collapses to a single value
/// and [`Error::EmptyGrid`] if there are no samples to derive it from
pub fn normalize_to_uint8(grid: SampleGrid, range: Option<Range>) -> Result<ArrayD<u8>> {
    match (grid, range) {
        (SampleGrid::U8(data), None) => {
            trace!("grid of shape {:?} is already u8, skipping rescale", data.shape());
            Ok(data)
        }
        (grid, range) => with_grid!(grid, data => rescale_to_u8(&data, range)),
    }
}

/// Linearly rescale `grid` into `[0, 255]`, clipping values outside `range`
///
/// Unlike [`normalize_to_uint8`] this always rescales, even for `u8` input.
///
/// # Errors
///
/// Same as [`normalize_to_uint8`]
pub fn rescale_to_u8<S, D>(grid: &ArrayBase<S, D>, range: Option<Range>) -> Result<Array<u8, D>>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    let range = match range {
        Some(range) => range,
        None => find_min_max(grid).map(Range::from).ok_or(Error::EmptyGrid)?,
    };

    if range.is_degenerate() {
        return Err(Error::InvalidRange {
            lo: range.lo,
            hi: range.hi,
        });
    }

    debug!("rescaling grid of shape {:?} from {range} to u8", grid.shape());

    let (lo, span) = (range.lo, range.span());
    Ok(grid.mapv(|value| scale_sample(value.as_(), lo, span)))
}

/// Minimum and maximum sample as `f32`, ignoring NaN
///
/// Returns `None` when the grid has no comparable samples.
#[must_use]
pub fn find_min_max<S, D>(grid: &ArrayBase<S, D>) -> Option<(f32, f32)>
where
    S: Data,
    S::Elem: Sample,
    D: Dimension,
{
    grid.iter()
        .map(|&value| -> f32 { value.as_() })
        .filter(|value| !value.is_nan())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

#[inline(always)]
#[must_use]
// Hot path: called for every sample
pub fn scale_sample(value: f32, lo: f32, span: f32) -> u8 {
    let unit = ((value - lo) / span).clamp(0.0, 1.0);
    // NaN survives the clamp and saturates to 0
    (unit * 255.0_f32).round_ties_even() as u8
}
