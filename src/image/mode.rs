//! Band handling: color mode inference and alpha collapse

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::error::{Error, Result};
use crate::types::ColorMode;

impl ColorMode {
    /// Infer the mode of a `[lines, samples]` or `[lines, samples, bands]` shape
    ///
    /// # Errors
    ///
    /// Returns an error for any other rank, or a band count other than 1, 3 or 4
    pub fn from_shape(shape: &[usize]) -> Result<Self> {
        let bands = match shape {
            [_, _] => 1,
            [_, _, bands] => *bands,
            _ => return Err(Error::InvalidDimensions(shape.len())),
        };

        match bands {
            1 => Ok(Self::L),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            other => Err(Error::InvalidBandCount(other)),
        }
    }
}

/// Determine the Pillow-compatible color mode of a grid
///
/// # Errors
///
/// See [`ColorMode::from_shape`]
#[inline]
pub fn image_data_mode<S, D>(grid: &ArrayBase<S, D>) -> Result<ColorMode>
where
    S: Data,
    D: Dimension,
{
    ColorMode::from_shape(grid.shape())
}

/// Collapse the alpha band of an RGBA grid
///
/// No compositing rule is defined, so this always fails.
///
/// # Errors
///
/// Always returns [`Error::Unsupported`]
pub fn collapse_alpha<S, D>(_grid: &ArrayBase<S, D>) -> Result<Array<S::Elem, D>>
where
    S: Data,
    D: Dimension,
{
    Err(Error::Unsupported("alpha collapse"))
}
