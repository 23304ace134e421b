//! Error type shared by every helper in the crate

use thiserror::Error;

/// Errors raised while preparing sample grids for display
#[derive(Debug, Error)]
pub enum Error {
    /// The rescale range collapses to a single value
    #[error("Invalid data range: {lo}, {hi}")]
    InvalidRange { lo: f32, hi: f32 },

    /// No samples to derive a range from
    #[error("Cannot derive a data range from a grid without samples")]
    EmptyGrid,

    /// Target tile size yields zero tiles along an axis
    #[error("Invalid tile size {target_size} for axis {axis} of length {length}")]
    InvalidTileSize {
        target_size: usize,
        axis: usize,
        length: usize,
    },

    #[error("Invalid number of data dimensions: {0}")]
    InvalidDimensions(usize),

    #[error("Invalid number of bands: {0}")]
    InvalidBandCount(usize),

    /// Grid extents do not fit an `image` buffer
    #[error("Grid of {lines}x{samples} does not fit an image buffer")]
    BufferSize { lines: usize, samples: usize },

    /// Operation is recognised but not implemented
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
