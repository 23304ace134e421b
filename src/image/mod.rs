mod grid;
mod mode;
mod normalization;
mod tiles;

pub use grid::{Sample, SampleGrid};
pub use mode::{collapse_alpha, image_data_mode};
pub use normalization::{find_min_max, normalize_to_uint8, rescale_to_u8, scale_sample};
pub use tiles::{Tile, TileLayout, Tiles, tiles};

use crate::error::{Error, Result};
use crate::types::ColorMode;
use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use ndarray::{ArrayBase, Data, Dimension};

/// Copy a normalized `u8` grid (or tile) into a `DynamicImage`
///
/// The mode is inferred from the grid's shape, so the result can be handed
/// straight to any `image` encoder.
///
/// # Errors
///
/// Returns an error if the mode cannot be inferred or the grid is too large
/// for an image buffer
pub fn to_dynamic_image<S, D>(grid: &ArrayBase<S, D>) -> Result<DynamicImage>
where
    S: Data<Elem = u8>,
    D: Dimension,
{
    let mode = image_data_mode(grid)?;
    let (lines, samples) = (grid.shape()[0], grid.shape()[1]);
    let too_large = || Error::BufferSize { lines, samples };

    let width = u32::try_from(samples).map_err(|_| too_large())?;
    let height = u32::try_from(lines).map_err(|_| too_large())?;

    // Logical iteration order is row-major whatever the memory layout
    let raw: Vec<u8> = grid.iter().copied().collect();

    let image = match mode {
        ColorMode::L => GrayImage::from_raw(width, height, raw).map(DynamicImage::ImageLuma8),
        ColorMode::Rgb => RgbImage::from_raw(width, height, raw).map(DynamicImage::ImageRgb8),
        ColorMode::Rgba => RgbaImage::from_raw(width, height, raw).map(DynamicImage::ImageRgba8),
    };

    image.ok_or_else(too_large)
}
