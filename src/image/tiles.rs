//! Tiling of sample grids into near-equal, even-sized rectangles
//!
//! Chunk counts are truncated (`floor(length / target_size)`) while chunk
//! extents are rounded (`round(length / count)`, ties to even) and then forced
//! even. The last row or column of tiles may therefore stop short of the far
//! edge of the grid; tile boundaries are kept exactly as computed.

use std::iter::FusedIterator;

use log::debug;
use ndarray::{ArrayBase, ArrayView, Axis, Data, Dimension, Slice};

use crate::error::{Error, Result};

/// Geometry of a tiling, independent of the grid contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayout {
    pub num_lines: usize,
    pub num_samples: usize,
    pub num_chunk_lines: usize,
    pub chunk_lines: usize,
    pub num_chunk_samples: usize,
    pub chunk_samples: usize,
}

impl TileLayout {
    /// Compute the layout for a `num_lines x num_samples` plane
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTileSize`] if `target_size` is zero or larger
    /// than either axis
    pub fn new(num_lines: usize, num_samples: usize, target_size: usize) -> Result<Self> {
        let (num_chunk_lines, chunk_lines) = split_axis(0, num_lines, target_size)?;
        let (num_chunk_samples, chunk_samples) = split_axis(1, num_samples, target_size)?;

        let layout = Self {
            num_lines,
            num_samples,
            num_chunk_lines,
            chunk_lines,
            num_chunk_samples,
            chunk_samples,
        };
        debug!("tile layout for target size {target_size}: {layout:?}");

        Ok(layout)
    }

    /// Total number of tiles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.num_chunk_lines * self.num_chunk_samples
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-left `(line_offset, sample_offset)` of the tile at row-major `index`
    #[must_use]
    pub fn offset(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.len() {
            return None;
        }
        let row = index / self.num_chunk_samples;
        let col = index % self.num_chunk_samples;
        Some((row * self.chunk_lines, col * self.chunk_samples))
    }
}

fn split_axis(axis: usize, length: usize, target_size: usize) -> Result<(usize, usize)> {
    let count = length.checked_div(target_size).unwrap_or(0);
    if count == 0 {
        return Err(Error::InvalidTileSize {
            target_size,
            axis,
            length,
        });
    }

    let extent = (length as f64 / count as f64).round_ties_even() as usize;
    Ok((count, extent - extent % 2))
}

/// A tile borrowed from its parent grid, with its origin in parent coordinates
#[derive(Debug, Clone)]
pub struct Tile<'a, A, D: Dimension> {
    pub data: ArrayView<'a, A, D>,
    pub line_offset: usize,
    pub sample_offset: usize,
}

impl<A, D: Dimension> Tile<'_, A, D> {
    /// `(lines, samples)` actually covered by this tile
    #[must_use]
    pub fn extent(&self) -> (usize, usize) {
        let shape = self.data.shape();
        (shape[0], shape[1])
    }
}

/// Lazy row-major iterator over the tiles of a grid
///
/// Created by [`tiles`].
#[derive(Debug, Clone)]
pub struct Tiles<'a, A, D: Dimension> {
    grid: ArrayView<'a, A, D>,
    layout: TileLayout,
    next: usize,
}

impl<A, D: Dimension> Tiles<'_, A, D> {
    #[must_use]
    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }
}

impl<'a, A, D: Dimension> Iterator for Tiles<'a, A, D> {
    type Item = Tile<'a, A, D>;

    fn next(&mut self) -> Option<Self::Item> {
        let (line_offset, sample_offset) = self.layout.offset(self.next)?;
        self.next += 1;

        // Spans past the far edge are clipped, never padded
        let lines = clipped(line_offset, self.layout.chunk_lines, self.layout.num_lines);
        let samples = clipped(sample_offset, self.layout.chunk_samples, self.layout.num_samples);

        let data = self
            .grid
            .clone()
            .slice_axis_move(Axis(0), lines)
            .slice_axis_move(Axis(1), samples);

        Some(Tile {
            data,
            line_offset,
            sample_offset,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.layout.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<A, D: Dimension> ExactSizeIterator for Tiles<'_, A, D> {}

impl<A, D: Dimension> FusedIterator for Tiles<'_, A, D> {}

fn clipped(start: usize, extent: usize, length: usize) -> Slice {
    let start = start.min(length);
    let end = (start + extent).min(length);
    Slice::from(start..end)
}

/// Iterate over near-equal tiles of roughly `target_size` samples per edge
///
/// Only the first two axes are split; any band axis is kept whole.
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] for grids with fewer than two axes
/// and [`Error::InvalidTileSize`] when `target_size` leaves an axis without
/// a single whole chunk
pub fn tiles<S, D>(grid: &ArrayBase<S, D>, target_size: usize) -> Result<Tiles<'_, S::Elem, D>>
where
    S: Data,
    D: Dimension,
{
    let shape = grid.shape();
    if shape.len() < 2 {
        return Err(Error::InvalidDimensions(shape.len()));
    }

    let layout = TileLayout::new(shape[0], shape[1], target_size)?;

    Ok(Tiles {
        grid: grid.view(),
        layout,
        next: 0,
    })
}
