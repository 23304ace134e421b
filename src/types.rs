//! Small value types passed between the helpers

use std::fmt;

/// Bounds used to rescale samples into the 8-bit range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub lo: f32,
    pub hi: f32,
}

impl Range {
    #[must_use]
    pub fn new(lo: f32, hi: f32) -> Self {
        Self { lo, hi }
    }

    /// Width of the range; negative when `lo > hi`
    #[inline]
    #[must_use]
    pub fn span(&self) -> f32 {
        self.hi - self.lo
    }

    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }
}

impl From<(f32, f32)> for Range {
    fn from((lo, hi): (f32, f32)) -> Self {
        Self::new(lo, hi)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{lo}, {hi}]", lo = self.lo, hi = self.hi)
    }
}

/// Pillow-compatible color mode, derived from the band count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Single band luminance
    L,
    Rgb,
    Rgba,
}

impl ColorMode {
    #[inline]
    #[must_use]
    pub fn bands(&self) -> usize {
        match self {
            Self::L => 1,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    #[must_use]
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba)
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::L => write!(f, "L"),
            Self::Rgb => write!(f, "RGB"),
            Self::Rgba => write!(f, "RGBA"),
        }
    }
}
