//! Sample grids whose element type is only known at runtime

use ndarray::ArrayD;
use num_traits::AsPrimitive;

/// Numeric sample that can be widened to the `f32` working type
pub trait Sample: Copy + AsPrimitive<f32> {}

impl<T: Copy + AsPrimitive<f32>> Sample for T {}

/// Dynamically typed sample grid, one variant per supported element type
#[derive(Debug, Clone, PartialEq)]
pub enum SampleGrid {
    U8(ArrayD<u8>),
    U16(ArrayD<u16>),
    I16(ArrayD<i16>),
    U32(ArrayD<u32>),
    I32(ArrayD<i32>),
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
}

/// Run `$body` with `$data` bound to the inner array, whatever its type
macro_rules! with_grid {
    ($grid:expr, $data:ident => $body:expr) => {
        match $grid {
            SampleGrid::U8($data) => $body,
            SampleGrid::U16($data) => $body,
            SampleGrid::I16($data) => $body,
            SampleGrid::U32($data) => $body,
            SampleGrid::I32($data) => $body,
            SampleGrid::F32($data) => $body,
            SampleGrid::F64($data) => $body,
        }
    };
}

pub(crate) use with_grid;

impl SampleGrid {
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        with_grid!(self, data => data.shape())
    }

    #[inline]
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Name of the element type, as printed in log messages
    #[must_use]
    pub fn dtype(&self) -> &'static str {
        match self {
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::I16(_) => "i16",
            Self::U32(_) => "u32",
            Self::I32(_) => "i32",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
        }
    }

    #[must_use]
    pub fn is_u8(&self) -> bool {
        matches!(self, Self::U8(_))
    }
}

macro_rules! impl_from_array {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<ArrayD<$ty>> for SampleGrid {
                fn from(data: ArrayD<$ty>) -> Self {
                    Self::$variant(data)
                }
            }
        )*
    };
}

impl_from_array!(
    u8 => U8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    f32 => F32,
    f64 => F64,
);
