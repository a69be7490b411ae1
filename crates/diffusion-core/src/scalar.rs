use num::Zero;
use std::ops::{Add, Div};

/// Numeric cell type a [`Grid`](crate::grid::Grid) can hold.
///
/// Requires a zero, value semantics, addition and division, plus a lossless
/// conversion from `u8` so the stencil divisor `4` exists in `T` itself.
/// Division keeps the semantics of `T`: exact for floats, truncating for
/// integers.
pub trait Scalar: Copy + Zero + Add<Output = Self> + Div<Output = Self> + From<u8> {
    /// Stencil divisor for the four axis neighbours.
    fn four() -> Self {
        Self::from(4u8)
    }
}

impl<T> Scalar for T where T: Copy + Zero + Add<Output = T> + Div<Output = T> + From<u8> {}
