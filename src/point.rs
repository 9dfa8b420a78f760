use num_traits::Float;
use core::ops::{Add, Sub};

/// Trait defined over 2D points of some float scalar.
/// The curve math in this crate is written against this trait only, so unit-square
/// points and viewport points share one Bézier implementation.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point: Add<Output = Self> + Sub<Output = Self> + Copy + PartialEq + Default
{
    type Scalar: Float + Default;

    fn x(&self) -> Self::Scalar;

    fn y(&self) -> Self::Scalar;

    /// Returns the component of the Point on its axis corresponding to index [0, 1] -> [x, y]
    fn axis(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.x(),
            _ => self.y(),
        }
    }

    /// Multiplies both components with factor
    fn scale(self, factor: Self::Scalar) -> Self;

    /// Interprets the Point as a vector and returns its squared norm
    fn squared_length(&self) -> Self::Scalar {
        self.x() * self.x() + self.y() * self.y()
    }

    /// Returns the distance between the two Points self and other
    fn distance(&self, other: Self) -> Self::Scalar {
        (*self - other).squared_length().sqrt()
    }
}
