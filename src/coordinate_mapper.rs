//! Mapping between the unit square (y up) and a square pixel viewport (y down).
//!
//! Available functions:
//! - `to_pixel()`
//! - `to_unit()`
//!
//! `CoordinateMapper` validates the viewport side once so that both directions
//! become infallible afterwards.
use num_traits::Float;
use thiserror::Error;

use super::point2::{PixelPoint, UnitPoint};
use super::NativeFloat;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MappingError {
    /// The viewport side cannot be divided by: zero or not finite
    #[error("viewport side length {0} cannot be mapped back to the unit square")]
    DegenerateViewport(NativeFloat),
}

#[inline]
fn invert_y<T: Float>(x: T, y: T) -> (T, T) {
    (x, T::one() - y)
}

/// Map a unit-square point into a viewport with side `size`.
/// The y axis is flipped so that (0, 0) lands in the bottom left corner.
/// `size` is not validated, a non-positive side yields a degenerate point.
pub fn to_pixel<T: Float>(unit_point: UnitPoint<T>, size: T) -> PixelPoint<T> {
    let (x, y) = invert_y(unit_point.x, unit_point.y);
    PixelPoint::new(x * size, y * size)
}

/// Map a viewport point back into the unit square. Exact inverse of `to_pixel()`.
/// Returns `MappingError::DegenerateViewport` for a zero or non-finite `size`.
pub fn to_unit<T: Float>(pixel_point: PixelPoint<T>, size: T) -> Result<UnitPoint<T>, MappingError> {
    if size == T::zero() || !size.is_finite() {
        return Err(MappingError::DegenerateViewport(
            size.to_f64().unwrap_or(NativeFloat::NAN),
        ));
    }
    Ok(unit_from_pixel(pixel_point, size))
}

#[inline]
fn unit_from_pixel<T: Float>(pixel_point: PixelPoint<T>, size: T) -> UnitPoint<T> {
    let (x, y) = invert_y(pixel_point.x / size, pixel_point.y / size);
    UnitPoint::new(x, y)
}

/// Bidirectional mapper for a square viewport of known, strictly positive side length
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateMapper<T = NativeFloat>
{
    size: T,
}

impl<T: Float> CoordinateMapper<T>
{
    pub fn new(size: T) -> Result<Self, MappingError> {
        if !(size > T::zero()) || !size.is_finite() {
            return Err(MappingError::DegenerateViewport(
                size.to_f64().unwrap_or(NativeFloat::NAN),
            ));
        }
        Ok(CoordinateMapper { size })
    }

    /// Side length of the viewport in pixels
    pub fn size(&self) -> T {
        self.size
    }

    pub fn to_pixel(&self, unit_point: UnitPoint<T>) -> PixelPoint<T> {
        to_pixel(unit_point, self.size)
    }

    pub fn to_unit(&self, pixel_point: PixelPoint<T>) -> UnitPoint<T> {
        unit_from_pixel(pixel_point, self.size)
    }
}
