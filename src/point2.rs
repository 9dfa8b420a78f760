use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;
use serde::{Deserialize, Serialize};

use super::point::Point;
use super::NativeFloat;

/// Marker for the normalized unit square, y measured bottom-up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct UnitSpace;

/// Marker for viewport pixel space, y measured top-down.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PixelSpace;

/// A 2D point tagged with the coordinate space it lives in.
/// Points of different spaces do not add or subtract; going from one to the
/// other is the job of the `coordinate_mapper` module.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2<T, S>
{
    pub x: T,
    pub y: T,
    #[serde(skip)]
    space: PhantomData<S>,
}

/// Control point position relative to the unit square.
pub type UnitPoint<T = NativeFloat> = Point2<T, UnitSpace>;

/// Position inside the square viewport the curve is drawn into.
pub type PixelPoint<T = NativeFloat> = Point2<T, PixelSpace>;

impl<T, S> Point2<T, S>
{
    pub const fn new(x: T, y: T) -> Self {
        Point2 {
            x,
            y,
            space: PhantomData,
        }
    }
}

impl<T: Float, S> Point2<T, S>
{
    /// True if both components lie in the closed interval [0, 1]
    pub fn is_in_unit_square(&self) -> bool {
        let unit = T::zero()..=T::one();
        unit.contains(&self.x) && unit.contains(&self.y)
    }
}

impl<T, S> From<(T, T)> for Point2<T, S>
{
    fn from((x, y): (T, T)) -> Self {
        Point2::new(x, y)
    }
}

impl<T, S> From<Point2<T, S>> for (T, T)
{
    fn from(p: Point2<T, S>) -> Self {
        (p.x, p.y)
    }
}

impl<T, S> Add for Point2<T, S>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point2::new(self.x + other.x, self.y + other.y)
    }
}

impl<T, S> Sub for Point2<T, S>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Point2::new(self.x - other.x, self.y - other.y)
    }
}

impl<T, S> Neg for Point2<T, S>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Point2::new(-self.x, -self.y)
    }
}

impl<T, S> Mul<T> for Point2<T, S>
where
    T: Mul<T, Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

/// Two decimals per component, the precision control point labels are shown with
impl<T: fmt::Display, S> fmt::Display for Point2<T, S>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl<T, S> Point for Point2<T, S>
where
    T: Float + Default,
    S: Copy + PartialEq + Default,
{
    type Scalar = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }

    fn scale(self, factor: T) -> Self {
        self * factor
    }
}


#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn arithmetic_stays_in_space() {
        let a = PixelPoint::new(10.0, 20.0);
        let b = PixelPoint::new(2.5, 5.0);
        assert_eq!(a + b, PixelPoint::new(12.5, 25.0));
        assert_eq!(a - b, PixelPoint::new(7.5, 15.0));
        assert_eq!(b * 2.0, PixelPoint::new(5.0, 10.0));
        assert_eq!(-b, PixelPoint::new(-2.5, -5.0));
    }

    #[test]
    fn distance_and_length() {
        let a = UnitPoint::new(0.0, 0.0);
        let b = UnitPoint::new(3.0, 4.0);
        assert_eq!(b.squared_length(), 25.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.axis(0), 3.0);
        assert_eq!(b.axis(1), 4.0);
    }

    #[test]
    fn unit_square_membership() {
        assert!(UnitPoint::new(0.0, 1.0).is_in_unit_square());
        assert!(UnitPoint::new(0.4, 0.6).is_in_unit_square());
        assert!(!UnitPoint::new(-0.1, 0.5).is_in_unit_square());
        assert!(!UnitPoint::new(0.5, 1.3).is_in_unit_square());
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(UnitPoint::new(0.4, 0.123456).to_string(), "(0.40, 0.12)");
    }

    #[test]
    fn serde_as_plain_pair() {
        let p: UnitPoint = toml::from_str("x = 0.2\ny = 0.8").unwrap();
        assert_eq!(p, UnitPoint::new(0.2, 0.8));
    }
}
