//! Stroke-able description of the timing curve inside its viewport.
//!
//! The curve always starts in the bottom left and ends in the top right corner of the
//! square viewport. Only the two control points move, and they are taken as given:
//! a control point outside the viewport makes the curve bulge out of it, which is how
//! overshooting easing curves become visible.
use num_traits::Float;

use super::cubic_bezier::CubicBezier;
use super::point2::PixelPoint;
use super::NativeFloat;

/// The fixed square the curve is anchored in, pixel space with origin in the top left
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveRect<T = NativeFloat>
{
    size: T,
}

impl<T: Float> CurveRect<T>
{
    pub fn new(size: T) -> Self {
        CurveRect { size }
    }

    pub fn size(&self) -> T {
        self.size
    }

    pub fn bottom_left(&self) -> PixelPoint<T> {
        PixelPoint::new(T::zero(), self.size)
    }

    pub fn top_right(&self) -> PixelPoint<T> {
        PixelPoint::new(self.size, T::zero())
    }

    /// True if p lies inside the rect, borders included
    pub fn contains(&self, p: PixelPoint<T>) -> bool {
        let span = T::zero()..=self.size;
        span.contains(&p.x) && span.contains(&p.y)
    }
}

/// The single cubic segment following the move to `PathDescriptor::start`
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicTo<T = NativeFloat>
{
    pub end: PixelPoint<T>,
    pub ctrl1: PixelPoint<T>,
    pub ctrl2: PixelPoint<T>,
}

/// Declarative geometry handed to a renderer: move to `start`, then one cubic segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PathDescriptor<T = NativeFloat>
{
    pub start: PixelPoint<T>,
    pub cubic_to: CubicTo<T>,
}

/// Build the timing curve path for control points already mapped into `rect`'s pixel space.
pub fn build_curve<T: Float>(
    cp0_pixel: PixelPoint<T>,
    cp1_pixel: PixelPoint<T>,
    rect: &CurveRect<T>,
) -> PathDescriptor<T> {
    PathDescriptor {
        start: rect.bottom_left(),
        cubic_to: CubicTo {
            end: rect.top_right(),
            ctrl1: cp0_pixel,
            ctrl2: cp1_pixel,
        },
    }
}

impl<T> PathDescriptor<T>
where
    T: Float + Default,
{
    /// The evaluable curve this path strokes
    pub fn to_cubic(&self) -> CubicBezier<PixelPoint<T>> {
        CubicBezier::new(
            self.start,
            self.cubic_to.ctrl1,
            self.cubic_to.ctrl2,
            self.cubic_to.end,
        )
    }

    /// True if the stroked curve itself (not just a control point) leaves `rect`
    pub fn overshoots(&self, rect: &CurveRect<T>) -> bool {
        let [(xmin, xmax), (ymin, ymax)] = self.to_cubic().bounding_box();
        let eps = T::epsilon() * (T::one() + rect.size().abs());
        xmin < -eps || ymin < -eps || xmax > rect.size() + eps || ymax > rect.size() + eps
    }
}


#[cfg(test)]
mod tests
{
    use super::*;
    use crate::coordinate_mapper::to_pixel;
    use crate::point2::UnitPoint;

    #[test]
    fn rect_corners() {
        let rect = CurveRect::new(200.0);
        assert_eq!(rect.bottom_left(), PixelPoint::new(0.0, 200.0));
        assert_eq!(rect.top_right(), PixelPoint::new(200.0, 0.0));
        assert!(rect.contains(PixelPoint::new(0.0, 200.0)));
        assert!(!rect.contains(PixelPoint::new(-1.0, 20.0)));
    }

    #[test]
    fn anchors_do_not_depend_on_control_points() {
        let rect = CurveRect::new(200.0);
        let controls = [
            (PixelPoint::new(80.0, 120.0), PixelPoint::new(120.0, 80.0)),
            (PixelPoint::new(-50.0, 400.0), PixelPoint::new(300.0, -20.0)),
            (PixelPoint::new(0.0, 0.0), PixelPoint::new(0.0, 0.0)),
        ];
        for (cp0, cp1) in controls {
            let path = build_curve(cp0, cp1, &rect);
            assert_eq!(path.start, rect.bottom_left());
            assert_eq!(path.cubic_to.end, rect.top_right());
            assert_eq!(path.cubic_to.ctrl1, cp0);
            assert_eq!(path.cubic_to.ctrl2, cp1);
        }
    }

    #[test]
    fn cubic_runs_from_corner_to_corner() {
        let rect = CurveRect::new(200.0);
        let path = build_curve(
            to_pixel(UnitPoint::new(0.4, 0.4), 200.0),
            to_pixel(UnitPoint::new(0.6, 0.6), 200.0),
            &rect,
        );
        let cubic = path.to_cubic();
        assert_eq!(cubic.eval_casteljau(0.0), rect.bottom_left());
        let mid = cubic.eval_casteljau(0.5);
        assert!((mid.x - 100.0).abs() < 1e-9 && (mid.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn overshoot_is_detected_from_the_curve() {
        let rect = CurveRect::new(200.0);
        let inside = build_curve(
            to_pixel(UnitPoint::new(0.25, 0.1), 200.0),
            to_pixel(UnitPoint::new(0.25, 1.0), 200.0),
            &rect,
        );
        assert!(!inside.overshoots(&rect));

        // back ease: y dips below zero at the start
        let anticipate = build_curve(
            to_pixel(UnitPoint::new(0.6, -0.28), 200.0),
            to_pixel(UnitPoint::new(0.735, 0.045), 200.0),
            &rect,
        );
        assert!(anticipate.overshoots(&rect));
    }
}
