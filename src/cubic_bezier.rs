use num_traits::{Float, NumCast, One, Zero};
use tinyvec::ArrayVec;

use super::point::Point;
use super::roots::quadratic_real_roots;

/// A 2d cubic Bezier curve defined by four points: the starting point, two successive
/// control points and the ending point.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)³ * start + 3 * (1 - t)² * t * ctrl1 + 3 * t² * (1 - t) * ctrl2 + t³ * end```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicBezier<P>
{
    pub(crate) start: P,
    pub(crate) ctrl1: P,
    pub(crate) ctrl2: P,
    pub(crate) end:   P,
}

impl<P> CubicBezier<P>
where
    P: Point,
{
    pub fn new(start: P, ctrl1: P, ctrl2: P, end: P) -> Self {
        CubicBezier {
            start,
            ctrl1,
            ctrl2,
            end,
        }
    }

    pub fn start(&self) -> P {
        self.start
    }

    pub fn ctrl1(&self) -> P {
        self.ctrl1
    }

    pub fn ctrl2(&self) -> P {
        self.ctrl2
    }

    pub fn end(&self) -> P {
        self.end
    }

    /// Evaluate a CubicBezier curve at t using the numerically stable De Casteljau algorithm
    pub fn eval_casteljau(&self, t: P::Scalar) -> P {
        // unrolled de casteljau algorithm
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start + (self.ctrl1 - self.start).scale(t);
        let ctrl_1bc = self.ctrl1 + (self.ctrl2 - self.ctrl1).scale(t);
        let ctrl_1cd = self.ctrl2 + (self.end - self.ctrl2).scale(t);
        // second iteration
        let ctrl_2ab = ctrl_1ab + (ctrl_1bc - ctrl_1ab).scale(t);
        let ctrl_2bc = ctrl_1bc + (ctrl_1cd - ctrl_1bc).scale(t);
        // third iteration, final point on the curve
        ctrl_2ab + (ctrl_2bc - ctrl_2ab).scale(t)
    }

    /// Polynomial coefficients (a, b, c, d) of a*t^3 + b*t^2 + c*t + d along one axis
    fn axis_coefficients(&self, axis: usize) -> (P::Scalar, P::Scalar, P::Scalar, P::Scalar) {
        let one = P::Scalar::one();
        let three = one + one + one;
        let six = three + three;
        let (p0, p1, p2, p3) = (
            self.start.axis(axis),
            self.ctrl1.axis(axis),
            self.ctrl2.axis(axis),
            self.end.axis(axis),
        );
        let a = -p0 + three * p1 - three * p2 + p3;
        let b = three * p0 - six * p1 + three * p2;
        let c = -three * p0 + three * p1;
        (a, b, c, p0)
    }

    /// Sample the coordinate at 'axis' of the curve at t.
    /// Convenience shortcut for bezier.eval_casteljau(t).axis(axis) in Horner form
    pub fn axis(&self, t: P::Scalar, axis: usize) -> P::Scalar {
        let (a, b, c, d) = self.axis_coefficients(axis);
        ((a * t + b) * t + c) * t + d
    }

    /// Direct Derivative - Sample the axis coordinate at 'axis' of the curve's derivative at t.
    pub fn derivative_axis(&self, t: P::Scalar, axis: usize) -> P::Scalar {
        let (a, b, c, _) = self.axis_coefficients(axis);
        let one = P::Scalar::one();
        let two = one + one;
        let three = two + one;
        (three * a * t + two * b) * t + c
    }

    /// Return the bounding box of the curve as (min, max) tuples for x and y.
    /// Intermediate control points can't form a boundary, only the end points and
    /// the points where the derivative vanishes for t in (0, 1).
    pub fn bounding_box(&self) -> [(P::Scalar, P::Scalar); 2] {
        let zero = P::Scalar::zero();
        let one = P::Scalar::one();
        let two = one + one;
        let three = two + one;
        let eps = P::Scalar::epsilon();
        let mut bounds = [(zero, zero); 2];

        for (dim, bound) in bounds.iter_mut().enumerate() {
            let (a, b, c, _) = self.axis_coefficients(dim);
            let mut extrema: ArrayVec<[P::Scalar; 4]> = ArrayVec::new();
            extrema.extend(
                quadratic_real_roots(three * a, two * b, c, eps)
                    .into_iter()
                    .filter(|t| *t > zero && *t < one)
                    .map(|t| self.axis(t, dim)),
            );
            extrema.push(self.start.axis(dim));
            extrema.push(self.end.axis(dim));

            let mut min = self.start.axis(dim);
            let mut max = min;
            for v in extrema {
                min = min.min(v);
                max = max.max(v);
            }
            *bound = (min, max);
        }
        bounds
    }

    /// Sample the curve at nsteps + 1 evenly spaced parameters, end points included
    pub fn flatten(&self, nsteps: usize) -> Vec<P> {
        let nsteps = nsteps.max(1);
        let n = <P::Scalar as NumCast>::from(nsteps).unwrap_or_else(P::Scalar::one);
        (0..=nsteps)
            .map(|i| {
                let t = <P::Scalar as NumCast>::from(i).unwrap_or_else(P::Scalar::zero) / n;
                self.eval_casteljau(t)
            })
            .collect()
    }

    /// Approximates the arc length of the curve by flattening it with straight line segments.
    pub fn arclen(&self, nsteps: usize) -> P::Scalar {
        self.flatten(nsteps)
            .windows(2)
            .fold(P::Scalar::zero(), |len, pair| len + pair[0].distance(pair[1]))
    }
}


#[cfg(test)]
mod tests
{
    use super::*;
    use crate::point2::{PixelPoint, UnitPoint};

    fn quadrant() -> CubicBezier<UnitPoint> {
        // control points are chosen for minimum radial distance error
        // according to: http://spencermortensen.com/articles/bezier-circle/
        let c = 0.551915024494;
        CubicBezier::new(
            UnitPoint::new(0.0, 1.0),
            UnitPoint::new(c, 1.0),
            UnitPoint::new(1.0, c),
            UnitPoint::new(1.0, 0.0),
        )
    }

    #[test]
    fn circle_approximation_error() {
        let max_error = 0.019608 * 0.01; // absolute max radial error
        let bezier = quadrant();
        let nsteps = 1000;
        for t in 0..=nsteps {
            let t = t as f64 / nsteps as f64;
            let contour = bezier.eval_casteljau(t).squared_length().sqrt() - 1.0;
            assert!(contour.abs() <= max_error);
        }
    }

    #[test]
    fn quarter_circle_arclen() {
        let quarter = core::f64::consts::FRAC_PI_2;
        let len = quadrant().arclen(1000);
        assert!((len - quarter).abs() < 1e-3);
    }

    #[test]
    fn axis_matches_casteljau() {
        let bezier = CubicBezier::new(
            PixelPoint::new(0.0, 1.77),
            PixelPoint::new(1.1, -1.0),
            PixelPoint::new(4.3, 3.0),
            PixelPoint::new(3.2, -4.0),
        );
        let nsteps = 1000;
        for t in 0..=nsteps {
            let t = t as f64 / nsteps as f64;
            let p = bezier.eval_casteljau(t);
            assert!((bezier.axis(t, 0) - p.x).abs() < 1e-9);
            assert!((bezier.axis(t, 1) - p.y).abs() < 1e-9);
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let bezier = CubicBezier::new(
            UnitPoint::new(0.0, 0.0),
            UnitPoint::new(0.2, 0.8),
            UnitPoint::new(0.9, 0.1),
            UnitPoint::new(1.0, 1.0),
        );
        let h = 1e-6;
        for i in 1..10 {
            let t = i as f64 / 10.0;
            for axis in 0..2 {
                let numeric = (bezier.axis(t + h, axis) - bezier.axis(t - h, axis)) / (2.0 * h);
                assert!((bezier.derivative_axis(t, axis) - numeric).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn bounding_box_contains() {
        let bezier = CubicBezier::new(
            PixelPoint::new(0.0, 1.77),
            PixelPoint::new(2.9, 0.0),
            PixelPoint::new(4.3, -3.0),
            PixelPoint::new(3.2, 4.0),
        );
        let bounds = bezier.bounding_box();
        let max_err = 1e-9;
        for p in bezier.flatten(100) {
            assert!(p.x >= bounds[0].0 - max_err && p.x <= bounds[0].1 + max_err);
            assert!(p.y >= bounds[1].0 - max_err && p.y <= bounds[1].1 + max_err);
        }
        // the x extent overshoots the end point
        assert!(bounds[0].1 > 3.2);
    }

    #[test]
    fn bounding_box_of_straight_curve_is_its_endpoints() {
        let bezier = CubicBezier::new(
            UnitPoint::new(0.0, 0.0),
            UnitPoint::new(0.4, 0.4),
            UnitPoint::new(0.6, 0.6),
            UnitPoint::new(1.0, 1.0),
        );
        let bounds = bezier.bounding_box();
        assert!((bounds[0].0).abs() < 1e-12 && (bounds[0].1 - 1.0).abs() < 1e-12);
        assert!((bounds[1].0).abs() < 1e-12 && (bounds[1].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn flatten_hits_both_ends() {
        let bezier = quadrant();
        let points = bezier.flatten(16);
        assert_eq!(points.len(), 17);
        assert!(points[0].distance(bezier.start()) < 1e-12);
        assert!(points[16].distance(bezier.end()) < 1e-12);
    }
}
