use super::cubic_bezier::CubicBezier;
use super::point2::UnitPoint;
use super::roots::{root_bisection, root_newton_raphson};
use super::{NativeFloat, EPSILON};

const NEWTON_MAX_ITER: usize = 8;
const BISECTION_MAX_ITER: usize = 64;

/// Cubic Bézier easing curve over a duration, as consumed by an animation driver.
///
/// The curve is anchored at (0, 0) and (1, 1) in the unit square; (x1, y1) and (x2, y2)
/// are its two control points. Evaluation follows the usual `cubic-bezier()` semantics:
/// x is the elapsed fraction of time, y the fraction of animation progress.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TimingFunction
{
    pub x1: NativeFloat,
    pub y1: NativeFloat,
    pub x2: NativeFloat,
    pub y2: NativeFloat,
    pub duration: NativeFloat,
}

impl TimingFunction
{
    pub fn new(cp0: UnitPoint, cp1: UnitPoint, duration: NativeFloat) -> Self {
        TimingFunction {
            x1: cp0.x,
            y1: cp0.y,
            x2: cp1.x,
            y2: cp1.y,
            duration,
        }
    }

    pub fn control_points(&self) -> (UnitPoint, UnitPoint) {
        (UnitPoint::new(self.x1, self.y1), UnitPoint::new(self.x2, self.y2))
    }

    /// (x1, y1, x2, y2, duration)
    pub fn as_tuple(&self) -> (NativeFloat, NativeFloat, NativeFloat, NativeFloat, NativeFloat) {
        (self.x1, self.y1, self.x2, self.y2, self.duration)
    }

    /// The full easing curve including its fixed anchors
    pub fn curve(&self) -> CubicBezier<UnitPoint> {
        let (cp0, cp1) = self.control_points();
        CubicBezier::new(UnitPoint::new(0.0, 0.0), cp0, cp1, UnitPoint::new(1.0, 1.0))
    }

    /// Curve parameter t at which the curve's x coordinate equals `x`
    pub fn solve_parameter(&self, x: NativeFloat) -> NativeFloat {
        let curve = self.curve();
        let fx = |t: NativeFloat| curve.axis(t, 0) - x;

        root_newton_raphson(x, fx, |t| curve.derivative_axis(t, 0), EPSILON, NEWTON_MAX_ITER)
            .ok()
            .filter(|t| (0.0..=1.0).contains(t))
            .or_else(|| root_bisection(0.0, 1.0, fx, EPSILON, BISECTION_MAX_ITER).ok())
            // x(t) without a crossing only happens for control points far outside the
            // unit square, fall back to linear time
            .unwrap_or(x)
    }

    /// Eased progress for an elapsed fraction of time.
    /// The fraction is clamped to [0, 1], the result is not: overshooting curves
    /// produce values outside of it.
    pub fn ease(&self, fraction: NativeFloat) -> NativeFloat {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let t = self.solve_parameter(fraction);
        self.curve().axis(t, 1)
    }

    /// Eased progress after `elapsed` time units. A non-positive duration is instant.
    pub fn progress_at(&self, elapsed: NativeFloat) -> NativeFloat {
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.ease(elapsed / self.duration)
    }

    pub fn is_finished(&self, elapsed: NativeFloat) -> bool {
        self.duration <= 0.0 || elapsed >= self.duration
    }
}

impl From<TimingFunction> for (NativeFloat, NativeFloat, NativeFloat, NativeFloat, NativeFloat) {
    fn from(timing: TimingFunction) -> Self {
        timing.as_tuple()
    }
}


#[cfg(test)]
mod tests
{
    use super::*;
    use approx::assert_abs_diff_eq;

    fn timing(x1: f64, y1: f64, x2: f64, y2: f64) -> TimingFunction {
        TimingFunction::new(UnitPoint::new(x1, y1), UnitPoint::new(x2, y2), 1.0)
    }

    #[test]
    fn tuple_order() {
        let t = timing(0.2, 0.8, 0.9, 0.1);
        assert_eq!(t.as_tuple(), (0.2, 0.8, 0.9, 0.1, 1.0));
        let tuple: (f64, f64, f64, f64, f64) = t.into();
        assert_eq!(tuple, (0.2, 0.8, 0.9, 0.1, 1.0));
    }

    #[test]
    fn diagonal_control_points_are_linear() {
        let t = timing(0.4, 0.4, 0.6, 0.6);
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            assert_abs_diff_eq!(t.ease(x), x, epsilon = 1e-6);
        }
    }

    #[test]
    fn anchors_are_fixed() {
        let t = timing(0.9, -0.5, 0.1, 1.5);
        assert_eq!(t.ease(0.0), 0.0);
        assert_eq!(t.ease(1.0), 1.0);
        assert_eq!(t.ease(-3.0), 0.0);
        assert_eq!(t.ease(7.0), 1.0);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let t = timing(0.42, 0.0, 0.58, 1.0);
        assert_abs_diff_eq!(t.ease(0.5), 0.5, epsilon = 1e-6);
        for i in 1..10 {
            let x = i as f64 / 10.0;
            assert_abs_diff_eq!(t.ease(x) + t.ease(1.0 - x), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn ease_in_is_monotonic_and_slow_at_start() {
        let t = timing(0.42, 0.0, 1.0, 1.0);
        let mut prev = 0.0;
        for i in 1..=100 {
            let y = t.ease(i as f64 / 100.0);
            assert!(y >= prev - 1e-9);
            prev = y;
        }
        assert!(t.ease(0.25) < 0.25);
    }

    #[test]
    fn solved_parameter_hits_requested_x() {
        let t = timing(0.2, 0.8, 0.9, 0.1);
        let curve = t.curve();
        for i in 1..20 {
            let x = i as f64 / 20.0;
            let s = t.solve_parameter(x);
            assert_abs_diff_eq!(curve.axis(s, 0), x, epsilon = 1e-6);
        }
    }

    #[test]
    fn overshoot_is_not_clamped() {
        // back-out: overshoots past 1 before settling
        let t = timing(0.175, 0.885, 0.32, 1.275);
        let peak = (1..100).map(|i| t.ease(i as f64 / 100.0)).fold(0.0, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn progress_over_duration() {
        let t = TimingFunction::new(UnitPoint::new(0.4, 0.4), UnitPoint::new(0.6, 0.6), 2.0);
        assert_abs_diff_eq!(t.progress_at(1.0), 0.5, epsilon = 1e-6);
        assert!(!t.is_finished(1.9));
        assert!(t.is_finished(2.0));
    }

    #[test]
    fn non_positive_duration_is_instant() {
        let t = TimingFunction::new(UnitPoint::new(0.4, 0.4), UnitPoint::new(0.6, 0.6), 0.0);
        assert_eq!(t.progress_at(0.0), 1.0);
        assert!(t.is_finished(0.0));
        let t = TimingFunction { duration: -1.0, ..t };
        assert_eq!(t.progress_at(0.5), 1.0);
    }
}
