//! Deterministic drivers for the animations shaped by the timing curve.
//!
//! Time only moves when a host calls `tick()` with the elapsed time since the last
//! call, so the drivers run equally well off a UI frame clock or inside a test.
//! Every timing function is fetched from the model at the moment an animation starts,
//! dragging a handle therefore affects the next transition, not the running one.
use log::warn;

use super::config::{COLOR_CHANGE_DURATION, DOT_COUNT, DOT_DIAMETER, DOT_STAGGER};
use super::model::TimingCurveModel;
use super::point2::PixelPoint;
use super::scene::{Marker, StrokeStyle, WHITE};
use super::timing_function::TimingFunction;
use super::NativeFloat;

/// Repeating timer firing every `period`, optionally after an initial delay
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval
{
    period: NativeFloat,
    until_next: NativeFloat,
    stopped: bool,
}

impl Interval
{
    /// First fire happens one full period after start.
    /// A non-positive period never fires.
    pub fn new(period: NativeFloat) -> Self {
        Interval::with_delay(period, 0.0)
    }

    /// First fire happens `delay + period` after start
    pub fn with_delay(period: NativeFloat, delay: NativeFloat) -> Self {
        let stopped = !(period > 0.0) || !period.is_finite();
        if stopped {
            warn!("interval with period {} never fires", period);
        }
        Interval {
            period,
            until_next: delay.max(0.0) + period,
            stopped,
        }
    }

    pub fn period(&self) -> NativeFloat {
        self.period
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Time left until the next fire, None once stopped
    pub fn next_fire_in(&self) -> Option<NativeFloat> {
        if self.stopped {
            None
        } else {
            Some(self.until_next)
        }
    }

    /// Let `dt` pass and return how many times the interval fired.
    /// A negative or non-finite `dt` is ignored.
    pub fn advance(&mut self, dt: NativeFloat) -> usize {
        if self.stopped {
            return 0;
        }
        if !dt.is_finite() || dt < 0.0 {
            warn!("ignoring time step {}", dt);
            return 0;
        }
        if dt < self.until_next {
            self.until_next -= dt;
            return 0;
        }
        let after_first = dt - self.until_next;
        let skipped = (after_first / self.period).floor();
        let remainder = (after_first - skipped * self.period).max(0.0);
        self.until_next = if remainder < self.period {
            self.period - remainder
        } else {
            self.period
        };
        1 + skipped as usize
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Transition
{
    from: NativeFloat,
    to: NativeFloat,
    timing: TimingFunction,
    elapsed: NativeFloat,
}

impl Transition
{
    fn value(&self) -> NativeFloat {
        self.from + (self.to - self.from) * self.timing.progress_at(self.elapsed)
    }
}

/// Boolean state whose on-screen value moves between 0 (false) and 1 (true)
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct AnimatedFlag
{
    value: bool,
    transition: Option<Transition>,
}

impl AnimatedFlag
{
    pub fn new(value: bool) -> Self {
        AnimatedFlag {
            value,
            transition: None,
        }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Set the target value, animated under `timing` or immediately without one.
    /// An interrupted transition continues from the value currently shown.
    pub fn set(&mut self, value: bool, timing: Option<TimingFunction>) {
        let from = self.presentation();
        self.value = value;
        self.transition = timing.map(|timing| Transition {
            from,
            to: Self::target(value),
            timing,
            elapsed: 0.0,
        });
    }

    pub fn toggle(&mut self, timing: Option<TimingFunction>) {
        self.set(!self.value, timing);
    }

    pub fn advance(&mut self, dt: NativeFloat) {
        if let Some(transition) = self.transition.as_mut() {
            transition.elapsed += dt;
            if transition.timing.is_finished(transition.elapsed) {
                self.transition = None;
            }
        }
    }

    /// Value currently shown, may leave [0, 1] under an overshooting curve
    pub fn presentation(&self) -> NativeFloat {
        match &self.transition {
            Some(transition) => transition.value(),
            None => Self::target(self.value),
        }
    }

    fn target(value: bool) -> NativeFloat {
        if value {
            1.0
        } else {
            0.0
        }
    }
}

/// Something that advances animations shaped by the model's timing curve
pub trait AnimationDriver
{
    fn tick(&mut self, dt: NativeFloat, model: &TimingCurveModel);

    fn stop(&mut self);
}

/// Let `dt` pass for `interval` and `flags`. When the interval fired, `on_fire` runs once
/// at the time of the last fire together with the number of fires.
fn run_until<F>(interval: &mut Interval, flags: &mut [&mut AnimatedFlag], dt: NativeFloat, mut on_fire: F)
where
    F: FnMut(&mut [&mut AnimatedFlag], usize),
{
    if !dt.is_finite() || dt < 0.0 {
        warn!("ignoring time step {}", dt);
        return;
    }
    let fired = interval.advance(dt);
    if fired == 0 {
        flags.iter_mut().for_each(|flag| flag.advance(dt));
        return;
    }
    let since_last = interval
        .next_fire_in()
        .map_or(0.0, |next| (interval.period() - next).max(0.0));
    flags.iter_mut().for_each(|flag| flag.advance(dt - since_last));
    on_fire(flags, fired);
    flags.iter_mut().for_each(|flag| flag.advance(since_last));
}

/// Full-screen color slide toggled once per duration
#[derive(Debug, Clone, PartialEq)]
pub struct ColorChangeDemo
{
    duration: NativeFloat,
    interval: Interval,
    change: AnimatedFlag,
}

impl ColorChangeDemo
{
    pub fn new(duration: NativeFloat) -> Self {
        ColorChangeDemo {
            duration,
            interval: Interval::new(duration),
            change: AnimatedFlag::new(false),
        }
    }

    pub fn is_changed(&self) -> bool {
        self.change.value()
    }

    /// Horizontal offset of the sliding layer for a screen `width`
    pub fn offset(&self, width: NativeFloat) -> NativeFloat {
        -width * self.change.presentation()
    }
}

impl Default for ColorChangeDemo
{
    fn default() -> Self {
        ColorChangeDemo::new(COLOR_CHANGE_DURATION)
    }
}

impl AnimationDriver for ColorChangeDemo
{
    fn tick(&mut self, dt: NativeFloat, model: &TimingCurveModel) {
        let timing = model.generate_timing_function(Some(self.duration));
        run_until(&mut self.interval, &mut [&mut self.change], dt, |flags, fired| {
            if fired > 1 {
                // only the last toggle is animated, land on the value it starts from
                let before_last = flags[0].value() ^ ((fired - 1) % 2 == 1);
                flags[0].set(before_last, None);
            }
            flags[0].toggle(Some(timing));
        });
    }

    fn stop(&mut self) {
        self.interval.stop();
    }
}

/// Row of dots each sliding across once per duration, starts staggered
#[derive(Debug, Clone, PartialEq)]
pub struct DotsDemo
{
    duration: NativeFloat,
    dot_diameter: NativeFloat,
    dots: Vec<(Interval, AnimatedFlag)>,
}

impl DotsDemo
{
    pub fn new(count: usize, stagger: NativeFloat, duration: NativeFloat) -> Self {
        let dots = (0..count)
            .map(|index| {
                (
                    Interval::with_delay(duration, index as NativeFloat * stagger),
                    AnimatedFlag::new(false),
                )
            })
            .collect();
        DotsDemo {
            duration,
            dot_diameter: DOT_DIAMETER,
            dots,
        }
    }

    pub fn with_dot_diameter(mut self, dot_diameter: NativeFloat) -> Self {
        self.dot_diameter = dot_diameter;
        self
    }

    pub fn dot_diameter(&self) -> NativeFloat {
        self.dot_diameter
    }

    /// Travel of a dot to either side of the center, enough to leave a screen of `width`
    pub fn max_offset(&self, width: NativeFloat) -> NativeFloat {
        width / 2.0 + self.dot_diameter
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Horizontal offset of every dot, between -max_offset and max_offset
    pub fn offsets(&self, max_offset: NativeFloat) -> Vec<NativeFloat> {
        self.dots
            .iter()
            .map(|(_, flag)| -max_offset + 2.0 * max_offset * flag.presentation())
            .collect()
    }

    /// White dots stacked on `origin`, each shifted horizontally by its offset
    pub fn dot_markers(&self, max_offset: NativeFloat, origin: PixelPoint) -> Vec<Marker> {
        self.offsets(max_offset)
            .into_iter()
            .map(|offset| Marker {
                center: PixelPoint::new(origin.x + offset, origin.y),
                diameter: self.dot_diameter,
                fill: WHITE,
                outline: StrokeStyle {
                    color: WHITE,
                    width: 0.0,
                },
            })
            .collect()
    }
}

impl Default for DotsDemo
{
    fn default() -> Self {
        DotsDemo::new(DOT_COUNT, DOT_STAGGER, COLOR_CHANGE_DURATION)
    }
}

impl AnimationDriver for DotsDemo
{
    fn tick(&mut self, dt: NativeFloat, model: &TimingCurveModel) {
        let timing = model.generate_timing_function(Some(self.duration));
        for (interval, flag) in self.dots.iter_mut() {
            run_until(interval, &mut [flag], dt, |flags, _| {
                // jump back to the start, then slide across again
                flags[0].set(false, None);
                flags[0].set(true, Some(timing));
            });
        }
    }

    fn stop(&mut self) {
        self.dots.iter_mut().for_each(|(interval, _)| interval.stop());
    }
}
