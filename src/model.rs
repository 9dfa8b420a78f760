//! The two control points of the timing curve and the easing they produce.
//!
//! `TimingCurveModel` is the single source of truth shared by the curve renderer,
//! the handle renderer and the animation. It holds no cache: every consumer derives
//! what it needs from the current points, and listeners are told after each change.
use core::fmt;

use log::{debug, trace};

use super::config::{DEFAULT_CP0, DEFAULT_CP1, DEFAULT_TIMING_DURATION};
use super::point2::UnitPoint;
use super::timing_function::TimingFunction;
use super::NativeFloat;

/// Selects one of the two control points
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ControlPoint {
    First,
    Second,
}

impl ControlPoint {
    /// Label prefix used for the control point, "CP0" or "CP1"
    pub fn name(&self) -> &'static str {
        match self {
            ControlPoint::First => "CP0",
            ControlPoint::Second => "CP1",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

type Listener = Box<dyn FnMut(ControlPoint, UnitPoint)>;

pub struct TimingCurveModel
{
    cp0: UnitPoint,
    cp1: UnitPoint,
    default_duration: NativeFloat,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: usize,
}

impl TimingCurveModel
{
    pub fn new(cp0: UnitPoint, cp1: UnitPoint) -> Self {
        TimingCurveModel {
            cp0,
            cp1,
            default_duration: DEFAULT_TIMING_DURATION,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Duration used by `generate_timing_function` when the caller gives none
    pub fn with_default_duration(mut self, duration: NativeFloat) -> Self {
        self.default_duration = duration;
        self
    }

    pub fn default_duration(&self) -> NativeFloat {
        self.default_duration
    }

    pub fn cp0(&self) -> UnitPoint {
        self.cp0
    }

    pub fn cp1(&self) -> UnitPoint {
        self.cp1
    }

    pub fn control_point(&self, which: ControlPoint) -> UnitPoint {
        match which {
            ControlPoint::First => self.cp0,
            ControlPoint::Second => self.cp1,
        }
    }

    /// Replace one control point. Values outside the unit square are kept as they are.
    pub fn set_control_point(&mut self, which: ControlPoint, value: UnitPoint) {
        if !value.is_in_unit_square() {
            debug!("{} moved outside the unit square to {}", which.name(), value);
        } else {
            trace!("{} moved to {}", which.name(), value);
        }
        match which {
            ControlPoint::First => self.cp0 = value,
            ControlPoint::Second => self.cp1 = value,
        }
        for (_, listener) in self.listeners.iter_mut() {
            listener(which, value);
        }
    }

    /// Easing over `duration`, or over the model's default duration when none is given.
    /// The duration is passed through unchecked.
    pub fn generate_timing_function(&self, duration: Option<NativeFloat>) -> TimingFunction {
        TimingFunction::new(
            self.cp0,
            self.cp1,
            duration.unwrap_or(self.default_duration),
        )
    }

    pub fn timing_function(&self) -> TimingFunction {
        self.generate_timing_function(None)
    }

    /// Register a callback run after every control point change
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(ControlPoint, UnitPoint) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if no listener was registered under `id`
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

impl Default for TimingCurveModel
{
    fn default() -> Self {
        TimingCurveModel::new(DEFAULT_CP0, DEFAULT_CP1)
    }
}

impl fmt::Debug for TimingCurveModel
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimingCurveModel")
            .field("cp0", &self.cp0)
            .field("cp1", &self.cp1)
            .field("default_duration", &self.default_duration)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
