//! Geometry core of an interactive cubic Bézier timing curve.
//!
//! Two control points live in the unit square (y up). They are mapped into a square
//! pixel viewport (y down) to stroke the curve and its draggable handles, and read back
//! from pointer locations when a handle is dragged. The same two points define the
//! easing function handed to whatever drives the running animation.
//!
//! ```
//! use timing_curve::{build_curve, ControlPoint, CoordinateMapper, CurveRect,
//!                    PixelPoint, TimingCurveModel};
//!
//! let mut model = TimingCurveModel::default();
//! let mapper = CoordinateMapper::new(200.0).unwrap();
//!
//! // a drag ends at the top right quarter of the viewport
//! let unit = mapper.to_unit(PixelPoint::new(150.0, 50.0));
//! model.set_control_point(ControlPoint::First, unit);
//!
//! let path = build_curve(
//!     mapper.to_pixel(model.cp0()),
//!     mapper.to_pixel(model.cp1()),
//!     &CurveRect::new(200.0),
//! );
//! assert_eq!(path.start, PixelPoint::new(0.0, 200.0));
//!
//! let timing = model.generate_timing_function(Some(1.0));
//! assert_eq!(timing.as_tuple(), (0.75, 0.75, 0.6, 0.6, 1.0));
//! ```

pub mod animation;
pub mod config;
pub mod coordinate_mapper;
pub mod cubic_bezier;
pub mod curve;
pub mod drag;
pub mod model;
pub mod point;
pub mod point2;
pub mod roots;
pub mod scene;
pub mod timing_function;

// Re-export the types needed to drive a curve editor
pub use animation::{AnimatedFlag, AnimationDriver, ColorChangeDemo, DotsDemo, Interval};
pub use config::{ConfigError, CurveConfig};
pub use coordinate_mapper::{to_pixel, to_unit, CoordinateMapper, MappingError};
pub use cubic_bezier::CubicBezier;
pub use curve::{build_curve, CubicTo, CurveRect, PathDescriptor};
pub use drag::DragController;
pub use model::{ControlPoint, ListenerId, TimingCurveModel};
pub use point::Point;
pub use point2::{PixelPoint, PixelSpace, Point2, UnitPoint, UnitSpace};
pub use roots::RootFindingError;
pub use scene::{CurveScene, GridGuide, Marker, Rgba, StrokeStyle};
pub use timing_function::TimingFunction;

/// Float type used by the model, the easing solver and the default point aliases
pub type NativeFloat = f64;

/// Absolute tolerance for the iterative easing solver and degenerate-case checks
pub const EPSILON: NativeFloat = 1e-9;
