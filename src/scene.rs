//! Everything a renderer needs to draw the curve editor, derived from the model.
//!
//! `CurveScene::render` is a pure function of the current control points; a UI layer
//! calls it again whenever the model reports a change and draws the result.
use super::config::CurveConfig;
use super::coordinate_mapper::CoordinateMapper;
use super::curve::{build_curve, CurveRect, PathDescriptor};
use super::model::{ControlPoint, TimingCurveModel};
use super::point2::{PixelPoint, UnitPoint};
use super::NativeFloat;

/// RGBA color, components in [0, 1]
pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const GREEN: Rgba = [0.0, 0.8, 0.0, 1.0];
pub const YELLOW: Rgba = [1.0, 0.9, 0.0, 1.0];

const HANDLE_OUTLINE_WIDTH: f32 = 2.0;
const GRID_LINE_WIDTH: f32 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeStyle
{
    pub color: Rgba,
    pub width: f32,
}

/// Filled, outlined disc centered on a viewport point
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker
{
    pub center: PixelPoint,
    pub diameter: NativeFloat,
    pub fill: Rgba,
    pub outline: StrokeStyle,
}

impl Marker
{
    pub fn contains(&self, p: PixelPoint) -> bool {
        let (dx, dy) = (p.x - self.center.x, p.y - self.center.y);
        dx * dx + dy * dy <= (self.diameter / 2.0) * (self.diameter / 2.0)
    }
}

/// Evenly spaced guide lines dividing the viewport into columns and rows
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridGuide
{
    pub columns: usize,
    pub rows: usize,
}

impl GridGuide
{
    /// Interior guide lines as (from, to) pairs, verticals first.
    /// The outer border is not included.
    pub fn lines(&self, rect: &CurveRect) -> Vec<(PixelPoint, PixelPoint)> {
        let size = rect.size();
        let verticals = (1..self.columns).map(|i| {
            let x = size * i as NativeFloat / self.columns as NativeFloat;
            (PixelPoint::new(x, 0.0), PixelPoint::new(x, size))
        });
        let horizontals = (1..self.rows).map(|j| {
            let y = size * j as NativeFloat / self.rows as NativeFloat;
            (PixelPoint::new(0.0, y), PixelPoint::new(size, y))
        });
        verticals.chain(horizontals).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurveScene
{
    pub rect: CurveRect,
    pub path: PathDescriptor,
    pub stroke: StrokeStyle,
    pub grid: Vec<(PixelPoint, PixelPoint)>,
    pub grid_stroke: StrokeStyle,
    /// First and second control point handle, drawn in this order
    pub handles: [Marker; 2],
    pub labels: [String; 2],
}

impl CurveScene
{
    pub fn render(model: &TimingCurveModel, mapper: &CoordinateMapper, config: &CurveConfig) -> Self {
        let rect = CurveRect::new(mapper.size());
        let cp0 = mapper.to_pixel(model.cp0());
        let cp1 = mapper.to_pixel(model.cp1());
        let handle = |center: PixelPoint, fill: Rgba| Marker {
            center,
            diameter: config.handle_diameter,
            fill,
            outline: StrokeStyle {
                color: BLACK,
                width: HANDLE_OUTLINE_WIDTH,
            },
        };
        let grid = GridGuide {
            columns: config.grid_columns,
            rows: config.grid_rows,
        };

        CurveScene {
            rect,
            path: build_curve(cp0, cp1, &rect),
            stroke: StrokeStyle {
                color: WHITE,
                width: config.stroke_width,
            },
            grid: grid.lines(&rect),
            grid_stroke: StrokeStyle {
                color: WHITE,
                width: GRID_LINE_WIDTH,
            },
            handles: [handle(cp0, GREEN), handle(cp1, YELLOW)],
            labels: [
                point_label(ControlPoint::First, model.cp0()),
                point_label(ControlPoint::Second, model.cp1()),
            ],
        }
    }
}

/// "CP0: (0.40, 0.40)", two decimals per coordinate.
/// The closing parenthesis is always written; earlier editors left it off ("CP0: (0.40, 0.40").
pub fn point_label(which: ControlPoint, point: UnitPoint) -> String {
    format!("{}: {}", which.name(), point)
}
