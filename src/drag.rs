//! Turns pointer locations in the viewport into control point updates.
//!
//! A host either routes each handle's gesture to `drag_to()` directly, or feeds raw
//! press/drag/release events and lets the controller pick the handle under the pointer.
use log::trace;

use super::coordinate_mapper::CoordinateMapper;
use super::model::{ControlPoint, TimingCurveModel};
use super::point::Point;
use super::point2::{PixelPoint, UnitPoint};
use super::NativeFloat;

#[derive(Debug, Clone, PartialEq)]
pub struct DragController
{
    mapper: CoordinateMapper,
    handle_diameter: NativeFloat,
    active: Option<ControlPoint>,
}

impl DragController
{
    pub fn new(mapper: CoordinateMapper, handle_diameter: NativeFloat) -> Self {
        DragController {
            mapper,
            handle_diameter,
            active: None,
        }
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Handle currently being dragged, if any
    pub fn active(&self) -> Option<ControlPoint> {
        self.active
    }

    /// Move `which` to the viewport-local `location`, returns the new unit position
    pub fn drag_to(
        &self,
        model: &mut TimingCurveModel,
        which: ControlPoint,
        location: PixelPoint,
    ) -> UnitPoint {
        let unit = self.mapper.to_unit(location);
        trace!("drag {} to {} px -> {}", which.name(), location, unit);
        model.set_control_point(which, unit);
        unit
    }

    /// Handle whose disc contains `location`.
    /// The second handle is drawn on top and wins when both discs overlap the pointer.
    pub fn handle_at(&self, model: &TimingCurveModel, location: PixelPoint) -> Option<ControlPoint> {
        let radius = self.handle_diameter / 2.0;
        [ControlPoint::Second, ControlPoint::First]
            .into_iter()
            .find(|which| {
                let center = self.mapper.to_pixel(model.control_point(*which));
                center.distance(location) <= radius
            })
    }

    /// Start a drag session on the handle under the pointer
    pub fn press(&mut self, model: &TimingCurveModel, location: PixelPoint) -> Option<ControlPoint> {
        self.active = self.handle_at(model, location);
        self.active
    }

    /// Continue the running session, None if no handle was grabbed
    pub fn drag(&self, model: &mut TimingCurveModel, location: PixelPoint) -> Option<UnitPoint> {
        self.active
            .map(|which| self.drag_to(model, which, location))
    }

    pub fn release(&mut self) {
        self.active = None;
    }
}
