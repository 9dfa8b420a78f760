//! Defaults of the timing curve demo and a loadable configuration.
//!
//! `CurveConfig` holds every value a host can tune. The `const` values stay as
//! defaults and reproduce the reference visuals.

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::animation::{ColorChangeDemo, DotsDemo};
use super::coordinate_mapper::{CoordinateMapper, MappingError};
use super::model::TimingCurveModel;
use super::point2::UnitPoint;
use super::NativeFloat;

// ── Curve ───────────────────────────────────────────────────────────

/// Initial position of the first control point.
pub const DEFAULT_CP0: UnitPoint = UnitPoint::new(0.4, 0.4);
/// Initial position of the second control point.
pub const DEFAULT_CP1: UnitPoint = UnitPoint::new(0.6, 0.6);
/// Side length of the square curve viewport in pixels.
pub const DEFAULT_VIEWPORT_SIZE: NativeFloat = 200.0;
/// Duration of a generated timing function when none is requested.
pub const DEFAULT_TIMING_DURATION: NativeFloat = 0.35;
/// Stroke width of the curve.
pub const CURVE_STROKE_WIDTH: f32 = 2.0;
/// Guide grid columns drawn behind the curve.
pub const GRID_COLUMNS: usize = 10;
/// Guide grid rows drawn behind the curve.
pub const GRID_ROWS: usize = 10;

// ── Handles ─────────────────────────────────────────────────────────

/// Diameter of a draggable control point handle.
pub const HANDLE_DIAMETER: NativeFloat = 10.0;

// ── Animations ──────────────────────────────────────────────────────

/// Period and duration of the sliding color change.
pub const COLOR_CHANGE_DURATION: NativeFloat = 1.0;
/// Diameter of an animated dot.
pub const DOT_DIAMETER: NativeFloat = 8.0;
/// Number of animated dots.
pub const DOT_COUNT: usize = 5;
/// Delay between the starts of two successive dots.
pub const DOT_STAGGER: NativeFloat = 0.2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("viewport size must be positive and finite, got {0}")]
    InvalidViewport(NativeFloat),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig
{
    pub cp0: UnitPoint,
    pub cp1: UnitPoint,
    pub viewport_size: NativeFloat,
    pub timing_duration: NativeFloat,
    pub stroke_width: f32,
    pub grid_columns: usize,
    pub grid_rows: usize,
    pub handle_diameter: NativeFloat,
    pub color_change_duration: NativeFloat,
    pub dot_diameter: NativeFloat,
    pub dot_count: usize,
    pub dot_stagger: NativeFloat,
}

impl Default for CurveConfig
{
    fn default() -> Self {
        CurveConfig {
            cp0: DEFAULT_CP0,
            cp1: DEFAULT_CP1,
            viewport_size: DEFAULT_VIEWPORT_SIZE,
            timing_duration: DEFAULT_TIMING_DURATION,
            stroke_width: CURVE_STROKE_WIDTH,
            grid_columns: GRID_COLUMNS,
            grid_rows: GRID_ROWS,
            handle_diameter: HANDLE_DIAMETER,
            color_change_duration: COLOR_CHANGE_DURATION,
            dot_diameter: DOT_DIAMETER,
            dot_count: DOT_COUNT,
            dot_stagger: DOT_STAGGER,
        }
    }
}

impl CurveConfig
{
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: CurveConfig = toml::from_str(source)?;
        config.validate()?;
        info!(
            "loaded curve config: viewport {} px, cp0 {}, cp1 {}",
            config.viewport_size, config.cp0, config.cp1
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.viewport_size > 0.0) || !self.viewport_size.is_finite() {
            return Err(ConfigError::InvalidViewport(self.viewport_size));
        }
        Ok(())
    }

    /// Model initialised with the configured control points and default duration
    pub fn model(&self) -> TimingCurveModel {
        TimingCurveModel::new(self.cp0, self.cp1).with_default_duration(self.timing_duration)
    }

    pub fn color_change_demo(&self) -> ColorChangeDemo {
        ColorChangeDemo::new(self.color_change_duration)
    }

    pub fn dots_demo(&self) -> DotsDemo {
        DotsDemo::new(self.dot_count, self.dot_stagger, self.color_change_duration)
            .with_dot_diameter(self.dot_diameter)
    }

    pub fn mapper(&self) -> Result<CoordinateMapper, MappingError> {
        CoordinateMapper::new(self.viewport_size)
    }
}


#[cfg(test)]
mod tests
{
    use super::*;
    use crate::animation::AnimationDriver;
    use crate::point2::PixelPoint;

    #[test]
    fn defaults_reproduce_reference_values() {
        let config = CurveConfig::default();
        assert_eq!(config.cp0, UnitPoint::new(0.4, 0.4));
        assert_eq!(config.cp1, UnitPoint::new(0.6, 0.6));
        assert_eq!(config.viewport_size, 200.0);
        assert_eq!(config.timing_duration, 0.35);
        assert_eq!(config.color_change_duration, 1.0);
        assert_eq!(config.dot_diameter, 8.0);
        assert_eq!(config.handle_diameter, 10.0);
        assert_eq!(config.dot_count, 5);
        assert_eq!(config.dot_stagger, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(CurveConfig::from_toml_str("").unwrap(), CurveConfig::default());
    }

    #[test]
    fn partial_document_overrides() {
        let config = CurveConfig::from_toml_str(
            r#"
            viewport_size = 320.0
            dot_count = 3

            [cp1]
            x = 0.9
            y = 1.2
            "#,
        )
        .unwrap();
        assert_eq!(config.viewport_size, 320.0);
        assert_eq!(config.dot_count, 3);
        assert_eq!(config.cp1, UnitPoint::new(0.9, 1.2));
        assert_eq!(config.cp0, DEFAULT_CP0);
        assert_eq!(config.model().cp1(), UnitPoint::new(0.9, 1.2));
        assert_eq!(config.mapper().unwrap().size(), 320.0);
    }

    #[test]
    fn timing_and_demo_values_come_through() {
        let config = CurveConfig::from_toml_str(
            r#"
            timing_duration = 0.5
            color_change_duration = 2.0
            dot_diameter = 6.0
            dot_count = 2
            dot_stagger = 0.5
            "#,
        )
        .unwrap();
        let model = config.model();
        assert_eq!(model.generate_timing_function(None).duration, 0.5);

        let mut color = config.color_change_demo();
        color.tick(1.5, &model);
        assert!(!color.is_changed());
        color.tick(0.5, &model);
        assert!(color.is_changed());

        let mut dots = config.dots_demo();
        assert_eq!(dots.len(), 2);
        assert_eq!(dots.dot_diameter(), 6.0);
        // second dot fires first at 0.5 + 2.0
        dots.tick(2.25, &model);
        let offsets = dots.offsets(1.0);
        assert!(offsets[0] > -1.0);
        assert_eq!(offsets[1], -1.0);
        dots.tick(0.5, &model);
        assert!(dots.offsets(1.0)[1] > -1.0);
        assert!(dots
            .dot_markers(1.0, PixelPoint::new(0.0, 0.0))
            .iter()
            .all(|marker| marker.diameter == 6.0));
    }

    #[test]
    fn rejects_bad_viewport() {
        assert!(matches!(
            CurveConfig::from_toml_str("viewport_size = 0.0"),
            Err(ConfigError::InvalidViewport(_))
        ));
        assert!(matches!(
            CurveConfig::from_toml_str("viewport_size = \"big\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
