//! View state of the simulator
//!
//! Side, disc rotation, ruler positions and the active ruler column. Clamped
//! quantities are private and only change through clamping setters.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::normalize_degrees;
use crate::settings::Settings;

/// Face of the flight computer currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    /// Wind side (side A): azimuth ring, rotatable disc, GS/TAS ruler
    #[default]
    Wind,
    /// Calculator side (side B): linear scales and result windows
    Calculator,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Wind => "Wind",
            Side::Calculator => "Calculator",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wind" | "a" => Some(Side::Wind),
            "calculator" | "calc" | "b" => Some(Side::Calculator),
            _ => None,
        }
    }
}

/// Value column of the wind side ruler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RulerBand {
    /// Left column, 40-120 kt
    #[default]
    Low,
    /// Right column, 120-240 kt
    High,
}

impl RulerBand {
    /// Value range (min, max) of this column
    pub fn range(&self) -> (f32, f32) {
        match self {
            RulerBand::Low => (LOW_RULER_MIN, LOW_RULER_MAX),
            RulerBand::High => (HIGH_RULER_MIN, HIGH_RULER_MAX),
        }
    }
}

/// Allowed vertical range of the calculator's movable ruler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerBounds {
    pub min: f32,
    pub max: f32,
}

impl Default for RulerBounds {
    fn default() -> Self {
        Self {
            min: RULER_OFFSET_MIN,
            max: RULER_OFFSET_MAX,
        }
    }
}

impl RulerBounds {
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Strictly between the bounds (the ruler is hidden when parked at an end)
    #[inline]
    pub fn strictly_contains(&self, value: f32) -> bool {
        value > self.min && value < self.max
    }
}

/// Current configuration of the instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub side: Side,
    /// Free-running disc rotation in degrees (never wrapped)
    rotation_degrees: f32,
    /// Vertical position of the calculator's movable ruler
    rule_offset_px: f32,
    /// Cursor along the wind ruler, 0 = top/high end, 1 = bottom/low end
    wind_cursor_ratio: f32,
    pub active_band: RulerBand,
    bounds: RulerBounds,
    default_offset: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::for_side(Side::Wind, &Settings::default())
    }
}

impl ViewState {
    /// Defaults for `side` under the given settings
    pub fn for_side(side: Side, settings: &Settings) -> Self {
        let bounds = RulerBounds {
            min: settings.ruler_offset_min_px,
            max: settings.ruler_offset_max_px,
        };
        let default_offset = bounds.clamp(settings.ruler_offset_default_px);
        Self {
            side,
            rotation_degrees: 0.0,
            rule_offset_px: default_offset,
            wind_cursor_ratio: WIND_CURSOR_DEFAULT,
            active_band: RulerBand::Low,
            bounds,
            default_offset,
        }
    }

    /// Same side, everything else back to defaults
    pub fn reset(&mut self) {
        self.rotation_degrees = 0.0;
        self.rule_offset_px = self.default_offset;
        self.wind_cursor_ratio = WIND_CURSOR_DEFAULT;
        self.active_band = RulerBand::Low;
    }

    #[inline]
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    /// Rotation wrapped to [0, 360) for display
    #[inline]
    pub fn display_rotation(&self) -> f32 {
        normalize_degrees(self.rotation_degrees)
    }

    #[inline]
    pub fn rule_offset_px(&self) -> f32 {
        self.rule_offset_px
    }

    #[inline]
    pub fn wind_cursor_ratio(&self) -> f32 {
        self.wind_cursor_ratio
    }

    /// Non-finite input is ignored
    pub fn set_rotation(&mut self, degrees: f32) {
        if degrees.is_finite() {
            self.rotation_degrees = degrees;
        }
    }

    pub fn set_rule_offset(&mut self, offset_px: f32) {
        if offset_px.is_finite() {
            self.rule_offset_px = self.bounds.clamp(offset_px);
        }
    }

    pub fn set_wind_cursor_ratio(&mut self, ratio: f32) {
        if ratio.is_finite() {
            self.wind_cursor_ratio = ratio.clamp(0.0, 1.0);
        }
    }

    /// Reading under the cursor on the active column, in knots
    pub fn cursor_speed_kt(&self) -> u32 {
        let (min, max) = self.active_band.range();
        (min + (1.0 - self.wind_cursor_ratio) * (max - min)).round() as u32
    }

    /// Whether the movable calculator ruler is drawn
    pub fn inner_scale_visible(&self) -> bool {
        self.bounds.strictly_contains(self.rule_offset_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let view = ViewState::default();
        assert_eq!(view.side, Side::Wind);
        assert_eq!(view.rotation_degrees(), 0.0);
        assert_eq!(view.wind_cursor_ratio(), 0.5);
        assert_eq!(view.rule_offset_px(), 280.0);
        assert_eq!(view.active_band, RulerBand::Low);
    }

    #[test]
    fn test_setters_clamp() {
        let mut view = ViewState::default();
        view.set_rule_offset(1000.0);
        assert_eq!(view.rule_offset_px(), 500.0);
        view.set_rule_offset(-5.0);
        assert_eq!(view.rule_offset_px(), 140.0);
        view.set_wind_cursor_ratio(1.7);
        assert_eq!(view.wind_cursor_ratio(), 1.0);
        view.set_wind_cursor_ratio(f32::NAN);
        assert_eq!(view.wind_cursor_ratio(), 1.0);
    }

    #[test]
    fn test_rotation_is_unbounded() {
        let mut view = ViewState::default();
        view.set_rotation(725.0);
        assert_eq!(view.rotation_degrees(), 725.0);
        assert!((view.display_rotation() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_cursor_speed_per_band() {
        let mut view = ViewState::default();
        view.set_wind_cursor_ratio(0.0);
        assert_eq!(view.cursor_speed_kt(), 120);
        view.set_wind_cursor_ratio(1.0);
        assert_eq!(view.cursor_speed_kt(), 40);
        view.active_band = RulerBand::High;
        view.set_wind_cursor_ratio(0.5);
        assert_eq!(view.cursor_speed_kt(), 180);
    }

    #[test]
    fn test_reset_keeps_side() {
        let mut view = ViewState::for_side(Side::Calculator, &Settings::default());
        view.set_rule_offset(450.0);
        view.reset();
        assert_eq!(view.side, Side::Calculator);
        assert_eq!(view.rule_offset_px(), 280.0);
    }

    #[test]
    fn test_inner_scale_hidden_at_bounds() {
        let mut view = ViewState::default();
        assert!(view.inner_scale_visible());
        view.set_rule_offset(500.0);
        assert!(!view.inner_scale_visible());
        view.set_rule_offset(140.0);
        assert!(!view.inner_scale_visible());
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!(Side::from_str("B"), Some(Side::Calculator));
        assert_eq!(Side::from_str("wind"), Some(Side::Wind));
        assert_eq!(Side::from_str("north"), None);
    }
}
