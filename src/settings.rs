//! Engine settings
//!
//! Handed over by the host as JSON; nothing here touches storage.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Drawing surface ===
    /// Surface width in pixels, at least `SURFACE_WIDTH`
    pub surface_width: f32,
    /// Surface height in pixels, at least `SURFACE_HEIGHT`
    pub surface_height: f32,

    // === Gestures ===
    /// Displacement between down and up that turns a tap into a drag
    pub tap_slop_px: f32,
    /// Window for the second pointer-down of a marker double-tap
    pub double_tap_window_ms: f64,
    /// Pointer distance below which a marker counts as hit
    pub marker_hit_radius_px: f32,

    // === Calculator ruler ===
    pub ruler_offset_min_px: f32,
    pub ruler_offset_max_px: f32,
    pub ruler_offset_default_px: f32,

    // === Wind disc ===
    /// Round the disc rotation to whole degrees while dragging
    pub snap_rotation: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,

            tap_slop_px: TAP_SLOP_PX,
            double_tap_window_ms: DOUBLE_TAP_WINDOW_MS,
            marker_hit_radius_px: MARKER_HIT_RADIUS,

            ruler_offset_min_px: RULER_OFFSET_MIN,
            ruler_offset_max_px: RULER_OFFSET_MAX,
            ruler_offset_default_px: RULER_OFFSET_DEFAULT,

            snap_rotation: false,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded engine settings");
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings JSON ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Serialize for handing back to the host
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Repair values that would break the engine's invariants
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        // The instrument layout is fixed in pixels and needs the full default surface
        if !(self.surface_width.is_finite() && self.surface_width >= SURFACE_WIDTH)
            || !(self.surface_height.is_finite() && self.surface_height >= SURFACE_HEIGHT)
        {
            log::warn!(
                "Surface {}x{} is smaller than the instrument, using {}x{}",
                self.surface_width,
                self.surface_height,
                defaults.surface_width,
                defaults.surface_height
            );
            self.surface_width = defaults.surface_width;
            self.surface_height = defaults.surface_height;
        }

        if !(self.tap_slop_px.is_finite() && self.tap_slop_px >= 0.0) {
            log::warn!("tap_slop_px {} out of range, using default", self.tap_slop_px);
            self.tap_slop_px = defaults.tap_slop_px;
        }
        if !(self.double_tap_window_ms.is_finite() && self.double_tap_window_ms >= 0.0) {
            log::warn!(
                "double_tap_window_ms {} out of range, using default",
                self.double_tap_window_ms
            );
            self.double_tap_window_ms = defaults.double_tap_window_ms;
        }
        if !(self.marker_hit_radius_px.is_finite() && self.marker_hit_radius_px > 0.0) {
            log::warn!(
                "marker_hit_radius_px {} out of range, using default",
                self.marker_hit_radius_px
            );
            self.marker_hit_radius_px = defaults.marker_hit_radius_px;
        }

        let (min, max) = (self.ruler_offset_min_px, self.ruler_offset_max_px);
        if !(min.is_finite() && max.is_finite()) {
            log::warn!("Ruler bounds [{min}, {max}] not finite, using defaults");
            self.ruler_offset_min_px = defaults.ruler_offset_min_px;
            self.ruler_offset_max_px = defaults.ruler_offset_max_px;
        } else if min > max {
            log::warn!("Ruler bounds [{min}, {max}] inverted, swapping");
            self.ruler_offset_min_px = max;
            self.ruler_offset_max_px = min;
        }

        let default_offset = if self.ruler_offset_default_px.is_finite() {
            self.ruler_offset_default_px
        } else {
            defaults.ruler_offset_default_px
        };
        self.ruler_offset_default_px =
            default_offset.clamp(self.ruler_offset_min_px, self.ruler_offset_max_px);

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "snap_rotation": true }"#).unwrap();
        assert!(settings.snap_rotation);
        assert_eq!(settings.surface_width, SURFACE_WIDTH);
        assert_eq!(settings.double_tap_window_ms, DOUBLE_TAP_WINDOW_MS);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let settings = Settings::from_json_or_default("{ not json");
        assert_eq!(settings, Settings::default());
        assert!(Settings::from_json("42").is_err());
        assert!(Settings::from_json(r#"{ "tap_slop_px": "four" }"#).is_err());
        let settings = Settings::from_json_or_default(r#"{ "tap_slop_px": "four" }"#);
        assert_eq!(settings.tap_slop_px, TAP_SLOP_PX);
    }

    #[test]
    fn test_small_surface_is_replaced() {
        // Positional form still goes through sanitizing
        let settings = Settings::from_json("[1, 2]").unwrap();
        assert_eq!(settings.surface_width, SURFACE_WIDTH);
        assert_eq!(settings.surface_height, SURFACE_HEIGHT);

        let settings = Settings::from_json(r#"{ "surface_width": 799 }"#).unwrap();
        assert_eq!(settings.surface_width, SURFACE_WIDTH);

        let settings =
            Settings::from_json(r#"{ "surface_width": 1024, "surface_height": 768 }"#).unwrap();
        assert_eq!((settings.surface_width, settings.surface_height), (1024.0, 768.0));
    }

    #[test]
    fn test_zero_slop_is_accepted() {
        let settings = Settings::from_json(r#"{ "tap_slop_px": 0 }"#).unwrap();
        assert_eq!(settings.tap_slop_px, 0.0);
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let settings = Settings::from_json(
            r#"{ "ruler_offset_min_px": 500, "ruler_offset_max_px": 140, "ruler_offset_default_px": 900 }"#,
        )
        .unwrap();
        assert_eq!(settings.ruler_offset_min_px, 140.0);
        assert_eq!(settings.ruler_offset_max_px, 500.0);
        assert_eq!(settings.ruler_offset_default_px, 500.0);
    }

    #[test]
    fn test_bad_surface_and_gesture_values_repaired() {
        let settings = Settings {
            surface_width: 0.0,
            tap_slop_px: -1.0,
            marker_hit_radius_px: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.surface_width, SURFACE_WIDTH);
        assert_eq!(settings.tap_slop_px, TAP_SLOP_PX);
        assert_eq!(settings.marker_hit_radius_px, MARKER_HIT_RADIUS);
    }

    #[test]
    fn test_json_roundtrip_preserves_values() {
        let settings = Settings {
            snap_rotation: true,
            tap_slop_px: 6.0,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
