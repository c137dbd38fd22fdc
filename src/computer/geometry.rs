//! Pointer geometry against the drawing surface
//!
//! Maps pointer coordinates to semantic zones (ruler band, band half,
//! heading from center) and back (ratio to pixel, value to tick position).
//! All functions are pure.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::RulerBand;
use crate::consts::*;

/// Axis-aligned rectangle in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            min: center - size / 2.0,
            max: center + size / 2.0,
        }
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Inclusive containment, with `slack_x` added on both horizontal edges
    pub fn contains_with_slack(&self, p: Vec2, slack_x: f32) -> bool {
        p.x >= self.min.x - slack_x
            && p.x <= self.max.x + slack_x
            && p.y >= self.min.y
            && p.y <= self.max.y
    }
}

/// Drawing surface of known size; the instrument is centered on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Heading of `p` seen from the center, 0° = straight up.
    ///
    /// Not wrapped: the result lies in (-90, 270].
    pub fn angle_from_center(&self, p: Vec2) -> f32 {
        let d = p - self.center();
        d.y.atan2(d.x).to_degrees() + 90.0
    }

    /// Grabbable ruler band on the wind side
    pub fn ruler_band(&self) -> Rect {
        Rect::from_center_size(self.center(), Vec2::new(RULER_BAND_WIDTH, RULER_BAND_HEIGHT))
    }

    /// Painted face of the ruler band (same rows, wider columns)
    pub fn ruler_band_face(&self) -> Rect {
        Rect::from_center_size(self.center(), Vec2::new(RULER_BAND_FACE_WIDTH, RULER_BAND_HEIGHT))
    }

    pub fn is_inside_ruler_band(&self, p: Vec2) -> bool {
        self.ruler_band().contains_with_slack(p, RULER_BAND_TOLERANCE)
    }

    /// Which value column a pointer at `x` reads against
    pub fn ruler_band_side(&self, x: f32) -> RulerBand {
        if x < self.ruler_band().center().x {
            RulerBand::Low
        } else {
            RulerBand::High
        }
    }

    /// Cursor ratio for a pointer at `y` (0 = band top)
    pub fn wind_cursor_ratio_at(&self, y: f32) -> f32 {
        let band = self.ruler_band();
        ratio_from_vertical_position(y, band.min.y, band.height())
    }

    /// Pixel row of a cursor ratio on the band
    pub fn wind_cursor_y(&self, ratio: f32) -> f32 {
        let band = self.ruler_band();
        ratio_to_vertical_position(ratio, band.min.y, band.height())
    }
}

/// Linear position of `py` within a band, clamped to [0, 1]
pub fn ratio_from_vertical_position(py: f32, band_top: f32, band_height: f32) -> f32 {
    if band_height <= 0.0 {
        return 0.0;
    }
    ((py - band_top) / band_height).clamp(0.0, 1.0)
}

/// Inverse of [`ratio_from_vertical_position`]
pub fn ratio_to_vertical_position(ratio: f32, band_top: f32, band_height: f32) -> f32 {
    band_top + ratio.clamp(0.0, 1.0) * band_height
}

/// Position of `value` on a linear scale running `start..start + length`
/// for values `min..max`
pub fn value_to_position(value: f32, min: f32, max: f32, start: f32, length: f32) -> f32 {
    start + (value - min) / (max - min) * length
}

#[inline]
pub fn distance_between(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Strictly-inside test used for marker hits
#[inline]
pub fn within_hit_radius(pointer: Vec2, center: Vec2, radius: f32) -> bool {
    distance_between(pointer, center) < radius
}
