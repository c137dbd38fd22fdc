//! E6B Analog - an interactive two-sided analog flight computer
//!
//! Core modules:
//! - `computer`: Deterministic engine (geometry, view state, markers, pointer interaction)
//! - `scene`: Declarative draw list for the active side
//! - `renderer`: Back-end-agnostic tessellation of the draw list
//! - `platform`: Browser host bindings
//! - `settings`: Engine configuration

pub mod computer;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use computer::{FlightComputer, Side};
pub use scene::Scene;
pub use settings::Settings;

use glam::Vec2;

/// Drawing surface and instrument constants (pixels unless noted)
pub mod consts {
    /// Default drawing surface dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 650.0;

    /// Wind side rings, measured from the surface center
    pub const AZIMUTH_RING_RADIUS: f32 = 280.0;
    pub const TAS_RING_RADIUS: f32 = 230.0;
    pub const WIND_DISC_RADIUS: f32 = 160.0;
    pub const WIND_DISC_HUB_RADIUS: f32 = 12.0;

    /// Grabbable ruler band (hit area), centered on the surface
    pub const RULER_BAND_WIDTH: f32 = 180.0;
    pub const RULER_BAND_HEIGHT: f32 = 440.0;
    /// Extra horizontal slack when grabbing the band edge
    pub const RULER_BAND_TOLERANCE: f32 = 10.0;
    /// Painted face of the band (slightly wider than the hit area)
    pub const RULER_BAND_FACE_WIDTH: f32 = 220.0;

    /// Parallel value columns on the wind side ruler (knots)
    pub const LOW_RULER_MIN: f32 = 40.0;
    pub const LOW_RULER_MAX: f32 = 120.0;
    pub const HIGH_RULER_MIN: f32 = 120.0;
    pub const HIGH_RULER_MAX: f32 = 240.0;

    /// Drift angle overlays (degrees either side of the reference)
    pub const DRIFT_ANGLES: [i32; 4] = [5, 10, 15, 20];

    /// Calculator side linear scales
    pub const SCALE_START_X: f32 = 80.0;
    pub const SCALE_WIDTH: f32 = 520.0;
    pub const SCALE_HEIGHT: f32 = 50.0;
    pub const OUTER_SCALE_Y: f32 = 100.0;
    pub const LINEAR_SCALE_MAX: u32 = 120;

    /// Movable ruler bounds on the calculator side
    pub const RULER_OFFSET_MIN: f32 = 140.0;
    pub const RULER_OFFSET_MAX: f32 = 500.0;
    pub const RULER_OFFSET_DEFAULT: f32 = 280.0;

    /// Default cursor position along the wind ruler (0 = top)
    pub const WIND_CURSOR_DEFAULT: f32 = 0.5;

    /// Marker glyph and hit radius
    pub const MARKER_RADIUS: f32 = 7.0;
    pub const MARKER_HIT_RADIUS: f32 = 14.0;

    /// Two pointer-downs on the same marker inside this window remove it
    pub const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;
    /// Release displacement beyond this is a drag, not a tap
    pub const TAP_SLOP_PX: f32 = 4.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Screen point at `radius` from `center` along a heading in degrees
/// (0 = straight up, clockwise positive, y grows downward)
#[inline]
pub fn polar_to_screen(center: Vec2, radius: f32, heading_degrees: f32) -> Vec2 {
    let theta = (heading_degrees - 90.0).to_radians();
    center + Vec2::new(radius * theta.cos(), radius * theta.sin())
}

/// Rotate `point` clockwise (on screen) about `center` by `degrees`
#[inline]
pub fn rotate_about(point: Vec2, center: Vec2, degrees: f32) -> Vec2 {
    let rotation = Vec2::from_angle(degrees.to_radians());
    center + rotation.rotate(point - center)
}
