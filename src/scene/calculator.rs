//! Calculator side (side B) draw list

use glam::Vec2;

use super::primitives::{Color, Role, Scene, Stroke, TextAlign, TextBaseline, TextStyle, palette};
use crate::computer::geometry::value_to_position;
use crate::computer::{Readouts, Rect, Surface, ViewState};
use crate::consts::*;

/// Column of the fixed reference cursor
pub const REFERENCE_CURSOR_X: f32 = SCALE_START_X + SCALE_WIDTH / 2.0;

const WINDOW_WIDTH: f32 = 100.0;
const WINDOW_HEIGHT: f32 = 80.0;
const WINDOW_X: f32 = SCALE_START_X + SCALE_WIDTH + 45.0;

pub(super) fn build(scene: &mut Scene, surface: &Surface, view: &ViewState, readouts: &Readouts) {
    scene.rect(
        Role::Background,
        Rect {
            min: Vec2::ZERO,
            max: Vec2::new(surface.width, surface.height),
        },
        Some(palette::BACKGROUND),
        None,
    );

    linear_scale(scene, OUTER_SCALE_Y, "OUTER SCALE - Distance (NM) / Speed (kt)", false);
    if view.inner_scale_visible() {
        linear_scale(
            scene,
            view.rule_offset_px(),
            "INNER SCALE - Time (min) / Fuel (gal)",
            true,
        );
    }

    reference_cursor(scene);
    result_windows(scene, readouts);

    let center_x = surface.width / 2.0;
    scene.label(
        Role::Caption,
        Vec2::new(center_x, 30.0),
        "E6B CALCULATOR SIDE (SIDE B)",
        TextStyle::new(16.0, true, palette::INK),
    );
    scene.label(
        Role::Caption,
        Vec2::new(center_x, surface.height - 15.0),
        "Drag blue scale up/down • Red line = reference cursor • Click to mark points",
        TextStyle::new(10.0, false, palette::MUTED),
    );
}

/// Equally spaced 0-120 scale whose face starts at row `y`
fn linear_scale(scene: &mut Scene, y: f32, caption: &str, movable: bool) {
    let (fill, stroke) = if movable {
        (palette::MOVABLE_FACE, Stroke::new(palette::BLUE, 3.0))
    } else {
        (palette::WHITE, Stroke::new(palette::INK, 2.0))
    };
    scene.rect(
        Role::LinearScale,
        Rect {
            min: Vec2::new(SCALE_START_X - 5.0, y - 8.0),
            max: Vec2::new(SCALE_START_X + SCALE_WIDTH + 5.0, y + SCALE_HEIGHT + 8.0),
        },
        Some(fill),
        Some(stroke),
    );
    scene.label(
        Role::LinearScale,
        Vec2::new(SCALE_START_X - 5.0, y - 15.0),
        caption,
        TextStyle::new(13.0, true, stroke.color).align(TextAlign::Left),
    );

    let baseline = y + SCALE_HEIGHT;
    let number_style = TextStyle::new(10.0, true, palette::INK).baseline(TextBaseline::Bottom);
    for value in 0..=LINEAR_SCALE_MAX {
        let x = value_to_position(
            value as f32,
            0.0,
            LINEAR_SCALE_MAX as f32,
            SCALE_START_X,
            SCALE_WIDTH,
        );
        let (tick, width) = match value {
            v if v % 10 == 0 => (14.0, 2.0),
            v if v % 5 == 0 => (9.0, 1.2),
            _ => (5.0, 0.8),
        };
        scene.line(
            Role::ScaleTick,
            Vec2::new(x, baseline),
            Vec2::new(x, baseline - tick),
            Stroke::new(palette::INK, width),
        );

        // End numbers would collide with the face border
        let clear_of_edges = x > SCALE_START_X + 10.0 && x < SCALE_START_X + SCALE_WIDTH - 10.0;
        if value % 10 == 0 && clear_of_edges {
            scene.label(
                Role::ScaleLabel,
                Vec2::new(x, baseline - tick - 2.0),
                value.to_string(),
                number_style,
            );
        }
    }
}

fn reference_cursor(scene: &mut Scene) {
    scene.dashed_line(
        Role::ReferenceCursor,
        Vec2::new(REFERENCE_CURSOR_X, 40.0),
        Vec2::new(REFERENCE_CURSOR_X, 600.0),
        Stroke::new(palette::RED, 3.0),
        [6.0, 4.0],
    );
    scene.circle(
        Role::ReferenceCursor,
        Vec2::new(REFERENCE_CURSOR_X, 35.0),
        5.0,
        Some(palette::RED),
        None,
    );
}

fn result_windows(scene: &mut Scene, readouts: &Readouts) {
    let windows: [(&str, &str, &str, f32, Color); 3] = [
        ("TIME", readouts.time.as_str(), "minutes", 140.0, palette::TIME),
        ("FUEL", readouts.fuel.as_str(), "gallons", 250.0, palette::FUEL),
        ("DISTANCE", readouts.distance.as_str(), "nautical miles", 360.0, palette::DISTANCE),
    ];

    let mid_x = WINDOW_X + WINDOW_WIDTH / 2.0;
    for (title, value, unit, y, color) in windows {
        scene.rect(
            Role::ResultWindow,
            Rect {
                min: Vec2::new(WINDOW_X - 5.0, y - 5.0),
                max: Vec2::new(WINDOW_X + WINDOW_WIDTH + 5.0, y + WINDOW_HEIGHT + 5.0),
            },
            Some(palette::WHITE),
            Some(Stroke::new(color, 3.0)),
        );
        scene.label(
            Role::ResultWindow,
            Vec2::new(mid_x, y + 15.0),
            title,
            TextStyle::new(13.0, true, color),
        );
        scene.label(
            Role::ResultWindow,
            Vec2::new(mid_x, y + 52.0),
            value,
            TextStyle::new(18.0, true, palette::INK).monospace(),
        );
        scene.label(
            Role::ResultWindow,
            Vec2::new(mid_x, y + 73.0),
            format!("({unit})"),
            TextStyle::new(9.0, false, palette::MUTED),
        );
    }
}
