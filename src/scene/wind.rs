//! Wind side (side A) draw list

use glam::Vec2;

use super::primitives::{Role, Scene, Stroke, TextAlign, TextBaseline, TextStyle, palette};
use crate::computer::{Rect, RulerBand, Surface, ViewState};
use crate::consts::*;
use crate::{polar_to_screen, rotate_about};

/// Labels around the TAS ring, evenly spaced
pub const TAS_RING_SPEEDS: [u32; 18] = [
    50, 60, 70, 80, 90, 100, 120, 140, 160, 180, 200, 220, 240, 260, 280, 320, 360, 400,
];

/// Concentric speed arcs on the wind disc, innermost first
pub const DISC_SPEED_ARCS: [u32; 6] = [40, 60, 80, 100, 120, 140];

pub(super) fn build(scene: &mut Scene, surface: &Surface, view: &ViewState) {
    let center = surface.center();

    scene.rect(
        Role::Background,
        Rect {
            min: Vec2::ZERO,
            max: Vec2::new(surface.width, surface.height),
        },
        Some(palette::BACKGROUND),
        None,
    );

    azimuth_ring(scene, center);
    tas_ring(scene, center);
    ruler_band(scene, surface, view);
    wind_disc(scene, center, view.display_rotation());
    reference_arrow(scene, center);
    drift_guides(scene, center);

    let title = TextStyle::new(16.0, true, palette::INK);
    scene.label(Role::Caption, Vec2::new(center.x, 30.0), "E6B WIND SIDE (SIDE A)", title);
    scene.label(
        Role::Caption,
        Vec2::new(center.x, center.y - AZIMUTH_RING_RADIUS - 8.0),
        "TRUE HEADING",
        TextStyle::new(13.0, true, palette::BLUE),
    );
    scene.label(
        Role::Caption,
        Vec2::new(center.x, surface.height - 15.0),
        "Rotate disc • Mark points with single click • Double-click to remove",
        TextStyle::new(10.0, false, palette::MUTED),
    );
}

/// Fixed 0-360° scale: a tick per degree, longer every 5° and 10°
fn azimuth_ring(scene: &mut Scene, center: Vec2) {
    scene.circle(
        Role::AzimuthRing,
        center,
        AZIMUTH_RING_RADIUS,
        Some(palette::WHITE),
        Some(Stroke::new(palette::INK, 3.0)),
    );

    for deg in 0..360u32 {
        let (length, width) = match deg {
            d if d % 10 == 0 => (18.0, 2.0),
            d if d % 5 == 0 => (12.0, 1.5),
            _ => (4.0, 0.5),
        };
        let heading = deg as f32;
        scene.line(
            Role::AzimuthTick,
            polar_to_screen(center, AZIMUTH_RING_RADIUS - length, heading),
            polar_to_screen(center, AZIMUTH_RING_RADIUS, heading),
            Stroke::new(palette::INK, width),
        );
    }

    let style = TextStyle::new(13.0, true, palette::INK).baseline(TextBaseline::Middle);
    for deg in (0..360u32).step_by(10) {
        scene.label(
            Role::AzimuthLabel,
            polar_to_screen(center, AZIMUTH_RING_RADIUS - 40.0, deg as f32),
            format!("{deg:03}"),
            style,
        );
    }
}

fn tas_ring(scene: &mut Scene, center: Vec2) {
    scene.circle(
        Role::SpeedRing,
        center,
        TAS_RING_RADIUS,
        None,
        Some(Stroke::new(palette::BLUE, 2.0)),
    );

    let step = 360.0 / TAS_RING_SPEEDS.len() as f32;
    let style = TextStyle::new(11.0, true, palette::BLUE).baseline(TextBaseline::Middle);
    for (idx, speed) in TAS_RING_SPEEDS.iter().enumerate() {
        let heading = idx as f32 * step;
        scene.line(
            Role::SpeedRing,
            polar_to_screen(center, TAS_RING_RADIUS - 12.0, heading),
            polar_to_screen(center, TAS_RING_RADIUS + 8.0, heading),
            Stroke::new(palette::BLUE, 1.5),
        );
        scene.label(
            Role::SpeedLabel,
            polar_to_screen(center, TAS_RING_RADIUS + 25.0, heading),
            speed.to_string(),
            style,
        );
    }
}

/// Two parallel speed columns with the sliding cursor and its readout
fn ruler_band(scene: &mut Scene, surface: &Surface, view: &ViewState) {
    let face = surface.ruler_band_face();
    let (left, right) = (face.min.x, face.max.x);
    let (top, height) = (face.min.y, face.height());
    scene.rect(
        Role::RulerBand,
        face,
        Some(palette::BAND_FACE),
        Some(Stroke::new(palette::BAND_EDGE, 2.0)),
    );

    for band in [RulerBand::Low, RulerBand::High] {
        let (min, max) = band.range();
        // Ticks grow inward from the column edge
        let (edge, inward, align) = match band {
            RulerBand::Low => (left + 6.0, 1.0, TextAlign::Left),
            RulerBand::High => (right - 6.0, -1.0, TextAlign::Right),
        };
        let label_x = edge + inward * 12.0;
        let style = TextStyle::new(11.0, true, palette::BAND_INK)
            .align(align)
            .baseline(TextBaseline::Middle);

        for value in (min as u32..=max as u32).step_by(10) {
            let y = top + (max - value as f32) / (max - min) * height;
            let major = value % 20 == 0;
            let (tick, width) = if major { (14.0, 2.0) } else { (8.0, 1.0) };
            scene.line(
                Role::RulerTick,
                Vec2::new(edge, y),
                Vec2::new(edge + inward * tick, y),
                Stroke::new(palette::BAND_TICK, width),
            );
            if major {
                scene.label(Role::RulerLabel, Vec2::new(label_x, y), value.to_string(), style);
            }
        }
    }

    let center_x = face.center().x;
    scene.label(
        Role::Caption,
        Vec2::new(center_x, top - 10.0),
        "GS / TAS SCALE (kt)",
        TextStyle::new(12.0, true, palette::BAND_INK),
    );
    let header = TextStyle::new(10.0, true, palette::BAND_CAPTION);
    scene.label(
        Role::Caption,
        Vec2::new(left + 6.0, top - 24.0),
        "LOW SPEED",
        header.align(TextAlign::Left),
    );
    scene.label(
        Role::Caption,
        Vec2::new(right - 6.0, top - 24.0),
        "HIGH SPEED",
        header.align(TextAlign::Right),
    );

    let cursor_y = surface.wind_cursor_y(view.wind_cursor_ratio());
    scene.line(
        Role::Cursor,
        Vec2::new(left - 12.0, cursor_y),
        Vec2::new(right + 12.0, cursor_y),
        Stroke::new(palette::CURSOR, 3.0),
    );

    let is_low = view.active_band == RulerBand::Low;
    let pointer_x = if is_low { left + 22.0 } else { right - 22.0 };
    let tip = if is_low { -10.0 } else { 10.0 };
    scene.polygon(
        Role::Cursor,
        vec![
            Vec2::new(pointer_x + tip, cursor_y),
            Vec2::new(pointer_x, cursor_y - 6.0),
            Vec2::new(pointer_x, cursor_y + 6.0),
        ],
        palette::CURSOR,
    );

    let (readout_x, align) = if is_low {
        (pointer_x + 6.0, TextAlign::Left)
    } else {
        (pointer_x - 6.0, TextAlign::Right)
    };
    scene.label(
        Role::CursorReadout,
        Vec2::new(readout_x, cursor_y - 14.0),
        format!("{} kt", view.cursor_speed_kt()),
        TextStyle::new(11.0, true, palette::CURSOR).align(align),
    );
}

/// Rotatable disc; every point is turned about the center by `rotation`
fn wind_disc(scene: &mut Scene, center: Vec2, rotation: f32) {
    scene.circle(
        Role::WindDisc,
        center,
        WIND_DISC_RADIUS,
        Some(palette::DISC_FACE),
        Some(Stroke::new(palette::INK, 2.5)),
    );

    for deg in (0..360u32).step_by(5) {
        let stroke = if deg % 10 == 0 {
            Stroke::new(palette::DISC_GRID, 1.0)
        } else {
            Stroke::new(palette::DISC_FINE_GRID, 0.5)
        };
        scene.line(
            Role::WindDisc,
            center,
            polar_to_screen(center, WIND_DISC_RADIUS, deg as f32 + rotation),
            stroke,
        );
    }

    let spacing = WIND_DISC_RADIUS / DISC_SPEED_ARCS.len() as f32;
    let style = TextStyle::new(10.0, true, palette::INK);
    for (idx, speed) in DISC_SPEED_ARCS.iter().enumerate() {
        let radius = spacing * (idx + 1) as f32;
        scene.circle(
            Role::WindDisc,
            center,
            radius,
            None,
            Some(Stroke::new(palette::DISC_ARC, 1.0)),
        );
        let unrotated = center + Vec2::new(radius - 8.0, -5.0);
        scene.label(
            Role::WindDisc,
            rotate_about(unrotated, center, rotation),
            speed.to_string(),
            style,
        );
    }

    scene.circle(
        Role::WindDisc,
        center,
        WIND_DISC_HUB_RADIUS,
        Some(palette::INK),
        Some(Stroke::new(palette::WHITE, 2.0)),
    );
}

/// Fixed true-heading index at the top of the disc
fn reference_arrow(scene: &mut Scene, center: Vec2) {
    scene.line(
        Role::ReferenceArrow,
        Vec2::new(center.x, center.y - WIND_DISC_RADIUS - 5.0),
        Vec2::new(center.x, center.y - TAS_RING_RADIUS - 20.0),
        Stroke::new(palette::RED, 4.0),
    );
    scene.polygon(
        Role::ReferenceArrow,
        vec![
            Vec2::new(center.x, center.y - WIND_DISC_RADIUS - 15.0),
            Vec2::new(center.x - 8.0, center.y - WIND_DISC_RADIUS + 5.0),
            Vec2::new(center.x + 8.0, center.y - WIND_DISC_RADIUS + 5.0),
        ],
        palette::RED,
    );
}

/// Dashed ±5/10/15/20° lines from the center, fixed to the reference
fn drift_guides(scene: &mut Scene, center: Vec2) {
    let stroke = Stroke::new(palette::DRIFT, 2.0);
    let style = TextStyle::new(11.0, true, palette::RED).baseline(TextBaseline::Middle);
    for angle in DRIFT_ANGLES {
        for signed in [angle, -angle] {
            let heading = signed as f32;
            scene.dashed_line(
                Role::DriftGuide,
                center,
                polar_to_screen(center, WIND_DISC_RADIUS, heading),
                stroke,
                [6.0, 6.0],
            );
            let text = if signed > 0 {
                format!("+{signed}°")
            } else {
                format!("{signed}°")
            };
            scene.label(
                Role::DriftGuide,
                polar_to_screen(center, WIND_DISC_RADIUS + 10.0, heading),
                text,
                style,
            );
        }
    }
}
