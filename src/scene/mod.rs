//! Scene builder
//!
//! A pure projection of view state, markers and derived values into a
//! declarative draw list for the active side. Nothing here mutates state; a
//! rendering back end paints the list.

pub mod calculator;
pub mod primitives;
pub mod wind;

pub use primitives::{
    Color, DrawItem, FontFamily, Primitive, Role, Scene, Stroke, TextAlign, TextBaseline,
    TextStyle, palette,
};

use crate::computer::{DerivedValues, MarkerStore, Side, Surface, ViewState};
use crate::consts::MARKER_RADIUS;
use glam::Vec2;

/// Build the draw list for `view.side`
pub fn build(
    surface: &Surface,
    view: &ViewState,
    markers: &MarkerStore,
    derived: &DerivedValues,
) -> Scene {
    let mut scene = Scene::new(view.side, surface.width, surface.height);
    match view.side {
        Side::Wind => wind::build(&mut scene, surface, view),
        Side::Calculator => calculator::build(&mut scene, surface, view, &derived.readouts()),
    }
    marker_glyphs(&mut scene, view.side, markers);
    scene
}

/// Markers paint last; labels only on the calculator side
fn marker_glyphs(scene: &mut Scene, side: Side, markers: &MarkerStore) {
    let highlight = match side {
        Side::Wind => palette::MARKER_SELECTED_WIND,
        Side::Calculator => palette::MARKER_SELECTED_CALCULATOR,
    };
    let label_style = TextStyle::new(10.0, true, palette::INK);

    for marker in markers.iter() {
        let fill = if markers.is_selected(marker.id) {
            highlight
        } else {
            palette::MARKER
        };
        scene.circle(
            Role::Marker,
            marker.position,
            MARKER_RADIUS,
            Some(fill),
            Some(Stroke::new(palette::WHITE, 2.0)),
        );

        if side == Side::Calculator {
            if let Some(label) = &marker.label {
                scene.label(
                    Role::MarkerLabel,
                    marker.position - Vec2::new(0.0, 12.0),
                    label.clone(),
                    label_style,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlightComputer;
    use crate::computer::{RulerBand, SENTINEL};
    use crate::consts::*;

    fn line_endpoints(item: &DrawItem) -> (Vec2, Vec2) {
        match &item.primitive {
            Primitive::Line { from, to, .. } => (*from, *to),
            other => panic!("expected a line, got {other:?}"),
        }
    }

    fn label_anchor(item: &DrawItem) -> Vec2 {
        match &item.primitive {
            Primitive::Label { anchor, .. } => *anchor,
            other => panic!("expected a label, got {other:?}"),
        }
    }

    #[test]
    fn test_wind_azimuth_ring() {
        let scene = FlightComputer::default().scene();
        assert_eq!(scene.side, Side::Wind);
        assert_eq!(scene.count(Role::AzimuthTick), 360);

        let labels = scene.texts(Role::AzimuthLabel);
        assert_eq!(labels.len(), 36);
        assert_eq!(labels[0], "000");
        assert_eq!(labels[9], "090");
        assert_eq!(labels[35], "350");

        // 0° tick sits straight above the center
        let first = scene.with_role(Role::AzimuthTick).next().unwrap();
        let (from, to) = line_endpoints(first);
        assert!((from.x - 400.0).abs() < 1e-3 && (to.x - 400.0).abs() < 1e-3);
        assert!((to.y - (325.0 - AZIMUTH_RING_RADIUS)).abs() < 1e-3);
        assert!((from.y - to.y - 18.0).abs() < 1e-3);
    }

    #[test]
    fn test_wind_speed_ring_and_drift_labels() {
        let scene = FlightComputer::default().scene();
        assert_eq!(scene.texts(Role::SpeedLabel).len(), wind::TAS_RING_SPEEDS.len());

        let drift = scene.texts(Role::DriftGuide);
        for expected in ["+5°", "-5°", "+10°", "-10°", "+15°", "-15°", "+20°", "-20°"] {
            assert!(drift.contains(&expected), "missing drift label {expected}");
        }
        let dashed = scene
            .with_role(Role::DriftGuide)
            .filter(|i| matches!(i.primitive, Primitive::Line { dash: Some(_), .. }))
            .count();
        assert_eq!(dashed, 8);
    }

    #[test]
    fn test_wind_ruler_columns() {
        let scene = FlightComputer::default().scene();
        let labels = scene.texts(Role::RulerLabel);
        // Majors every 20: 40..120 and 120..240
        assert_eq!(labels.len(), 5 + 7);
        assert!(labels.contains(&"40") && labels.contains(&"240"));
        // Every 10 units: 9 low + 13 high
        assert_eq!(scene.count(Role::RulerTick), 9 + 13);
    }

    #[test]
    fn test_wind_cursor_follows_ratio_and_band() {
        let mut fc = FlightComputer::default();
        let scene = fc.scene();
        let cursor = scene.with_role(Role::Cursor).next().unwrap();
        let (from, _) = line_endpoints(cursor);
        assert!((from.y - 325.0).abs() < 1e-3);
        assert_eq!(scene.texts(Role::CursorReadout), vec!["80 kt"]);

        // Grab the high column near the top
        fc.pointer_down(Vec2::new(470.0, 300.0), 0.0);
        fc.pointer_move(Vec2::new(470.0, 105.0));
        assert_eq!(fc.view().active_band, RulerBand::High);
        let scene = fc.scene();
        let (from, _) = line_endpoints(scene.with_role(Role::Cursor).next().unwrap());
        assert!((from.y - 105.0).abs() < 1e-3);
        assert_eq!(scene.texts(Role::CursorReadout), vec!["240 kt"]);
    }

    #[test]
    fn test_wind_disc_rotates_guides() {
        let mut fc = FlightComputer::default();
        let before = fc.scene();
        fc.pointer_down(Vec2::new(700.0, 325.0), 0.0);
        fc.pointer_move(Vec2::new(700.0, 325.0));
        let after = fc.scene();

        let disc_lines = |scene: &Scene| -> Vec<(Vec2, Vec2)> {
            scene
                .with_role(Role::WindDisc)
                .filter(|i| matches!(i.primitive, Primitive::Line { .. }))
                .map(line_endpoints)
                .collect()
        };
        let (_, tip_before) = disc_lines(&before)[0];
        let (_, tip_after) = disc_lines(&after)[0];
        // Heading 0 line turns 90° clockwise: from straight up to straight right
        assert!((tip_before - Vec2::new(400.0, 325.0 - WIND_DISC_RADIUS)).length() < 1e-3);
        assert!((tip_after - Vec2::new(400.0 + WIND_DISC_RADIUS, 325.0)).length() < 1e-3);

        // Fixed elements do not move
        assert_eq!(
            before.with_role(Role::ReferenceArrow).collect::<Vec<_>>(),
            after.with_role(Role::ReferenceArrow).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_large_rotation_draws_like_wrapped() {
        let mut fc = FlightComputer::default();
        fc.pointer_down(Vec2::new(700.0, 325.0), 0.0);
        fc.pointer_move(Vec2::new(700.0, 325.0));
        let wrapped = fc.scene();

        let mut view = fc.view().clone();
        view.set_rotation(90.0 + 360.0 * 40.0);
        let unwrapped = build(fc.surface(), &view, fc.markers(), &fc.derived());
        let a: Vec<_> = wrapped.with_role(Role::WindDisc).collect();
        let b: Vec<_> = unwrapped.with_role(Role::WindDisc).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_wind_markers_without_labels() {
        let mut fc = FlightComputer::default();
        fc.tap(Vec2::new(100.0, 100.0));
        fc.tap(Vec2::new(700.0, 600.0));
        let scene = fc.scene();
        assert_eq!(scene.count(Role::Marker), 2);
        assert_eq!(scene.count(Role::MarkerLabel), 0);

        let fills: Vec<_> = scene
            .with_role(Role::Marker)
            .map(|i| match &i.primitive {
                Primitive::Circle { fill, .. } => fill.unwrap(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(fills, vec![palette::MARKER, palette::MARKER_SELECTED_WIND]);
    }

    #[test]
    fn test_calculator_scales() {
        let mut fc = FlightComputer::default();
        fc.select_side(Side::Calculator);
        let scene = fc.scene();
        assert_eq!(scene.side, Side::Calculator);
        // Outer and inner scale, 0..=120 each
        assert_eq!(scene.count(Role::ScaleTick), 2 * 121);
        // End numbers are skipped
        let numbers = scene.texts(Role::ScaleLabel);
        assert_eq!(numbers.len(), 2 * 11);
        assert!(!numbers.contains(&"0") && !numbers.contains(&"120"));

        let faces: Vec<_> = scene
            .with_role(Role::LinearScale)
            .filter_map(|i| match &i.primitive {
                Primitive::Rect { rect, .. } => Some(rect.min.y),
                _ => None,
            })
            .collect();
        assert_eq!(faces, vec![OUTER_SCALE_Y - 8.0, RULER_OFFSET_DEFAULT - 8.0]);
    }

    #[test]
    fn test_calculator_inner_scale_hidden_at_limit() {
        let mut fc = FlightComputer::default();
        fc.select_side(Side::Calculator);
        fc.pointer_down(Vec2::new(300.0, 300.0), 0.0);
        fc.pointer_move(Vec2::new(300.0, 640.0));
        assert_eq!(fc.view().rule_offset_px(), RULER_OFFSET_MAX);
        let scene = fc.scene();
        assert_eq!(scene.count(Role::ScaleTick), 121);
    }

    #[test]
    fn test_calculator_reference_cursor_fixed() {
        let mut fc = FlightComputer::default();
        fc.select_side(Side::Calculator);
        let scene = fc.scene();
        let cursor = scene.with_role(Role::ReferenceCursor).next().unwrap();
        let (from, to) = line_endpoints(cursor);
        assert_eq!(from.x, calculator::REFERENCE_CURSOR_X);
        assert_eq!(to.x, calculator::REFERENCE_CURSOR_X);
        assert!(matches!(cursor.primitive, Primitive::Line { dash: Some(_), .. }));
    }

    #[test]
    fn test_calculator_result_windows() {
        let mut fc = FlightComputer::default();
        fc.select_side(Side::Calculator);
        let texts = fc.scene().texts(Role::ResultWindow).join("|");
        assert!(texts.contains("TIME") && texts.contains("FUEL") && texts.contains("DISTANCE"));
        assert_eq!(texts.matches(SENTINEL).count(), 3);

        fc.tap(Vec2::new(400.0, 200.0));
        fc.tap(Vec2::new(450.0, 260.0));
        let scene = fc.scene();
        let texts = scene.texts(Role::ResultWindow);
        assert!(texts.contains(&"3 min"));
        assert!(texts.contains(&"4 gal"));
        assert!(texts.contains(&"16 nm"));

        // Labels float above each marker
        let anchors: Vec<_> = scene.with_role(Role::MarkerLabel).map(label_anchor).collect();
        assert_eq!(anchors, vec![Vec2::new(400.0, 188.0), Vec2::new(450.0, 248.0)]);
        assert_eq!(scene.texts(Role::MarkerLabel), vec!["M1", "M2"]);
    }

    #[test]
    fn test_scene_build_is_pure() {
        let mut fc = FlightComputer::default();
        fc.tap(Vec2::new(120.0, 120.0));
        let first = fc.scene();
        let second = fc.scene();
        assert_eq!(first, second);
        assert_eq!(fc.markers().len(), 1);
    }

    #[test]
    fn test_scene_json_roundtrip() {
        let mut fc = FlightComputer::default();
        fc.tap(Vec2::new(120.0, 120.0));
        let scene = fc.scene();
        let json = scene.to_json().unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items.len(), scene.items.len());
        assert_eq!(back.count(Role::Marker), 1);
    }
}
