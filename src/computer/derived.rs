//! Time / fuel / distance placeholders read from marker positions
//!
//! A screen-distance heuristic with fixed scale factors, not a wind-triangle
//! solution. Only the first two markers in insertion order are read.

use serde::{Deserialize, Serialize};

use super::geometry::distance_between;
use super::markers::MarkerStore;

/// Shown when a value cannot be computed
pub const SENTINEL: &str = "—";

/// Screen pixels per nautical mile
pub const PIXELS_PER_NM: f32 = 5.0;
/// Nautical miles covered per minute
pub const NM_PER_MINUTE: f32 = 5.0;
/// Gallons burned per minute
pub const GALLONS_PER_MINUTE: f32 = 1.2;

/// Numeric results; `None` with fewer than two markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DerivedValues {
    pub distance_nm: Option<u32>,
    pub time_min: Option<u32>,
    pub fuel_gal: Option<u32>,
}

/// Display strings for the TIME / FUEL / DISTANCE windows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readouts {
    pub time: String,
    pub fuel: String,
    pub distance: String,
}

impl DerivedValues {
    pub fn compute(markers: &MarkerStore) -> Self {
        let [first, second, ..] = markers.as_slice() else {
            return Self::default();
        };

        let pixel_distance = distance_between(first.position, second.position);
        let distance_nm = (pixel_distance / PIXELS_PER_NM).round();
        let time_min = (distance_nm / NM_PER_MINUTE).round();
        let fuel_gal = (time_min * GALLONS_PER_MINUTE).round();

        Self {
            distance_nm: Some(distance_nm as u32),
            time_min: Some(time_min as u32),
            fuel_gal: Some(fuel_gal as u32),
        }
    }

    pub fn is_computable(&self) -> bool {
        self.distance_nm.is_some()
    }

    /// Zero reads as the sentinel too; the window would show nothing useful
    pub fn readouts(&self) -> Readouts {
        Readouts {
            time: display(self.time_min, "min"),
            fuel: display(self.fuel_gal, "gal"),
            distance: display(self.distance_nm, "nm"),
        }
    }
}

fn display(value: Option<u32>, unit: &str) -> String {
    match value {
        Some(v) if v > 0 => format!("{v} {unit}"),
        _ => SENTINEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_fewer_than_two_markers_is_sentinel() {
        let mut store = MarkerStore::new();
        let values = DerivedValues::compute(&store);
        assert!(!values.is_computable());
        assert_eq!(values.readouts().time, SENTINEL);

        store.add(Vec2::new(400.0, 200.0));
        let readouts = DerivedValues::compute(&store).readouts();
        assert_eq!(readouts.time, SENTINEL);
        assert_eq!(readouts.fuel, SENTINEL);
        assert_eq!(readouts.distance, SENTINEL);
    }

    #[test]
    fn test_two_markers_fixed_scale() {
        let mut store = MarkerStore::new();
        store.add(Vec2::new(400.0, 200.0));
        store.add(Vec2::new(450.0, 260.0));
        let values = DerivedValues::compute(&store);
        // euclid = 78.10 px -> 16 nm -> 3 min -> 4 gal
        assert_eq!(values.distance_nm, Some(16));
        assert_eq!(values.time_min, Some(3));
        assert_eq!(values.fuel_gal, Some(4));

        let readouts = values.readouts();
        assert_eq!(readouts.distance, "16 nm");
        assert_eq!(readouts.time, "3 min");
        assert_eq!(readouts.fuel, "4 gal");
    }

    #[test]
    fn test_third_marker_is_ignored() {
        let mut store = MarkerStore::new();
        store.add(Vec2::new(100.0, 100.0));
        store.add(Vec2::new(400.0, 500.0));
        let before = DerivedValues::compute(&store);
        store.add(Vec2::new(700.0, 20.0));
        assert_eq!(DerivedValues::compute(&store), before);
    }

    #[test]
    fn test_zero_values_display_sentinel() {
        let mut store = MarkerStore::new();
        store.add(Vec2::new(100.0, 100.0));
        store.add(Vec2::new(110.0, 100.0));
        let values = DerivedValues::compute(&store);
        // 10 px -> 2 nm -> 0 min -> 0 gal
        assert_eq!(values.distance_nm, Some(2));
        assert_eq!(values.time_min, Some(0));
        let readouts = values.readouts();
        assert_eq!(readouts.distance, "2 nm");
        assert_eq!(readouts.time, SENTINEL);
        assert_eq!(readouts.fuel, SENTINEL);
    }
}
