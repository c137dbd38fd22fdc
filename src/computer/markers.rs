//! User-placed reference markers
//!
//! The store owns every marker. Selection is a weak reference: an id that may
//! stop resolving once its marker is removed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::within_hit_radius;
use crate::consts::MARKER_HIT_RADIUS;

/// Creation-time token, unique for the store's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(pub u64);

/// A placed point on the drawing surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    pub position: Vec2,
    /// Ordinal label ("M1", "M2", ...) fixed at creation
    pub label: Option<String>,
}

/// One row of the marker list shown beside the instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerSummary {
    pub id: MarkerId,
    pub label: String,
    pub x: i32,
    pub y: i32,
    pub selected: bool,
}

/// Ordered marker collection with a selection slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerStore {
    /// Insertion order
    markers: Vec<Marker>,
    selected: Option<MarkerId>,
    hit_radius: f32,
    next_id: u64,
}

impl Default for MarkerStore {
    fn default() -> Self {
        Self::with_hit_radius(MARKER_HIT_RADIUS)
    }
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hit_radius(hit_radius: f32) -> Self {
        Self {
            markers: Vec::new(),
            selected: None,
            hit_radius,
            next_id: 1,
        }
    }

    /// Append a marker labeled with the next ordinal and select it
    pub fn add(&mut self, position: Vec2) -> Marker {
        let id = MarkerId(self.next_id);
        self.next_id += 1;

        let marker = Marker {
            id,
            position,
            label: Some(format!("M{}", self.markers.len() + 1)),
        };
        self.markers.push(marker.clone());
        self.selected = Some(id);

        log::debug!("Marker {:?} added at ({:.0}, {:.0})", id, position.x, position.y);
        marker
    }

    /// Delete a marker; clears selection if it pointed at it
    pub fn remove(&mut self, id: MarkerId) -> Option<Marker> {
        let index = self.markers.iter().position(|m| m.id == id)?;
        let removed = self.markers.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        log::debug!("Marker {:?} removed", id);
        Some(removed)
    }

    /// First marker (insertion order) whose hit radius contains `position`
    pub fn find_hit(&self, position: Vec2) -> Option<&Marker> {
        self.markers
            .iter()
            .find(|m| within_hit_radius(position, m.position, self.hit_radius))
    }

    /// Set the selection slot without validating the id
    pub fn select(&mut self, id: Option<MarkerId>) {
        self.selected = id;
    }

    /// Raw selection slot (may be dangling)
    #[inline]
    pub fn selected_id(&self) -> Option<MarkerId> {
        self.selected
    }

    /// Selected marker, if the selection still resolves
    pub fn selected(&self) -> Option<&Marker> {
        let id = self.selected?;
        self.get(id)
    }

    /// Whether `id` is the selected marker and still present
    pub fn is_selected(&self, id: MarkerId) -> bool {
        self.selected().is_some_and(|m| m.id == id)
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.selected = None;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Markers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    pub fn summaries(&self) -> Vec<MarkerSummary> {
        self.markers
            .iter()
            .enumerate()
            .map(|(idx, m)| MarkerSummary {
                id: m.id,
                label: m.label.clone().unwrap_or_else(|| format!("M{}", idx + 1)),
                x: m.position.x.round() as i32,
                y: m.position.y.round() as i32,
                selected: self.is_selected(m.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_labels_and_selects() {
        let mut store = MarkerStore::new();
        let m1 = store.add(Vec2::new(10.0, 10.0));
        let m2 = store.add(Vec2::new(100.0, 10.0));
        assert_eq!(m1.label.as_deref(), Some("M1"));
        assert_eq!(m2.label.as_deref(), Some("M2"));
        assert_ne!(m1.id, m2.id);
        assert_eq!(store.selected_id(), Some(m2.id));
    }

    #[test]
    fn test_labels_are_not_renumbered() {
        let mut store = MarkerStore::new();
        let m1 = store.add(Vec2::new(10.0, 10.0));
        let m2 = store.add(Vec2::new(100.0, 10.0));
        store.remove(m1.id);
        assert_eq!(store.get(m2.id).unwrap().label.as_deref(), Some("M2"));
        // Ordinal is count at creation + 1
        let m3 = store.add(Vec2::new(200.0, 10.0));
        assert_eq!(m3.label.as_deref(), Some("M2"));
        assert_ne!(m3.id, m2.id);
    }

    #[test]
    fn test_remove_clears_matching_selection_only() {
        let mut store = MarkerStore::new();
        let m1 = store.add(Vec2::new(10.0, 10.0));
        let m2 = store.add(Vec2::new(100.0, 10.0));
        store.select(Some(m1.id));
        store.remove(m2.id);
        assert_eq!(store.selected_id(), Some(m1.id));
        store.remove(m1.id);
        assert_eq!(store.selected_id(), None);
        assert!(store.remove(m1.id).is_none());
    }

    #[test]
    fn test_find_hit_first_match_wins() {
        let mut store = MarkerStore::new();
        let m1 = store.add(Vec2::new(100.0, 100.0));
        let _m2 = store.add(Vec2::new(110.0, 100.0));
        let hit = store.find_hit(Vec2::new(105.0, 100.0)).unwrap();
        assert_eq!(hit.id, m1.id);
        assert!(store.find_hit(Vec2::new(300.0, 300.0)).is_none());
        assert!(MarkerStore::new().find_hit(Vec2::ZERO).is_none());
    }

    #[test]
    fn test_selection_is_weak() {
        let mut store = MarkerStore::new();
        store.select(Some(MarkerId(42)));
        assert_eq!(store.selected_id(), Some(MarkerId(42)));
        assert!(store.selected().is_none());
    }

    #[test]
    fn test_clear_empties_store_and_selection() {
        let mut store = MarkerStore::new();
        store.add(Vec2::new(1.0, 1.0));
        store.clear();
        assert!(store.is_empty());
        assert!(store.selected_id().is_none());
    }

    #[test]
    fn test_summaries_round_positions() {
        let mut store = MarkerStore::new();
        store.add(Vec2::new(10.4, 19.6));
        let rows = store.summaries();
        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].x, rows[0].y), (10, 20));
        assert_eq!(rows[0].label, "M1");
        assert!(rows[0].selected);
    }
}
