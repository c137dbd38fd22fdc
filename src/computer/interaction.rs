//! Pointer-driven interaction
//!
//! Consumes raw pointer events, classifies pointer-down locations, drives view
//! state during a drag and tells drags apart from taps so that only a tap can
//! create a marker.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::derived::{DerivedValues, Readouts};
use super::geometry::{Surface, distance_between};
use super::markers::{MarkerId, MarkerStore, MarkerSummary};
use super::state::{Side, ViewState};
use crate::scene::{self, Scene};
use crate::settings::Settings;

/// What a drag session manipulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragMode {
    #[default]
    None,
    /// Wind disc follows the pointer heading
    Rotate,
    /// Cursor slides along the wind side ruler band
    SlideLinearCursor,
    /// Calculator's inner ruler slides vertically
    SlideRuler,
}

/// Raw input from the host (single pointer)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { pos: Vec2, time_ms: f64 },
    Move { pos: Vec2 },
    Up { pos: Vec2 },
    Leave,
    /// Click callback; hosts fire it only after a release that was not a drag
    Tap { pos: Vec2 },
}

/// How a released gesture was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    /// Moved no further than the tap slop; a tap may follow
    Tap,
    /// Moved beyond the tap slop; the following tap is suppressed
    Drag,
    /// Pointer left the surface mid-gesture
    Cancelled,
}

/// Observable effect of one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Unchanged,
    /// Pointer-down started a drag session
    DragStarted(DragMode),
    /// Pointer-down completed a double-tap on a marker
    MarkerRemoved(MarkerId),
    /// Drag moved the disc, cursor or ruler
    ViewChanged,
    /// Drag session ended
    DragEnded(Gesture),
    /// Tap placed a new marker
    MarkerAdded(MarkerId),
}

impl Outcome {
    /// Whether the draw list must be rebuilt
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Outcome::Unchanged | Outcome::DragEnded(_))
    }
}

/// Side-specific status box under the instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReadout {
    pub title: &'static str,
    pub value: String,
}

/// Ephemeral state between pointer-down and pointer-up
#[derive(Debug, Clone, Copy)]
struct DragSession {
    mode: DragMode,
    origin: Vec2,
    /// Largest distance from the origin seen so far
    max_displacement: f32,
}

impl DragSession {
    fn track(&mut self, pos: Vec2) {
        self.max_displacement = self.max_displacement.max(distance_between(self.origin, pos));
    }
}

/// Previous pointer-down that did not remove a marker
#[derive(Debug, Clone, Copy)]
struct LastDown {
    time_ms: f64,
    marker: Option<MarkerId>,
}

/// The simulator: sole writer of view state and markers
#[derive(Debug, Clone)]
pub struct FlightComputer {
    settings: Settings,
    surface: Surface,
    view: ViewState,
    markers: MarkerStore,
    session: Option<DragSession>,
    last_down: Option<LastDown>,
    suppress_next_tap: bool,
}

impl Default for FlightComputer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl FlightComputer {
    /// Mount on the wind side with default state
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let surface = Surface::new(settings.surface_width, settings.surface_height);
        Self {
            view: ViewState::for_side(Side::Wind, &settings),
            markers: MarkerStore::with_hit_radius(settings.marker_hit_radius_px),
            surface,
            settings,
            session: None,
            last_down: None,
            suppress_next_tap: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn markers(&self) -> &MarkerStore {
        &self.markers
    }

    /// Mode of the active drag session, `None` while idle
    pub fn drag_mode(&self) -> DragMode {
        self.session.map(|s| s.mode).unwrap_or_default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Dispatch one pointer event
    pub fn handle(&mut self, event: PointerEvent) -> Outcome {
        match event {
            PointerEvent::Down { pos, time_ms } => self.pointer_down(pos, time_ms),
            PointerEvent::Move { pos } => self.pointer_move(pos),
            PointerEvent::Up { pos } => self.pointer_up(pos),
            PointerEvent::Leave => self.pointer_leave(),
            PointerEvent::Tap { pos } => self.tap(pos),
        }
    }

    pub fn pointer_down(&mut self, pos: Vec2, time_ms: f64) -> Outcome {
        if self.session.is_some() {
            log::warn!("Pointer down during an active drag; ending previous session");
            self.session = None;
        }
        self.suppress_next_tap = false;

        let hit = self.markers.find_hit(pos).map(|m| m.id);

        if let (Some(id), Some(last)) = (hit, self.last_down) {
            let elapsed = time_ms - last.time_ms;
            let in_window = (0.0..self.settings.double_tap_window_ms).contains(&elapsed);
            if in_window && last.marker == Some(id) {
                self.markers.remove(id);
                self.markers.select(None);
                self.last_down = None;
                // The release of a removal gesture must not place a marker
                self.suppress_next_tap = true;
                log::debug!("Double tap removed marker {:?}", id);
                return Outcome::MarkerRemoved(id);
            }
        }

        self.last_down = Some(LastDown {
            time_ms,
            marker: hit,
        });
        self.markers.select(hit);

        let mode = match self.view.side {
            Side::Wind if self.surface.is_inside_ruler_band(pos) => {
                self.view.active_band = self.surface.ruler_band_side(pos.x);
                DragMode::SlideLinearCursor
            }
            Side::Wind => DragMode::Rotate,
            Side::Calculator => DragMode::SlideRuler,
        };

        self.session = Some(DragSession {
            mode,
            origin: pos,
            max_displacement: 0.0,
        });
        log::debug!("Drag started: {:?} at ({:.0}, {:.0})", mode, pos.x, pos.y);
        Outcome::DragStarted(mode)
    }

    pub fn pointer_move(&mut self, pos: Vec2) -> Outcome {
        let Some(session) = self.session.as_mut() else {
            return Outcome::Unchanged;
        };
        session.track(pos);

        match session.mode {
            DragMode::None => return Outcome::Unchanged,
            DragMode::Rotate => {
                let mut degrees = self.surface.angle_from_center(pos);
                if self.settings.snap_rotation {
                    degrees = degrees.round();
                }
                self.view.set_rotation(degrees);
            }
            DragMode::SlideLinearCursor => {
                let ratio = self.surface.wind_cursor_ratio_at(pos.y);
                self.view.set_wind_cursor_ratio(ratio);
            }
            DragMode::SlideRuler => {
                self.view.set_rule_offset(pos.y);
            }
        }
        Outcome::ViewChanged
    }

    /// End the drag session and classify the gesture
    pub fn pointer_up(&mut self, pos: Vec2) -> Outcome {
        let Some(mut session) = self.session.take() else {
            return Outcome::Unchanged;
        };
        session.track(pos);

        let gesture = if session.max_displacement > self.settings.tap_slop_px {
            self.suppress_next_tap = true;
            Gesture::Drag
        } else {
            Gesture::Tap
        };
        log::debug!(
            "Drag ended: {:?} after {:.1}px ({:?})",
            session.mode,
            session.max_displacement,
            gesture
        );
        Outcome::DragEnded(gesture)
    }

    pub fn pointer_leave(&mut self) -> Outcome {
        match self.session.take() {
            Some(session) => {
                log::debug!("Drag cancelled: {:?} (pointer left)", session.mode);
                Outcome::DragEnded(Gesture::Cancelled)
            }
            None => Outcome::Unchanged,
        }
    }

    /// Place a marker unless the tap lands on one or closes a drag
    pub fn tap(&mut self, pos: Vec2) -> Outcome {
        if self.session.is_some() {
            return Outcome::Unchanged;
        }
        if std::mem::take(&mut self.suppress_next_tap) {
            log::debug!("Tap after drag suppressed");
            return Outcome::Unchanged;
        }
        if self.markers.find_hit(pos).is_some() {
            return Outcome::Unchanged;
        }

        let marker = self.markers.add(pos);
        Outcome::MarkerAdded(marker.id)
    }

    /// Switch faces: defaults for that side, markers cleared
    pub fn select_side(&mut self, side: Side) {
        if let Some(session) = self.session.take() {
            log::warn!("Side switch during {:?} drag; session ended", session.mode);
        }
        self.view = ViewState::for_side(side, &self.settings);
        self.markers.clear();
        self.last_down = None;
        self.suppress_next_tap = false;
        log::info!("Side switched to {}", side.as_str());
    }

    /// Default view state for the current side, markers cleared
    pub fn reset_all(&mut self) {
        self.session = None;
        self.view.reset();
        self.markers.clear();
        self.last_down = None;
        self.suppress_next_tap = false;
        log::info!("Reset position and markers");
    }

    /// Remove every marker, view state untouched
    pub fn clear_markers(&mut self) {
        self.markers.clear();
        self.last_down = None;
        log::info!("Markers cleared");
    }

    /// Marker list click: select, or deselect if already selected
    pub fn toggle_marker_selection(&mut self, id: MarkerId) {
        if self.markers.is_selected(id) {
            self.markers.select(None);
        } else if self.markers.get(id).is_some() {
            self.markers.select(Some(id));
        }
    }

    pub fn derived(&self) -> DerivedValues {
        DerivedValues::compute(&self.markers)
    }

    pub fn readouts(&self) -> Readouts {
        self.derived().readouts()
    }

    pub fn marker_list(&self) -> Vec<MarkerSummary> {
        self.markers.summaries()
    }

    pub fn status_readout(&self) -> StatusReadout {
        match self.view.side {
            Side::Wind => StatusReadout {
                title: "DISC ROTATION",
                value: format!("{}°", self.view.display_rotation().round() as u32 % 360),
            },
            Side::Calculator => StatusReadout {
                title: "RULER POSITION",
                value: format!("{:.0} px", self.view.rule_offset_px()),
            },
        }
    }

    /// Draw list for the current state
    pub fn scene(&self) -> Scene {
        scene::build(&self.surface, &self.view, &self.markers, &self.derived())
    }
}
