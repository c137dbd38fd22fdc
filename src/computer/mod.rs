//! Deterministic flight computer engine
//!
//! Everything the user can change lives here. This module must stay pure:
//! - Time arrives with the pointer events, never from a clock
//! - Stable iteration order (markers in insertion order)
//! - No rendering or platform dependencies
//! - Only `FlightComputer` mutates view state and markers

pub mod derived;
pub mod geometry;
pub mod interaction;
pub mod markers;
pub mod state;

pub use derived::{DerivedValues, Readouts, SENTINEL};
pub use geometry::{Rect, Surface, distance_between, ratio_from_vertical_position};
pub use interaction::{DragMode, FlightComputer, Gesture, Outcome, PointerEvent, StatusReadout};
pub use markers::{Marker, MarkerId, MarkerStore, MarkerSummary};
pub use state::{RulerBand, RulerBounds, Side, ViewState};
