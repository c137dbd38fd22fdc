//! Drawable primitives in surface pixel space

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::computer::{Rect, Side};

/// Linear RGBA, 0-1 per channel
pub type Color = [f32; 4];

/// Opaque color from a 0xRRGGBB literal
pub const fn rgb(hex: u32) -> Color {
    rgba(hex, 1.0)
}

/// Color from a 0xRRGGBB literal with alpha
pub const fn rgba(hex: u32, alpha: f32) -> Color {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
        alpha,
    ]
}

/// Colors for instrument elements
pub mod palette {
    use super::{Color, rgb, rgba};

    pub const BACKGROUND: Color = rgb(0xf5f5f5);
    pub const INK: Color = rgb(0x1e1e1e);
    pub const WHITE: Color = rgb(0xffffff);
    pub const MUTED: Color = rgb(0x666666);
    pub const BLUE: Color = rgb(0x0066cc);
    pub const RED: Color = rgb(0xcc0000);
    pub const DRIFT: Color = rgba(0xcc0000, 0.55);
    pub const DISC_FACE: Color = rgba(0xe6f2ff, 0.6);
    pub const DISC_FINE_GRID: Color = rgba(0x0066cc, 0.25);
    pub const DISC_GRID: Color = rgba(0x0066cc, 0.5);
    pub const DISC_ARC: Color = rgba(0x0066cc, 0.3);
    pub const BAND_FACE: Color = rgb(0xeef2f7);
    pub const BAND_EDGE: Color = rgb(0xcbd5e1);
    pub const BAND_TICK: Color = rgb(0x475569);
    pub const BAND_INK: Color = rgb(0x1e293b);
    pub const BAND_CAPTION: Color = rgb(0x334155);
    pub const CURSOR: Color = rgb(0x0ea5e9);
    pub const MOVABLE_FACE: Color = rgb(0xe6f2ff);
    pub const TIME: Color = rgb(0xff6600);
    pub const FUEL: Color = rgb(0x00cc66);
    pub const DISTANCE: Color = rgb(0x0099ff);
    pub const MARKER: Color = rgb(0xcc0000);
    pub const MARKER_SELECTED_WIND: Color = rgb(0xff6600);
    pub const MARKER_SELECTED_CALCULATOR: Color = rgb(0xff9900);
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextBaseline {
    Alphabetic,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    Sans,
    Monospace,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size_px: f32,
    pub bold: bool,
    pub family: FontFamily,
    pub color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

impl TextStyle {
    /// Centered sans-serif text
    pub const fn new(size_px: f32, bold: bool, color: Color) -> Self {
        Self {
            size_px,
            bold,
            family: FontFamily::Sans,
            color,
            align: TextAlign::Center,
            baseline: TextBaseline::Alphabetic,
        }
    }

    pub const fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub const fn baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub const fn monospace(mut self) -> Self {
        self.family = FontFamily::Monospace;
        self
    }
}

/// One drawable shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Primitive {
    Line {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
        /// Dash and gap lengths, solid when absent
        dash: Option<[f32; 2]>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Rect {
        rect: Rect,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// Filled convex polygon
    Polygon { points: Vec<Vec2>, fill: Color },
    Label {
        anchor: Vec2,
        text: String,
        style: TextStyle,
    },
}

/// What a primitive depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Background,
    Caption,
    AzimuthRing,
    AzimuthTick,
    AzimuthLabel,
    SpeedRing,
    SpeedLabel,
    WindDisc,
    DriftGuide,
    ReferenceArrow,
    RulerBand,
    RulerTick,
    RulerLabel,
    Cursor,
    CursorReadout,
    LinearScale,
    ScaleTick,
    ScaleLabel,
    ReferenceCursor,
    ResultWindow,
    Marker,
    MarkerLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawItem {
    pub role: Role,
    #[serde(flatten)]
    pub primitive: Primitive,
}

/// Draw list for one side, in painting order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub side: Side,
    pub width: f32,
    pub height: f32,
    pub items: Vec<DrawItem>,
}

impl Scene {
    pub fn new(side: Side, width: f32, height: f32) -> Self {
        Self {
            side,
            width,
            height,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, role: Role, primitive: Primitive) {
        self.items.push(DrawItem { role, primitive });
    }

    pub fn line(&mut self, role: Role, from: Vec2, to: Vec2, stroke: Stroke) {
        self.push(
            role,
            Primitive::Line {
                from,
                to,
                stroke,
                dash: None,
            },
        );
    }

    pub fn dashed_line(
        &mut self,
        role: Role,
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
        dash: [f32; 2],
    ) {
        self.push(
            role,
            Primitive::Line {
                from,
                to,
                stroke,
                dash: Some(dash),
            },
        );
    }

    pub fn circle(
        &mut self,
        role: Role,
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    ) {
        self.push(
            role,
            Primitive::Circle {
                center,
                radius,
                fill,
                stroke,
            },
        );
    }

    pub fn rect(&mut self, role: Role, rect: Rect, fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(role, Primitive::Rect { rect, fill, stroke });
    }

    pub fn polygon(&mut self, role: Role, points: Vec<Vec2>, fill: Color) {
        self.push(role, Primitive::Polygon { points, fill });
    }

    pub fn label(&mut self, role: Role, anchor: Vec2, text: impl Into<String>, style: TextStyle) {
        self.push(
            role,
            Primitive::Label {
                anchor,
                text: text.into(),
                style,
            },
        );
    }

    /// Items with the given role, in painting order
    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(move |item| item.role == role)
    }

    pub fn count(&self, role: Role) -> usize {
        self.with_role(role).count()
    }

    /// Label texts carrying the given role
    pub fn texts(&self, role: Role) -> Vec<&str> {
        self.with_role(role)
            .filter_map(|item| match &item.primitive {
                Primitive::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
