//! Shape generation for 2D primitives
//!
//! Every function returns a plain triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::scene::Color;

/// Segment count for a circle of the given radius
pub fn segments_for_radius(radius: f32) -> u32 {
    ((radius * 0.5) as u32).clamp(12, 96)
}

fn push_quad(vertices: &mut Vec<Vertex>, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: Color) {
    // a-b-c, c-b-d
    vertices.push(Vertex::new(a.x, a.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(c.x, c.y, color));

    vertices.push(Vertex::new(c.x, c.y, color));
    vertices.push(Vertex::new(b.x, b.y, color));
    vertices.push(Vertex::new(d.x, d.y, color));
}

/// Thick line as a single quad; degenerate lines produce nothing
pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO || width <= 0.0 {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        from + perp,
        from - perp,
        to + perp,
        to - perp,
        color,
    );
    vertices
}

/// Line split into `dash` long pieces separated by `gap`
pub fn dashed_line(
    from: Vec2,
    to: Vec2,
    width: f32,
    color: Color,
    dash: f32,
    gap: f32,
) -> Vec<Vertex> {
    let length = from.distance(to);
    if dash <= 0.0 || gap < 0.0 {
        return line(from, to, width, color);
    }
    let dir = (to - from).normalize_or_zero();

    let mut vertices = Vec::new();
    let mut t = 0.0;
    while t < length {
        let end = (t + dash).min(length);
        vertices.extend(line(from + dir * t, from + dir * end, width, color));
        t += dash + gap;
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: Color,
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let inner_radius = inner_radius.max(0.0);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;
        let (d1, d2) = (Vec2::from_angle(theta1), Vec2::from_angle(theta2));

        push_quad(
            &mut vertices,
            center + d1 * inner_radius,
            center + d1 * outer_radius,
            center + d2 * inner_radius,
            center + d2 * outer_radius,
            color,
        );
    }

    vertices
}

pub fn rect_fill(min: Vec2, max: Vec2, color: Color) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        min,
        Vec2::new(max.x, min.y),
        Vec2::new(min.x, max.y),
        max,
        color,
    );
    vertices
}

/// Border centered on the rectangle edges
pub fn rect_outline(min: Vec2, max: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let half = width * 0.5;
    let corners = [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)];

    let mut vertices = Vec::with_capacity(24);
    for i in 0..4 {
        let (a, b) = (corners[i], corners[(i + 1) % 4]);
        // Extend along the edge so corners close
        let dir = (b - a).normalize_or_zero();
        vertices.extend(line(a - dir * half, b + dir * half, width, color));
    }
    vertices
}

/// Triangle fan over a convex polygon
pub fn polygon(points: &[Vec2], color: Color) -> Vec<Vertex> {
    let [first, rest @ ..] = points else {
        return Vec::new();
    };
    if rest.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((rest.len() - 1) * 3);
    for pair in rest.windows(2) {
        vertices.push(Vertex::new(first.x, first.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}
