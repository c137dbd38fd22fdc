//! Scene tessellation
//!
//! Turns a draw list into a triangle list any GPU or software back end can
//! upload directly. Labels carry no geometry and are left to the host's text
//! renderer.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use crate::scene::{Primitive, Scene};

/// Triangles for every shape in painting order
pub fn tessellate(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for item in &scene.items {
        tessellate_primitive(&item.primitive, &mut vertices);
    }
    log::trace!(
        "Tessellated {} items into {} vertices",
        scene.items.len(),
        vertices.len()
    );
    vertices
}

fn tessellate_primitive(primitive: &Primitive, out: &mut Vec<Vertex>) {
    match primitive {
        Primitive::Line {
            from,
            to,
            stroke,
            dash,
        } => match dash {
            Some([on, off]) => out.extend(shapes::dashed_line(
                *from,
                *to,
                stroke.width,
                stroke.color,
                *on,
                *off,
            )),
            None => out.extend(shapes::line(*from, *to, stroke.width, stroke.color)),
        },
        Primitive::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let segments = shapes::segments_for_radius(*radius);
            if let Some(color) = fill {
                out.extend(shapes::circle(*center, *radius, *color, segments));
            }
            if let Some(stroke) = stroke {
                let half = stroke.width * 0.5;
                out.extend(shapes::ring(
                    *center,
                    radius - half,
                    radius + half,
                    stroke.color,
                    segments,
                ));
            }
        }
        Primitive::Rect { rect, fill, stroke } => {
            if let Some(color) = fill {
                out.extend(shapes::rect_fill(rect.min, rect.max, *color));
            }
            if let Some(stroke) = stroke {
                out.extend(shapes::rect_outline(
                    rect.min,
                    rect.max,
                    stroke.width,
                    stroke.color,
                ));
            }
        }
        Primitive::Polygon { points, fill } => out.extend(shapes::polygon(points, *fill)),
        Primitive::Label { .. } => {}
    }
}
