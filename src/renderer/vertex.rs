//! Vertex type for 2D tessellation

use bytemuck::{Pod, Zeroable};

use crate::scene::Color;

/// 2D vertex in surface pixels with a straight RGBA color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in an interleaved buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Interleaved `[x, y, r, g, b, a]` floats for upload
pub fn as_floats(vertices: &[Vertex]) -> &[f32] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_packed() {
        assert_eq!(Vertex::STRIDE, 24);
        let verts = [Vertex::new(1.0, 2.0, [0.0; 4]); 3];
        let floats = as_floats(&verts);
        assert_eq!(floats.len(), 18);
        assert_eq!(&floats[6..8], &[1.0, 2.0]);
    }
}
