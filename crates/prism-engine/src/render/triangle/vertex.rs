use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};

use super::commands::VERTEX_COUNT;

/// Distance of each corner from the origin, in clip-space units.
pub const TRIANGLE_RADIUS: f32 = 0.67;

/// Corner angles as fractions of a full turn, before the quarter-turn offset.
const CORNER_FRACTIONS: [f32; VERTEX_COUNT as usize] = [0.0, 0.33, 0.67];

/// Interleaved triangle vertex: position at offset 0, color at offset 8.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x3  // color
    ];

    /// One vertex per step, 20-byte stride.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// The three fixed corners: red, green, blue on a circle of radius 0.67,
/// starting straight up.
pub fn triangle_vertices() -> [Vertex; VERTEX_COUNT as usize] {
    std::array::from_fn(|i| {
        let angle = (2.0 * CORNER_FRACTIONS[i] + 0.5) * PI;
        let (sin, cos) = angle.sin_cos();

        let mut color = [0.0; 3];
        color[i % 3] = 1.0;

        Vertex {
            position: [TRIANGLE_RADIUS * cos, TRIANGLE_RADIUS * sin],
            color,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn three_vertices_in_rgb_order() {
        let v = triangle_vertices();
        assert_eq!(v.len() as u32, VERTEX_COUNT);
        assert_eq!(v[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(v[1].color, [0.0, 1.0, 0.0]);
        assert_eq!(v[2].color, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn vertices_sit_on_the_radius() {
        for v in triangle_vertices() {
            let [x, y] = v.position;
            assert!(((x * x + y * y).sqrt() - TRIANGLE_RADIUS).abs() < EPS);
        }
    }

    #[test]
    fn vertex_angles_match_corner_fractions() {
        let v = triangle_vertices();
        for (vertex, fraction) in v.iter().zip(CORNER_FRACTIONS) {
            let expected = (2.0 * fraction + 0.5) * PI;
            let [x, y] = vertex.position;
            assert!((x - TRIANGLE_RADIUS * expected.cos()).abs() < EPS);
            assert!((y - TRIANGLE_RADIUS * expected.sin()).abs() < EPS);
        }
    }

    #[test]
    fn first_vertex_points_up() {
        let [x, y] = triangle_vertices()[0].position;
        assert!(x.abs() < EPS);
        assert!((y - TRIANGLE_RADIUS).abs() < EPS);
    }

    #[test]
    fn layout_is_interleaved_twenty_bytes() {
        let layout = Vertex::layout();
        assert_eq!(std::mem::size_of::<Vertex>(), 20);
        assert_eq!(layout.array_stride, 20);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);

        let attrs: Vec<_> = layout
            .attributes
            .iter()
            .map(|a| (a.shader_location, a.offset, a.format))
            .collect();
        assert_eq!(
            attrs,
            vec![
                (0, 0, wgpu::VertexFormat::Float32x2),
                (1, 8, wgpu::VertexFormat::Float32x3),
            ]
        );
    }
}
