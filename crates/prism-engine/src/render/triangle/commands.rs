use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::math::{to_cols_array, Mat4};

/// Vertex-stage constant: the model transform, column-major.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TransformConstant {
    pub matrix: [[f32; 4]; 4],
}

impl From<Mat4> for TransformConstant {
    fn from(m: Mat4) -> Self {
        Self {
            matrix: to_cols_array(m),
        }
    }
}

/// Fragment-stage constant: brightness padded to a 16-byte uniform.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct BrightnessConstant {
    pub value: f32,
    pub _pad: [f32; 3],
}

impl BrightnessConstant {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            _pad: [0.0; 3],
        }
    }
}

/// Explicit per-frame input to the triangle draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInput {
    pub transform: Mat4,
    /// Passed through verbatim; the fragment stage multiplies color by it.
    pub brightness: f32,
}

impl Default for FrameInput {
    fn default() -> Self {
        use cgmath::SquareMatrix;
        Self {
            transform: Mat4::identity(),
            brightness: 1.0,
        }
    }
}

/// One step of the triangle draw, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawStep {
    SetPipeline,
    SetVertexBuffer { slot: u32 },
    SetVertexConstant { slot: u32, data: TransformConstant },
    SetFragmentConstant { slot: u32, data: BrightnessConstant },
    Draw { vertices: Range<u32>, instances: Range<u32> },
}

pub const VERTEX_BUFFER_SLOT: u32 = 0;
pub const CONSTANT_SLOT: u32 = 1;
pub const VERTEX_COUNT: u32 = 3;

/// The full step list for one frame.
pub fn draw_steps(input: &FrameInput) -> [DrawStep; 5] {
    [
        DrawStep::SetPipeline,
        DrawStep::SetVertexBuffer {
            slot: VERTEX_BUFFER_SLOT,
        },
        DrawStep::SetVertexConstant {
            slot: CONSTANT_SLOT,
            data: input.transform.into(),
        },
        DrawStep::SetFragmentConstant {
            slot: CONSTANT_SLOT,
            data: BrightnessConstant::new(input.brightness),
        },
        DrawStep::Draw {
            vertices: 0..VERTEX_COUNT,
            instances: 0..1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use cgmath::Vector3;

    use super::*;
    use crate::math::rotate;

    #[test]
    fn steps_follow_required_order() {
        let steps = draw_steps(&FrameInput::default());
        assert!(matches!(steps[0], DrawStep::SetPipeline));
        assert!(matches!(steps[1], DrawStep::SetVertexBuffer { slot: 0 }));
        assert!(matches!(steps[2], DrawStep::SetVertexConstant { slot: 1, .. }));
        assert!(matches!(steps[3], DrawStep::SetFragmentConstant { slot: 1, .. }));
        assert_eq!(
            steps[4],
            DrawStep::Draw {
                vertices: 0..3,
                instances: 0..1
            }
        );
    }

    #[test]
    fn brightness_is_copied_verbatim() {
        for brightness in [0.0, 0.25, 1.0, 1.7, -0.5] {
            let input = FrameInput {
                brightness,
                ..FrameInput::default()
            };
            let steps = draw_steps(&input);
            let DrawStep::SetFragmentConstant { data, .. } = &steps[3] else {
                panic!("fourth step must upload brightness");
            };
            assert_eq!(data.value, brightness);
        }
    }

    #[test]
    fn transform_is_uploaded_column_major() {
        let transform = rotate(0.8, Vector3::unit_z());
        let input = FrameInput {
            transform,
            brightness: 1.0,
        };
        let steps = draw_steps(&input);
        let DrawStep::SetVertexConstant { data, .. } = &steps[2] else {
            panic!("third step must upload the transform");
        };
        assert_eq!(data.matrix, to_cols_array(transform));
    }

    #[test]
    fn constants_have_uniform_friendly_sizes() {
        assert_eq!(std::mem::size_of::<TransformConstant>(), 64);
        assert_eq!(std::mem::size_of::<BrightnessConstant>(), 16);
    }
}
