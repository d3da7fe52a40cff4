//! Transform math for the 3D pipeline.
//!
//! Matrices are `cgmath::Matrix4<f32>` (column-major, column vectors), which
//! matches the WGSL `mat4x4<f32>` layout byte for byte.

mod transform;

pub use transform::{rotate, scale, scale_by, scale_uniform, to_cols_array, translate, translate_by, Mat4};
