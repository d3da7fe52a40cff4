//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers) and records into
//! a `RenderTarget` supplied by the frame.
//!
//! Convention:
//! - overlay geometry is in logical pixels (top-left origin, +Y down); the
//!   vertex shaders convert to NDC using a viewport uniform
//! - the triangle lives directly in clip space and is transformed on the GPU

mod ctx;
pub mod shapes;
pub mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
