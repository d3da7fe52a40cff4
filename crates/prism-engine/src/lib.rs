//! Prism engine crate.
//!
//! Platform runtime, GPU device layer, transform math and the renderers used by
//! the triangle demo and its overlay widgets.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod math;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
