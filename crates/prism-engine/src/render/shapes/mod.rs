//! Overlay shape renderers.

mod common;

pub mod atlas;
pub mod rect;
pub mod text;
