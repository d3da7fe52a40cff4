//! Per-shape payloads and their `DrawList` push helpers.

pub mod rect;
pub mod text;
