//! Scene (draw stream) types for the 2D overlay.
//!
//! Stores renderer-agnostic draw commands and yields them in a deterministic
//! order (z-index, then insertion order).

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
