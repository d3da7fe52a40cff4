//! Input subsystem.
//!
//! The public API is platform-agnostic; the runtime translates winit events
//! into `InputEvent`s.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{ButtonState, InputEvent, Key, MouseButton};
