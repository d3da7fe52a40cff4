//! Immediate-mode overlay widgets for prism.
//!
//! Widgets keep their own state, are updated from the frame's pointer input
//! and paint into a `prism_engine::scene::DrawList` through a [`Painter`].

pub mod label;
pub mod painter;
pub mod panel;
pub mod pointer;
pub mod slider;
pub mod widget;

pub use label::Label;
pub use painter::Painter;
pub use panel::Panel;
pub use pointer::PointerInput;
pub use slider::Slider;
pub use widget::Widget;
