use prism_engine::coords::Vec2;
use prism_engine::input::{InputFrame, InputState, MouseButton};

/// Primary-button pointer snapshot for one frame, in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerInput {
    /// `None` while the pointer is outside the window.
    pub pos: Option<Vec2>,
    /// Primary button held.
    pub down: bool,
    /// Primary button went down this frame.
    pub pressed: bool,
    /// Primary button went up this frame.
    pub released: bool,
}

impl PointerInput {
    pub fn from_input(state: &InputState, frame: &InputFrame) -> Self {
        Self {
            pos: state.pointer_pos.map(Vec2::from),
            down: state.button_down(MouseButton::Left),
            pressed: frame.button_pressed(MouseButton::Left),
            released: frame.button_released(MouseButton::Left),
        }
    }

    #[inline]
    pub fn is_over(&self, rect: prism_engine::coords::Rect) -> bool {
        self.pos.is_some_and(|p| rect.contains(p))
    }
}

#[cfg(test)]
mod tests {
    use prism_engine::coords::Rect;
    use prism_engine::input::{ButtonState, InputEvent};

    use super::*;

    #[test]
    fn snapshot_reflects_press_this_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved { x: 5.0, y: 6.0 });
        state.apply_event(
            &mut frame,
            InputEvent::PointerButton {
                button: MouseButton::Left,
                state: ButtonState::Pressed,
            },
        );

        let p = PointerInput::from_input(&state, &frame);
        assert_eq!(p.pos, Some(Vec2::new(5.0, 6.0)));
        assert!(p.down && p.pressed && !p.released);
    }

    #[test]
    fn right_button_is_ignored() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(
            &mut frame,
            InputEvent::PointerButton {
                button: MouseButton::Right,
                state: ButtonState::Pressed,
            },
        );

        let p = PointerInput::from_input(&state, &frame);
        assert!(!p.down && !p.pressed);
    }

    #[test]
    fn absent_pointer_is_over_nothing() {
        let p = PointerInput::default();
        assert!(!p.is_over(Rect::new(-1e6, -1e6, 2e6, 2e6)));
    }
}
