use prism_engine::coords::Viewport;
use prism_ui::{Label, Painter, Panel, PointerInput, Slider, Widget};

use crate::config::DemoConfig;

const LABEL_SIZE: f32 = 16.0;

pub fn format_brightness(value: f32) -> String {
    format!("Brightness: {:.2}%", value * 100.0)
}

pub fn format_speed(value: f32) -> String {
    format!("Rotation speed: {:.2}", value)
}

/// The bottom-anchored brightness and rotation-speed controls.
pub struct ControlPanel {
    panel: Panel,
    brightness_label: Label,
    brightness: Slider,
    speed_label: Label,
    speed: Slider,
}

impl ControlPanel {
    pub fn new(config: &DemoConfig) -> Self {
        let (b_min, b_max) = config.brightness_range;
        let (s_min, s_max) = config.speed_range;

        let brightness = Slider::new(b_min, b_max, config.brightness);
        let speed = Slider::new(s_min, s_max, config.rotation_speed);

        Self {
            panel: Panel::default(),
            brightness_label: Label::new(format_brightness(brightness.value()))
                .size(LABEL_SIZE)
                .color(config.text_color),
            brightness,
            speed_label: Label::new(format_speed(speed.value()))
                .size(LABEL_SIZE)
                .color(config.text_color),
            speed,
        }
    }

    pub fn brightness(&self) -> f32 {
        self.brightness.value()
    }

    pub fn rotation_speed(&self) -> f32 {
        self.speed.value()
    }

    /// Updates both sliders from `pointer` and paints the panel.
    ///
    /// Returns `true` if either value changed this frame.
    pub fn show(
        &mut self,
        viewport: Viewport,
        pointer: &PointerInput,
        painter: &mut Painter<'_>,
    ) -> bool {
        let mut rows: [&mut dyn Widget; 4] = [
            &mut self.brightness_label,
            &mut self.brightness,
            &mut self.speed_label,
            &mut self.speed,
        ];
        let changed = self.panel.show(viewport, pointer, painter, &mut rows);

        if changed {
            self.refresh_labels();
        }
        changed
    }

    fn refresh_labels(&mut self) {
        self.brightness_label
            .set_text(format_brightness(self.brightness.value()));
        self.speed_label.set_text(format_speed(self.speed.value()));
    }
}

#[cfg(test)]
mod tests {
    use prism_engine::coords::{Rect, Vec2};
    use prism_engine::scene::DrawList;
    use prism_engine::text::FontSystem;

    use super::*;

    fn labels(controls: &ControlPanel) -> (&str, &str) {
        (&controls.brightness_label.text, &controls.speed_label.text)
    }

    fn slider_rects(controls: &ControlPanel, viewport: Viewport) -> (Rect, Rect) {
        let heights = [
            controls.brightness_label.height(),
            controls.brightness.height(),
            controls.speed_label.height(),
            controls.speed.height(),
        ];
        let rows = controls.panel.layout(viewport, &heights);
        (rows[1], rows[3])
    }

    // ── formatting ────────────────────────────────────────────────────────

    #[test]
    fn brightness_readout_is_percent_with_two_decimals() {
        assert_eq!(format_brightness(1.0), "Brightness: 100.00%");
        assert_eq!(format_brightness(0.5), "Brightness: 50.00%");
        assert_eq!(format_brightness(0.0), "Brightness: 0.00%");
    }

    #[test]
    fn speed_readout_has_two_decimals() {
        assert_eq!(format_speed(0.33), "Rotation speed: 0.33");
        assert_eq!(format_speed(2.0), "Rotation speed: 2.00");
    }

    // ── interaction ───────────────────────────────────────────────────────

    #[test]
    fn starts_from_configured_values() {
        let controls = ControlPanel::new(&DemoConfig::default());
        assert_eq!(controls.brightness(), 1.0);
        assert_eq!(controls.rotation_speed(), 0.33);
        assert_eq!(labels(&controls), ("Brightness: 100.00%", "Rotation speed: 0.33"));
    }

    #[test]
    fn dragging_speed_slider_updates_value_and_readout() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut controls = ControlPanel::new(&DemoConfig::default());
        let (_, speed_rect) = slider_rects(&controls, viewport);

        let pointer = PointerInput {
            pos: Some(Vec2::new(speed_rect.max().x + 50.0, speed_rect.center().y)),
            down: true,
            pressed: false,
            released: false,
        };
        let press = PointerInput {
            pos: Some(speed_rect.center()),
            pressed: true,
            ..pointer
        };

        let mut list = DrawList::new();
        let fonts = FontSystem::new();

        let mut painter = Painter::new(&mut list, &fonts, None, press);
        assert!(controls.show(viewport, &press, &mut painter));
        assert!((controls.rotation_speed() - 1.0).abs() < 1e-5);

        let mut painter = Painter::new(&mut list, &fonts, None, pointer);
        controls.show(viewport, &pointer, &mut painter);
        assert_eq!(controls.rotation_speed(), 2.0);
        assert_eq!(labels(&controls).1, "Rotation speed: 2.00");
        assert_eq!(controls.brightness(), 1.0);
    }
}
