use std::path::PathBuf;

use prism_engine::paint::Color;
use prism_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Demo settings. Everything has a default; nothing is persisted.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub initial_size: (f64, f64),

    /// Full turns per second.
    pub rotation_speed: f32,
    pub speed_range: (f32, f32),

    pub brightness: f32,
    pub brightness_range: (f32, f32),

    pub clear_color: Color,
    pub text_color: Color,

    /// Font used for the readouts. `None` searches common system locations.
    pub font_path: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "prism".to_string(),
            initial_size: (800.0, 600.0),
            rotation_speed: 0.33,
            speed_range: (0.0, 2.0),
            brightness: 1.0,
            brightness_range: (0.0, 1.0),
            clear_color: Color::BLACK,
            text_color: Color::WHITE,
            font_path: std::env::var_os("PRISM_FONT").map(PathBuf::from),
        }
    }
}

impl DemoConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.initial_size.0, self.initial_size.1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo() {
        let c = DemoConfig::default();
        assert_eq!(c.rotation_speed, 0.33);
        assert_eq!(c.speed_range, (0.0, 2.0));
        assert_eq!(c.brightness, 1.0);
        assert_eq!(c.brightness_range, (0.0, 1.0));
    }

    #[test]
    fn runtime_config_carries_title_and_size() {
        let rc = DemoConfig::default().runtime_config();
        assert_eq!(rc.title, "prism");
        assert_eq!(rc.initial_size, LogicalSize::new(800.0, 600.0));
    }
}
