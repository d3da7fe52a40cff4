use std::f32::consts::TAU;

use cgmath::Vector3;
use prism_engine::coords::Viewport;
use prism_engine::math::rotate;
use prism_engine::render::triangle::FrameInput;

/// Per-frame animation state: accumulated rotation and the two live parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDriver {
    /// Radians, kept in `[0, 2π)`.
    rotation: f32,
    /// Full turns per second.
    rotation_per_second: f32,
    brightness: f32,
    aspect_ratio: Option<f32>,
}

impl FrameDriver {
    pub fn new(rotation_per_second: f32, brightness: f32) -> Self {
        Self {
            rotation: 0.0,
            rotation_per_second,
            brightness,
            aspect_ratio: None,
        }
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn aspect_ratio(&self) -> Option<f32> {
        self.aspect_ratio
    }

    pub fn set_rotation_speed(&mut self, turns_per_second: f32) {
        self.rotation_per_second = turns_per_second;
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness;
    }

    /// Advances by `dt` seconds and returns the input for this frame's draw.
    pub fn tick(&mut self, dt: f32) -> FrameInput {
        self.rotation = (self.rotation + self.rotation_per_second * dt * TAU).rem_euclid(TAU);

        FrameInput {
            transform: rotate(self.rotation, Vector3::unit_z()),
            brightness: self.brightness,
        }
    }

    /// Records the drawable's aspect ratio. It is tracked only; the transform
    /// stays a pure rotation.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.aspect_ratio = Viewport::new(width as f32, height as f32).aspect_ratio();
        log::debug!("aspect ratio now {:?}", self.aspect_ratio);
    }
}
